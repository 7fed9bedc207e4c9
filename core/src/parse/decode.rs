// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Field decoders
//!
//! Each decoder operates on a (policy validated) byte range and either returns
//! a number or writes into a [`DisplayBuffer`]. Any malformed input results in
//! [`Error::InvalidData`].

use byteorder::{ByteOrder, LittleEndian};
use static_assertions::const_assert;

use crate::{
    helpers::{name::name_to_string, text::validate_text},
    Error,
};

use super::{varuint, DisplayBuffer, MAX_DISPLAY_VALUE_LENGTH};

/// Maximum token / chain code length
pub const MAX_CODE_LENGTH: usize = 10;

/// Maximum public address length
pub const MAX_PUBLIC_ADDR_LENGTH: u64 = 128;

/// Upper bound (exclusive) for optional section lengths
pub const MAX_OPTIONAL_LENGTH: u8 = 127;

/// Placeholder for values that are validated but not rendered
pub const NOT_IMPLEMENTED: &str = "NOT IMPLEMENTED";

// `<chain>:<token>:<address>` with terminator must always fit
const_assert!(
    MAX_CODE_LENGTH + 1 + MAX_CODE_LENGTH + 1 + (MAX_PUBLIC_ADDR_LENGTH as usize)
        < MAX_DISPLAY_VALUE_LENGTH
);

/// Decode a fixed width little-endian u64
pub fn uint64(value: &[u8]) -> Result<u64, Error> {
    if value.len() != 8 {
        return Err(Error::InvalidData);
    }

    Ok(LittleEndian::read_u64(value))
}

/// Decode a VarUInt occupying the whole range and limited to u32
pub fn varuint32(value: &[u8]) -> Result<u64, Error> {
    let (n, read) = varuint::decode(value)?;

    if read != value.len() || n > u32::MAX as u64 {
        return Err(Error::InvalidData);
    }

    Ok(n)
}

/// Display raw bytes as hex
pub fn hex_dump(value: &[u8], buff: &mut DisplayBuffer) -> Result<(), Error> {
    buff.push_hex(value)
}

/// Display a printable ASCII string
pub fn ascii_string(value: &[u8], buff: &mut DisplayBuffer) -> Result<(), Error> {
    buff.push_text(value)
}

/// Display a VarUInt length prefixed ASCII string
pub fn ascii_string_with_length(value: &[u8], buff: &mut DisplayBuffer) -> Result<(), Error> {
    let (len, read) = varuint::decode(value)?;

    // Declared length must account for all remaining data
    match (read as u64).checked_add(len) {
        Some(n) if n == value.len() as u64 => (),
        _ => return Err(Error::InvalidData),
    }

    buff.push_text(&value[read..])
}

/// Display an encoded name
pub fn name(value: &[u8], buff: &mut DisplayBuffer) -> Result<(), Error> {
    name_to_string(value, buff)
}

/// Validate an optional section starting at `index`,
/// returning whether it is present and the index of the following section
fn optional_section(value: &[u8], index: usize) -> Result<(bool, usize), Error> {
    let present = *value.get(index).ok_or(Error::InvalidData)?;

    match present {
        0 => Ok((false, index + 1)),
        1 => {
            let len = *value.get(index + 1).ok_or(Error::InvalidData)?;
            if len >= MAX_OPTIONAL_LENGTH {
                return Err(Error::InvalidData);
            }

            let next = index + 2 + len as usize;
            if next > value.len() {
                return Err(Error::InvalidData);
            }

            Ok((true, next))
        }
        _ => Err(Error::InvalidData),
    }
}

/// Validate a memo / hash / offline URL record
///
/// ```text
/// HAS_MEMO (0x00 | 0x01) [MEMO_LEN (< 127) MEMO]
/// HAS_HASH (0x00 | 0x01) [HASH_LEN (< 127) HASH]
/// HAS_URL  (0x00 | 0x01) [URL_LEN  (< 127) URL ]
/// ```
///
/// The hash and offline URL must be present together. Contents are not
/// rendered, a placeholder is displayed once the record is validated.
pub fn memo_hash(value: &[u8], buff: &mut DisplayBuffer) -> Result<(), Error> {
    let (_has_memo, index) = optional_section(value, 0)?;
    let (has_hash, index) = optional_section(value, index)?;
    let (has_offline_url, _index) = optional_section(value, index)?;

    if has_hash != has_offline_url {
        return Err(Error::InvalidData);
    }

    buff.push_str(NOT_IMPLEMENTED)
}

/// Display a token code / chain code / public address record
/// as `<chain_code>:<token_code>:<public_address>`
///
/// ```text
/// TOKEN_LEN (1..=10) TOKEN_CODE
/// CHAIN_LEN (1..=10) CHAIN_CODE
/// ADDR_LEN (VarUInt, 1..=128) PUBLIC_ADDR
/// ```
pub fn chain_code_token_code_public_addr(
    value: &[u8],
    buff: &mut DisplayBuffer,
) -> Result<(), Error> {
    let mut index = 0;

    let token_code = code(value, &mut index)?;
    let chain_code = code(value, &mut index)?;

    let (addr_len, read) = varuint::decode(&value[index..])?;
    index += read;

    if !(1..=MAX_PUBLIC_ADDR_LENGTH).contains(&addr_len)
        || value.len() != index + addr_len as usize
    {
        return Err(Error::InvalidData);
    }
    let public_addr = &value[index..];

    validate_text(token_code)?;
    validate_text(chain_code)?;
    validate_text(public_addr)?;

    buff.push_text(chain_code)?;
    buff.push_str(":")?;
    buff.push_text(token_code)?;
    buff.push_str(":")?;
    buff.push_text(public_addr)
}

/// Read a single byte length prefixed token / chain code
fn code<'a>(value: &'a [u8], index: &mut usize) -> Result<&'a [u8], Error> {
    let len = *value.get(*index).ok_or(Error::InvalidData)? as usize;
    if !(1..=MAX_CODE_LENGTH).contains(&len) {
        return Err(Error::InvalidData);
    }

    let c = value.get(*index + 1..*index + 1 + len).ok_or(Error::InvalidData)?;
    *index += 1 + len;

    Ok(c)
}
