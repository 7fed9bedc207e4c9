// Copyright (c) 2022-2023 The MobileCoin Foundation

use byteorder::{ByteOrder, LittleEndian};
use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, EnumString, EnumVariantNames};

use crate::Error;

/// Value format, describes how a field is to be interpreted
///
/// Numeric formats occupy the tag range `0x10..0x20`, see [`ValueFormat::is_number`].
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    EnumString,
    Display,
    EnumVariantNames,
    EnumIter,
    TryFromPrimitive,
)]
#[repr(u8)]
pub enum ValueFormat {
    /// Raw bytes, displayed as lowercase hex
    BufferShowAsHex = 0x01,
    /// 8-byte encoded FIO / EOSIO name
    Name = 0x02,
    /// Printable ASCII string
    AsciiString = 0x03,
    /// VarUInt length prefixed printable ASCII string
    AsciiStringWithLength = 0x04,
    /// Optional memo / hash / offline URL record
    MemoHash = 0x05,
    /// Token code, chain code and public address record
    ChainCodeTokenCodePublicAddr = 0x06,

    /// Little-endian u64 amount in SUFs
    FioAmount = 0x10,
    /// Little-endian u64
    Uint64 = 0x11,
    /// VarUInt limited to the u32 range
    VarUint32 = 0x12,
}

impl ValueFormat {
    /// Decode a raw format tag, unknown tags are rejected
    pub fn from_tag(tag: u8) -> Result<Self, Error> {
        Self::try_from_primitive(tag).map_err(|_| Error::InvalidData)
    }

    /// Check whether the format decodes to a number
    pub const fn is_number(&self) -> bool {
        let v = *self as u8;
        v >= 0x10 && v < 0x20
    }
}

/// Validation policy tag, paired with two bound arguments on the wire
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    EnumString,
    Display,
    EnumVariantNames,
    EnumIter,
    TryFromPrimitive,
)]
#[repr(u8)]
pub enum ValidationKind {
    /// No validation, both arguments must be zero
    None = 0x01,
    /// Value length must be within `[arg1, arg2]`
    InBufferLength = 0x02,
    /// Decoded number must be within `[arg1, arg2]`
    Number = 0x03,
}

/// Validation policy applied to a field
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Validation {
    /// No constraint
    None,
    /// Value length in bytes must lie within `min..=max`
    InBufferLength { min: u64, max: u64 },
    /// Decoded number must lie within `min..=max`,
    /// only legal for numeric formats
    Number { min: u64, max: u64 },
}

impl Validation {
    /// Build a validation policy from a raw tag and little-endian bound arguments
    pub fn from_raw(kind: u8, arg1: &[u8; 8], arg2: &[u8; 8]) -> Result<Self, Error> {
        let kind = ValidationKind::try_from_primitive(kind).map_err(|_| Error::InvalidData)?;

        let (min, max) = (LittleEndian::read_u64(arg1), LittleEndian::read_u64(arg2));

        let v = match kind {
            // Bounds supplied with no constraint indicate a misconfigured caller
            ValidationKind::None if min != 0 || max != 0 => return Err(Error::InvalidData),
            ValidationKind::None => Validation::None,
            ValidationKind::InBufferLength => Validation::InBufferLength { min, max },
            ValidationKind::Number => Validation::Number { min, max },
        };

        Ok(v)
    }

    /// Fetch the tag for this policy
    pub const fn kind(&self) -> ValidationKind {
        match self {
            Validation::None => ValidationKind::None,
            Validation::InBufferLength { .. } => ValidationKind::InBufferLength,
            Validation::Number { .. } => ValidationKind::Number,
        }
    }

    /// Check policy preconditions prior to decoding a value
    pub fn check(&self, format: ValueFormat, value: &[u8]) -> Result<(), Error> {
        let ok = match self {
            Validation::None => true,
            Validation::InBufferLength { min, max } => {
                let n = value.len() as u64;
                *min <= n && n <= *max
            }
            // Number validation implies a number type,
            // the range is checked once the value is decoded
            Validation::Number { .. } => format.is_number(),
        };

        match ok {
            true => Ok(()),
            false => Err(Error::InvalidData),
        }
    }

    /// Check a decoded number against the policy
    pub fn check_number(&self, n: u64) -> Result<u64, Error> {
        match self {
            Validation::Number { min, max } if n < *min || n > *max => Err(Error::InvalidData),
            _ => Ok(n),
        }
    }
}
