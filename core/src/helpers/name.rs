// Copyright (c) 2022-2023 The MobileCoin Foundation

//! FIO / EOSIO name decoding
//!
//! Names are 64-bit little-endian values holding up to 12 five-bit
//! characters followed by one four-bit character.

use byteorder::{ByteOrder, LittleEndian};
use static_assertions::{const_assert, const_assert_eq};

use crate::{
    parse::{DisplayBuffer, MAX_DISPLAY_VALUE_LENGTH},
    Error,
};

/// Encoded name length in bytes
pub const NAME_VAR_LENGTH: usize = 8;

/// Maximum decoded name length in characters
pub const NAME_MAX_CHARS: usize = 13;

const_assert_eq!(NAME_VAR_LENGTH, core::mem::size_of::<u64>());
const_assert!(NAME_MAX_CHARS < MAX_DISPLAY_VALUE_LENGTH);

const CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// Decode an encoded name into the display buffer, trailing `.` are trimmed
pub fn name_to_string(value: &[u8], buff: &mut DisplayBuffer) -> Result<(), Error> {
    if value.len() != NAME_VAR_LENGTH {
        return Err(Error::InvalidData);
    }

    let mut n = LittleEndian::read_u64(value);
    let mut s = [b'.'; NAME_MAX_CHARS];

    for i in 0..NAME_MAX_CHARS {
        // The final character only carries four bits
        let (mask, shift) = match i {
            0 => (0x0f, 4),
            _ => (0x1f, 5),
        };

        s[NAME_MAX_CHARS - 1 - i] = CHARMAP[(n & mask) as usize];
        n >>= shift;
    }

    let l = s.iter().rposition(|c| *c != b'.').map(|i| i + 1).unwrap_or(0);

    buff.push_text(&s[..l])
}
