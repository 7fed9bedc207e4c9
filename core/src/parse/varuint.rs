// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Variable length unsigned integer decoding
//!
//! Values are encoded in 7-bit groups, least significant group first, with the
//! high bit of each byte set when more bytes follow.

use crate::Error;

/// Maximum number of bytes read for a single value, bounds the
/// accumulator to 64 bits (9 * 7 = 63)
pub const MAX_VARUINT_LENGTH: usize = 9;

/// Decode a VarUInt from the start of `value`,
/// returning the decoded value and the number of bytes consumed
pub fn decode(value: &[u8]) -> Result<(u64, usize), Error> {
    let mut n = 0u64;

    for (i, b) in value.iter().enumerate() {
        if i >= MAX_VARUINT_LENGTH {
            break;
        }

        n |= u64::from(b & 0x7f) << (7 * i);

        if b & 0x80 == 0 {
            #[cfg(feature = "log")]
            log::trace!("varuint: {} ({} bytes)", n, i + 1);

            return Ok((n, i + 1));
        }
    }

    // Range exhausted or continuation past the final permitted byte
    Err(Error::InvalidData)
}
