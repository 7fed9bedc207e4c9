// Copyright (c) 2022-2023 The MobileCoin Foundation

use crate::Error;

/// Check a byte range contains only printable ASCII (`0x20..=0x7e`)
pub fn validate_text(b: &[u8]) -> Result<(), Error> {
    match b.iter().all(|c| (0x20..=0x7e).contains(c)) {
        true => Ok(()),
        false => {
            #[cfg(feature = "log")]
            log::debug!("invalid text: {:02x?}", b);

            Err(Error::InvalidData)
        }
    }
}
