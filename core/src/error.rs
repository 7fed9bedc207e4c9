// Copyright (c) 2022-2023 The MobileCoin Foundation

/// Field decoding and integrity errors
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
#[repr(u8)]
pub enum Error {
    /// Malformed length, bound, flag, tag or value
    #[cfg_attr(feature = "thiserror", error("invalid data"))]
    InvalidData = 0x00,

    /// Integrity state used before init or after finalize
    ///
    /// This indicates a defect in the driving dispatcher rather than bad input,
    /// callers should abort the transaction and must not retry.
    #[cfg_attr(feature = "thiserror", error("invalid integrity state"))]
    InvalidState = 0x01,
}

impl Error {
    /// Status code for reporting to the host
    pub const fn code(&self) -> u8 {
        *self as u8
    }
}
