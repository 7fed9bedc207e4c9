// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Field value decoding
//!
//! Values are described by a [`ValueFormat`] and a [`Validation`] policy, and
//! are decoded either to a number via [`parse_value_to_u64`] or to a bounded
//! display string via [`parse_value_to_display`].
//!
//! Both entry points follow the same protocol:
//!
//! 1. decode the format and validation tags and check policy preconditions
//! 2. decode the value using the format specific decoder
//! 3. apply the numeric range check for [`Validation::Number`] policies
//! 4. return the result
//!
//! Outputs are only returned once every check has passed.

use crate::Error;

mod decode;
pub use decode::{
    MAX_CODE_LENGTH, MAX_OPTIONAL_LENGTH, MAX_PUBLIC_ADDR_LENGTH, NOT_IMPLEMENTED,
};

mod display;
pub use display::{DisplayBuffer, MAX_DISPLAY_VALUE_LENGTH};

mod format;
pub use format::{Validation, ValidationKind, ValueFormat};

pub mod varuint;

/// Maximum value length in bytes
pub const MAX_VALUE_LENGTH: usize = u8::MAX as usize;

/// Typed value decoding request
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ValueRequest<'a> {
    pub format: ValueFormat,
    pub validation: Validation,
    pub value: &'a [u8],
}

impl<'a> ValueRequest<'a> {
    /// Create a new value request, checking validation preconditions
    pub fn new(format: ValueFormat, validation: Validation, value: &'a [u8]) -> Result<Self, Error> {
        if value.len() > MAX_VALUE_LENGTH {
            return Err(Error::InvalidData);
        }

        validation.check(format, value)?;

        Ok(Self {
            format,
            validation,
            value,
        })
    }

    /// Create a value request from raw format and validation tags
    /// with little-endian validation arguments
    pub fn from_raw(
        format: u8,
        validation: u8,
        arg1: &[u8; 8],
        arg2: &[u8; 8],
        value: &'a [u8],
    ) -> Result<Self, Error> {
        let format = ValueFormat::from_tag(format)?;
        let validation = Validation::from_raw(validation, arg1, arg2)?;

        Self::new(format, validation, value)
    }

    /// Decode a numeric value
    pub fn to_u64(&self) -> Result<u64, Error> {
        let n = match self.format {
            ValueFormat::FioAmount | ValueFormat::Uint64 => decode::uint64(self.value)?,
            ValueFormat::VarUint32 => decode::varuint32(self.value)?,
            ValueFormat::BufferShowAsHex
            | ValueFormat::Name
            | ValueFormat::AsciiString
            | ValueFormat::AsciiStringWithLength
            | ValueFormat::MemoHash
            | ValueFormat::ChainCodeTokenCodePublicAddr => {
                #[cfg(feature = "log")]
                log::error!("format {} does not decode to a number", self.format);

                return Err(Error::InvalidData);
            }
        };

        self.validation.check_number(n)
    }

    /// Decode a value for display
    pub fn to_display(&self) -> Result<DisplayBuffer, Error> {
        let mut buff = DisplayBuffer::new();
        let v = self.value;

        match self.format {
            ValueFormat::BufferShowAsHex => decode::hex_dump(v, &mut buff)?,
            ValueFormat::Name => decode::name(v, &mut buff)?,
            ValueFormat::AsciiString => decode::ascii_string(v, &mut buff)?,
            ValueFormat::AsciiStringWithLength => decode::ascii_string_with_length(v, &mut buff)?,
            ValueFormat::MemoHash => decode::memo_hash(v, &mut buff)?,
            ValueFormat::ChainCodeTokenCodePublicAddr => {
                decode::chain_code_token_code_public_addr(v, &mut buff)?
            }
            ValueFormat::FioAmount => {
                let n = self.to_u64()?;
                crate::helpers::fmt_fio_amount(n, &mut buff)?
            }
            ValueFormat::Uint64 | ValueFormat::VarUint32 => {
                let n = self.to_u64()?;
                crate::helpers::fmt_u64(n, &mut buff)?
            }
        }

        #[cfg(feature = "log")]
        log::debug!("{}: {}", self.format, buff);

        Ok(buff)
    }
}

/// Decode a numeric field from raw format / validation tags and arguments
///
/// Only [`ValueFormat::FioAmount`], [`ValueFormat::Uint64`] and
/// [`ValueFormat::VarUint32`] are accepted, other formats and unknown tags
/// result in [`Error::InvalidData`].
pub fn parse_value_to_u64(
    format: u8,
    validation: u8,
    arg1: &[u8; 8],
    arg2: &[u8; 8],
    value: &[u8],
) -> Result<u64, Error> {
    ValueRequest::from_raw(format, validation, arg1, arg2, value)?.to_u64()
}

/// Decode a field for display from raw format / validation tags and arguments
pub fn parse_value_to_display(
    format: u8,
    validation: u8,
    arg1: &[u8; 8],
    arg2: &[u8; 8],
    value: &[u8],
) -> Result<DisplayBuffer, Error> {
    ValueRequest::from_raw(format, validation, arg1, arg2, value)?.to_display()
}
