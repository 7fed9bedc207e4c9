// Copyright (c) 2022-2023 The MobileCoin Foundation

use core::{fmt, str::from_utf8};

use heapless::String;

use crate::{helpers::text::validate_text, Error};

/// Display buffer size in bytes, including the NUL terminator
pub const MAX_DISPLAY_VALUE_LENGTH: usize = 200;

/// Fixed capacity display buffer for decoded field values
///
/// Writes are capacity checked against [`DisplayBuffer::CAPACITY`] so the
/// content plus NUL terminator always fits in [`MAX_DISPLAY_VALUE_LENGTH`],
/// and only ever contain printable ASCII.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct DisplayBuffer(String<MAX_DISPLAY_VALUE_LENGTH>);

impl DisplayBuffer {
    /// Maximum display length in characters (excluding terminator)
    pub const CAPACITY: usize = MAX_DISPLAY_VALUE_LENGTH - 1;

    /// Create a new (empty) display buffer
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Fetch buffer contents
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remaining characters available for writing
    pub fn remaining(&self) -> usize {
        Self::CAPACITY - self.0.len()
    }

    /// Append a string, failing without writing if this would exceed capacity
    pub fn push_str(&mut self, s: &str) -> Result<(), Error> {
        if s.len() > self.remaining() {
            return Err(Error::InvalidData);
        }

        self.0.push_str(s).map_err(|_| Error::InvalidData)
    }

    /// Validate and append printable text
    pub fn push_text(&mut self, b: &[u8]) -> Result<(), Error> {
        validate_text(b)?;

        let s = from_utf8(b).map_err(|_| Error::InvalidData)?;
        self.push_str(s)
    }

    /// Append lowercase hex encoding of the provided bytes
    pub fn push_hex(&mut self, b: &[u8]) -> Result<(), Error> {
        let n = b.len() * 2;
        if n > self.remaining() {
            return Err(Error::InvalidData);
        }

        let mut tmp = [0u8; MAX_DISPLAY_VALUE_LENGTH];
        hex::encode_to_slice(b, &mut tmp[..n]).map_err(|_| Error::InvalidData)?;

        let s = from_utf8(&tmp[..n]).map_err(|_| Error::InvalidData)?;
        self.push_str(s)
    }

    /// Write NUL terminated contents to a host display buffer,
    /// returning the string length (excluding terminator)
    pub fn write_nul_terminated(&self, out: &mut [u8; MAX_DISPLAY_VALUE_LENGTH]) -> usize {
        let b = self.0.as_bytes();

        out[..b.len()].copy_from_slice(b);
        out[b.len()] = 0;

        b.len()
    }
}

/// Bounded [`fmt::Write`] for use with `write!`
impl fmt::Write for DisplayBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s).map_err(|_| fmt::Error)
    }
}

impl AsRef<str> for DisplayBuffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<&str> for DisplayBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for DisplayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for DisplayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
