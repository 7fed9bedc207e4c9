// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Formatting, encoding and hashing helpers used by the field decoders
//! and integrity check.

use core::fmt::Write;

use crate::{parse::DisplayBuffer, Error};

pub mod hash;

pub mod name;

pub mod text;

/// SUFs (smallest units of FIO) per FIO
pub const SCALAR_FIO: u64 = 1_000_000_000;

/// Format a plain unsigned integer
pub fn fmt_u64(n: u64, buff: &mut DisplayBuffer) -> Result<(), Error> {
    write!(buff, "{n}").map_err(|_| Error::InvalidData)
}

/// Format an amount in SUFs as FIO with full precision,
/// such that distinct amounts always render distinctly.
pub fn fmt_fio_amount(amount: u64, buff: &mut DisplayBuffer) -> Result<(), Error> {
    let whole = amount / SCALAR_FIO;
    let frac = amount % SCALAR_FIO;

    // NOTE THAT UNIT STRINGS MUST BE HARDCODED TO AVOID PIC issues with the ledger
    write!(buff, "{whole}.{frac:09} FIO").map_err(|_| Error::InvalidData)
}
