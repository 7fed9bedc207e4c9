// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Vectors for field value decoding
//!

use anyhow::anyhow;
use log::debug;

use ledger_fio_core::parse::{
    parse_value_to_display, parse_value_to_u64, ValidationKind, ValueFormat, NOT_IMPLEMENTED,
};

/// Expected field decoding result
#[derive(Clone, PartialEq, Debug)]
pub enum Expected {
    /// Display decoding yields the provided string
    Display(&'static str),
    /// Numeric decoding yields the provided value
    Number(u64),
    /// Both display and numeric decoding are rejected
    Invalid,
}

/// Test vector for field decoding
#[derive(Clone, Debug)]
pub struct FieldVector {
    pub name: &'static str,
    pub format: u8,
    pub validation: u8,
    pub arg1: u64,
    pub arg2: u64,
    pub value: &'static [u8],
    pub expected: Expected,
}

impl FieldVector {
    const fn new(
        name: &'static str,
        format: ValueFormat,
        value: &'static [u8],
        expected: Expected,
    ) -> Self {
        Self {
            name,
            format: format as u8,
            validation: ValidationKind::None as u8,
            arg1: 0,
            arg2: 0,
            value,
            expected,
        }
    }

    const fn with_validation(mut self, kind: ValidationKind, arg1: u64, arg2: u64) -> Self {
        self.validation = kind as u8;
        self.arg1 = arg1;
        self.arg2 = arg2;
        self
    }

    /// Check vector against the field decoders
    pub fn check(&self) -> anyhow::Result<()> {
        let (a1, a2) = (self.arg1.to_le_bytes(), self.arg2.to_le_bytes());

        debug!("field vector: {} ({:02x?})", self.name, self.value);

        let display = parse_value_to_display(self.format, self.validation, &a1, &a2, self.value);
        let number = parse_value_to_u64(self.format, self.validation, &a1, &a2, self.value);

        match &self.expected {
            Expected::Display(s) => match display {
                Ok(d) if d.as_str() == *s => Ok(()),
                r => Err(anyhow!("{}: expected display '{s}', got {r:?}", self.name)),
            },
            Expected::Number(n) => match number {
                Ok(v) if v == *n => Ok(()),
                r => Err(anyhow!("{}: expected number {n}, got {r:?}", self.name)),
            },
            Expected::Invalid => match (display, number) {
                (Err(_), Err(_)) => Ok(()),
                r => Err(anyhow!("{}: expected rejection, got {r:?}", self.name)),
            },
        }
    }
}

/// Field decoding vectors
pub const FIELDS: &[FieldVector] = &[
    FieldVector::new(
        "length prefixed ascii",
        ValueFormat::AsciiStringWithLength,
        b"\x05hello",
        Expected::Display("hello"),
    ),
    FieldVector::new(
        "length prefixed ascii, declared length exceeds data",
        ValueFormat::AsciiStringWithLength,
        b"\x05hi",
        Expected::Invalid,
    ),
    FieldVector::new(
        "length prefixed ascii, trailing data",
        ValueFormat::AsciiStringWithLength,
        b"\x02hello",
        Expected::Invalid,
    ),
    FieldVector::new(
        "chain / token / address",
        ValueFormat::ChainCodeTokenCodePublicAddr,
        b"\x03USD\x03BTC\x06abc123",
        Expected::Display("BTC:USD:abc123"),
    ),
    FieldVector::new(
        "chain / token / address, truncated address",
        ValueFormat::ChainCodeTokenCodePublicAddr,
        b"\x03USD\x03BTC\x06abc12",
        Expected::Invalid,
    ),
    FieldVector::new(
        "chain / token / address, empty token code",
        ValueFormat::ChainCodeTokenCodePublicAddr,
        b"\x00\x03BTC\x06abc123",
        Expected::Invalid,
    ),
    FieldVector::new(
        "memo hash, offline url without hash",
        ValueFormat::MemoHash,
        &[0, 0, 1, 0, 0],
        Expected::Invalid,
    ),
    FieldVector::new(
        "memo hash, hash without offline url",
        ValueFormat::MemoHash,
        &[0, 1, 0, 0],
        Expected::Invalid,
    ),
    FieldVector::new(
        "memo hash, all absent",
        ValueFormat::MemoHash,
        &[0, 0, 0],
        Expected::Display(NOT_IMPLEMENTED),
    ),
    FieldVector::new(
        "memo hash, memo only",
        ValueFormat::MemoHash,
        b"\x01\x03abc\x00\x00",
        Expected::Display(NOT_IMPLEMENTED),
    ),
    FieldVector::new(
        "memo hash, hash and offline url",
        ValueFormat::MemoHash,
        b"\x00\x01\x02ab\x01\x01u",
        Expected::Display(NOT_IMPLEMENTED),
    ),
    FieldVector::new(
        "memo hash, invalid presence flag",
        ValueFormat::MemoHash,
        &[2, 0, 0],
        Expected::Invalid,
    ),
    FieldVector::new(
        "name",
        ValueFormat::Name,
        &[0x00, 0x00, 0x98, 0x0a, 0xd2, 0x0c, 0xa8, 0x5b],
        Expected::Display("fio.token"),
    ),
    FieldVector::new(
        "name, short",
        ValueFormat::Name,
        &[0x00, 0x00, 0x98, 0x0a, 0xd2, 0x0c, 0xa8],
        Expected::Invalid,
    ),
    FieldVector::new(
        "hex",
        ValueFormat::BufferShowAsHex,
        &[0xde, 0xad, 0xbe, 0xef],
        Expected::Display("deadbeef"),
    ),
    FieldVector::new(
        "ascii",
        ValueFormat::AsciiString,
        b"hello world",
        Expected::Display("hello world"),
    ),
    FieldVector::new(
        "ascii, control character",
        ValueFormat::AsciiString,
        b"hello\x07",
        Expected::Invalid,
    ),
    FieldVector::new(
        "ascii, within buffer length",
        ValueFormat::AsciiString,
        b"hello",
        Expected::Display("hello"),
    )
    .with_validation(ValidationKind::InBufferLength, 1, 5),
    FieldVector::new(
        "ascii, exceeds buffer length",
        ValueFormat::AsciiString,
        b"hello",
        Expected::Invalid,
    )
    .with_validation(ValidationKind::InBufferLength, 1, 4),
    FieldVector::new(
        "ascii, number validation",
        ValueFormat::AsciiString,
        b"15",
        Expected::Invalid,
    )
    .with_validation(ValidationKind::Number, 0, 20),
    FieldVector::new(
        "fio amount display",
        ValueFormat::FioAmount,
        &[0x00, 0xca, 0x9a, 0x3b, 0x00, 0x00, 0x00, 0x00],
        Expected::Display("1.000000000 FIO"),
    ),
    FieldVector::new(
        "fio amount",
        ValueFormat::FioAmount,
        &[0x00, 0xca, 0x9a, 0x3b, 0x00, 0x00, 0x00, 0x00],
        Expected::Number(1_000_000_000),
    ),
    FieldVector::new(
        "uint64 within range",
        ValueFormat::Uint64,
        &[15, 0, 0, 0, 0, 0, 0, 0],
        Expected::Number(15),
    )
    .with_validation(ValidationKind::Number, 10, 20),
    FieldVector::new(
        "uint64 above range",
        ValueFormat::Uint64,
        &[21, 0, 0, 0, 0, 0, 0, 0],
        Expected::Invalid,
    )
    .with_validation(ValidationKind::Number, 10, 20),
    FieldVector::new(
        "uint64, short",
        ValueFormat::Uint64,
        &[15, 0, 0, 0],
        Expected::Invalid,
    ),
    FieldVector::new(
        "varuint32 max",
        ValueFormat::VarUint32,
        &[0xff, 0xff, 0xff, 0xff, 0x0f],
        Expected::Number(u32::MAX as u64),
    ),
    FieldVector::new(
        "varuint32 display",
        ValueFormat::VarUint32,
        &[0xe5, 0x8e, 0x26],
        Expected::Display("624485"),
    ),
    FieldVector::new(
        "varuint32 overflow",
        ValueFormat::VarUint32,
        &[0x80, 0x80, 0x80, 0x80, 0x10],
        Expected::Invalid,
    ),
    FieldVector::new(
        "varuint32, overlong",
        ValueFormat::VarUint32,
        &[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x01],
        Expected::Invalid,
    ),
    FieldVector::new(
        "no validation, non-zero arguments",
        ValueFormat::AsciiString,
        b"hello",
        Expected::Invalid,
    )
    .with_validation(ValidationKind::None, 1, 0),
];

/// Run all field vectors
pub fn test() -> anyhow::Result<()> {
    for v in FIELDS {
        v.check()?;
    }

    Ok(())
}
