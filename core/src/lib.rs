// Copyright (c) 2022-2023 The MobileCoin Foundation

//! FIO hardware wallet core
//!
//! This provides the field decoding and transaction integrity components used
//! while signing FIO transactions on hardware wallets. Transport, command
//! dispatch and UI are left to the embedding application.
//!
//! ## Decoding fields
//!
//! Each field of an incoming transaction arrives as a format tag, a validation
//! policy with two 8-byte bound arguments, and the raw value bytes.
//! [`parse_value_to_display`][parse::parse_value_to_display] turns these into a
//! bounded [`DisplayBuffer`][parse::DisplayBuffer] for rendering, and
//! [`parse_value_to_u64`][parse::parse_value_to_u64] extracts numeric values
//! (amounts, fees, counters) for further checks.
//!
//! ```
//! use ledger_fio_core::parse::{parse_value_to_display, ValidationKind, ValueFormat};
//!
//! let d = parse_value_to_display(
//!     ValueFormat::AsciiStringWithLength as u8,
//!     ValidationKind::InBufferLength as u8,
//!     &1u64.to_le_bytes(),
//!     &32u64.to_le_bytes(),
//!     b"\x05hello",
//! )
//! .unwrap();
//!
//! assert_eq!(d.as_str(), "hello");
//! ```
//!
//! ## Transaction integrity
//!
//! Every instruction of a transaction is folded into a chained SHA-256 digest
//! via [`TxIntegrity`][integrity::TxIntegrity]. Once the last instruction has
//! been processed the digest is compared against a fixed allow-list of audited
//! transaction templates, signing _MUST_ only proceed when this passes.
//!
//! 1. Call [`TxIntegrity::init`][integrity::TxIntegrity::init] when the transaction starts
//! 2. Call [`TxIntegrity::update`][integrity::TxIntegrity::update] once per instruction
//!    with the instruction parameters and constant data
//! 3. Call [`TxIntegrity::finalize`][integrity::TxIntegrity::finalize] once, prior to signing
//!
//! Dispatchers that keep the state between commands can use
//! [`IntegritySlot`][integrity::IntegritySlot], which reports out-of-order use
//! as [`Error::InvalidState`].

#![cfg_attr(not(feature = "std"), no_std)]

mod error;
pub use error::Error;

pub mod helpers;

pub mod integrity;

pub mod parse;
