// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Audited transaction template digests
//!
//! Each entry is the final [`TxIntegrity`][super::TxIntegrity] digest for the
//! instruction sequence of a reviewed transaction template.

use const_decoder::Decoder;

use crate::helpers::hash::SHA_256_SIZE;

/// `trnsfiopubky`
const TRNSFIOPUBKY: [u8; SHA_256_SIZE] =
    Decoder::Hex.decode(b"b2aab041d8c00c45224cca7f7660207acc16717184173cb11283b7e0e6e2aa98");

/// `newfundsreq` with memo
const NEWFUNDSREQ_MEMO: [u8; SHA_256_SIZE] =
    Decoder::Hex.decode(b"08343deadb22e2e155d6f8bee0328e25da3cea6eb9e2143f1355f331e7f70267");

/// `newfundsreq` with hash and offline URL
const NEWFUNDSREQ_HASH: [u8; SHA_256_SIZE] =
    Decoder::Hex.decode(b"6025c438b77f554f7f594b58a93557f9204436bbd29a5ce6906dd431556ddaf1");

/// Test templates: basic commands
#[cfg(feature = "devel")]
const DEVEL_BASIC: [u8; SHA_256_SIZE] =
    Decoder::Hex.decode(b"8ae37fe495027ac109de2ee3f79539140fd56aa56a50d3e996830e033eda3676");

/// Test templates: show data
#[cfg(feature = "devel")]
const DEVEL_SHOW_DATA: [u8; SHA_256_SIZE] =
    Decoder::Hex.decode(b"e66126ce7557f130ca99d7a3051c813680fa4102d7915cbd68e6e361ef857103");

/// Test templates: counted section
#[cfg(feature = "devel")]
const DEVEL_COUNTED_SECTION: [u8; SHA_256_SIZE] =
    Decoder::Hex.decode(b"2c550f1f218d013a027d2b98befd5b8231c57dcfe363456a6e9c9ccfb7a53b30");

/// Test templates: storage
#[cfg(feature = "devel")]
const DEVEL_STORAGE: [u8; SHA_256_SIZE] =
    Decoder::Hex.decode(b"3cc2a20dfb3bdef4dd17f9971cc8421ac39f6a639d0d5d9fb424cf6be57c3829");

/// Test templates: DH encryption
#[cfg(feature = "devel")]
const DEVEL_DH: [u8; SHA_256_SIZE] =
    Decoder::Hex.decode(b"a370531ef33ebe293cb7cdd3e42be019a0dfb12c92a1086cd80bd4c537ced2ea");

/// Test templates: DH encryption with counted sections
#[cfg(feature = "devel")]
const DEVEL_DH_COUNTED_SECTIONS: [u8; SHA_256_SIZE] =
    Decoder::Hex.decode(b"3294cbbb5216fbe3ffba8a8fdd9da64b7d278d8853d0fe529602ed5d968620f0");

/// Digests of transaction templates permitted for signing
#[cfg(not(feature = "devel"))]
pub const ALLOWED_HASHES: &[[u8; SHA_256_SIZE]] =
    &[TRNSFIOPUBKY, NEWFUNDSREQ_MEMO, NEWFUNDSREQ_HASH];

/// Digests of transaction templates permitted for signing,
/// extended with test templates
#[cfg(feature = "devel")]
pub const ALLOWED_HASHES: &[[u8; SHA_256_SIZE]] = &[
    DEVEL_BASIC,
    DEVEL_SHOW_DATA,
    DEVEL_COUNTED_SECTION,
    DEVEL_STORAGE,
    DEVEL_DH,
    DEVEL_DH_COUNTED_SECTIONS,
    TRNSFIOPUBKY,
    NEWFUNDSREQ_MEMO,
    NEWFUNDSREQ_HASH,
];
