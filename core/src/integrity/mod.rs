// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Transaction integrity check
//!
//! Every instruction processed during a transaction is folded into a chained
//! digest, `digest' = SHA256(digest || p1 || p2 || len(data) || data)`,
//! starting from an all-zero digest. On completion the digest is compared
//! against [`ALLOWED_HASHES`], restricting signing to the exact instruction
//! sequences of audited transaction templates.
//!
//! Integrity state is tracked in the type of [`TxIntegrity`], so updating
//! before initialisation or finalising more than once does not compile:
//!
//! ```compile_fail
//! use ledger_fio_core::integrity::TxIntegrity;
//!
//! let mut i = TxIntegrity::new();
//! i.update(0x01, 0x00, &[]).unwrap();
//! ```
//!
//! ```compile_fail
//! use ledger_fio_core::integrity::TxIntegrity;
//!
//! let i = TxIntegrity::new().init();
//! let _ = i.finalize();
//! let _ = i.finalize();
//! ```
//!
//! Where state must be held between commands [`IntegritySlot`] provides the
//! same sequencing as a runtime state machine.

use core::marker::PhantomData;

use strum::{Display, EnumIter, EnumString, EnumVariantNames};
use zeroize::Zeroize;

use crate::{
    helpers::hash::{HashContext, Sha256, SHA_256_SIZE},
    Error,
};

mod allowed;
pub use allowed::ALLOWED_HASHES;

/// Maximum instruction constant data length
pub const MAX_CONST_DATA_LENGTH: usize = u8::MAX as usize;

/// Running transaction integrity digest
#[derive(Clone, PartialEq, Eq)]
pub struct IntegrityDigest([u8; SHA_256_SIZE]);

impl IntegrityDigest {
    /// Create a new (zeroed) integrity digest
    pub const fn new() -> Self {
        Self([0u8; SHA_256_SIZE])
    }

    /// Fetch digest bytes
    pub fn as_bytes(&self) -> &[u8; SHA_256_SIZE] {
        &self.0
    }

    /// Chain instruction parameters and constant data onto the digest
    fn chain(&mut self, p1: u8, p2: u8, const_data: &[u8]) -> Result<(), Error> {
        let len = u8::try_from(const_data.len()).map_err(|_| Error::InvalidData)?;

        let mut ctx = HashContext::<Sha256>::init();
        ctx.append(self.0)
            .append([p1])
            .append([p2])
            .append([len])
            .append(const_data);

        self.0.copy_from_slice(ctx.finalize().as_ref());

        Ok(())
    }

    /// Check whether the digest matches any of the provided entries
    pub fn is_allowed(&self, allowed: &[[u8; SHA_256_SIZE]]) -> bool {
        allowed.iter().any(|a| a == &self.0)
    }
}

impl AsRef<[u8]> for IntegrityDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Zeroize for IntegrityDigest {
    fn zeroize(&mut self) {
        self.0.zeroize()
    }
}

/// Debug format [IntegrityDigest] as hex
impl core::fmt::Debug for IntegrityDigest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for b in &self.0[..] {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Display [IntegrityDigest] as hex
impl core::fmt::Display for IntegrityDigest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for b in &self.0[..] {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Marker trait for [`TxIntegrity`] states
pub trait IntegrityState: sealed::Sealed {}

/// Integrity check not yet started
pub struct Uninitialized;

/// Integrity check accepting instructions
pub struct Active;

impl sealed::Sealed for Uninitialized {}
impl IntegrityState for Uninitialized {}

impl sealed::Sealed for Active {}
impl IntegrityState for Active {}

/// Transaction integrity check
///
/// Created in the [`Uninitialized`] state, [`TxIntegrity::init`] moves to
/// [`Active`] where instructions may be added, and [`TxIntegrity::finalize`]
/// consumes the check. Digest state is wiped on drop.
pub struct TxIntegrity<S: IntegrityState> {
    digest: IntegrityDigest,
    _state: PhantomData<S>,
}

impl TxIntegrity<Uninitialized> {
    /// Create a new (uninitialised) integrity check
    pub const fn new() -> Self {
        Self {
            digest: IntegrityDigest::new(),
            _state: PhantomData,
        }
    }

    /// Start the integrity check for a new transaction
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn init(self) -> TxIntegrity<Active> {
        #[cfg(feature = "log")]
        log::debug!("integrity init");

        TxIntegrity {
            digest: IntegrityDigest::new(),
            _state: PhantomData,
        }
    }
}

impl Default for TxIntegrity<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl TxIntegrity<Active> {
    /// Add an instruction to the integrity digest
    ///
    /// Constant data is limited to [`MAX_CONST_DATA_LENGTH`] bytes.
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn update(&mut self, p1: u8, p2: u8, const_data: &[u8]) -> Result<&IntegrityDigest, Error> {
        self.digest.chain(p1, p2, const_data)?;

        #[cfg(feature = "log")]
        log::trace!("integrity update p1: {p1:02x} p2: {p2:02x} digest: {}", self.digest);

        Ok(&self.digest)
    }

    /// Fetch the current digest
    pub fn digest(&self) -> &IntegrityDigest {
        &self.digest
    }

    /// Complete the integrity check against [`ALLOWED_HASHES`],
    /// returning whether the transaction matches an allowed template
    pub fn finalize(self) -> bool {
        self.finalize_with(ALLOWED_HASHES)
    }

    /// Complete the integrity check against the provided digests
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn finalize_with(self, allowed: &[[u8; SHA_256_SIZE]]) -> bool {
        let ok = self.digest.is_allowed(allowed);

        #[cfg(feature = "log")]
        match ok {
            true => log::info!("integrity check passed"),
            false => log::warn!("integrity check failed ({})", self.digest),
        }

        ok
    }
}

impl<S: IntegrityState> Drop for TxIntegrity<S> {
    fn drop(&mut self) {
        self.digest.zeroize();
    }
}

/// Runtime integrity state, reported by [`IntegritySlot::state`]
#[derive(Copy, Clone, PartialEq, Eq, Debug, EnumString, Display, EnumVariantNames, EnumIter)]
pub enum SlotState {
    Uninitialized,
    Active,
    Finalized,
}

/// Holder for a [`TxIntegrity`] check across dispatcher calls
///
/// Updating or finalising outside of the active state returns
/// [`Error::InvalidState`], indicating a sequencing defect in the caller.
/// Any failure clears the check so the transaction cannot proceed.
#[derive(Default)]
pub enum IntegritySlot {
    #[default]
    Uninitialized,
    Active(TxIntegrity<Active>),
    Finalized,
}

impl IntegritySlot {
    /// Create a new (empty) integrity slot
    pub const fn new() -> Self {
        Self::Uninitialized
    }

    /// Fetch the slot state
    pub fn state(&self) -> SlotState {
        match self {
            Self::Uninitialized => SlotState::Uninitialized,
            Self::Active(_) => SlotState::Active,
            Self::Finalized => SlotState::Finalized,
        }
    }

    /// Start the integrity check for a new transaction,
    /// discarding any prior state
    pub fn init(&mut self) {
        *self = Self::Active(TxIntegrity::new().init());
    }

    /// Add an instruction to the active integrity check
    pub fn update(&mut self, p1: u8, p2: u8, const_data: &[u8]) -> Result<(), Error> {
        let i = match self {
            Self::Active(i) => i,
            _ => {
                #[cfg(feature = "log")]
                log::error!("integrity update in state: {}", self.state());

                return Err(Error::InvalidState);
            }
        };

        let r = i.update(p1, p2, const_data).map(|_| ());
        if r.is_err() {
            self.clear();
        }

        r
    }

    /// Complete the active integrity check against [`ALLOWED_HASHES`]
    pub fn finalize(&mut self) -> Result<bool, Error> {
        self.finalize_with(ALLOWED_HASHES)
    }

    /// Complete the active integrity check against the provided digests
    pub fn finalize_with(&mut self, allowed: &[[u8; SHA_256_SIZE]]) -> Result<bool, Error> {
        match core::mem::replace(self, Self::Finalized) {
            Self::Active(i) => Ok(i.finalize_with(allowed)),
            s => {
                #[cfg(feature = "log")]
                log::error!("integrity finalize in state: {}", s.state());

                // Prior state is not restored, misuse fails closed
                drop(s);
                self.clear();

                Err(Error::InvalidState)
            }
        }
    }

    /// Discard integrity state (transaction complete or aborted)
    pub fn clear(&mut self) {
        *self = Self::Uninitialized;
    }
}
