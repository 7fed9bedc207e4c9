// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Incremental hashing helpers, generic over the hash function and
//! output width.

pub use sha2::{
    digest::{Digest, Output},
    Sha256,
};

/// SHA-256 digest size in bytes
pub const SHA_256_SIZE: usize = 32;

/// Incremental hash context
#[derive(Clone)]
pub struct HashContext<D: Digest> {
    inner: D,
}

impl<D: Digest> HashContext<D> {
    /// Start a new hash computation
    pub fn init() -> Self {
        Self { inner: D::new() }
    }

    /// Append data to the hash
    pub fn append(&mut self, b: impl AsRef<[u8]>) -> &mut Self {
        #[cfg(feature = "log")]
        log::trace!("hash append: {:02x?}", b.as_ref());

        self.inner.update(b);
        self
    }

    /// Digest size in bytes
    pub fn output_size() -> usize {
        <D as Digest>::output_size()
    }

    /// Consume the context and return the digest
    pub fn finalize(self) -> Output<D> {
        self.inner.finalize()
    }
}
