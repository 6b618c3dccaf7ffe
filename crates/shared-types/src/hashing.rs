//! # Hashing Port
//!
//! Hashing is injected into the subsystems so two honest nodes configured the
//! same way produce byte-identical artifacts.

use crate::entities::Hash;
use sha2::{Digest, Sha256};

/// Hashing port - computes a 32-byte digest over arbitrary bytes.
pub trait Hasher: Send + Sync {
    /// Compute the digest of `data`.
    fn compute(&self, data: &[u8]) -> Hash;
}

/// Default SHA-256 adapter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn compute(&self, data: &[u8]) -> Hash {
        let digest = Sha256::digest(data);
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        out
    }
}
