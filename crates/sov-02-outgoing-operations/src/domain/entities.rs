//! # Domain Entities
//!
//! Core entities for the outgoing operations pool.

use serde::{Deserialize, Serialize};
use shared_types::Hash;
use std::collections::BTreeMap;
use std::time::Duration;

/// An outbound cross-chain operation awaiting confirmation.
///
/// Identity is the `hash`; `payloads` maps opaque sub-keys (e.g. per-bridge
/// fragments) to their payload bytes. Ordering of sub-keys is fixed by the
/// `BTreeMap` so marshalling is deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingOperation {
    /// Operation hash (unique identifier).
    pub hash: Hash,
    /// Sub-key to payload bytes.
    pub payloads: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl OutgoingOperation {
    /// Create a new operation.
    pub fn new(hash: Hash, payloads: BTreeMap<Vec<u8>, Vec<u8>>) -> Self {
        Self { hash, payloads }
    }

    /// Create an operation with a single payload under sub-key `0`.
    pub fn single(hash: Hash, payload: Vec<u8>) -> Self {
        let mut payloads = BTreeMap::new();
        payloads.insert(vec![0u8], payload);
        Self { hash, payloads }
    }
}

/// A pool entry: operation plus its absolute expiry.
///
/// Created on insert and read-only thereafter; the expiry is never extended.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    /// The stored operation.
    pub operation: OutgoingOperation,
    /// Absolute expiry (duration since Unix epoch).
    pub expires_at: Duration,
}

/// Pool configuration.
#[derive(Clone, Debug)]
pub struct OutgoingPoolConfig {
    /// Period after which an un-deleted entry becomes "unconfirmed".
    pub confirmation_timeout: Duration,
}

impl Default for OutgoingPoolConfig {
    fn default() -> Self {
        Self { confirmation_timeout: Duration::from_secs(120) }
    }
}

impl OutgoingPoolConfig {
    /// Create config for testing.
    pub fn for_testing() -> Self {
        Self { confirmation_timeout: Duration::from_secs(10) }
    }
}
