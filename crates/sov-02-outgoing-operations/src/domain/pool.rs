//! # Outgoing Operations Pool
//!
//! Hash-indexed expiring store behind a single mutex.
//!
//! ## Invariants Enforced
//!
//! - At most one entry per hash (`add` is idempotent on the hash).
//! - An entry's expiry is fixed at insertion and never extended.
//! - The unconfirmed scan observes a consistent snapshot: it runs entirely
//!   under the lock, so an entry added mid-scan is never classified as
//!   expired and a concurrent delete cannot be observed halfway.

use super::entities::{CacheEntry, OutgoingOperation, OutgoingPoolConfig};
use parking_lot::Mutex;
use shared_types::{Hash, TimeSource};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Expiring store of outgoing operations keyed by hash.
///
/// All operations share one critical section; reads are not optimized over
/// writes. Contention here is low (one producer, one confirmation observer,
/// one resend loop), so simplicity wins.
pub struct OutgoingOperationsPool {
    config: OutgoingPoolConfig,
    time_source: Arc<dyn TimeSource>,
    entries: Mutex<HashMap<Hash, CacheEntry>>,
}

impl OutgoingOperationsPool {
    /// Create a new pool with the given config and time source.
    pub fn new(config: OutgoingPoolConfig, time_source: Arc<dyn TimeSource>) -> Self {
        Self { config, time_source, entries: Mutex::new(HashMap::new()) }
    }

    /// Create a pool with default configuration and the system clock.
    pub fn with_defaults() -> Self {
        Self::new(
            OutgoingPoolConfig::default(),
            Arc::new(shared_types::SystemTimeSource),
        )
    }

    /// Add an operation.
    ///
    /// No-op if the hash is already present: the original entry and its
    /// expiry are kept, so re-adding never extends custody.
    pub fn add(&self, operation: OutgoingOperation) {
        let mut entries = self.entries.lock();
        if entries.contains_key(&operation.hash) {
            debug!(hash = %hex::encode(operation.hash), "operation already in pool, skipping");
            return;
        }

        let expires_at = self.time_source.now() + self.config.confirmation_timeout;
        debug!(
            hash = %hex::encode(operation.hash),
            expires_at_secs = expires_at.as_secs(),
            "adding outgoing operation"
        );
        entries.insert(operation.hash, CacheEntry { operation, expires_at });
    }

    /// Look up an operation by hash.
    ///
    /// Absence is reported explicitly as `None` rather than a default value.
    pub fn get(&self, hash: &Hash) -> Option<OutgoingOperation> {
        self.entries.lock().get(hash).map(|entry| entry.operation.clone())
    }

    /// Remove an operation. Idempotent.
    pub fn delete(&self, hash: &Hash) {
        if self.entries.lock().remove(hash).is_some() {
            debug!(hash = %hex::encode(hash), "deleted outgoing operation");
        }
    }

    /// Return every operation whose expiry has passed, sorted ascending by
    /// expiry.
    ///
    /// Entries are NOT removed; the caller decides whether to `delete` after
    /// resending. Two entries with identical expiry may appear in either
    /// order.
    pub fn unconfirmed_operations(&self) -> Vec<OutgoingOperation> {
        let now = self.time_source.now();
        let entries = self.entries.lock();

        let mut expired: Vec<&CacheEntry> =
            entries.values().filter(|entry| entry.expires_at < now).collect();
        expired.sort_by_key(|entry| entry.expires_at);

        expired.into_iter().map(|entry| entry.operation.clone()).collect()
    }

    /// Number of operations currently held.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
