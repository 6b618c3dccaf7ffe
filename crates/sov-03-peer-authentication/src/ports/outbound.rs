//! # Outbound Ports
//!
//! Traits for the collaborators the background task consumes: validator set
//! lookup, the asynchronously-populated message cache, and the network
//! request surface. All are thread-safe by contract.

use crate::domain::PeerAuthError;
use async_trait::async_trait;
use shared_types::{Epoch, PublicKey, ShardId};
use std::collections::HashMap;

/// Validator set source - outbound port.
#[async_trait]
pub trait NodesCoordinator: Send + Sync {
    /// Eligible validator public keys for the epoch, grouped by shard.
    async fn eligible_validators(
        &self,
        epoch: Epoch,
    ) -> Result<HashMap<ShardId, Vec<PublicKey>>, PeerAuthError>;
}

/// Peer authentication message cache - outbound port.
///
/// Populated asynchronously by the network layer; `keys` returns a snapshot
/// that may already be stale by the time the caller inspects it.
pub trait PeerAuthenticationCache: Send + Sync {
    /// Keys of the currently cached messages.
    fn keys(&self) -> Vec<PublicKey>;
}

/// Network request surface - outbound port.
///
/// Calls are fire-and-forget: delivery failures never reach the request
/// loop.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Request one chunk of the expected peer authentication message set.
    async fn request_chunk(&self, shard_id: ShardId, chunk_index: u32);

    /// Request peer authentication messages for specific validator keys.
    async fn request_by_hashes(&self, shard_id: ShardId, keys: Vec<PublicKey>);
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock nodes coordinator serving a fixed validator map.
#[derive(Default)]
pub struct MockNodesCoordinator {
    /// Validator keys per shard.
    pub validators: HashMap<ShardId, Vec<PublicKey>>,
    /// Should fail?
    pub should_fail: bool,
}

impl MockNodesCoordinator {
    /// Coordinator with `count` single-shard validator keys `[i; 8]`.
    pub fn with_keys(count: u8) -> Self {
        let keys = (0..count).map(|i| vec![i; 8]).collect();
        let mut validators = HashMap::new();
        validators.insert(0, keys);
        Self { validators, should_fail: false }
    }
}

#[async_trait]
impl NodesCoordinator for MockNodesCoordinator {
    async fn eligible_validators(
        &self,
        _epoch: Epoch,
    ) -> Result<HashMap<ShardId, Vec<PublicKey>>, PeerAuthError> {
        if self.should_fail {
            return Err(PeerAuthError::Coordinator("mock failure".to_string()));
        }
        Ok(self.validators.clone())
    }
}

/// Mock cache with settable contents.
#[derive(Default)]
pub struct MockPeerAuthCache {
    keys: parking_lot::Mutex<Vec<PublicKey>>,
}

impl MockPeerAuthCache {
    /// Cache pre-seeded with the given keys.
    pub fn seeded(keys: Vec<PublicKey>) -> Self {
        Self { keys: parking_lot::Mutex::new(keys) }
    }

    /// Replace the cache contents.
    pub fn set_keys(&self, keys: Vec<PublicKey>) {
        *self.keys.lock() = keys;
    }
}

impl PeerAuthenticationCache for MockPeerAuthCache {
    fn keys(&self) -> Vec<PublicKey> {
        self.keys.lock().clone()
    }
}

/// Mock request handler recording every call.
#[derive(Default)]
pub struct MockRequestHandler {
    /// Chunk indices requested, in order.
    pub chunk_calls: parking_lot::Mutex<Vec<u32>>,
    /// By-hash key sets requested, in order.
    pub by_hash_calls: parking_lot::Mutex<Vec<Vec<PublicKey>>>,
}

impl MockRequestHandler {
    /// Number of chunk requests issued.
    pub fn chunk_count(&self) -> usize {
        self.chunk_calls.lock().len()
    }

    /// Number of by-hash requests issued.
    pub fn by_hash_count(&self) -> usize {
        self.by_hash_calls.lock().len()
    }
}

#[async_trait]
impl RequestHandler for MockRequestHandler {
    async fn request_chunk(&self, _shard_id: ShardId, chunk_index: u32) {
        self.chunk_calls.lock().push(chunk_index);
    }

    async fn request_by_hashes(&self, _shard_id: ShardId, keys: Vec<PublicKey>) {
        self.by_hash_calls.lock().push(keys);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_coordinator_serves_keys() {
        let coordinator = MockNodesCoordinator::with_keys(4);
        let map = coordinator.eligible_validators(0).await.unwrap();
        assert_eq!(map.get(&0).unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_mock_coordinator_failure() {
        let coordinator = MockNodesCoordinator { should_fail: true, ..Default::default() };
        assert!(coordinator.eligible_validators(0).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_request_handler_records() {
        let handler = MockRequestHandler::default();
        handler.request_chunk(0, 2).await;
        handler.request_by_hashes(0, vec![vec![1u8; 8]]).await;
        assert_eq!(*handler.chunk_calls.lock(), vec![2]);
        assert_eq!(handler.by_hash_count(), 1);
    }

    #[test]
    fn test_mock_cache_set_keys() {
        let cache = MockPeerAuthCache::default();
        assert!(cache.keys().is_empty());
        cache.set_keys(vec![vec![7u8; 8]]);
        assert_eq!(cache.keys().len(), 1);
    }
}
