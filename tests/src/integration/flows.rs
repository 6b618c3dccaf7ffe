//! # Integration Test Flows
//!
//! Cross-subsystem choreography:
//!
//! 1. **Incoming headers (01) → Outgoing operations (02)**: SCR hashes
//!    derived during ingestion key the outbound custody pool; confirmation
//!    deletes, expiry surfaces the rest for resend.
//! 2. **Peer authentication (03) against a live cache**: a responding mock
//!    network fills the cache from by-hash requests until the processor
//!    terminates on its own threshold.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use shared_types::{BincodeMarshaller, FixedTimeSource, Hash, PublicKey, Sha256Hasher, ShardId};

    // Subsystem 01: incoming header processor
    use sov_01_incoming_headers::{
        IncomingEvent, IncomingHeader, IncomingHeaderApi, IncomingHeaderProcessor,
        MockHeadersPool, MockTxPool,
    };

    // Subsystem 02: outgoing operations pool
    use sov_02_outgoing_operations::{
        OutgoingOperation, OutgoingOperationsPool, OutgoingPoolConfig,
    };

    // Subsystem 03: peer authentication requests
    use sov_03_peer_authentication::{
        MockNodesCoordinator, MockPeerAuthCache, PeerAuthRequestsConfig,
        PeerAuthenticationCache, PeerAuthenticationRequestsProcessor, RequestHandler,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn deposit_event(receiver: u8, value: u64) -> IncomingEvent {
        IncomingEvent {
            identifier: b"deposit".to_vec(),
            topics: vec![
                b"deposit".to_vec(),
                vec![0x11; 32],
                vec![receiver; 32],
                value.to_be_bytes().to_vec(),
                vec![0x00],
            ],
            data: vec![0xD0],
        }
    }

    fn make_processor(
        headers_pool: Arc<MockHeadersPool>,
        tx_pool: Arc<MockTxPool>,
    ) -> IncomingHeaderProcessor<Sha256Hasher, BincodeMarshaller> {
        IncomingHeaderProcessor::new(headers_pool, tx_pool, Sha256Hasher, BincodeMarshaller)
    }

    /// Request handler that answers by-hash requests by inserting the
    /// requested keys into the shared cache, like the network layer would.
    struct RespondingRequestHandler {
        cache: Arc<MockPeerAuthCache>,
    }

    #[async_trait::async_trait]
    impl RequestHandler for RespondingRequestHandler {
        async fn request_chunk(&self, _shard_id: ShardId, _chunk_index: u32) {
            // Chunk responses are ignored by this network.
        }

        async fn request_by_hashes(&self, _shard_id: ShardId, keys: Vec<PublicKey>) {
            let mut current = self.cache.keys();
            current.extend(keys);
            self.cache.set_keys(current);
        }
    }

    // =============================================================================
    // INTEGRATION TESTS: HEADER INGEST -> OUTGOING CUSTODY
    // =============================================================================

    #[test]
    fn test_ingested_results_feed_outgoing_custody() {
        crate::init_test_logging();
        let headers_pool = Arc::new(MockHeadersPool::default());
        let tx_pool = Arc::new(MockTxPool::default());
        let processor = make_processor(headers_pool.clone(), tx_pool.clone());

        let clock = FixedTimeSource::new(0);
        let outgoing = OutgoingOperationsPool::new(
            OutgoingPoolConfig { confirmation_timeout: Duration::from_secs(10) },
            Arc::new(clock.clone()),
        );

        // Ingest a header with three deposits.
        let header = IncomingHeader {
            nonce: 42,
            shard: 0,
            hash: [0xAB; 32],
            events: vec![deposit_event(1, 10), deposit_event(2, 20), deposit_event(3, 30)],
        };
        processor.add_header([0xAB; 32], header.clone()).unwrap();

        // Every derived SCR becomes an outbound operation awaiting the bridge.
        let scr_hashes: Vec<Hash> = headers_pool.headers.lock()[0].result_hashes.clone();
        for (i, hash) in scr_hashes.iter().enumerate() {
            outgoing.add(OutgoingOperation::single(*hash, vec![i as u8]));
        }
        assert_eq!(outgoing.len(), 3);

        // Redelivered header changes nothing downstream.
        processor.add_header([0xAB; 32], header).unwrap();
        assert_eq!(headers_pool.len(), 1);
        assert_eq!(outgoing.len(), 3);

        // The bridge confirms the first operation; the rest time out.
        outgoing.delete(&scr_hashes[0]);
        clock.set_secs(11);

        let resend = outgoing.unconfirmed_operations();
        let resend_hashes: Vec<Hash> = resend.iter().map(|op| op.hash).collect();
        assert_eq!(resend_hashes, vec![scr_hashes[1], scr_hashes[2]]);
    }

    // =============================================================================
    // INTEGRATION TESTS: REQUEST CYCLE AGAINST A RESPONDING NETWORK
    // =============================================================================

    #[tokio::test(flavor = "multi_thread")]
    async fn test_request_cycle_terminates_once_network_responds() {
        crate::init_test_logging();
        let coordinator = MockNodesCoordinator::with_keys(10);
        let cache = Arc::new(MockPeerAuthCache::default());
        let handler = Arc::new(RespondingRequestHandler { cache: Arc::clone(&cache) });

        let config = PeerAuthRequestsConfig {
            shard_id: 0,
            epoch: 0,
            messages_in_chunk: 100,
            min_peers_threshold: 0.5,
            delay_between_requests: Duration::from_secs(1),
            max_timeout: Duration::from_secs(20),
            max_missing_keys_in_response: 10,
        };

        let processor = PeerAuthenticationRequestsProcessor::new(
            config,
            Arc::new(coordinator),
            Arc::clone(&cache) as Arc<dyn PeerAuthenticationCache>,
            handler,
        )
        .unwrap();

        // Sweep, one by-hash round answered by the network, then the
        // threshold check terminates the cycle well before the deadline.
        let deadline = tokio::time::Instant::now() + Duration::from_secs(6);
        while tokio::time::Instant::now() < deadline && !processor.is_completed() {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert!(processor.is_completed());
        assert!(cache.keys().len() >= 5);
        assert!(processor.close().is_ok());
    }
}
