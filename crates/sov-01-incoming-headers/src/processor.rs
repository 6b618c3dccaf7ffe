//! # Incoming Header Processor
//!
//! Serialized, deduplicating ingester. One mutex covers the dedup set and
//! both downstream insertions, so the dedup/insert pair is atomic with
//! respect to concurrent submitters.

use crate::domain::invariants::{TOPIC_RECEIVER, TOPIC_SENDER, TOPIC_VALUE};
use crate::domain::{
    invariant_topic_arity, CrossShardResult, ExtendedHeader, HeaderError, IncomingEvent,
    IncomingHeader,
};
use crate::ports::inbound::IncomingHeaderApi;
use crate::ports::outbound::{HeadersPool, TxPool};
use parking_lot::Mutex;
use shared_types::{Hash, Hasher, Marshaller};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Transforms incoming headers + events into shard-local artifacts and
/// delivers them to the headers pool and the transaction pool.
///
/// The dedup set is monotonic for the process lifetime; there is no eviction.
/// Consumers bound its growth by process lifecycle.
pub struct IncomingHeaderProcessor<H: Hasher, M: Marshaller> {
    headers_pool: Arc<dyn HeadersPool>,
    tx_pool: Arc<dyn TxPool>,
    hasher: H,
    marshaller: M,
    seen: Mutex<HashSet<Hash>>,
}

impl<H: Hasher, M: Marshaller> IncomingHeaderProcessor<H, M> {
    /// Create a new processor.
    pub fn new(
        headers_pool: Arc<dyn HeadersPool>,
        tx_pool: Arc<dyn TxPool>,
        hasher: H,
        marshaller: M,
    ) -> Self {
        Self { headers_pool, tx_pool, hasher, marshaller, seen: Mutex::new(HashSet::new()) }
    }

    /// Number of header hashes admitted so far.
    pub fn seen_len(&self) -> usize {
        self.seen.lock().len()
    }

    /// Build one SCR from an event.
    ///
    /// Deterministic: every field comes from the fixed topic layout plus the
    /// event payload, and the hash is computed over the marshalled fields.
    fn build_result(&self, event: &IncomingEvent) -> Result<CrossShardResult, HeaderError> {
        invariant_topic_arity(&event.topics)?;

        let sender = event.topics[TOPIC_SENDER].clone();
        let receiver = event.topics[TOPIC_RECEIVER].clone();
        let value = parse_value(&event.topics[TOPIC_VALUE])?;
        let data = event.data.clone();

        let marshalled = self.marshaller.marshal(&(&sender, &receiver, value, &data))?;
        let hash = self.hasher.compute(&marshalled);

        Ok(CrossShardResult { sender, receiver, value, data, hash })
    }

    fn build_results(
        &self,
        events: &[IncomingEvent],
    ) -> Result<Vec<CrossShardResult>, HeaderError> {
        events.iter().map(|event| self.build_result(event)).collect()
    }
}

impl<H: Hasher, M: Marshaller> IncomingHeaderApi for IncomingHeaderProcessor<H, M> {
    fn add_header(&self, hash: Hash, header: IncomingHeader) -> Result<(), HeaderError> {
        // Held for the entire operation, downstream inserts included.
        let mut seen = self.seen.lock();

        if seen.contains(&hash) {
            warn!(hash = %hex::encode(hash), "incoming header already processed, skipping");
            return Ok(());
        }

        let results = self.build_results(&header.events)?;
        let result_hashes: Vec<Hash> = results.iter().map(|scr| scr.hash).collect();

        debug!(
            hash = %hex::encode(hash),
            nonce = header.nonce,
            shard = header.shard,
            results = results.len(),
            "processing incoming header"
        );

        let extended = ExtendedHeader { header, result_hashes };
        self.headers_pool.add_extended_header(extended)?;
        self.tx_pool.add_batch(results)?;

        // Recorded only after both insertions succeeded.
        seen.insert(hash);
        Ok(())
    }
}

/// Parse the big-endian value topic into a u64.
fn parse_value(bytes: &[u8]) -> Result<u64, HeaderError> {
    if bytes.len() > 8 {
        return Err(HeaderError::ValueTooWide { len: bytes.len() });
    }
    Ok(bytes.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
}
