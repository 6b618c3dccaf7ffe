//! # Domain Entities
//!
//! Core entities for the incoming header processor.

use serde::{Deserialize, Serialize};
use shared_types::{Hash, Nonce, ShardId};

/// An event carried by an incoming main-chain header.
///
/// Consumed once by the processor; never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingEvent {
    /// Event identifier bytes (e.g. the emitting contract's event name).
    pub identifier: Vec<u8>,
    /// Ordered topic byte-strings; layout is fixed, see
    /// [`super::invariants::MIN_EVENT_TOPICS`].
    pub topics: Vec<Vec<u8>>,
    /// Opaque event payload.
    pub data: Vec<u8>,
}

/// A header delivered from the main chain for observation by this shard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingHeader {
    /// Main-chain block nonce.
    pub nonce: Nonce,
    /// Originating shard on the main chain.
    pub shard: ShardId,
    /// Header hash as computed by the source.
    pub hash: Hash,
    /// Ordered deposit events.
    pub events: Vec<IncomingEvent>,
}

/// A transaction-shaped artifact derived from a single incoming event.
///
/// Two honest ingesters produce byte-identical SCRs for the same event:
/// every field is taken deterministically from the event topics and the hash
/// is computed over the marshalled remaining fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossShardResult {
    /// Sender address bytes (main-chain side).
    pub sender: Vec<u8>,
    /// Receiver address bytes (shard side).
    pub receiver: Vec<u8>,
    /// Transferred value.
    pub value: u64,
    /// Call data for the receiver.
    pub data: Vec<u8>,
    /// Hash over the marshalled (sender, receiver, value, data).
    pub hash: Hash,
}

/// The incoming header augmented with its derived SCR hashes.
///
/// Owned by the headers pool after handoff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedHeader {
    /// The original incoming header.
    pub header: IncomingHeader,
    /// Hashes of the SCRs derived from the header's events, in event order.
    pub result_hashes: Vec<Hash>,
}
