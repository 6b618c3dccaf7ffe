//! # Domain Invariants
//!
//! Business rules that must always hold for header ingestion.

use super::errors::HeaderError;

/// Fixed topic layout of a deposit event:
///
/// ```text
/// topics[0] = event tag
/// topics[1] = sender address bytes
/// topics[2] = receiver address bytes
/// topics[3] = value (big-endian, at most 8 bytes)
/// topics[4] = payload descriptor
/// ```
///
/// An event with fewer topics cannot be mapped to an SCR and fails the
/// whole header.
pub const MIN_EVENT_TOPICS: usize = 5;

/// Topic index of the sender address.
pub const TOPIC_SENDER: usize = 1;

/// Topic index of the receiver address.
pub const TOPIC_RECEIVER: usize = 2;

/// Topic index of the big-endian value bytes.
pub const TOPIC_VALUE: usize = 3;

/// Invariant: an event exposes the full topic layout.
pub fn invariant_topic_arity(topics: &[Vec<u8>]) -> Result<(), HeaderError> {
    if topics.len() < MIN_EVENT_TOPICS {
        return Err(HeaderError::TooFewTopics { got: topics.len(), required: MIN_EVENT_TOPICS });
    }
    Ok(())
}
