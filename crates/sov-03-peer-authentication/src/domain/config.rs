//! # Request Cycle Configuration
//!
//! Parameters of the sweep/poll cycle with their validation minima.

use super::errors::PeerAuthError;
use shared_types::{Epoch, ShardId};
use std::time::Duration;

/// Minimum messages per chunk request.
pub const MIN_MESSAGES_IN_CHUNK: usize = 1;

/// Minimum fill threshold: below half the validator set the cycle would
/// declare success on a view too sparse to be useful.
pub const MIN_PEERS_THRESHOLD: f64 = 0.5;

/// Minimum spacing between requests.
pub const MIN_DELAY_BETWEEN_REQUESTS: Duration = Duration::from_secs(1);

/// Minimum hard deadline for the background task.
pub const MIN_MAX_TIMEOUT: Duration = Duration::from_secs(1);

/// Minimum sample bound for one poll request.
pub const MIN_MISSING_KEYS_IN_RESPONSE: usize = 1;

/// Configuration for one processor instance.
///
/// Validated at construction; an out-of-range value fails the constructor
/// with [`PeerAuthError::InvalidConfig`].
#[derive(Clone, Debug)]
pub struct PeerAuthRequestsConfig {
    /// Shard scope for request handler calls.
    pub shard_id: ShardId,
    /// Epoch used for validator set lookup.
    pub epoch: Epoch,
    /// Expected messages per chunk; denominator of the chunked sweep.
    pub messages_in_chunk: usize,
    /// Fraction of validators whose messages must be cached to declare
    /// success.
    pub min_peers_threshold: f64,
    /// Inter-request spacing.
    pub delay_between_requests: Duration,
    /// Hard deadline for the background task.
    pub max_timeout: Duration,
    /// Upper bound on one poll request's key sample.
    pub max_missing_keys_in_response: usize,
}

impl Default for PeerAuthRequestsConfig {
    fn default() -> Self {
        Self {
            shard_id: 0,
            epoch: 0,
            messages_in_chunk: 100,
            min_peers_threshold: 0.8,
            delay_between_requests: Duration::from_secs(5),
            max_timeout: Duration::from_secs(300),
            max_missing_keys_in_response: 100,
        }
    }
}

impl PeerAuthRequestsConfig {
    /// Create config for testing: minimal legal timings.
    pub fn for_testing() -> Self {
        Self {
            shard_id: 0,
            epoch: 0,
            messages_in_chunk: 10,
            min_peers_threshold: 0.5,
            delay_between_requests: MIN_DELAY_BETWEEN_REQUESTS,
            max_timeout: Duration::from_secs(10),
            max_missing_keys_in_response: 10,
        }
    }

    /// Check every parameter against its minimum.
    pub fn validate(&self) -> Result<(), PeerAuthError> {
        if self.messages_in_chunk < MIN_MESSAGES_IN_CHUNK {
            return Err(PeerAuthError::InvalidConfig {
                param: "messages_in_chunk",
                reason: format!("{} is below {MIN_MESSAGES_IN_CHUNK}", self.messages_in_chunk),
            });
        }
        if self.min_peers_threshold < MIN_PEERS_THRESHOLD {
            return Err(PeerAuthError::InvalidConfig {
                param: "min_peers_threshold",
                reason: format!("{} is below {MIN_PEERS_THRESHOLD}", self.min_peers_threshold),
            });
        }
        if self.min_peers_threshold > 1.0 {
            return Err(PeerAuthError::InvalidConfig {
                param: "min_peers_threshold",
                reason: format!("{} is above 1.0", self.min_peers_threshold),
            });
        }
        if self.delay_between_requests < MIN_DELAY_BETWEEN_REQUESTS {
            return Err(PeerAuthError::InvalidConfig {
                param: "delay_between_requests",
                reason: format!(
                    "{:?} is below {MIN_DELAY_BETWEEN_REQUESTS:?}",
                    self.delay_between_requests
                ),
            });
        }
        if self.max_timeout < MIN_MAX_TIMEOUT {
            return Err(PeerAuthError::InvalidConfig {
                param: "max_timeout",
                reason: format!("{:?} is below {MIN_MAX_TIMEOUT:?}", self.max_timeout),
            });
        }
        if self.max_missing_keys_in_response < MIN_MISSING_KEYS_IN_RESPONSE {
            return Err(PeerAuthError::InvalidConfig {
                param: "max_missing_keys_in_response",
                reason: format!(
                    "{} is below {MIN_MISSING_KEYS_IN_RESPONSE}",
                    self.max_missing_keys_in_response
                ),
            });
        }
        Ok(())
    }
}
