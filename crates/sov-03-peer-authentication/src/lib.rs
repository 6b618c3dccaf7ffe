//! # SOV-03 Peer Authentication Requests Processor
//!
//! Active probing of the network for validator peer-authentication messages.
//!
//! **Subsystem ID:** 03
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A fresh node knows the eligible validator set of the current epoch but has
//! no liveness messages for it. This subsystem drives requests outward until
//! the local cache holds messages for a configured fraction of the set, or a
//! hard deadline elapses:
//!
//! 1. **Chunked sweep** - one request per chunk of the expected message set.
//! 2. **Poll** - periodically sample still-missing keys and request them by
//!    hash until the fill threshold is met.
//!
//! The whole cycle runs on one background task owned by the processor;
//! [`PeerAuthenticationRequestsProcessor::close`] tears it down and is
//! idempotent.
//!
//! ## Module Structure
//!
//! ```text
//! sov-03-peer-authentication/
//! ├── domain/          # request cycle config, errors
//! ├── algorithms/      # swap-and-pop sampling, missing-key diff
//! ├── ports/           # NodesCoordinator, cache, RequestHandler
//! └── processor        # background coordinator task
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod processor;

// Re-exports
pub use algorithms::{missing_keys, required_messages, sample_without_replacement};
pub use domain::{PeerAuthError, PeerAuthRequestsConfig, MIN_DELAY_BETWEEN_REQUESTS, MIN_PEERS_THRESHOLD};
pub use ports::{
    MockNodesCoordinator, MockPeerAuthCache, MockRequestHandler, NodesCoordinator,
    PeerAuthenticationCache, RequestHandler,
};
pub use processor::PeerAuthenticationRequestsProcessor;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
