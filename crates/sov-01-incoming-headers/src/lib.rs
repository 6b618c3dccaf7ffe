//! # SOV-01 Incoming Header Processor
//!
//! Ingestion of authenticated main-chain headers into the sovereign shard.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Each incoming header carries deposit events observed on the main chain.
//! The processor turns those events into cross-shard results (SCRs), pairs
//! the header with the SCR hashes as an extended header, and hands both to
//! their downstream pools - exactly once per header hash, no matter how many
//! times the source redelivers.
//!
//! ## Guarantees
//!
//! | Guarantee | Mechanism |
//! |-----------|-----------|
//! | At-most-once admission | dedup set + whole-operation mutex |
//! | Deterministic SCRs | injected hasher/marshaller over fixed topic layout |
//! | No partial dedup | hash recorded only after both pool insertions |
//!
//! ## Module Structure
//!
//! ```text
//! sov-01-incoming-headers/
//! ├── domain/          # IncomingHeader, CrossShardResult, errors, invariants
//! ├── ports/           # IncomingHeaderApi, HeadersPool, TxPool
//! └── processor        # serialized, deduplicating ingester
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod processor;

// Re-exports
pub use domain::{
    invariant_topic_arity, CrossShardResult, ExtendedHeader, HeaderError, IncomingEvent,
    IncomingHeader, MIN_EVENT_TOPICS,
};
pub use ports::{HeadersPool, IncomingHeaderApi, MockHeadersPool, MockTxPool, TxPool};
pub use processor::IncomingHeaderProcessor;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
