//! # SOV-02 Outgoing Operations Pool
//!
//! Time-bounded custody of outbound cross-chain operations pending external
//! confirmation.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Operations leaving the sovereign shard wait here until a bridge confirms
//! them on the main chain. An operation that outlives its confirmation
//! timeout becomes "unconfirmed" and is surfaced for resending; deleting a
//! confirmed operation is the producer's responsibility.
//!
//! ## Module Structure
//!
//! ```text
//! sov-02-outgoing-operations/
//! ├── domain/          # OutgoingOperation, CacheEntry, pool config
//! └── pool             # mutex-guarded expiring store
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

// Re-exports
pub use domain::{CacheEntry, OutgoingOperation, OutgoingOperationsPool, OutgoingPoolConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
