//! # Shared Types Crate
//!
//! Type aliases and injected ports shared across the sovereign shard
//! subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: all cross-subsystem aliases (`Hash`,
//!   `ShardId`, `Epoch`, validator key bytes) are defined here.
//! - **Injected primitives**: hashing and marshalling are ports with default
//!   adapters; subsystems never hard-code an algorithm.
//! - **Testable time**: wall-clock access goes through [`TimeSource`] so
//!   expiry logic is deterministic under test.

pub mod entities;
pub mod hashing;
pub mod marshal;
pub mod time;

pub use entities::{Epoch, Hash, Nonce, PublicKey, ShardId};
pub use hashing::{Hasher, Sha256Hasher};
pub use marshal::{BincodeMarshaller, MarshalError, Marshaller};
pub use time::{FixedTimeSource, SystemTimeSource, TimeSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
