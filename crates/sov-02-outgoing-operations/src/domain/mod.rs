//! # Domain Layer
//!
//! Entities and the pool itself. The pool has no outbound ports beyond the
//! injected [`shared_types::TimeSource`]; every operation is a total function
//! on the key space.

pub mod entities;
pub mod pool;

pub use entities::{CacheEntry, OutgoingOperation, OutgoingPoolConfig};
pub use pool::OutgoingOperationsPool;
