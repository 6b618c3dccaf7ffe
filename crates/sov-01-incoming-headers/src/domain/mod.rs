//! # Domain Layer
//!
//! Entities, errors, and invariants for header ingestion.

pub mod entities;
pub mod errors;
pub mod invariants;

pub use entities::{CrossShardResult, ExtendedHeader, IncomingEvent, IncomingHeader};
pub use errors::HeaderError;
pub use invariants::{invariant_topic_arity, MIN_EVENT_TOPICS};
