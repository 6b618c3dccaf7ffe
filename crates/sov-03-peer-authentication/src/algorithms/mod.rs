//! # Algorithms Layer
//!
//! Pure helpers behind the poll loop: threshold arithmetic, set difference,
//! uniform sampling.

pub mod sampling;

pub use sampling::{missing_keys, required_messages, sample_without_replacement};
