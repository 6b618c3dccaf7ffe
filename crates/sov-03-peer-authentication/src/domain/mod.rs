//! # Domain Layer
//!
//! Configuration and errors for the request cycle.

pub mod config;
pub mod errors;

pub use config::{
    PeerAuthRequestsConfig, MIN_DELAY_BETWEEN_REQUESTS, MIN_MAX_TIMEOUT, MIN_MESSAGES_IN_CHUNK,
    MIN_MISSING_KEYS_IN_RESPONSE, MIN_PEERS_THRESHOLD,
};
pub use errors::PeerAuthError;
