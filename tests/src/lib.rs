//! # Sovereign-Shard Test Suite
//!
//! Unified test crate for cross-subsystem flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-subsystem choreography
//!     └── flows.rs      # header ingest -> pools, request cycle vs cache
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sov-tests
//! ```

#![allow(dead_code)]

pub mod integration;

/// Install a tracing subscriber honoring `RUST_LOG`, once per process.
///
/// Call from a test to see subsystem logs while debugging a flow.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
