//! # Inbound Ports
//!
//! API trait defining what the incoming header subsystem can do.

use crate::domain::{HeaderError, IncomingHeader};
use shared_types::Hash;

/// Header ingestion API - inbound port.
pub trait IncomingHeaderApi: Send + Sync {
    /// Ingest one incoming header under its hash.
    ///
    /// At-most-once per hash: a redelivered hash is a successful no-op.
    fn add_header(&self, hash: Hash, header: IncomingHeader) -> Result<(), HeaderError>;
}
