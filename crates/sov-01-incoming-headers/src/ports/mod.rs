//! # Ports Layer
//!
//! Inbound API and outbound collaborator traits.

pub mod inbound;
pub mod outbound;

pub use inbound::IncomingHeaderApi;
pub use outbound::{HeadersPool, MockHeadersPool, MockTxPool, TxPool};
