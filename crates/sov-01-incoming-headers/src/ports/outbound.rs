//! # Outbound Ports
//!
//! Traits for the downstream pools the processor feeds. Both pools are
//! thread-safe by contract; the processor adds no locking around them beyond
//! its own serialization.

use crate::domain::{CrossShardResult, ExtendedHeader, HeaderError};

/// Headers pool - outbound port.
pub trait HeadersPool: Send + Sync {
    /// Hand over an extended header. The pool owns it afterwards.
    fn add_extended_header(&self, header: ExtendedHeader) -> Result<(), HeaderError>;
}

/// Transaction pool - outbound port.
pub trait TxPool: Send + Sync {
    /// Hand over a batch of SCRs. Best-effort; partial batch behavior is the
    /// pool's contract.
    fn add_batch(&self, results: Vec<CrossShardResult>) -> Result<(), HeaderError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock headers pool recording every insert.
#[derive(Default)]
pub struct MockHeadersPool {
    /// Extended headers received, in order.
    pub headers: parking_lot::Mutex<Vec<ExtendedHeader>>,
    /// Should fail?
    pub should_fail: bool,
}

impl MockHeadersPool {
    /// Number of extended headers received.
    pub fn len(&self) -> usize {
        self.headers.lock().len()
    }

    /// Returns true if nothing was received.
    pub fn is_empty(&self) -> bool {
        self.headers.lock().is_empty()
    }
}

impl HeadersPool for MockHeadersPool {
    fn add_extended_header(&self, header: ExtendedHeader) -> Result<(), HeaderError> {
        if self.should_fail {
            return Err(HeaderError::HeadersPool("mock failure".to_string()));
        }
        self.headers.lock().push(header);
        Ok(())
    }
}

/// Mock transaction pool recording every batch.
#[derive(Default)]
pub struct MockTxPool {
    /// SCR batches received, in order.
    pub batches: parking_lot::Mutex<Vec<Vec<CrossShardResult>>>,
    /// Should fail?
    pub should_fail: bool,
}

impl MockTxPool {
    /// Total number of SCRs across all batches.
    pub fn result_count(&self) -> usize {
        self.batches.lock().iter().map(Vec::len).sum()
    }
}

impl TxPool for MockTxPool {
    fn add_batch(&self, results: Vec<CrossShardResult>) -> Result<(), HeaderError> {
        if self.should_fail {
            return Err(HeaderError::TxPool("mock failure".to_string()));
        }
        self.batches.lock().push(results);
        Ok(())
    }
}
