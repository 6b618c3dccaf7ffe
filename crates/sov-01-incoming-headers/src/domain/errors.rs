//! # Domain Errors
//!
//! Error types for header ingestion.

use shared_types::MarshalError;
use thiserror::Error;

/// Header ingestion error types.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Event carried fewer topics than the fixed layout requires.
    #[error("Too few event topics: {got}/{required}")]
    TooFewTopics {
        /// Topics present on the event.
        got: usize,
        /// Topics required by the layout.
        required: usize,
    },

    /// Value topic does not fit a u64.
    #[error("Value topic too wide: {len} bytes")]
    ValueTooWide {
        /// Byte length of the offending topic.
        len: usize,
    },

    /// Marshalling failed while deriving an SCR hash.
    #[error(transparent)]
    Marshal(#[from] MarshalError),

    /// Headers pool rejected the extended header.
    #[error("Headers pool error: {0}")]
    HeadersPool(String),

    /// Transaction pool rejected the SCR batch.
    #[error("Tx pool error: {0}")]
    TxPool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_topics_error() {
        let err = HeaderError::TooFewTopics { got: 2, required: 5 };
        assert!(err.to_string().contains("2/5"));
    }

    #[test]
    fn test_value_too_wide_error() {
        let err = HeaderError::ValueTooWide { len: 16 };
        assert!(err.to_string().contains("16"));
    }

    #[test]
    fn test_headers_pool_error() {
        let err = HeaderError::HeadersPool("full".to_string());
        assert!(err.to_string().contains("full"));
    }
}
