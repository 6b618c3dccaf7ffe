//! # Domain Errors
//!
//! Error types for the peer authentication requests processor.

use thiserror::Error;

/// Peer authentication request errors.
#[derive(Debug, Error)]
pub enum PeerAuthError {
    /// Out-of-range parameter at construction.
    #[error("Invalid config for {param}: {reason}")]
    InvalidConfig {
        /// Offending parameter name.
        param: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Validator set lookup failed.
    #[error("Nodes coordinator error: {0}")]
    Coordinator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_error() {
        let err = PeerAuthError::InvalidConfig {
            param: "min_peers_threshold",
            reason: "0.3 is below 0.5".to_string(),
        };
        assert!(err.to_string().contains("min_peers_threshold"));
        assert!(err.to_string().contains("0.3"));
    }

    #[test]
    fn test_coordinator_error() {
        let err = PeerAuthError::Coordinator("epoch unknown".to_string());
        assert!(err.to_string().contains("epoch unknown"));
    }
}
