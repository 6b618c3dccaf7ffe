//! # Marshalling Port
//!
//! Serialization is injected alongside hashing: artifact hashes are computed
//! over marshalled bytes, so the marshaller must be deterministic for a given
//! value.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Marshalling errors.
#[derive(Debug, Error)]
pub enum MarshalError {
    /// Value could not be encoded.
    #[error("Marshal failed: {0}")]
    Encode(String),

    /// Bytes could not be decoded into the requested type.
    #[error("Unmarshal failed: {0}")]
    Decode(String),
}

/// Marshalling port - encodes domain values to bytes and back.
pub trait Marshaller: Send + Sync {
    /// Encode a value to bytes.
    fn marshal<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, MarshalError>;

    /// Decode bytes into a value.
    fn unmarshal<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, MarshalError>;
}

/// Default bincode adapter.
///
/// Bincode is deterministic for a fixed type layout, which keeps artifact
/// hashes identical across honest nodes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BincodeMarshaller;

impl Marshaller for BincodeMarshaller {
    fn marshal<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, MarshalError> {
        bincode::serialize(value).map_err(|e| MarshalError::Encode(e.to_string()))
    }

    fn unmarshal<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, MarshalError> {
        bincode::deserialize(bytes).map_err(|e| MarshalError::Decode(e.to_string()))
    }
}
