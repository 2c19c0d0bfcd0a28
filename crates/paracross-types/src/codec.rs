//! Canonical byte codec for persisted entities and log payloads.
//!
//! Every value stored under a paracross key, and every log payload inside
//! a receipt, goes through this pair. The encoding is pinned: persisted
//! chains depend on it byte-for-byte.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Failure to encode or decode a persisted value. Decode failures signal
/// corruption or host misbehavior, never user error.
#[derive(Debug, Error)]
#[error("codec error: {message}")]
pub struct CodecError {
    /// Underlying serializer message.
    pub message: String,
}

/// Encode a value to its canonical byte form.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    bincode::serialize(value).map_err(|e| CodecError {
        message: e.to_string(),
    })
}

/// Decode a value from its canonical byte form.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    bincode::deserialize(bytes).map_err(|e| CodecError {
        message: e.to_string(),
    })
}
