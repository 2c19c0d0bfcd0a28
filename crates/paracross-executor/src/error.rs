//! Error types for the paracross executor.

use paracross_types::CodecError;
use thiserror::Error;

/// Paracross executor errors.
///
/// `BadInput` is the only user-facing rejection: malformed payloads,
/// unknown titles, non-member submitters, future heights, and duplicate
/// votes all land there, and the host discards the transaction without
/// applying anything. `Storage` and `Codec` indicate corruption or host
/// misbehavior and are fatal to the transaction.
#[derive(Debug, Error)]
pub enum ParacrossError {
    /// The transaction is rejected; no state was written.
    #[error("invalid commit input: {reason}")]
    BadInput {
        /// Which check failed.
        reason: String,
    },

    /// The KV capability failed.
    #[error("storage error: {reason}")]
    Storage {
        /// Underlying storage message.
        reason: String,
    },

    /// A persisted value failed to decode.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl ParacrossError {
    /// A `BadInput` rejection with the failing check named.
    pub fn bad_input(reason: impl Into<String>) -> Self {
        Self::BadInput {
            reason: reason.into(),
        }
    }

    /// Whether this error is a user-facing rejection rather than a fault.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::BadInput { .. })
    }
}

/// Result type for paracross operations.
pub type ParacrossResult<T> = Result<T, ParacrossError>;
