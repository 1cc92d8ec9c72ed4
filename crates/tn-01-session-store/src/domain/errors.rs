//! # Domain Errors
//!
//! Error types for the session store.

use crate::ports::StorageError;
use thiserror::Error;

/// Session store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A record could not be serialised; memory was left untouched.
    #[error("Failed to serialize {key}: {reason}")]
    Serialization {
        /// Storage key being written
        key: &'static str,
        /// Serializer message
        reason: String,
    },

    /// The storage backend rejected the write; memory was left untouched.
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error_names_key() {
        let err = SessionError::Serialization {
            key: "userInfo",
            reason: "boom".to_string(),
        };
        assert!(err.to_string().contains("userInfo"));
    }

    #[test]
    fn test_storage_error_converts() {
        let err: SessionError = StorageError::QuotaExceeded.into();
        assert!(err.to_string().contains("quota"));
    }
}
