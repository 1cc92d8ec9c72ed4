//! # Domain Errors
//!
//! Errors raised by injected providers.

use thiserror::Error;

/// EIP-1193 code for a request the user rejected.
pub const USER_REJECTED_CODE: i64 = 4001;

/// Provider errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider returned an RPC error.
    #[error("Provider error {code}: {message}")]
    Rpc {
        /// EIP-1193 / JSON-RPC code
        code: i64,
        /// Provider message
        message: String,
    },

    /// The response did not have the expected shape.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// The provider went away mid-request.
    #[error("Provider disconnected")]
    Disconnected,
}

impl ProviderError {
    /// Whether the user dismissed the request in the wallet UI.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Rpc { code, .. } if *code == USER_REJECTED_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_rejection() {
        let err = ProviderError::Rpc {
            code: 4001,
            message: "User rejected the request.".to_string(),
        };
        assert!(err.is_user_rejection());
        assert!(err.to_string().contains("User rejected"));
        assert!(!ProviderError::Disconnected.is_user_rejection());
    }
}
