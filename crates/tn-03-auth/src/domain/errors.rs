//! # Domain Errors
//!
//! Login failures, one variant per failure class so views can tell a
//! missing extension from an unsupported chain from a rejected API call.

use shared_types::{ChainKind, WalletKind};
use thiserror::Error;
use tn_01_session_store::SessionError;
use tn_02_wallet_resolver::ProviderError;

/// HTTP status the binding check normalises to "not linked".
pub const HTTP_UNAUTHORIZED: u16 = 401;

/// Errors from the external auth API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("Request failed with status code {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status code, for HTTP errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Whether this is a 401 response.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(HTTP_UNAUTHORIZED)
    }
}

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The wallet cannot hold accounts on the chain. Raised before any
    /// provider call.
    #[error("{} does not support {}", wallet.display_name(), chain.display_name())]
    CapabilityMismatch {
        /// Requested wallet
        wallet: WalletKind,
        /// Requested chain
        chain: ChainKind,
    },

    /// The provider was found but lacks the sub-interface the chain needs.
    #[error("{} {} support not available", wallet.display_name(), chain.display_name())]
    CapabilityNotAvailable {
        /// Resolved wallet
        wallet: WalletKind,
        /// Requested chain
        chain: ChainKind,
    },

    /// No injected provider matched the wallet.
    #[error("{} not installed or not detected", .0.display_name())]
    ProviderNotFound(WalletKind),

    /// The provider returned no address.
    #[error("Failed to get wallet address")]
    NoAddress,

    /// The wallet has no login path yet.
    #[error("{} login is not supported yet", .0.display_name())]
    UnsupportedWallet(WalletKind),

    /// The chain has no login path yet.
    #[error("{} is not supported for wallet login", .0.display_name())]
    UnsupportedChain(ChainKind),

    /// The binding check reported the address as owned by another account.
    #[error("Wallet {address} is linked to another account")]
    WalletLinkedToOther {
        /// Address that was checked
        address: String,
    },

    /// A chain switch needs an operation that only a new login provides.
    #[error("Switching from {} to {} requires a new wallet login", from.display_name(), to.display_name())]
    AddressFamilyChange {
        /// Current chain
        from: ChainKind,
        /// Requested chain
        to: ChainKind,
    },

    /// No wallet is connected.
    #[error("No wallet connected")]
    NotConnected,

    /// The identity provider did not produce a credential.
    #[error("Google sign-in failed: {0}")]
    Identity(String),

    /// Invalid configuration.
    #[error("Invalid auth configuration: {0}")]
    InvalidConfig(String),

    /// Provider request failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Auth API request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Session could not be persisted.
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::Http {
            status: 401,
            message: "Unauthorized".into(),
        };
        assert!(err.is_unauthorized());
        assert!(!ApiError::Transport("reset".into()).is_unauthorized());
        assert_eq!(
            ApiError::Http {
                status: 500,
                message: String::new()
            }
            .status(),
            Some(500)
        );
    }

    #[test]
    fn test_messages_name_the_wallet() {
        assert_eq!(
            AuthError::ProviderNotFound(WalletKind::Okx).to_string(),
            "OKX Wallet not installed or not detected"
        );
        assert_eq!(
            AuthError::CapabilityNotAvailable {
                wallet: WalletKind::Okx,
                chain: ChainKind::Aptos
            }
            .to_string(),
            "OKX Wallet Aptos support not available"
        );
        assert_eq!(
            AuthError::CapabilityMismatch {
                wallet: WalletKind::Metamask,
                chain: ChainKind::Aptos
            }
            .to_string(),
            "MetaMask does not support Aptos"
        );
    }

    #[test]
    fn test_transparent_wrappers() {
        let err: AuthError = ApiError::Transport("timeout".into()).into();
        assert_eq!(err.to_string(), "Network error: timeout");
    }
}
