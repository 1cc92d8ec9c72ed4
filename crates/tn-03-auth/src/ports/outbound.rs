//! # Outbound Ports
//!
//! Dependencies the orchestrator calls out to.

use crate::domain::{ApiError, AuthError, LoginResponse, WalletLoginRequest};
use async_trait::async_trait;
use shared_types::{ChainKind, WalletBindingStatus};

/// External auth API.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Who, if anyone, owns `address` on `chain`.
    async fn check_wallet_binding(
        &self,
        address: &str,
        chain: ChainKind,
    ) -> Result<WalletBindingStatus, ApiError>;

    /// Exchange a wallet address for an identity and token.
    async fn login_with_wallet(
        &self,
        request: &WalletLoginRequest,
    ) -> Result<LoginResponse, ApiError>;

    /// Exchange a Google ID token for an identity and token.
    async fn login_with_google(&self, id_token: &str) -> Result<LoginResponse, ApiError>;
}

/// Google sign-in popup.
#[async_trait]
pub trait GoogleIdentity: Send + Sync {
    /// Run the sign-in flow and return the ID token.
    async fn sign_in(&self) -> Result<String, AuthError>;
}
