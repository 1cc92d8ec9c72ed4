//! # Inbound Ports
//!
//! What the authentication component offers to views.

use crate::domain::{AuthError, AuthStatus, LoginOutcome};
use async_trait::async_trait;
use shared_types::{ChainKind, WalletKind};

/// Login API - inbound port.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Log in with an injected wallet on `chain`.
    async fn login_with_wallet(
        &self,
        wallet: WalletKind,
        chain: ChainKind,
    ) -> Result<LoginOutcome, AuthError>;

    /// Log in through the Google identity provider.
    async fn login_with_google(&self) -> Result<LoginOutcome, AuthError>;

    /// Forget the connected wallet. No-op when none is connected.
    fn disconnect_wallet(&self);

    /// Clear the session. No-op when already logged out.
    fn logout(&self);

    /// Current connection state.
    fn status(&self) -> AuthStatus;
}
