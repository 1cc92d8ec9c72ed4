//! # Login Types
//!
//! Wire records for the auth API and the values a login attempt produces.

use serde::{Deserialize, Serialize};
use shared_types::{ChainKind, UserIdentity, WalletBindingStatus, WalletKind};
use tn_02_wallet_resolver::WalletHandle;

/// Request body for the wallet login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletLoginRequest {
    /// Active address
    pub addr: String,
    /// Wallet extension used
    pub wallet_type: WalletKind,
    /// Chain the address belongs to
    pub chain: ChainKind,
}

/// Response of the binding check endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingCheckResponse {
    /// Binding of the checked address
    pub status: WalletBindingStatus,
}

/// Response of both login endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Authenticated identity
    pub user: UserIdentity,
    /// Bearer token for later requests
    pub token: String,
}

/// How a user logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LoginMethod {
    /// Google identity provider.
    Google,
    /// Injected wallet.
    Wallet {
        /// Wallet extension
        wallet: WalletKind,
        /// Chain
        chain: ChainKind,
    },
}

/// Where a login attempt currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoginPhase {
    /// No attempt in flight.
    #[default]
    Idle,
    /// Attempt started; locating a provider.
    Connecting,
    /// Provider found; waiting for an address.
    ResolvingAddress,
    /// Address obtained; asking the API who owns it.
    BindingCheck,
    /// Attempt succeeded.
    Success,
    /// Attempt failed.
    Failed,
}

/// Snapshot of the orchestrator state exposed to views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthStatus {
    /// A login attempt is in flight.
    pub is_connecting: bool,
    /// Phase of the current attempt.
    pub phase: LoginPhase,
    /// Message of the last failed attempt, cleared when a new one starts.
    pub error: Option<String>,
    /// Wallet connected by the last successful wallet login.
    pub wallet: Option<WalletHandle>,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    /// How the user logged in
    pub method: LoginMethod,
    /// Identity now held by the session
    pub user: UserIdentity,
    /// Connected wallet, for wallet logins
    pub wallet: Option<WalletHandle>,
    /// Binding reported by the check, for wallet logins
    pub binding: Option<WalletBindingStatus>,
}

/// Broadcast to anyone interested in login transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthEvent {
    /// A login attempt succeeded.
    LoggedIn {
        /// How the user logged in
        method: LoginMethod,
    },
    /// The user logged out.
    LoggedOut,
    /// A login attempt failed.
    LoginFailed {
        /// User-facing error text
        reason: String,
    },
}
