//! # Session
//!
//! In-memory session record and the storage keys it is persisted under.

use serde::{Deserialize, Serialize};
use shared_types::{AuthState, UserIdentity, WalletBindingStatus};

/// Storage keys used by the session store.
pub mod keys {
    /// Serialised `UserIdentity`.
    pub const USER_INFO: &str = "userInfo";
    /// Serialised `ConnectedWallet`.
    pub const CONNECTED_WALLET: &str = "connected_wallet";
    /// Bearer token for the auth API.
    pub const TOKEN: &str = "token";
}

/// The process-wide session.
///
/// `wallet_binding_status` stays `Unknown` until a wallet login reaches the
/// binding check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Logged-in user, if any.
    pub user: Option<UserIdentity>,
    /// Binding of the last wallet used to log in.
    pub wallet_binding_status: WalletBindingStatus,
    /// Whether the store has rehydrated from storage.
    #[serde(skip)]
    pub initialized: bool,
}

impl Session {
    /// Auth state as seen by views.
    pub fn auth_state(&self) -> AuthState {
        match (self.initialized, &self.user) {
            (false, _) => AuthState::Loading,
            (true, Some(_)) => AuthState::Authenticated,
            (true, None) => AuthState::Unauthenticated,
        }
    }
}
