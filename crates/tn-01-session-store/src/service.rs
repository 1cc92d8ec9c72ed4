//! Session Store Service
//!
//! Holds the session in memory, mirrors it to `SessionStorage`, and publishes
//! the derived `AuthState` on a watch channel.
//!
//! Every mutation writes storage first and touches memory only if the write
//! succeeded, so storage and memory never disagree.

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{AuthState, ConnectedWallet, UserIdentity, WalletBindingStatus};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::{keys, Session, SessionError};
use crate::ports::SessionStorage;

/// Session store.
///
/// Constructed explicitly and shared behind an `Arc`; tests build isolated
/// instances over their own storage.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    state: RwLock<Session>,
    auth_tx: watch::Sender<AuthState>,
}

impl SessionStore {
    /// Create an uninitialised store. Views see `AuthState::Loading` until
    /// [`init`](Self::init) runs or any accessor triggers it.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let (auth_tx, _) = watch::channel(AuthState::Loading);
        Self {
            storage,
            state: RwLock::new(Session::default()),
            auth_tx,
        }
    }

    /// Rehydrate the identity from storage. Runs once; later calls are no-ops.
    ///
    /// A record that fails to parse is logged and treated as "no session".
    pub fn init(&self) {
        let mut state = self.state.write();
        if state.initialized {
            return;
        }

        state.user = read_json::<UserIdentity>(self.storage.as_ref(), keys::USER_INFO);
        state.initialized = true;
        match &state.user {
            Some(user) => info!("[tn-01] Restored session for user {}", user.id),
            None => debug!("[tn-01] No prior session"),
        }
        self.auth_tx.send_replace(state.auth_state());
    }

    fn ensure_initialized(&self) {
        if !self.state.read().initialized {
            self.init();
        }
    }

    /// Snapshot of the whole session.
    pub fn snapshot(&self) -> Session {
        self.ensure_initialized();
        self.state.read().clone()
    }

    /// Logged-in user.
    pub fn user(&self) -> Option<UserIdentity> {
        self.ensure_initialized();
        self.state.read().user.clone()
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.ensure_initialized();
        self.state.read().user.is_some()
    }

    /// Current auth state. Does not trigger rehydration.
    pub fn auth_state(&self) -> AuthState {
        self.state.read().auth_state()
    }

    /// Subscribe to auth state changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.auth_tx.subscribe()
    }

    /// Persist and adopt a user identity.
    ///
    /// If serialisation or the storage write fails, memory is not updated.
    pub fn set_user(&self, user: UserIdentity) -> Result<(), SessionError> {
        self.ensure_initialized();
        let mut state = self.state.write();
        write_json(self.storage.as_ref(), keys::USER_INFO, &user)?;
        info!("[tn-01] Session user set: {}", user.id);
        state.user = Some(user);
        self.auth_tx.send_replace(state.auth_state());
        Ok(())
    }

    /// Bearer token for the auth API.
    pub fn token(&self) -> Option<String> {
        self.storage.get_item(keys::TOKEN)
    }

    /// Persist the bearer token.
    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.storage.set_item(keys::TOKEN, token)?;
        Ok(())
    }

    /// Drop the bearer token.
    pub fn clear_token(&self) {
        self.storage.remove_item(keys::TOKEN);
    }

    /// Binding status from the last wallet login attempt.
    pub fn wallet_binding(&self) -> WalletBindingStatus {
        self.state.read().wallet_binding_status
    }

    /// Record the binding status reported by the binding check.
    pub fn set_wallet_binding(&self, status: WalletBindingStatus) {
        debug!("[tn-01] Wallet binding status: {:?}", status);
        self.state.write().wallet_binding_status = status;
    }

    /// Persisted connected-wallet record.
    pub fn connected_wallet(&self) -> Option<ConnectedWallet> {
        read_json(self.storage.as_ref(), keys::CONNECTED_WALLET)
    }

    /// Persist the connected-wallet record.
    pub fn set_connected_wallet(&self, wallet: &ConnectedWallet) -> Result<(), SessionError> {
        write_json(self.storage.as_ref(), keys::CONNECTED_WALLET, wallet)
    }

    /// Remove the connected-wallet record and forget the binding status.
    pub fn clear_connected_wallet(&self) {
        self.storage.remove_item(keys::CONNECTED_WALLET);
        self.state.write().wallet_binding_status = WalletBindingStatus::Unknown;
    }

    /// Clear identity, token and binding from storage and memory.
    ///
    /// Storage and memory are cleared under one write lock. Resetting an
    /// empty session is a no-op apart from the (unchanged) state broadcast.
    pub fn reset(&self) {
        let mut state = self.state.write();
        self.storage.remove_item(keys::USER_INFO);
        self.storage.remove_item(keys::TOKEN);
        let had_user = state.user.take().is_some();
        state.wallet_binding_status = WalletBindingStatus::Unknown;
        state.initialized = true;
        if had_user {
            info!("[tn-01] Session reset");
        }
        self.auth_tx.send_replace(state.auth_state());
    }
}

fn read_json<T: DeserializeOwned>(storage: &dyn SessionStorage, key: &'static str) -> Option<T> {
    let raw = storage.get_item(key)?;
    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("[tn-01] Failed to parse {} from session storage: {}", key, e);
            None
        }
    }
}

fn write_json<T: Serialize>(
    storage: &dyn SessionStorage,
    key: &'static str,
    value: &T,
) -> Result<(), SessionError> {
    let raw = serde_json::to_string(value).map_err(|e| SessionError::Serialization {
        key,
        reason: e.to_string(),
    })?;
    storage.set_item(key, &raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySessionStorage;
    use shared_types::{ChainKind, WalletKind};

    fn make_store() -> (SessionStore, MemorySessionStorage) {
        let storage = MemorySessionStorage::new();
        (SessionStore::new(Arc::new(storage.clone())), storage)
    }

    fn make_user() -> UserIdentity {
        let mut user = UserIdentity::new("victor123", "Victor").with_email("victor@example.com");
        user.extra
            .insert("roles".to_string(), serde_json::json!(["author", "buyer"]));
        user
    }

    #[test]
    fn test_starts_loading_until_init() {
        let (store, _) = make_store();
        assert_eq!(store.auth_state(), AuthState::Loading);

        store.init();
        assert_eq!(store.auth_state(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_set_user_survives_reload() {
        let (store, storage) = make_store();
        let user = make_user();
        store.set_user(user.clone()).unwrap();

        let reloaded = SessionStore::new(Arc::new(storage));
        assert_eq!(reloaded.user(), Some(user));
        assert_eq!(reloaded.auth_state(), AuthState::Authenticated);
    }

    #[test]
    fn test_corrupt_record_is_no_session() {
        let storage = MemorySessionStorage::new();
        storage.set_item(keys::USER_INFO, "{not json").unwrap();

        let store = SessionStore::new(Arc::new(storage));
        assert!(store.user().is_none());
        assert_eq!(store.auth_state(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_null_record_is_no_session() {
        let storage = MemorySessionStorage::new();
        storage.set_item(keys::USER_INFO, "null").unwrap();

        let store = SessionStore::new(Arc::new(storage));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let (store, storage) = make_store();
        storage.reject_writes(true);

        let result = store.set_user(make_user());
        assert!(matches!(result, Err(SessionError::Storage(_))));
        assert!(store.user().is_none());
        assert_eq!(store.auth_state(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_reset_clears_storage_and_memory() {
        let (store, storage) = make_store();
        store.set_user(make_user()).unwrap();
        store.set_token("jwt").unwrap();
        store.set_wallet_binding(WalletBindingStatus::NotLinked);

        store.reset();

        assert!(store.user().is_none());
        assert!(store.token().is_none());
        assert!(storage.get_item(keys::USER_INFO).is_none());
        assert_eq!(store.wallet_binding(), WalletBindingStatus::Unknown);

        // Idempotent
        store.reset();
        assert_eq!(store.auth_state(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_connected_wallet_record() {
        let (store, _) = make_store();
        let wallet = ConnectedWallet {
            address: "0xabc".to_string(),
            wallet_type: WalletKind::Okx,
            chain_type: ChainKind::Flow,
        };
        store.set_connected_wallet(&wallet).unwrap();
        store.set_wallet_binding(WalletBindingStatus::LinkedToSelf);
        assert_eq!(store.connected_wallet(), Some(wallet));

        store.clear_connected_wallet();
        assert!(store.connected_wallet().is_none());
        assert_eq!(store.wallet_binding(), WalletBindingStatus::Unknown);
    }

    #[tokio::test]
    async fn test_subscribers_see_login_and_reset() {
        let (store, _) = make_store();
        let mut rx = store.subscribe();
        store.init();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), AuthState::Unauthenticated);

        store.set_user(make_user()).unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), AuthState::Authenticated);

        store.reset();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), AuthState::Unauthenticated);
    }
}
