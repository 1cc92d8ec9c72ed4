//! Authentication Orchestrator
//!
//! Drives Google and wallet logins to one outcome: an identity and token in
//! the session store. Only successful identity resolution and the binding
//! check mutate the session.
//!
//! Wallet login phases:
//!
//! ```text
//! Idle -> Connecting -> ResolvingAddress -> BindingCheck -> Success
//!             |                |                  |
//!             +----------------+------------------+--> Failed
//! ```
//!
//! The `is_connecting` flag and phase return to idle on every exit path.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{ChainKind, WalletBindingStatus, WalletKind};
use tn_01_session_store::SessionStore;
use tn_02_wallet_resolver::{request_accounts, ProviderHandle, WalletHandle, WalletResolver};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::domain::{
    AuthConfig, AuthError, AuthEvent, AuthStatus, LoginMethod, LoginOutcome, LoginPhase,
    LoginResponse, WalletLoginRequest,
};
use crate::ports::inbound::Authenticator;
use crate::ports::outbound::{AuthApi, GoogleIdentity};

/// Authentication orchestrator.
pub struct AuthOrchestrator {
    resolver: WalletResolver,
    api: Arc<dyn AuthApi>,
    google: Arc<dyn GoogleIdentity>,
    session: Arc<SessionStore>,
    status: RwLock<AuthStatus>,
    events: broadcast::Sender<AuthEvent>,
}

/// Returns the status to idle when an attempt ends, however it ends.
struct AttemptGuard<'a> {
    status: &'a RwLock<AuthStatus>,
}

impl<'a> AttemptGuard<'a> {
    fn begin(status: &'a RwLock<AuthStatus>) -> Self {
        {
            let mut s = status.write();
            s.is_connecting = true;
            s.phase = LoginPhase::Connecting;
            s.error = None;
        }
        Self { status }
    }
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        let mut s = self.status.write();
        s.is_connecting = false;
        s.phase = LoginPhase::Idle;
    }
}

impl AuthOrchestrator {
    /// Create an orchestrator.
    pub fn new(
        config: &AuthConfig,
        resolver: WalletResolver,
        api: Arc<dyn AuthApi>,
        google: Arc<dyn GoogleIdentity>,
        session: Arc<SessionStore>,
    ) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            resolver,
            api,
            google,
            session,
            status: RwLock::new(AuthStatus::default()),
            events,
        }
    }

    /// Subscribe to login transitions.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    /// Session this orchestrator writes to.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Wallet connected by the last successful wallet login.
    pub fn current_wallet(&self) -> Option<WalletHandle> {
        self.status.read().wallet.clone()
    }

    /// Ask the auth API who owns `address` on `chain` and record the answer.
    ///
    /// A 401 means the check itself was unauthenticated; it cannot tell
    /// "linked to someone else" from "not linked", so it reads as not linked.
    pub async fn check_wallet_binding(
        &self,
        address: &str,
        chain: ChainKind,
    ) -> Result<WalletBindingStatus, AuthError> {
        let status = match self.api.check_wallet_binding(address, chain).await {
            Ok(status) => status,
            Err(e) if e.is_unauthorized() => {
                warn!(
                    "[tn-03] Binding check for {} unauthorized, treating as not linked",
                    address
                );
                WalletBindingStatus::NotLinked
            }
            Err(e) => {
                error!("[tn-03] Binding check for {} failed: {}", address, e);
                return Err(e.into());
            }
        };

        self.session.set_wallet_binding(status);
        Ok(status)
    }

    /// Move the connected wallet to another chain with the same address.
    pub fn switch_chain(&self, chain: ChainKind) -> Result<WalletHandle, AuthError> {
        let current = self.current_wallet().ok_or(AuthError::NotConnected)?;
        if current.chain == chain {
            return Ok(current);
        }
        preflight(current.provider_kind, chain)?;
        if current.chain.is_evm() != chain.is_evm() {
            return Err(AuthError::AddressFamilyChange {
                from: current.chain,
                to: chain,
            });
        }

        let switched = WalletHandle {
            chain,
            ..current
        };
        self.session.set_connected_wallet(&switched.to_record())?;
        self.status.write().wallet = Some(switched.clone());
        info!("[tn-03] Switched wallet to {}", chain);
        Ok(switched)
    }

    fn set_phase(&self, phase: LoginPhase) {
        debug!("[tn-03] Login phase: {:?}", phase);
        self.status.write().phase = phase;
    }

    fn emit(&self, event: AuthEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    fn fail(&self, err: &AuthError) {
        error!("[tn-03] Login failed: {}", err);
        {
            let mut s = self.status.write();
            s.phase = LoginPhase::Failed;
            s.error = Some(err.to_string());
        }
        self.emit(AuthEvent::LoginFailed {
            reason: err.to_string(),
        });
    }

    /// Store token and identity. If the identity write fails the token is
    /// dropped again so no partial session remains.
    fn adopt(&self, response: LoginResponse) -> Result<shared_types::UserIdentity, AuthError> {
        self.session.set_token(&response.token)?;
        if let Err(e) = self.session.set_user(response.user.clone()) {
            self.session.clear_token();
            return Err(e.into());
        }
        Ok(response.user)
    }

    fn restore_connected_wallet(&self, previous: Option<shared_types::ConnectedWallet>) {
        match previous {
            Some(record) => {
                if let Err(e) = self.session.set_connected_wallet(&record) {
                    warn!("[tn-03] Failed to restore connected wallet: {}", e);
                }
            }
            None => self.session.clear_connected_wallet(),
        }
    }

    async fn request_address(
        &self,
        handle: &ProviderHandle,
        chain: ChainKind,
    ) -> Result<String, AuthError> {
        let address = if chain == ChainKind::Aptos {
            let aptos = handle.aptos().ok_or(AuthError::CapabilityNotAvailable {
                wallet: handle.kind(),
                chain,
            })?;
            aptos.account().await?.address
        } else {
            request_accounts(handle)
                .await?
                .into_iter()
                .next()
                .unwrap_or_default()
        };

        if address.is_empty() {
            return Err(AuthError::NoAddress);
        }
        Ok(address)
    }

    async fn run_wallet_login(
        &self,
        wallet: WalletKind,
        chain: ChainKind,
    ) -> Result<LoginOutcome, AuthError> {
        preflight(wallet, chain)?;

        let handle = self
            .resolver
            .resolve(wallet)
            .into_handle()
            .ok_or(AuthError::ProviderNotFound(wallet))?;

        self.set_phase(LoginPhase::ResolvingAddress);
        let address = self.request_address(&handle, chain).await?;
        info!("[tn-03] Connected to {} wallet: {}", wallet, address);

        self.set_phase(LoginPhase::BindingCheck);
        let binding = self.check_wallet_binding(&address, chain).await?;
        if binding == WalletBindingStatus::LinkedToOther {
            return Err(AuthError::WalletLinkedToOther { address });
        }

        let response = self
            .api
            .login_with_wallet(&WalletLoginRequest {
                addr: address.clone(),
                wallet_type: wallet,
                chain,
            })
            .await?;

        // Wallet record goes in before the identity; a session only turns
        // authenticated once everything else is stored.
        let handle = WalletHandle::connected(wallet, chain, address);
        let previous = self.session.connected_wallet();
        self.session.set_connected_wallet(&handle.to_record())?;
        let user = match self.adopt(response) {
            Ok(user) => user,
            Err(e) => {
                self.restore_connected_wallet(previous);
                return Err(e);
            }
        };

        {
            let mut s = self.status.write();
            s.wallet = Some(handle.clone());
            s.phase = LoginPhase::Success;
        }

        Ok(LoginOutcome {
            method: LoginMethod::Wallet { wallet, chain },
            user,
            wallet: Some(handle),
            binding: Some(binding),
        })
    }

    async fn run_google_login(&self) -> Result<LoginOutcome, AuthError> {
        let id_token = self.google.sign_in().await?;
        let response = self.api.login_with_google(&id_token).await?;
        let user = self.adopt(response)?;
        self.set_phase(LoginPhase::Success);

        Ok(LoginOutcome {
            method: LoginMethod::Google,
            user,
            wallet: None,
            binding: None,
        })
    }

    fn finish(&self, result: Result<LoginOutcome, AuthError>) -> Result<LoginOutcome, AuthError> {
        match &result {
            Ok(outcome) => {
                info!("[tn-03] Logged in as {}", outcome.user.id);
                self.emit(AuthEvent::LoggedIn {
                    method: outcome.method,
                });
            }
            Err(e) => self.fail(e),
        }
        result
    }
}

/// Checks that need no provider: unsupported wallets and chains, and pairs
/// the wallet cannot address.
fn preflight(wallet: WalletKind, chain: ChainKind) -> Result<(), AuthError> {
    if wallet == WalletKind::Phantom {
        return Err(AuthError::UnsupportedWallet(wallet));
    }
    if chain == ChainKind::Solana {
        return Err(AuthError::UnsupportedChain(chain));
    }
    if !wallet.supports_chain(chain) {
        return Err(AuthError::CapabilityMismatch { wallet, chain });
    }
    Ok(())
}

#[async_trait]
impl Authenticator for AuthOrchestrator {
    async fn login_with_wallet(
        &self,
        wallet: WalletKind,
        chain: ChainKind,
    ) -> Result<LoginOutcome, AuthError> {
        let _attempt = AttemptGuard::begin(&self.status);
        let result = self.run_wallet_login(wallet, chain).await;
        self.finish(result)
    }

    async fn login_with_google(&self) -> Result<LoginOutcome, AuthError> {
        let _attempt = AttemptGuard::begin(&self.status);
        let result = self.run_google_login().await;
        self.finish(result)
    }

    fn disconnect_wallet(&self) {
        if self.status.write().wallet.take().is_some() {
            info!("[tn-03] Wallet disconnected");
        }
        self.session.clear_connected_wallet();
    }

    fn logout(&self) {
        let was_logged_in = self.session.is_authenticated();
        self.disconnect_wallet();
        self.session.reset();
        if was_logged_in {
            info!("[tn-03] Logged out");
            self.emit(AuthEvent::LoggedOut);
        }
    }

    fn status(&self) -> AuthStatus {
        self.status.read().clone()
    }
}
