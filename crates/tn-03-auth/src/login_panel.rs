//! Login Panel
//!
//! View-state of the login modal: chain and wallet pickers, the in-flight
//! indicator and how failures are reported.

use std::sync::Arc;

use parking_lot::Mutex;
use shared_types::{ChainKind, Notice, Notifier, WalletKind};
use tracing::{debug, error};

use crate::domain::LoginOutcome;
use crate::ports::inbound::Authenticator;

/// Chains listed in the panel, in display order.
pub const PANEL_CHAINS: [ChainKind; 4] = [
    ChainKind::Ethereum,
    ChainKind::Flow,
    ChainKind::Aptos,
    ChainKind::Bsc,
];

/// Wallets listed in the panel, in display order.
pub const PANEL_WALLETS: [WalletKind; 2] = [WalletKind::Metamask, WalletKind::Okx];

/// A chain button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOption {
    /// Chain
    pub chain: ChainKind,
    /// Display name
    pub name: &'static str,
    /// Not selectable
    pub disabled: bool,
    /// Currently selected
    pub selected: bool,
}

/// A wallet button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletOption {
    /// Wallet
    pub wallet: WalletKind,
    /// Button text
    pub label: String,
    /// Not clickable
    pub disabled: bool,
    /// Shows a spinner
    pub is_loading: bool,
}

#[derive(Debug)]
struct PanelState {
    open: bool,
    selected_chain: ChainKind,
    selected_wallet: Option<WalletKind>,
    is_connecting: bool,
}

/// Clears the transient indicators when a login attempt ends.
struct ConnectingGuard<'a> {
    state: &'a Mutex<PanelState>,
}

impl Drop for ConnectingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        state.is_connecting = false;
        state.selected_wallet = None;
    }
}

/// Login modal.
pub struct LoginPanel {
    auth: Arc<dyn Authenticator>,
    notifier: Arc<dyn Notifier>,
    enabled_chains: Vec<ChainKind>,
    state: Mutex<PanelState>,
}

impl LoginPanel {
    /// Create a closed panel. Only `enabled_chains` can be selected.
    pub fn new(
        auth: Arc<dyn Authenticator>,
        notifier: Arc<dyn Notifier>,
        enabled_chains: Vec<ChainKind>,
    ) -> Self {
        let selected_chain = enabled_chains
            .first()
            .copied()
            .unwrap_or(ChainKind::Ethereum);
        Self {
            auth,
            notifier,
            enabled_chains,
            state: Mutex::new(PanelState {
                open: false,
                selected_chain,
                selected_wallet: None,
                is_connecting: false,
            }),
        }
    }

    /// Show the panel.
    pub fn open(&self) {
        self.state.lock().open = true;
    }

    /// Hide the panel.
    pub fn close(&self) {
        self.state.lock().open = false;
    }

    /// Whether the panel is shown.
    pub fn is_open(&self) -> bool {
        self.state.lock().open
    }

    /// Whether a wallet login is in flight.
    pub fn is_connecting(&self) -> bool {
        self.state.lock().is_connecting
    }

    /// Chain the next wallet login uses.
    pub fn selected_chain(&self) -> ChainKind {
        self.state.lock().selected_chain
    }

    /// Wallet whose login is in flight.
    pub fn selected_wallet(&self) -> Option<WalletKind> {
        self.state.lock().selected_wallet
    }

    fn chain_enabled(&self, chain: ChainKind) -> bool {
        self.enabled_chains.contains(&chain)
    }

    /// Select a chain. Disabled chains are ignored; returns whether the
    /// selection changed to `chain`.
    pub fn select_chain(&self, chain: ChainKind) -> bool {
        if !self.chain_enabled(chain) {
            debug!("[tn-03] Ignoring disabled chain {}", chain);
            return false;
        }
        self.state.lock().selected_chain = chain;
        true
    }

    /// Chain buttons.
    pub fn chain_options(&self) -> Vec<ChainOption> {
        let selected = self.selected_chain();
        PANEL_CHAINS
            .iter()
            .map(|&chain| ChainOption {
                chain,
                name: chain.display_name(),
                disabled: !self.chain_enabled(chain),
                selected: chain == selected,
            })
            .collect()
    }

    /// Wallet buttons for the selected chain.
    pub fn wallet_options(&self) -> Vec<WalletOption> {
        let state = self.state.lock();
        PANEL_WALLETS
            .iter()
            .map(|&wallet| {
                let supported = wallet.supports_chain(state.selected_chain);
                let mut label = wallet.display_name().to_string();
                if !supported {
                    label.push_str(&format!(
                        " (Not supported for {})",
                        state.selected_chain.display_name()
                    ));
                }
                WalletOption {
                    wallet,
                    label,
                    disabled: state.is_connecting || !supported,
                    is_loading: state.is_connecting && state.selected_wallet == Some(wallet),
                }
            })
            .collect()
    }

    /// Wallet button clicked. Closes the panel on success; on failure posts
    /// a notice with the error text and stays open.
    pub async fn login_with_wallet(&self, wallet: WalletKind) -> Option<LoginOutcome> {
        let chain = {
            let mut state = self.state.lock();
            state.is_connecting = true;
            state.selected_wallet = Some(wallet);
            state.selected_chain
        };
        let _guard = ConnectingGuard { state: &self.state };

        match self.auth.login_with_wallet(wallet, chain).await {
            Ok(outcome) => {
                self.close();
                Some(outcome)
            }
            Err(e) => {
                error!("[tn-03] Wallet login failed: {}", e);
                self.notifier.notify(Notice::destructive(
                    "Login Failed",
                    format!("Wallet connection failed: {e}"),
                ));
                None
            }
        }
    }

    /// Google button clicked. Failures are logged only.
    pub async fn login_with_google(&self) -> Option<LoginOutcome> {
        match self.auth.login_with_google().await {
            Ok(outcome) => {
                self.close();
                Some(outcome)
            }
            Err(e) => {
                error!("[tn-03] Google login failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockAuthApi, MockGoogleIdentity};
    use crate::domain::{AuthConfig, AuthError, AuthStatus};
    use crate::service::AuthOrchestrator;
    use async_trait::async_trait;
    use shared_types::NoticeBoard;
    use tn_01_session_store::{MemorySessionStorage, SessionStore};
    use tn_02_wallet_resolver::{MockWalletProvider, StaticGlobals, WalletResolver};
    use tokio::sync::Notify;

    /// Authenticator whose logins hang until the gate opens, then fail.
    #[derive(Default)]
    struct GatedAuth {
        gate: Notify,
    }

    #[async_trait]
    impl Authenticator for GatedAuth {
        async fn login_with_wallet(
            &self,
            _wallet: WalletKind,
            _chain: ChainKind,
        ) -> Result<LoginOutcome, AuthError> {
            self.gate.notified().await;
            Err(AuthError::NoAddress)
        }

        async fn login_with_google(&self) -> Result<LoginOutcome, AuthError> {
            self.gate.notified().await;
            Err(AuthError::NoAddress)
        }

        fn disconnect_wallet(&self) {}

        fn logout(&self) {}

        fn status(&self) -> AuthStatus {
            AuthStatus::default()
        }
    }

    fn panel(globals: StaticGlobals) -> (LoginPanel, Arc<NoticeBoard>) {
        let session = Arc::new(SessionStore::new(Arc::new(MemorySessionStorage::new())));
        let auth = Arc::new(AuthOrchestrator::new(
            &AuthConfig::default(),
            WalletResolver::new(Arc::new(globals)),
            Arc::new(MockAuthApi::new()),
            Arc::new(MockGoogleIdentity::token("t")),
            session,
        ));
        let board = Arc::new(NoticeBoard::new());
        let panel = LoginPanel::new(
            auth,
            board.clone(),
            vec![ChainKind::Ethereum, ChainKind::Flow, ChainKind::Aptos],
        );
        (panel, board)
    }

    #[test]
    fn test_disabled_chain_not_selectable() {
        let (panel, _) = panel(StaticGlobals::empty());
        assert!(!panel.select_chain(ChainKind::Bsc));
        assert_eq!(panel.selected_chain(), ChainKind::Ethereum);

        let options = panel.chain_options();
        assert_eq!(options.len(), 4);
        assert!(options.iter().find(|o| o.chain == ChainKind::Bsc).unwrap().disabled);
        assert!(options[0].selected);
    }

    #[test]
    fn test_metamask_label_on_aptos() {
        let (panel, _) = panel(StaticGlobals::empty());
        assert!(panel.select_chain(ChainKind::Aptos));

        let options = panel.wallet_options();
        assert_eq!(options[0].label, "MetaMask (Not supported for Aptos)");
        assert!(options[0].disabled);
        assert_eq!(options[1].label, "OKX Wallet");
        assert!(!options[1].disabled);
    }

    #[tokio::test]
    async fn test_failure_posts_notice_and_resets() {
        let (panel, board) = panel(StaticGlobals::empty());
        panel.open();

        assert!(panel.login_with_wallet(WalletKind::Okx).await.is_none());
        assert!(panel.is_open());
        assert!(!panel.is_connecting());
        assert!(panel.selected_wallet().is_none());
        assert_eq!(
            board.last().unwrap().description,
            "Wallet connection failed: OKX Wallet not installed or not detected"
        );
    }

    #[tokio::test]
    async fn test_success_closes_panel() {
        let provider = Arc::new(MockWalletProvider::metamask().with_accounts(["0xabc"]));
        let (panel, board) = panel(StaticGlobals::empty().with_ethereum(provider));
        panel.open();

        let outcome = panel.login_with_wallet(WalletKind::Metamask).await;
        assert!(outcome.is_some());
        assert!(!panel.is_open());
        assert!(!panel.is_connecting());
        assert!(board.notices().is_empty());
    }

    #[tokio::test]
    async fn test_google_success_closes_panel() {
        let (panel, _) = panel(StaticGlobals::empty());
        panel.open();
        assert!(panel.login_with_google().await.is_some());
        assert!(!panel.is_open());
    }

    #[tokio::test]
    async fn test_wallet_buttons_locked_while_connecting() {
        let auth = Arc::new(GatedAuth::default());
        let panel = Arc::new(LoginPanel::new(
            auth.clone(),
            Arc::new(NoticeBoard::new()),
            vec![ChainKind::Ethereum],
        ));
        panel.open();

        let task = tokio::spawn({
            let panel = panel.clone();
            async move { panel.login_with_wallet(WalletKind::Okx).await }
        });
        while !panel.is_connecting() {
            tokio::task::yield_now().await;
        }

        let options = panel.wallet_options();
        assert!(options.iter().all(|o| o.disabled));
        assert_eq!(options[0].wallet, WalletKind::Metamask);
        assert!(!options[0].is_loading);
        assert!(options[1].is_loading);
        assert_eq!(panel.selected_wallet(), Some(WalletKind::Okx));

        auth.gate.notify_one();
        assert!(task.await.unwrap().is_none());

        let options = panel.wallet_options();
        assert!(options.iter().all(|o| !o.disabled && !o.is_loading));
        assert!(panel.is_open());
    }
}
