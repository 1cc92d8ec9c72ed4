//! # Application Container
//!
//! Wires the components together in dependency order and hands out the
//! per-page view models.
//!
//! ```text
//! Level 0: SessionStore, WalletResolver, InMemoryCatalog
//! Level 1: AuthOrchestrator (session + resolver + auth API + Google)
//! Level 2: LoginPanel, route guards, marketplace views, NodeEditor
//! ```
//!
//! The host supplies everything environment-specific through
//! [`Environment`]: injected wallet globals, session storage, the router and
//! the toast surface.

use std::sync::Arc;

use anyhow::{Context, Result};
use shared_types::{NoticeBoard, Notifier, UserIdentity};
use tn_01_session_store::{MemorySessionStorage, SessionStorage, SessionStore};
use tn_02_wallet_resolver::{
    InjectedGlobals, MockAptosProvider, MockWalletProvider, StaticGlobals, WalletResolver,
};
use tn_03_auth::{
    AuthApi, AuthOrchestrator, Authenticator, GoogleIdentity, HttpAuthApi, LoginPanel,
    MockAuthApi, MockGoogleIdentity,
};
use tn_04_route_guard::{
    spawn_guard, GuardHandle, LoginRedirect, Navigator, RecordingNavigator, Route,
};
use tn_05_marketplace::{DashboardView, InMemoryCatalog, MarketplaceView, NodeDetailView};
use tn_06_node_authoring::{NodeEditor, SimulatedSubmitter};
use tracing::{info, instrument};

use crate::config::AppConfig;

/// Identity that authors and reviews when nobody is logged in.
pub const DEMO_AUTHOR_ID: &str = "current123";

/// Display name paired with [`DEMO_AUTHOR_ID`].
pub const DEMO_AUTHOR_NAME: &str = "Current User";

/// Which auth API implementation to use.
#[derive(Clone)]
pub enum ApiBackend {
    /// `HttpAuthApi` against `auth.api_base_url`.
    Http,
    /// A caller-supplied implementation.
    Provided(Arc<dyn AuthApi>),
}

/// Host-specific adapters.
#[derive(Clone)]
pub struct Environment {
    /// Injected wallet provider globals
    pub globals: Arc<dyn InjectedGlobals>,
    /// Session-scoped key/value storage
    pub storage: Arc<dyn SessionStorage>,
    /// Auth API backend
    pub api: ApiBackend,
    /// Google sign-in popup
    pub google: Arc<dyn GoogleIdentity>,
    /// Client-side router
    pub navigator: Arc<dyn Navigator>,
    /// Toast surface
    pub notifier: Arc<dyn Notifier>,
}

impl Environment {
    /// Fully in-memory environment: a MetaMask and an OKX wallet injected
    /// with fixed accounts, a scripted auth API and a recording router.
    pub fn demo() -> Self {
        let metamask = Arc::new(
            MockWalletProvider::metamask()
                .with_accounts(["0x1111111111111111111111111111111111111111"]),
        );
        let okx = Arc::new(
            MockWalletProvider::okx()
                .with_accounts(["0x2222222222222222222222222222222222222222"])
                .with_aptos(Arc::new(MockAptosProvider::new(
                    "0x3333333333333333333333333333333333333333333333333333333333333333",
                ))),
        );
        Self {
            globals: Arc::new(
                StaticGlobals::empty()
                    .with_ethereum(metamask)
                    .with_okxwallet(okx),
            ),
            storage: Arc::new(MemorySessionStorage::new()),
            api: ApiBackend::Provided(Arc::new(MockAuthApi::new())),
            google: Arc::new(MockGoogleIdentity::token("demo-id-token")),
            navigator: Arc::new(RecordingNavigator::new()),
            notifier: Arc::new(NoticeBoard::new()),
        }
    }
}

/// Every long-lived component of the application.
pub struct AppContainer {
    config: AppConfig,
    session: Arc<SessionStore>,
    auth: Arc<AuthOrchestrator>,
    catalog: Arc<InMemoryCatalog>,
    submitter: Arc<SimulatedSubmitter>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl AppContainer {
    /// Validate `config` and build every component.
    #[instrument(name = "app_init", skip_all)]
    pub fn new(config: AppConfig, env: Environment) -> Result<Self> {
        config.validate().context("configuration rejected")?;
        info!("[tn-runtime] Initializing components");

        // Level 0
        let session = Arc::new(SessionStore::new(env.storage));
        session.init();
        let resolver = WalletResolver::new(env.globals);
        let catalog = Arc::new(InMemoryCatalog::from_config(&config.marketplace));
        info!(
            "[tn-runtime] Catalog ready with {} listings, session {:?}",
            catalog.len(),
            session.auth_state()
        );

        // Level 1
        let api: Arc<dyn AuthApi> = match env.api {
            ApiBackend::Http => Arc::new(
                HttpAuthApi::new(&config.auth, session.clone())
                    .context("failed to build auth API client")?,
            ),
            ApiBackend::Provided(api) => api,
        };
        let auth = Arc::new(AuthOrchestrator::new(
            &config.auth,
            resolver,
            api,
            env.google,
            session.clone(),
        ));

        // Level 2 shared pieces
        let submitter = Arc::new(
            SimulatedSubmitter::new(config.authoring.submit_latency())
                .with_catalog(catalog.clone()),
        );

        Ok(Self {
            config,
            session,
            auth,
            catalog,
            submitter,
            navigator: env.navigator,
            notifier: env.notifier,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Session store.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Authentication orchestrator.
    pub fn auth(&self) -> &Arc<AuthOrchestrator> {
        &self.auth
    }

    /// Listing catalog.
    pub fn catalog(&self) -> &Arc<InMemoryCatalog> {
        &self.catalog
    }

    /// Logged-in user, or the demo author when nobody is.
    pub fn current_author(&self) -> UserIdentity {
        self.session
            .user()
            .unwrap_or_else(|| UserIdentity::new(DEMO_AUTHOR_ID, DEMO_AUTHOR_NAME))
    }

    /// Login modal.
    pub fn login_panel(&self) -> LoginPanel {
        let auth: Arc<dyn Authenticator> = self.auth.clone();
        LoginPanel::new(
            auth,
            self.notifier.clone(),
            self.config.auth.enabled_chains.clone(),
        )
    }

    /// Login page redirects.
    pub fn login_redirect(&self) -> LoginRedirect {
        LoginRedirect::new(self.navigator.clone(), self.notifier.clone())
    }

    /// Start a guard for `route` if it is protected. Must be called inside
    /// a tokio runtime.
    pub fn guard(&self, route: &Route) -> Option<GuardHandle> {
        if !route.is_protected() {
            return None;
        }
        Some(spawn_guard(
            self.config.guard.clone(),
            self.session.subscribe(),
            self.navigator.clone(),
        ))
    }

    /// Marketplace grid.
    pub fn marketplace_view(&self) -> MarketplaceView {
        MarketplaceView::new(self.catalog.clone())
    }

    /// Node detail page; reviews are signed by the current author.
    pub fn node_detail_view(&self) -> NodeDetailView {
        NodeDetailView::new(self.catalog.clone(), self.current_author())
    }

    /// Author dashboard.
    pub fn dashboard_view(&self) -> DashboardView {
        DashboardView::new(self.catalog.clone())
    }

    /// Add/edit node page.
    pub fn node_editor(&self) -> NodeEditor {
        NodeEditor::new(
            self.catalog.clone(),
            self.submitter.clone(),
            self.navigator.clone(),
            self.notifier.clone(),
            self.current_author(),
        )
    }
}
