//! # TradingNodes Demo
//!
//! Runs the client core against the in-memory environment: loads the
//! marketplace, logs in with MetaMask on Ethereum, publishes a node and
//! prints the resulting dashboard totals.
//!
//! Usage: `tn-runtime [config.json]`

use anyhow::{Context, Result};
use shared_types::WalletKind;
use tn_03_auth::Authenticator;
use tn_06_node_authoring::SubmitMode;
use tn_runtime::{AppConfig, AppContainer, Environment};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => AppConfig::default(),
    }
    .with_env_overrides()?;

    if let Err(e) = tn_telemetry::init_logging(&config.telemetry) {
        eprintln!("Logging disabled: {e}");
    }
    info!("Starting TradingNodes demo v{}", tn_runtime::VERSION);

    let app = AppContainer::new(config, Environment::demo())?;

    let marketplace = app.marketplace_view();
    let count = marketplace.load().await?;
    info!("Marketplace shows {} nodes", count);

    let panel = app.login_panel();
    panel.open();
    match panel.login_with_wallet(WalletKind::Metamask).await {
        Some(outcome) => {
            app.login_redirect().on_login_success();
            info!("Logged in as {}", outcome.user.username);
        }
        None => warn!("Wallet login failed"),
    }

    let editor = app.node_editor();
    editor.edit(|form| {
        form.name = "Demo Momentum Node".to_string();
        form.description = "Follows short-term price momentum".to_string();
        form.price = "9.99".to_string();
        form.tags = "Demo, Momentum".to_string();
        form.add_input();
        form.add_output();
    });
    let published = editor.submit(SubmitMode::Publish).await?;
    info!("Published node {}", published.id);

    let dashboard = app.dashboard_view();
    let stats = dashboard.load(&published.author_id).await?;
    info!(
        "Dashboard: {} nodes, {} published, revenue {:.2}",
        stats.total, stats.published, stats.revenue
    );

    app.auth().logout();
    Ok(())
}
