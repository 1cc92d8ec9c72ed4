//! Shared setup for the runtime integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use shared_types::NoticeBoard;
use tn_04_route_guard::RecordingNavigator;
use tn_runtime::{AppConfig, AppContainer, Environment};

pub struct Harness {
    pub app: AppContainer,
    pub navigator: Arc<RecordingNavigator>,
    pub board: Arc<NoticeBoard>,
}

/// Defaults with the simulated delays switched off.
pub fn quiet_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.marketplace.simulated_latency_ms = 0;
    config.authoring.submit_latency_ms = 0;
    config
}

pub fn harness_with(config: AppConfig, env: Environment) -> Harness {
    let navigator = Arc::new(RecordingNavigator::new());
    let board = Arc::new(NoticeBoard::new());
    let env = Environment {
        navigator: navigator.clone(),
        notifier: board.clone(),
        ..env
    };
    let app = AppContainer::new(config, env).expect("container builds");
    Harness {
        app,
        navigator,
        board,
    }
}

pub fn harness() -> Harness {
    harness_with(quiet_config(), Environment::demo())
}
