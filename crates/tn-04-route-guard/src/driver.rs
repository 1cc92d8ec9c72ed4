//! Countdown Driver
//!
//! Runs a [`RouteGuard`] on tokio time: listens for auth changes, ticks
//! while the countdown runs, and navigates when the guard says so. The task
//! stops on teardown or when its handle is dropped, taking its timer with it.

use std::future::pending;
use std::sync::Arc;

use shared_types::AuthState;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval};
use tracing::debug;

use crate::domain::{GuardConfig, GuardView, RouteGuard};
use crate::ports::outbound::Navigator;

/// Commands a guarded view sends to its driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardCommand {
    /// "Go to login" button.
    GoToLogin,
    /// The view is being torn down.
    Teardown,
}

/// Handle to a running guard.
pub struct GuardHandle {
    commands: mpsc::UnboundedSender<GuardCommand>,
    view: watch::Receiver<GuardView>,
    task: JoinHandle<()>,
}

impl GuardHandle {
    /// What the view should render now.
    pub fn view(&self) -> GuardView {
        *self.view.borrow()
    }

    /// Receiver for view changes.
    pub fn subscribe(&self) -> watch::Receiver<GuardView> {
        self.view.clone()
    }

    /// Navigate to login now.
    pub fn go_to_login(&self) {
        let _ = self.commands.send(GuardCommand::GoToLogin);
    }

    /// Stop the driver and wait for it to exit.
    pub async fn teardown(self) {
        let _ = self.commands.send(GuardCommand::Teardown);
        let _ = self.task.await;
    }
}

/// Spawn a guard driver for a protected view.
pub fn spawn_guard(
    config: GuardConfig,
    auth: watch::Receiver<AuthState>,
    navigator: Arc<dyn Navigator>,
) -> GuardHandle {
    let (commands, command_rx) = mpsc::unbounded_channel();
    let initial = RouteGuard::new(&config).view();
    let (view_tx, view) = watch::channel(initial);
    let task = tokio::spawn(run_guard(config, auth, navigator, view_tx, command_rx));
    GuardHandle {
        commands,
        view,
        task,
    }
}

/// Drive a guard until teardown, until every command sender is dropped, or
/// until the auth state source goes away.
pub async fn run_guard(
    config: GuardConfig,
    mut auth: watch::Receiver<AuthState>,
    navigator: Arc<dyn Navigator>,
    view_tx: watch::Sender<GuardView>,
    mut commands: mpsc::UnboundedReceiver<GuardCommand>,
) {
    let period = config.tick_interval();
    let mut guard = RouteGuard::new(&config);
    let mut ticker: Option<Interval> = None;

    guard.on_auth_state(*auth.borrow_and_update());

    loop {
        if guard.is_counting() {
            if ticker.is_none() {
                debug!("[tn-04] Countdown started ({} ticks)", guard.remaining());
                ticker = Some(interval_at(Instant::now() + period, period));
            }
        } else if ticker.take().is_some() {
            debug!("[tn-04] Countdown cleared");
        }
        view_tx.send_replace(guard.view());

        tokio::select! {
            command = commands.recv() => match command {
                Some(GuardCommand::GoToLogin) => {
                    if let Some(route) = guard.go_to_login() {
                        navigator.navigate(&route);
                    }
                }
                Some(GuardCommand::Teardown) | None => break,
            },
            changed = auth.changed() => {
                if changed.is_err() {
                    debug!("[tn-04] Auth state source closed");
                    break;
                }
                let state = *auth.borrow_and_update();
                guard.on_auth_state(state);
            }
            _ = next_tick(&mut ticker) => {
                if let Some(route) = guard.tick() {
                    navigator.navigate(&route);
                }
            }
        }
    }

    debug!("[tn-04] Guard torn down");
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => pending::<()>().await,
    }
}
