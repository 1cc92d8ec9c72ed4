//! Login page redirects.
//!
//! The login page sends visitors who are already authenticated straight to
//! the dashboard, and does the same after a successful login.

use std::sync::Arc;

use shared_types::{AuthState, Notice, Notifier};
use tracing::debug;

use crate::domain::Route;
use crate::ports::outbound::Navigator;

/// Redirect behaviour of the login page.
pub struct LoginRedirect {
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl LoginRedirect {
    /// Create the redirect behaviour.
    pub fn new(navigator: Arc<dyn Navigator>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            navigator,
            notifier,
        }
    }

    /// React to the session's auth state. Returns whether it navigated.
    pub fn on_auth_state(&self, state: AuthState) -> bool {
        if state != AuthState::Authenticated {
            return false;
        }
        debug!("[tn-04] Already authenticated, leaving login page");
        self.navigator.navigate(&Route::Dashboard);
        true
    }

    /// A login from this page completed.
    pub fn on_login_success(&self) {
        self.notifier.notify(Notice::success(
            "Welcome!",
            "You have successfully logged in.",
        ));
        self.navigator.navigate(&Route::Dashboard);
    }
}
