//! # Guard State Machine
//!
//! Pure, clock-free state of the route guard. The driver feeds it auth
//! changes and ticks; it answers with what to render and where to go.
//!
//! ```text
//! Loading ──> Authenticated        (render content)
//!    │
//!    └──────> Unauthenticated      (countdown; Login on the last tick)
//! ```
//!
//! Entering `Unauthenticated` restarts the countdown. Leaving it cancels
//! the countdown. At most one redirect is issued per unauthenticated spell.

use shared_types::AuthState;

use super::config::GuardConfig;
use super::route::Route;

/// What the guarded view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardView {
    /// Auth state unknown; spinner only.
    Placeholder,
    /// Unauthenticated; redirect countdown.
    Countdown {
        /// Ticks left before redirect
        remaining: u32,
        /// Ticks the countdown started from
        total: u32,
    },
    /// Authenticated; render the protected content.
    Content,
}

impl GuardView {
    /// Fraction of the countdown elapsed, `0.0..=1.0`. Zero outside a countdown.
    pub fn progress(&self) -> f64 {
        match self {
            Self::Countdown { remaining, total } if *total > 0 => {
                f64::from(total - remaining) / f64::from(*total)
            }
            _ => 0.0,
        }
    }
}

/// Route guard state.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    total: u32,
    auth: AuthState,
    remaining: u32,
    redirected: bool,
}

impl RouteGuard {
    /// Guard in the `Loading` state.
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            total: config.countdown_ticks,
            auth: AuthState::Loading,
            remaining: config.countdown_ticks,
            redirected: false,
        }
    }

    /// Last auth state seen.
    pub fn auth_state(&self) -> AuthState {
        self.auth
    }

    /// Ticks left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown is running.
    pub fn is_counting(&self) -> bool {
        self.auth == AuthState::Unauthenticated && !self.redirected
    }

    /// Adopt a new auth state. Repeating the current state changes nothing.
    pub fn on_auth_state(&mut self, state: AuthState) {
        if state == self.auth {
            return;
        }
        self.auth = state;
        self.remaining = self.total;
        self.redirected = false;
    }

    /// One tick elapsed. Returns the route to navigate to when the
    /// countdown reaches zero.
    pub fn tick(&mut self) -> Option<Route> {
        if !self.is_counting() {
            return None;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.redirected = true;
            return Some(Route::Login);
        }
        self.remaining -= 1;
        None
    }

    /// The "go to login" button. Counts as the redirect, so the countdown
    /// stops.
    pub fn go_to_login(&mut self) -> Option<Route> {
        if self.redirected {
            return None;
        }
        self.redirected = true;
        Some(Route::Login)
    }

    /// What to render.
    pub fn view(&self) -> GuardView {
        match self.auth {
            AuthState::Loading => GuardView::Placeholder,
            AuthState::Authenticated => GuardView::Content,
            AuthState::Unauthenticated => GuardView::Countdown {
                remaining: self.remaining,
                total: self.total,
            },
        }
    }
}
