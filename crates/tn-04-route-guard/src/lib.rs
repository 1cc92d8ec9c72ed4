//! # TN-04 Route Guard
//!
//! Blocks protected views until the auth state is known and sends
//! unauthenticated visitors to the login page after a countdown.
//!
//! **Component ID:** 04
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Behaviour
//!
//! | Auth state | Renders | Timer |
//! |------------|---------|-------|
//! | Loading | placeholder | none |
//! | Unauthenticated | countdown | one tick per interval; `/login` on the last |
//! | Authenticated | protected content | none |
//!
//! The countdown is cleared when the auth state changes or the view is torn
//! down. The countdown only starts once the state is definitely
//! unauthenticated, so a slow session rehydration shows the placeholder
//! rather than a countdown.
//!
//! ## Module Structure
//!
//! ```text
//! tn-04-route-guard/
//! ├── domain/          # Route, RouteGuard, GuardView, GuardConfig
//! ├── ports/           # Navigator
//! ├── adapters/        # RecordingNavigator
//! ├── driver           # run_guard / spawn_guard on tokio time
//! └── login_redirect   # LoginRedirect
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod driver;
pub mod login_redirect;
pub mod ports;

// Re-exports
pub use adapters::RecordingNavigator;
pub use domain::{GuardConfig, GuardError, GuardView, Route, RouteGuard};
pub use driver::{run_guard, spawn_guard, GuardCommand, GuardHandle};
pub use login_redirect::LoginRedirect;
pub use ports::Navigator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
