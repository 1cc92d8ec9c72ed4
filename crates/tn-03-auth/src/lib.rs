//! # TN-03 Authentication Orchestrator
//!
//! Drives Google and wallet logins to a single outcome: an identity and a
//! bearer token held by the session store.
//!
//! **Component ID:** 03
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Wallet Login
//!
//! 1. Reject pairs the wallet cannot address (MetaMask + Aptos) before any
//!    provider call.
//! 2. Resolve the injected provider (tn-02).
//! 3. Request an address (`eth_requestAccounts`, or the Aptos sub-interface).
//! 4. Check the address binding. A 401 reads as "not linked"; any other
//!    error fails the attempt. "Linked to other" fails the attempt.
//! 5. Exchange the address for an identity and token; persist the
//!    connected-wallet record.
//!
//! Completion is a returned [`LoginOutcome`] plus an [`AuthEvent`] on a
//! broadcast channel; the caller decides where to navigate.
//!
//! ## Module Structure
//!
//! ```text
//! tn-03-auth/
//! ├── domain/          # AuthError, ApiError, AuthConfig, login types
//! ├── ports/
//! │   ├── inbound      # Authenticator
//! │   └── outbound     # AuthApi, GoogleIdentity
//! ├── adapters/        # HttpAuthApi (reqwest), MockAuthApi, MockGoogleIdentity
//! ├── service          # AuthOrchestrator
//! └── login_panel      # LoginPanel view-state
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod login_panel;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{
    prepare_headers, ApiCall, BodyEncoding, HttpAuthApi, MockAuthApi, MockGoogleIdentity,
};
pub use domain::{
    ApiError, AuthConfig, AuthError, AuthEvent, AuthStatus, LoginMethod, LoginOutcome,
    LoginPhase, LoginResponse, WalletLoginRequest,
};
pub use login_panel::{ChainOption, LoginPanel, WalletOption};
pub use ports::{AuthApi, Authenticator, GoogleIdentity};
pub use service::AuthOrchestrator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
