//! # TN-01 Session Store
//!
//! Single source of truth for "who is logged in".
//!
//! **Component ID:** 01
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Hold the authenticated `UserIdentity` and the wallet binding status
//! - Persist the identity, bearer token and connected-wallet record to
//!   tab-scoped storage
//! - Rehydrate on first access; a corrupt record counts as "no session"
//! - Publish `AuthState` changes to views on a watch channel
//!
//! ## Lifecycle
//!
//! The store is constructed explicitly and injected; there is no global
//! instance. `init()` rehydrates, `reset()` clears storage and memory under a
//! single write lock so readers never see a half-cleared session.
//!
//! ## Module Structure
//!
//! ```text
//! tn-01-session-store/
//! ├── domain/          # Session, storage keys, errors
//! ├── ports/           # SessionStorage
//! ├── adapters/        # MemorySessionStorage
//! └── service          # SessionStore
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::MemorySessionStorage;
pub use domain::{keys, Session, SessionError};
pub use ports::{SessionStorage, StorageError};
pub use service::SessionStore;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
