//! # TN-02 Wallet-Provider Resolver
//!
//! Locates the injected provider object for a requested wallet without
//! picking up a competing extension that mimics it.
//!
//! **Component ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Several wallet extensions inject into the same global slot and set each
//! other's identity flags. Resolution therefore checks both polarity
//! (`isMetaMask`) and negation (`!isOkxWallet`):
//!
//! | Wallet | Accepted |
//! |--------|----------|
//! | MetaMask | generic slot or first list entry with `isMetaMask && !isOkxWallet` |
//! | OKX | dedicated `okxwallet` slot, else generic slot with `isOkxWallet` |
//! | Phantom | not resolved |
//!
//! Absence is a value (`ProviderProbe::NotFound`/`Ambiguous`), not an error.
//!
//! ## Module Structure
//!
//! ```text
//! tn-02-wallet-resolver/
//! ├── domain/          # ProviderProbe, ProviderHandle, WalletHandle, errors
//! ├── ports/           # InjectedGlobals, WalletProvider, AptosProvider
//! ├── adapters/        # StaticGlobals, MockWalletProvider
//! └── resolver         # WalletResolver
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod resolver;

// Re-exports
pub use adapters::{MockAptosProvider, MockWalletProvider, StaticGlobals};
pub use domain::{InjectionSlot, ProviderError, ProviderHandle, ProviderProbe, WalletHandle};
pub use ports::{AptosAccount, AptosProvider, InjectedGlobals, WalletProvider};
pub use resolver::{request_accounts, WalletResolver, ETH_REQUEST_ACCOUNTS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
