//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-process implementations of the injected-wallet ports.

mod mock_provider;
mod static_globals;

pub use mock_provider::{MockAptosProvider, MockWalletProvider};
pub use static_globals::StaticGlobals;
