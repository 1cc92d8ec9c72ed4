//! Static Injected Globals Adapter
//!
//! Implements `InjectedGlobals` from providers registered up front. Hosts
//! that bridge real browser globals populate it once at startup.

use crate::ports::outbound::{InjectedGlobals, WalletProvider};
use std::sync::Arc;

/// Fixed set of injected providers.
#[derive(Clone, Default)]
pub struct StaticGlobals {
    ethereum: Option<Arc<dyn WalletProvider>>,
    okxwallet: Option<Arc<dyn WalletProvider>>,
}

impl StaticGlobals {
    /// No wallet extensions installed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the generic `ethereum` slot.
    pub fn with_ethereum(mut self, provider: Arc<dyn WalletProvider>) -> Self {
        self.ethereum = Some(provider);
        self
    }

    /// Set the dedicated `okxwallet` slot.
    pub fn with_okxwallet(mut self, provider: Arc<dyn WalletProvider>) -> Self {
        self.okxwallet = Some(provider);
        self
    }
}

impl InjectedGlobals for StaticGlobals {
    fn ethereum(&self) -> Option<Arc<dyn WalletProvider>> {
        self.ethereum.clone()
    }

    fn okxwallet(&self) -> Option<Arc<dyn WalletProvider>> {
        self.okxwallet.clone()
    }
}
