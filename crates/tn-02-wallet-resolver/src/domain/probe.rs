//! # Probe Results
//!
//! Tagged outcome of a provider lookup and the handles it yields.

use crate::ports::{AptosProvider, WalletProvider};
use serde::{Deserialize, Serialize};
use shared_types::{ChainKind, ConnectedWallet, WalletKind};
use std::fmt;
use std::sync::Arc;

/// Where a provider was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjectionSlot {
    /// The generic `ethereum` slot itself.
    EthereumSlot,
    /// Entry `n` of `ethereum.providers`.
    ProviderList(usize),
    /// The dedicated `okxwallet` slot.
    OkxSlot,
}

/// A resolved provider for one wallet kind.
#[derive(Clone)]
pub struct ProviderHandle {
    kind: WalletKind,
    slot: InjectionSlot,
    provider: Arc<dyn WalletProvider>,
}

impl ProviderHandle {
    /// Wrap a provider found in `slot`.
    pub fn new(kind: WalletKind, slot: InjectionSlot, provider: Arc<dyn WalletProvider>) -> Self {
        Self {
            kind,
            slot,
            provider,
        }
    }

    /// Wallet this handle was resolved for.
    pub fn kind(&self) -> WalletKind {
        self.kind
    }

    /// Injection point the provider came from.
    pub fn slot(&self) -> InjectionSlot {
        self.slot
    }

    /// The provider object.
    pub fn provider(&self) -> &Arc<dyn WalletProvider> {
        &self.provider
    }

    /// Aptos sub-interface, if exposed.
    pub fn aptos(&self) -> Option<Arc<dyn AptosProvider>> {
        self.provider.aptos()
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderHandle")
            .field("kind", &self.kind)
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

/// Result of probing the injected globals for a wallet.
#[derive(Clone, Debug)]
pub enum ProviderProbe {
    /// A provider that passed both identity checks.
    Found(ProviderHandle),
    /// Nothing claims to be the requested wallet.
    NotFound,
    /// Candidates claimed to be the wallet but also claimed to be a
    /// competing extension, so none was accepted.
    Ambiguous {
        /// Number of rejected candidates.
        rejected: usize,
    },
}

impl ProviderProbe {
    /// The handle, if one was found.
    pub fn into_handle(self) -> Option<ProviderHandle> {
        match self {
            Self::Found(handle) => Some(handle),
            Self::NotFound | Self::Ambiguous { .. } => None,
        }
    }

    /// Whether a provider was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// A connected wallet: provider kind, chain and active address.
///
/// Lives for the page session only; nothing reconnects automatically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletHandle {
    /// Wallet extension.
    pub provider_kind: WalletKind,
    /// Chain the address belongs to.
    pub chain: ChainKind,
    /// Active address.
    pub address: String,
    /// Whether the connection is live.
    pub is_connected: bool,
}

impl WalletHandle {
    /// A live connection.
    pub fn connected(provider_kind: WalletKind, chain: ChainKind, address: String) -> Self {
        Self {
            provider_kind,
            chain,
            address,
            is_connected: true,
        }
    }

    /// The record persisted to session storage.
    pub fn to_record(&self) -> ConnectedWallet {
        ConnectedWallet {
            address: self.address.clone(),
            wallet_type: self.provider_kind,
            chain_type: self.chain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_has_no_handle() {
        assert!(ProviderProbe::Ambiguous { rejected: 1 }.into_handle().is_none());
        assert!(ProviderProbe::NotFound.into_handle().is_none());
        assert!(!ProviderProbe::NotFound.is_found());
    }

    #[test]
    fn test_wallet_handle_record() {
        let handle = WalletHandle::connected(WalletKind::Metamask, ChainKind::Ethereum, "0x1".into());
        let record = handle.to_record();
        assert_eq!(record.address, "0x1");
        assert_eq!(record.wallet_type, WalletKind::Metamask);
        assert!(handle.is_connected);
    }
}
