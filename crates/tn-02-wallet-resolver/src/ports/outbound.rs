//! # Outbound Ports
//!
//! Capability probes over the two well-known injection points: the generic
//! Ethereum-style `ethereum` slot and the dedicated `okxwallet` slot.

use crate::domain::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An injected wallet provider (EIP-1193 style).
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Self-declared MetaMask flag.
    fn is_meta_mask(&self) -> bool {
        false
    }

    /// Self-declared OKX Wallet flag.
    fn is_okx_wallet(&self) -> bool {
        false
    }

    /// Co-injected providers exposed by the slot, if it multiplexes several.
    fn providers(&self) -> Vec<Arc<dyn WalletProvider>> {
        Vec::new()
    }

    /// Aptos sub-interface, if the extension exposes one.
    fn aptos(&self) -> Option<Arc<dyn AptosProvider>> {
        None
    }

    /// Issue a JSON-RPC request.
    async fn request(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ProviderError>;
}

/// Account returned by an Aptos-capable provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AptosAccount {
    /// Account address.
    pub address: String,
    /// Account public key, when disclosed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

/// Aptos sub-interface of a wallet provider.
#[async_trait]
pub trait AptosProvider: Send + Sync {
    /// Request the active Aptos account.
    async fn account(&self) -> Result<AptosAccount, ProviderError>;
}

/// Read-only view of the host's injected globals.
pub trait InjectedGlobals: Send + Sync {
    /// The generic `ethereum` slot.
    fn ethereum(&self) -> Option<Arc<dyn WalletProvider>>;

    /// The dedicated `okxwallet` slot.
    fn okxwallet(&self) -> Option<Arc<dyn WalletProvider>>;
}
