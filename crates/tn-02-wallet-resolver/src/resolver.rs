//! Wallet Resolver
//!
//! The only place that reads the injected globals.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{InjectionSlot, ProviderError, ProviderHandle, ProviderProbe};
use crate::ports::{InjectedGlobals, WalletProvider};
use shared_types::WalletKind;

/// EIP-1102 account access request.
pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";

/// Resolves wallet kinds to injected providers.
#[derive(Clone)]
pub struct WalletResolver {
    globals: Arc<dyn InjectedGlobals>,
}

impl WalletResolver {
    /// Create a resolver over the given globals.
    pub fn new(globals: Arc<dyn InjectedGlobals>) -> Self {
        Self { globals }
    }

    /// Probe for `kind`.
    pub fn resolve(&self, kind: WalletKind) -> ProviderProbe {
        let probe = match kind {
            WalletKind::Metamask => self.resolve_metamask(),
            WalletKind::Okx => self.resolve_okx(),
            WalletKind::Phantom => {
                debug!("[tn-02] Phantom resolution is not implemented");
                ProviderProbe::NotFound
            }
        };

        match &probe {
            ProviderProbe::Found(handle) => {
                debug!("[tn-02] Resolved {} from {:?}", kind, handle.slot())
            }
            ProviderProbe::NotFound => debug!("[tn-02] No provider for {}", kind),
            ProviderProbe::Ambiguous { rejected } => warn!(
                "[tn-02] {} candidate(s) for {} also claim to be OKX Wallet; none accepted",
                rejected, kind
            ),
        }
        probe
    }

    fn resolve_metamask(&self) -> ProviderProbe {
        let Some(ethereum) = self.globals.ethereum() else {
            return ProviderProbe::NotFound;
        };

        if is_genuine_metamask(ethereum.as_ref()) {
            return ProviderProbe::Found(ProviderHandle::new(
                WalletKind::Metamask,
                InjectionSlot::EthereumSlot,
                ethereum,
            ));
        }

        let mut rejected = usize::from(ethereum.is_meta_mask());
        for (index, provider) in ethereum.providers().into_iter().enumerate() {
            if is_genuine_metamask(provider.as_ref()) {
                return ProviderProbe::Found(ProviderHandle::new(
                    WalletKind::Metamask,
                    InjectionSlot::ProviderList(index),
                    provider,
                ));
            }
            if provider.is_meta_mask() {
                rejected += 1;
            }
        }

        if rejected > 0 {
            ProviderProbe::Ambiguous { rejected }
        } else {
            ProviderProbe::NotFound
        }
    }

    fn resolve_okx(&self) -> ProviderProbe {
        if let Some(okx) = self.globals.okxwallet() {
            return ProviderProbe::Found(ProviderHandle::new(
                WalletKind::Okx,
                InjectionSlot::OkxSlot,
                okx,
            ));
        }

        match self.globals.ethereum() {
            Some(ethereum) if ethereum.is_okx_wallet() => ProviderProbe::Found(
                ProviderHandle::new(WalletKind::Okx, InjectionSlot::EthereumSlot, ethereum),
            ),
            _ => ProviderProbe::NotFound,
        }
    }
}

/// OKX Wallet sets `isMetaMask` for compatibility, so the flag alone is not enough.
fn is_genuine_metamask(provider: &dyn WalletProvider) -> bool {
    provider.is_meta_mask() && !provider.is_okx_wallet()
}

/// Request account access and decode the returned addresses.
pub async fn request_accounts(handle: &ProviderHandle) -> Result<Vec<String>, ProviderError> {
    let value = handle
        .provider()
        .request(ETH_REQUEST_ACCOUNTS, None)
        .await?;

    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockWalletProvider, StaticGlobals};

    fn resolver(globals: StaticGlobals) -> WalletResolver {
        WalletResolver::new(Arc::new(globals))
    }

    #[test]
    fn test_metamask_in_generic_slot() {
        let globals = StaticGlobals::empty().with_ethereum(Arc::new(MockWalletProvider::metamask()));
        let handle = resolver(globals).resolve(WalletKind::Metamask).into_handle().unwrap();
        assert_eq!(handle.slot(), InjectionSlot::EthereumSlot);
        assert_eq!(handle.kind(), WalletKind::Metamask);
    }

    #[test]
    fn test_metamask_rejects_okx_impersonation() {
        let spoof = MockWalletProvider::new().with_flags(true, true);
        let globals = StaticGlobals::empty().with_ethereum(Arc::new(spoof));

        let probe = resolver(globals).resolve(WalletKind::Metamask);
        assert!(matches!(probe, ProviderProbe::Ambiguous { rejected: 1 }));
        assert!(probe.into_handle().is_none());
    }

    #[test]
    fn test_metamask_found_in_provider_list() {
        let okx_spoof: Arc<dyn WalletProvider> =
            Arc::new(MockWalletProvider::new().with_flags(true, true));
        let genuine: Arc<dyn WalletProvider> = Arc::new(MockWalletProvider::metamask());
        let slot = MockWalletProvider::new()
            .with_flags(true, true)
            .with_providers(vec![okx_spoof, genuine]);
        let globals = StaticGlobals::empty().with_ethereum(Arc::new(slot));

        let handle = resolver(globals).resolve(WalletKind::Metamask).into_handle().unwrap();
        assert_eq!(handle.slot(), InjectionSlot::ProviderList(1));
    }

    #[test]
    fn test_metamask_not_found_without_claimants() {
        let globals = StaticGlobals::empty().with_ethereum(Arc::new(MockWalletProvider::new()));
        assert!(matches!(
            resolver(globals).resolve(WalletKind::Metamask),
            ProviderProbe::NotFound
        ));
        assert!(matches!(
            resolver(StaticGlobals::empty()).resolve(WalletKind::Metamask),
            ProviderProbe::NotFound
        ));
    }

    #[test]
    fn test_okx_prefers_dedicated_slot() {
        let globals = StaticGlobals::empty()
            .with_ethereum(Arc::new(MockWalletProvider::okx()))
            .with_okxwallet(Arc::new(MockWalletProvider::okx()));
        let handle = resolver(globals).resolve(WalletKind::Okx).into_handle().unwrap();
        assert_eq!(handle.slot(), InjectionSlot::OkxSlot);
    }

    #[test]
    fn test_okx_falls_back_to_generic_slot() {
        let globals = StaticGlobals::empty().with_ethereum(Arc::new(MockWalletProvider::okx()));
        let handle = resolver(globals).resolve(WalletKind::Okx).into_handle().unwrap();
        assert_eq!(handle.slot(), InjectionSlot::EthereumSlot);

        let globals = StaticGlobals::empty().with_ethereum(Arc::new(MockWalletProvider::metamask()));
        assert!(!resolver(globals).resolve(WalletKind::Okx).is_found());
    }

    #[test]
    fn test_phantom_is_not_resolved() {
        let globals = StaticGlobals::empty().with_ethereum(Arc::new(MockWalletProvider::metamask()));
        assert!(!resolver(globals).resolve(WalletKind::Phantom).is_found());
    }

    #[tokio::test]
    async fn test_request_accounts_decodes_array() {
        let provider = Arc::new(MockWalletProvider::metamask().with_accounts(["0xabc"]));
        let handle = ProviderHandle::new(WalletKind::Metamask, InjectionSlot::EthereumSlot, provider);
        assert_eq!(request_accounts(&handle).await.unwrap(), vec!["0xabc".to_string()]);
    }

    #[tokio::test]
    async fn test_request_accounts_rejects_malformed_response() {
        struct Weird;

        #[async_trait::async_trait]
        impl WalletProvider for Weird {
            async fn request(
                &self,
                _method: &str,
                _params: Option<serde_json::Value>,
            ) -> Result<serde_json::Value, ProviderError> {
                Ok(serde_json::json!({ "accounts": 1 }))
            }
        }

        let handle = ProviderHandle::new(WalletKind::Okx, InjectionSlot::OkxSlot, Arc::new(Weird));
        assert!(matches!(
            request_accounts(&handle).await,
            Err(ProviderError::InvalidResponse(_))
        ));
    }
}
