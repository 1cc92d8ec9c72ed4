//! Mock Wallet Provider Adapter
//!
//! Scriptable `WalletProvider` that records every request it receives.

use crate::domain::ProviderError;
use crate::ports::outbound::{AptosAccount, AptosProvider, WalletProvider};
use crate::resolver::ETH_REQUEST_ACCOUNTS;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Mock provider with configurable identity flags and accounts.
#[derive(Default)]
pub struct MockWalletProvider {
    is_meta_mask: bool,
    is_okx_wallet: bool,
    accounts: Vec<String>,
    providers: Vec<Arc<dyn WalletProvider>>,
    aptos: Option<Arc<dyn AptosProvider>>,
    failure: Option<ProviderError>,
    requests: Mutex<Vec<String>>,
}

impl MockWalletProvider {
    /// Provider with no identity flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider claiming to be MetaMask.
    pub fn metamask() -> Self {
        Self::new().with_flags(true, false)
    }

    /// Provider claiming to be OKX Wallet.
    pub fn okx() -> Self {
        Self::new().with_flags(false, true)
    }

    /// Set both identity flags.
    pub fn with_flags(mut self, is_meta_mask: bool, is_okx_wallet: bool) -> Self {
        self.is_meta_mask = is_meta_mask;
        self.is_okx_wallet = is_okx_wallet;
        self
    }

    /// Accounts returned by `eth_requestAccounts`.
    pub fn with_accounts<I, S>(mut self, accounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accounts = accounts.into_iter().map(Into::into).collect();
        self
    }

    /// Co-injected providers list.
    pub fn with_providers(mut self, providers: Vec<Arc<dyn WalletProvider>>) -> Self {
        self.providers = providers;
        self
    }

    /// Aptos sub-interface.
    pub fn with_aptos(mut self, aptos: Arc<dyn AptosProvider>) -> Self {
        self.aptos = Some(aptos);
        self
    }

    /// Fail every request with `error`.
    pub fn failing(mut self, error: ProviderError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Methods requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    fn is_meta_mask(&self) -> bool {
        self.is_meta_mask
    }

    fn is_okx_wallet(&self) -> bool {
        self.is_okx_wallet
    }

    fn providers(&self) -> Vec<Arc<dyn WalletProvider>> {
        self.providers.clone()
    }

    fn aptos(&self) -> Option<Arc<dyn AptosProvider>> {
        self.aptos.clone()
    }

    async fn request(
        &self,
        method: &str,
        _params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ProviderError> {
        debug!("[tn-02] mock provider request {}", method);
        self.requests.lock().push(method.to_string());

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        match method {
            ETH_REQUEST_ACCOUNTS => Ok(serde_json::json!(self.accounts)),
            _ => Ok(serde_json::Value::Null),
        }
    }
}

/// Mock Aptos sub-interface.
#[derive(Default)]
pub struct MockAptosProvider {
    address: String,
    calls: Mutex<usize>,
}

impl MockAptosProvider {
    /// Aptos provider returning `address`.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            calls: Mutex::new(0),
        }
    }

    /// Number of `account()` calls.
    pub fn call_count(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl AptosProvider for MockAptosProvider {
    async fn account(&self) -> Result<AptosAccount, ProviderError> {
        *self.calls.lock() += 1;
        Ok(AptosAccount {
            address: self.address.clone(),
            public_key: None,
        })
    }
}
