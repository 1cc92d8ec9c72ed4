//! Mock Auth API and Identity Adapters
//!
//! Scriptable stand-ins for the external auth API and the Google popup.

use crate::domain::{ApiError, AuthError, LoginResponse, WalletLoginRequest};
use crate::ports::outbound::{AuthApi, GoogleIdentity};
use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{ChainKind, UserIdentity, WalletBindingStatus};

/// Calls received by [`MockAuthApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    /// Binding check for an address and chain.
    CheckBinding(String, ChainKind),
    /// Wallet login.
    WalletLogin(WalletLoginRequest),
    /// Google login with an ID token.
    GoogleLogin(String),
}

/// Mock auth API.
pub struct MockAuthApi {
    binding: Mutex<Result<WalletBindingStatus, ApiError>>,
    login: Mutex<Result<LoginResponse, ApiError>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl Default for MockAuthApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAuthApi {
    /// API that reports `NotLinked` and logs in as a fixed user.
    pub fn new() -> Self {
        Self {
            binding: Mutex::new(Ok(WalletBindingStatus::NotLinked)),
            login: Mutex::new(Ok(LoginResponse {
                user: UserIdentity::new("user-1", "trader"),
                token: "mock-token".to_string(),
            })),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Report `status` from the binding check.
    pub fn with_binding(self, status: WalletBindingStatus) -> Self {
        *self.binding.lock() = Ok(status);
        self
    }

    /// Fail the binding check with an HTTP status.
    pub fn with_binding_status_code(self, status: u16) -> Self {
        *self.binding.lock() = Err(ApiError::Http {
            status,
            message: format!("status {status}"),
        });
        self
    }

    /// Log in as `user` with `token`.
    pub fn with_login(self, user: UserIdentity, token: impl Into<String>) -> Self {
        *self.login.lock() = Ok(LoginResponse {
            user,
            token: token.into(),
        });
        self
    }

    /// Fail both login endpoints.
    pub fn with_login_error(self, error: ApiError) -> Self {
        *self.login.lock() = Err(error);
        self
    }

    /// Calls received so far.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn check_wallet_binding(
        &self,
        address: &str,
        chain: ChainKind,
    ) -> Result<WalletBindingStatus, ApiError> {
        self.calls
            .lock()
            .push(ApiCall::CheckBinding(address.to_string(), chain));
        self.binding.lock().clone()
    }

    async fn login_with_wallet(
        &self,
        request: &WalletLoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        self.calls.lock().push(ApiCall::WalletLogin(request.clone()));
        self.login.lock().clone()
    }

    async fn login_with_google(&self, id_token: &str) -> Result<LoginResponse, ApiError> {
        self.calls
            .lock()
            .push(ApiCall::GoogleLogin(id_token.to_string()));
        self.login.lock().clone()
    }
}

/// Mock Google popup returning a fixed token, or failing.
pub struct MockGoogleIdentity {
    result: Result<String, String>,
}

impl MockGoogleIdentity {
    /// Popup that yields `id_token`.
    pub fn token(id_token: impl Into<String>) -> Self {
        Self {
            result: Ok(id_token.into()),
        }
    }

    /// Popup that fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(reason.into()),
        }
    }
}

#[async_trait]
impl GoogleIdentity for MockGoogleIdentity {
    async fn sign_in(&self) -> Result<String, AuthError> {
        self.result.clone().map_err(AuthError::Identity)
    }
}
