//! HTTP Auth API Adapter
//!
//! `AuthApi` over reqwest. Every request carries the session's bearer token
//! when one exists; non-success statuses become `ApiError::Http` so the
//! orchestrator can tell a 401 from anything else.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared_types::{ChainKind, WalletBindingStatus};
use tn_01_session_store::SessionStore;
use tracing::debug;

use crate::domain::{ApiError, AuthConfig, BindingCheckResponse, LoginResponse, WalletLoginRequest};
use crate::ports::outbound::AuthApi;

/// Binding check endpoint.
pub const BINDING_PATH: &str = "/auth/wallet/binding";
/// Wallet login endpoint.
pub const WALLET_LOGIN_PATH: &str = "/auth/wallet/login";
/// Google login endpoint.
pub const GOOGLE_LOGIN_PATH: &str = "/auth/google/login";

/// How a request body is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyEncoding {
    /// Plain JSON.
    #[default]
    Json,
    /// Encrypted payload sent as text.
    Encrypted,
    /// Multipart form upload.
    FormData,
}

impl BodyEncoding {
    /// `Content-Type` header value.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json;charset=UTF-8",
            Self::Encrypted => "text/plain",
            Self::FormData => "multipart/form-data",
        }
    }
}

/// Headers every auth API request carries.
pub fn prepare_headers(token: Option<&str>, encoding: BodyEncoding) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ApiError::Transport(format!("invalid token header: {e}")))?;
        headers.insert(AUTHORIZATION, value);
    }
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(encoding.content_type()));
    Ok(headers)
}

/// Map a non-success response to an `ApiError`.
pub fn error_for_status(status: u16, body: &str) -> ApiError {
    let message = if body.trim().is_empty() {
        StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown status")
            .to_string()
    } else {
        body.to_string()
    };
    ApiError::Http { status, message }
}

/// Auth API client.
pub struct HttpAuthApi {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl HttpAuthApi {
    /// Create a client for `config.api_base_url`, reading the bearer token
    /// from `session` on every request.
    pub fn new(config: &AuthConfig, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R, ApiError> {
        let headers = prepare_headers(self.session.token().as_deref(), BodyEncoding::Json)?;
        let response = request
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status.as_u16(), &body));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl AuthApi for HttpAuthApi {
    async fn check_wallet_binding(
        &self,
        address: &str,
        chain: ChainKind,
    ) -> Result<WalletBindingStatus, ApiError> {
        debug!("[tn-03] GET {} for {} on {}", BINDING_PATH, address, chain);
        let request = self
            .client
            .get(self.url(BINDING_PATH))
            .query(&[("address", address), ("chain", chain.as_str())]);
        let response: BindingCheckResponse = self.send(request).await?;
        Ok(response.status)
    }

    async fn login_with_wallet(
        &self,
        request: &WalletLoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        debug!("[tn-03] POST {}", WALLET_LOGIN_PATH);
        let request = self.client.post(self.url(WALLET_LOGIN_PATH)).json(request);
        self.send(request).await
    }

    async fn login_with_google(&self, id_token: &str) -> Result<LoginResponse, ApiError> {
        debug!("[tn-03] POST {}", GOOGLE_LOGIN_PATH);
        let request = self
            .client
            .post(self.url(GOOGLE_LOGIN_PATH))
            .json(&serde_json::json!({ "idToken": id_token }));
        self.send(request).await
    }
}
