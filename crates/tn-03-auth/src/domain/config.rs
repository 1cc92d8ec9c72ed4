//! Auth configuration with validation.

use serde::{Deserialize, Serialize};
use shared_types::ChainKind;
use std::time::Duration;

use super::errors::AuthError;

/// Auth configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Base URL of the auth API
    pub api_base_url: String,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Chains selectable in the login panel
    pub enabled_chains: Vec<ChainKind>,
    /// Capacity of the auth event channel
    pub event_capacity: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080/api".to_string(),
            request_timeout_ms: 10_000,
            enabled_chains: vec![ChainKind::Ethereum, ChainKind::Flow],
            event_capacity: 16,
        }
    }
}

impl AuthConfig {
    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.api_base_url.trim().is_empty() {
            return Err(AuthError::InvalidConfig(
                "api_base_url cannot be empty".into(),
            ));
        }

        if self.request_timeout_ms == 0 {
            return Err(AuthError::InvalidConfig(
                "request_timeout_ms cannot be 0".into(),
            ));
        }

        if self.enabled_chains.is_empty() {
            return Err(AuthError::InvalidConfig(
                "at least one chain must be enabled".into(),
            ));
        }

        if self.event_capacity == 0 {
            return Err(AuthError::InvalidConfig("event_capacity cannot be 0".into()));
        }

        Ok(())
    }
}
