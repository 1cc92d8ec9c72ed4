//! Authoring configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::errors::AuthoringError;

/// Upper bound on the simulated submit latency.
pub const MAX_SUBMIT_LATENCY_MS: u64 = 60_000;

/// Authoring configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringConfig {
    /// Delay before a submission completes, in milliseconds
    pub submit_latency_ms: u64,
}

impl Default for AuthoringConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: 1_000,
        }
    }
}

impl AuthoringConfig {
    /// Submit latency as a `Duration`.
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AuthoringError> {
        if self.submit_latency_ms > MAX_SUBMIT_LATENCY_MS {
            return Err(AuthoringError::InvalidConfig(format!(
                "submit_latency_ms cannot exceed {MAX_SUBMIT_LATENCY_MS}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthoringConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.submit_latency(), Duration::from_secs(1));
    }

    #[test]
    fn test_latency_bound() {
        let config = AuthoringConfig {
            submit_latency_ms: MAX_SUBMIT_LATENCY_MS + 1,
        };
        assert!(config.validate().is_err());
    }
}
