//! # Application Configuration
//!
//! One JSON document with a section per component. Every section is
//! optional and falls back to the component defaults. `TN_*` environment
//! variables override individual values after the file is read.
//!
//! ```json
//! {
//!   "auth": { "api_base_url": "https://api.example.com", "enabled_chains": ["ethereum"] },
//!   "guard": { "countdown_ticks": 8 },
//!   "marketplace": { "simulated_latency_ms": 0 }
//! }
//! ```

use std::env;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared_types::ChainKind;
use thiserror::Error;
use tn_03_auth::AuthConfig;
use tn_04_route_guard::GuardConfig;
use tn_05_marketplace::MarketplaceConfig;
use tn_06_node_authoring::AuthoringConfig;
use tn_telemetry::TelemetryConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid configuration JSON.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// An environment override could not be parsed.
    #[error("Invalid value for {var}: {value:?}")]
    Override {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },

    /// A section failed validation.
    #[error("Invalid {section} configuration: {reason}")]
    Invalid {
        /// Section name
        section: &'static str,
        /// Validation message
        reason: String,
    },
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging
    pub telemetry: TelemetryConfig,
    /// Authentication and the auth API
    pub auth: AuthConfig,
    /// Protected-route countdown
    pub guard: GuardConfig,
    /// Listing catalog
    pub marketplace: MarketplaceConfig,
    /// Node authoring
    pub authoring: AuthoringConfig,
}

fn parse_var<T: FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Override { var, value })
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::Override { var, value }),
    }
}

fn parse_chains(var: &'static str, value: String) -> Result<Vec<ChainKind>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<ChainKind>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ConfigError::Override { var, value })
}

fn invalid(section: &'static str, e: impl std::fmt::Display) -> ConfigError {
    ConfigError::Invalid {
        section,
        reason: e.to_string(),
    }
}

impl AppConfig {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `TN_SERVICE_NAME` | `telemetry.service_name` |
    /// | `TN_LOG_LEVEL` | `telemetry.log_level` |
    /// | `TN_JSON_LOGS` | `telemetry.json_logs` |
    /// | `TN_CONSOLE_OUTPUT` | `telemetry.console_output` |
    /// | `TN_API_BASE_URL` | `auth.api_base_url` |
    /// | `TN_REQUEST_TIMEOUT_MS` | `auth.request_timeout_ms` |
    /// | `TN_ENABLED_CHAINS` | `auth.enabled_chains` (comma-separated) |
    /// | `TN_COUNTDOWN_TICKS` | `guard.countdown_ticks` |
    /// | `TN_TICK_INTERVAL_MS` | `guard.tick_interval_ms` |
    /// | `TN_SIMULATED_LATENCY_MS` | `marketplace.simulated_latency_ms` |
    /// | `TN_SUBMIT_LATENCY_MS` | `authoring.submit_latency_ms` |
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = lookup("TN_SERVICE_NAME") {
            self.telemetry.service_name = v;
        }
        if let Some(v) = lookup("TN_LOG_LEVEL") {
            self.telemetry.log_level = v;
        }
        if let Some(v) = lookup("TN_JSON_LOGS") {
            self.telemetry.json_logs = parse_flag("TN_JSON_LOGS", v)?;
        }
        if let Some(v) = lookup("TN_CONSOLE_OUTPUT") {
            self.telemetry.console_output = parse_flag("TN_CONSOLE_OUTPUT", v)?;
        }
        if let Some(v) = lookup("TN_API_BASE_URL") {
            self.auth.api_base_url = v;
        }
        if let Some(v) = lookup("TN_REQUEST_TIMEOUT_MS") {
            self.auth.request_timeout_ms = parse_var("TN_REQUEST_TIMEOUT_MS", v)?;
        }
        if let Some(v) = lookup("TN_ENABLED_CHAINS") {
            self.auth.enabled_chains = parse_chains("TN_ENABLED_CHAINS", v)?;
        }
        if let Some(v) = lookup("TN_COUNTDOWN_TICKS") {
            self.guard.countdown_ticks = parse_var("TN_COUNTDOWN_TICKS", v)?;
        }
        if let Some(v) = lookup("TN_TICK_INTERVAL_MS") {
            self.guard.tick_interval_ms = parse_var("TN_TICK_INTERVAL_MS", v)?;
        }
        if let Some(v) = lookup("TN_SIMULATED_LATENCY_MS") {
            self.marketplace.simulated_latency_ms = parse_var("TN_SIMULATED_LATENCY_MS", v)?;
        }
        if let Some(v) = lookup("TN_SUBMIT_LATENCY_MS") {
            self.authoring.submit_latency_ms = parse_var("TN_SUBMIT_LATENCY_MS", v)?;
        }
        Ok(self)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        tn_telemetry::env_filter(&self.telemetry).map_err(|e| invalid("telemetry", e))?;
        self.auth.validate().map_err(|e| invalid("auth", e))?;
        self.guard.validate().map_err(|e| invalid("guard", e))?;
        self.marketplace
            .validate()
            .map_err(|e| invalid("marketplace", e))?;
        self.authoring
            .validate()
            .map_err(|e| invalid("authoring", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "guard": { "countdown_ticks": 3 } }"#).unwrap();
        assert_eq!(config.guard.countdown_ticks, 3);
        assert_eq!(config.guard.tick_interval_ms, 1_000);
        assert_eq!(config.auth, AuthConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::default()
            .with_overrides(lookup(&[
                ("TN_API_BASE_URL", "https://api.example.com"),
                ("TN_ENABLED_CHAINS", "ethereum, aptos"),
                ("TN_COUNTDOWN_TICKS", "5"),
                ("TN_JSON_LOGS", "true"),
                ("TN_SIMULATED_LATENCY_MS", "0"),
            ]))
            .unwrap();
        assert_eq!(config.auth.api_base_url, "https://api.example.com");
        assert_eq!(
            config.auth.enabled_chains,
            vec![ChainKind::Ethereum, ChainKind::Aptos]
        );
        assert_eq!(config.guard.countdown_ticks, 5);
        assert!(config.telemetry.json_logs);
        assert_eq!(config.marketplace.simulated_latency_ms, 0);
    }

    #[test]
    fn test_bad_override() {
        let err = AppConfig::default()
            .with_overrides(lookup(&[("TN_COUNTDOWN_TICKS", "soon")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TN_COUNTDOWN_TICKS: \"soon\"");

        assert!(AppConfig::default()
            .with_overrides(lookup(&[("TN_ENABLED_CHAINS", "ethereum,dogechain")]))
            .is_err());
    }

    #[test]
    fn test_validation_rejects() {
        let mut config = AppConfig::default();
        config.guard.countdown_ticks = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { section: "guard", .. })
        ));

        let mut config = AppConfig::default();
        config.auth.api_base_url = " ".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { section: "auth", .. })
        ));

        let mut config = AppConfig::default();
        config.auth.enabled_chains.clear();
        assert!(config.validate().is_err());
    }
}
