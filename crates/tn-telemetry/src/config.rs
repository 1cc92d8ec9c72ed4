//! Telemetry configuration from environment variables.

use serde::{Deserialize, Serialize};
use std::env;

/// Default service name.
pub const DEFAULT_SERVICE_NAME: &str = "tradingnodes";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Service name stamped on every event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full
    /// `EnvFilter` directive
    pub log_level: String,

    /// Whether to write events to stdout
    pub console_output: bool,

    /// Whether events are formatted as JSON
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

fn flag(value: Option<String>, default: bool) -> bool {
    match value {
        Some(v) => {
            let v = v.to_lowercase();
            if default {
                v != "false" && v != "0"
            } else {
                v == "true" || v == "1"
            }
        }
        None => default,
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TN_SERVICE_NAME`: Service name (default: tradingnodes)
    /// - `TN_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `TN_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `TN_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            service_name: lookup("TN_SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            log_level: lookup("TN_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| "info".to_string()),
            console_output: flag(lookup("TN_CONSOLE_OUTPUT"), true),
            json_logs: flag(lookup("TN_JSON_LOGS"), false),
        }
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
    fn test_default_config() {
        let config = TelemetryConfig::from_lookup(lookup(&[]));
        assert_eq!(config, TelemetryConfig::default());
        assert_eq!(config.service_name, "tradingnodes");
    }

    #[test]
    fn test_log_level_falls_back_to_rust_log() {
        let config = TelemetryConfig::from_lookup(lookup(&[("RUST_LOG", "debug")]));
        assert_eq!(config.log_level, "debug");

        let config = TelemetryConfig::from_lookup(lookup(&[
            ("RUST_LOG", "debug"),
            ("TN_LOG_LEVEL", "warn"),
        ]));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_flags() {
        let config = TelemetryConfig::from_lookup(lookup(&[
            ("TN_JSON_LOGS", "TRUE"),
            ("TN_CONSOLE_OUTPUT", "0"),
            ("TN_SERVICE_NAME", "tn-demo"),
        ]));
        assert!(config.json_logs);
        assert!(!config.console_output);
        assert_eq!(config.service_name, "tn-demo");
    }
}
