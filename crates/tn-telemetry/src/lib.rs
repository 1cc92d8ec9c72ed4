//! # TradingNodes Telemetry
//!
//! Structured logging for every TradingNodes component, built on `tracing`
//! and `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tn_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     if let Err(e) = init_logging(&config) {
//!         eprintln!("logging disabled: {e}");
//!     }
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TN_SERVICE_NAME` | `tradingnodes` | Service name on events |
//! | `TN_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directive |
//! | `TN_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `TN_JSON_LOGS` | `false` | JSON instead of pretty output |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A global subscriber is already installed.
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}
