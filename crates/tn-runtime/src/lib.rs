//! # TradingNodes Runtime
//!
//! Composition root: configuration loading and the container that wires
//! every TradingNodes component.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (JSON file, then `TN_*` overrides)
//! 2. Initialize logging
//! 3. Validate configuration
//! 4. Build components in dependency order
//!
//! ## Modules
//!
//! - `config` - `AppConfig` and `ConfigError`
//! - `container` - `AppContainer` and the host `Environment`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod container;

// Re-exports
pub use config::{AppConfig, ConfigError};
pub use container::{ApiBackend, AppContainer, Environment, DEMO_AUTHOR_ID, DEMO_AUTHOR_NAME};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
