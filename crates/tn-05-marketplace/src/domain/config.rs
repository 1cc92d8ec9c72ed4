//! Marketplace configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::errors::CatalogError;

/// Upper bound on the simulated catalog latency.
pub const MAX_SIMULATED_LATENCY_MS: u64 = 60_000;

/// Marketplace configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceConfig {
    /// Delay the in-memory catalog adds to every call, in milliseconds
    pub simulated_latency_ms: u64,
    /// Seed the catalog with the demo listings
    pub seed_demo_data: bool,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 1_000,
            seed_demo_data: true,
        }
    }
}

impl MarketplaceConfig {
    /// Simulated latency as a `Duration`.
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.simulated_latency_ms > MAX_SIMULATED_LATENCY_MS {
            return Err(CatalogError::InvalidConfig(format!(
                "simulated_latency_ms cannot exceed {MAX_SIMULATED_LATENCY_MS}"
            )));
        }
        Ok(())
    }
}
