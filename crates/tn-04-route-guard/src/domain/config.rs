//! Route guard configuration with validation.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::errors::GuardError;

/// Route guard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Ticks before an unauthenticated visitor is sent to login
    pub countdown_ticks: u32,
    /// Tick length in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            countdown_ticks: 8,
            tick_interval_ms: 1_000,
        }
    }
}

impl GuardConfig {
    /// Tick length as a `Duration`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), GuardError> {
        if self.countdown_ticks == 0 {
            return Err(GuardError::InvalidConfig(
                "countdown_ticks cannot be 0".into(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(GuardError::InvalidConfig(
                "tick_interval_ms cannot be 0".into(),
            ));
        }
        Ok(())
    }
}
