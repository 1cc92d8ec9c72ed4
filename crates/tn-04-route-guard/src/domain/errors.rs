//! # Domain Errors

use thiserror::Error;

/// Route guard errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// Invalid configuration.
    #[error("Invalid guard configuration: {0}")]
    InvalidConfig(String),
}
