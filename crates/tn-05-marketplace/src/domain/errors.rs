//! # Domain Errors

use thiserror::Error;

/// Listing catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No listing with this id.
    #[error("Node not found: {0}")]
    NotFound(String),

    /// The catalog could not be reached.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// Invalid configuration.
    #[error("Invalid marketplace configuration: {0}")]
    InvalidConfig(String),
}
