//! # Error Types
//!
//! Defines error types used across components.

use thiserror::Error;

/// Failure to parse a wire identifier into one of the shared enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKindError {
    /// Not a known wallet identifier.
    #[error("Unknown wallet type: {0}")]
    UnknownWallet(String),

    /// Not a known chain identifier.
    #[error("Unknown chain type: {0}")]
    UnknownChain(String),

    /// Not a known node category.
    #[error("Unknown node category: {0}")]
    UnknownCategory(String),

    /// Not a known input type.
    #[error("Unknown input type: {0}")]
    UnknownInputType(String),
}
