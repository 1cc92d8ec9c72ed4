//! # Domain Errors

use thiserror::Error;
use tn_05_marketplace::CatalogError;

/// Which handle list an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleList {
    /// Node inputs
    Inputs,
    /// Node outputs
    Outputs,
}

impl std::fmt::Display for HandleList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inputs => f.write_str("input"),
            Self::Outputs => f.write_str("output"),
        }
    }
}

/// Node authoring errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthoringError {
    /// No handle at this position.
    #[error("No {list} at index {index} (have {len})")]
    IndexOutOfRange {
        /// List addressed
        list: HandleList,
        /// Requested index
        index: usize,
        /// Current length
        len: usize,
    },

    /// Required fields are missing.
    #[error("Missing required fields: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    /// Submission already in flight.
    #[error("A submission is already in progress")]
    Busy,

    /// The submitter rejected the node.
    #[error("Submission failed: {0}")]
    Submit(String),

    /// Loading the node to edit failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Invalid configuration.
    #[error("Invalid authoring configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AuthoringError::IndexOutOfRange {
            list: HandleList::Outputs,
            index: 3,
            len: 1,
        };
        assert_eq!(err.to_string(), "No output at index 3 (have 1)");
        assert_eq!(
            AuthoringError::Validation(vec!["name", "description"]).to_string(),
            "Missing required fields: name, description"
        );
    }
}
