//! # Outbound Ports
//!
//! Tab-scoped key/value storage (the browser's `sessionStorage` or a stand-in).

use thiserror::Error;

/// Storage backend failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Backend is full.
    #[error("Storage quota exceeded")]
    QuotaExceeded,

    /// Backend is missing or disabled.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Tab-scoped string storage - outbound port.
///
/// Contents live as long as the browser tab.
pub trait SessionStorage: Send + Sync {
    /// Read a value.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Removing a missing key is a no-op.
    fn remove_item(&self, key: &str);
}
