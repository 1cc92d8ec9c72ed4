//! In-Memory Session Storage Adapter
//!
//! Implements `SessionStorage` over a shared map. Clones share the same map,
//! so a clone handed to a fresh `SessionStore` behaves like a page reload in
//! the same tab.

use crate::ports::outbound::{SessionStorage, StorageError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Map-backed tab storage.
#[derive(Clone, Default)]
pub struct MemorySessionStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
    reject_writes: Arc<AtomicBool>,
}

impl MemorySessionStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `QuotaExceeded`.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StorageError::QuotaExceeded);
        }
        debug!("[tn-01] storage set {} ({} bytes)", key, value.len());
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.write().remove(key);
    }
}
