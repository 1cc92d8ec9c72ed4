//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the `SessionStorage` port.

mod memory_storage;

pub use memory_storage::MemorySessionStorage;
