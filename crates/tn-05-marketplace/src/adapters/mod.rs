//! # Adapters Layer (Hexagonal Architecture)

mod demo_data;
mod memory_catalog;

pub use demo_data::{demo_comments, demo_listings};
pub use memory_catalog::InMemoryCatalog;
