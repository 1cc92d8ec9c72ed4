//! # TN-05 Marketplace
//!
//! Listing catalog, the search/filter/sort pipeline and the view-state of
//! the marketplace, node detail and dashboard pages.
//!
//! **Component ID:** 05
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Pipeline
//!
//! ```text
//! listings ──► search (name | description | author) ──► category ──► stable sort
//! ```
//!
//! Filtering never reorders surviving listings, and listings with equal sort
//! keys keep their relative order.
//!
//! ## Module Structure
//!
//! ```text
//! tn-05-marketplace/
//! ├── domain/      # ListingQuery, pipeline, DashboardStats, config, errors
//! ├── ports/       # ListingSource
//! ├── adapters/    # InMemoryCatalog, demo data
//! └── views        # MarketplaceView, NodeDetailView, DashboardView
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod views;

// Re-exports
pub use adapters::{demo_comments, demo_listings, InMemoryCatalog};
pub use domain::{
    apply_query, filter_listings, matches_search, sort_listings, CatalogError, CategoryFilter,
    DashboardStats, ListingQuery, MarketplaceConfig, SortKey,
};
pub use ports::ListingSource;
pub use views::{CommentForm, DashboardView, MarketplaceView, NodeDetailView};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
