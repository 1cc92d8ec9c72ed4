//! # Outbound Ports
//!
//! Where listings come from.

use crate::domain::CatalogError;
use async_trait::async_trait;
use shared_types::{Comment, NodeListing};

/// Read access to the node catalog.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// All public listings.
    async fn list(&self) -> Result<Vec<NodeListing>, CatalogError>;

    /// One listing by id, public or not.
    async fn get(&self, id: &str) -> Result<NodeListing, CatalogError>;

    /// Listings owned by an author, drafts included.
    async fn list_by_author(&self, author_id: &str) -> Result<Vec<NodeListing>, CatalogError>;

    /// Reviews of a listing, newest first.
    async fn comments(&self, id: &str) -> Result<Vec<Comment>, CatalogError>;
}
