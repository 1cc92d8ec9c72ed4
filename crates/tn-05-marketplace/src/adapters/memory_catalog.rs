//! In-Memory Catalog Adapter
//!
//! Process-memory `ListingSource` with an optional artificial delay on
//! every call.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Comment, NodeListing};
use tracing::debug;

use super::demo_data::{demo_comments, demo_listings};
use crate::domain::{CatalogError, MarketplaceConfig};
use crate::ports::outbound::ListingSource;

/// In-memory catalog.
#[derive(Default)]
pub struct InMemoryCatalog {
    listings: RwLock<Vec<NodeListing>>,
    comments: RwLock<HashMap<String, Vec<Comment>>>,
    latency: Duration,
}

impl InMemoryCatalog {
    /// Empty catalog answering after `latency`.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            ..Default::default()
        }
    }

    /// Catalog built from configuration.
    pub fn from_config(config: &MarketplaceConfig) -> Self {
        let catalog = Self::new(config.simulated_latency());
        if config.seed_demo_data {
            catalog.seed_demo_data();
        }
        catalog
    }

    /// Load the demo listings and reviews.
    pub fn seed_demo_data(&self) {
        for listing in demo_listings() {
            self.upsert(listing);
        }
        for (listing_id, comment) in demo_comments() {
            self.add_comment(&listing_id, comment);
        }
    }

    /// Insert a listing, or replace the one with the same id in place.
    pub fn upsert(&self, listing: NodeListing) {
        let mut listings = self.listings.write();
        match listings.iter_mut().find(|l| l.id == listing.id) {
            Some(existing) => *existing = listing,
            None => listings.push(listing),
        }
    }

    /// Prepend a review to a listing.
    pub fn add_comment(&self, listing_id: &str, comment: Comment) {
        self.comments
            .write()
            .entry(listing_id.to_string())
            .or_default()
            .insert(0, comment);
    }

    /// Number of listings, drafts included.
    pub fn len(&self) -> usize {
        self.listings.read().len()
    }

    /// Whether the catalog holds no listings.
    pub fn is_empty(&self) -> bool {
        self.listings.read().is_empty()
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ListingSource for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<NodeListing>, CatalogError> {
        self.delay().await;
        let listings: Vec<_> = self
            .listings
            .read()
            .iter()
            .filter(|l| l.is_public)
            .cloned()
            .collect();
        debug!("[tn-05] Listed {} public nodes", listings.len());
        Ok(listings)
    }

    async fn get(&self, id: &str) -> Result<NodeListing, CatalogError> {
        self.delay().await;
        self.listings
            .read()
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    async fn list_by_author(&self, author_id: &str) -> Result<Vec<NodeListing>, CatalogError> {
        self.delay().await;
        Ok(self
            .listings
            .read()
            .iter()
            .filter(|l| l.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn comments(&self, id: &str) -> Result<Vec<Comment>, CatalogError> {
        self.delay().await;
        Ok(self.comments.read().get(id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new(Duration::ZERO);
        catalog.seed_demo_data();
        catalog
    }

    #[tokio::test]
    async fn test_get_and_not_found() {
        let catalog = seeded();
        assert_eq!(catalog.get("2").await.unwrap().name, "Signal Generator Pro");
        assert_eq!(
            catalog.get("missing").await,
            Err(CatalogError::NotFound("missing".into()))
        );
    }

    #[tokio::test]
    async fn test_drafts_hidden_from_list_but_visible_to_author() {
        let catalog = seeded();
        let mut draft = catalog.get("3").await.unwrap();
        draft.id = "draft-1".into();
        draft.is_public = false;
        catalog.upsert(draft);

        let public = catalog.list().await.unwrap();
        assert!(public.iter().all(|l| l.id != "draft-1"));
        assert_eq!(catalog.list_by_author("current123").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_upsert_replaces_in_place() {
        let catalog = seeded();
        let mut first = catalog.get("1").await.unwrap();
        first.version = "v0.5".into();
        catalog.upsert(first);

        let listings = catalog.list().await.unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].version, "v0.5");
    }

    #[tokio::test]
    async fn test_comments_for_listing() {
        let catalog = seeded();
        assert_eq!(catalog.comments("1").await.unwrap().len(), 1);
        assert!(catalog.comments("2").await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency() {
        let catalog = InMemoryCatalog::from_config(&MarketplaceConfig::default());
        let start = tokio::time::Instant::now();
        catalog.list().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
