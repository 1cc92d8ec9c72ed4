//! Submitter that waits out a fixed delay, optionally writing the node into
//! an in-memory catalog so it shows up in the marketplace.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::NodeListing;
use tn_05_marketplace::InMemoryCatalog;
use tracing::info;

use crate::domain::AuthoringError;
use crate::ports::outbound::NodeSubmitter;

/// Simulated submitter.
#[derive(Default)]
pub struct SimulatedSubmitter {
    latency: Duration,
    catalog: Option<Arc<InMemoryCatalog>>,
    fail_with: Option<String>,
    submitted: Mutex<Vec<NodeListing>>,
}

impl SimulatedSubmitter {
    /// Submitter answering after `latency`.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            ..Default::default()
        }
    }

    /// Also upsert every submission into `catalog`.
    pub fn with_catalog(mut self, catalog: Arc<InMemoryCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Reject every submission with `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.fail_with = Some(reason.into());
        self
    }

    /// Accepted submissions, oldest first.
    pub fn submitted(&self) -> Vec<NodeListing> {
        self.submitted.lock().clone()
    }
}

#[async_trait]
impl NodeSubmitter for SimulatedSubmitter {
    async fn submit(&self, listing: NodeListing) -> Result<(), AuthoringError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if let Some(reason) = &self.fail_with {
            return Err(AuthoringError::Submit(reason.clone()));
        }
        info!(
            "[tn-06] Stored node {} ({}, public: {})",
            listing.id, listing.name, listing.is_public
        );
        if let Some(catalog) = &self.catalog {
            catalog.upsert(listing.clone());
        }
        self.submitted.lock().push(listing);
        Ok(())
    }
}
