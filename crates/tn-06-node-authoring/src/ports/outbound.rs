//! # Outbound Ports

use async_trait::async_trait;
use shared_types::NodeListing;

use crate::domain::AuthoringError;

/// Where finished nodes are sent.
#[async_trait]
pub trait NodeSubmitter: Send + Sync {
    /// Store a new or edited node.
    async fn submit(&self, listing: NodeListing) -> Result<(), AuthoringError>;
}
