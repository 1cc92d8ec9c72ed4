//! # Dashboard Statistics

use serde::{Deserialize, Serialize};
use shared_types::NodeListing;

/// Totals shown on an author's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Listings owned
    pub total: usize,
    /// Listings visible in the marketplace
    pub published: usize,
    /// Sum of price times subscriptions
    pub revenue: f64,
}

impl DashboardStats {
    /// Compute the totals for `listings`.
    pub fn from_listings(listings: &[NodeListing]) -> Self {
        Self {
            total: listings.len(),
            published: listings.iter().filter(|l| l.is_public).count(),
            revenue: listings
                .iter()
                .map(|l| l.price * l.subscription_count as f64)
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::demo_listings;

    #[test]
    fn test_empty() {
        assert_eq!(DashboardStats::from_listings(&[]), DashboardStats::default());
    }

    #[test]
    fn test_revenue_and_published() {
        let mut listings: Vec<_> = demo_listings()
            .into_iter()
            .filter(|l| l.author_id == "current123")
            .collect();
        assert_eq!(listings.len(), 1);
        listings[0].price = 10.0;
        listings[0].subscription_count = 3;

        let mut draft = listings[0].clone();
        draft.id = "draft".into();
        draft.is_public = false;
        draft.price = 5.0;
        draft.subscription_count = 2;
        listings.push(draft);

        let stats = DashboardStats::from_listings(&listings);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.published, 1);
        assert_eq!(stats.revenue, 40.0);
    }
}
