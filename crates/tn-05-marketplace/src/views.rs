//! Marketplace Views
//!
//! View-state of the marketplace grid, the node detail page and the author
//! dashboard. Each view loads through a `ListingSource` and keeps its state
//! behind a lock so the rendering side only ever sees complete snapshots.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use shared_types::{Comment, NodeListing, UserIdentity};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::domain::{
    apply_query, CatalogError, CategoryFilter, DashboardStats, ListingQuery, SortKey,
};
use crate::ports::outbound::ListingSource;

/// Rating a fresh review form starts with.
pub const DEFAULT_RATING: u8 = 5;

/// Clamp a star rating to 1..=5.
pub fn clamp_rating(rating: u8) -> u8 {
    rating.clamp(1, 5)
}

#[derive(Debug, Default)]
struct MarketplaceState {
    loading: bool,
    all: Vec<NodeListing>,
    query: ListingQuery,
    visible: Vec<NodeListing>,
}

impl MarketplaceState {
    fn recompute(&mut self) {
        self.visible = apply_query(&self.all, &self.query);
    }
}

/// The marketplace grid.
pub struct MarketplaceView {
    source: Arc<dyn ListingSource>,
    state: Mutex<MarketplaceState>,
}

impl MarketplaceView {
    /// Create an empty view.
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        Self {
            source,
            state: Mutex::new(MarketplaceState::default()),
        }
    }

    /// Fetch the listings. On failure the grid is left empty.
    pub async fn load(&self) -> Result<usize, CatalogError> {
        self.state.lock().loading = true;
        let result = self.source.list().await;

        let mut state = self.state.lock();
        state.loading = false;
        match result {
            Ok(listings) => {
                state.all = listings;
                state.recompute();
                debug!("[tn-05] Marketplace loaded {} listings", state.all.len());
                Ok(state.all.len())
            }
            Err(e) => {
                error!("[tn-05] Failed to load marketplace: {}", e);
                state.all.clear();
                state.visible.clear();
                Err(e)
            }
        }
    }

    /// Change the search term.
    pub fn set_search(&self, term: impl Into<String>) {
        let mut state = self.state.lock();
        state.query.search = term.into();
        state.recompute();
    }

    /// Change the category filter.
    pub fn set_category(&self, category: CategoryFilter) {
        let mut state = self.state.lock();
        state.query.category = category;
        state.recompute();
    }

    /// Change the sort order.
    pub fn set_sort(&self, sort: SortKey) {
        let mut state = self.state.lock();
        state.query.sort = sort;
        state.recompute();
    }

    /// Current query.
    pub fn query(&self) -> ListingQuery {
        self.state.lock().query.clone()
    }

    /// Listings to render, in order.
    pub fn visible(&self) -> Vec<NodeListing> {
        self.state.lock().visible.clone()
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    /// Whether nothing matches, so the "no nodes found" state shows.
    pub fn is_empty(&self) -> bool {
        let state = self.state.lock();
        !state.loading && state.visible.is_empty()
    }
}

/// The review form on a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentForm {
    /// Review text
    pub content: String,
    /// Star rating, 1..=5
    pub rating: u8,
}

impl Default for CommentForm {
    fn default() -> Self {
        Self {
            content: String::new(),
            rating: DEFAULT_RATING,
        }
    }
}

#[derive(Debug, Default)]
struct DetailState {
    loading: bool,
    listing: Option<NodeListing>,
    comments: Vec<Comment>,
    form: CommentForm,
}

/// A node detail page.
pub struct NodeDetailView {
    source: Arc<dyn ListingSource>,
    author: UserIdentity,
    state: Mutex<DetailState>,
}

impl NodeDetailView {
    /// Create a view whose reviews are signed by `author`.
    pub fn new(source: Arc<dyn ListingSource>, author: UserIdentity) -> Self {
        Self {
            source,
            author,
            state: Mutex::new(DetailState::default()),
        }
    }

    /// Load a listing and its reviews. Returns `None` when the id is unknown,
    /// which renders the not-found state.
    pub async fn load(&self, id: &str) -> Result<Option<NodeListing>, CatalogError> {
        self.state.lock().loading = true;
        let listing = self.source.get(id).await;
        let listing = match listing {
            Ok(listing) => listing,
            Err(CatalogError::NotFound(_)) => {
                warn!("[tn-05] Node {} not found", id);
                let mut state = self.state.lock();
                *state = DetailState::default();
                return Ok(None);
            }
            Err(e) => {
                self.state.lock().loading = false;
                return Err(e);
            }
        };
        let comments = self.source.comments(id).await;

        let mut state = self.state.lock();
        state.loading = false;
        let comments = comments?;
        state.listing = Some(listing.clone());
        state.comments = comments;
        state.form = CommentForm::default();
        Ok(Some(listing))
    }

    /// Loaded listing.
    pub fn listing(&self) -> Option<NodeListing> {
        self.state.lock().listing.clone()
    }

    /// Reviews, newest first.
    pub fn comments(&self) -> Vec<Comment> {
        self.state.lock().comments.clone()
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    /// Current review form.
    pub fn form(&self) -> CommentForm {
        self.state.lock().form.clone()
    }

    /// Edit the review text.
    pub fn set_content(&self, content: impl Into<String>) {
        self.state.lock().form.content = content.into();
    }

    /// Pick a star rating.
    pub fn set_rating(&self, rating: u8) {
        self.state.lock().form.rating = clamp_rating(rating);
    }

    /// Post a review. Blank content is ignored; otherwise the review is
    /// prepended and the form reset.
    pub fn submit_comment(&self, content: &str, rating: u8) -> Option<Comment> {
        if content.trim().is_empty() {
            return None;
        }
        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            rating: Some(clamp_rating(rating)),
            author: self.author.username.clone(),
            author_id: self.author.id.clone(),
            created_at: Utc::now(),
            replies: vec![],
        };
        let mut state = self.state.lock();
        state.comments.insert(0, comment.clone());
        state.form = CommentForm::default();
        Some(comment)
    }

    /// Post the review currently in the form.
    pub fn submit_form(&self) -> Option<Comment> {
        let form = self.form();
        self.submit_comment(&form.content, form.rating)
    }
}

#[derive(Debug, Default)]
struct DashboardState {
    loading: bool,
    listings: Vec<NodeListing>,
    stats: DashboardStats,
}

/// An author's dashboard.
pub struct DashboardView {
    source: Arc<dyn ListingSource>,
    state: Mutex<DashboardState>,
}

impl DashboardView {
    /// Create an empty dashboard.
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        Self {
            source,
            state: Mutex::new(DashboardState::default()),
        }
    }

    /// Load the author's listings and recompute the totals.
    pub async fn load(&self, author_id: &str) -> Result<DashboardStats, CatalogError> {
        self.state.lock().loading = true;
        let result = self.source.list_by_author(author_id).await;

        let mut state = self.state.lock();
        state.loading = false;
        let listings = result?;
        state.stats = DashboardStats::from_listings(&listings);
        state.listings = listings;
        Ok(state.stats)
    }

    /// The author's listings.
    pub fn listings(&self) -> Vec<NodeListing> {
        self.state.lock().listings.clone()
    }

    /// Totals.
    pub fn stats(&self) -> DashboardStats {
        self.state.lock().stats
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCatalog;
    use shared_types::NodeCategory;
    use std::time::Duration;

    fn catalog() -> Arc<InMemoryCatalog> {
        let catalog = InMemoryCatalog::new(Duration::ZERO);
        catalog.seed_demo_data();
        Arc::new(catalog)
    }

    fn viewer() -> UserIdentity {
        UserIdentity::new("current123", "Current User")
    }

    #[tokio::test]
    async fn test_marketplace_default_sort_is_latest() {
        let view = MarketplaceView::new(catalog());
        assert_eq!(view.load().await.unwrap(), 3);
        let ids: Vec<_> = view.visible().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_marketplace_query_setters() {
        let view = MarketplaceView::new(catalog());
        view.load().await.unwrap();

        view.set_sort(SortKey::Popular);
        assert_eq!(view.visible()[0].name, "XXXX Quant Node");

        view.set_search("signal");
        assert_eq!(view.visible().len(), 2);

        view.set_category(CategoryFilter::Only(NodeCategory::Trade));
        assert!(view.is_empty());

        view.set_category(CategoryFilter::All);
        view.set_search("");
        assert_eq!(view.visible().len(), 3);
        assert_eq!(view.query().sort, SortKey::Popular);
    }

    #[tokio::test(start_paused = true)]
    async fn test_marketplace_loading_flag() {
        let source = Arc::new(InMemoryCatalog::new(Duration::from_secs(1)));
        let view = Arc::new(MarketplaceView::new(source));
        let task = tokio::spawn({
            let view = view.clone();
            async move { view.load().await }
        });
        tokio::task::yield_now().await;
        assert!(view.is_loading());
        assert!(!view.is_empty());

        task.await.unwrap().unwrap();
        assert!(!view.is_loading());
        assert!(view.is_empty());
    }

    #[tokio::test]
    async fn test_detail_unknown_id() {
        let view = NodeDetailView::new(catalog(), viewer());
        assert_eq!(view.load("404").await.unwrap(), None);
        assert!(view.listing().is_none());
    }

    #[tokio::test]
    async fn test_detail_loads_comments() {
        let view = NodeDetailView::new(catalog(), viewer());
        let listing = view.load("1").await.unwrap().unwrap();
        assert_eq!(listing.inputs.len(), 2);
        assert_eq!(view.comments()[0].author, "Caesar Lynch");
        assert_eq!(view.form().rating, DEFAULT_RATING);
    }

    #[tokio::test]
    async fn test_submit_comment() {
        let view = NodeDetailView::new(catalog(), viewer());
        view.load("1").await.unwrap();

        assert!(view.submit_comment("   ", 4).is_none());
        assert_eq!(view.comments().len(), 1);

        view.set_content("Solid signals");
        view.set_rating(9);
        assert_eq!(view.form().rating, 5);
        view.set_rating(3);

        let posted = view.submit_form().unwrap();
        assert_eq!(posted.rating, Some(3));
        assert_eq!(posted.author_id, "current123");
        assert_eq!(view.comments()[0].id, posted.id);
        assert_eq!(view.comments().len(), 2);
        assert_eq!(view.form(), CommentForm::default());
    }

    #[test]
    fn test_clamp_rating() {
        assert_eq!(clamp_rating(0), 1);
        assert_eq!(clamp_rating(4), 4);
        assert_eq!(clamp_rating(6), 5);
    }

    #[tokio::test]
    async fn test_dashboard_stats() {
        let view = DashboardView::new(catalog());
        let stats = view.load("current123").await.unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.published, 1);
        assert!((stats.revenue - 19.99 * 45.0).abs() < 1e-9);
        assert_eq!(view.listings()[0].id, "3");
    }
}
