//! # Listing Query
//!
//! Search term, category filter and sort key chosen in the marketplace.

use serde::{Deserialize, Serialize};
use shared_types::NodeCategory;
use std::fmt;

/// Sort order of the listing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest `created_at` first.
    #[default]
    Latest,
    /// Most subscriptions first.
    Popular,
    /// Highest rating first.
    Rating,
}

impl SortKey {
    /// Options in display order.
    pub const ALL: [SortKey; 3] = [SortKey::Latest, SortKey::Popular, SortKey::Rating];

    /// Parse a sort key; anything unrecognised sorts by latest.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "popular" => Self::Popular,
            "rating" => Self::Rating,
            _ => Self::Latest,
        }
    }

    /// Identifier used in URLs and selects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Popular => "popular",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category filter with the `all` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category filtering.
    #[default]
    All,
    /// Exact category match.
    Only(NodeCategory),
}

impl CategoryFilter {
    /// Options offered by the marketplace select.
    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(NodeCategory::Input),
        CategoryFilter::Only(NodeCategory::Compute),
        CategoryFilter::Only(NodeCategory::Trade),
        CategoryFilter::Only(NodeCategory::Output),
    ];

    /// Parse `all` or a category name; unknown values mean `All`.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse::<NodeCategory>()
            .map(Self::Only)
            .unwrap_or(Self::All)
    }

    /// Whether `category` passes the filter.
    pub fn accepts(&self, category: NodeCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }

    /// Identifier used in URLs and selects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

/// Everything the marketplace filters and sorts by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    /// Free-text search term
    pub search: String,
    /// Category filter
    pub category: CategoryFilter,
    /// Sort order
    pub sort: SortKey,
}

impl ListingQuery {
    /// Query with only a search term.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Default::default()
        }
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}
