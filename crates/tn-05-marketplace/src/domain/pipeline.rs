//! # Listing Pipeline
//!
//! Search, then category, then sort. Filtering keeps the relative order of
//! surviving listings, and every sort is stable, so listings with equal
//! keys keep their input order.

use shared_types::NodeListing;
use std::cmp::Ordering;

use super::query::{CategoryFilter, ListingQuery, SortKey};

/// Case-insensitive substring match on name, description or author.
/// An empty term matches everything.
pub fn matches_search(listing: &NodeListing, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    [&listing.name, &listing.description, &listing.author]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Listings matching the search term and category, in input order.
pub fn filter_listings<'a>(
    listings: &'a [NodeListing],
    search: &str,
    category: CategoryFilter,
) -> Vec<&'a NodeListing> {
    listings
        .iter()
        .filter(|l| matches_search(l, search))
        .filter(|l| category.accepts(l.category))
        .collect()
}

fn compare(a: &NodeListing, b: &NodeListing, key: SortKey) -> Ordering {
    match key {
        SortKey::Latest => b.created_at.cmp(&a.created_at),
        SortKey::Popular => b.subscription_count.cmp(&a.subscription_count),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
    }
}

/// Stable sort by `key`, best first.
pub fn sort_listings(listings: &mut [&NodeListing], key: SortKey) {
    listings.sort_by(|a, b| compare(a, b, key));
}

/// Run the whole pipeline.
pub fn apply_query(listings: &[NodeListing], query: &ListingQuery) -> Vec<NodeListing> {
    let mut visible = filter_listings(listings, &query.search, query.category);
    sort_listings(&mut visible, query.sort);
    visible.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::{utc_day, NodeCategory};

    fn listing(id: &str, name: &str) -> NodeListing {
        NodeListing {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            category: NodeCategory::Compute,
            node_type: "code_node".to_string(),
            version: "v1.0".to_string(),
            author: "Victor".to_string(),
            author_id: "victor123".to_string(),
            price: 0.0,
            rating: 0.0,
            review_count: 0,
            subscription_count: 0,
            tags: vec![],
            inputs: vec![],
            outputs: vec![],
            created_at: utc_day(2024, 1, 1),
            updated_at: utc_day(2024, 1, 1),
            is_public: true,
            execution_method: None,
            code_snippet: None,
        }
    }

    fn with_subs(id: &str, subs: u64) -> NodeListing {
        NodeListing {
            subscription_count: subs,
            ..listing(id, id)
        }
    }

    fn ids(listings: &[NodeListing]) -> Vec<&str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let listings = vec![listing("a", "Alpha"), listing("b", "Beta")];
        let result = apply_query(&listings, &ListingQuery::search("alp"));
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_search_checks_description_and_author() {
        let mut by_desc = listing("d", "X");
        by_desc.description = "Momentum SIGNALS".into();
        let mut by_author = listing("u", "Y");
        by_author.author = "Caesar Lynch".into();
        let listings = vec![by_desc, by_author, listing("n", "Z")];

        assert_eq!(ids(&apply_query(&listings, &ListingQuery::search("signals"))), vec!["d"]);
        assert_eq!(ids(&apply_query(&listings, &ListingQuery::search("LYNCH"))), vec!["u"]);
    }

    #[test]
    fn test_category_filter() {
        let mut trade = listing("t", "Trader");
        trade.category = NodeCategory::Trade;
        let listings = vec![listing("c", "Compute"), trade];

        let query = ListingQuery::default().with_category(CategoryFilter::Only(NodeCategory::Trade));
        assert_eq!(ids(&apply_query(&listings, &query)), vec!["t"]);
        assert_eq!(apply_query(&listings, &ListingQuery::default()).len(), 2);
    }

    #[test]
    fn test_popular_sort_is_descending_and_stable() {
        let listings = vec![
            with_subs("a", 10),
            with_subs("b", 50),
            with_subs("c", 30),
            with_subs("d", 50),
        ];
        let query = ListingQuery::default().with_sort(SortKey::Popular);
        assert_eq!(ids(&apply_query(&listings, &query)), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_latest_and_rating_sorts() {
        let mut old = listing("old", "Old");
        old.created_at = utc_day(2023, 6, 1);
        old.rating = 4.9;
        let mut new = listing("new", "New");
        new.created_at = utc_day(2024, 3, 1);
        new.rating = 4.1;
        let listings = vec![old, new];

        assert_eq!(ids(&apply_query(&listings, &ListingQuery::default())), vec!["new", "old"]);
        let query = ListingQuery::default().with_sort(SortKey::Rating);
        assert_eq!(ids(&apply_query(&listings, &query)), vec!["old", "new"]);
    }

    fn arb_listing() -> impl Strategy<Value = (String, u64, u8, bool)> {
        ("[a-c]{1,4}", 0u64..5, 0u8..5, any::<bool>())
    }

    fn build(specs: &[(String, u64, u8, bool)]) -> Vec<NodeListing> {
        specs
            .iter()
            .enumerate()
            .map(|(i, (name, subs, rating, trade))| NodeListing {
                subscription_count: *subs,
                rating: f64::from(*rating),
                category: if *trade {
                    NodeCategory::Trade
                } else {
                    NodeCategory::Compute
                },
                ..listing(&i.to_string(), name)
            })
            .collect()
    }

    fn position(id: &str) -> usize {
        id.parse().unwrap_or(usize::MAX)
    }

    proptest! {
        #[test]
        fn filter_preserves_relative_order(
            specs in prop::collection::vec(arb_listing(), 0..30),
            term in "[a-c]{0,2}",
            trade_only in any::<bool>(),
        ) {
            let listings = build(&specs);
            let category = if trade_only {
                CategoryFilter::Only(NodeCategory::Trade)
            } else {
                CategoryFilter::All
            };
            let filtered = filter_listings(&listings, &term, category);
            let positions: Vec<usize> = filtered.iter().map(|l| position(&l.id)).collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(filtered.iter().all(|l| matches_search(l, &term) && category.accepts(l.category)));
        }

        #[test]
        fn sort_is_ordered_and_stable(
            specs in prop::collection::vec(arb_listing(), 0..30),
            key in prop_oneof![Just(SortKey::Popular), Just(SortKey::Rating), Just(SortKey::Latest)],
        ) {
            let listings = build(&specs);
            let sorted = apply_query(&listings, &ListingQuery::default().with_sort(key));
            prop_assert_eq!(sorted.len(), listings.len());
            for pair in sorted.windows(2) {
                let ord = compare(&pair[0], &pair[1], key);
                prop_assert!(ord != Ordering::Greater);
                if ord == Ordering::Equal {
                    prop_assert!(position(&pair[0].id) < position(&pair[1].id));
                }
            }
        }
    }
}
