//! # Result Ranker
//!
//! Stable total orderings over filtered listing sets.
//!
//! ## Ranking Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         ResultRanker                                    │
//! │                                                                         │
//! │  filtered Vec<&Product> (catalog order)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SortKey ──┬── popularity  → rating desc, ties keep catalog order     │
//! │            ├── price-low   → price asc                                 │
//! │            ├── price-high  → price desc                                │
//! │            └── newest      → numeric id desc (unparsable ids last)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  deterministic, stably ordered result for the grid                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All four orders are total and **stable**: re-running a filter that does
//! not change membership must not shuffle the grid, or pagination jumps
//! under the user's cursor. `slice::sort_by` guarantees stability, and the
//! pre-sort order is always catalog order (the filter preserves it).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::ProductCatalog;
use crate::facets::{self, FacetSelection};
use crate::ledger::Wishlist;
use crate::types::Product;

// =============================================================================
// Sort Key
// =============================================================================

/// The grid's sort dropdown. Wire values match the original storefront's
/// query strings (`price-low`, not `priceLow`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Rating descending. The storefront's default ordering.
    #[default]
    Popularity,
    /// Price ascending.
    PriceLow,
    /// Price descending.
    PriceHigh,
    /// Numeric id descending, as a recency proxy.
    Newest,
}

// =============================================================================
// Ranking
// =============================================================================

/// Recency weight of a listing id.
///
/// Catalog ids are numeric strings in practice; higher means newer. Ids
/// that fail to parse weigh 0 and sink to the end of the `newest` order,
/// keeping their relative catalog order among themselves. Never panics.
fn recency_weight(id: &str) -> u64 {
    id.trim().parse().unwrap_or(0)
}

/// Applies a stable total order in place.
///
/// ## Behavior
/// - Stable for every key: equal-key listings keep their pre-sort order
/// - Never fails; an empty slice is simply left empty
pub fn rank(results: &mut [&Product], order: SortKey) {
    match order {
        SortKey::Popularity => {
            results.sort_by(|a, b| b.rating_tenths.cmp(&a.rating_tenths));
        }
        SortKey::PriceLow => {
            results.sort_by(|a, b| a.price_cents.cmp(&b.price_cents));
        }
        SortKey::PriceHigh => {
            results.sort_by(|a, b| b.price_cents.cmp(&a.price_cents));
        }
        SortKey::Newest => {
            results.sort_by(|a, b| recency_weight(&b.id).cmp(&recency_weight(&a.id)));
        }
    }
}

/// Filters then ranks in one call: the whole catalog query engine.
///
/// Pure and on-demand: the UI re-invokes this after any facet, sort, or
/// catalog change instead of keeping a reactive graph alive.
///
/// ## Example
/// ```rust
/// use voltkart_core::catalog::ProductCatalog;
/// use voltkart_core::facets::FacetSelection;
/// use voltkart_core::ledger::Wishlist;
/// use voltkart_core::rank::{filter_and_rank, SortKey};
///
/// let catalog = ProductCatalog::new();
/// let results = filter_and_rank(
///     &catalog,
///     &FacetSelection::default(),
///     &Wishlist::default(),
///     SortKey::Popularity,
/// );
/// assert!(results.is_empty());
/// ```
pub fn filter_and_rank<'a>(
    catalog: &'a ProductCatalog,
    selection: &FacetSelection,
    wishlist: &Wishlist,
    order: SortKey,
) -> Vec<&'a Product> {
    let mut results = facets::filter(catalog.products(), selection, wishlist);
    rank(&mut results, order);
    results
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Brand, Category, CommercialMode, Condition, ProductStatus};

    fn product(id: &str, name: &str, price_cents: i64, rating_tenths: u8) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            subtitle: None,
            brand: Brand::Dell,
            category: Some(Category::Laptops),
            condition: Condition::New,
            mode: CommercialMode::Buy,
            status: ProductStatus::Available,
            price_cents,
            rating_tenths,
            rental_options: vec![],
        }
    }

    fn ids(results: &[&Product]) -> Vec<String> {
        results.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_popularity_descending() {
        let products = vec![
            product("1", "A", 100, 30),
            product("2", "B", 100, 48),
            product("3", "C", 100, 41),
        ];
        let mut results: Vec<&Product> = products.iter().collect();
        rank(&mut results, SortKey::Popularity);
        assert_eq!(ids(&results), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_popularity_ties_keep_presort_order() {
        let products = vec![
            product("first", "A", 100, 40),
            product("second", "B", 200, 40),
            product("third", "C", 300, 45),
        ];
        let mut results: Vec<&Product> = products.iter().collect();
        rank(&mut results, SortKey::Popularity);
        // Equal 4.0 ratings stay in catalog order behind the 4.5
        assert_eq!(ids(&results), vec!["third", "first", "second"]);
    }

    #[test]
    fn test_price_orders() {
        let products = vec![
            product("1", "A", 2999, 40),
            product("2", "B", 999, 40),
            product("3", "C", 1999, 40),
        ];

        let mut low: Vec<&Product> = products.iter().collect();
        rank(&mut low, SortKey::PriceLow);
        assert_eq!(ids(&low), vec!["2", "3", "1"]);

        let mut high: Vec<&Product> = products.iter().collect();
        rank(&mut high, SortKey::PriceHigh);
        assert_eq!(ids(&high), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_price_ties_are_stable() {
        let products = vec![
            product("a", "A", 999, 40),
            product("b", "B", 999, 40),
            product("c", "C", 500, 40),
        ];
        let mut results: Vec<&Product> = products.iter().collect();
        rank(&mut results, SortKey::PriceLow);
        assert_eq!(ids(&results), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_newest_is_numeric_not_lexical() {
        // Lexical order would put "30" before "10" before "2"... backwards
        let products = vec![
            product("10", "A", 100, 40),
            product("2", "B", 100, 40),
            product("30", "C", 100, 40),
        ];
        let mut results: Vec<&Product> = products.iter().collect();
        rank(&mut results, SortKey::Newest);
        assert_eq!(ids(&results), vec!["30", "10", "2"]);
    }

    #[test]
    fn test_newest_unparsable_ids_sink_without_panic() {
        let products = vec![
            product("legacy-sku", "A", 100, 40),
            product("42", "B", 100, 40),
            product("misc", "C", 100, 40),
            product("7", "D", 100, 40),
        ];
        let mut results: Vec<&Product> = products.iter().collect();
        rank(&mut results, SortKey::Newest);
        // Parsable ids first (desc), unparsable ids last in catalog order
        assert_eq!(ids(&results), vec!["42", "7", "legacy-sku", "misc"]);
    }

    #[test]
    fn test_default_sort_key_is_popularity() {
        assert_eq!(SortKey::default(), SortKey::Popularity);
    }

    #[test]
    fn test_sort_key_wire_names() {
        assert_eq!(serde_json::to_string(&SortKey::PriceLow).unwrap(), "\"price-low\"");
        let key: SortKey = serde_json::from_str("\"price-high\"").unwrap();
        assert_eq!(key, SortKey::PriceHigh);
    }

    #[test]
    fn test_filter_and_rank_composes() {
        let catalog = ProductCatalog::from_snapshot(vec![
            product("1", "Budget Laptop", 49_900, 35),
            product("2", "Gaming Monitor", 29_900, 42),
            product("3", "Pro Laptop", 199_900, 47),
        ])
        .unwrap();

        let selection = FacetSelection {
            query: "laptop".to_string(),
            ..Default::default()
        };

        let results = filter_and_rank(
            &catalog,
            &selection,
            &Wishlist::default(),
            SortKey::PriceLow,
        );
        assert_eq!(ids(&results), vec!["1", "3"]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec(
                ("[a-z0-9]{1,8}", 0i64..1_000_000, 0u8..=50u8),
                0..40,
            )
            .prop_map(|entries| {
                entries
                    .into_iter()
                    .enumerate()
                    .map(|(i, (id, price, rating))| {
                        // Suffix with the index so ids stay unique
                        product(&format!("{id}-{i}"), "P", price, rating)
                    })
                    .collect()
            })
        }

        fn arb_sort_key() -> impl Strategy<Value = SortKey> {
            prop_oneof![
                Just(SortKey::Popularity),
                Just(SortKey::PriceLow),
                Just(SortKey::PriceHigh),
                Just(SortKey::Newest),
            ]
        }

        proptest! {
            /// Property: ranking permutes, never adds or drops listings.
            #[test]
            fn rank_preserves_membership(products in arb_products(), order in arb_sort_key()) {
                let mut results: Vec<&Product> = products.iter().collect();
                rank(&mut results, order);

                let mut before: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
                let mut after: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
                before.sort_unstable();
                after.sort_unstable();
                prop_assert_eq!(before, after);
            }

            /// Property: ranking an already-ranked list changes nothing
            /// (stability makes rank idempotent).
            #[test]
            fn rank_is_idempotent(products in arb_products(), order in arb_sort_key()) {
                let mut once: Vec<&Product> = products.iter().collect();
                rank(&mut once, order);

                let mut twice = once.clone();
                rank(&mut twice, order);

                let once_ids: Vec<&str> = once.iter().map(|p| p.id.as_str()).collect();
                let twice_ids: Vec<&str> = twice.iter().map(|p| p.id.as_str()).collect();
                prop_assert_eq!(once_ids, twice_ids);
            }
        }
    }
}
