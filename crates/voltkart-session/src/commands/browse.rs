//! # Browse Commands
//!
//! Storefront commands for product search, filtering, and detail.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Browse Flow                                  │
//! │                                                                         │
//! │  User types "macbook", checks Rent, picks "Price: Low to High"         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Frontend debounces (150ms) and rebuilds the FacetSelection            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('browse', { selection: {...}, sort: 'price-low' })             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  1. Validate + trim the search query      │                         │
//! │  │  2. Snapshot the wishlist (one lock)      │                         │
//! │  │  3. Filter: favorites / query / facets    │                         │
//! │  │  4. Rank: stable sort by chosen key       │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return Vec<ProductDto> to frontend                                    │
//! │                                                                         │
//! │  Performance: one linear pass over the in-memory snapshot              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::error::ApiError;
use crate::session::StorefrontSession;
use crate::state::StoreConfig;
use voltkart_core::validation::{validate_product_id, validate_search_query};
use voltkart_core::{
    filter_and_rank, Availability, CommercialMode, CoreError, FacetSelection, Product,
    ProductStatus, RentalOption, SortKey,
};

/// Product DTO (Data Transfer Object) for the frontend.
///
/// ## Why DTO?
/// - Decouples internal domain model from API contract
/// - Flattens brand/category/condition to display labels so the frontend
///   renders them without its own lookup tables
/// - Carries session context the domain model cannot know: the
///   `favorited` flag and the formatted price
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub brand: String,
    pub category: Option<String>,
    pub condition: String,
    pub mode: CommercialMode,
    pub availability: Availability,
    pub status: ProductStatus,
    pub price_cents: i64,
    /// Price formatted with the store currency, e.g. `"$1299.00"`
    pub display_price: String,
    /// Star rating, e.g. `4.5`
    pub rating: f64,
    pub rental_options: Vec<RentalOption>,
    /// Whether this product is on the session wishlist
    pub favorited: bool,
}

impl ProductDto {
    /// Builds a DTO from a catalog listing plus session context.
    ///
    /// Not a `From` impl: the wishlist flag and currency formatting come
    /// from session state, not from the product itself.
    pub fn from_product(product: &Product, favorited: bool, config: &StoreConfig) -> Self {
        ProductDto {
            id: product.id.clone(),
            name: product.name.clone(),
            subtitle: product.subtitle.clone(),
            brand: product.brand.label().to_string(),
            category: product.category.map(|c| c.label().to_string()),
            condition: product.condition.label().to_string(),
            mode: product.mode,
            availability: product.availability(),
            status: product.status,
            price_cents: product.price_cents,
            display_price: config.format_price(product.price_cents),
            rating: product.rating().stars(),
            rental_options: product.rental_options.clone(),
            favorited,
        }
    }
}

impl StorefrontSession {
    /// Browses the catalog through the facet pipeline.
    ///
    /// ## User Workflow
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────┐
    /// │  Storefront Grid                                                │
    /// │  ┌─────────────────────────────────────────────────────────┐   │
    /// │  │ 🔍 "macbook"   [Rent ✓] [Apple ✓]   Sort: Price ↑       │   │
    /// │  └─────────────────────────────────────────────────────────┘   │
    /// │           │                                                     │
    /// │           ▼                                                     │
    /// │  invoke('browse', { selection, sort: 'price-low' })            │
    /// │           │                                                     │
    /// │           ▼                                                     │
    /// │  THIS FUNCTION: filter facets, rank, map to DTOs               │
    /// │           │                                                     │
    /// │           ▼                                                     │
    /// │  Returns: ProductDto[] displayed in product grid               │
    /// └─────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Arguments
    /// * `selection` - Active facets (query, category, type, brands, ...)
    /// * `sort` - Sort key, wire spelling (`"popularity"`, `"price-low"`)
    ///
    /// ## Returns
    /// Matching products in rank order, each carrying its wishlist flag
    pub fn browse(
        &self,
        selection: &FacetSelection,
        sort: SortKey,
    ) -> Result<Vec<ProductDto>, ApiError> {
        let start = Instant::now();
        debug!(query = %selection.query, ?sort, "browse command");

        let query = validate_search_query(&selection.query).map_err(CoreError::from)?;
        let selection = FacetSelection {
            query,
            ..selection.clone()
        };

        // Wishlist snapshot taken before the catalog read; the two locks
        // are never held at the same time.
        let wishlist = self.ledger.with_ledger(|l| l.wishlist().clone());

        let results = self.catalog.with_catalog(|catalog| {
            filter_and_rank(catalog, &selection, &wishlist, sort)
                .into_iter()
                .map(|p| ProductDto::from_product(p, wishlist.contains(&p.id), &self.config))
                .collect::<Vec<_>>()
        });

        let elapsed = start.elapsed();
        info!(
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            count = results.len(),
            "Browse complete"
        );

        Ok(results)
    }

    /// Fetches a single product for the detail page.
    ///
    /// ## Arguments
    /// * `id` - Product ID
    ///
    /// ## Returns
    /// The product DTO, or `NOT_FOUND` if no such listing
    pub fn product_detail(&self, id: &str) -> Result<ProductDto, ApiError> {
        debug!(product_id = %id, "product_detail command");

        validate_product_id(id).map_err(CoreError::from)?;
        let favorited = self.ledger.with_ledger(|l| l.wishlist().contains(id));

        self.catalog.with_catalog(|catalog| {
            catalog
                .get(id)
                .map(|p| ProductDto::from_product(p, favorited, &self.config))
                .ok_or_else(|| ApiError::not_found("Product", id))
        })
    }
}
