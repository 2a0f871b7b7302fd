//! # Product Catalog
//!
//! In-memory catalog of storefront listings.
//!
//! ## Catalog Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ProductCatalog                                   │
//! │                                                                         │
//! │  Storage layer (external)                                              │
//! │       │  snapshot: Vec<Product>                                        │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────────────────────────┐     │
//! │  │  products: Vec<Product>     ← preserves snapshot order        │     │
//! │  │  index: HashMap<id, usize>  ← O(1) lookup by id               │     │
//! │  └───────────────────────────────────────────────────────────────┘     │
//! │       │                                   │                             │
//! │       ▼  ordered scan                     ▼  point lookup               │
//! │  filter pipeline / ranking           product detail, cart add          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Ids are unique; a duplicate insert is rejected, not overwritten
//! - Insertion order is preserved and is the pre-sort order every filter
//!   result inherits (ties in ranking fall back to it)
//! - Append-only within a session; admin edits arrive as fresh snapshots

use std::collections::HashMap;

use crate::error::{CoreResult, ValidationError};
use crate::types::Product;
use crate::validation::{validate_price_cents, validate_product_id};

// =============================================================================
// Product Catalog
// =============================================================================

/// Ordered, id-indexed collection of listings.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    /// Listings in snapshot order.
    products: Vec<Product>,
    /// Maps product id to its position in `products`.
    index: HashMap<String, usize>,
}

impl ProductCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a storage-layer snapshot.
    ///
    /// ## Errors
    /// Rejects the whole snapshot on the first invalid listing (empty id,
    /// negative price, duplicate id). A catalog is either fully trusted
    /// or not loaded at all; a half-loaded catalog would silently shrink
    /// search results.
    pub fn from_snapshot(products: Vec<Product>) -> CoreResult<Self> {
        let mut catalog = ProductCatalog::new();
        for product in products {
            catalog.push(product)?;
        }
        Ok(catalog)
    }

    /// Appends a listing, validating id and price.
    ///
    /// ## Errors
    /// - `Validation(Required)` for an empty id
    /// - `Validation(OutOfRange)` for a negative price
    /// - `Validation(Duplicate)` when the id is already present
    pub fn push(&mut self, product: Product) -> CoreResult<()> {
        validate_product_id(&product.id)?;
        validate_price_cents(product.price_cents)?;

        if self.index.contains_key(&product.id) {
            return Err(ValidationError::Duplicate {
                field: "productId".to_string(),
                value: product.id.clone(),
            }
            .into());
        }

        self.index.insert(product.id.clone(), self.products.len());
        self.products.push(product);
        Ok(())
    }

    /// Looks up a listing by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&pos| &self.products[pos])
    }

    /// Listings in snapshot order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterates listings in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no listings.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
