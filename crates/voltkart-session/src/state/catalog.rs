//! # Catalog State
//!
//! Holds the in-memory catalog snapshot the session browses against.
//!
//! ## Thread Safety
//! The catalog is wrapped in `RwLock` because:
//! 1. Every browse/detail/cart command reads it
//! 2. Writes are rare (full refresh on load, occasional appended listing)
//! 3. Concurrent readers must not block each other
//!
//! ## Refresh Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Refresh                                      │
//! │                                                                         │
//! │  Feed Payload              CatalogState                 Readers         │
//! │  ────────────              ────────────                 ───────         │
//! │                                                                         │
//! │  Vec<Product> ──replace──► validate ALL listings                        │
//! │                               │                                         │
//! │                     ┌─────────┴─────────┐                               │
//! │                     ▼                   ▼                               │
//! │                all valid           any invalid                          │
//! │                swap snapshot       keep OLD snapshot ──► browse still   │
//! │                                    return the error      works          │
//! │                                                                         │
//! │  NOTE: Readers never observe a half-loaded catalog.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::RwLock;

use voltkart_core::{CoreResult, Product, ProductCatalog};

/// Shared, refreshable catalog snapshot.
pub struct CatalogState {
    catalog: RwLock<ProductCatalog>,
}

impl CatalogState {
    /// Creates an empty catalog state.
    pub fn new() -> Self {
        CatalogState {
            catalog: RwLock::new(ProductCatalog::new()),
        }
    }

    /// Executes a function with read access to the catalog.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = catalog_state.with_catalog(|c| c.len());
    /// ```
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ProductCatalog) -> R,
    {
        let catalog = self.catalog.read().expect("Catalog lock poisoned");
        f(&catalog)
    }

    /// Replaces the snapshot with a freshly validated one.
    ///
    /// All-or-nothing: if any listing fails validation the current
    /// snapshot stays in place and the error is returned.
    ///
    /// ## Returns
    /// Number of listings in the new snapshot.
    pub fn replace(&self, products: Vec<Product>) -> CoreResult<usize> {
        let fresh = ProductCatalog::from_snapshot(products)?;
        let count = fresh.len();
        let mut catalog = self.catalog.write().expect("Catalog lock poisoned");
        *catalog = fresh;
        Ok(count)
    }

    /// Appends a single listing to the current snapshot.
    ///
    /// Rejects duplicates and invalid listings without disturbing the
    /// rest of the catalog.
    pub fn append(&self, product: Product) -> CoreResult<()> {
        let mut catalog = self.catalog.write().expect("Catalog lock poisoned");
        catalog.push(product)
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltkart_core::{Brand, Category, CommercialMode, Condition, ProductStatus};

    fn test_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            subtitle: None,
            brand: Brand::Apple,
            category: Some(Category::Laptops),
            condition: Condition::New,
            mode: CommercialMode::Buy,
            status: ProductStatus::Available,
            price_cents: 99_900,
            rating_tenths: 40,
            rental_options: Vec::new(),
        }
    }

    #[test]
    fn test_replace_swaps_snapshot() {
        let state = CatalogState::new();

        let count = state
            .replace(vec![test_product("1"), test_product("2")])
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(state.with_catalog(|c| c.len()), 2);
    }

    #[test]
    fn test_failed_replace_keeps_old_snapshot() {
        let state = CatalogState::new();
        state.replace(vec![test_product("1")]).unwrap();

        let mut bad = test_product("2");
        bad.price_cents = -1;
        let result = state.replace(vec![test_product("3"), bad]);

        assert!(result.is_err());
        // Old snapshot survives intact.
        assert_eq!(state.with_catalog(|c| c.len()), 1);
        assert!(state.with_catalog(|c| c.get("1").is_some()));
        assert!(state.with_catalog(|c| c.get("3").is_none()));
    }

    #[test]
    fn test_append_rejects_duplicate() {
        let state = CatalogState::new();
        state.append(test_product("1")).unwrap();

        assert!(state.append(test_product("1")).is_err());
        assert_eq!(state.with_catalog(|c| c.len()), 1);
    }
}
