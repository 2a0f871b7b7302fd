//! # Facet Filter Pipeline
//!
//! Multi-facet filtering for the listing grid.
//!
//! ## Pipeline Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FacetFilterPipeline                                │
//! │                                                                         │
//! │  FacetSelection (from UI)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  favorites_only? ──yes──► wishlist membership ONLY (all else ignored)  │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  keyword search AND category AND availability AND brands AND condition │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<&Product> in catalog order (ranking happens later)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Facet Rules
//! - Every facet has an inert default ("All", empty set, empty query), so
//!   an untouched sidebar matches the whole catalog
//! - Active facets compose by AND
//! - `favorites_only` is exclusive: the wishlist IS the result set
//! - Filtering never reorders; results keep catalog order for the ranker

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ledger::Wishlist;
use crate::types::{Availability, Brand, Category, Condition, Product};

// =============================================================================
// Availability Facet
// =============================================================================

/// Rent/buy axis of the facet bar. Wire name is `type` for compatibility
/// with the original storefront's query objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityFacet {
    /// Rentable listings (rent-only or rent-and-buy).
    Rent,
    /// Purchasable listings (buy-only or rent-and-buy).
    Buy,
    /// No availability filtering.
    #[default]
    All,
}

impl AvailabilityFacet {
    /// Whether a listing's availability passes this facet.
    ///
    /// A rent-and-buy listing passes both `rent` and `buy`.
    #[inline]
    pub const fn matches(&self, availability: Availability) -> bool {
        match self {
            AvailabilityFacet::All => true,
            AvailabilityFacet::Rent => {
                matches!(availability, Availability::Rent | Availability::Both)
            }
            AvailabilityFacet::Buy => {
                matches!(availability, Availability::Buy | Availability::Both)
            }
        }
    }
}

// =============================================================================
// Condition Facet
// =============================================================================

/// Condition toggle on the facet bar.
///
/// `Open Box` listings have no dedicated facet; they only appear under
/// `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ConditionFacet {
    New,
    Refurbished,
    #[default]
    All,
}

impl ConditionFacet {
    /// Whether a listing's condition passes this facet.
    #[inline]
    pub const fn matches(&self, condition: Condition) -> bool {
        match self {
            ConditionFacet::All => true,
            ConditionFacet::New => matches!(condition, Condition::New),
            ConditionFacet::Refurbished => matches!(condition, Condition::Refurbished),
        }
    }
}

// =============================================================================
// Facet Selection
// =============================================================================

/// The UI's complete facet state, one field per control.
///
/// Every field is serde-defaulted so a partial query object (the common
/// case; the UI only sends what the user touched) deserializes to inert
/// facets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FacetSelection {
    /// Exclusive wishlist mode: when set, every other facet is ignored
    /// and the result is exactly the favorited subset of the catalog.
    #[serde(default)]
    pub favorites_only: bool,

    /// Free-text keyword search. Whitespace-tokenized; a listing matches
    /// when EVERY keyword appears in its searchable surface.
    #[serde(default)]
    pub query: String,

    /// Category rail selection; `None` is "All".
    #[serde(default)]
    pub category: Option<Category>,

    /// Rent/buy axis. Legacy wire name `type`.
    #[serde(default, rename = "type")]
    pub availability: AvailabilityFacet,

    /// Brand checkboxes; empty means no brand filtering.
    #[serde(default)]
    pub brands: BTreeSet<Brand>,

    /// Condition toggle.
    #[serde(default)]
    pub condition: ConditionFacet,

    /// Page-level override (the refurbished deals page): forces the
    /// condition facet to Refurbished regardless of the toggle.
    #[serde(default)]
    pub refurbished_only: bool,
}

impl FacetSelection {
    /// The condition facet after the page-level override is applied.
    #[inline]
    fn effective_condition(&self) -> ConditionFacet {
        if self.refurbished_only {
            ConditionFacet::Refurbished
        } else {
            self.condition
        }
    }

    /// Whether a single listing passes this selection.
    ///
    /// ## Behavior
    /// - `favorites_only` short-circuits to wishlist membership
    /// - Otherwise all active facets must pass (AND composition)
    /// - An all-default selection matches every listing
    pub fn matches(&self, product: &Product, wishlist: &Wishlist) -> bool {
        // Exclusive mode: the wishlist is the result set, nothing else runs.
        if self.favorites_only {
            return wishlist.contains(&product.id);
        }

        if !self.query_matches(product) {
            return false;
        }

        if let Some(selected) = self.category {
            if product.category != Some(selected) {
                return false;
            }
        }

        if !self.availability.matches(product.availability()) {
            return false;
        }

        if !self.brands.is_empty() && !self.brands.contains(&product.brand) {
            return false;
        }

        self.effective_condition().matches(product.condition)
    }

    /// AND-of-keywords search over the listing's case-folded surface.
    ///
    /// "gaming laptop" requires both "gaming" and "laptop" somewhere in
    /// the name/brand/category/subtitle/condition/availability text, so a
    /// Gaming Monitor does not match.
    fn query_matches(&self, product: &Product) -> bool {
        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }

        let surface = product.search_surface();
        query
            .split_whitespace()
            .all(|keyword| surface.contains(&keyword.to_lowercase()))
    }
}

// =============================================================================
// Filter Entry Point
// =============================================================================

/// Runs the facet pipeline over a listing slice.
///
/// Pure and deterministic: same inputs, same output, catalog order
/// preserved. Returns borrows; nothing is cloned until the DTO layer.
pub fn filter<'a>(
    products: &'a [Product],
    selection: &FacetSelection,
    wishlist: &Wishlist,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| selection.matches(product, wishlist))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
