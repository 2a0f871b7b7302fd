//! # voltkart-core: Pure Business Logic for the Voltkart Storefront
//!
//! This crate is the **heart** of the Voltkart rent-or-buy electronics
//! storefront. It contains all business logic as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Voltkart Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (Web UI)                            │   │
//! │  │    Listing Grid ──► Product Page ──► Cart ──► Wishlist         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON DTOs                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              voltkart-session (Session Layer)                   │   │
//! │  │    browse, add_to_cart, check_rental_eligibility, etc.         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ voltkart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌─────────────┐ ┌──────────────┐  │   │
//! │  │   │  facets  │ │   rank   │ │ eligibility │ │    ledger    │  │   │
//! │  │   │  filter  │ │ SortKey  │ │ RentalRules │ │ Cart+Wishlist│  │   │
//! │  │   └──────────┘ └──────────┘ └─────────────┘ └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Brand, Rating, Account, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - In-memory product catalog with insertion-order scans
//! - [`facets`] - Multi-facet filter pipeline (search, brand, category, ...)
//! - [`rank`] - Stable result ranking (popularity, price, recency)
//! - [`eligibility`] - Rental eligibility decision engine
//! - [`ledger`] - Cart and wishlist ledger with derived totals
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Decisions Are Values**: A rental denial is data for the UI, not an error
//!
//! ## Example Usage
//!
//! ```rust
//! use voltkart_core::money::Money;
//! use voltkart_core::types::Rating;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(129_900); // $1,299.00
//!
//! // Ratings are tenths of a star, capped at 5.0
//! let rating = Rating::from_tenths(45); // 4.5 stars
//!
//! assert!(price.is_positive());
//! assert_eq!(rating.stars(), 4.5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod eligibility;
pub mod error;
pub mod facets;
pub mod ledger;
pub mod money;
pub mod rank;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use voltkart_core::Money` instead of
// `use voltkart_core::money::Money`

pub use catalog::ProductCatalog;
pub use eligibility::{evaluate, DenialReason, RentalDecision};
pub use error::{CoreError, CoreResult, ValidationError};
pub use facets::FacetSelection;
pub use ledger::{CartLineItem, CartMode, Ledger, VariantSelection, Wishlist};
pub use money::Money;
pub use rank::{filter_and_rank, SortKey};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum rentals an account may hold at once
///
/// ## Business Reason
/// Caps exposure per customer: an account with three active rentals must
/// return something before renting again. Checked by the eligibility engine
/// after KYC and before tenure.
pub const MAX_ACTIVE_RENTALS: u32 = 3;

/// Longest rental tenure offered, in months
///
/// ## Business Reason
/// The storefront only underwrites short rentals. Requests beyond this are
/// denied even when a product lists a longer option by mistake.
pub const MAX_TENURE_MONTHS: u32 = 3;

/// Maximum quantity of a single cart line
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 100 instead of 10).
/// Can be made configurable per-store in future versions.
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Maximum length of a search query, in characters
///
/// ## Business Reason
/// Queries longer than this are never genuine searches. Rejected at the
/// session boundary before the filter pipeline runs.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;
