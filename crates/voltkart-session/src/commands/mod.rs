//! # Storefront Commands Module
//!
//! All commands exposed to the storefront frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── browse.rs      ◄─── Search, filter, rank, product detail
//! ├── cart.rs        ◄─── Cart manipulation
//! ├── wishlist.rs    ◄─── Wishlist toggling
//! └── eligibility.rs ◄─── Rental eligibility checks
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Command Flow                              │
//! │                                                                         │
//! │  Web Frontend                                                           │
//! │  ────────────                                                           │
//! │  const results = await invoke('browse', {                               │
//! │    selection: { query: 'macbook', type: 'rent' },                       │
//! │    sort: 'price-low'                                                    │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (JSON over the host bridge)                                   │
//! │         ▼                                                               │
//! │  Session Layer                                                          │
//! │  ─────────────                                                          │
//! │  impl StorefrontSession {                                               │
//! │      pub fn browse(                                                     │
//! │          &self,                                                         │
//! │          selection: &FacetSelection,  ◄── From invoke params            │
//! │          sort: SortKey,               ◄── Wire spelling "price-low"     │
//! │      ) -> Result<Vec<ProductDto>, ApiError>                             │
//! │  }                                                                      │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: ProductDto[]                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Access (Option B)
//! Each command touches only the state it needs:
//! ```rust,ignore
//! // Only needs catalog + ledger (wishlist for facet + favorited flags)
//! fn browse(&self, ...)
//!
//! // Only needs ledger
//! fn cart(&self)
//!
//! // Needs catalog, account, and ledger
//! fn add_to_cart(&self, ...)
//! ```

pub mod browse;
pub mod cart;
pub mod eligibility;
pub mod wishlist;
