//! # Voltkart Session Library
//!
//! Stateful storefront layer for the Voltkart rent-or-buy electronics shop.
//! This crate owns the live session state and exposes the commands the
//! frontend invokes; all business rules live in `voltkart-core`.
//!
//! ## Module Organization
//! ```text
//! voltkart_session/
//! ├── lib.rs          ◄─── You are here (session setup & exports)
//! ├── session.rs      ◄─── StorefrontSession (owns all state)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Catalog snapshot state
//! │   ├── account.rs  ◄─── Shopper account state
//! │   ├── ledger.rs   ◄─── Cart + wishlist ledger state
//! │   └── config.rs   ◄─── Store configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── browse.rs   ◄─── Search, filter, rank, product detail
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── wishlist.rs ◄─── Wishlist toggling
//! │   └── eligibility.rs ◄─ Rental eligibility checks
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Option B: Multiple State Types)
//! Instead of a single mutable blob, the session holds multiple focused
//! state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Management                             │
//! │                                                                         │
//! │  Option B: Multiple State Types (CHOSEN)                               │
//! │  ─────────────────────────────────────────                             │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │  CatalogState    │ │  LedgerState     │ │  AccountState        │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Listings      │ │  • Cart lines    │ │  • KYC flag          │   │
//! │  │  • Id index      │ │  • Wishlist      │ │  • Rental count      │   │
//! │  │                  │ │  • Totals        │ │                      │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  WHY: Each command only touches the state it needs.                    │
//! │       Better separation of concerns and testability.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```
//! use voltkart_core::{FacetSelection, SortKey};
//! use voltkart_session::StorefrontSession;
//!
//! let session = StorefrontSession::new();
//! let results = session.browse(&FacetSelection::default(), SortKey::Popularity)
//!     .expect("empty selection is always valid");
//! assert!(results.is_empty()); // no catalog loaded yet
//! ```

pub mod commands;
pub mod error;
pub mod session;
pub mod state;

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub use commands::browse::ProductDto;
pub use commands::cart::{AddToCartRequest, CartResponse, CartTotals};
pub use commands::wishlist::WishlistResponse;
pub use error::{ApiError, ErrorCode};
pub use session::StorefrontSession;
pub use state::{AccountState, CatalogState, LedgerState, StoreConfig};

/// Initializes the tracing subscriber for structured logging.
///
/// Call once at application startup, before the first command runs.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=voltkart=trace` - Show trace for voltkart crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,voltkart=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
