//! # Storefront Session
//!
//! Owns all session state and exposes the command surface.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Startup                                   │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter (crate root `init_tracing`)    │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Construct Session ────────────────────────────────────────────────► │
//! │     • CatalogState: empty snapshot                                      │
//! │     • AccountState: guest (KYC not approved, 0 rentals)                 │
//! │     • LedgerState: empty cart + wishlist                                │
//! │     • StoreConfig: defaults or `StoreConfig::from_env()`                │
//! │                                                                         │
//! │  3. Load Catalog Feed ────────────────────────────────────────────────► │
//! │     • `refresh_catalog(products)` swaps in a validated snapshot         │
//! │                                                                         │
//! │  4. Deliver Account (after login) ────────────────────────────────────► │
//! │     • `refresh_account(account)` replaces the guest snapshot            │
//! │                                                                         │
//! │  5. Serve Commands ───────────────────────────────────────────────────► │
//! │     • browse / cart / wishlist / eligibility (see `commands/`)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{AccountState, CatalogState, LedgerState, StoreConfig};
use voltkart_core::{Account, Product};

/// A live storefront session.
///
/// Commands are implemented as methods in the `commands` modules; this
/// file only covers construction and state lifecycle.
pub struct StorefrontSession {
    pub(crate) catalog: CatalogState,
    pub(crate) account: AccountState,
    pub(crate) ledger: LedgerState,
    pub(crate) config: StoreConfig,
}

impl StorefrontSession {
    /// Creates a session with default configuration.
    ///
    /// Starts with an empty catalog, a guest account, and an empty
    /// ledger. Load listings with [`refresh_catalog`](Self::refresh_catalog).
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates a session with the given configuration.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let session = StorefrontSession::with_config(StoreConfig::from_env());
    /// ```
    pub fn with_config(config: StoreConfig) -> Self {
        StorefrontSession {
            catalog: CatalogState::new(),
            account: AccountState::new(),
            ledger: LedgerState::new(),
            config,
        }
    }

    /// Replaces the catalog snapshot with a fresh feed payload.
    ///
    /// All-or-nothing: one invalid listing rejects the whole payload and
    /// the previous snapshot keeps serving browse commands.
    ///
    /// ## Returns
    /// Number of listings now live.
    pub fn refresh_catalog(&self, products: Vec<Product>) -> Result<usize, ApiError> {
        let count = self.catalog.replace(products)?;
        info!(count, "Catalog snapshot refreshed");
        Ok(count)
    }

    /// Appends one listing to the live snapshot.
    pub fn append_listing(&self, product: Product) -> Result<(), ApiError> {
        let id = product.id.clone();
        self.catalog.append(product)?;
        debug!(product_id = %id, "Listing appended to catalog");
        Ok(())
    }

    /// Replaces the shopper account snapshot.
    ///
    /// Called after login and whenever the order-history layer delivers
    /// an updated rental count.
    pub fn refresh_account(&self, account: Account) {
        debug!(
            kyc_approved = account.kyc_approved,
            active_rental_count = account.active_rental_count,
            "Account snapshot refreshed"
        );
        self.account.replace(account);
    }

    /// Returns a copy of the current account snapshot.
    pub fn account(&self) -> Account {
        self.account.snapshot()
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl Default for StorefrontSession {
    fn default() -> Self {
        Self::new()
    }
}
