//! # Ledger State
//!
//! Manages the session's cart and wishlist ledger.
//!
//! ## Thread Safety
//! The ledger is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart or wishlist
//! 2. Only one command should modify the ledger at a time
//! 3. Commands can run concurrently
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger State Operations                              │
//! │                                                                         │
//! │  Frontend Action          Session Command         Ledger Change         │
//! │  ───────────────          ───────────────         ─────────────         │
//! │                                                                         │
//! │  Rent/Buy button ────────► add_to_cart() ───────► upsert (id, mode)    │
//! │                                                                         │
//! │  Change Quantity ────────► update_cart_quantity() line.qty = n          │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► drop all modes        │
//! │                                                                         │
//! │  Click Clear ────────────► clear_cart() ────────► items.clear()         │
//! │                                                                         │
//! │  Heart icon ─────────────► toggle_wishlist() ───► flip membership       │
//! │                                                                         │
//! │  View Cart ──────────────► cart() ──────────────► (read only)           │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        Read operations also acquire the lock but release it quickly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use voltkart_core::Ledger;

/// Thread-safe wrapper around the session ledger.
pub struct LedgerState {
    ledger: Arc<Mutex<Ledger>>,
}

impl LedgerState {
    /// Creates a new empty ledger state.
    pub fn new() -> Self {
        LedgerState {
            ledger: Arc::new(Mutex::new(Ledger::new())),
        }
    }

    /// Executes a function with read access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = ledger_state.with_ledger(|l| CartTotals::from(l));
    /// ```
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Ledger) -> R,
    {
        let ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&ledger)
    }

    /// Executes a function with write access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// ledger_state.with_ledger_mut(|l| l.remove_item(&product_id));
    /// ```
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Ledger) -> R,
    {
        let mut ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&mut ledger)
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new()
    }
}
