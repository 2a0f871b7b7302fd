//! # Cart & Wishlist Ledger
//!
//! The in-memory record of what the user intends to rent, buy, and keep
//! an eye on.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Ledger Operations                                   │
//! │                                                                         │
//! │  Frontend Action          Session Command          Ledger Change        │
//! │  ───────────────          ───────────────          ─────────────        │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ────────► upsert (id, mode)   │
//! │                                                                         │
//! │  Change Quantity ────────► update_cart_quantity()► line.quantity = n   │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ───► drop all modes      │
//! │                                                                         │
//! │  Heart Icon ─────────────► toggle_wishlist() ────► flip membership     │
//! │                                                                         │
//! │  View Cart ──────────────► cart() ───────────────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per `(product_id, mode)`; re-adding updates the line
//!   in place with the latest tenure/variant/price/quantity
//! - `remove_item` drops every mode of a product and is a no-op when the
//!   product is absent (the UI may double-fire the handler)
//! - Wishlist toggling is idempotent under double-toggle
//! - Totals are derived on every call, never cached

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;

// =============================================================================
// Cart Mode
// =============================================================================

/// Which side of the rent-or-buy split a cart line belongs to.
///
/// Distinct from [`CommercialMode`](crate::types::CommercialMode): a
/// product may offer both, but every cart line commits to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CartMode {
    Rent,
    Buy,
}

// =============================================================================
// Variant Selection
// =============================================================================

/// Configuration options chosen on the product page.
///
/// All optional; a plain listing has no variants at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VariantSelection {
    pub ram: Option<String>,
    pub ssd: Option<String>,
    pub color: Option<String>,
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One line in the cart.
///
/// ## Design Notes
/// - `product_id` references the listing; `name` and `unit_price_cents`
///   are frozen at add time so the cart stays consistent even if the
///   listing is edited upstream afterwards
/// - `tenure_months` is `Some` exactly when `mode` is rent
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Line id (UUID v4), stable across upserts of the same line.
    pub id: String,

    /// Listing this line refers to.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Rent or buy.
    pub mode: CartMode,

    /// Rental tenure in months; `None` for buy lines.
    pub tenure_months: Option<u32>,

    /// Variant attributes chosen on the product page.
    pub variant: VariantSelection,

    /// Resolved price in cents at time of adding (frozen).
    /// Rent lines carry the matched rental-option price, buy lines the
    /// listing price.
    pub unit_price_cents: i64,

    /// Quantity in cart.
    pub quantity: i64,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Builds a fresh line from a listing plus the session-resolved price.
    fn from_product(
        product: &Product,
        mode: CartMode,
        tenure_months: Option<u32>,
        variant: VariantSelection,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        CartLineItem {
            id: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            mode,
            tenure_months,
            variant,
            unit_price_cents: unit_price.cents(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Wishlist
// =============================================================================

/// Favorited product ids.
///
/// Ids are opaque: the wishlist accepts ids the catalog may not have
/// loaded yet (the heart icon works on cached cards). A `BTreeSet` keeps
/// iteration order deterministic for the favorites view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Wishlist(BTreeSet<String>);

impl Wishlist {
    /// Creates an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership for a product id.
    ///
    /// ## Returns
    /// The NEW membership state: `true` means the id is now favorited.
    /// Toggling twice always restores the original state.
    pub fn toggle(&mut self, product_id: &str) -> bool {
        if self.0.remove(product_id) {
            false
        } else {
            self.0.insert(product_id.to_string());
            true
        }
    }

    /// Whether a product id is favorited.
    pub fn contains(&self, product_id: &str) -> bool {
        self.0.contains(product_id)
    }

    /// Favorited ids in deterministic (sorted) order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of favorited products.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is favorited.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Ledger
// =============================================================================

/// Cart lines plus wishlist for one user session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// Cart lines in add order.
    items: Vec<CartLineItem>,

    /// Favorited product ids.
    wishlist: Wishlist,

    /// When the ledger was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger {
            items: Vec::new(),
            wishlist: Wishlist::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a listing to the cart, or updates the existing line.
    ///
    /// ## Behavior
    /// - Status gate first: `RENTED`/`OUT_OF_STOCK` listings are blocked
    ///   for BOTH modes (`LOW STOCK` still sells)
    /// - Upsert key is `(product_id, mode)`: re-adding replaces tenure,
    ///   variant, price, and quantity while keeping the line id and the
    ///   original `added_at`
    /// - `unit_price` is whatever the caller resolved for the mode
    ///   (rental-option price after an Allow decision, or the buy price)
    ///
    /// ## Returns
    /// A snapshot of the stored line.
    pub fn add_item(
        &mut self,
        product: &Product,
        mode: CartMode,
        tenure_months: Option<u32>,
        variant: VariantSelection,
        unit_price: Money,
        quantity: i64,
    ) -> CoreResult<CartLineItem> {
        if product.status.blocks_cart_add() {
            return Err(CoreError::ProductUnavailable {
                product_id: product.id.clone(),
                status: product.status.label().to_string(),
            });
        }

        validate_quantity(quantity)?;

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == product.id && line.mode == mode)
        {
            // Latest values win; identity and added_at survive the upsert.
            line.tenure_months = tenure_months;
            line.variant = variant;
            line.unit_price_cents = unit_price.cents();
            line.quantity = quantity;
            return Ok(line.clone());
        }

        let line = CartLineItem::from_product(
            product,
            mode,
            tenure_months,
            variant,
            unit_price,
            quantity,
        );
        self.items.push(line.clone());
        Ok(line)
    }

    /// Updates the quantity of a cart line.
    ///
    /// ## Behavior
    /// - Quantity 0 removes that line (only that mode)
    /// - Missing line is `NotInCart`
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        mode: CartMode,
        quantity: i64,
    ) -> CoreResult<()> {
        if quantity == 0 {
            let before = self.items.len();
            self.items
                .retain(|line| !(line.product_id == product_id && line.mode == mode));
            if self.items.len() == before {
                return Err(CoreError::NotInCart(product_id.to_string()));
            }
            return Ok(());
        }

        validate_quantity(quantity)?;

        match self
            .items
            .iter_mut()
            .find(|line| line.product_id == product_id && line.mode == mode)
        {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::NotInCart(product_id.to_string())),
        }
    }

    /// Removes every cart line for a product (rent AND buy).
    ///
    /// ## Returns
    /// `true` when at least one line was removed. An absent product is a
    /// silent no-op returning `false`, never an error.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.product_id != product_id);
        self.items.len() != before
    }

    /// Empties the cart. The wishlist is untouched.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Flips wishlist membership; returns the new state.
    pub fn toggle_wishlist(&mut self, product_id: &str) -> bool {
        self.wishlist.toggle(product_id)
    }

    /// Cart lines in add order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The wishlist.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Number of cart lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Cart total, recomputed from the lines on every call.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total())
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
