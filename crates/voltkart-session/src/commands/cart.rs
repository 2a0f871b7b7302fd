//! # Cart Commands
//!
//! Storefront commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │  Page    │     │ Placed   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       (outside this crate)               │
//! │                   update_quantity                                       │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! │                                                                         │
//! │  RENT lines pass the eligibility ladder before they land in the        │
//! │  cart; BUY lines only pass the product status gate.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::session::StorefrontSession;
use crate::state::StoreConfig;
use voltkart_core::validation::{validate_product_id, validate_tenure_months};
use voltkart_core::{
    evaluate, CartLineItem, CartMode, CoreError, Ledger, RentalDecision, VariantSelection,
};

/// Request payload for `add_to_cart`.
///
/// ## Example
/// ```json
/// {
///   "productId": "2081",
///   "mode": "rent",
///   "tenureMonths": 3,
///   "variant": { "ram": "16GB" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddToCartRequest {
    pub product_id: String,

    pub mode: CartMode,

    /// Required when `mode` is `rent`, ignored for `buy`
    #[serde(default)]
    pub tenure_months: Option<u32>,

    /// Chosen RAM/SSD/color, all optional
    #[serde(default)]
    pub variant: VariantSelection,

    /// Defaults to 1 when omitted
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// Cart totals summary for API responses.
///
/// Always recomputed from the lines, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&Ledger> for CartTotals {
    fn from(ledger: &Ledger) -> Self {
        CartTotals {
            item_count: ledger.item_count(),
            total_quantity: ledger.total_quantity(),
            total_cents: ledger.total().cents(),
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
    /// Grand total formatted with the store currency, e.g. `"$43.97"`
    pub display_total: String,
}

impl CartResponse {
    fn new(ledger: &Ledger, config: &StoreConfig) -> Self {
        CartResponse {
            items: ledger.items().to_vec(),
            totals: CartTotals::from(ledger),
            display_total: config.format_price(ledger.total().cents()),
        }
    }
}

impl StorefrontSession {
    /// Gets the current cart contents.
    ///
    /// ## Returns
    /// Current cart with lines and recomputed totals
    pub fn cart(&self) -> CartResponse {
        debug!("cart command");
        self.ledger.with_ledger(|l| CartResponse::new(l, &self.config))
    }

    /// Adds a product to the cart in the requested mode.
    ///
    /// ## Behavior
    /// - `buy`: unit price is the listing price
    /// - `rent`: requires `tenure_months`; the eligibility ladder runs
    ///   first and a denial aborts the add with a targeted error code
    /// - Same `(product, mode)` already in cart: the line is updated in
    ///   place (latest tenure/variant/price/quantity win)
    /// - Price is "frozen" at time of adding (won't change if the
    ///   listing price updates on a later catalog refresh)
    ///
    /// ## User Workflow
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  User clicks "Rent for $59.99/mo" on the detail page               │
    /// │                    │                                                │
    /// │                    ▼                                                │
    /// │  invoke('add_to_cart', { productId, mode: 'rent', tenureMonths })  │
    /// │                    │                                                │
    /// │                    ▼                                                │
    /// │  ┌────────────────────────────────────────────────────────────┐    │
    /// │  │  1. Look up the listing in the catalog snapshot            │    │
    /// │  │  2. rent: run eligibility ladder, resolve option price     │    │
    /// │  │     buy:  take the listing price                           │    │
    /// │  │  3. Upsert the (product, mode) line in the ledger          │    │
    /// │  │  4. Return updated cart                                    │    │
    /// │  └────────────────────────────────────────────────────────────┘    │
    /// │                    │                                                │
    /// │                    ▼                                                │
    /// │  Cart drawer updates with the new line                             │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Returns
    /// Updated cart with all lines and totals
    pub fn add_to_cart(&self, request: &AddToCartRequest) -> Result<CartResponse, ApiError> {
        let quantity = request.quantity.unwrap_or(1);
        debug!(
            product_id = %request.product_id,
            mode = ?request.mode,
            quantity,
            "add_to_cart command"
        );

        validate_product_id(&request.product_id).map_err(CoreError::from)?;

        // Clone the listing out of the catalog lock before touching the
        // ledger; the two locks are never held at the same time.
        let product = self
            .catalog
            .with_catalog(|c| c.get(&request.product_id).cloned())
            .ok_or_else(|| ApiError::not_found("Product", &request.product_id))?;

        let (unit_price, tenure_months) = match request.mode {
            CartMode::Buy => (product.price(), None),
            CartMode::Rent => {
                let months = request.tenure_months.ok_or_else(|| {
                    ApiError::validation("tenureMonths is required when renting")
                })?;
                validate_tenure_months(months).map_err(CoreError::from)?;
                let account = self.account.snapshot();
                match evaluate(&account, &product, months)? {
                    RentalDecision::Allow { price } => (price, Some(months)),
                    RentalDecision::Deny { reason } => return Err(ApiError::denied(reason)),
                }
            }
        };

        let response = self.ledger.with_ledger_mut(|l| {
            l.add_item(
                &product,
                request.mode,
                tenure_months,
                request.variant.clone(),
                unit_price,
                quantity,
            )?;
            Ok::<_, CoreError>(CartResponse::new(l, &self.config))
        })?;

        Ok(response)
    }

    /// Updates the quantity of one cart line.
    ///
    /// ## Behavior
    /// - Quantity 0: removes that line (only that mode)
    /// - Quantity > max: returns error
    /// - No such line: returns error
    ///
    /// ## Returns
    /// Updated cart
    pub fn update_cart_quantity(
        &self,
        product_id: &str,
        mode: CartMode,
        quantity: i64,
    ) -> Result<CartResponse, ApiError> {
        debug!(product_id = %product_id, mode = ?mode, quantity, "update_cart_quantity command");

        let response = self.ledger.with_ledger_mut(|l| {
            l.update_quantity(product_id, mode, quantity)?;
            Ok::<_, CoreError>(CartResponse::new(l, &self.config))
        })?;

        Ok(response)
    }

    /// Removes every cart line for a product (rent AND buy).
    ///
    /// Infallible: removing a product that is not in the cart leaves the
    /// cart unchanged, matching the storefront's remove button which can
    /// race a concurrent clear.
    ///
    /// ## Returns
    /// Updated cart
    pub fn remove_from_cart(&self, product_id: &str) -> CartResponse {
        let (removed, response) = self.ledger.with_ledger_mut(|l| {
            let removed = l.remove_item(product_id);
            (removed, CartResponse::new(l, &self.config))
        });
        debug!(product_id = %product_id, removed, "remove_from_cart command");

        response
    }

    /// Clears all lines from the cart. The wishlist survives.
    ///
    /// ## Returns
    /// Empty cart
    pub fn clear_cart(&self) -> CartResponse {
        debug!("clear_cart command");

        self.ledger.with_ledger_mut(|l| {
            l.clear_cart();
            CartResponse::new(l, &self.config)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use voltkart_core::{
        Account, Brand, Category, CommercialMode, Condition, Product, ProductStatus, RentalOption,
    };

    fn rentable_listing(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            subtitle: None,
            brand: Brand::Apple,
            category: Some(Category::Smartphones),
            condition: Condition::New,
            mode: CommercialMode::RentAndBuy,
            status: ProductStatus::Available,
            price_cents,
            rating_tenths: 42,
            rental_options: vec![RentalOption {
                months: 3,
                price_cents: 5999,
                label: "3 months".to_string(),
            }],
        }
    }

    fn verified_session() -> StorefrontSession {
        let session = StorefrontSession::new();
        session
            .refresh_catalog(vec![rentable_listing("1", 129_900), rentable_listing("2", 4999)])
            .unwrap();
        session.refresh_account(Account {
            kyc_approved: true,
            active_rental_count: 0,
        });
        session
    }

    fn buy_request(product_id: &str) -> AddToCartRequest {
        AddToCartRequest {
            product_id: product_id.to_string(),
            mode: CartMode::Buy,
            tenure_months: None,
            variant: VariantSelection::default(),
            quantity: None,
        }
    }

    fn rent_request(product_id: &str, months: u32) -> AddToCartRequest {
        AddToCartRequest {
            product_id: product_id.to_string(),
            mode: CartMode::Rent,
            tenure_months: Some(months),
            variant: VariantSelection::default(),
            quantity: None,
        }
    }

    #[test]
    fn test_buy_add_uses_listing_price_and_defaults_quantity() {
        let session = verified_session();

        let cart = session.add_to_cart(&buy_request("1")).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].unit_price_cents, 129_900);
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.totals.total_cents, 129_900);
        assert_eq!(cart.display_total, "$1299.00");
    }

    #[test]
    fn test_rent_add_uses_option_price_and_tenure() {
        let session = verified_session();

        let cart = session.add_to_cart(&rent_request("1", 3)).unwrap();

        assert_eq!(cart.items[0].unit_price_cents, 5999);
        assert_eq!(cart.items[0].tenure_months, Some(3));
    }

    #[test]
    fn test_guest_rent_add_denied_for_kyc() {
        let session = verified_session();
        session.refresh_account(Account::default()); // back to guest

        let err = session.add_to_cart(&rent_request("1", 3)).unwrap_err();

        assert!(matches!(err.code, ErrorCode::KycNotApproved));
        // Nothing landed in the cart.
        assert!(session.cart().items.is_empty());
    }

    #[test]
    fn test_rent_add_requires_tenure() {
        let session = verified_session();

        let mut request = rent_request("1", 3);
        request.tenure_months = None;
        let err = session.add_to_cart(&request).unwrap_err();

        assert!(matches!(err.code, ErrorCode::ValidationError));
        assert!(err.message.contains("tenureMonths"));
    }

    #[test]
    fn test_rent_add_tenure_over_cap_denied() {
        let session = verified_session();

        let err = session.add_to_cart(&rent_request("1", 6)).unwrap_err();

        assert!(matches!(err.code, ErrorCode::TenureExceeded));
    }

    #[test]
    fn test_rent_add_missing_option_is_error_not_denial() {
        let session = verified_session();

        // 2 months is under the cap but listing only offers 3 months.
        let err = session.add_to_cart(&rent_request("1", 2)).unwrap_err();

        assert!(matches!(err.code, ErrorCode::TenureNotOffered));
        assert!(err.message.contains("2-month"));
    }

    #[test]
    fn test_add_unknown_product() {
        let session = verified_session();

        let err = session.add_to_cart(&buy_request("999")).unwrap_err();

        assert!(matches!(err.code, ErrorCode::NotFound));
    }

    #[test]
    fn test_add_out_of_stock_product_blocked() {
        let session = verified_session();
        let mut sold_out = rentable_listing("3", 9999);
        sold_out.status = ProductStatus::OutOfStock;
        session.append_listing(sold_out).unwrap();

        let err = session.add_to_cart(&buy_request("3")).unwrap_err();

        assert!(matches!(err.code, ErrorCode::ProductUnavailable));
    }

    #[test]
    fn test_re_add_same_mode_updates_line_in_place() {
        let session = verified_session();
        session.add_to_cart(&buy_request("1")).unwrap();

        let mut again = buy_request("1");
        again.quantity = Some(3);
        let cart = session.add_to_cart(&again).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.totals.total_cents, 3 * 129_900);
    }

    #[test]
    fn test_rent_and_buy_are_separate_lines() {
        let session = verified_session();

        session.add_to_cart(&buy_request("1")).unwrap();
        let cart = session.add_to_cart(&rent_request("1", 3)).unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.totals.total_cents, 129_900 + 5999);
    }

    #[test]
    fn test_update_quantity_recomputes_totals() {
        let session = verified_session();
        session.add_to_cart(&buy_request("2")).unwrap();

        let cart = session
            .update_cart_quantity("2", CartMode::Buy, 4)
            .unwrap();

        assert_eq!(cart.totals.total_quantity, 4);
        assert_eq!(cart.totals.total_cents, 4 * 4999);
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let session = verified_session();
        session.add_to_cart(&buy_request("2")).unwrap();

        let cart = session
            .update_cart_quantity("2", CartMode::Buy, 0)
            .unwrap();

        assert!(cart.items.is_empty());
    }

    #[test]
    fn test_update_quantity_missing_line() {
        let session = verified_session();

        let err = session
            .update_cart_quantity("2", CartMode::Rent, 1)
            .unwrap_err();

        assert!(matches!(err.code, ErrorCode::CartError));
    }

    #[test]
    fn test_remove_absent_product_is_silent() {
        let session = verified_session();

        let cart = session.remove_from_cart("999");

        assert!(cart.items.is_empty());
    }

    #[test]
    fn test_remove_drops_both_modes() {
        let session = verified_session();
        session.add_to_cart(&buy_request("1")).unwrap();
        session.add_to_cart(&rent_request("1", 3)).unwrap();

        let cart = session.remove_from_cart("1");

        assert!(cart.items.is_empty());
        assert_eq!(cart.display_total, "$0.00");
    }

    #[test]
    fn test_clear_cart_empties_lines() {
        let session = verified_session();
        session.add_to_cart(&buy_request("1")).unwrap();
        session.add_to_cart(&buy_request("2")).unwrap();

        let cart = session.clear_cart();

        assert!(cart.items.is_empty());
        assert_eq!(cart.totals.total_cents, 0);
    }
}
