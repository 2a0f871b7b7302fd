//! # Eligibility Commands
//!
//! Storefront commands for rental eligibility checks.
//!
//! ## Decision, Not Error
//! The detail page asks "can this shopper rent this for N months?" long
//! before any cart add. A denial here is a normal answer the UI renders
//! as a banner ("Verify your identity to rent"), so the command returns
//! the decision as a value. Only malformed requests, unknown products,
//! and unconfigured tenures surface as `ApiError`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  check_rental_eligibility('2081', 3)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  { "decision": "ALLOW", "price": 5999 }          ──► Rent button live   │
//! │  { "decision": "DENY",                                                  │
//! │    "reason": "KYC_NOT_APPROVED" }                ──► Verify banner      │
//! │  ApiError { code: "TENURE_NOT_OFFERED", ... }    ──► Period picker bug  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::ApiError;
use crate::session::StorefrontSession;
use voltkart_core::validation::{validate_product_id, validate_tenure_months};
use voltkart_core::{evaluate, CoreError, RentalDecision};

impl StorefrontSession {
    /// Evaluates whether the current shopper may rent a product.
    ///
    /// ## Arguments
    /// * `product_id` - Listing to check
    /// * `tenure_months` - Requested rental period
    ///
    /// ## Returns
    /// The raw decision: `Allow` with the matched option price, or
    /// `Deny` with the highest-priority reason
    pub fn check_rental_eligibility(
        &self,
        product_id: &str,
        tenure_months: u32,
    ) -> Result<RentalDecision, ApiError> {
        debug!(product_id = %product_id, tenure_months, "check_rental_eligibility command");

        validate_product_id(product_id).map_err(CoreError::from)?;
        validate_tenure_months(tenure_months).map_err(CoreError::from)?;
        let product = self
            .catalog
            .with_catalog(|c| c.get(product_id).cloned())
            .ok_or_else(|| ApiError::not_found("Product", product_id))?;

        let account = self.account.snapshot();
        let decision = evaluate(&account, &product, tenure_months)?;

        Ok(decision)
    }
}
