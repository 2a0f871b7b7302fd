//! # Rental Eligibility Engine
//!
//! Decides whether a rental cart-addition may proceed, and if not, exactly
//! why.
//!
//! ## Decision Ladder
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              evaluate(account, product, tenure)                         │
//! │                                                                         │
//! │  1. kyc_approved?          ──no──► Deny(KYC_NOT_APPROVED)              │
//! │         │ yes                                                           │
//! │  2. active rentals < 3?    ──no──► Deny(MAX_RENTALS_REACHED)           │
//! │         │ yes                                                           │
//! │  3. tenure <= 3 months?    ──no──► Deny(TENURE_EXCEEDED)               │
//! │         │ yes                                                           │
//! │  4. option for tenure?     ──no──► Err(TENURE_NOT_OFFERED)             │
//! │         │ yes                                                           │
//! │         ▼                                                               │
//! │     Allow { price }                                                     │
//! │                                                                         │
//! │  Fixed priority: the FIRST failing check wins. An unverified account   │
//! │  with five active rentals is KYC_NOT_APPROVED, full stop.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Denial vs Error
//! A **denial** is a policy outcome about this customer; the UI renders it
//! as guidance (verify your identity, return a rental first, pick a
//! shorter tenure). `TENURE_NOT_OFFERED` is different: nobody can rent
//! this product for that long, because the catalog has no price for it.
//! That is a lookup failure and travels as [`CoreError`], never as a
//! denial.
//!
//! ## Purity
//! No side effects, no mutation, no clock. Safe to call concurrently from
//! any number of UI callers; the session invokes it for rent-mode
//! additions only (buy additions skip straight to the ledger's status
//! gate).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Account, Product};
use crate::{MAX_ACTIVE_RENTALS, MAX_TENURE_MONTHS};

// =============================================================================
// Denial Reason
// =============================================================================

/// The three mutually exclusive reasons a rental request is denied.
///
/// Wire codes are SCREAMING_SNAKE_CASE, matching the storefront's error
/// vocabulary end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DenialReason {
    /// Identity verification has not been approved. The UI typically
    /// redirects to the verification flow.
    KycNotApproved,
    /// The account already holds the maximum number of active rentals.
    MaxRentalsReached,
    /// The requested tenure is longer than the storefront underwrites.
    TenureExceeded,
}

// =============================================================================
// Rental Decision
// =============================================================================

/// Outcome of an eligibility evaluation.
///
/// Serializes as a tagged object the frontend can switch on directly:
/// `{"decision":"ALLOW","price":4999}` or
/// `{"decision":"DENY","reason":"KYC_NOT_APPROVED"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "decision", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalDecision {
    /// Rental may proceed at the resolved monthly price.
    Allow { price: Money },
    /// Rental is denied for exactly one reason.
    Deny { reason: DenialReason },
}

impl RentalDecision {
    /// Whether the rental may proceed.
    #[inline]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, RentalDecision::Allow { .. })
    }
}

// =============================================================================
// Evaluation
// =============================================================================

/// Evaluates a rental request against account state and the product's
/// rental table.
///
/// ## Behavior
/// Checks run in a fixed priority order and the first failure wins; a
/// request is never reported with two reasons. The tenure-cap check fires
/// before the option lookup, so a 4-month request is `TENURE_EXCEEDED`
/// even when the product mistakenly lists a 4-month option.
///
/// ## Errors
/// `CoreError::TenureNotOffered` when every check passes but the product
/// has no option for the requested month count.
///
/// ## Example
/// ```rust
/// use voltkart_core::eligibility::{evaluate, DenialReason, RentalDecision};
/// use voltkart_core::types::{
///     Account, Brand, Category, CommercialMode, Condition, Product,
///     ProductStatus, RentalOption,
/// };
///
/// let product = Product {
///     id: "2081".to_string(),
///     name: "MacBook Air M3".to_string(),
///     subtitle: None,
///     brand: Brand::Apple,
///     category: Some(Category::Laptops),
///     condition: Condition::New,
///     mode: CommercialMode::Rent,
///     status: ProductStatus::Available,
///     price_cents: 119_900,
///     rating_tenths: 47,
///     rental_options: vec![RentalOption {
///         months: 3,
///         price_cents: 5999,
///         label: "3 Months".to_string(),
///     }],
/// };
///
/// let guest = Account::default();
/// assert_eq!(
///     evaluate(&guest, &product, 3).unwrap(),
///     RentalDecision::Deny { reason: DenialReason::KycNotApproved },
/// );
///
/// let verified = Account { kyc_approved: true, active_rental_count: 0 };
/// match evaluate(&verified, &product, 3).unwrap() {
///     RentalDecision::Allow { price } => assert_eq!(price.cents(), 5999),
///     other => panic!("expected Allow, got {other:?}"),
/// }
/// ```
pub fn evaluate(
    account: &Account,
    product: &Product,
    requested_tenure_months: u32,
) -> CoreResult<RentalDecision> {
    if !account.kyc_approved {
        return Ok(RentalDecision::Deny {
            reason: DenialReason::KycNotApproved,
        });
    }

    if account.active_rental_count >= MAX_ACTIVE_RENTALS {
        return Ok(RentalDecision::Deny {
            reason: DenialReason::MaxRentalsReached,
        });
    }

    if requested_tenure_months > MAX_TENURE_MONTHS {
        return Ok(RentalDecision::Deny {
            reason: DenialReason::TenureExceeded,
        });
    }

    match product.rental_price_for(requested_tenure_months) {
        Some(price) => Ok(RentalDecision::Allow { price }),
        None => Err(CoreError::TenureNotOffered {
            product_id: product.id.clone(),
            months: requested_tenure_months,
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Brand, Category, CommercialMode, Condition, ProductStatus, RentalOption};

    fn rental_product(options: Vec<RentalOption>) -> Product {
        Product {
            id: "2081".to_string(),
            name: "MacBook Air M3".to_string(),
            subtitle: None,
            brand: Brand::Apple,
            category: Some(Category::Laptops),
            condition: Condition::New,
            mode: CommercialMode::Rent,
            status: ProductStatus::Available,
            price_cents: 119_900,
            rating_tenths: 47,
            rental_options: options,
        }
    }

    fn option(months: u32, price_cents: i64) -> RentalOption {
        RentalOption {
            months,
            price_cents,
            label: format!("{months} Months"),
        }
    }

    fn verified(active_rental_count: u32) -> Account {
        Account {
            kyc_approved: true,
            active_rental_count,
        }
    }

    #[test]
    fn test_allow_carries_matched_price() {
        let product = rental_product(vec![option(1, 6999), option(3, 5999)]);

        let decision = evaluate(&verified(0), &product, 3).unwrap();
        assert_eq!(
            decision,
            RentalDecision::Allow {
                price: Money::from_cents(5999)
            }
        );
        assert!(decision.is_allowed());
    }

    #[test]
    fn test_kyc_denial() {
        let product = rental_product(vec![option(3, 5999)]);
        let account = Account {
            kyc_approved: false,
            active_rental_count: 0,
        };

        let decision = evaluate(&account, &product, 3).unwrap();
        assert_eq!(
            decision,
            RentalDecision::Deny {
                reason: DenialReason::KycNotApproved
            }
        );
    }

    #[test]
    fn test_kyc_beats_max_rentals() {
        // First failing check wins: an unverified account with five
        // active rentals reports KYC, never the rental cap.
        let product = rental_product(vec![option(3, 5999)]);
        let account = Account {
            kyc_approved: false,
            active_rental_count: 5,
        };

        let decision = evaluate(&account, &product, 3).unwrap();
        assert_eq!(
            decision,
            RentalDecision::Deny {
                reason: DenialReason::KycNotApproved
            }
        );
    }

    #[test]
    fn test_max_rentals_boundary() {
        let product = rental_product(vec![option(3, 5999)]);

        // Two active rentals still pass
        assert!(evaluate(&verified(2), &product, 3).unwrap().is_allowed());

        // Exactly at the cap is denied
        let decision = evaluate(&verified(3), &product, 3).unwrap();
        assert_eq!(
            decision,
            RentalDecision::Deny {
                reason: DenialReason::MaxRentalsReached
            }
        );
    }

    #[test]
    fn test_tenure_cap_beats_option_lookup() {
        // The product even offers a 4-month option; policy still denies.
        let product = rental_product(vec![option(3, 5999), option(4, 5499)]);

        let decision = evaluate(&verified(0), &product, 4).unwrap();
        assert_eq!(
            decision,
            RentalDecision::Deny {
                reason: DenialReason::TenureExceeded
            }
        );
    }

    #[test]
    fn test_missing_tenure_is_error_not_denial() {
        let product = rental_product(vec![option(1, 6999), option(3, 5999)]);

        let err = evaluate(&verified(0), &product, 2).unwrap_err();
        assert!(matches!(
            err,
            CoreError::TenureNotOffered { months: 2, .. }
        ));
    }

    #[test]
    fn test_evaluation_is_pure() {
        let product = rental_product(vec![option(3, 5999)]);
        let account = verified(1);

        let first = evaluate(&account, &product, 3).unwrap();
        let second = evaluate(&account, &product, 3).unwrap();
        assert_eq!(first, second);
        // Inputs are untouched
        assert_eq!(account.active_rental_count, 1);
    }

    #[test]
    fn test_decision_wire_format() {
        let allow = RentalDecision::Allow {
            price: Money::from_cents(4999),
        };
        assert_eq!(
            serde_json::to_string(&allow).unwrap(),
            r#"{"decision":"ALLOW","price":4999}"#
        );

        let deny = RentalDecision::Deny {
            reason: DenialReason::KycNotApproved,
        };
        assert_eq!(
            serde_json::to_string(&deny).unwrap(),
            r#"{"decision":"DENY","reason":"KYC_NOT_APPROVED"}"#
        );
    }
}
