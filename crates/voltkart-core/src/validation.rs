//! # Validation Module
//!
//! Input validation utilities for the Voltkart storefront core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session Command (Rust)                                       │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core Engines                                                 │
//! │  ├── Catalog id uniqueness                                             │
//! │  ├── Status gating in the ledger                                       │
//! │  └── Eligibility decision checks                                       │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use voltkart_core::validation::{validate_search_query, validate_quantity};
//!
//! // Validate the query before the filter pipeline runs
//! validate_search_query("gaming laptop").unwrap();
//!
//! // Validate quantity before a cart operation
//! validate_quantity(2).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, MAX_SEARCH_QUERY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (returns all/default results)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
///
/// Ids are opaque strings from the catalog documents ("2081"). No format
/// is enforced beyond non-emptiness; the `newest` sort merely takes
/// advantage of numeric ids when it finds them.
///
/// ## Example
/// ```rust
/// use voltkart_core::validation::validate_product_id;
///
/// assert!(validate_product_id("2081").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id("   ").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "productId".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (99)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart: Add Item                                                         │
/// │                                                                         │
/// │  User enters quantity: 2                                               │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(2) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       ├── qty > 99? → Error: "quantity must be between 1 and 99"       │
/// │       │                                                                 │
/// │       └── OK → Proceed with add_to_cart                                │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional freebies)
///
/// ## Example
/// ```rust
/// use voltkart_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(2999).is_ok());  // $29.99
/// assert!(validate_price_cents(0).is_ok());     // Freebie
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a requested rental tenure in months.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// Tenures above [`MAX_TENURE_MONTHS`](crate::MAX_TENURE_MONTHS) are NOT
/// rejected here: the eligibility engine turns them into a
/// `TENURE_EXCEEDED` denial so the UI can explain the policy, rather than
/// a validation error that reads like a malformed request.
pub fn validate_tenure_months(months: u32) -> ValidationResult<()> {
    if months == 0 {
        return Err(ValidationError::MustBePositive {
            field: "tenureMonths".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
