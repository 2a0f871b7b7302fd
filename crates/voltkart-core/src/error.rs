//! # Error Types
//!
//! Domain-specific error types for voltkart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  voltkart-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  voltkart-session errors (separate crate)                              │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rental **denial** is NOT an error: it rides inside
//! [`RentalDecision::Deny`](crate::eligibility::RentalDecision) as ordinary
//! data, because the UI renders denials as guidance, not failures. Errors
//! here are for lookups that cannot produce a decision at all.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product ID, status, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found.
    ///
    /// ## When This Occurs
    /// - Product ID doesn't exist in the catalog snapshot
    /// - Listing was removed upstream but the UI still shows it
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product status blocks cart additions.
    ///
    /// ## When This Occurs
    /// - Product is RENTED (single-unit rental already out)
    /// - Product is OUT_OF_STOCK
    ///
    /// Both rent and buy additions are blocked; LOW STOCK still sells.
    #[error("Product {product_id} is unavailable ({status})")]
    ProductUnavailable { product_id: String, status: String },

    /// Requested rental tenure has no price configured on the product.
    ///
    /// ## When This Occurs
    /// - Account passed every eligibility check, but the product's
    ///   rental options have no entry for the requested month count
    ///
    /// ## Why Not a Denial?
    /// A denial means "this customer may not rent". This means "nobody can
    /// rent this product for that long" - a catalog data gap, surfaced to
    /// the UI as its own code so it never reads as a KYC or limit problem.
    #[error("Product {product_id} has no {months}-month rental option")]
    TenureNotOffered { product_id: String, months: u32 },

    /// Cart line does not exist for the given product.
    #[error("Product {0} is not in the cart")]
    NotInCart(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., duplicate product ID).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
