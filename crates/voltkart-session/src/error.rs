//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Voltkart                               │
//! │                                                                         │
//! │  Frontend                    Session Layer                              │
//! │  ────────                    ─────────────                              │
//! │                                                                         │
//! │  addToCart({ mode: 'rent' })                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown product? ──── CoreError::ProductNotFound ──┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Eligibility denied? ── RentalDecision::Deny ───── ApiError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await addToCart({ productId, mode: 'rent', tenureMonths: 6 })        │
//! │  } catch (e) {                                                          │
//! │    // e.message = "Requested rental period exceeds the maximum"         │
//! │    // e.code = "TENURE_EXCEEDED"                                        │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Denials vs Errors
//! A rental denial inside `voltkart-core` is a *value*, not an error. The
//! session layer is where a denial finally becomes an `ApiError`, because
//! the cart commands cannot proceed past one. The eligibility *check*
//! command returns the raw decision instead, so the frontend can render
//! "Verify your identity" banners without a thrown error.

use serde::Serialize;
use ts_rs::TS;
use voltkart_core::{CoreError, DenialReason};

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "TENURE_NOT_OFFERED",
///   "message": "Product p-77 has no 9-month rental option"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await addToCart({ productId, mode: 'rent', tenureMonths: 6 });
/// } catch (e) {
///   switch (e.code) {
///     case 'KYC_NOT_APPROVED':
///       showKycBanner();
///       break;
///     case 'PRODUCT_UNAVAILABLE':
///       showNotification('This item just sold out');
///       break;
///     default:
///       showError(e.message);
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Shopper has not passed identity verification
    KycNotApproved,

    /// Shopper already holds the maximum number of active rentals
    MaxRentalsReached,

    /// Requested rental period exceeds the storewide maximum
    TenureExceeded,

    /// Product offers no rental option for the requested period
    TenureNotOffered,

    /// Product status blocks the requested operation
    ProductUnavailable,

    /// Cart operation failed
    CartError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    /// Creates an error from a rental denial.
    ///
    /// Used by cart commands, which cannot proceed past a denial. Each
    /// denial reason maps to its own error code so the frontend can show
    /// a targeted prompt instead of a generic failure toast.
    pub fn denied(reason: DenialReason) -> Self {
        match reason {
            DenialReason::KycNotApproved => ApiError::new(
                ErrorCode::KycNotApproved,
                "Identity verification is required before renting",
            ),
            DenialReason::MaxRentalsReached => {
                ApiError::new(ErrorCode::MaxRentalsReached, "Active rental limit reached")
            }
            DenialReason::TenureExceeded => ApiError::new(
                ErrorCode::TenureExceeded,
                "Requested rental period exceeds the maximum",
            ),
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::ProductUnavailable { product_id, status } => ApiError::new(
                ErrorCode::ProductUnavailable,
                format!("Product {} is unavailable ({})", product_id, status),
            ),
            CoreError::TenureNotOffered { product_id, months } => ApiError::new(
                ErrorCode::TenureNotOffered,
                format!("Product {} has no {}-month rental option", product_id, months),
            ),
            CoreError::NotInCart(id) => {
                ApiError::cart(format!("Product {} is not in the cart", id))
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use voltkart_core::ValidationError;

    #[test]
    fn test_error_serializes_with_code_and_message() {
        let err = ApiError::not_found("Product", "p-42");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: p-42");
    }

    #[test]
    fn test_denial_reasons_map_to_distinct_codes() {
        let kyc = ApiError::denied(DenialReason::KycNotApproved);
        let max = ApiError::denied(DenialReason::MaxRentalsReached);
        let tenure = ApiError::denied(DenialReason::TenureExceeded);

        assert_eq!(
            serde_json::to_value(kyc.code).unwrap(),
            "KYC_NOT_APPROVED"
        );
        assert_eq!(
            serde_json::to_value(max.code).unwrap(),
            "MAX_RENTALS_REACHED"
        );
        assert_eq!(
            serde_json::to_value(tenure.code).unwrap(),
            "TENURE_EXCEEDED"
        );
    }

    #[test]
    fn test_core_errors_convert_with_matching_codes() {
        let not_found: ApiError = CoreError::ProductNotFound("p-1".to_string()).into();
        assert!(matches!(not_found.code, ErrorCode::NotFound));

        let unavailable: ApiError = CoreError::ProductUnavailable {
            product_id: "p-2".to_string(),
            status: "Rented".to_string(),
        }
        .into();
        assert!(matches!(unavailable.code, ErrorCode::ProductUnavailable));
        assert!(unavailable.message.contains("Rented"));

        let no_tenure: ApiError = CoreError::TenureNotOffered {
            product_id: "p-3".to_string(),
            months: 9,
        }
        .into();
        assert!(matches!(no_tenure.code, ErrorCode::TenureNotOffered));
        assert!(no_tenure.message.contains("9-month"));

        let validation: ApiError = CoreError::Validation(ValidationError::Required {
            field: "productId".to_string(),
        })
        .into();
        assert!(matches!(validation.code, ErrorCode::ValidationError));
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = ApiError::validation("Search query too long");
        assert_eq!(err.to_string(), "[ValidationError] Search query too long");
    }
}
