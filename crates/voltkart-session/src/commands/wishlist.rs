//! # Wishlist Commands
//!
//! Storefront commands for the favorites list.
//!
//! ## Toggle Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Heart icon click ──► toggle_wishlist(productId)                        │
//! │                              │                                          │
//! │                    ┌─────────┴─────────┐                                │
//! │                    ▼                   ▼                                │
//! │               not on list          on list                              │
//! │               add, favorited=true  remove, favorited=false              │
//! │                                                                         │
//! │  The list stores bare product ids. Ids are not checked against the     │
//! │  catalog: favorites must survive listings dropping out of a feed        │
//! │  refresh and coming back later.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::session::StorefrontSession;
use voltkart_core::validation::validate_product_id;
use voltkart_core::CoreError;

/// Result of a wishlist toggle.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WishlistResponse {
    pub product_id: String,

    /// New membership state after the flip
    pub favorited: bool,

    /// Every favorited product id, sorted
    pub wishlist: Vec<String>,
}

impl StorefrontSession {
    /// Flips a product in or out of the wishlist.
    ///
    /// ## Returns
    /// The new membership state plus the full id list for the heart
    /// badges
    pub fn toggle_wishlist(&self, product_id: &str) -> Result<WishlistResponse, ApiError> {
        validate_product_id(product_id).map_err(CoreError::from)?;

        let (favorited, wishlist) = self.ledger.with_ledger_mut(|l| {
            let favorited = l.toggle_wishlist(product_id);
            let ids = l.wishlist().ids().map(str::to_string).collect::<Vec<_>>();
            (favorited, ids)
        });
        debug!(product_id = %product_id, favorited, "toggle_wishlist command");

        Ok(WishlistResponse {
            product_id: product_id.to_string(),
            favorited,
            wishlist,
        })
    }

    /// Returns every favorited product id, sorted.
    pub fn wishlist(&self) -> Vec<String> {
        debug!("wishlist command");
        self.ledger
            .with_ledger(|l| l.wishlist().ids().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_toggle_adds_then_removes() {
        let session = StorefrontSession::new();

        let on = session.toggle_wishlist("p-7").unwrap();
        assert!(on.favorited);
        assert_eq!(on.wishlist, vec!["p-7"]);

        let off = session.toggle_wishlist("p-7").unwrap();
        assert!(!off.favorited);
        assert!(off.wishlist.is_empty());
    }

    #[test]
    fn test_wishlist_ids_stay_sorted() {
        let session = StorefrontSession::new();

        session.toggle_wishlist("zeta").unwrap();
        session.toggle_wishlist("alpha").unwrap();
        session.toggle_wishlist("mid").unwrap();

        assert_eq!(session.wishlist(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_toggle_rejects_blank_id() {
        let session = StorefrontSession::new();

        let err = session.toggle_wishlist("   ").unwrap_err();

        assert!(matches!(err.code, ErrorCode::ValidationError));
    }

    #[test]
    fn test_uncatalogued_id_is_accepted() {
        // Favorites survive catalog refreshes, so membership never
        // depends on the current snapshot.
        let session = StorefrontSession::new();

        let response = session.toggle_wishlist("retired-sku").unwrap();

        assert!(response.favorited);
    }
}
