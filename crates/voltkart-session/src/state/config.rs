//! # Store Configuration
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VOLTKART_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use voltkart_core::{SortKey, MAX_ACTIVE_RENTALS, MAX_TENURE_MONTHS};

/// Storefront configuration.
///
/// ## Fields
/// Most fields have sensible defaults for development.
/// Production deployments should configure these properly.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoreConfig {
    /// Store name (displayed in the page header)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Sort order applied when the shopper has not picked one
    pub default_sort: SortKey,

    /// Maximum concurrent active rentals per account.
    /// Mirrors the storewide business rule; exposed so the frontend can
    /// render "x of 3 rentals used" copy without hardcoding the cap.
    pub max_active_rentals: u32,

    /// Longest rental period offered, in months.
    pub max_tenure_months: u32,
}

impl Default for StoreConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Voltkart Dev Store"
    /// - Currency: USD ($)
    /// - Sort: popularity (highest rated first)
    /// - Rental caps: storewide business rules
    fn default() -> Self {
        StoreConfig {
            store_name: "Voltkart Dev Store".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            default_sort: SortKey::Popularity,
            max_active_rentals: MAX_ACTIVE_RENTALS,
            max_tenure_months: MAX_TENURE_MONTHS,
        }
    }
}

impl StoreConfig {
    /// Creates a new StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VOLTKART_STORE_NAME`: Override store name
    /// - `VOLTKART_CURRENCY_SYMBOL`: Override currency symbol
    /// - `VOLTKART_DEFAULT_SORT`: Override default sort (e.g., "price-low")
    ///
    /// The rental caps are business rules, not deployment knobs, so they
    /// cannot be overridden here.
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = std::env::var("VOLTKART_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("VOLTKART_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(sort_str) = std::env::var("VOLTKART_DEFAULT_SORT") {
            // Sort keys use their wire spelling ("price-low", "newest")
            if let Ok(sort) = serde_json::from_value(serde_json::Value::String(sort_str)) {
                config.default_sort = sort;
            }
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_price(129_900), "$1299.00");
    /// ```
    pub fn format_price(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_positive() {
        let config = StoreConfig::default();
        assert_eq!(config.format_price(1234), "$12.34");
        assert_eq!(config.format_price(100), "$1.00");
        assert_eq!(config.format_price(1), "$0.01");
        assert_eq!(config.format_price(0), "$0.00");
    }

    #[test]
    fn test_format_price_negative() {
        let config = StoreConfig::default();
        assert_eq!(config.format_price(-1234), "-$12.34");
    }

    #[test]
    fn test_format_price_large() {
        let config = StoreConfig::default();
        assert_eq!(config.format_price(123456789), "$1234567.89");
    }

    #[test]
    fn test_defaults_mirror_storewide_rules() {
        let config = StoreConfig::default();
        assert_eq!(config.default_sort, SortKey::Popularity);
        assert_eq!(config.max_active_rentals, MAX_ACTIVE_RENTALS);
        assert_eq!(config.max_tenure_months, MAX_TENURE_MONTHS);
    }
}
