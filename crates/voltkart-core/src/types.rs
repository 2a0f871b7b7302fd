//! # Domain Types
//!
//! Core domain types used throughout the Voltkart storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  RentalOption   │   │    Account      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (String)    │   │  months         │   │  kyc_approved   │       │
//! │  │  brand          │   │  price_cents    │   │  active_rental_ │       │
//! │  │  price_cents    │   │  label          │   │      count      │       │
//! │  │  rating_tenths  │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Rating      │   │ CommercialMode  │   │  ProductStatus  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  tenths (u8)    │   │  Rent           │   │  Available      │       │
//! │  │  45 = 4.5 stars │   │  Buy            │   │  LowStock       │       │
//! │  └─────────────────┘   │  RentAndBuy     │   │  Rented         │       │
//! │                        └─────────────────┘   │  OutOfStock     │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Products arrive as JSON documents written by the original storefront, so
//! field names are camelCase and several enums carry legacy labels verbatim
//! (`"Open Box"`, `"LOW STOCK"` with a space next to `"OUT_OF_STOCK"` with
//! an underscore). The serde renames below preserve those documents exactly;
//! unknown brands and categories fold into `Other` instead of failing the
//! whole catalog snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rating
// =============================================================================

/// Star rating represented in tenths of a star.
///
/// ## Why Tenths?
/// 1 tenth = 0.1 stars, so 45 = 4.5 stars.
/// Same discipline as integer cents: ratings sort and compare exactly,
/// with no float equality surprises in the popularity ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating(u8);

/// Highest representable rating (5.0 stars).
pub const MAX_RATING_TENTHS: u8 = 50;

impl Rating {
    /// Creates a rating from tenths of a star, clamping at 5.0 stars.
    #[inline]
    pub const fn from_tenths(tenths: u8) -> Self {
        if tenths > MAX_RATING_TENTHS {
            Rating(MAX_RATING_TENTHS)
        } else {
            Rating(tenths)
        }
    }

    /// Creates a rating from a star value (for convenience).
    pub fn from_stars(stars: f64) -> Self {
        Rating::from_tenths((stars * 10.0).round() as u8)
    }

    /// Returns the rating in tenths of a star.
    #[inline]
    pub const fn tenths(&self) -> u8 {
        self.0
    }

    /// Returns the rating in stars (for display only).
    #[inline]
    pub fn stars(&self) -> f64 {
        self.0 as f64 / 10.0
    }

    /// Zero rating (unrated product).
    #[inline]
    pub const fn zero() -> Self {
        Rating(0)
    }

    /// Checks if the rating is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::zero()
    }
}

// =============================================================================
// Commercial Mode & Availability
// =============================================================================

/// How a listing is offered: rental only, purchase only, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CommercialMode {
    /// Rental only (monthly tenures).
    Rent,
    /// Outright purchase only.
    Buy,
    /// Customer picks rent or buy on the product page.
    RentAndBuy,
}

impl CommercialMode {
    /// Collapses the mode into the availability axis the facet bar filters on.
    #[inline]
    pub const fn availability(&self) -> Availability {
        match self {
            CommercialMode::Rent => Availability::Rent,
            CommercialMode::Buy => Availability::Buy,
            CommercialMode::RentAndBuy => Availability::Both,
        }
    }
}

/// Derived availability of a listing on the rent/buy axis.
///
/// Not stored on the product; always computed from [`CommercialMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Rent,
    Buy,
    Both,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Availability::Rent => "rent",
            Availability::Buy => "buy",
            Availability::Both => "both",
        };
        write!(f, "{label}")
    }
}

// =============================================================================
// Brand
// =============================================================================

/// Electronics brands carried by the storefront.
///
/// Closed set matching the facet sidebar; anything else in a catalog
/// document deserializes to [`Brand::Other`] rather than rejecting the
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Brand {
    Apple,
    Samsung,
    Dell,
    #[serde(rename = "HP")]
    Hp,
    Lenovo,
    #[serde(rename = "ASUS")]
    Asus,
    Acer,
    Sony,
    #[serde(rename = "LG")]
    Lg,
    OnePlus,
    /// Fallback for brands outside the facet sidebar.
    #[serde(other)]
    Other,
}

impl Brand {
    /// Canonical label as shown in the facet sidebar and search surface.
    pub const fn label(&self) -> &'static str {
        match self {
            Brand::Apple => "Apple",
            Brand::Samsung => "Samsung",
            Brand::Dell => "Dell",
            Brand::Hp => "HP",
            Brand::Lenovo => "Lenovo",
            Brand::Asus => "ASUS",
            Brand::Acer => "Acer",
            Brand::Sony => "Sony",
            Brand::Lg => "LG",
            Brand::OnePlus => "OnePlus",
            Brand::Other => "Other",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product categories on the category rail.
///
/// Products may omit the category entirely; such listings only show up
/// under the "All" facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Laptops,
    Smartphones,
    Tablets,
    Monitors,
    Audio,
    Gaming,
    Cameras,
    Accessories,
    /// Fallback for categories outside the rail.
    #[serde(other)]
    Other,
}

impl Category {
    /// Canonical label as shown on the category rail and search surface.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Laptops => "Laptops",
            Category::Smartphones => "Smartphones",
            Category::Tablets => "Tablets",
            Category::Monitors => "Monitors",
            Category::Audio => "Audio",
            Category::Gaming => "Gaming",
            Category::Cameras => "Cameras",
            Category::Accessories => "Accessories",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Condition
// =============================================================================

/// Physical condition of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Condition {
    New,
    Refurbished,
    /// Returned-but-unused stock. Legacy label includes the space.
    #[serde(rename = "Open Box")]
    OpenBox,
}

impl Condition {
    pub const fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Refurbished => "Refurbished",
            Condition::OpenBox => "Open Box",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Product Status
// =============================================================================

/// Stock/lifecycle status of a listing.
///
/// Labels are preserved byte-for-byte from the original catalog documents,
/// including the inconsistent spacing (`"LOW STOCK"` vs `"OUT_OF_STOCK"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// In stock, sellable and rentable.
    Available,
    /// Still sellable; the badge is a nudge, not a gate.
    #[serde(rename = "LOW STOCK")]
    LowStock,
    /// Single rental unit is out with a customer.
    Rented,
    /// Nothing to sell or rent.
    OutOfStock,
}

impl ProductStatus {
    /// Whether this status blocks cart additions (both rent and buy).
    ///
    /// `LOW STOCK` still sells; only `RENTED` and `OUT_OF_STOCK` gate.
    #[inline]
    pub const fn blocks_cart_add(&self) -> bool {
        matches!(self, ProductStatus::Rented | ProductStatus::OutOfStock)
    }

    /// The wire label (used in error messages shown to the UI).
    pub const fn label(&self) -> &'static str {
        match self {
            ProductStatus::Available => "AVAILABLE",
            ProductStatus::LowStock => "LOW STOCK",
            ProductStatus::Rented => "RENTED",
            ProductStatus::OutOfStock => "OUT_OF_STOCK",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Available
    }
}

// =============================================================================
// Rental Option
// =============================================================================

/// One tenure-to-price entry in a product's rental table.
///
/// Options are stored in the order the merchandiser entered them. Months
/// are assumed unique per product but never enforced; lookups take the
/// first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RentalOption {
    /// Tenure length in months.
    pub months: u32,

    /// Monthly price in cents for this tenure.
    pub price_cents: i64,

    /// Display label, e.g. "3 Months".
    pub label: String,
}

impl RentalOption {
    /// Returns the option price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A listing in the storefront catalog.
///
/// Immutable to this crate: products are read from catalog snapshots and
/// never mutated here. Admin edits happen upstream and arrive as fresh
/// snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier. Numeric strings in practice ("2081"), which the
    /// `newest` sort exploits as a recency proxy.
    pub id: String,

    /// Display name shown on cards and the product page.
    pub name: String,

    /// Optional marketing subtitle ("M3 Pro, 18GB unified memory").
    pub subtitle: Option<String>,

    /// Brand, folded to `Other` when outside the sidebar set.
    pub brand: Brand,

    /// Category rail assignment; absent listings only pass the "All" facet.
    pub category: Option<Category>,

    /// Physical condition.
    pub condition: Condition,

    /// Rent, buy, or both.
    pub mode: CommercialMode,

    /// Stock/lifecycle status.
    pub status: ProductStatus,

    /// Buy price in cents. For rent-only listings this is the reference
    /// price the price sorts use.
    pub price_cents: i64,

    /// Star rating in tenths (45 = 4.5 stars).
    pub rating_tenths: u8,

    /// Tenure-to-price table for rentals. Empty for buy-only listings.
    #[serde(default)]
    pub rental_options: Vec<RentalOption>,
}

impl Product {
    /// Returns the buy/reference price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the star rating.
    #[inline]
    pub fn rating(&self) -> Rating {
        Rating::from_tenths(self.rating_tenths)
    }

    /// Availability on the rent/buy axis, derived from the mode.
    #[inline]
    pub fn availability(&self) -> Availability {
        self.mode.availability()
    }

    /// Looks up the monthly price for a tenure.
    ///
    /// First match wins when a table accidentally repeats a month count.
    /// Returns `None` when no option covers the requested tenure.
    pub fn rental_price_for(&self, months: u32) -> Option<Money> {
        self.rental_options
            .iter()
            .find(|option| option.months == months)
            .map(RentalOption::price)
    }

    /// Concatenated, case-folded text the keyword search matches against.
    ///
    /// Covers name, brand, category, subtitle, condition, and availability,
    /// so "rent" finds rentable listings and "refurbished dell" works as
    /// expected.
    pub fn search_surface(&self) -> String {
        let mut surface = String::new();
        surface.push_str(&self.name);
        surface.push(' ');
        surface.push_str(self.brand.label());
        if let Some(category) = self.category {
            surface.push(' ');
            surface.push_str(category.label());
        }
        if let Some(subtitle) = &self.subtitle {
            surface.push(' ');
            surface.push_str(subtitle);
        }
        surface.push(' ');
        surface.push_str(self.condition.label());
        surface.push(' ');
        surface.push_str(&self.availability().to_string());
        surface.to_lowercase()
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle status of an order, as recorded by the order-history layer.
///
/// Labels match the original order documents (`"Active Rental"`,
/// `"In Use"`, `"Awaiting Delivery"` with spaces).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderStatus {
    Placed,
    Shipped,
    #[serde(rename = "Active Rental")]
    ActiveRental,
    #[serde(rename = "In Use")]
    InUse,
    #[serde(rename = "Awaiting Delivery")]
    AwaitingDelivery,
    Delivered,
    Returned,
    Cancelled,
}

impl OrderStatus {
    /// Whether an order in this status occupies a rental slot.
    ///
    /// The eligibility engine caps active rentals; an order counts until
    /// it reaches a terminal status (delivered purchase, returned rental,
    /// or cancellation).
    #[inline]
    pub const fn counts_toward_rental_limit(&self) -> bool {
        matches!(
            self,
            OrderStatus::Placed
                | OrderStatus::Shipped
                | OrderStatus::ActiveRental
                | OrderStatus::InUse
                | OrderStatus::AwaitingDelivery
        )
    }
}

// =============================================================================
// Account
// =============================================================================

/// Read-only account snapshot supplied by the auth/order-history layer.
///
/// The eligibility engine never mutates this; a fresh snapshot arrives
/// whenever the external layers deliver one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Whether identity verification (KYC) has been approved.
    pub kyc_approved: bool,

    /// Orders currently occupying a rental slot.
    pub active_rental_count: u32,
}

impl Account {
    /// Builds an account snapshot from raw order history.
    ///
    /// ## Example
    /// ```rust
    /// use voltkart_core::types::{Account, OrderStatus};
    ///
    /// let history = [OrderStatus::ActiveRental, OrderStatus::Returned];
    /// let account = Account::from_order_statuses(true, &history);
    /// assert_eq!(account.active_rental_count, 1);
    /// ```
    pub fn from_order_statuses(kyc_approved: bool, statuses: &[OrderStatus]) -> Self {
        let active_rental_count = statuses
            .iter()
            .filter(|status| status.counts_toward_rental_limit())
            .count() as u32;
        Account {
            kyc_approved,
            active_rental_count,
        }
    }
}

/// A brand-new session is an unverified guest: rentals are denied with
/// `KYC_NOT_APPROVED` until the auth layer delivers a verified snapshot,
/// which is exactly the redirect-to-verification flow the UI shows guests.
impl Default for Account {
    fn default() -> Self {
        Account {
            kyc_approved: false,
            active_rental_count: 0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
