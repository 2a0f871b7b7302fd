//! End-to-end storefront flows against the public session API, driven
//! with the same JSON documents the catalog feed delivers.

use serde_json::json;
use voltkart_core::{
    Account, CartMode, DenialReason, FacetSelection, OrderStatus, Product, RentalDecision, SortKey,
};
use voltkart_session::{AddToCartRequest, ErrorCode, StorefrontSession};

/// Feed payload covering both modes, legacy labels, and an off-list brand.
fn feed() -> Vec<Product> {
    serde_json::from_value(json!([
        {
            "id": "2081",
            "name": "MacBook Pro 14",
            "subtitle": "M3 Pro, 18GB unified memory",
            "brand": "Apple",
            "category": "Laptops",
            "condition": "New",
            "mode": "rent_and_buy",
            "status": "AVAILABLE",
            "priceCents": 199_900,
            "ratingTenths": 48,
            "rentalOptions": [
                { "months": 1, "priceCents": 14_999, "label": "1 Month" },
                { "months": 3, "priceCents": 12_999, "label": "3 Months" }
            ]
        },
        {
            "id": "1490",
            "name": "Galaxy S24",
            "brand": "Samsung",
            "category": "Smartphones",
            "condition": "Open Box",
            "mode": "rent",
            "status": "LOW STOCK",
            "priceCents": 69_900,
            "ratingTenths": 44,
            "rentalOptions": [
                { "months": 3, "priceCents": 4999, "label": "3 Months" }
            ]
        },
        {
            "id": "3305",
            "name": "ThinkPad X1 Carbon",
            "brand": "Lenovo",
            "category": "Laptops",
            "condition": "Refurbished",
            "mode": "buy",
            "status": "AVAILABLE",
            "priceCents": 109_900,
            "ratingTenths": 46
        },
        {
            "id": "0042",
            "name": "Redmi Note 13",
            "brand": "Xiaomi",
            "category": "Smartphones",
            "condition": "New",
            "mode": "buy",
            "status": "OUT_OF_STOCK",
            "priceCents": 24_900,
            "ratingTenths": 41
        }
    ]))
    .expect("feed fixture deserializes")
}

fn seeded_session() -> StorefrontSession {
    let session = StorefrontSession::new();
    session.refresh_catalog(feed()).expect("feed is valid");
    session
}

fn rent_request(product_id: &str, months: u32) -> AddToCartRequest {
    serde_json::from_value(json!({
        "productId": product_id,
        "mode": "rent",
        "tenureMonths": months
    }))
    .expect("request fixture deserializes")
}

fn buy_request(product_id: &str) -> AddToCartRequest {
    serde_json::from_value(json!({ "productId": product_id, "mode": "buy" }))
        .expect("request fixture deserializes")
}

#[test]
fn full_shopper_journey_from_guest_to_checkout_ready_cart() {
    let session = seeded_session();

    // Guest lands on the grid: popularity order, nothing favorited.
    let grid = session
        .browse(&FacetSelection::default(), SortKey::Popularity)
        .unwrap();
    let ids: Vec<&str> = grid.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["2081", "3305", "1490", "0042"]);
    assert!(grid.iter().all(|p| !p.favorited));

    // Detail page asks about renting: denied as a value, not an error.
    let decision = session.check_rental_eligibility("2081", 3).unwrap();
    assert!(matches!(
        decision,
        RentalDecision::Deny {
            reason: DenialReason::KycNotApproved
        }
    ));

    // Guest still tries the rent button: targeted error, cart untouched.
    let err = session.add_to_cart(&rent_request("2081", 3)).unwrap_err();
    assert!(matches!(err.code, ErrorCode::KycNotApproved));
    assert!(session.cart().items.is_empty());

    // Identity verified upstream; the session receives a fresh snapshot.
    session.refresh_account(Account {
        kyc_approved: true,
        active_rental_count: 1,
    });
    let decision = session.check_rental_eligibility("2081", 3).unwrap();
    assert_eq!(
        serde_json::to_value(decision).unwrap(),
        json!({ "decision": "ALLOW", "price": 12_999 })
    );

    // Rent the MacBook, buy the ThinkPad.
    session.add_to_cart(&rent_request("2081", 3)).unwrap();
    let cart = session.add_to_cart(&buy_request("3305")).unwrap();
    assert_eq!(cart.items.len(), 2);
    assert_eq!(cart.totals.total_cents, 12_999 + 109_900);

    // Re-adding the rental with a different tenure updates the line.
    let cart = session.add_to_cart(&rent_request("2081", 1)).unwrap();
    assert_eq!(cart.items.len(), 2);
    let rental = cart
        .items
        .iter()
        .find(|line| line.mode == CartMode::Rent)
        .unwrap();
    assert_eq!(rental.tenure_months, Some(1));
    assert_eq!(rental.unit_price_cents, 14_999);

    // Quantity bump on the buy line; totals recompute.
    let cart = session
        .update_cart_quantity("3305", CartMode::Buy, 2)
        .unwrap();
    assert_eq!(cart.totals.total_cents, 14_999 + 2 * 109_900);
    assert_eq!(cart.display_total, "$2347.99");

    // Clear for checkout handoff; wishlist would survive (none set here).
    let cart = session.clear_cart();
    assert!(cart.items.is_empty());
    assert_eq!(cart.totals.total_cents, 0);
}

#[test]
fn facet_pipeline_composes_with_ranking() {
    let session = seeded_session();

    // Rentable laptops, cheapest first: only the MacBook qualifies.
    let selection: FacetSelection = serde_json::from_value(json!({
        "query": "laptop",
        "type": "rent"
    }))
    .unwrap();
    let results = session.browse(&selection, SortKey::PriceLow).unwrap();
    let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["2081"]);

    // The rent axis alone picks up rent-only and rent-and-buy listings.
    let selection: FacetSelection = serde_json::from_value(json!({ "type": "rent" })).unwrap();
    let results = session.browse(&selection, SortKey::PriceLow).unwrap();
    let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1490", "2081"]);
}

#[test]
fn favorites_only_ignores_every_other_facet() {
    let session = seeded_session();
    session.toggle_wishlist("0042").unwrap();
    session.toggle_wishlist("2081").unwrap();

    // Hostile selection that matches nothing: favorites still win.
    let selection: FacetSelection = serde_json::from_value(json!({
        "favoritesOnly": true,
        "query": "no such product",
        "type": "rent",
        "brands": ["Sony"]
    }))
    .unwrap();
    let results = session.browse(&selection, SortKey::Popularity).unwrap();
    let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();

    assert_eq!(ids, vec!["2081", "0042"]);
    assert!(results.iter().all(|p| p.favorited));
}

#[test]
fn off_list_brand_folds_to_other_but_stays_searchable() {
    let session = seeded_session();

    // "Xiaomi" is not in the sidebar brand set; the listing still
    // surfaces through query search by name.
    let selection: FacetSelection =
        serde_json::from_value(json!({ "query": "redmi" })).unwrap();
    let results = session.browse(&selection, SortKey::Popularity).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "0042");
    assert_eq!(results[0].brand, "Other");
}

#[test]
fn catalog_refresh_is_all_or_nothing_and_cart_prices_freeze() {
    let session = seeded_session();
    session.refresh_account(Account {
        kyc_approved: true,
        active_rental_count: 0,
    });
    session.add_to_cart(&buy_request("3305")).unwrap();

    // A later feed reprices the ThinkPad; the cart line keeps the price
    // it was added at.
    let mut repriced = feed();
    repriced
        .iter_mut()
        .find(|p| p.id == "3305")
        .unwrap()
        .price_cents = 99_900;
    session.refresh_catalog(repriced).unwrap();

    assert_eq!(session.cart().items[0].unit_price_cents, 109_900);
    assert_eq!(session.product_detail("3305").unwrap().price_cents, 99_900);

    // A corrupt feed is rejected wholesale; the good snapshot survives.
    let mut corrupt = feed();
    corrupt[0].price_cents = -1;
    assert!(session.refresh_catalog(corrupt).is_err());
    assert_eq!(session.product_detail("3305").unwrap().price_cents, 99_900);
}

#[test]
fn rental_slots_counted_from_order_history_labels() {
    let session = seeded_session();

    // Order history arrives with the legacy status labels.
    let statuses: Vec<OrderStatus> = serde_json::from_value(json!([
        "Active Rental",
        "In Use",
        "Awaiting Delivery",
        "Returned",
        "Cancelled"
    ]))
    .unwrap();
    session.refresh_account(Account::from_order_statuses(true, &statuses));

    // Three orders occupy slots, so the cap is already reached.
    let decision = session.check_rental_eligibility("1490", 3).unwrap();
    assert!(matches!(
        decision,
        RentalDecision::Deny {
            reason: DenialReason::MaxRentalsReached
        }
    ));

    // One rental returned upstream frees a slot.
    session.refresh_account(Account {
        kyc_approved: true,
        active_rental_count: 2,
    });
    let decision = session.check_rental_eligibility("1490", 3).unwrap();
    assert!(decision.is_allowed());
}

#[test]
fn low_stock_sells_but_out_of_stock_does_not() {
    let session = seeded_session();
    session.refresh_account(Account {
        kyc_approved: true,
        active_rental_count: 0,
    });

    // LOW STOCK still rents.
    let cart = session.add_to_cart(&rent_request("1490", 3)).unwrap();
    assert_eq!(cart.items.len(), 1);

    // OUT_OF_STOCK blocks the add with a targeted code.
    let err = session.add_to_cart(&buy_request("0042")).unwrap_err();
    assert!(matches!(err.code, ErrorCode::ProductUnavailable));
    assert!(err.message.contains("OUT_OF_STOCK"));
}
