//! Integration tests for the state container
//!
//! Drives full shopping flows through dispatched actions and checks the
//! selectors screens rely on.

use chrono::Utc;

use shoptui::store::{
    Action, CartAction, CatalogAction, Order, OrdersAction, SessionAction, Store,
};
use shoptui::types::{Address, Category, Money, OrderId, OrderStatus, UserProfile};
use shoptui::Catalog;

fn store_with_catalog() -> Store {
    let mut store = Store::new();
    store.dispatch(Action::Catalog(CatalogAction::Loaded(
        Catalog::demo().products,
    )));
    store
}

fn add_to_cart(store: &mut Store, product_id: u32) {
    let product = store
        .product_by_id(product_id)
        .expect("product exists")
        .clone();
    store.dispatch(Action::Cart(CartAction::Add {
        product_id: product.id,
        name: product.name,
        unit_price: product.price,
    }));
}

fn signed_in_profile() -> UserProfile {
    UserProfile {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        full_name: "Ada Lovelace".to_string(),
        address: Some(Address {
            line1: "1 Market St".to_string(),
            city: "Springfield".to_string(),
            postal_code: "94103".to_string(),
            country: "US".to_string(),
        }),
    }
}

// =============================================================================
// Browse flow
// =============================================================================

#[test]
fn test_category_and_search_filters_compose() {
    let mut store = store_with_catalog();

    store.dispatch(Action::Catalog(CatalogAction::SetCategory(Some(
        Category::Electronics,
    ))));
    store.dispatch(Action::Catalog(CatalogAction::SetSearch(
        "keyboard".to_string(),
    )));

    let hits = store.visible_products();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].category, Category::Electronics);

    // Clearing the search keeps the category filter
    store.dispatch(Action::Catalog(CatalogAction::ClearSearch));
    let electronics = store.visible_products();
    assert!(electronics.len() > 1);
    assert!(
        electronics
            .iter()
            .all(|p| p.category == Category::Electronics)
    );
}

#[test]
fn test_search_matches_descriptions_too() {
    let mut store = store_with_catalog();
    store.dispatch(Action::Catalog(CatalogAction::SetSearch(
        "noise cancellation".to_string(),
    )));
    assert_eq!(store.visible_products().len(), 1);
}

// =============================================================================
// Cart flow
// =============================================================================

#[test]
fn test_cart_flow_totals() {
    let mut store = store_with_catalog();
    add_to_cart(&mut store, 1001);
    add_to_cart(&mut store, 1001);
    add_to_cart(&mut store, 2001);

    assert_eq!(store.cart_line_count(), 2);
    assert_eq!(store.cart_unit_count(), 3);

    let sweater = store.product_by_id(1001).expect("product").price;
    let sneakers = store.product_by_id(2001).expect("product").price;
    assert_eq!(store.cart_subtotal(), sweater.times(2) + sneakers);

    store.dispatch(Action::Cart(CartAction::SetQuantity {
        product_id: 1001,
        quantity: 5,
    }));
    assert_eq!(store.cart_unit_count(), 6);

    store.dispatch(Action::Cart(CartAction::Remove { product_id: 2001 }));
    assert_eq!(store.cart_line_count(), 1);
    assert_eq!(store.cart_subtotal(), sweater.times(5));
}

// =============================================================================
// Checkout and orders flow
// =============================================================================

#[test]
fn test_place_order_flow() {
    let mut store = store_with_catalog();
    store.dispatch(Action::Session(SessionAction::SignIn(signed_in_profile())));
    add_to_cart(&mut store, 3001);
    add_to_cart(&mut store, 6002);

    let total = store.cart_subtotal();
    let address = store
        .state()
        .session
        .user
        .as_ref()
        .and_then(|u| u.address.clone())
        .expect("address on file");

    let order = Order {
        id: OrderId::new(),
        items: store.state().cart.items.clone(),
        total,
        status: OrderStatus::Pending,
        shipping_address: address,
        placed_at: Utc::now(),
    };
    let order_id = order.id;

    store.dispatch(Action::Orders(OrdersAction::Place(order)));
    store.dispatch(Action::Cart(CartAction::Clear));

    assert!(store.state().cart.is_empty());
    let placed = store.order_by_id(order_id).expect("order recorded");
    assert_eq!(placed.total, total);
    assert_eq!(placed.status, OrderStatus::Pending);
    assert_eq!(placed.unit_count(), 2);

    // Backend confirmation then a later shipment
    store.dispatch(Action::Orders(OrdersAction::SetStatus(
        order_id,
        OrderStatus::Confirmed,
    )));
    store.dispatch(Action::Orders(OrdersAction::SetStatus(
        order_id,
        OrderStatus::Shipped,
    )));
    let shipped = store.order_by_id(order_id).expect("order");
    assert_eq!(shipped.status, OrderStatus::Shipped);

    // Too late to cancel
    store.dispatch(Action::Orders(OrdersAction::Cancel(order_id)));
    assert_eq!(
        store.order_by_id(order_id).expect("order").status,
        OrderStatus::Shipped
    );
}

#[test]
fn test_cancel_pending_order() {
    let mut store = store_with_catalog();
    let order = Order {
        id: OrderId::new(),
        items: Vec::new(),
        total: Money::from_cents(4200),
        status: OrderStatus::Pending,
        shipping_address: Address::default(),
        placed_at: Utc::now(),
    };
    let id = order.id;
    store.dispatch(Action::Orders(OrdersAction::Place(order)));
    store.dispatch(Action::Orders(OrdersAction::Cancel(id)));
    assert_eq!(
        store.order_by_id(id).expect("order").status,
        OrderStatus::Cancelled
    );
}

// =============================================================================
// Session flow
// =============================================================================

#[test]
fn test_session_profile_edits() {
    let mut store = Store::new();
    assert!(!store.is_signed_in());

    store.dispatch(Action::Session(SessionAction::SignIn(signed_in_profile())));
    assert!(store.is_signed_in());

    store.dispatch(Action::Session(SessionAction::UpdateEmail(
        "ada@shoptui.example".to_string(),
    )));
    assert_eq!(
        store
            .state()
            .session
            .user
            .as_ref()
            .map(|u| u.email.as_str()),
        Some("ada@shoptui.example")
    );

    store.dispatch(Action::Session(SessionAction::SignOut));
    assert!(!store.is_signed_in());
}

#[test]
fn test_sign_out_keeps_cart_and_orders() {
    // Slices are independent: ending the session must not touch the
    // other slices
    let mut store = store_with_catalog();
    store.dispatch(Action::Session(SessionAction::SignIn(signed_in_profile())));
    add_to_cart(&mut store, 5001);

    store.dispatch(Action::Session(SessionAction::SignOut));
    assert_eq!(store.cart_line_count(), 1);
    assert!(!store.state().catalog.products.is_empty());
}
