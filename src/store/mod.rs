//! Application state container
//!
//! A single store owns all client-side state, split into typed slices
//! (catalog, cart, session, orders). State changes only through dispatched
//! actions; each slice reduces its own actions and knows nothing about the
//! others. Reads go through typed selectors so screens never reach into
//! slice internals.
//!
//! Reducers are pure: timestamps and generated ids arrive in action
//! payloads, which keeps every transition deterministic under test.

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod session;

pub use cart::{CartAction, CartItem, CartState};
pub use catalog::{CatalogAction, CatalogState};
pub use orders::{Order, OrdersAction, OrdersState};
pub use session::{SessionAction, SessionState};

use tracing::debug;

use crate::types::{Money, OrderId, Product};

/// All client-side state
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub session: SessionState,
    pub orders: OrdersState,
}

/// A dispatched state update
#[derive(Debug, Clone)]
pub enum Action {
    Catalog(CatalogAction),
    Cart(CartAction),
    Session(SessionAction),
    Orders(OrdersAction),
}

/// The state container passed by reference to every screen
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: StoreState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)] // API: used by tests to seed known state
    pub fn with_state(state: StoreState) -> Self {
        Self { state }
    }

    /// Read-only view of the full state
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Apply an action to the owning slice
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "store dispatch");
        match action {
            Action::Catalog(action) => self.state.catalog.reduce(action),
            Action::Cart(action) => self.state.cart.reduce(action),
            Action::Session(action) => self.state.session.reduce(action),
            Action::Orders(action) => self.state.orders.reduce(action),
        }
    }

    // -------------------------------------------------------------------------
    // Typed selectors
    // -------------------------------------------------------------------------

    /// Products visible under the active category filter and search query
    pub fn visible_products(&self) -> Vec<&Product> {
        let catalog = &self.state.catalog;
        let query = catalog.search_query.trim().to_lowercase();
        catalog
            .products
            .iter()
            .filter(|p| {
                catalog
                    .category_filter
                    .is_none_or(|c| p.category == c)
            })
            .filter(|p| {
                query.is_empty()
                    || p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Look up a product by id
    pub fn product_by_id(&self, id: u32) -> Option<&Product> {
        self.state.catalog.products.iter().find(|p| p.id == id)
    }

    /// Number of cart lines
    pub fn cart_line_count(&self) -> usize {
        self.state.cart.items.len()
    }

    /// Total units across all cart lines
    pub fn cart_unit_count(&self) -> u32 {
        self.state.cart.unit_count()
    }

    /// Cart subtotal
    pub fn cart_subtotal(&self) -> Money {
        self.state.cart.subtotal()
    }

    /// Look up an order by id
    pub fn order_by_id(&self, id: OrderId) -> Option<&Order> {
        self.state.orders.orders.iter().find(|o| o.id == id)
    }

    /// Whether a user is signed in
    pub fn is_signed_in(&self) -> bool {
        self.state.session.user.is_some()
    }
}
