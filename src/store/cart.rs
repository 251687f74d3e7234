//! Cart slice
//!
//! Line items keyed by product id. Adding an existing product merges into
//! its line; a quantity reaching zero removes the line.

use serde::{Deserialize, Serialize};

use crate::types::Money;

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: u32,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartItem {
    /// Line total (unit price times quantity)
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Cart slice state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

/// Cart slice actions
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add one unit of a product, merging with an existing line
    Add {
        product_id: u32,
        name: String,
        unit_price: Money,
    },
    /// Remove a line entirely
    Remove { product_id: u32 },
    /// Set a line's quantity; zero removes the line
    SetQuantity { product_id: u32, quantity: u32 },
    /// Add one unit to an existing line
    Increment { product_id: u32 },
    /// Remove one unit; the last unit removes the line
    Decrement { product_id: u32 },
    /// Empty the cart
    Clear,
}

impl CartState {
    pub fn reduce(&mut self, action: CartAction) {
        match action {
            CartAction::Add {
                product_id,
                name,
                unit_price,
            } => {
                if let Some(item) = self.item_mut(product_id) {
                    item.quantity = item.quantity.saturating_add(1);
                } else {
                    self.items.push(CartItem {
                        product_id,
                        name,
                        unit_price,
                        quantity: 1,
                    });
                }
            }
            CartAction::Remove { product_id } => {
                self.items.retain(|i| i.product_id != product_id);
            }
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => {
                if quantity == 0 {
                    self.items.retain(|i| i.product_id != product_id);
                } else if let Some(item) = self.item_mut(product_id) {
                    item.quantity = quantity;
                }
            }
            CartAction::Increment { product_id } => {
                if let Some(item) = self.item_mut(product_id) {
                    item.quantity = item.quantity.saturating_add(1);
                }
            }
            CartAction::Decrement { product_id } => {
                if let Some(item) = self.item_mut(product_id) {
                    if item.quantity <= 1 {
                        self.items.retain(|i| i.product_id != product_id);
                    } else {
                        item.quantity -= 1;
                    }
                }
            }
            CartAction::Clear => self.items.clear(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line totals
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    fn item_mut(&mut self, product_id: u32) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| i.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(cart: &mut CartState, id: u32, cents: i64) {
        cart.reduce(CartAction::Add {
            product_id: id,
            name: format!("product-{id}"),
            unit_price: Money::from_cents(cents),
        });
    }

    #[test]
    fn test_add_merges_existing_line() {
        let mut cart = CartState::default();
        add(&mut cart, 1, 500);
        add(&mut cart, 1, 500);
        add(&mut cart, 2, 300);

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.unit_count(), 3);
        assert_eq!(cart.subtotal(), Money::from_cents(1300));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = CartState::default();
        add(&mut cart, 1, 500);
        cart.reduce(CartAction::SetQuantity {
            product_id: 1,
            quantity: 0,
        });
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_last_unit_removes_line() {
        let mut cart = CartState::default();
        add(&mut cart, 1, 500);
        add(&mut cart, 1, 500);
        cart.reduce(CartAction::Decrement { product_id: 1 });
        assert_eq!(cart.unit_count(), 1);
        cart.reduce(CartAction::Decrement { product_id: 1 });
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_unknown_product_is_noop() {
        let mut cart = CartState::default();
        cart.reduce(CartAction::Increment { product_id: 99 });
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = CartState::default();
        add(&mut cart, 1, 500);
        add(&mut cart, 2, 300);
        cart.reduce(CartAction::Clear);
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }
}
