//! Confirmation dialog for destructive operations
//!
//! Used before anything the user cannot take back: removing cart lines,
//! clearing the cart, placing or cancelling an order, signing out.

use crate::types::OrderId;

/// The operation a confirmation guards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    RemoveCartItem(u32),
    ClearCart,
    PlaceOrder,
    CancelOrder(OrderId),
    SignOut,
}

/// Confirmation dialog state
#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: Vec<String>,
    pub confirm_action: ConfirmAction,
    /// 0 = No (left), 1 = Yes (right)
    pub selected: usize,
    /// Destructive confirmations get the danger styling
    pub danger: bool,
}

impl ConfirmDialogState {
    pub fn new(
        title: impl Into<String>,
        message: Vec<String>,
        confirm_action: ConfirmAction,
        danger: bool,
    ) -> Self {
        Self {
            title: title.into(),
            message,
            confirm_action,
            // Default to No so a stray Enter never destroys anything
            selected: 0,
            danger,
        }
    }

    /// Toggle between No and Yes
    pub fn toggle(&mut self) {
        self.selected = if self.selected == 0 { 1 } else { 0 };
    }

    /// Whether Yes is selected
    pub fn is_confirmed(&self) -> bool {
        self.selected == 1
    }
}

/// Confirmation for removing one cart line
pub fn remove_item_confirm(product_id: u32, name: &str) -> ConfirmDialogState {
    ConfirmDialogState::new(
        "Remove Item",
        vec![
            format!("Remove \"{name}\" from your cart?"),
            String::new(),
            "The line and its quantity will be discarded.".to_string(),
        ],
        ConfirmAction::RemoveCartItem(product_id),
        true,
    )
}

/// Confirmation for emptying the cart
pub fn clear_cart_confirm(line_count: usize) -> ConfirmDialogState {
    ConfirmDialogState::new(
        "Clear Cart",
        vec![
            format!("Remove all {line_count} lines from your cart?"),
            String::new(),
            "This cannot be undone.".to_string(),
        ],
        ConfirmAction::ClearCart,
        true,
    )
}

/// Confirmation for placing the order
pub fn place_order_confirm(total: &str, address: &str) -> ConfirmDialogState {
    ConfirmDialogState::new(
        "Place Order",
        vec![
            format!("Charge {total} and ship to:"),
            address.to_string(),
            String::new(),
            "Place this order?".to_string(),
        ],
        ConfirmAction::PlaceOrder,
        false,
    )
}

/// Confirmation for cancelling an order
pub fn cancel_order_confirm(id: OrderId) -> ConfirmDialogState {
    ConfirmDialogState::new(
        "Cancel Order",
        vec![
            format!("Cancel order #{}?", id.short()),
            String::new(),
            "A cancelled order cannot be reinstated.".to_string(),
        ],
        ConfirmAction::CancelOrder(id),
        true,
    )
}

/// Confirmation for signing out
pub fn sign_out_confirm(username: &str) -> ConfirmDialogState {
    ConfirmDialogState::new(
        "Sign Out",
        vec![format!("Sign out of account \"{username}\"?")],
        ConfirmAction::SignOut,
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no() {
        let dialog = clear_cart_confirm(3);
        assert!(!dialog.is_confirmed());
    }

    #[test]
    fn test_toggle() {
        let mut dialog = sign_out_confirm("ada");
        dialog.toggle();
        assert!(dialog.is_confirmed());
        dialog.toggle();
        assert!(!dialog.is_confirmed());
    }

    #[test]
    fn test_actions_carry_targets() {
        let dialog = remove_item_confirm(1001, "Merino Crewneck Sweater");
        assert_eq!(dialog.confirm_action, ConfirmAction::RemoveCartItem(1001));
        assert!(dialog.danger);
    }
}
