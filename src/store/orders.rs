//! Orders slice
//!
//! Order history. Ids and timestamps are created by the caller and carried
//! in the action payload so the reducer stays deterministic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use crate::types::{Address, Money, OrderId, OrderStatus};

/// A placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartItem>,
    pub total: Money,
    pub status: OrderStatus,
    pub shipping_address: Address,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Total units across all lines
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Orders slice state, newest first
#[derive(Debug, Clone, Default)]
pub struct OrdersState {
    pub orders: Vec<Order>,
}

/// Orders slice actions
#[derive(Debug, Clone)]
pub enum OrdersAction {
    /// Record a newly placed order
    Place(Order),
    /// Cancel an order; only pending/confirmed orders can be cancelled
    Cancel(OrderId),
    /// Status update from the backend
    SetStatus(OrderId, OrderStatus),
}

impl OrdersState {
    pub fn reduce(&mut self, action: OrdersAction) {
        match action {
            OrdersAction::Place(order) => {
                self.orders.insert(0, order);
            }
            OrdersAction::Cancel(id) => {
                if let Some(order) = self.order_mut(id) {
                    if order.status.is_cancellable() {
                        order.status = OrderStatus::Cancelled;
                    }
                }
            }
            OrdersAction::SetStatus(id, status) => {
                if let Some(order) = self.order_mut(id) {
                    order.status = status;
                }
            }
        }
    }

    fn order_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id == id)
    }
}
