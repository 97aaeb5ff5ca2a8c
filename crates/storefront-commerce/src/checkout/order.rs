//! Order receipts.

use crate::cart::Cart;
use crate::checkout::{OrderAccepted, PaymentMethod, ShippingDetails};
use crate::ids::{ItemId, OrderId, SessionId};
use serde::{Deserialize, Serialize};

/// A placed order, snapshotting the cart at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Session the order was placed from.
    pub session_id: SessionId,
    /// Items in the order, in cart order.
    pub lines: Vec<OrderLine>,
    /// Sum of line totals in display prices.
    pub total: f64,
    pub payment_method: PaymentMethod,
    pub shipping: ShippingDetails,
    /// Confirmation shown to the customer.
    pub message: String,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl Order {
    pub(crate) fn from_cart(
        session_id: SessionId,
        cart: &Cart,
        shipping: ShippingDetails,
        accepted: OrderAccepted,
    ) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| OrderLine {
                item_id: line.id,
                title: line.title.clone(),
                size: line.size.clone(),
                quantity: line.qty,
                unit_price: line.unit_price(),
                line_total: line.total(),
            })
            .collect();

        Self {
            id: OrderId::generate(),
            session_id,
            lines,
            total: cart.total(),
            payment_method: accepted.method,
            shipping,
            message: accepted.message().to_string(),
            placed_at: current_timestamp(),
        }
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().fold(0i64, |n, l| n.saturating_add(l.quantity))
    }

    /// Check if the order was paid up front.
    pub fn is_prepaid(&self) -> bool {
        self.payment_method.is_prepaid()
    }
}

/// A line item in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub item_id: ItemId,
    /// Title at time of order.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub quantity: i64,
    /// Display price per unit at time of order.
    pub unit_price: f64,
    pub line_total: f64,
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
