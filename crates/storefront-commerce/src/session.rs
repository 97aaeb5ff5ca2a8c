//! Shopping session context.
//!
//! A [`StoreSession`] is the one owner of a shopper's cart. Views receive it
//! explicitly instead of reaching for shared global state, and the cart lives
//! exactly as long as the session does.

use crate::cart::{Cart, CartLine, LineOptions};
use crate::catalog::CatalogItem;
use crate::checkout::{
    current_timestamp, validate_order, Order, OrderAccepted, PaymentDetails, ShippingDetails,
};
use crate::error::CheckoutError;
use crate::ids::{ItemId, SessionId};
use crate::money::Currency;
use tracing::{info, warn};

/// In-memory state for a single shopper.
#[derive(Debug, Clone)]
pub struct StoreSession {
    id: SessionId,
    cart: Cart,
    currency: Currency,
    created_at: i64,
}

impl Default for StoreSession {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreSession {
    /// Start a session with an empty cart.
    pub fn new() -> Self {
        let id = SessionId::generate();
        info!(session_id = %id, "session started");
        Self {
            id,
            cart: Cart::new(),
            currency: Currency::default(),
            created_at: current_timestamp(),
        }
    }

    /// Set the currency display prices are formatted in.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn add_to_cart(&mut self, item: &CatalogItem, options: LineOptions) {
        self.cart.add(item, options);
    }

    pub fn update_qty(&mut self, id: ItemId, qty: i64) {
        self.cart.update_qty(id, qty);
    }

    pub fn remove_from_cart(&mut self, id: ItemId) {
        self.cart.remove(id);
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    /// Format a display price in the session currency.
    pub fn format_price(&self, amount: f64) -> String {
        self.currency.format(amount)
    }

    /// Validate a proposed order against the current cart without placing it.
    pub fn validate_order(
        &self,
        shipping: &ShippingDetails,
        payment: &PaymentDetails,
    ) -> Result<OrderAccepted, CheckoutError> {
        validate_order(&self.cart, shipping, payment)
    }

    /// Validate and place an order.
    ///
    /// On success the cart is snapshotted into the returned receipt and then
    /// emptied. On failure the cart is left untouched.
    pub fn place_order(
        &mut self,
        shipping: ShippingDetails,
        payment: &PaymentDetails,
    ) -> Result<Order, CheckoutError> {
        let accepted = match validate_order(&self.cart, &shipping, payment) {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(session_id = %self.id, reason = %e, "order rejected");
                return Err(e);
            }
        };

        let order = Order::from_cart(self.id.clone(), &self.cart, shipping, accepted);
        self.cart.clear();

        info!(
            session_id = %self.id,
            order_id = %order.id,
            method = %order.payment_method,
            total = order.total,
            "order placed"
        );
        Ok(order)
    }
}
