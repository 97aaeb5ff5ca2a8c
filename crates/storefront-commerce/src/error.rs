//! Checkout error types.

use serde::Serialize;
use thiserror::Error;

/// Reasons an order is rejected at checkout.
///
/// Only the first failing rule is ever reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutError {
    /// Name, email or address is empty.
    #[error("incomplete shipping details")]
    IncompleteShipping,

    /// Email has no "@".
    #[error("invalid email")]
    InvalidEmail,

    /// Nothing in the cart.
    #[error("empty cart")]
    EmptyCart,

    /// UPI id shorter than the minimum length.
    #[error("invalid UPI id")]
    InvalidUpiId,

    /// Card number, expiry or CVV fails the shape checks.
    #[error("invalid card details")]
    InvalidCardDetails,
}

/// Unrecognised payment method name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown payment method: {0} (expected cod, upi or card)")]
pub struct UnknownPaymentMethod(pub String);
