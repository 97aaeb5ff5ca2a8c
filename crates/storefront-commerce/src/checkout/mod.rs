//! Checkout module.
//!
//! Contains shipping and payment details, the order validator, and order receipts.

mod order;
mod payment;
mod shipping;
mod validate;

pub(crate) use order::current_timestamp;
pub use order::{Order, OrderLine};
pub use payment::{CardDetails, PaymentDetails, PaymentMethod};
pub use shipping::ShippingDetails;
pub use validate::{
    validate_order, OrderAccepted, MIN_CARD_NUMBER_LEN, MIN_CVV_LEN, MIN_UPI_ID_LEN,
};
