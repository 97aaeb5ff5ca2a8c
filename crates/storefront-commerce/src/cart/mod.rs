//! Shopping cart module.
//!
//! Contains the cart store, its lines, and the pricing rule the cart totals with.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine, LineOptions};
pub use pricing::{compute_price, CategoryMarkup, Priceable, PricingRule};
