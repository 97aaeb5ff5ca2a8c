//! Cart state and pricing engine for the storefront.
//!
//! This crate provides:
//!
//! - **Pricing**: the category markup deriving display prices from raw catalog prices
//! - **Cart**: one line per catalog item, merge-by-id adds, quantity edits, totals
//! - **Checkout**: short-circuit order validation and order receipts
//! - **Session**: the explicitly owned context holding a shopper's cart
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut session = StoreSession::new();
//! let tee = CatalogItem::new(1, "Slim Fit Tee", "men's clothing", 50.0);
//!
//! session.add_to_cart(&tee, LineOptions::sized("M"));
//! session.add_to_cart(&tee, LineOptions::default());
//! assert_eq!(session.total(), 500.0);
//!
//! let order = session
//!     .place_order(
//!         ShippingDetails::new("Asha", "asha@example.com", "12 MG Road"),
//!         &PaymentDetails::cash_on_delivery(),
//!     )
//!     .unwrap();
//! assert_eq!(order.message, "order placed, pay on delivery");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod session;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CheckoutError;
pub use ids::*;
pub use money::Currency;
pub use session::StoreSession;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CheckoutError, UnknownPaymentMethod};
    pub use crate::ids::*;
    pub use crate::money::Currency;
    pub use crate::session::StoreSession;

    // Catalog
    pub use crate::catalog::{is_clothing, CatalogItem, Rating, DEFAULT_SIZE, SIZE_OPTIONS};

    // Cart
    pub use crate::cart::{
        compute_price, Cart, CartLine, CategoryMarkup, LineOptions, Priceable, PricingRule,
    };

    // Checkout
    pub use crate::checkout::{
        validate_order, CardDetails, Order, OrderAccepted, OrderLine, PaymentDetails,
        PaymentMethod, ShippingDetails,
    };
}
