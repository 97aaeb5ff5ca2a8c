//! Order validation run before an order is placed.

use crate::cart::Cart;
use crate::checkout::{PaymentDetails, PaymentMethod, ShippingDetails};
use crate::error::CheckoutError;
use serde::Serialize;

/// Shortest accepted UPI id.
pub const MIN_UPI_ID_LEN: usize = 5;
/// Shortest accepted card number.
pub const MIN_CARD_NUMBER_LEN: usize = 12;
/// Shortest accepted CVV.
pub const MIN_CVV_LEN: usize = 3;

/// A validated order, ready to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderAccepted {
    pub method: PaymentMethod,
}

impl OrderAccepted {
    /// Confirmation shown to the customer.
    pub fn message(&self) -> &'static str {
        if self.method.is_prepaid() {
            "payment successful, order placed"
        } else {
            "order placed, pay on delivery"
        }
    }
}

/// Check a proposed order against the current cart.
///
/// Rules run in a fixed order and the first failure is returned:
/// shipping completeness, email shape, non-empty cart, then the fields of the
/// selected payment method. Nothing is sent or stored.
pub fn validate_order(
    cart: &Cart,
    shipping: &ShippingDetails,
    payment: &PaymentDetails,
) -> Result<OrderAccepted, CheckoutError> {
    if !shipping.is_complete() {
        return Err(CheckoutError::IncompleteShipping);
    }
    if !shipping.email.contains('@') {
        return Err(CheckoutError::InvalidEmail);
    }
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    match payment.method {
        PaymentMethod::Upi => {
            let len = payment.upi.as_deref().map_or(0, char_len);
            if len < MIN_UPI_ID_LEN {
                return Err(CheckoutError::InvalidUpiId);
            }
        }
        PaymentMethod::Card => {
            let valid = payment.card.as_ref().is_some_and(|card| {
                char_len(&card.number) >= MIN_CARD_NUMBER_LEN
                    && !card.expiry.is_empty()
                    && char_len(&card.cvv) >= MIN_CVV_LEN
            });
            if !valid {
                return Err(CheckoutError::InvalidCardDetails);
            }
        }
        PaymentMethod::Cod => {}
    }

    Ok(OrderAccepted {
        method: payment.method,
    })
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineOptions;
    use crate::catalog::CatalogItem;
    use crate::checkout::CardDetails;

    fn filled_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(
            &CatalogItem::new(1, "Backpack", "men's clothing", 109.95),
            LineOptions::sized("M"),
        );
        cart
    }

    fn shipping() -> ShippingDetails {
        ShippingDetails::new("A", "a@b.com", "X")
    }

    fn card() -> CardDetails {
        CardDetails::new("4111111111111111", "12/29", "123")
    }

    #[test]
    fn test_cod_accepted() {
        let accepted =
            validate_order(&filled_cart(), &shipping(), &PaymentDetails::cash_on_delivery())
                .unwrap();
        assert_eq!(accepted.method, PaymentMethod::Cod);
        assert_eq!(accepted.message(), "order placed, pay on delivery");
    }

    #[test]
    fn test_prepaid_accepted() {
        let upi = validate_order(&filled_cart(), &shipping(), &PaymentDetails::upi("user@okbank"))
            .unwrap();
        assert_eq!(upi.message(), "payment successful, order placed");

        let card = validate_order(&filled_cart(), &shipping(), &PaymentDetails::card(card()))
            .unwrap();
        assert_eq!(card.method, PaymentMethod::Card);
        assert_eq!(card.message(), "payment successful, order placed");
    }

    #[test]
    fn test_incomplete_shipping() {
        let cod = PaymentDetails::cash_on_delivery();
        for shipping in [
            ShippingDetails::new("", "a@b.com", "X"),
            ShippingDetails::new("A", "", "X"),
            ShippingDetails::new("A", "a@b.com", ""),
        ] {
            assert_eq!(
                validate_order(&filled_cart(), &shipping, &cod),
                Err(CheckoutError::IncompleteShipping)
            );
        }
    }

    #[test]
    fn test_incomplete_shipping_reported_before_empty_cart() {
        let result = validate_order(
            &Cart::new(),
            &ShippingDetails::new("", "a@b.com", "X"),
            &PaymentDetails::cash_on_delivery(),
        );
        assert_eq!(result, Err(CheckoutError::IncompleteShipping));
    }

    #[test]
    fn test_invalid_email() {
        let result = validate_order(
            &filled_cart(),
            &ShippingDetails::new("A", "ab.com", "X"),
            &PaymentDetails::cash_on_delivery(),
        );
        assert_eq!(result, Err(CheckoutError::InvalidEmail));
    }

    #[test]
    fn test_empty_cart() {
        let result = validate_order(&Cart::new(), &shipping(), &PaymentDetails::cash_on_delivery());
        assert_eq!(result, Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_empty_cart_reported_before_payment() {
        let result = validate_order(&Cart::new(), &shipping(), &PaymentDetails::upi("abc"));
        assert_eq!(result, Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_short_upi_id() {
        let result = validate_order(&filled_cart(), &shipping(), &PaymentDetails::upi("abc"));
        assert_eq!(result, Err(CheckoutError::InvalidUpiId));
        assert_eq!(result.unwrap_err().to_string(), "invalid UPI id");
    }

    #[test]
    fn test_upi_length_boundary() {
        assert!(validate_order(&filled_cart(), &shipping(), &PaymentDetails::upi("abcd")).is_err());
        assert!(validate_order(&filled_cart(), &shipping(), &PaymentDetails::upi("abcde")).is_ok());
    }

    #[test]
    fn test_missing_upi_id() {
        let payment = PaymentDetails {
            method: PaymentMethod::Upi,
            upi: None,
            card: Some(card()),
        };
        assert_eq!(
            validate_order(&filled_cart(), &shipping(), &payment),
            Err(CheckoutError::InvalidUpiId)
        );
    }

    #[test]
    fn test_invalid_card_details() {
        let cases = [
            CardDetails::new("41111111111", "12/29", "123"),
            CardDetails::new("411111111111", "", "123"),
            CardDetails::new("411111111111", "12/29", "12"),
        ];
        for card in cases {
            assert_eq!(
                validate_order(&filled_cart(), &shipping(), &PaymentDetails::card(card)),
                Err(CheckoutError::InvalidCardDetails)
            );
        }

        let boundary = CardDetails::new("411111111111", "1", "123");
        assert!(validate_order(&filled_cart(), &shipping(), &PaymentDetails::card(boundary)).is_ok());
    }

    #[test]
    fn test_missing_card() {
        let payment = PaymentDetails {
            method: PaymentMethod::Card,
            upi: Some("user@okbank".to_string()),
            card: None,
        };
        assert_eq!(
            validate_order(&filled_cart(), &shipping(), &payment),
            Err(CheckoutError::InvalidCardDetails)
        );
    }

    #[test]
    fn test_unselected_method_fields_ignored() {
        let payment = PaymentDetails {
            method: PaymentMethod::Cod,
            upi: Some("x".to_string()),
            card: Some(CardDetails::default()),
        };
        assert!(validate_order(&filled_cart(), &shipping(), &payment).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CheckoutError::IncompleteShipping.to_string(), "incomplete shipping details");
        assert_eq!(CheckoutError::InvalidEmail.to_string(), "invalid email");
        assert_eq!(CheckoutError::EmptyCart.to_string(), "empty cart");
        assert_eq!(CheckoutError::InvalidCardDetails.to_string(), "invalid card details");
    }
}
