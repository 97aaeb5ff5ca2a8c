//! Payment method and details collected by the checkout form.

use crate::error::UnknownPaymentMethod;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[default]
    Cod,
    /// UPI transfer.
    Upi,
    /// Credit or debit card.
    Card,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Cod, PaymentMethod::Upi, PaymentMethod::Card];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Card => "card",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Cash on delivery",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
        }
    }

    /// Whether the order is paid for before it ships.
    pub fn is_prepaid(&self) -> bool {
        !matches!(self, PaymentMethod::Cod)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cod" => Ok(PaymentMethod::Cod),
            "upi" => Ok(PaymentMethod::Upi),
            "card" => Ok(PaymentMethod::Card),
            _ => Err(UnknownPaymentMethod(s.to_string())),
        }
    }
}

/// Card fields as typed by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

impl CardDetails {
    pub fn new(
        number: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
        }
    }
}

/// The payment section of the checkout form.
///
/// The form keeps UPI and card fields around while the customer switches
/// methods, so both are optional and only the selected method's fields are
/// checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetails>,
}

impl PaymentDetails {
    pub fn cash_on_delivery() -> Self {
        Self::default()
    }

    pub fn upi(id: impl Into<String>) -> Self {
        Self {
            method: PaymentMethod::Upi,
            upi: Some(id.into()),
            card: None,
        }
    }

    pub fn card(card: CardDetails) -> Self {
        Self {
            method: PaymentMethod::Card,
            upi: None,
            card: Some(card),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("cod".parse::<PaymentMethod>(), Ok(PaymentMethod::Cod));
        assert_eq!(" UPI ".parse::<PaymentMethod>(), Ok(PaymentMethod::Upi));
        assert_eq!("Card".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_payment_details_wire_shape() {
        let details: PaymentDetails =
            serde_json::from_str(r#"{"method": "upi", "upi": "user@bank"}"#).unwrap();
        assert_eq!(details, PaymentDetails::upi("user@bank"));

        let json = serde_json::to_value(PaymentDetails::cash_on_delivery()).unwrap();
        assert_eq!(json, serde_json::json!({"method": "cod"}));
    }

    #[test]
    fn test_prepaid_methods() {
        assert!(!PaymentMethod::Cod.is_prepaid());
        assert!(PaymentMethod::Upi.is_prepaid());
        assert!(PaymentMethod::Card.is_prepaid());
    }
}
