//! Shipping details collected by the checkout form.

use serde::{Deserialize, Serialize};

/// Where and to whom an order ships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub name: String,
    pub email: String,
    /// Free-text postal address.
    pub address: String,
}

impl ShippingDetails {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// All three fields are filled in.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.address.is_empty()
    }
}
