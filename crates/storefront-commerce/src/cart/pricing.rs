//! Display-price derivation.
//!
//! Display prices are always recomputed from the raw catalog price and the
//! category; nothing downstream caches them.

use crate::catalog::{CatalogItem, CLOTHING, ELECTRONICS, JEWELERY};

/// Anything carrying a raw price and a category.
pub trait Priceable {
    /// Raw price as supplied by the catalog.
    fn raw_price(&self) -> f64;
    /// Category name the markup is chosen by.
    fn category(&self) -> &str;
}

impl Priceable for CatalogItem {
    fn raw_price(&self) -> f64 {
        self.price
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// A rule mapping a raw price and category to a display price.
///
/// Implementations must be total: every category, including the empty one,
/// yields a price.
pub trait PricingRule {
    fn display_price(&self, raw_price: f64, category: &str) -> f64;

    /// Price any [`Priceable`] record.
    fn price_of(&self, item: &dyn Priceable) -> f64 {
        self.display_price(item.raw_price(), item.category())
    }
}

/// Category markup matched by substring, first match wins.
///
/// | category contains | display price            |
/// |-------------------|--------------------------|
/// | `clothing`        | `200 + (raw mod 100)`    |
/// | `electronics`     | `20000 + raw * 100`      |
/// | `jewelery`        | `5000 + raw * 200`       |
/// | anything else     | `1000 + raw * 50`        |
///
/// Results are plain `f64` arithmetic. The clothing remainder is below 100,
/// but the final addition rounds: a raw price a few ulps under a multiple of
/// 100 (e.g. `99.99999999999999`) comes out as exactly `300.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryMarkup;

impl PricingRule for CategoryMarkup {
    fn display_price(&self, raw_price: f64, category: &str) -> f64 {
        if category.contains(CLOTHING) {
            // f64 `%` keeps the fractional part: 150.75 -> 50.75
            200.0 + raw_price % 100.0
        } else if category.contains(ELECTRONICS) {
            20000.0 + raw_price * 100.0
        } else if category.contains(JEWELERY) {
            5000.0 + raw_price * 200.0
        } else {
            1000.0 + raw_price * 50.0
        }
    }
}

/// Display price of an item under the storefront's [`CategoryMarkup`].
pub fn compute_price(item: &impl Priceable) -> f64 {
    CategoryMarkup.display_price(item.raw_price(), item.category())
}
