//! Cart and cart line types.

use crate::cart::{CategoryMarkup, Priceable, PricingRule};
use crate::catalog::{is_clothing, CatalogItem};
use crate::ids::ItemId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Extra fields captured when an item is first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineOptions {
    /// Chosen size, for clothing items only.
    pub size: Option<String>,
}

impl LineOptions {
    pub fn sized(size: impl Into<String>) -> Self {
        Self {
            size: Some(size.into()),
        }
    }
}

/// A shopping cart: one line per distinct catalog item, in first-add order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of an item.
    ///
    /// If the item is already in the cart its quantity goes up by one and
    /// every other field, including a size chosen earlier, stays as it was.
    /// The increment saturates at `i64::MAX`. Otherwise a new line with
    /// quantity 1 is appended.
    pub fn add(&mut self, item: &CatalogItem, options: LineOptions) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == item.id) {
            existing.qty = existing.qty.saturating_add(1);
            debug!(item_id = %item.id, qty = existing.qty, "incremented cart line");
            return;
        }

        let size = match options.size {
            Some(size) if !is_clothing(&item.category) => {
                debug!(item_id = %item.id, %size, category = %item.category, "dropping size for non-clothing item");
                None
            }
            size => size,
        };

        self.lines.push(CartLine::from_item(item, size));
        debug!(item_id = %item.id, lines = self.lines.len(), "added cart line");
    }

    /// Replace the quantity of a line.
    ///
    /// The value is taken as-is: zero and negative quantities are stored, not
    /// rejected, and the line is not removed. Unknown ids are ignored.
    pub fn update_qty(&mut self, id: ItemId, qty: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.qty = qty;
            debug!(item_id = %id, qty, "updated cart line quantity");
        }
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove(&mut self, id: ItemId) {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        if self.lines.len() < len_before {
            debug!(item_id = %id, "removed cart line");
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of display price times quantity over all lines.
    pub fn total(&self) -> f64 {
        self.total_with(&CategoryMarkup)
    }

    /// Total under an alternative pricing rule.
    pub fn total_with(&self, rule: &dyn PricingRule) -> f64 {
        self.lines
            .iter()
            .map(|l| rule.price_of(l) * l.qty as f64)
            .sum()
    }

    /// Display price times quantity for one line.
    pub fn line_total(&self, id: ItemId) -> Option<f64> {
        self.get(id).map(CartLine::total)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines (the cart badge count).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().fold(0i64, |n, l| n.saturating_add(l.qty))
    }
}

/// A line in the cart.
///
/// Carries a copy of the catalog fields needed to display and price it. The
/// display price itself is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Catalog item id; unique within a cart.
    pub id: ItemId,
    pub title: String,
    pub category: String,
    /// Raw catalog price.
    pub price: f64,
    pub image: String,
    pub qty: i64,
    /// Size chosen at add time, clothing only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl CartLine {
    fn from_item(item: &CatalogItem, size: Option<String>) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            category: item.category.clone(),
            price: item.price,
            image: item.image.clone(),
            qty: 1,
            size,
        }
    }

    /// Display price for a single unit.
    pub fn unit_price(&self) -> f64 {
        CategoryMarkup.price_of(self)
    }

    /// Display price times quantity.
    pub fn total(&self) -> f64 {
        self.unit_price() * self.qty as f64
    }
}

impl Priceable for CartLine {
    fn raw_price(&self) -> f64 {
        self.price
    }

    fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::compute_price;
    use proptest::prelude::*;

    fn shirt() -> CatalogItem {
        CatalogItem::new(1, "Cotton Shirt", "men's clothing", 50.0)
    }

    fn monitor() -> CatalogItem {
        CatalogItem::new(2, "Monitor", "electronics", 10.0)
    }

    fn ring() -> CatalogItem {
        CatalogItem::new(3, "Ring", "jewelery", 2.0)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add(&shirt(), LineOptions::sized("L"));

        let line = cart.get(ItemId::new(1)).unwrap();
        assert_eq!(line.qty, 1);
        assert_eq!(line.size.as_deref(), Some("L"));
        assert_eq!(line.title, "Cotton Shirt");
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        let item = CatalogItem::new(5, "Lamp", "home", 4.0);
        cart.add(&item, LineOptions::default());
        cart.add(&item, LineOptions::default());

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ItemId::new(5)).unwrap().qty, 2);
    }

    #[test]
    fn test_readd_keeps_first_fields() {
        let mut cart = Cart::new();
        cart.add(&shirt(), LineOptions::sized("S"));

        let mut renamed = shirt();
        renamed.title = "Renamed".to_string();
        renamed.category = "electronics".to_string();
        cart.add(&renamed, LineOptions::sized("XL"));

        let line = cart.get(ItemId::new(1)).unwrap();
        assert_eq!(line.qty, 2);
        assert_eq!(line.size.as_deref(), Some("S"));
        assert_eq!(line.title, "Cotton Shirt");
        assert_eq!(line.category, "men's clothing");
    }

    #[test]
    fn test_size_dropped_for_non_clothing() {
        let mut cart = Cart::new();
        cart.add(&monitor(), LineOptions::sized("M"));
        assert_eq!(cart.get(ItemId::new(2)).unwrap().size, None);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&ring(), LineOptions::default());
        cart.add(&shirt(), LineOptions::default());
        cart.add(&monitor(), LineOptions::default());
        cart.add(&ring(), LineOptions::default());

        let ids: Vec<u64> = cart.lines().iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add(&shirt(), LineOptions::sized("M"));
        cart.update_qty(ItemId::new(1), 5);

        let line = cart.get(ItemId::new(1)).unwrap();
        assert_eq!(line.qty, 5);
        assert_eq!(line.size.as_deref(), Some("M"));
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&shirt(), LineOptions::default());
        let before = cart.clone();

        cart.update_qty(ItemId::new(99), 3);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_accepts_zero_and_negative() {
        // Quantities are stored unvalidated; callers decide whether to guard.
        let mut cart = Cart::new();
        cart.add(&ring(), LineOptions::default());

        cart.update_qty(ItemId::new(3), 0);
        assert_eq!(cart.get(ItemId::new(3)).unwrap().qty, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 0.0);

        cart.update_qty(ItemId::new(3), -2);
        assert_eq!(cart.get(ItemId::new(3)).unwrap().qty, -2);
        assert_eq!(cart.total(), -2.0 * 5400.0);
    }

    #[test]
    fn test_add_after_max_quantity_saturates() {
        let mut cart = Cart::new();
        cart.add(&ring(), LineOptions::default());
        cart.add(&shirt(), LineOptions::default());
        cart.update_qty(ItemId::new(3), i64::MAX);

        cart.add(&ring(), LineOptions::default());
        assert_eq!(cart.get(ItemId::new(3)).unwrap().qty, i64::MAX);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), i64::MAX);

        cart.update_qty(ItemId::new(1), i64::MIN);
        cart.update_qty(ItemId::new(3), i64::MIN);
        assert_eq!(cart.item_count(), i64::MIN);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add(&shirt(), LineOptions::default());
        cart.add(&monitor(), LineOptions::default());

        cart.remove(ItemId::new(1));
        assert!(!cart.contains(ItemId::new(1)));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&shirt(), LineOptions::default());
        let before = cart.clone();

        cart.remove(ItemId::new(42));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_total_clothing_scenario() {
        let mut cart = Cart::new();
        cart.add(&shirt(), LineOptions::sized("M"));
        cart.add(&shirt(), LineOptions::default());
        assert_eq!(cart.total(), 500.0);
    }

    #[test]
    fn test_total_mixed_cart() {
        let mut cart = Cart::new();
        cart.add(&shirt(), LineOptions::default());
        cart.add(&monitor(), LineOptions::default());
        cart.add(&ring(), LineOptions::default());
        cart.update_qty(ItemId::new(2), 3);

        // 250 + 3 * 21000 + 5400
        assert_eq!(cart.total(), 68650.0);
        assert_eq!(cart.line_total(ItemId::new(2)), Some(63000.0));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_total_with_alternative_rule() {
        struct Flat;
        impl PricingRule for Flat {
            fn display_price(&self, _raw: f64, _category: &str) -> f64 {
                10.0
            }
        }

        let mut cart = Cart::new();
        cart.add(&shirt(), LineOptions::default());
        cart.add(&monitor(), LineOptions::default());
        cart.update_qty(ItemId::new(1), 4);
        assert_eq!(cart.total_with(&Flat), 50.0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&shirt(), LineOptions::default());
        cart.clear();
        assert!(cart.is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u64),
        Update(u64, i64),
        Remove(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u64..6).prop_map(Op::Add),
            (0u64..6, 1i64..10).prop_map(|(id, q)| Op::Update(id, q)),
            (0u64..6).prop_map(Op::Remove),
        ]
    }

    fn catalog_item(id: u64) -> CatalogItem {
        let category = ["men's clothing", "electronics", "jewelery", "books"][(id % 4) as usize];
        CatalogItem::new(id, format!("item-{}", id), category, id as f64 * 7.25)
    }

    proptest! {
        #[test]
        fn prop_adds_never_duplicate(ids in proptest::collection::vec(0u64..20, 0..50)) {
            let mut cart = Cart::new();
            for id in &ids {
                cart.add(&catalog_item(*id), LineOptions::default());
            }

            let mut distinct = ids.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(cart.len(), distinct.len());
            prop_assert_eq!(cart.item_count(), ids.len() as i64);
        }

        #[test]
        fn prop_total_matches_line_sum(ops in proptest::collection::vec(op(), 0..40)) {
            let mut cart = Cart::new();
            for op in &ops {
                match *op {
                    Op::Add(id) => cart.add(&catalog_item(id), LineOptions::default()),
                    Op::Update(id, qty) => cart.update_qty(ItemId::new(id), qty),
                    Op::Remove(id) => cart.remove(ItemId::new(id)),
                }
            }

            let expected: f64 = cart
                .lines()
                .iter()
                .map(|l| compute_price(l) * l.qty as f64)
                .sum();
            prop_assert!((cart.total() - expected).abs() < 1e-6);

            for id in 0u64..6 {
                let last_add = ops.iter().rposition(|o| matches!(o, Op::Add(a) if *a == id));
                let last_remove = ops.iter().rposition(|o| matches!(o, Op::Remove(r) if *r == id));
                let present = match (last_add, last_remove) {
                    (Some(a), Some(r)) => a > r,
                    (Some(_), None) => true,
                    _ => false,
                };
                prop_assert_eq!(cart.contains(ItemId::new(id)), present);
            }
        }
    }
}
