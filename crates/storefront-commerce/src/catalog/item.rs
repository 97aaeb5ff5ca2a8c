//! Catalog item record.

use crate::ids::ItemId;
use serde::{Deserialize, Serialize};

/// A product record as supplied by the catalog service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Stable unique identifier.
    pub id: ItemId,
    /// Product title.
    pub title: String,
    /// Category name (e.g., "men's clothing").
    #[serde(default)]
    pub category: String,
    /// Raw price before the storefront markup.
    pub price: f64,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Customer rating, when the service reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl CatalogItem {
    /// Create an item with the fields the pricing rule and cart need.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            title: title.into(),
            category: category.into(),
            price,
            image: String::new(),
            description: String::new(),
            rating: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether this item takes a size when added to the cart.
    pub fn is_clothing(&self) -> bool {
        super::is_clothing(&self.category)
    }
}

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Average score out of 5.
    pub rate: f64,
    /// Number of ratings.
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_record() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack",
            "category": "men's clothing",
            "image": "https://example.com/1.jpg",
            "rating": {"rate": 3.9, "count": 120}
        }"#;

        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::new(1));
        assert_eq!(item.category, "men's clothing");
        assert!((item.price - 109.95).abs() < f64::EPSILON);
        assert_eq!(item.rating.map(|r| r.count), Some(120));
        assert!(item.is_clothing());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"id": 9, "title": "Mystery", "price": 3}"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, "");
        assert!(item.rating.is_none());
        assert!(!item.is_clothing());
    }
}
