//! Category keywords and clothing size options.

/// Keyword marking a clothing category ("men's clothing", "women's clothing").
pub const CLOTHING: &str = "clothing";

/// Keyword marking an electronics category.
pub const ELECTRONICS: &str = "electronics";

/// Keyword marking a jewellery category, spelled as the catalog service spells it.
pub const JEWELERY: &str = "jewelery";

/// Sizes offered for clothing items.
pub const SIZE_OPTIONS: [&str; 4] = ["S", "M", "L", "XL"];

/// Size preselected when a clothing item is added without an explicit choice.
pub const DEFAULT_SIZE: &str = "M";

/// Check whether a category is a clothing category.
///
/// Matching is by substring, so "clothing-accessories" counts as clothing too.
pub fn is_clothing(category: &str) -> bool {
    category.contains(CLOTHING)
}
