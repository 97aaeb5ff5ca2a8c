//! Catalog item types.
//!
//! Items are owned by the remote catalog service; the core only reads them.

mod category;
mod item;

pub use category::{is_clothing, CLOTHING, DEFAULT_SIZE, ELECTRONICS, JEWELERY, SIZE_OPTIONS};
pub use item::{CatalogItem, Rating};
