//! Catalog browsing commands.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use storefront_commerce::cart::compute_price;
use storefront_commerce::catalog::{CatalogItem, SIZE_OPTIONS};
use storefront_commerce::{Currency, ItemId};
use storefront_data::CatalogGateway;

use super::{ProductArgs, ProductsArgs};
use crate::context::Context;
use crate::output::{format_row, truncate};

/// Column widths for product listings: id, title, category, price.
pub(crate) const PRODUCT_COLUMNS: [usize; 4] = [4, 40, 20, 12];

/// A catalog item as the storefront shows it.
#[derive(Debug, Serialize)]
pub(crate) struct ProductView<'a> {
    #[serde(flatten)]
    pub item: &'a CatalogItem,
    pub display_price: f64,
    pub formatted_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<&'static [&'static str]>,
}

impl<'a> ProductView<'a> {
    pub fn new(item: &'a CatalogItem, currency: Currency) -> Self {
        let display_price = compute_price(item);
        let sizes: &'static [&'static str] = &SIZE_OPTIONS;
        Self {
            item,
            display_price,
            formatted_price: currency.format(display_price),
            sizes: item.is_clothing().then_some(sizes),
        }
    }

    pub fn row(&self) -> String {
        format_row(
            &[
                &self.item.id.to_string(),
                &self.item.title,
                &self.item.category,
                &self.formatted_price,
            ],
            &PRODUCT_COLUMNS,
        )
    }
}

/// Keep items whose category contains `filter`, ignoring case.
pub(crate) fn filter_by_category(items: Vec<CatalogItem>, filter: Option<&str>) -> Vec<CatalogItem> {
    match filter {
        None => items,
        Some(filter) => {
            let filter = filter.to_lowercase();
            items
                .into_iter()
                .filter(|item| item.category.to_lowercase().contains(&filter))
                .collect()
        }
    }
}

/// Run the products command.
pub async fn run_list(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let currency = ctx.config.currency();

    let spinner = ctx.output.spinner("Loading catalog...");
    let result = catalog.list_products().await;
    spinner.finish_and_clear();

    let items = result.context("Failed to load catalog")?;
    let items = filter_by_category(items, args.category.as_deref());
    let views: Vec<_> = items.iter().map(|item| ProductView::new(item, currency)).collect();

    if ctx.output.is_json() {
        ctx.output.json(&views);
        return Ok(());
    }

    if views.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", views.len()));
    ctx.output.table_row(&["ID", "TITLE", "CATEGORY", "PRICE"], &PRODUCT_COLUMNS);
    for view in &views {
        println!("  {}", view.row());
    }

    Ok(())
}

/// Run the product command.
pub async fn run_show(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let id = ItemId::new(args.id);

    let spinner = ctx.output.spinner(&format!("Loading product {}...", id));
    let result = catalog.get_product(id).await;
    spinner.finish_and_clear();

    let item = match result {
        Ok(item) => item,
        Err(e) if e.is_not_found() => bail!("Product not found: {}", id),
        Err(e) => return Err(e).with_context(|| format!("Failed to load product {}", id)),
    };

    let view = ProductView::new(&item, ctx.config.currency());
    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    print_product(&view, ctx);
    Ok(())
}

/// Print the detail view of a product.
pub(crate) fn print_product(view: &ProductView<'_>, ctx: &Context) {
    let item = view.item;
    ctx.output.header(&item.title);
    ctx.output.kv("id", &item.id.to_string());
    ctx.output.kv("category", &item.category);
    ctx.output.kv("price", &view.formatted_price);
    if let Some(sizes) = view.sizes {
        ctx.output.kv("sizes", &sizes.join(" / "));
    }
    if let Some(rating) = &item.rating {
        ctx.output.kv("rating", &format!("{:.1} ({} reviews)", rating.rate, rating.count));
    }
    if !item.image.is_empty() {
        ctx.output.kv("image", &item.image);
    }
    if !item.description.is_empty() {
        ctx.output.kv("about", &truncate(&item.description, 200));
    }
}
