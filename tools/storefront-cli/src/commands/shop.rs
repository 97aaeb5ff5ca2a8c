//! Interactive shopping session.
//!
//! Reads one command per line from stdin and drives a [`StoreSession`]
//! against the catalog. The checkout form is collected with `dialoguer`.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Result};
use chrono::{DateTime, Local, Utc};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password, Select};
use storefront_commerce::cart::LineOptions;
use storefront_commerce::catalog::{CatalogItem, SIZE_OPTIONS};
use storefront_commerce::checkout::{
    CardDetails, Order, PaymentDetails, PaymentMethod, ShippingDetails,
};
use storefront_commerce::{ItemId, StoreSession};
use storefront_data::{CatalogGateway, Remote};
use tracing::debug;

use super::products::{print_product, ProductView, PRODUCT_COLUMNS};
use crate::context::Context;
use crate::output::format_row;

const CART_COLUMNS: [usize; 6] = [4, 32, 4, 4, 10, 12];

const HELP: [(&str, &str); 9] = [
    ("list", "list the catalog"),
    ("show <id>", "show a product"),
    ("add <id> [size]", "add a product to the cart"),
    ("qty <id> <n>", "set the quantity of a cart line"),
    ("remove <id>", "remove a product from the cart"),
    ("cart", "show the cart"),
    ("checkout", "enter shipping and payment details and place the order"),
    ("help", "show this help"),
    ("quit", "leave the shop"),
];

/// One line of shop input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShopCommand {
    List,
    Show(ItemId),
    Add { id: ItemId, size: Option<String> },
    Qty { id: ItemId, qty: i64 },
    Remove(ItemId),
    Cart,
    Checkout,
    Help,
    Quit,
}

impl FromStr for ShopCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().ok_or("empty command")?.to_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match (verb.as_str(), args.as_slice()) {
            ("list" | "ls", []) => ShopCommand::List,
            ("show", [id]) => ShopCommand::Show(parse_id(id)?),
            ("add", [id]) => ShopCommand::Add {
                id: parse_id(id)?,
                size: None,
            },
            ("add", [id, size]) => ShopCommand::Add {
                id: parse_id(id)?,
                size: Some(size.to_uppercase()),
            },
            ("qty", [id, qty]) => {
                let qty: i64 = qty
                    .parse()
                    .map_err(|_| format!("invalid quantity: {}", qty))?;
                if qty < 1 {
                    return Err("quantity must be at least 1; use `remove` to drop an item".into());
                }
                ShopCommand::Qty {
                    id: parse_id(id)?,
                    qty,
                }
            }
            ("remove" | "rm", [id]) => ShopCommand::Remove(parse_id(id)?),
            ("cart", []) => ShopCommand::Cart,
            ("checkout", []) => ShopCommand::Checkout,
            ("help" | "?", []) => ShopCommand::Help,
            ("quit" | "exit" | "q", []) => ShopCommand::Quit,
            (verb, _) => {
                return Err(match HELP.iter().find(|(usage, _)| usage.split(' ').next() == Some(verb)) {
                    Some((usage, _)) => format!("usage: {}", usage),
                    None => format!("unknown command '{}', type `help`", verb),
                })
            }
        };

        Ok(command)
    }
}

fn parse_id(raw: &str) -> Result<ItemId, String> {
    raw.parse::<u64>()
        .map(ItemId::new)
        .map_err(|_| format!("invalid product id: {}", raw))
}

/// Pick the size stored on a new cart line.
///
/// Clothing takes the requested size or `default_size`; anything else never
/// carries a size.
pub(crate) fn choose_size(
    item: &CatalogItem,
    requested: Option<&str>,
    default_size: &str,
) -> Result<Option<String>, String> {
    if !item.is_clothing() {
        return Ok(None);
    }

    let size = requested.unwrap_or(default_size).to_uppercase();
    if SIZE_OPTIONS.contains(&size.as_str()) {
        Ok(Some(size))
    } else {
        Err(format!(
            "unknown size '{}', choose one of {}",
            size,
            SIZE_OPTIONS.join(", ")
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A shopping session bound to a catalog.
struct Shop<'a> {
    ctx: &'a Context,
    catalog: &'a dyn CatalogGateway,
    products: Remote<Vec<CatalogItem>>,
    session: StoreSession,
}

impl<'a> Shop<'a> {
    fn new(ctx: &'a Context, catalog: &'a dyn CatalogGateway) -> Self {
        Self {
            ctx,
            catalog,
            products: Remote::Pending,
            session: ctx.new_session(),
        }
    }

    async fn load_catalog(&mut self) {
        let spinner = self.ctx.output.spinner("Loading catalog...");
        self.products = self.catalog.list_products().await.into();
        spinner.finish_and_clear();

        match &self.products {
            Remote::Ready(items) => debug!(count = items.len(), "catalog loaded"),
            Remote::Failed(message) => self
                .ctx
                .output
                .warn(&format!("Catalog unavailable: {}", message)),
            Remote::NotFound | Remote::Pending => {
                self.ctx.output.warn("Catalog unavailable")
            }
        }
    }

    /// Find a product, preferring the loaded listing over a remote lookup.
    async fn lookup(&self, id: ItemId) -> Remote<CatalogItem> {
        let listed = self
            .products
            .ready()
            .and_then(|items| items.iter().find(|item| item.id == id));
        match listed {
            Some(item) => Remote::Ready(item.clone()),
            None => self.catalog.get_product(id).await.into(),
        }
    }

    async fn handle(&mut self, command: ShopCommand) -> Result<Flow> {
        match command {
            ShopCommand::List => self.list().await,
            ShopCommand::Show(id) => {
                if let Some(item) = self.require(id).await {
                    print_product(&ProductView::new(&item, self.session.currency()), self.ctx);
                }
            }
            ShopCommand::Add { id, size } => self.add(id, size.as_deref()).await,
            ShopCommand::Qty { id, qty } => {
                if self.session.cart().contains(id) {
                    self.session.update_qty(id, qty);
                    self.ctx.output.success(&format!("Quantity of {} set to {}", id, qty));
                } else {
                    self.ctx.output.warn(&format!("Product {} is not in the cart", id));
                }
            }
            ShopCommand::Remove(id) => {
                if self.session.cart().contains(id) {
                    self.session.remove_from_cart(id);
                    self.ctx.output.success(&format!("Removed {} from the cart", id));
                } else {
                    self.ctx.output.info(&format!("Product {} is not in the cart", id));
                }
            }
            ShopCommand::Cart => self.print_cart(),
            ShopCommand::Checkout => self.checkout()?,
            ShopCommand::Help => print_help(self.ctx),
            ShopCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn list(&mut self) {
        if !self.products.is_ready() {
            self.load_catalog().await;
        }
        let Some(items) = self.products.ready() else {
            return;
        };

        let currency = self.session.currency();
        self.ctx.output.header(&format!("Products ({})", items.len()));
        self.ctx
            .output
            .table_row(&["ID", "TITLE", "CATEGORY", "PRICE"], &PRODUCT_COLUMNS);
        for item in items {
            println!("  {}", ProductView::new(item, currency).row());
        }
    }

    /// Look a product up, reporting a missing or unreachable one.
    async fn require(&self, id: ItemId) -> Option<CatalogItem> {
        match self.lookup(id).await {
            Remote::Ready(item) => Some(item),
            Remote::NotFound => {
                self.ctx.output.warn(&format!("No product with id {}", id));
                None
            }
            Remote::Failed(message) => {
                self.ctx
                    .output
                    .error(&format!("Failed to load product {}: {}", id, message));
                None
            }
            Remote::Pending => {
                self.ctx.output.info("Catalog is still loading");
                None
            }
        }
    }

    async fn add(&mut self, id: ItemId, size: Option<&str>) {
        let Some(item) = self.require(id).await else {
            return;
        };

        if !item.is_clothing() && size.is_some() {
            self.ctx
                .output
                .warn(&format!("{} has no sizes; ignoring the size", item.title));
        }

        // a re-add only bumps the quantity, so the size is never looked at
        let options = if self.session.cart().contains(id) {
            LineOptions::default()
        } else {
            match choose_size(&item, size, &self.ctx.config.store.default_size) {
                Ok(Some(size)) => LineOptions::sized(size),
                Ok(None) => LineOptions::default(),
                Err(message) => {
                    self.ctx.output.warn(&message);
                    return;
                }
            }
        };

        self.session.add_to_cart(&item, options);

        let qty = self.session.cart().get(id).map_or(0, |line| line.qty);
        let label = match self.session.cart().get(id).and_then(|line| line.size.as_deref()) {
            Some(size) => format!("{} (size {})", item.title, size),
            None => item.title.clone(),
        };
        self.ctx.output.success(&format!(
            "Added {} x{}. Cart has {} item(s).",
            label,
            qty,
            self.session.cart().item_count()
        ));
    }

    fn print_cart(&self) {
        let cart = self.session.cart();
        if cart.is_empty() {
            self.ctx.output.info("Your cart is empty.");
            return;
        }

        self.ctx.output.header("Cart");
        self.ctx.output.table_row(
            &["ID", "TITLE", "SIZE", "QTY", "PRICE", "TOTAL"],
            &CART_COLUMNS,
        );
        for line in cart.lines() {
            println!(
                "  {}",
                format_row(
                    &[
                        &line.id.to_string(),
                        &line.title,
                        line.size.as_deref().unwrap_or("-"),
                        &line.qty.to_string(),
                        &self.session.format_price(line.unit_price()),
                        &self.session.format_price(line.total()),
                    ],
                    &CART_COLUMNS,
                )
            );
        }
        self.ctx.output.kv("items", &cart.item_count().to_string());
        self.ctx
            .output
            .kv("total", &self.session.format_price(self.session.total()));
    }

    fn checkout(&mut self) -> Result<()> {
        self.print_cart();
        let (shipping, payment) = prompt_checkout()?;

        match self.session.place_order(shipping, &payment) {
            Ok(order) => print_receipt(&order, &self.session, self.ctx),
            Err(e) => self.ctx.output.error(&e.to_string()),
        }
        Ok(())
    }
}

fn prompt_checkout() -> Result<(ShippingDetails, PaymentDetails)> {
    let theme = ColorfulTheme::default();
    let text = |prompt: &str| -> Result<String> {
        Ok(Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    };

    let shipping = ShippingDetails::new(text("Full name")?, text("Email")?, text("Address")?);

    let labels = PaymentMethod::ALL.map(|m| m.display_name());
    let choice = Select::with_theme(&theme)
        .with_prompt("Payment method")
        .items(&labels)
        .default(0)
        .interact()?;

    let payment = match PaymentMethod::ALL[choice] {
        PaymentMethod::Cod => PaymentDetails::cash_on_delivery(),
        PaymentMethod::Upi => PaymentDetails::upi(text("UPI id")?),
        PaymentMethod::Card => {
            let number = text("Card number")?;
            let expiry = text("Expiry (MM/YY)")?;
            let cvv = Password::with_theme(&theme)
                .with_prompt("CVV")
                .allow_empty_password(true)
                .interact()?;
            PaymentDetails::card(CardDetails::new(number, expiry, cvv))
        }
    };

    Ok((shipping, payment))
}

fn print_receipt(order: &Order, session: &StoreSession, ctx: &Context) {
    let placed_at = DateTime::<Utc>::from_timestamp(order.placed_at, 0)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| order.placed_at.to_string());

    ctx.output.success(&order.message);
    ctx.output.kv("order", order.id.as_str());
    ctx.output.kv("placed", &placed_at);
    ctx.output.kv("payment", order.payment_method.display_name());
    ctx.output.kv("ship to", &order.shipping.address);
    for line in &order.lines {
        let size = line.size.as_deref().map(|s| format!(" ({})", s)).unwrap_or_default();
        ctx.output.list_item(&format!(
            "{}{} x{}  {}",
            line.title,
            size,
            line.quantity,
            session.format_price(line.line_total)
        ));
    }
    ctx.output.kv("total", &session.format_price(order.total));
}

fn print_help(ctx: &Context) {
    ctx.output.header("Commands");
    for (usage, about) in HELP {
        println!("  {} {}", style(format!("{:18}", usage)).cyan(), about);
    }
}

/// Run the shop command.
pub async fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("shop is interactive and does not support --json");
    }

    let catalog = ctx.catalog()?;
    let mut shop = Shop::new(ctx, &catalog);
    ctx.output
        .info(&format!("Session {} at {}", shop.session.id(), ctx.config.catalog.base_url));
    shop.load_catalog().await;
    print_help(ctx);

    let stdin = std::io::stdin();
    loop {
        print!("\n{} ", style(format!("[cart: {}] >", shop.session.cart().item_count())).bold());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<ShopCommand>() {
            Ok(command) => {
                if shop.handle(command).await? == Flow::Quit {
                    break;
                }
            }
            Err(message) => ctx.output.warn(&message),
        }
    }

    if !shop.session.cart().is_empty() {
        ctx.output.info(&format!(
            "Leaving with {} item(s) in the cart; carts are not saved.",
            shop.session.cart().item_count()
        ));
    }
    Ok(())
}
