//! Storefront CLI - browse a product catalog, fill a cart and check out.
//!
//! Commands:
//! - `storefront products` - List catalog products with display prices
//! - `storefront product` - Show one product
//! - `storefront price` - Compute a display price from a raw price
//! - `storefront shop` - Interactive shopping session with checkout
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, PriceArgs, ProductArgs, ProductsArgs};

/// Storefront CLI - Browse the catalog, manage a cart and check out
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog service base URL (overrides the config file)
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Products(ProductsArgs),

    /// Show a single product
    Product(ProductArgs),

    /// Compute the display price for a raw catalog price
    Price(PriceArgs),

    /// Start an interactive shopping session
    Shop,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(
        cli.config.as_deref(),
        cli.catalog_url.as_deref(),
        output.clone(),
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    if let Some(path) = &ctx.config_path {
        ctx.output.debug(&format!("Using config {}", path.display()));
    }

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run_list(args, &ctx).await,
        Commands::Product(args) => commands::products::run_show(args, &ctx).await,
        Commands::Price(args) => commands::price::run(args, &ctx).await,
        Commands::Shop => commands::shop::run(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "storefront",
            "products",
            "--category",
            "clothing",
            "--json",
            "--catalog-url",
            "http://localhost:3000",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.catalog_url.as_deref(), Some("http://localhost:3000"));
        match cli.command {
            Commands::Products(args) => assert_eq!(args.category.as_deref(), Some("clothing")),
            _ => panic!("expected products"),
        }
    }

    #[test]
    fn test_parse_price_with_negative_raw() {
        let cli = Cli::try_parse_from(["storefront", "price", "-5", "-C", "jewelery"]).unwrap();
        match cli.command {
            Commands::Price(args) => {
                assert_eq!(args.raw, -5.0);
                assert_eq!(args.category, "jewelery");
            }
            _ => panic!("expected price"),
        }
    }
}
