//! CLI command implementations.

pub mod config;
pub mod price;
pub mod products;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show products whose category contains this text.
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: u64,
}

/// Arguments for the price command.
#[derive(Args)]
pub struct PriceArgs {
    /// Raw catalog price.
    #[arg(allow_negative_numbers = true)]
    pub raw: f64,

    /// Category the price belongs to.
    #[arg(short = 'C', long, default_value = "")]
    pub category: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
