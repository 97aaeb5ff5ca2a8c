//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::catalog::{DEFAULT_SIZE, SIZE_OPTIONS};
use storefront_commerce::Currency;
use storefront_data::DEFAULT_CATALOG_URL;

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Catalog service settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Storefront presentation settings.
    #[serde(default)]
    pub store: StoreConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Currency prices are shown in, falling back to the default on an unknown code.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.store.currency).unwrap_or_default()
    }

    /// Check the config, returning `(errors, warnings)`.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let url = &self.catalog.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!("catalog.base_url '{}' must be an http(s) URL", url));
        }
        if self.catalog.timeout_secs == 0 {
            errors.push("catalog.timeout_secs must be greater than 0".to_string());
        }
        if Currency::from_code(&self.store.currency).is_none() {
            errors.push(format!("store.currency '{}' is not supported", self.store.currency));
        }
        if !SIZE_OPTIONS.contains(&self.store.default_size.as_str()) {
            warnings.push(format!(
                "store.default_size '{}' is not one of {}",
                self.store.default_size,
                SIZE_OPTIONS.join(", ")
            ));
        }
        if url.starts_with("http://") {
            warnings.push("catalog.base_url is not using https".to_string());
        }

        (errors, warnings)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Base URL of the catalog service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Storefront presentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Currency code display prices are formatted in.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Size used when a clothing item is added without one.
    #[serde(default = "default_size")]
    pub default_size: String,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

fn default_size() -> String {
    DEFAULT_SIZE.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            default_size: default_size(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[catalog]
base_url = "{base_url}"
timeout_secs = 10

[store]
# One of: INR, USD, EUR, GBP
currency = "INR"
# Size preselected for clothing: {sizes}
default_size = "{size}"
"#,
        base_url = DEFAULT_CATALOG_URL,
        sizes = SIZE_OPTIONS.join(", "),
        size = DEFAULT_SIZE,
    )
}
