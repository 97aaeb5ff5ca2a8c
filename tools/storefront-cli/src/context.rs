//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use storefront_commerce::StoreSession;
use storefront_data::{FetchClient, HttpCatalog};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    ///
    /// `catalog_url` overrides the configured catalog base URL.
    pub fn load(config_path: Option<&str>, catalog_url: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        if let Some(url) = catalog_url {
            config.catalog.base_url = url.to_string();
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find the nearest config file walking up from `start`.
    pub fn find_config(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.is_file())
        })
    }

    /// Build the HTTP catalog described by the configuration.
    pub fn catalog(&self) -> Result<HttpCatalog> {
        let client = FetchClient::new()
            .with_base_url(self.config.catalog.base_url.clone())
            .with_default_header("Accept", "application/json")
            .with_timeout(Duration::from_secs(self.config.catalog.timeout_secs));

        HttpCatalog::new(client).with_context(|| {
            format!("Invalid catalog URL: {}", self.config.catalog.base_url)
        })
    }

    /// Start a fresh shopping session in the configured currency.
    pub fn new_session(&self) -> StoreSession {
        StoreSession::new().with_currency(self.config.currency())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".storefront.toml"), "").unwrap();

        let found = Context::find_config(&nested).unwrap();
        assert_eq!(found, root.path().join(".storefront.toml"));
    }

    #[test]
    fn test_find_config_prefers_first_name_in_same_dir() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("storefront.json"), "{}").unwrap();
        std::fs::write(root.path().join("storefront.toml"), "").unwrap();

        let found = Context::find_config(root.path()).unwrap();
        assert_eq!(found, root.path().join("storefront.toml"));
    }

    #[test]
    fn test_catalog_rejects_bad_url() {
        let ctx = Context {
            config: CliConfig {
                catalog: crate::config::CatalogConfig {
                    base_url: "not a url".to_string(),
                    timeout_secs: 5,
                },
                ..CliConfig::default()
            },
            config_path: None,
            output: Output::new(false, true),
            cwd: PathBuf::from("."),
        };

        assert!(ctx.catalog().is_err());
    }
}
