//! Catalog gateway implementations.

use crate::{FetchClient, FetchError};
use async_trait::async_trait;
use storefront_commerce::catalog::CatalogItem;
use storefront_commerce::ItemId;
use tracing::{debug, warn};

/// Base URL of the public catalog service the storefront reads by default.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com";

/// Read-only access to the product catalog.
///
/// Calls are fallible and never retried here; callers decide what to do with
/// a failure. A missing product is reported as [`FetchError::NotFound`].
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// List every product.
    async fn list_products(&self) -> Result<Vec<CatalogItem>, FetchError>;

    /// Look up a single product.
    async fn get_product(&self, id: ItemId) -> Result<CatalogItem, FetchError>;
}

/// Catalog served over HTTP as JSON.
///
/// Endpoints: `GET {base}/products` and `GET {base}/products/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: FetchClient,
}

impl HttpCatalog {
    /// Create a catalog over a client configured with the service base URL.
    pub fn new(client: FetchClient) -> Result<Self, FetchError> {
        let base = client
            .base_url()
            .ok_or_else(|| FetchError::InvalidUrl("catalog base URL is not set".to_string()))?;
        reqwest::Url::parse(base).map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))?;
        Ok(Self { client })
    }

    /// Catalog at the given base URL with default client settings.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::new(FetchClient::new().with_base_url(base_url))
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalog {
    async fn list_products(&self) -> Result<Vec<CatalogItem>, FetchError> {
        let response = self.client.get("/products").await?.error_for_status()?;
        let items: Vec<CatalogItem> = response.json()?;
        debug!(count = items.len(), "loaded catalog");
        Ok(items)
    }

    async fn get_product(&self, id: ItemId) -> Result<CatalogItem, FetchError> {
        let response = self.client.get(&format!("/products/{}", id)).await?;

        if response.status == 404 || (response.is_success() && response.is_empty_body()) {
            warn!(item_id = %id, status = response.status, "product not found");
            return Err(FetchError::NotFound(id));
        }

        let item: CatalogItem = response.error_for_status()?.json()?;
        if item.id != id {
            return Err(FetchError::ParseError(format!(
                "requested product {} but received {}",
                id, item.id
            )));
        }
        Ok(item)
    }
}

/// Fixed catalog held in memory, for tests and offline use.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<CatalogItem>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl CatalogGateway for InMemoryCatalog {
    async fn list_products(&self) -> Result<Vec<CatalogItem>, FetchError> {
        Ok(self.items.clone())
    }

    async fn get_product(&self, id: ItemId) -> Result<CatalogItem, FetchError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(FetchError::NotFound(id))
    }
}
