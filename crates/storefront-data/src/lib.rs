//! Catalog gateway for the storefront.
//!
//! The catalog is an external, read-only product service. This crate wraps it
//! behind the [`CatalogGateway`] trait so views and tests can swap the HTTP
//! implementation for an in-memory one.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::{CatalogGateway, FetchClient, HttpCatalog, Remote};
//!
//! let catalog = HttpCatalog::new(FetchClient::new().with_base_url("https://fakestoreapi.com"))?;
//!
//! let mut products = Remote::Pending;
//! products = catalog.list_products().await.into();
//!
//! if let Remote::Ready(items) = &products {
//!     println!("{} products", items.len());
//! }
//! ```

mod error;
mod gateway;
mod remote;
mod response;

pub use error::FetchError;
pub use gateway::{CatalogGateway, HttpCatalog, InMemoryCatalog, DEFAULT_CATALOG_URL};
pub use remote::Remote;
pub use response::Response;

use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for outbound catalog requests.
///
/// A thin wrapper over `reqwest` that resolves paths against a base URL,
/// attaches default headers, and reads the whole body into a [`Response`].
#[derive(Debug, Clone)]
pub struct FetchClient {
    inner: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    timeout: Duration,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: None,
            default_headers: HashMap::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Resolve a path against the base URL. Absolute URLs pass through.
    pub fn resolve(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url.to_string(),
        }
    }

    /// Send a GET request and read the full response.
    ///
    /// Non-2xx statuses are returned as a [`Response`], not an error, so the
    /// caller can map them (e.g. 404 to not-found).
    pub async fn get(&self, url: &str) -> Result<Response, FetchError> {
        let full_url = self.resolve(url);
        reqwest::Url::parse(&full_url).map_err(|e| FetchError::InvalidUrl(format!("{full_url}: {e}")))?;

        let mut request = self.inner.get(&full_url).timeout(self.timeout);
        for (key, value) in &self.default_headers {
            request = request.header(key.as_str(), value.as_str());
        }

        debug!(url = %full_url, "sending catalog request");
        let response = request.send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(url = %full_url, status, bytes = body.len(), "catalog response received");

        Ok(Response::new(status, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogGateway, FetchClient, FetchError, HttpCatalog, InMemoryCatalog, Remote};
}
