use serde::Deserialize;
use thiserror::Error;

use vitrina_catalog::CatalogStore;
use vitrina_core::{Category, Product};

/// The public catalog API the viewer was built against.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Transport or decode failure; terminal at this boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// The product list arrives wrapped in an envelope with paging metadata we
/// ignore.
#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    products: Vec<Product>,
}

/// Categories arrive either as bare slugs or as `{ slug, name }` objects,
/// depending on API version; both normalize to [`Category`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryWire {
    Entry { slug: String, name: String },
    Slug(String),
}

impl From<CategoryWire> for Category {
    fn from(wire: CategoryWire) -> Self {
        match wire {
            CategoryWire::Slug(slug) => Category::new(slug.clone(), slug),
            CategoryWire::Entry { slug, name } => Category::new(slug, name),
        }
    }
}

/// HTTP client for the upstream catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let url = format!("{}/products?limit=100", self.base_url);
        let envelope: ProductsEnvelope = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.products)
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let url = format!("{}/products/categories", self.base_url);
        let wire: Vec<CategoryWire> = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(wire.into_iter().map(Category::from).collect())
    }

    /// Run both startup fetches concurrently and build the store from
    /// whatever arrived. Either side failing is logged and leaves that side
    /// empty; there is no retry and no ordering guarantee between the two.
    pub async fn load(&self) -> CatalogStore {
        let (products, categories) = tokio::join!(self.fetch_products(), self.fetch_categories());

        let products = products.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "product fetch failed, catalog stays empty");
            Vec::new()
        });
        let categories = categories.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "category fetch failed, no categories available");
            Vec::new()
        });

        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "catalog loaded"
        );
        CatalogStore::new(products, categories)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
