use crate::domain::model::{Product, StockInfo};
use crate::domain::ports::StockCatalog;
use crate::utils::error::CatalogError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Catalog client over the storefront API: `GET {base}/stock/{id}` and
/// `GET {base}/products/{id}`. A 404 maps to `CatalogError::NotFound`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("Making catalog request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Catalog response status: {}", response.status());

        match response.status() {
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound),
            status if status.is_success() => Ok(response.json().await?),
            status => Err(CatalogError::Unexpected(format!(
                "catalog returned status {}",
                status
            ))),
        }
    }
}

#[async_trait]
impl StockCatalog for HttpCatalog {
    async fn stock(&self, product_id: u64) -> Result<StockInfo, CatalogError> {
        self.fetch(&format!("stock/{}", product_id)).await
    }

    async fn product(&self, product_id: u64) -> Result<Product, CatalogError> {
        self.fetch(&format!("products/{}", product_id)).await
    }
}
