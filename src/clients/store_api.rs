use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::domain::{CatalogProduct, ProductId, Stock};
use crate::error::ApiError;

/// Remote stock and catalog lookups the cart depends on.
#[async_trait::async_trait]
pub trait StoreApi: Send + Sync {
    /// `GET stock/{id}`
    async fn stock(&self, id: ProductId) -> Result<Stock, ApiError>;
    /// `GET products/{id}`
    async fn product(&self, id: ProductId) -> Result<CatalogProduct, ApiError>;
}

/// [`StoreApi`] over HTTP/JSON.
pub struct HttpStoreApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStoreApi {
    pub fn new(base_url: &str, request_timeout: Duration, connect_timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(url = %url, "Sending request");
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), url });
        }
        resp.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl StoreApi for HttpStoreApi {
    #[instrument(skip(self))]
    async fn stock(&self, id: ProductId) -> Result<Stock, ApiError> {
        self.get_json(&format!("stock/{id}")).await
    }

    #[instrument(skip(self))]
    async fn product(&self, id: ProductId) -> Result<CatalogProduct, ApiError> {
        self.get_json(&format!("/products/{id}")).await
    }
}
