//! The catalog API client and the source trait pages consume.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use vitrine_catalog::ProductRecord;

use crate::config::ApiConfig;
use crate::error::FetchError;

/// Collection endpoint envelope; a missing field decodes as no products.
#[derive(Debug, Deserialize)]
pub struct ProductsEnvelope {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

/// Single-record endpoint envelope.
#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    #[serde(default)]
    pub product: Option<ProductRecord>,
}

/// Where pages get their products from.
///
/// [`ApiClient`] is the production implementation; lifecycle tests hand
/// pages a fake instead of a live backend.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// All products, optionally filtered server-side by exact brand.
    async fn list_products(&self, brand: Option<&str>) -> Result<Vec<ProductRecord>, FetchError>;

    /// A single product by slug. An unknown slug surfaces as
    /// [`FetchError::Http`] with status 404.
    async fn product_by_slug(&self, slug: &str) -> Result<ProductRecord, FetchError>;
}

/// reqwest-backed client for the catalog API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client against an explicit configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client against the environment-configured backend.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// The backend configuration this client talks to.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url, "fetching from catalog API");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "catalog API returned an error status");
            return Err(FetchError::Http {
                status,
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ProductSource for ApiClient {
    async fn list_products(&self, brand: Option<&str>) -> Result<Vec<ProductRecord>, FetchError> {
        let url = self.config.products_url(brand);
        let envelope: ProductsEnvelope = self.get_json(&url).await?;
        Ok(envelope.products)
    }

    async fn product_by_slug(&self, slug: &str) -> Result<ProductRecord, FetchError> {
        let url = self.config.product_url(slug);
        let envelope: ProductEnvelope = self.get_json(&url).await?;
        envelope
            .product
            .ok_or_else(|| FetchError::Parse(format!("response for {} missing \"product\"", url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_envelope_defaults_to_empty() {
        let envelope: ProductsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.products.is_empty());
    }

    #[test]
    fn test_products_envelope_preserves_server_order() {
        let envelope: ProductsEnvelope = serde_json::from_str(
            r#"{"products": [{"filename": "b"}, {"filename": "a"}, {"filename": "c"}]}"#,
        )
        .unwrap();
        let slugs: Vec<_> = envelope.products.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_product_envelope_missing_field_is_none() {
        let envelope: ProductEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.product.is_none());
    }

    #[test]
    fn test_product_envelope_with_record() {
        let envelope: ProductEnvelope =
            serde_json::from_str(r#"{"product": {"filename": "air-max", "name": "Air Max"}}"#)
                .unwrap();
        let product = envelope.product.unwrap();
        assert_eq!(product.filename, "air-max");
        assert_eq!(product.name, "Air Max");
    }
}
