//! Backend location and endpoint URLs.

use std::env;

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "VITRINE_API_URL";

/// Backend used when the environment does not say otherwise.
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Location of the catalog backend.
///
/// The base URL is configured externally and normalized once here; call
/// sites only ever go through the URL builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config for an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from [`API_URL_ENV`], falling back to localhost.
    pub fn from_env() -> Self {
        match env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// The configured base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection endpoint, optionally filtered server-side by exact brand.
    pub fn products_url(&self, brand: Option<&str>) -> String {
        let url = format!("{}/api/products", self.base_url);
        match brand {
            Some(brand) => format!("{}?brand={}", url, urlencoding::encode(brand)),
            None => url,
        }
    }

    /// Single-record endpoint for a product slug.
    pub fn product_url(&self, slug: &str) -> String {
        format!("{}/api/products/{}", self.base_url, urlencoding::encode(slug))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
