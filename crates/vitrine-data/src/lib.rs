//! Catalog API access for Vitrine.
//!
//! Provides the configured base URL, the endpoint URL builders, and a
//! reqwest-backed client that speaks the backend's plain HTTP+JSON shape:
//!
//! - `GET {base}/api/products` → `{ "products": [...] }`, with an optional
//!   `?brand=` query parameter for server-side brand filtering
//! - `GET {base}/api/products/{slug}` → `{ "product": {...} }`, 404 when
//!   the slug is unknown
//!
//! Pages depend on the [`ProductSource`] trait rather than the concrete
//! client, so tests can drive the fetch lifecycle with fakes.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_data::{ApiClient, ProductSource};
//!
//! let client = ApiClient::from_env();
//! let products = client.list_products(Some("Nike")).await?;
//! ```

mod config;
mod error;
mod source;

pub use config::{ApiConfig, API_URL_ENV};
pub use error::FetchError;
pub use source::{ApiClient, ProductEnvelope, ProductSource, ProductsEnvelope};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiClient, ApiConfig, FetchError, ProductSource};
}
