//! Product catalog domain types for Vitrine.
//!
//! This crate holds the record types served by the catalog API and the pure
//! operations pages run over them:
//!
//! - **Records**: [`ProductRecord`] with its delimiter-encoded list fields
//! - **Variants**: [`Variant`] groups decoded from the JSON-encoded field
//! - **Search**: [`search_products`] substring filtering by name or brand
//!
//! Everything here is synchronous and side-effect free; fetching lives in
//! `vitrine-data` and rendering in `vitrine-pages`.

pub mod record;
pub mod search;
pub mod variants;

pub use record::{split_delimited, ProductRecord};
pub use search::search_products;
pub use variants::{parse_variants, Variant, VariantOption};
