//! Pages of the Vitrine catalog front-end.
//!
//! Each page owns its own fetch lifecycle and ephemeral UI state and renders
//! to a full HTML document through the shared [`shell::Shell`]:
//!
//! - [`CatalogPage`] — every product in a searchable, virtualized table
//! - [`BrandPage`] — the same table, server-filtered to one brand
//! - [`ProductPage`] — a single record with image carousel and variants
//!
//! Pages are single-threaded state machines: the owning view drives them
//! from its event loop (`load`, scroll, resize, search), and the
//! [`lifecycle::FetchLifecycle`] token guard guarantees that a stale fetch
//! result can never overwrite a newer one.

pub mod brand;
pub mod carousel;
pub mod catalog;
pub mod lifecycle;
pub mod product;
pub mod sections;
pub mod shell;

pub use brand::BrandPage;
pub use carousel::Carousel;
pub use catalog::CatalogPage;
pub use lifecycle::{FetchLifecycle, FetchPhase, FetchSubject, LoadFailure, RequestToken};
pub use product::ProductPage;
