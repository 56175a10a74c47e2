//! List virtualization for Vitrine.
//!
//! Renders an ordered sequence of N fixed-height rows inside a scrollable
//! viewport by mounting only the rows whose vertical extent intersects the
//! visible window, plus a small overscan margin. Rows sit absolutely
//! positioned inside a full-height spacer (`N * row_height`), so scrollbar
//! proportions stay correct without mounting all N rows.
//!
//! The crate is purely geometric: it computes which indices to mount and
//! where, and tracks viewport scroll/resize state. Mapping indices back to
//! records and keying rows by record identity is the caller's job.

pub mod geometry;
pub mod viewport;

pub use geometry::{window, RowGeometry, DEFAULT_OVERSCAN, ROW_HEIGHT};
pub use viewport::{list_height, ListViewport, MIN_LIST_HEIGHT};
