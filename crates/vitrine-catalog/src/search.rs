//! Client-side search over a loaded product list.

use crate::record::ProductRecord;

/// Filter records whose name or brand contains `query`, case-insensitively.
///
/// A blank (empty or whitespace-only) query returns the input unchanged and
/// source order is always preserved. The function is pure and stateless, so
/// it is safe to re-run on every applied search.
pub fn search_products(records: &[ProductRecord], query: &str) -> Vec<ProductRecord> {
    let query = query.trim();
    if query.is_empty() {
        return records.to_vec();
    }
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&query) || r.brand.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
