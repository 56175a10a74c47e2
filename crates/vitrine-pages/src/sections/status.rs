//! Loading, error, and empty states.

use super::html_escape;

/// Skeleton placeholder shown while the product list loads.
pub fn render_list_skeleton() -> String {
    let rows: String = (0..8)
        .map(|_| {
            r#"        <div class="product-row skeleton-row">
            <div class="cell"><div class="skeleton" style="width: 40px; height: 40px;"></div></div>
            <div class="cell"><div class="skeleton" style="width: 60%; height: 1rem;"></div></div>
            <div class="cell"><div class="skeleton" style="width: 40%; height: 1rem;"></div></div>
        </div>
"#
        })
        .collect();

    format!(
        r#"<section class="product-list loading" data-section="list">
{rows}</section>"#,
        rows = rows
    )
}

/// Skeleton placeholder shown while the product detail loads.
pub fn render_detail_skeleton() -> String {
    r#"<section class="product-detail loading" data-section="detail">
    <div class="skeleton" style="height: 24rem;"></div>
    <div>
        <div class="skeleton" style="width: 60%; height: 2rem; margin-bottom: 1rem;"></div>
        <div class="skeleton" style="width: 30%; height: 1.5rem; margin-bottom: 2rem;"></div>
        <div class="skeleton" style="width: 100%; height: 4rem;"></div>
    </div>
</section>"#
        .to_string()
}

/// Render a fetch failure message.
pub fn render_error(message: &str) -> String {
    format!(
        r#"<p class="status-error" data-section="status">{}</p>"#,
        html_escape(message)
    )
}

/// Render a muted informational state (empty list, no brand products).
pub fn render_empty(message: &str) -> String {
    format!(
        r#"<p class="status-muted" data-section="status">{}</p>"#,
        html_escape(message)
    )
}

/// Render the "no search matches" state with the applied query echoed back.
pub fn render_no_match(query: &str) -> String {
    format!(
        r#"<p class="status-muted" data-section="status">No products match &quot;{}&quot; (by name or brand).</p>"#,
        html_escape(query)
    )
}
