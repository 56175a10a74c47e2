//! Search box section for the catalog page.

use super::html_escape;

/// Render the search box with the current input text.
///
/// Filtering is applied on submit (Enter or the button), not per keystroke;
/// the page keeps the raw input and the applied query separately.
pub fn render_search_box(value: &str) -> String {
    format!(
        r#"<form class="search-box" data-section="search" action="" method="get">
    <input type="text" name="q" placeholder="Search products..." value="{value}">
    <button type="submit" aria-label="Search">&#128269;</button>
</form>"#,
        value = html_escape(value),
    )
}
