//! Virtualized product table section.

use vitrine_catalog::ProductRecord;
use vitrine_list::{window, ListViewport};

use super::{html_escape, url_escape};

/// Render the sticky column header row.
fn render_header() -> String {
    r#"<header class="list-header" role="rowgroup">
        <div class="cell" role="columnheader">Image</div>
        <div class="cell" role="columnheader">Title</div>
        <div class="cell" role="columnheader">Brand</div>
    </header>"#
        .to_string()
}

/// Render one mounted row at its absolute offset inside the spacer.
///
/// Rows are keyed by the record's slug, not by position, so the row slot is
/// never reused for a different record when the sequence changes.
fn render_row(product: &ProductRecord, offset: u32, height: u32, is_last: bool) -> String {
    let thumb = match product.primary_image() {
        Some(url) => format!(
            r#"<img class="row-thumb" src="{}" alt="{}" loading="lazy">"#,
            html_escape(url),
            html_escape(&product.name)
        ),
        None => r#"<div class="row-thumb row-thumb-placeholder"></div>"#.to_string(),
    };
    let last_class = if is_last { " last-row" } else { "" };

    format!(
        r#"<li class="product-row{last_class}" role="row" data-key="{key}" style="top: {offset}px; height: {height}px;">
            <div class="cell" role="cell">{thumb}</div>
            <div class="cell" role="cell"><a href="/product/{product_slug}">{name}</a></div>
            <div class="cell" role="cell"><a href="/brand/{brand_slug}">{brand}</a></div>
        </li>"#,
        last_class = last_class,
        key = html_escape(&product.filename),
        offset = offset,
        height = height,
        thumb = thumb,
        product_slug = url_escape(&product.filename),
        name = html_escape(&product.name),
        brand_slug = url_escape(&product.brand),
        brand = html_escape(&product.brand),
    )
}

/// Render the virtualized list: a viewport-sized scroll container around a
/// full-height spacer, with only the rows intersecting the visible window
/// mounted at their absolute offsets.
pub fn render_list(products: &[ProductRecord], viewport: &ListViewport) -> String {
    let geometry = viewport.geometry();
    let range = viewport.visible_range(products.len());
    let rows: String = window(products, range)
        .map(|(index, product)| {
            render_row(
                product,
                geometry.row_offset(index),
                geometry.row_height(),
                index + 1 == products.len(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="product-list" data-section="list">
    {header}
    <div class="list-viewport" style="height: {viewport_height}px;">
        <ul class="list-spacer" role="rowgroup" style="height: {total_height}px;">
{rows}
        </ul>
    </div>
</section>"#,
        header = render_header(),
        viewport_height = viewport.height(),
        total_height = geometry.total_height(products.len()),
        rows = rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_list::{ListViewport, RowGeometry};

    fn record(slug: &str, name: &str, brand: &str) -> ProductRecord {
        ProductRecord {
            filename: slug.to_string(),
            name: name.to_string(),
            brand: brand.to_string(),
            image_urls: format!("https://img.example.com/{}.jpg", slug),
            ..ProductRecord::default()
        }
    }

    #[test]
    fn test_render_list_mounts_only_visible_rows() {
        let products: Vec<_> = (0..100)
            .map(|i| record(&format!("p{}", i), &format!("Product {}", i), "Brand"))
            .collect();
        let viewport = ListViewport::new(RowGeometry::new(57).with_overscan(0), 570);

        let html = render_list(&products, &viewport);
        // 570px at 57px per row shows rows 0..=10 (row 10 touches the edge).
        assert!(html.contains(r#"data-key="p0""#));
        assert!(html.contains(r#"data-key="p10""#));
        assert!(!html.contains(r#"data-key="p11""#));
        // Spacer keeps scrollbar proportions for all 100 rows.
        assert!(html.contains("height: 5700px;"));
    }

    #[test]
    fn test_rows_are_positioned_by_index() {
        let products = vec![record("a", "A", "X"), record("b", "B", "X")];
        let viewport = ListViewport::new(RowGeometry::new(57), 600);

        let html = render_list(&products, &viewport);
        assert!(html.contains("top: 0px;"));
        assert!(html.contains("top: 57px;"));
    }

    #[test]
    fn test_last_row_drops_border() {
        let products = vec![record("a", "A", "X"), record("b", "B", "X")];
        let viewport = ListViewport::new(RowGeometry::new(57), 600);

        let html = render_list(&products, &viewport);
        let last = html.find(r#"data-key="b""#).unwrap();
        let first = html.find(r#"data-key="a""#).unwrap();
        assert!(first < last);
        assert_eq!(html.matches("last-row").count(), 1);
    }

    #[test]
    fn test_row_links_encode_slugs() {
        let products = vec![record("air max/90", "Air Max", "Dr. Martens")];
        let viewport = ListViewport::new(RowGeometry::new(57), 600);

        let html = render_list(&products, &viewport);
        assert!(html.contains(r#"href="/product/air%20max%2F90""#));
        assert!(html.contains(r#"href="/brand/Dr.%20Martens""#));
    }
}
