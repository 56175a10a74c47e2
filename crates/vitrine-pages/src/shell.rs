//! Page shell shared by every rendered page.

/// Head content for a page.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Inline style blocks.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add an inline CSS block.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", title));
        }
        for (name, content) in &self.meta {
            html.push_str(&format!(r#"<meta name="{}" content="{}">"#, name, content));
            html.push('\n');
        }
        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html
    }
}

/// Document frame around a page's sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Head content.
    pub head: HeadContent,
    /// HTML before the page content (opening body, wrapper elements).
    pub body_start: String,
    /// HTML after the page content (closing tags).
    pub body_end: String,
}

impl Shell {
    /// Create a shell with the default body frame.
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n<main class=\"page\">\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render a full document around the given page content.
    pub fn render(&self, content: &str) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html.push_str(content);
        html.push('\n');
        html.push_str(&self.body_end);
        html
    }
}

/// Styles shared by the catalog, brand, and product pages.
pub const PAGE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #fff; color: #111; }
.page { max-width: 960px; margin: 0 auto; padding: 3rem 1rem; }
.page h1 { font-size: 1.5rem; font-weight: 600; letter-spacing: -0.01em; margin: 0 0 2rem; }
a { color: inherit; }

/* Search box */
.search-box { position: relative; max-width: 24rem; margin-bottom: 1.5rem; }
.search-box input { width: 100%; padding: 0.5rem 2.5rem 0.5rem 0.75rem; border: 1px solid #ddd; border-radius: 6px; }
.search-box button { position: absolute; inset: 0 0 0 auto; border: none; background: none; padding: 0 0.75rem; color: #888; cursor: pointer; }

/* Virtualized list */
.list-header, .product-row { display: grid; grid-template-columns: 80px 1fr 1fr; align-items: center; border-bottom: 1px solid #eee; }
.list-header { position: sticky; top: 0; background: #fff; font-weight: 500; z-index: 10; }
.list-header .cell, .product-row .cell { padding: 0.5rem; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.list-viewport { overflow-y: auto; }
.list-spacer { position: relative; margin: 0; padding: 0; list-style: none; }
.product-row { position: absolute; left: 0; right: 0; }
.product-row.last-row { border-bottom: none; }
.row-thumb { width: 40px; height: 40px; border-radius: 4px; object-fit: contain; }
.row-thumb-placeholder { background: #f0f0f0; }

/* Status states */
.status-error { color: #b3261e; }
.status-muted { color: #6b7280; }
.skeleton { background: #eee; border-radius: 4px; animation: pulse 1.5s ease-in-out infinite; }
@keyframes pulse { 50% { opacity: 0.5; } }

/* Detail page */
.product-detail { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; padding: 1.5rem 0; }
.carousel { position: relative; }
.carousel-frame { height: 24rem; background: #f6f6f6; display: flex; align-items: center; justify-content: center; overflow: hidden; }
.carousel-frame img { max-width: 100%; max-height: 100%; object-fit: contain; }
.carousel-prev, .carousel-next { position: absolute; top: 50%; transform: translateY(-50%); border: none; background: rgba(255,255,255,0.8); padding: 0.4rem 0.6rem; cursor: pointer; }
.carousel-prev { left: 0; }
.carousel-next { right: 0; }
.carousel-dots { position: absolute; bottom: 0.5rem; left: 50%; transform: translateX(-50%); display: flex; gap: 0.4rem; }
.carousel-dots .dot { width: 8px; height: 8px; border-radius: 50%; border: none; background: #bbb; cursor: pointer; }
.carousel-dots .dot.current { background: #111; }
.detail-brand { font-weight: 500; }
.detail-category { color: #6b7280; }
.detail-name { font-size: 1.75rem; font-weight: 500; margin: 0.25rem 0 0.5rem; }
.price-line { display: flex; gap: 0.5rem; align-items: baseline; }
.price-compare-at { color: #6b7280; text-decoration: line-through; }
.price-current { font-weight: 600; }
.detail-section { margin-top: 1.5rem; }
.detail-section h2 { font-size: 1rem; font-weight: 500; margin: 0 0 0.5rem; }
.feature-list { margin: 0 0 0 1rem; padding: 0; }
.chip-row { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.chip { border: 1px solid #ddd; background: #f7f7f7; border-radius: 4px; padding: 0.2rem 0.5rem; font-size: 0.8rem; }
.chip.unavailable { color: #9ca3af; background: #f0f0f0; border-color: #eee; }
.variant-group { margin-bottom: 1rem; }
.variant-title { font-size: 0.9rem; font-weight: 500; display: block; margin-bottom: 0.4rem; }
"#;
