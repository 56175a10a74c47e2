//! Brand page: one brand's products in the virtualized table.

use vitrine_catalog::ProductRecord;
use vitrine_data::ProductSource;
use vitrine_list::{list_height, ListViewport, RowGeometry};

use crate::lifecycle::{FetchLifecycle, FetchPhase, FetchSubject};
use crate::sections::{html_escape, list, status};
use crate::shell::{HeadContent, Shell, PAGE_STYLES};

/// Page chrome above the list (the larger brand heading), in pixels.
const CHROME_OFFSET: u32 = 280;

/// Viewport height used until the first resize event arrives.
const DEFAULT_LIST_HEIGHT: u32 = 600;

/// State of the brand listing page.
///
/// Filtering happens server-side via the `?brand=` query parameter; the
/// client-side search filter stays an independent operation and this page
/// does not offer it.
#[derive(Debug)]
pub struct BrandPage {
    brand: String,
    lifecycle: FetchLifecycle<Vec<ProductRecord>>,
    viewport: ListViewport,
}

impl BrandPage {
    /// Create the page for an already URL-decoded brand name.
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            lifecycle: FetchLifecycle::new(FetchSubject::ProductList),
            viewport: ListViewport::new(RowGeometry::default(), DEFAULT_LIST_HEIGHT),
        }
    }

    /// The brand this page lists.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Fetch this brand's products. One fetch per mount or brand change; a
    /// newer call supersedes any in-flight request via the lifecycle token.
    pub async fn load<S: ProductSource + ?Sized>(&mut self, source: &S) {
        let token = self.lifecycle.begin();
        let result = source.list_products(Some(&self.brand)).await;
        self.lifecycle.settle(token, result);
    }

    /// Scroll the list viewport.
    pub fn handle_scroll(&mut self, scroll_top: u32) {
        let len = self.lifecycle.loaded().map_or(0, Vec::len);
        self.viewport.set_scroll_top(scroll_top, len);
    }

    /// Recompute the list height from the window height; never re-fetches.
    pub fn handle_resize(&mut self, window_height: u32) {
        let len = self.lifecycle.loaded().map_or(0, Vec::len);
        self.viewport
            .resize(list_height(window_height, CHROME_OFFSET), len);
    }

    /// Abandon any in-flight fetch on navigation away.
    pub fn unmount(&mut self) {
        self.lifecycle.abandon();
    }

    /// Render the page for the current state.
    pub fn render(&self) -> String {
        let content = match self.lifecycle.phase() {
            FetchPhase::Idle | FetchPhase::Loading => status::render_list_skeleton(),
            FetchPhase::Failed(failure) => status::render_error(&failure.message),
            FetchPhase::Loaded(products) if products.is_empty() => {
                status::render_empty("No products for this brand.")
            }
            FetchPhase::Loaded(products) => list::render_list(products, &self.viewport),
        };

        let shell = Shell::new(
            HeadContent::new(format!("{} | Vitrine", self.brand))
                .with_meta("viewport", "width=device-width, initial-scale=1")
                .with_style(PAGE_STYLES),
        );
        shell.render(&format!(
            "<h1>{}</h1>\n{}",
            html_escape(&self.brand),
            content
        ))
    }
}
