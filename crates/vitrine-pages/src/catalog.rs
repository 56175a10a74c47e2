//! Catalog (home) page: every product in a searchable virtualized table.

use vitrine_catalog::{search_products, ProductRecord};
use vitrine_data::ProductSource;
use vitrine_list::{list_height, ListViewport, RowGeometry};

use crate::lifecycle::{FetchLifecycle, FetchPhase, FetchSubject};
use crate::sections::{list, search, status};
use crate::shell::{HeadContent, Shell, PAGE_STYLES};

/// Page chrome above the list (heading, search box), in pixels.
const CHROME_OFFSET: u32 = 240;

/// Viewport height used until the first resize event arrives.
const DEFAULT_LIST_HEIGHT: u32 = 600;

/// State of the catalog listing page.
///
/// Owns one fetch lifecycle, the search box text, the applied query, and
/// the scroll viewport. All state dies with the page view; nothing is
/// persisted or shared across navigations.
#[derive(Debug)]
pub struct CatalogPage {
    lifecycle: FetchLifecycle<Vec<ProductRecord>>,
    search_input: String,
    applied_query: String,
    viewport: ListViewport,
}

impl Default for CatalogPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogPage {
    pub fn new() -> Self {
        Self {
            lifecycle: FetchLifecycle::new(FetchSubject::ProductList),
            search_input: String::new(),
            applied_query: String::new(),
            viewport: ListViewport::new(RowGeometry::default(), DEFAULT_LIST_HEIGHT),
        }
    }

    /// Fetch the full product list. One fetch per mount; calling again
    /// supersedes any in-flight request via the lifecycle token.
    pub async fn load<S: ProductSource + ?Sized>(&mut self, source: &S) {
        let token = self.lifecycle.begin();
        let result = source.list_products(None).await;
        self.lifecycle.settle(token, result);
    }

    /// Track the search box text without filtering yet.
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Apply the current search box text (Enter key or the search button).
    pub fn apply_search(&mut self) {
        self.applied_query = self.search_input.clone();
    }

    /// The query the visible list is currently filtered by.
    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    /// Loaded records with the applied filter, in server order.
    pub fn visible_products(&self) -> Vec<ProductRecord> {
        match self.lifecycle.loaded() {
            Some(products) => search_products(products, &self.applied_query),
            None => Vec::new(),
        }
    }

    /// Scroll the list viewport; only the mounted row window changes.
    pub fn handle_scroll(&mut self, scroll_top: u32) {
        let len = self.visible_products().len();
        self.viewport.set_scroll_top(scroll_top, len);
    }

    /// Recompute the list height from the window height. Resizing re-derives
    /// the visible range only; it never re-fetches.
    pub fn handle_resize(&mut self, window_height: u32) {
        let len = self.visible_products().len();
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
                status::render_empty("No products found.")
            }
            FetchPhase::Loaded(products) => {
                let filtered = search_products(products, &self.applied_query);
                if filtered.is_empty() {
                    status::render_no_match(&self.applied_query)
                } else {
                    list::render_list(&filtered, &self.viewport)
                }
            }
        };

        let shell = Shell::new(
            HeadContent::new("Products | Vitrine")
                .with_meta("viewport", "width=device-width, initial-scale=1")
                .with_style(PAGE_STYLES),
        );
        shell.render(&format!(
            "<h1>Products</h1>\n{}\n{}",
            search::render_search_box(&self.search_input),
            content
        ))
    }
}
