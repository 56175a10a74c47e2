//! Product detail page: one record with carousel and variants.

use vitrine_catalog::ProductRecord;
use vitrine_data::ProductSource;

use crate::carousel::Carousel;
use crate::lifecycle::{FetchLifecycle, FetchPhase, FetchSubject};
use crate::sections::{detail, status};
use crate::shell::{HeadContent, Shell, PAGE_STYLES};

/// State of the product detail page.
#[derive(Debug)]
pub struct ProductPage {
    slug: String,
    lifecycle: FetchLifecycle<ProductRecord>,
    carousel: Carousel,
}

impl ProductPage {
    /// Create the page for an already URL-decoded product slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            lifecycle: FetchLifecycle::new(FetchSubject::Product),
            carousel: Carousel::default(),
        }
    }

    /// The slug this page shows.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Fetch the record. A 404 becomes the distinguishable "not found"
    /// state; the carousel is reset over the parsed image sequence on
    /// success.
    pub async fn load<S: ProductSource + ?Sized>(&mut self, source: &S) {
        let token = self.lifecycle.begin();
        let result = source.product_by_slug(&self.slug).await;
        if self.lifecycle.settle(token, result) {
            let images = self.lifecycle.loaded().map_or(0, |p| p.images().len());
            self.carousel = Carousel::new(images);
        }
    }

    /// Carousel position, for the dot indicators.
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Show the next image, wrapping past the end.
    pub fn next_image(&mut self) {
        self.carousel.next();
    }

    /// Show the previous image, wrapping past the start.
    pub fn prev_image(&mut self) {
        self.carousel.prev();
    }

    /// Jump to a specific image.
    pub fn select_image(&mut self, index: usize) {
        self.carousel.select(index);
    }

    /// Whether the record could not be found (distinct from generic failure).
    pub fn is_not_found(&self) -> bool {
        self.lifecycle.failure().is_some_and(|f| f.not_found)
    }

    /// Abandon any in-flight fetch on navigation away.
    pub fn unmount(&mut self) {
        self.lifecycle.abandon();
    }

    /// Render the page for the current state.
    pub fn render(&self) -> String {
        let (title, content) = match self.lifecycle.phase() {
            FetchPhase::Idle | FetchPhase::Loading => {
                ("Product | Vitrine".to_string(), status::render_detail_skeleton())
            }
            FetchPhase::Failed(failure) => (
                "Product | Vitrine".to_string(),
                status::render_error(&failure.message),
            ),
            FetchPhase::Loaded(product) => (
                format!("{} | Vitrine", product.name),
                detail::render_detail(product, &self.carousel),
            ),
        };

        let shell = Shell::new(
            HeadContent::new(title)
                .with_meta("viewport", "width=device-width, initial-scale=1")
                .with_style(PAGE_STYLES),
        );
        shell.render(&content)
    }
}
