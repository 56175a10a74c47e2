//! Product detail sections: carousel, pricing, features, colors, variants.

use vitrine_catalog::{ProductRecord, Variant};

use super::{html_escape, url_escape};
use crate::carousel::Carousel;

/// Render the full detail article: carousel column plus details column.
pub fn render_detail(product: &ProductRecord, carousel: &Carousel) -> String {
    format!(
        r#"<article class="product-detail" data-section="detail">
    <div>
{carousel}
    </div>
    <div>
{heading}
{description}
{features}
{colors}
{video}
{variants}
    </div>
</article>"#,
        carousel = render_carousel(product, carousel),
        heading = render_heading(product),
        description = render_description(product),
        features = render_features(product),
        colors = render_colors(product),
        video = render_video(product),
        variants = render_variants(product),
    )
}

/// Image carousel over the parsed image URLs.
///
/// Navigation buttons and dot indicators only render when there is more
/// than one image; with none at all the carousel is omitted entirely.
fn render_carousel(product: &ProductRecord, carousel: &Carousel) -> String {
    let images = product.images();
    if images.is_empty() {
        return String::new();
    }

    let index = carousel.index().min(images.len() - 1);
    let current = images[index];
    let frame = format!(
        r#"        <div class="carousel-frame">
            <img src="{src}" alt="{alt}">
        </div>"#,
        src = html_escape(current),
        alt = html_escape(&format!(
            "{} - image {} of {}",
            product.name,
            index + 1,
            images.len()
        )),
    );

    if !carousel.has_multiple() {
        return format!(
            "        <div class=\"carousel\" role=\"region\" aria-roledescription=\"carousel\">\n{}\n        </div>",
            frame
        );
    }

    let dots: String = (0..images.len())
        .map(|i| {
            let current_class = if i == index { " current" } else { "" };
            format!(
                r#"<button type="button" class="dot{current_class}" aria-label="Go to image {label}"></button>"#,
                current_class = current_class,
                label = i + 1,
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    format!(
        r#"        <div class="carousel" role="region" aria-roledescription="carousel">
{frame}
            <button type="button" class="carousel-prev" aria-label="Previous image">&#8249;</button>
            <button type="button" class="carousel-next" aria-label="Next image">&#8250;</button>
            <div class="carousel-dots">
                {dots}
            </div>
        </div>"#,
        frame = frame,
        dots = dots,
    )
}

fn render_heading(product: &ProductRecord) -> String {
    let category = if product.category.is_empty() {
        String::new()
    } else {
        format!(
            r#" <span class="detail-category">&middot; {}</span>"#,
            html_escape(&product.category)
        )
    };

    let compare_at = match product.compare_at_display() {
        Some(raw) => format!(
            r#"<span class="price-compare-at">{} {}</span> "#,
            html_escape(&product.currency),
            html_escape(raw)
        ),
        None => String::new(),
    };

    format!(
        r#"        <div>
            <a class="detail-brand" href="/brand/{brand_slug}">{brand}</a>{category}
            <h1 class="detail-name">{name}</h1>
            <p class="price-line">{compare_at}<span class="price-current">{price}</span></p>
        </div>"#,
        brand_slug = url_escape(&product.brand),
        brand = html_escape(&product.brand),
        category = category,
        name = html_escape(&product.name),
        compare_at = compare_at,
        price = html_escape(&product.price_display()),
    )
}

fn render_description(product: &ProductRecord) -> String {
    if product.description.is_empty() {
        return String::new();
    }
    format!(
        r#"        <div class="detail-section">
            <h2>Description</h2>
            <p>{}</p>
        </div>"#,
        html_escape(&product.description)
    )
}

fn render_features(product: &ProductRecord) -> String {
    let features = product.features();
    if features.is_empty() {
        return String::new();
    }
    let items: String = features
        .iter()
        .map(|f| format!("                <li>{}</li>", html_escape(f)))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"        <div class="detail-section">
            <h2>Key Features</h2>
            <ul class="feature-list">
{items}
            </ul>
        </div>"#,
        items = items
    )
}

fn render_colors(product: &ProductRecord) -> String {
    let colors = product.color_options();
    if colors.is_empty() {
        return String::new();
    }
    let chips: String = colors
        .iter()
        .map(|c| format!(r#"<span class="chip">{}</span>"#, html_escape(c.trim())))
        .collect::<Vec<_>>()
        .join("\n                ");
    format!(
        r#"        <div class="detail-section">
            <h2>Colors</h2>
            <div class="chip-row">
                {chips}
            </div>
        </div>"#,
        chips = chips
    )
}

fn render_video(product: &ProductRecord) -> String {
    if product.video_url.is_empty() {
        return String::new();
    }
    format!(
        r#"        <div class="detail-section">
            <h2>Video</h2>
            <a href="{}" target="_blank" rel="noopener noreferrer">Watch video</a>
        </div>"#,
        html_escape(&product.video_url)
    )
}

fn render_variants(product: &ProductRecord) -> String {
    let variants = product.variant_groups();
    if variants.is_empty() {
        return String::new();
    }
    let groups: String = variants
        .iter()
        .map(|v| render_variant_group(v, &product.currency))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"        <div class="detail-section">
            <h2>Variants</h2>
{groups}
        </div>"#,
        groups = groups
    )
}

fn render_variant_group(variant: &Variant, currency: &str) -> String {
    let options: String = variant
        .options
        .iter()
        .map(|option| {
            let unavailable = if option.available {
                ""
            } else {
                r#" <span class="status-muted">(unavailable)</span>"#
            };
            let price = match option.price_display() {
                Some(price) => format!(" <strong>{} {}</strong>", html_escape(currency), price),
                None => String::new(),
            };
            let chip_class = if option.available {
                "chip"
            } else {
                "chip unavailable"
            };
            format!(
                r#"<span class="{chip_class}">{value}{unavailable}{price}</span>"#,
                chip_class = chip_class,
                value = html_escape(&option.value),
                unavailable = unavailable,
                price = price,
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    format!(
        r#"            <div class="variant-group">
                <span class="variant-title">{title}</span>
                <div class="chip-row">
                {options}
                </div>
            </div>"#,
        title = html_escape(&variant.title),
        options = options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> ProductRecord {
        ProductRecord {
            filename: "air-max-90".to_string(),
            name: "Air Max 90".to_string(),
            brand: "Nike".to_string(),
            category: "Sneakers".to_string(),
            price: "129.99".to_string(),
            currency: "USD".to_string(),
            compare_at_price: Some("159.99".to_string()),
            description: "A classic.".to_string(),
            key_features: "Air cushioning|Mesh upper".to_string(),
            image_urls: "a.jpg|b.jpg|c.jpg".to_string(),
            colors: "Red| Blue ".to_string(),
            video_url: "https://video.example.com/air-max".to_string(),
            variants: Some(
                r#"[{"title":"Size","options":[{"value":"9"},{"value":"10","available":false},{"value":"11","price":139.99}]}]"#
                    .to_string(),
            ),
        }
    }

    #[test]
    fn test_detail_renders_all_sections() {
        let product = sample_product();
        let html = render_detail(&product, &Carousel::new(3));

        assert!(html.contains("Air Max 90"));
        assert!(html.contains(r#"href="/brand/Nike""#));
        assert!(html.contains("Sneakers"));
        assert!(html.contains("USD 129.99"));
        assert!(html.contains("USD 159.99"));
        assert!(html.contains("Air cushioning"));
        assert!(html.contains("Watch video"));
        assert!(html.contains("Variants"));
    }

    #[test]
    fn test_carousel_shows_current_image_with_controls() {
        let product = sample_product();
        let mut carousel = Carousel::new(3);
        carousel.next();

        let html = render_carousel(&product, &carousel);
        assert!(html.contains(r#"src="b.jpg""#));
        assert!(html.contains("image 2 of 3"));
        assert!(html.contains("carousel-prev"));
        assert!(html.contains("carousel-next"));
        assert_eq!(html.matches(r#"class="dot"#).count(), 3);
    }

    #[test]
    fn test_carousel_single_image_has_no_controls() {
        let mut product = sample_product();
        product.image_urls = "only.jpg".to_string();

        let html = render_carousel(&product, &Carousel::new(1));
        assert!(html.contains(r#"src="only.jpg""#));
        assert!(!html.contains("carousel-prev"));
        assert!(!html.contains("carousel-dots"));
    }

    #[test]
    fn test_carousel_omitted_without_images() {
        let mut product = sample_product();
        product.image_urls = String::new();

        assert!(render_carousel(&product, &Carousel::new(0)).is_empty());
    }

    #[test]
    fn test_colors_are_trimmed_for_display() {
        let html = render_colors(&sample_product());
        assert!(html.contains(">Blue<"));
        assert!(!html.contains("> Blue <"));
    }

    #[test]
    fn test_unavailable_variant_option_is_marked() {
        let html = render_variants(&sample_product());
        assert_eq!(html.matches("(unavailable)").count(), 1);
        assert!(html.contains("chip unavailable"));
    }

    #[test]
    fn test_variant_option_price_rendered_when_positive() {
        let html = render_variants(&sample_product());
        assert!(html.contains("USD 139.99"));
    }

    #[test]
    fn test_optional_sections_collapse_when_empty() {
        let product = ProductRecord {
            name: "Bare".to_string(),
            brand: "Generic".to_string(),
            ..ProductRecord::default()
        };
        let html = render_detail(&product, &Carousel::new(0));
        assert!(!html.contains("Key Features"));
        assert!(!html.contains("Colors"));
        assert!(!html.contains("Watch video"));
        assert!(!html.contains("Variants"));
    }
}
