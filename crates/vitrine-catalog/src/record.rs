//! Product record types as served by the catalog API.

use serde::{Deserialize, Serialize};

use crate::variants::{parse_variants, Variant};

/// A single product row from the catalog API.
///
/// The backend serves CSV rows as string maps, so every field arrives as a
/// string and defaults when absent rather than failing the whole payload.
/// The list-valued fields (`key_features`, `image_urls`, `colors`) are
/// `|`-delimited strings; `variants` is a JSON-encoded array. Treat all of
/// them as a wire format to parse defensively, not as an internal model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Slug used in product URLs and as the stable row identity.
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    /// Price kept as the wire string and displayed verbatim.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub currency: String,
    /// Original price before discount, when the source provides one.
    #[serde(default)]
    pub compare_at_price: Option<String>,
    #[serde(default)]
    pub description: String,
    /// `|`-delimited feature bullet points.
    #[serde(default)]
    pub key_features: String,
    /// `|`-delimited image URLs; the first one is the listing thumbnail.
    #[serde(default)]
    pub image_urls: String,
    /// `|`-delimited color names.
    #[serde(default)]
    pub colors: String,
    /// External video link, empty when the product has none.
    #[serde(default)]
    pub video_url: String,
    /// JSON-encoded variant groups, decoded by [`ProductRecord::variant_groups`].
    #[serde(default)]
    pub variants: Option<String>,
}

/// Split a `|`-delimited field, dropping empty segments.
///
/// `"red|blue|"` yields `["red", "blue"]`; the empty string yields nothing.
pub fn split_delimited(field: &str) -> Vec<&str> {
    field.split('|').filter(|s| !s.is_empty()).collect()
}

impl ProductRecord {
    /// Image URLs for the carousel, in source order.
    pub fn images(&self) -> Vec<&str> {
        split_delimited(&self.image_urls)
    }

    /// Thumbnail shown in list rows.
    pub fn primary_image(&self) -> Option<&str> {
        self.images().first().copied()
    }

    /// Feature bullet points.
    pub fn features(&self) -> Vec<&str> {
        split_delimited(&self.key_features)
    }

    /// Color names for the detail page chips.
    pub fn color_options(&self) -> Vec<&str> {
        split_delimited(&self.colors)
    }

    /// Variant groups decoded from the JSON field.
    ///
    /// An absent, blank, or malformed field yields an empty list; a bad
    /// variants column never fails the record's render.
    pub fn variant_groups(&self) -> Vec<Variant> {
        parse_variants(self.variants.as_deref().unwrap_or_default())
    }

    /// Compare-at price to display, present only when the field parses as a
    /// positive number.
    pub fn compare_at_display(&self) -> Option<&str> {
        let raw = self.compare_at_price.as_deref()?;
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|p| *p > 0.0)
            .map(|_| raw)
    }

    /// Price line rendered on listing and detail pages.
    pub fn price_display(&self) -> String {
        format!("{} {}", self.currency, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(field: &str, value: &str) -> ProductRecord {
        let json = format!(r#"{{"{}": "{}"}}"#, field, value);
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_split_delimited_drops_empty_segments() {
        assert_eq!(split_delimited("red|blue|"), vec!["red", "blue"]);
        assert_eq!(split_delimited("|red||blue"), vec!["red", "blue"]);
    }

    #[test]
    fn test_split_delimited_empty_string() {
        assert!(split_delimited("").is_empty());
    }

    #[test]
    fn test_split_delimited_single_value() {
        assert_eq!(split_delimited("red"), vec!["red"]);
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let record: ProductRecord = serde_json::from_str(r#"{"name": "Air Max"}"#).unwrap();
        assert_eq!(record.name, "Air Max");
        assert_eq!(record.brand, "");
        assert_eq!(record.compare_at_price, None);
        assert!(record.images().is_empty());
        assert!(record.variant_groups().is_empty());
    }

    #[test]
    fn test_primary_image() {
        let record = record_with("image_urls", "a.jpg|b.jpg");
        assert_eq!(record.primary_image(), Some("a.jpg"));
        assert_eq!(ProductRecord::default().primary_image(), None);
    }

    #[test]
    fn test_features_and_colors() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"key_features": "light|durable|", "colors": "Red|Blue"}"#,
        )
        .unwrap();
        assert_eq!(record.features(), vec!["light", "durable"]);
        assert_eq!(record.color_options(), vec!["Red", "Blue"]);
    }

    #[test]
    fn test_compare_at_display_requires_positive_number() {
        let record = record_with("compare_at_price", "129.99");
        assert_eq!(record.compare_at_display(), Some("129.99"));

        assert_eq!(record_with("compare_at_price", "0").compare_at_display(), None);
        assert_eq!(record_with("compare_at_price", "n/a").compare_at_display(), None);
        assert_eq!(ProductRecord::default().compare_at_display(), None);
    }

    #[test]
    fn test_price_display() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"price": "89.90", "currency": "EUR"}"#).unwrap();
        assert_eq!(record.price_display(), "EUR 89.90");
    }

    #[test]
    fn test_variant_groups_malformed_json_is_empty() {
        let record = record_with("variants", "not json");
        assert!(record.variant_groups().is_empty());
    }
}
