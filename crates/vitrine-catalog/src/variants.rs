//! Variant groups encoded as JSON inside a product record.

use serde::{Deserialize, Serialize};

/// One selectable option inside a variant group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantOption {
    /// Display value (e.g. "Large", "Blue").
    #[serde(default)]
    pub value: String,
    /// Options are purchasable unless the source marks them otherwise.
    #[serde(default = "default_available")]
    pub available: bool,
    /// Per-option price; `null` or absent means no separate price.
    #[serde(default)]
    pub price: Option<f64>,
}

fn default_available() -> bool {
    true
}

impl VariantOption {
    /// Option price to display, present only when positive.
    pub fn price_display(&self) -> Option<f64> {
        self.price.filter(|p| *p > 0.0)
    }
}

/// A variant group (e.g. "Size") with its options in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub options: Vec<VariantOption>,
}

/// Decode the JSON-encoded variants field of a product record.
///
/// Blank input or JSON that does not decode as a variant array yields an
/// empty list rather than an error; a malformed field degrades to "no
/// variants" instead of failing the whole record.
pub fn parse_variants(raw: &str) -> Vec<Variant> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants_blank_is_empty() {
        assert!(parse_variants("").is_empty());
        assert!(parse_variants("   ").is_empty());
    }

    #[test]
    fn test_parse_variants_invalid_json_is_empty() {
        assert!(parse_variants("{not json").is_empty());
        assert!(parse_variants("42").is_empty());
        assert!(parse_variants(r#"{"title": "Size"}"#).is_empty());
    }

    #[test]
    fn test_parse_variants_full_shape() {
        let raw = r#"[
            {"title": "Size", "options": [
                {"value": "S", "available": true, "price": null},
                {"value": "M", "available": false, "price": 12.5}
            ]}
        ]"#;
        let variants = parse_variants(raw);
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].title, "Size");
        assert_eq!(variants[0].options.len(), 2);
        assert!(variants[0].options[0].available);
        assert_eq!(variants[0].options[0].price, None);
        assert!(!variants[0].options[1].available);
        assert_eq!(variants[0].options[1].price, Some(12.5));
    }

    #[test]
    fn test_parse_variants_availability_defaults_true() {
        let variants = parse_variants(r#"[{"title": "Fit", "options": [{"value": "Slim"}]}]"#);
        assert!(variants[0].options[0].available);
        assert_eq!(variants[0].options[0].price, None);
    }

    #[test]
    fn test_price_display_requires_positive() {
        let option: VariantOption = serde_json::from_str(r#"{"value": "S", "price": 0.0}"#).unwrap();
        assert_eq!(option.price_display(), None);

        let option: VariantOption = serde_json::from_str(r#"{"value": "M", "price": 9.9}"#).unwrap();
        assert_eq!(option.price_display(), Some(9.9));
    }
}
