//! Amenity list ("Delivery: No", "Takes Reservations: Yes", ...)
//!
//! Labels (`dt`) and values (`dd`) are paired by position inside the first
//! amenity block. When the counts differ, only the common prefix is paired.

use indexmap::IndexMap;
use scraper::{ElementRef, Html};
use tracing::warn;

use super::text::{raw_text, select_first, select_within};

pub const FEATURES_SELECTOR: &str = "div.short-def-list";

pub fn extract_other_features(document: &Html) -> IndexMap<String, String> {
    match select_first(document, FEATURES_SELECTOR) {
        Some(block) => parse_feature_block(block),
        None => IndexMap::new(),
    }
}

pub fn parse_feature_block(block: ElementRef<'_>) -> IndexMap<String, String> {
    let labels = select_within(block, "dt");
    let values = select_within(block, "dd");

    if labels.len() != values.len() {
        warn!(
            labels = labels.len(),
            values = values.len(),
            "amenity labels and values differ in count, pairing common prefix"
        );
    }

    labels
        .into_iter()
        .zip(values)
        .map(|(label, value)| (clean(label), clean(value)))
        .collect()
}

fn clean(element: ElementRef<'_>) -> String {
    raw_text(element).replace('\n', " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_paired_in_order() {
        let html = r#"
        <div class="short-def-list">
            <dl>
                <dt class="attribute-key">
                    Takes Reservations
                </dt>
                <dd>
                    No
                </dd>
            </dl>
            <dl>
                <dt class="attribute-key">Delivery</dt>
                <dd>Yes</dd>
            </dl>
            <dl>
                <dt class="attribute-key">Good For</dt>
                <dd>Lunch,
                    Dinner</dd>
            </dl>
        </div>
        "#;

        let document = Html::parse_document(html);
        let features = extract_other_features(&document);

        let keys: Vec<&str> = features.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Takes Reservations", "Delivery", "Good For"]);
        assert_eq!(features["Takes Reservations"], "No");
        assert_eq!(features["Delivery"], "Yes");
        assert!(features["Good For"].starts_with("Lunch,"));
        assert!(!features["Good For"].contains('\n'));
    }

    #[test]
    fn test_no_amenity_block() {
        let document = Html::parse_document("<dl><dt>Delivery</dt><dd>Yes</dd></dl>");
        assert!(extract_other_features(&document).is_empty());
    }

    #[test]
    fn test_mismatched_counts_pair_common_prefix() {
        let html = r#"
        <div class="short-def-list">
            <dl><dt>Parking</dt><dd>Street</dd></dl>
            <dl><dt>Wi-Fi</dt></dl>
        </div>
        "#;

        let document = Html::parse_document(html);
        let features = extract_other_features(&document);
        assert_eq!(features.len(), 1);
        assert_eq!(features["Parking"], "Street");
    }
}
