//! Element selection and text normalization
//!
//! Thin helpers over the scraper crate. An unparsable selector behaves like a
//! selector that matches nothing, so callers only ever deal with absence.

use scraper::{ElementRef, Html, Selector};

/// First element matching a CSS selector
pub fn select_first<'a>(document: &'a Html, selector_str: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector_str).ok()?;
    document.select(&selector).next()
}

/// All elements matching a CSS selector, in document order
pub fn select_all<'a>(document: &'a Html, selector_str: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector_str) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => vec![],
    }
}

/// Descendants of `element` matching a CSS selector
pub fn select_within<'a>(element: ElementRef<'a>, selector_str: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector_str) {
        Ok(selector) => element.select(&selector).collect(),
        Err(_) => vec![],
    }
}

/// Concatenated text content of an element, untouched
pub fn raw_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Text content of an element with surrounding whitespace removed
pub fn normalize(element: ElementRef<'_>) -> String {
    raw_text(element).trim().to_string()
}

/// Normalized text of the first match, or an empty string when nothing matches
pub fn first_text(document: &Html, selector_str: &str) -> String {
    select_first(document, selector_str)
        .map(normalize)
        .unwrap_or_default()
}

/// Attribute value of the first match
pub fn first_attr(document: &Html, selector_str: &str, attr_name: &str) -> Option<String> {
    select_first(document, selector_str)
        .and_then(|el| el.value().attr(attr_name).map(String::from))
}
