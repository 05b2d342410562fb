//! Business name and price range

use scraper::Html;
use tracing::debug;

use super::text::first_text;

pub const NAME_SELECTOR: &str = "h1.biz-page-title";
pub const PRICE_SELECTOR: &str = "dd.price-description";

/// Page title of the business, empty when the heading is missing
pub fn extract_name(document: &Html) -> String {
    let name = first_text(document, NAME_SELECTOR);
    if name.is_empty() {
        debug!("business name not found");
    }
    name
}

/// Price tier as written on the page (`$$`, `Moderate`, ...)
pub fn extract_price_range(document: &Html) -> String {
    first_text(document, PRICE_SELECTOR)
}
