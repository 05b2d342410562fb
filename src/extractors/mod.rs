//! Listing field extractors
//!
//! Each module reads one field family from a parsed listing page. None of
//! them fail: missing or malformed markup degrades to the field's sentinel.

mod address;
mod contact;
mod features;
mod hours;
mod menu;
mod summary;
mod text;

pub use address::*;
pub use contact::*;
pub use features::*;
pub use hours::*;
pub use menu::*;
pub use summary::*;
pub use text::*;

use scraper::Html;
use tracing::debug;

use crate::listing::ListingRecord;

/// Extract every field of a listing from an already parsed document
pub fn extract_listing(document: &Html, base_url: &str) -> ListingRecord {
    let record = ListingRecord {
        name: extract_name(document),
        address: extract_address(document),
        telephone: extract_telephone(document),
        website: extract_website(document),
        price_range: extract_price_range(document),
        menu_link: extract_menu_link(document, base_url),
        hours: extract_hours(document),
        other_features: extract_other_features(document),
    };

    debug!(
        name = %record.name,
        structured_address = record.address.is_structured(),
        phone = record.telephone.is_valid(),
        hours = record.hours.is_available(),
        features = record.other_features.len(),
        "listing extracted"
    );

    record
}

/// Parse raw HTML and extract the listing
pub fn extract_listing_from_html(html: &str, base_url: &str) -> ListingRecord {
    let document = Html::parse_document(html);
    extract_listing(&document, base_url)
}

impl ListingRecord {
    pub fn from_document(document: &Html, base_url: &str) -> Self {
        extract_listing(document, base_url)
    }
}
