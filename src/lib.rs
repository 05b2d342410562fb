//! Business listing extractor
//!
//! Turns one parsed listing page into a normalized record:
//! - name, address (structured when possible), telephone, website
//! - price range, menu link, weekly hours, amenity list
//!
//! Fetching, URL validation, the interactive prompt loop and report output
//! live beside the extractors and never feed back into them.

pub mod config;
pub mod error;
pub mod extractors;
pub mod ffi;
pub mod fetch;
pub mod listing;
pub mod report;
pub mod runner;
pub mod urls;

pub use error::{ListingError, Result};
pub use extractors::{extract_listing, extract_listing_from_html};
pub use listing::*;
