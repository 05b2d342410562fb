//! Postal address parsing
//!
//! `street, city, STATE ZIP` is decomposed into its four parts. Anything else
//! is returned as raw text with the commas dropped.

use scraper::Html;
use tracing::debug;

use super::text::first_text;
use crate::listing::Address;

pub const ADDRESS_SELECTOR: &str = "address";

/// Address of the business from the `<address>` element
pub fn extract_address(document: &Html) -> Address {
    parse_address(&first_text(document, ADDRESS_SELECTOR))
}

/// Split normalized address text into street/city/state/zip when possible
pub fn parse_address(text: &str) -> Address {
    let segments: Vec<&str> = text.split(',').collect();
    if segments.len() != 3 {
        debug!(segments = segments.len(), "address kept raw");
        return Address::Raw(segments.concat());
    }

    let tokens: Vec<&str> = segments[2].split_whitespace().collect();
    match tokens.as_slice() {
        [state, zip] => Address::Structured {
            street: segments[0].to_string(),
            city: segments[1].to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
        },
        _ => {
            debug!(tokens = tokens.len(), "state/zip segment has unexpected shape");
            Address::Raw(segments.concat())
        }
    }
}
