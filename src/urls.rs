//! Business listing URL validation

use url::Url;

use crate::error::{ListingError, Result};

const LISTING_HOSTS: [&str; 2] = ["www.yelp.com", "yelp.com"];
const LISTING_PATH_PREFIX: &str = "/biz/";

/// Accept only http(s) links to a business page, e.g. `http://www.yelp.com/biz/chego-los-angeles-5`
pub fn validate_listing_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|e| ListingError::InvalidUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ListingError::NotAListing(trimmed.to_string()));
    }

    let host = url.host_str().unwrap_or("").to_lowercase();
    if !LISTING_HOSTS.contains(&host.as_str()) {
        return Err(ListingError::NotAListing(trimmed.to_string()));
    }

    match url.path().strip_prefix(LISTING_PATH_PREFIX) {
        Some(slug) if !slug.trim_matches('/').is_empty() => Ok(url),
        _ => Err(ListingError::NotAListing(trimmed.to_string())),
    }
}

pub fn is_listing_url(input: &str) -> bool {
    validate_listing_url(input).is_ok()
}
