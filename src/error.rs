//! Errors raised around the extraction core
//!
//! Field extraction itself never fails; these cover URL handling, fetching,
//! configuration and output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("not a business listing URL: {0}")]
    NotAListing(String),

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ListingError>;
