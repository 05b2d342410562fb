//! Scrape configuration
//!
//! Read from an optional JSON file; every key falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ListingError, Result};

pub const DEFAULT_BASE_URL: &str = "http://www.yelp.com";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Listings processed when none are given on the command line
pub const DEFAULT_LISTINGS: [&str; 6] = [
    "http://www.yelp.com/biz/salt-and-straw-los-angeles",
    "http://www.yelp.com/biz/smittys-famous-fish-and-chicken-culver-city",
    "http://www.yelp.com/biz/zankou-chicken-los-angeles-7",
    "http://www.yelp.com/biz/chego-los-angeles-5",
    "http://www.yelp.com/biz/ambala-dhaba-homestyle-indian-los-angeles",
    "http://www.yelp.com/biz/colony-cafe-miami-beach",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Site origin used to qualify relative links
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub listings: Vec<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            listings: DEFAULT_LISTINGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ScrapeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScrapeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ListingError::Config("timeout_secs must be positive".into()));
        }
        match url::Url::parse(&self.base_url) {
            Ok(u) if u.scheme() == "http" || u.scheme() == "https" => Ok(()),
            _ => Err(ListingError::Config(format!(
                "base_url is not an http(s) URL: {}",
                self.base_url
            ))),
        }
    }
}
