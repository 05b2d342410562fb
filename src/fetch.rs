//! Page retrieval
//!
//! `PageSource` is the seam between the runner and the network so listings
//! can be processed from local files or canned pages as well.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::ScrapeConfig;
use crate::error::{ListingError, Result};

pub trait PageSource {
    /// Raw HTML of the page at `url`
    fn fetch(&self, url: &str) -> Result<String>;

    /// A link is reachable when its page can be fetched
    fn is_reachable(&self, url: &str) -> bool {
        self.fetch(url).is_ok()
    }
}

/// Blocking HTTP client (ureq)
pub struct HttpSource {
    agent: ureq::Agent,
    user_agent: String,
}

impl HttpSource {
    pub fn new(config: &ScrapeConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();

        Self {
            agent,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching listing page");

        let response = self
            .agent
            .get(url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(status) => ListingError::Status {
                    url: url.to_string(),
                    status,
                },
                other => ListingError::Fetch {
                    url: url.to_string(),
                    reason: other.to_string(),
                },
            });

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!(url, error = %e, "fetch failed");
                return Err(e);
            }
        };

        response
            .into_body()
            .read_to_string()
            .map_err(|e| ListingError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Pages held in memory, keyed by URL
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    pages: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.insert(url.into(), html.into());
    }
}

impl PageSource for StaticSource {
    fn fetch(&self, url: &str) -> Result<String> {
        self.pages.get(url).cloned().ok_or_else(|| ListingError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source() {
        let source = StaticSource::new().with_page("http://www.yelp.com/biz/a", "<h1>A</h1>");

        assert_eq!(source.fetch("http://www.yelp.com/biz/a").unwrap(), "<h1>A</h1>");
        assert!(source.is_reachable("http://www.yelp.com/biz/a"));
        assert!(!source.is_reachable("http://www.yelp.com/biz/b"));
        assert!(matches!(
            source.fetch("http://www.yelp.com/biz/b"),
            Err(ListingError::Status { status: 404, .. })
        ));
    }

    #[test]
    fn test_http_source_reports_connection_failure() {
        let config = ScrapeConfig {
            timeout_secs: 2,
            ..ScrapeConfig::default()
        };
        let source = HttpSource::new(&config);

        // nothing listens on the discard port locally
        let result = source.fetch("http://127.0.0.1:9/biz/nothing");
        assert!(matches!(result, Err(ListingError::Fetch { .. })));
    }
}
