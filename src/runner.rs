//! Orchestration around the extractor
//!
//! The prompt loop collects extra listing links from the user, then each link
//! is fetched and extracted on its own. Nothing is shared between listings.

use std::io::{BufRead, Write};

use scraper::Html;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::extractors::extract_listing;
use crate::fetch::PageSource;
use crate::listing::ListingRecord;
use crate::urls::validate_listing_url;

pub const PROMPT_MORE: &str = "Do you wish to enter more Yelp Businesses(Y/N)?:";
pub const PROMPT_LINK: &str = "Please enter link:";
pub const PROMPT_ADD_MORE: &str = "Do you wish to add more(Y/N):";
pub const PROMPT_REENTER: &str = "Link is invalid. Do you wish to reenter (Y/N):";
pub const MSG_NOT_A_LISTING: &str = "Please enter a Yelp Business URL";

/// Result of processing one listing URL
#[derive(Debug, Serialize)]
pub struct ListingOutcome {
    pub url: String,
    #[serde(flatten)]
    pub result: OutcomeResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeResult {
    Listing(ListingRecord),
    Error(String),
}

impl ListingOutcome {
    pub fn listing(&self) -> Option<&ListingRecord> {
        match &self.result {
            OutcomeResult::Listing(record) => Some(record),
            OutcomeResult::Error(_) => None,
        }
    }
}

#[derive(Clone, Copy)]
enum Step {
    AskMore,
    AskLink,
}

/// Interactive collection of additional listing links
///
/// Appends every accepted link to `links`. Stops when the user answers
/// anything but `Y` or input ends.
pub fn collect_links<R, W, S>(
    input: &mut R,
    output: &mut W,
    source: &S,
    links: &mut Vec<String>,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: PageSource + ?Sized,
{
    let mut step = Step::AskMore;
    let mut prompt = PROMPT_MORE;

    loop {
        match step {
            Step::AskMore => {
                match ask(input, output, prompt)? {
                    Some(answer) if answer == "Y" => step = Step::AskLink,
                    _ => return Ok(()),
                }
            }
            Step::AskLink => {
                let Some(link) = ask(input, output, PROMPT_LINK)? else {
                    return Ok(());
                };

                if validate_listing_url(&link).is_err() {
                    writeln!(output, "{MSG_NOT_A_LISTING}")?;
                    continue;
                }

                if source.is_reachable(&link) {
                    info!(url = %link, "listing link added");
                    links.push(link);
                    prompt = PROMPT_ADD_MORE;
                } else {
                    warn!(url = %link, "listing link unreachable");
                    prompt = PROMPT_REENTER;
                }
                step = Step::AskMore;
            }
        }
    }
}

// Prompt and read one trimmed line; None at end of input
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Fetch and extract every link independently
pub fn run_listings<S>(links: &[String], source: &S, base_url: &str) -> Vec<ListingOutcome>
where
    S: PageSource + ?Sized,
{
    links
        .iter()
        .map(|url| {
            let result = match source.fetch(url) {
                Ok(html) => {
                    let document = Html::parse_document(&html);
                    let record = extract_listing(&document, base_url);
                    info!(url = %url, name = %record.name, "listing processed");
                    OutcomeResult::Listing(record)
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "listing skipped");
                    OutcomeResult::Error(e.to_string())
                }
            };
            ListingOutcome {
                url: url.clone(),
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticSource;
    use std::io::Cursor;

    const CHEGO: &str = "http://www.yelp.com/biz/chego-los-angeles-5";
    const SALT: &str = "http://www.yelp.com/biz/salt-and-straw-los-angeles";

    fn source() -> StaticSource {
        StaticSource::new()
            .with_page(CHEGO, r#"<h1 class="biz-page-title">Chego</h1>"#)
            .with_page(SALT, r#"<h1 class="biz-page-title">Salt &amp; Straw</h1>"#)
    }

    fn collect(script: &str) -> (Vec<String>, String) {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let mut links = Vec::new();
        collect_links(&mut input, &mut output, &source(), &mut links).unwrap();
        (links, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_declining_adds_nothing() {
        let (links, output) = collect("N\n");
        assert!(links.is_empty());
        assert_eq!(output, PROMPT_MORE);
    }

    #[test]
    fn test_adds_reachable_links() {
        let script = format!("Y\n{CHEGO}\nY\n{SALT}\nN\n");
        let (links, output) = collect(&script);

        assert_eq!(links, vec![CHEGO.to_string(), SALT.to_string()]);
        assert_eq!(output.matches(PROMPT_ADD_MORE).count(), 2);
    }

    #[test]
    fn test_non_listing_url_reprompts_for_link() {
        let script = format!("Y\nhttp://example.com/\n{CHEGO}\nN\n");
        let (links, output) = collect(&script);

        assert_eq!(links, vec![CHEGO.to_string()]);
        assert!(output.contains(MSG_NOT_A_LISTING));
        assert_eq!(output.matches(PROMPT_LINK).count(), 2);
    }

    #[test]
    fn test_unreachable_link_offers_reentry() {
        let missing = "http://www.yelp.com/biz/closed-forever";
        let script = format!("Y\n{missing}\nY\n{CHEGO}\nN\n");
        let (links, output) = collect(&script);

        assert_eq!(links, vec![CHEGO.to_string()]);
        assert!(output.contains(PROMPT_REENTER));
    }

    #[test]
    fn test_end_of_input_stops() {
        let (links, _) = collect("Y\n");
        assert!(links.is_empty());
    }

    #[test]
    fn test_run_listings_isolates_failures() {
        let links = vec![
            CHEGO.to_string(),
            "http://www.yelp.com/biz/missing".to_string(),
            SALT.to_string(),
        ];
        let outcomes = run_listings(&links, &source(), "http://www.yelp.com");

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].listing().unwrap().name, "Chego");
        assert!(outcomes[1].listing().is_none());
        assert_eq!(outcomes[2].listing().unwrap().name, "Salt & Straw");

        let json = serde_json::to_value(&outcomes).unwrap();
        assert_eq!(json[0]["listing"]["name"], "Chego");
        assert!(json[1]["error"].as_str().unwrap().contains("404"));
    }
}
