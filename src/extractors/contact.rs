//! Telephone number and website link

use scraper::Html;
use tracing::debug;

use super::text::{first_text, raw_text, select_first};
use crate::listing::{Telephone, Website};

pub const PHONE_SELECTOR: &str = "span.biz-phone";
pub const WEBSITE_SELECTOR: &str = "div.biz-website";

const PHONE_DIGITS: usize = 10;
const WEBSITE_LABELS: [&str; 2] = ["Business", "website"];

pub fn extract_telephone(document: &Html) -> Telephone {
    parse_telephone(&first_text(document, PHONE_SELECTOR))
}

/// Keep only the digits; exactly ten of them make a valid number
pub fn parse_telephone(text: &str) -> Telephone {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != PHONE_DIGITS {
        debug!(digits = digits.len(), "telephone rejected");
        return Telephone::Invalid;
    }

    match digits.parse::<u64>() {
        Ok(number) => Telephone::Valid(number),
        Err(_) => Telephone::Invalid,
    }
}

pub fn extract_website(document: &Html) -> Website {
    match select_first(document, WEBSITE_SELECTOR) {
        Some(container) => parse_website(&raw_text(container)),
        None => {
            debug!("website container not found");
            Website::NotProvided
        }
    }
}

/// Rebuild the link from the container text, e.g. `Business website\n chego.com`
pub fn parse_website(text: &str) -> Website {
    let tokens: Vec<&str> = text
        .split_whitespace()
        .skip_while(|token| WEBSITE_LABELS.contains(token))
        .collect();

    if tokens.is_empty() {
        return Website::NotProvided;
    }

    Website::Link(format!("http://www.{}", tokens.concat()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_digit_phone() {
        assert_eq!(parse_telephone("(213) 555-0199 "), Telephone::Valid(2135550199));
        assert_eq!(parse_telephone("310.555.0100"), Telephone::Valid(3105550100));
    }

    #[test]
    fn test_wrong_digit_count_is_invalid() {
        assert_eq!(parse_telephone("+1 (213) 555-0199"), Telephone::Invalid);
        assert_eq!(parse_telephone("555-0199"), Telephone::Invalid);
        assert_eq!(parse_telephone(""), Telephone::Invalid);
    }

    #[test]
    fn test_phone_from_document() {
        let html = r#"
        <span class="biz-phone" itemprop="telephone">
            (323) 466-9440
        </span>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(extract_telephone(&document), Telephone::Valid(3234669440));

        let document = Html::parse_document("<p>no phone</p>");
        assert_eq!(extract_telephone(&document), Telephone::Invalid);
    }

    #[test]
    fn test_website_from_document() {
        let html = r#"
        <div class="biz-website js-add-url-tagging">
            <span class="offscreen">Business website</span>
            <a href="/biz_redir?url=http%3A%2F%2Fchego.com">chego.com</a>
        </div>
        "#;

        let document = Html::parse_document(html);
        assert_eq!(
            extract_website(&document),
            Website::Link("http://www.chego.com".to_string())
        );
    }

    #[test]
    fn test_website_absent_or_empty() {
        let document = Html::parse_document("<div class=\"biz-phone\">nothing</div>");
        assert_eq!(extract_website(&document), Website::NotProvided);
        assert_eq!(extract_website(&document).as_str(), "link not provided");

        assert_eq!(parse_website("Business website\n   "), Website::NotProvided);
    }

    #[test]
    fn test_website_without_labels() {
        assert_eq!(
            parse_website("  zankouchicken.com "),
            Website::Link("http://www.zankouchicken.com".to_string())
        );
    }
}
