//! Menu link qualification

use scraper::Html;
use tracing::debug;

use super::text::first_attr;
use crate::listing::MenuLink;

pub const MENU_SELECTOR: &str = "a.menu-explore.link-more";

pub fn extract_menu_link(document: &Html, base_url: &str) -> MenuLink {
    match first_attr(document, MENU_SELECTOR, "href") {
        Some(href) => qualify_link(base_url, &href),
        None => {
            debug!("menu anchor not found");
            MenuLink::MaybeOnWebsite
        }
    }
}

/// Prefix a site-relative href with the base URL
pub fn qualify_link(base_url: &str, href: &str) -> MenuLink {
    let href = href.trim();
    if href.is_empty() {
        return MenuLink::MaybeOnWebsite;
    }

    if let Ok(absolute) = url::Url::parse(href) {
        if absolute.scheme() == "http" || absolute.scheme() == "https" {
            return MenuLink::Link(href.to_string());
        }
    }

    let base = base_url.trim_end_matches('/');
    let path = href.trim_start_matches('/');
    MenuLink::Link(format!("{base}/{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://www.yelp.com";

    #[test]
    fn test_menu_link_prefixed_with_base() {
        let html = r#"
        <div class="menu-preview">
            <a class="menu-explore link-more" href="/menu/chego-los-angeles-5">
                Full menu
            </a>
        </div>
        "#;

        let document = Html::parse_document(html);
        assert_eq!(
            extract_menu_link(&document, BASE),
            MenuLink::Link("http://www.yelp.com/menu/chego-los-angeles-5".to_string())
        );
    }

    #[test]
    fn test_menu_anchor_needs_both_classes() {
        let html = r#"<a class="menu-explore" href="/menu/x">Menu</a>"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_menu_link(&document, BASE), MenuLink::MaybeOnWebsite);
        assert_eq!(
            extract_menu_link(&document, BASE).as_str(),
            "Maybe available on website"
        );
    }

    #[test]
    fn test_qualify_link_variants() {
        assert_eq!(
            qualify_link("http://www.yelp.com/", "/menu/a"),
            MenuLink::Link("http://www.yelp.com/menu/a".to_string())
        );
        assert_eq!(
            qualify_link(BASE, "menu/a"),
            MenuLink::Link("http://www.yelp.com/menu/a".to_string())
        );
        assert_eq!(
            qualify_link(BASE, "https://menus.example.com/a"),
            MenuLink::Link("https://menus.example.com/a".to_string())
        );
        assert_eq!(qualify_link(BASE, "  "), MenuLink::MaybeOnWebsite);
    }
}
