//! Feed batch support
//!
//! # Components
//!
//! - `parser`: feed XML into items
//! - `page`: article text from a fetched page
//! - `client`: blocking HTTP with timeout

pub mod client;
pub mod page;
pub mod parser;

use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Url;
use tracing::warn;

use crate::core::config::FeedConfig;
pub use client::{FeedClient, Fetch};
pub use page::extract_page_text;
pub use parser::{parse_feed, parse_items, FeedItem};

/// Stand-in content when an article page cannot be fetched
pub const CONTENT_UNAVAILABLE: &str = "Content not available";

lazy_static! {
    static ref NUMBERED_XML_RE: Regex = Regex::new(r"/\d+\.xml$").unwrap();
}

/// Replace every occurrence of `from` in the link with `to`
pub fn rewrite_link(link: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return link.to_string();
    }
    link.replace(from, to)
}

/// Section name from an article URL: base path removed, trailing
/// `/<digits>.xml` dropped, last path segment kept.
pub fn category_from_url(url: &str, base: &str) -> String {
    let path = Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string());
    let base_path = Url::parse(base)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| base.to_string());

    let path = match path.strip_prefix(base_path.as_str()) {
        Some(rest) => rest.to_string(),
        None => path.clone(),
    };
    let path = NUMBERED_XML_RE.replace(&path, "");
    path.rsplit('/').next().unwrap_or("").to_string()
}

/// An item ready for analysis
#[derive(Debug, Clone)]
pub struct Article {
    pub link: String,
    pub category: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Rewrite the link, fetch the page and pull its text.
/// A failed fetch leaves [`CONTENT_UNAVAILABLE`] as the content.
pub fn load_article(fetcher: &dyn Fetch, item: &FeedItem, config: &FeedConfig) -> Article {
    let link = rewrite_link(&item.link, &config.link_rewrite_from, &config.link_rewrite_to);

    let content = match fetcher.fetch(&link) {
        Ok(body) => extract_page_text(&body, &config.content_selector),
        Err(e) => {
            warn!("Error fetching content: {}", e);
            CONTENT_UNAVAILABLE.to_string()
        }
    };

    Article {
        category: category_from_url(&link, &config.category_base),
        link,
        title: item.title.clone(),
        content,
        tags: item.tags.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FetchError;
    use std::collections::HashMap;

    struct StaticFetcher(HashMap<&'static str, &'static str>);

    impl Fetch for StaticFetcher {
        fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.0
                .get(url)
                .map(|body| body.to_string())
                .ok_or(FetchError::Status {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }

    fn item(link: &str) -> FeedItem {
        FeedItem {
            link: link.to_string(),
            title: "Title".to_string(),
            tags: vec!["india".to_string()],
        }
    }

    #[test]
    fn test_rewrite_link() {
        assert_eq!(
            rewrite_link("https://rss.oneindia.com/a.xml", "https://rss.", "https://rss1."),
            "https://rss1.oneindia.com/a.xml"
        );
        assert_eq!(rewrite_link("https://x.co", "", "y"), "https://x.co");
    }

    #[test]
    fn test_category_from_url() {
        let base = "https://rss1.oneindia.com/xml4apps/www.oneindia.com/";
        assert_eq!(
            category_from_url(
                "https://rss1.oneindia.com/xml4apps/www.oneindia.com/india/12345.xml",
                base
            ),
            "india"
        );
        assert_eq!(
            category_from_url(
                "https://rss1.oneindia.com/xml4apps/www.oneindia.com/entertainment/bollywood/7.xml",
                base
            ),
            "bollywood"
        );
        assert_eq!(
            category_from_url("https://rss1.oneindia.com/xml4apps/www.oneindia.com/latest.xml", base),
            "latest.xml"
        );
    }

    #[test]
    fn test_load_article() {
        let fetcher = StaticFetcher(HashMap::from([(
            "https://rss1.oneindia.com/xml4apps/www.oneindia.com/india/1.xml",
            "<doc><content>Power outage in Kerala</content></doc>",
        )]));
        let config = FeedConfig::default();

        let article = load_article(
            &fetcher,
            &item("https://rss.oneindia.com/xml4apps/www.oneindia.com/india/1.xml"),
            &config,
        );
        assert_eq!(article.category, "india");
        assert_eq!(article.content, "Power outage in Kerala");

        let missing = load_article(&fetcher, &item("https://rss.oneindia.com/x/2.xml"), &config);
        assert_eq!(missing.content, CONTENT_UNAVAILABLE);
        assert_eq!(missing.link, "https://rss1.oneindia.com/x/2.xml");
    }
}
