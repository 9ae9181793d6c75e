//! Feed document parsing
//!
//! A feed is a sequence of `<Item>` elements, each carrying `<Link>`,
//! `<Title>` and a comma-separated `<Tags>` field. Element names are matched
//! case-insensitively so plain RSS `<item>`/`<link>`/`<title>` also parse.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;
use tracing::warn;

use crate::core::error::FeedError;
use crate::tags::parse_tag_list;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub link: String,
    pub title: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemField {
    Link,
    Title,
    Tags,
}

/// Fields seen so far inside one item; `None` means the element never appeared
#[derive(Debug, Default)]
struct PartialItem {
    link: Option<String>,
    title: Option<String>,
    tags: Option<String>,
}

impl PartialItem {
    fn slot(&mut self, field: ItemField) -> &mut Option<String> {
        match field {
            ItemField::Link => &mut self.link,
            ItemField::Title => &mut self.title,
            ItemField::Tags => &mut self.tags,
        }
    }

    fn finish(self, index: usize) -> Result<FeedItem, FeedError> {
        let link = self
            .link
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .ok_or(FeedError::MissingField { index, field: "Link" })?;
        let title = self
            .title
            .ok_or(FeedError::MissingField { index, field: "Title" })?;
        let tags = self
            .tags
            .ok_or(FeedError::MissingField { index, field: "Tags" })?;

        Ok(FeedItem {
            link,
            title: title.trim().to_string(),
            tags: parse_tag_list(&tags),
        })
    }
}

fn field_of(name: &[u8]) -> Option<ItemField> {
    match name.to_ascii_lowercase().as_slice() {
        b"link" => Some(ItemField::Link),
        b"title" => Some(ItemField::Title),
        b"tags" => Some(ItemField::Tags),
        _ => None,
    }
}

fn is_item(name: &[u8]) -> bool {
    name.eq_ignore_ascii_case(b"item")
}

/// Every item in document order, each either complete or the reason it is not.
/// Fails only when the document itself is not well-formed XML.
pub fn parse_items(xml: &str) -> Result<Vec<Result<FeedItem, FeedError>>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut items = Vec::new();
    let mut current: Option<PartialItem> = None;
    let mut field: Option<ItemField> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name();
                if is_item(name.as_ref()) {
                    current = Some(PartialItem::default());
                    field = None;
                } else if let Some(item) = current.as_mut() {
                    field = field_of(name.as_ref());
                    if let Some(f) = field {
                        item.slot(f).get_or_insert_with(String::new);
                    }
                }
            }
            Event::Empty(e) => {
                if let (Some(item), Some(f)) = (current.as_mut(), field_of(e.local_name().as_ref())) {
                    item.slot(f).get_or_insert_with(String::new);
                }
            }
            Event::Text(t) => {
                if let (Some(item), Some(f)) = (current.as_mut(), field) {
                    // Undeclared HTML entities are kept verbatim
                    let text = t
                        .unescape()
                        .map(|c| c.into_owned())
                        .unwrap_or_else(|_| String::from_utf8_lossy(&t).into_owned());
                    item.slot(f).get_or_insert_with(String::new).push_str(&text);
                }
            }
            Event::CData(t) => {
                if let (Some(item), Some(f)) = (current.as_mut(), field) {
                    let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                    item.slot(f).get_or_insert_with(String::new).push_str(&text);
                }
            }
            Event::End(e) => {
                let name = e.local_name();
                if is_item(name.as_ref()) {
                    if let Some(item) = current.take() {
                        items.push(item.finish(items.len()));
                    }
                    field = None;
                } else if field_of(name.as_ref()).is_some() {
                    field = None;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(items)
}

/// Complete items only; malformed ones are logged and skipped
pub fn parse_feed(xml: &str) -> Result<Vec<FeedItem>, FeedError> {
    let items = parse_items(xml)?
        .into_iter()
        .filter_map(|item| match item {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping feed item: {}", e);
                None
            }
        })
        .collect();
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Items>
  <Item>
    <Link>https://rss.oneindia.com/xml4apps/www.oneindia.com/india/123.xml</Link>
    <Title><![CDATA[Shahid Kapoor at a Bollywood event]]></Title>
    <Tags>Bollywood, Shahid Kapoor , </Tags>
  </Item>
  <Item>
    <Title>No link here</Title>
    <Tags>news</Tags>
  </Item>
  <Item>
    <Link>https://rss.oneindia.com/b.xml</Link>
    <Title>Power &amp; Light</Title>
    <Tags/>
  </Item>
  <Item>
    <Link>https://rss.oneindia.com/c.xml</Link>
    <Title>Missing tags</Title>
  </Item>
</Items>"#;

    #[test]
    fn test_parse_items() {
        let items = parse_items(FEED).unwrap();
        assert_eq!(items.len(), 4);

        let first = items[0].as_ref().unwrap();
        assert_eq!(first.title, "Shahid Kapoor at a Bollywood event");
        assert_eq!(first.tags, vec!["bollywood", "shahid kapoor"]);

        assert!(matches!(
            items[1],
            Err(FeedError::MissingField { index: 1, field: "Link" })
        ));

        let third = items[2].as_ref().unwrap();
        assert_eq!(third.title, "Power & Light");
        assert!(third.tags.is_empty());

        assert!(matches!(
            items[3],
            Err(FeedError::MissingField { field: "Tags", .. })
        ));
    }

    #[test]
    fn test_parse_feed_skips_malformed() {
        let items = parse_feed(FEED).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].link, "https://rss.oneindia.com/b.xml");
    }

    #[test]
    fn test_lowercase_rss() {
        let xml = "<rss><channel><title>Feed</title><item><link>https://x.co/1</link>\
                   <title>One</title><tags>a,b</tags></item></channel></rss>";
        let items = parse_feed(xml).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].tags, vec!["a", "b"]);
    }

    #[test]
    fn test_broken_xml_is_an_error() {
        assert!(parse_feed("<Items><Item></Items>").is_err());
    }
}
