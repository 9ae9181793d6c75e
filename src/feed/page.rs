//! Article text from a fetched page (HTML or XML)

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::core::text::collapse_whitespace;

/// Text of the first element matching `selector`, or of the whole page.
/// Script and style contents are never included.
pub fn extract_page_text(body: &str, selector: &str) -> String {
    // The HTML parser treats CDATA as a comment; unwrap it so its markup is parsed
    let body = body.replace("<![CDATA[", "").replace("]]>", "");
    let document = Html::parse_document(&body);

    let selected = match Selector::parse(selector) {
        Ok(sel) => document.select(&sel).next(),
        Err(e) => {
            warn!("Invalid content selector '{}': {:?}", selector, e);
            None
        }
    };

    match selected {
        Some(element) => visible_text(element),
        None => {
            debug!(selector, "content element not found, using whole page");
            visible_text(document.root_element())
        }
    }
}

fn visible_text(element: ElementRef<'_>) -> String {
    let parts: Vec<&str> = element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .parent()
                .and_then(|p| p.value().as_element().map(|e| e.name().to_string()))
                .is_some_and(|name| matches!(name.as_str(), "script" | "style" | "noscript"));
            (!hidden).then_some(&**text)
        })
        .collect();
    collapse_whitespace(&parts.join(" "))
}
