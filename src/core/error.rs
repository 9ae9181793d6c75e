//! Error types callers branch on
//!
//! Everything else travels as `anyhow::Error`.

use thiserror::Error;

/// Failure to retrieve a remote document
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failure to interpret a feed document or one of its items
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed feed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("feed item {index} has no <{field}> element")]
    MissingField { index: usize, field: &'static str },
}

/// A required submission field was left blank
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in the {field} input.")]
pub struct BlankField {
    pub field: &'static str,
}
