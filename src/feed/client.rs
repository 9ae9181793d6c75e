//! Blocking HTTP fetches with a per-request timeout

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

use crate::core::error::FetchError;

/// Anything that can turn a URL into a document body
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct FeedClient {
    http: Client,
}

impl FeedClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("taglens/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http })
    }
}

impl Fetch for FeedClient {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching");
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}
