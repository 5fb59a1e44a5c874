//! HTTP page fetcher.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::error::{FetchError, Result};
use crate::html::paragraph_text;

/// Retrieves pages and reduces them to their paragraph text.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    pub fn from_config(config: &briefly_core::Config) -> Result<Self> {
        Self::new(config.fetch_timeout(), &config.user_agent)
    }

    /// Download `url` and return the response body.
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        let url = parse_url(url)?;
        debug!(%url, "Fetching page");

        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        if let Some(content_type) = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_textual(content_type) {
                return Err(FetchError::UnsupportedContentType(content_type.to_string()));
            }
        }

        let body = resp.text().await?;
        info!(%url, bytes = body.len(), "Fetched page");
        Ok(body)
    }

    /// Download `url` and extract its paragraph text.
    ///
    /// Pages without any non-blank paragraph text yield [`FetchError::NoText`].
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let html = self.fetch_html(url).await?;
        let text = paragraph_text(&html);
        if text.trim().is_empty() {
            return Err(FetchError::NoText);
        }
        Ok(text)
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other:?}"))),
    }
}

fn is_textual(content_type: &str) -> bool {
    let mime = content_type.to_ascii_lowercase();
    mime.contains("html") || mime.starts_with("text/")
}
