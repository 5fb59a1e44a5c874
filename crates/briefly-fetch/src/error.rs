//! Fetch failure taxonomy.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP client setup failed: {0}")]
    Client(reqwest::Error),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("No text found on URL")]
    NoText,
}

pub type Result<T> = std::result::Result<T, FetchError>;
