//! Briefly Fetch — download a web page and extract its paragraph text.
//!
//! Failures are reported as [`FetchError`] values; nothing here panics on
//! bad input or unreachable hosts.

pub mod error;
pub mod fetcher;
pub mod html;

pub use error::{FetchError, Result};
pub use fetcher::PageFetcher;
pub use html::paragraph_text;
