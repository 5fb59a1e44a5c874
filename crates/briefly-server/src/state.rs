//! Shared application state.

use briefly_core::Config;
use briefly_fetch::PageFetcher;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: Config,
    pub fetcher: PageFetcher,
}

impl AppState {
    pub fn new(config: Config) -> briefly_fetch::Result<Self> {
        let fetcher = PageFetcher::from_config(&config)?;
        Ok(Self { config, fetcher })
    }
}
