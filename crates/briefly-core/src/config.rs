//! Server configuration resolved from the environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Origins allowed to call the API from a browser when nothing else is configured.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://192.168.1.83:3000",
];

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Top-level Briefly configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server port.
    pub port: u16,
    /// Address the listener binds to.
    pub bind_addr: String,
    /// CORS origin allow-list.
    pub allowed_origins: Vec<String>,
    /// Upper bound for a single page fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// User-Agent header sent when fetching pages.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset or blank keys
    /// fall back to defaults; malformed numbers are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(port) = get("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("invalid PORT: {port:?}")))?;
        }
        if let Some(addr) = get("BRIEFLY_BIND_ADDR") {
            config.bind_addr = addr.trim().to_string();
        }
        if let Some(origins) = get("BRIEFLY_ALLOWED_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(secs) = get("BRIEFLY_FETCH_TIMEOUT_SECS") {
            config.fetch_timeout_secs = secs.trim().parse().map_err(|_| {
                Error::Config(format!("invalid BRIEFLY_FETCH_TIMEOUT_SECS: {secs:?}"))
            })?;
            if config.fetch_timeout_secs == 0 {
                return Err(Error::Config(
                    "BRIEFLY_FETCH_TIMEOUT_SECS must be greater than zero".into(),
                ));
            }
        }
        if let Some(agent) = get("BRIEFLY_USER_AGENT") {
            config.user_agent = agent;
        }

        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// `bind_addr:port`, ready for a TCP listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

fn default_user_agent() -> String {
    format!("briefly/{}", env!("CARGO_PKG_VERSION"))
}
