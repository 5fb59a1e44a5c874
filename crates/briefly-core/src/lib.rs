//! Briefly Core — configuration and shared error types.

pub mod config;
pub mod error;

pub use config::{Config, DEFAULT_ALLOWED_ORIGINS};
pub use error::{Error, Result};
