//! hn-harvest: a recurring-thread comment harvester
//!
//! This crate crawls the monthly "Who is hiring?" threads posted by a fixed
//! submitter on Hacker News, extracts top-level comments that fall within a
//! rolling recency window, and appends them as JSONL records. Fetching is
//! sequential and deliberately slow: retries back off exponentially and a
//! fixed delay separates page fetches within a thread.

pub mod config;
pub mod enrich;
pub mod fetch;
pub mod harvest;
pub mod page;
pub mod sink;

use thiserror::Error;

/// Main error type for hn-harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Listing fetch exhausted all retries for {url}")]
    ListingExhausted { url: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Record serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Sink error: {0}")]
    Sink(#[from] sink::SinkError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for hn-harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use fetch::{FetchOutcome, Pacing, RetryPolicy};
pub use harvest::{run_harvest, CommentRecord, HarvestStats, ThreadStop};
pub use page::PageTree;
