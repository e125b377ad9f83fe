//! Pagetrail: a depth-bounded page crawler with a flat-file search index
//!
//! This crate follows outbound links from a seed URL, records each visited
//! page (title, resolved IP, meta description) as a block in an append-only
//! text store, and runs AND-of-terms searches with optional sorting over that
//! store.

pub mod config;
pub mod crawler;
pub mod output;
pub mod search;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Pagetrail operations
#[derive(Debug, Error)]
pub enum PagetrailError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] storage::StoreError),

    #[error("Query error: {0}")]
    Query(#[from] search::QueryError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

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

/// Result type alias for Pagetrail operations
pub type Result<T> = std::result::Result<T, PagetrailError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlReport, Traversal};
pub use search::{QueryOutcome, QuerySession, SortKey};
pub use storage::{PageRecord, StoredRecord};
