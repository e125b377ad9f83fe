//! Configuration module for Pagetrail
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use pagetrail::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pagetrail.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, StoreConfig, UserAgentConfig, DEFAULT_MAX_DEPTH, DEFAULT_STORE_PATH,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
