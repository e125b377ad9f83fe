//! Crawler module for fetching pages and following their links
//!
//! This module contains the crawl-time half of the system:
//! - HTTP fetching with status classification
//! - HTML extraction of title, meta description and outbound links
//! - Host resolution to a numeric address
//! - The depth-bounded traversal that decides what gets persisted

mod fetcher;
mod parser;
mod report;
mod resolver;
mod traversal;

pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use parser::{parse_html, ParseError, ParsedPage};
pub use report::CrawlReport;
pub use resolver::{DnsResolver, ResolutionError, Resolver};
pub use traversal::Traversal;

use crate::config::Config;
use crate::PagetrailError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client from the configuration
/// 2. Visit the seed URL and follow links up to the configured depth
/// 3. Append one record per persisted visit to the store
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl finished; individual page failures are counted, not raised
/// * `Err(PagetrailError)` - The HTTP client could not be built
pub async fn crawl(config: &Config) -> Result<CrawlReport, PagetrailError> {
    let mut traversal = Traversal::from_config(config)?;
    Ok(traversal
        .run(&config.crawler.seed_url, config.crawler.max_depth)
        .await)
}
