use serde::Deserialize;
use std::time::Duration;

/// Depth used when neither the config file nor the CLI sets one
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Store file used when neither the config file nor the CLI sets one
pub const DEFAULT_STORE_PATH: &str = "webpages.txt";

/// Main configuration structure for Pagetrail
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Builds a configuration with defaults for everything but the seed
    pub fn with_seed(seed_url: impl Into<String>) -> Self {
        Self {
            crawler: CrawlerConfig {
                seed_url: seed_url.into(),
                max_depth: DEFAULT_MAX_DEPTH,
                request_timeout_secs: None,
                deduplicate: false,
            },
            user_agent: UserAgentConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URL the crawl starts from
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Maximum number of link-following hops, counting the seed as 1
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Per-request timeout in seconds; unset means requests never time out
    #[serde(rename = "request-timeout-secs", default)]
    pub request_timeout_secs: Option<u64>,

    /// Skip URLs that were already visited in this crawl
    #[serde(default)]
    pub deduplicate: bool,
}

impl CrawlerConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Store location configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the flat-file page store (opened in append mode)
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}
