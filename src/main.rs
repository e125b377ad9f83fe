//! Pagetrail main entry point
//!
//! This is the command-line interface for crawling into a page store and
//! searching it afterwards.

use clap::{Parser, Subcommand};
use pagetrail::config::{load_config, validate, Config};
use pagetrail::output::{print_outcome, print_report};
use pagetrail::search::{tokenize, QueryOutcome, QuerySession, SortKey};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Pagetrail: crawl pages into a flat-file store and search them
///
/// A crawl follows links from a seed URL up to a bounded depth and appends
/// one record per visited page. A search loads the store and prints the
/// records containing every search term.
#[derive(Parser, Debug)]
#[command(name = "pagetrail")]
#[command(version)]
#[command(about = "Crawl pages into a flat-file store and search them", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl from a seed URL and append records to the store
    Crawl {
        /// Path to TOML configuration file
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,

        /// URL to start from (overrides the config file)
        #[arg(short, long, value_name = "URL")]
        seed: Option<String>,

        /// Maximum link-following depth; 1 visits the seed only
        #[arg(short, long, value_name = "N")]
        depth: Option<u32>,

        /// Store file to append to
        #[arg(long, value_name = "PATH")]
        store: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long, value_name = "SECONDS")]
        timeout: Option<u64>,

        /// Skip URLs already visited during this crawl
        #[arg(long)]
        dedupe: bool,
    },

    /// Search the store for records containing every term
    Search {
        /// Search terms
        #[arg(value_name = "TERMS")]
        terms: Vec<String>,

        /// Field to sort the results by
        #[arg(long, value_enum, default_value_t = SortKey::None)]
        sort: SortKey,

        /// Store file to read
        #[arg(long, value_name = "PATH")]
        store: Option<String>,

        /// Path to TOML configuration file (for the store path)
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,
    },

    /// Validate a config file and show what would be crawled
    CheckConfig {
        /// Path to TOML configuration file
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Crawl {
            config,
            seed,
            depth,
            store,
            timeout,
            dedupe,
        } => {
            let mut config = match (config, seed.as_deref()) {
                (Some(path), _) => load_config_logged(&path)?,
                (None, Some(seed)) => Config::with_seed(seed),
                (None, None) => {
                    return Err("a seed URL is required (--seed or --config)".into());
                }
            };

            if let Some(seed) = seed {
                config.crawler.seed_url = seed;
            }
            if let Some(depth) = depth {
                config.crawler.max_depth = depth;
            }
            if let Some(store) = store {
                config.store.path = store;
            }
            if timeout.is_some() {
                config.crawler.request_timeout_secs = timeout;
            }
            if dedupe {
                config.crawler.deduplicate = true;
            }
            validate(&config)?;

            handle_crawl(&config, cli.quiet).await?;
        }

        Command::Search {
            terms,
            sort,
            store,
            config,
        } => {
            let store_path = match (store, config) {
                (Some(store), _) => store,
                (None, Some(path)) => load_config_logged(&path)?.store.path,
                (None, None) => pagetrail::config::DEFAULT_STORE_PATH.to_string(),
            };

            handle_search(&terms.join(" "), sort, Path::new(&store_path))?;
        }

        Command::CheckConfig { config } => {
            let config = load_config_logged(&config)?;
            handle_check_config(&config);
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagetrail=info,warn"),
            1 => EnvFilter::new("pagetrail=debug,info"),
            _ => EnvFilter::new("pagetrail=trace,debug"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config_logged(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    tracing::info!("Loading configuration from: {}", path.display());
    match load_config(path) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            Err(e.into())
        }
    }
}

/// Handles the crawl command
async fn handle_crawl(config: &Config, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Crawling {} to depth {} into {}",
        config.crawler.seed_url,
        config.crawler.max_depth,
        config.store.path
    );

    let report = pagetrail::crawler::crawl(config).await?;

    if !quiet {
        print_report(&report, &config.store.path);
    }

    Ok(())
}

/// Handles the search command
fn handle_search(
    phrase: &str,
    sort: SortKey,
    store_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    // A blank phrase never needs the store
    if tokenize(phrase).is_empty() {
        print_outcome(&QueryOutcome::Prompt);
        return Ok(());
    }

    let session = match QuerySession::open(store_path) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            return Err(e.into());
        }
    };
    let outcome = session.run(phrase, sort);
    print_outcome(&outcome);

    Ok(())
}

/// Handles the check-config command: shows the effective configuration
fn handle_check_config(config: &Config) {
    println!("=== Pagetrail Configuration ===\n");

    println!("Crawler:");
    println!("  Seed URL: {}", config.crawler.seed_url);
    println!("  Max depth: {}", config.crawler.max_depth);
    match config.crawler.request_timeout_secs {
        Some(secs) => println!("  Request timeout: {}s", secs),
        None => println!("  Request timeout: none"),
    }
    println!("  Deduplicate: {}", config.crawler.deduplicate);

    println!("\nUser Agent:");
    println!(
        "  {}/{}",
        config.user_agent.crawler_name, config.user_agent.crawler_version
    );

    println!("\nStore:");
    println!("  Path: {}", config.store.path);

    println!("\n✓ Configuration is valid");
}
