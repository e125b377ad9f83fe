//! Depth-bounded traversal
//!
//! The traversal visits the seed URL, persists an outcome record, and then
//! follows every outbound link with one less hop of depth. It is driven by an
//! explicit LIFO frontier rather than recursion; children are pushed in
//! reverse so pages are still visited (and stored) in recursive pre-order.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::crawler::parser::{parse_html, ParsedPage};
use crate::crawler::report::CrawlReport;
use crate::crawler::resolver::{DnsResolver, Resolver};
use crate::storage::{PageRecord, RecordSink, StoreWriter};
use crate::url::normalize_url;
use crate::PagetrailError;
use reqwest::Client;
use std::collections::HashSet;

/// Link-following crawler over a resolver and a record sink
pub struct Traversal<R, S> {
    client: Client,
    resolver: R,
    sink: S,
    deduplicate: bool,
}

impl Traversal<DnsResolver, StoreWriter> {
    /// Creates a traversal that resolves through DNS and appends to the
    /// configured store file
    pub fn from_config(config: &Config) -> Result<Self, PagetrailError> {
        let client = build_http_client(&config.user_agent, config.crawler.request_timeout())?;
        let sink = StoreWriter::new(&config.store.path);
        tracing::debug!("Appending records to {}", sink.path().display());

        Ok(Self::new(client, DnsResolver::new(), sink)
            .with_deduplication(config.crawler.deduplicate))
    }
}

impl<R: Resolver, S: RecordSink> Traversal<R, S> {
    pub fn new(client: Client, resolver: R, sink: S) -> Self {
        Self {
            client,
            resolver,
            sink,
            deduplicate: false,
        }
    }

    /// Enables the visited-set
    ///
    /// Off by default: a page reachable over several paths is then fetched
    /// and stored once per path.
    pub fn with_deduplication(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Crawls from `seed`, following links while more than one hop remains
    ///
    /// A `max_depth` of 1 (or 0) visits the seed only. Page-level failures
    /// never abort the crawl; they are recorded and counted in the report.
    pub async fn run(&mut self, seed: &str, max_depth: u32) -> CrawlReport {
        let mut report = CrawlReport::start();
        let mut frontier: Vec<(String, u32)> = vec![(seed.to_string(), max_depth)];
        let mut visited: HashSet<String> = HashSet::new();

        tracing::info!("Starting crawl of {} with max depth {}", seed, max_depth);

        while let Some((url, remaining_depth)) = frontier.pop() {
            if self.deduplicate && !visited.insert(normalize_url(&url)) {
                tracing::debug!("Skipping already visited {}", url);
                report.skipped_duplicates += 1;
                continue;
            }

            let links = self.visit(&url, &mut report).await;

            if remaining_depth > 1 {
                tracing::debug!("Following {} links from {}", links.len(), url);
                frontier.extend(
                    links
                        .into_iter()
                        .rev()
                        .map(|link| (link, remaining_depth - 1)),
                );
            }
        }

        report.finish();
        tracing::info!("Crawl finished: {}", report);
        report
    }

    /// Fetches one page, persists its outcome and returns its outbound links
    async fn visit(&mut self, url: &str, report: &mut CrawlReport) -> Vec<String> {
        report.pages_fetched += 1;

        let body = match fetch_url(&self.client, url).await {
            FetchResult::Success { final_url, body } => {
                // Records keep the requested URL; the redirect is only logged
                if final_url != url {
                    tracing::debug!("{} redirected to {}", url, final_url);
                }
                body
            }
            FetchResult::HttpError { status_code } => {
                tracing::warn!("Failed to retrieve {}. Status code: {}", url, status_code);
                report.failed += 1;
                self.persist(&PageRecord::failed(url), report);
                return Vec::new();
            }
            FetchResult::NetworkError { error } => {
                tracing::warn!("An error occurred while processing {}: {}", url, error);
                report.errored += 1;
                self.persist(&PageRecord::errored(url), report);
                return Vec::new();
            }
        };

        let ParsedPage {
            title,
            description,
            links,
        } = match parse_html(&body) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("An error occurred while processing {}: {}", url, e);
                report.errored += 1;
                self.persist(&PageRecord::errored(url), report);
                return Vec::new();
            }
        };

        tracing::info!("Title: {} URL: {}", title, url);

        match self.resolver.resolve(url).await {
            Ok(ip) => {
                let record = PageRecord::visited(url, title, Some(ip.to_string()), description);
                self.persist(&record, report);
            }
            Err(e) => {
                // Pages on hosts that do not resolve are not stored
                tracing::warn!("Failed to get IP address for {}: {}", url, e);
                report.dropped_unresolved += 1;
            }
        }

        links
    }

    fn persist(&mut self, record: &PageRecord, report: &mut CrawlReport) {
        match self.sink.append(record) {
            Ok(()) => report.records_written += 1,
            Err(e) => {
                tracing::error!("Failed to save record for {}: {}", record.url, e);
                report.write_failures += 1;
            }
        }
    }
}
