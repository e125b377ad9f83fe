use chrono::{DateTime, Utc};
use std::fmt;

/// Counters collected over one crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Fetch attempts, including failed ones
    pub pages_fetched: u64,

    /// Records successfully appended to the store
    pub records_written: u64,

    /// Pages that answered with a non-200 status
    pub failed: u64,

    /// Pages lost to transport errors or missing titles
    pub errored: u64,

    /// Successful fetches dropped because the host did not resolve
    pub dropped_unresolved: u64,

    /// Records lost because the store could not be written
    pub write_failures: u64,

    /// URLs skipped by the visited-set (deduplication only)
    pub skipped_duplicates: u64,
}

impl CrawlReport {
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            pages_fetched: 0,
            records_written: 0,
            failed: 0,
            errored: 0,
            dropped_unresolved: 0,
            write_failures: 0,
            skipped_duplicates: 0,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock duration, once finished
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|finished| finished - self.started_at)
    }

    /// Successful fetches that produced a page record
    pub fn pages_succeeded(&self) -> u64 {
        self.pages_fetched - self.failed - self.errored
    }
}

impl fmt::Display for CrawlReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} fetched, {} written, {} failed, {} errors, {} unresolved",
            self.pages_fetched,
            self.records_written,
            self.failed,
            self.errored,
            self.dropped_unresolved
        )?;
        if self.write_failures > 0 {
            write!(f, ", {} write failures", self.write_failures)?;
        }
        if self.skipped_duplicates > 0 {
            write!(f, ", {} duplicates skipped", self.skipped_duplicates)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_empty() {
        let report = CrawlReport::start();
        assert_eq!(report.pages_fetched, 0);
        assert_eq!(report.finished_at, None);
        assert_eq!(report.duration(), None);
    }

    #[test]
    fn test_finish_sets_duration() {
        let mut report = CrawlReport::start();
        report.finish();
        assert!(report.duration().unwrap() >= chrono::Duration::zero());
    }

    #[test]
    fn test_display_mentions_optional_counters_only_when_set() {
        let mut report = CrawlReport::start();
        report.pages_fetched = 3;
        report.records_written = 2;
        report.failed = 1;
        assert_eq!(
            report.to_string(),
            "3 fetched, 2 written, 1 failed, 0 errors, 0 unresolved"
        );

        report.skipped_duplicates = 4;
        assert!(report.to_string().ends_with(", 4 duplicates skipped"));
    }

    #[test]
    fn test_pages_succeeded() {
        let mut report = CrawlReport::start();
        report.pages_fetched = 5;
        report.failed = 1;
        report.errored = 1;
        assert_eq!(report.pages_succeeded(), 3);
    }
}
