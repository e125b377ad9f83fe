//! Crawl report presentation
//!
//! Turns the counters collected by a crawl into a readable summary.

use crate::crawler::CrawlReport;

/// Formats a crawl report as a multi-line summary
///
/// # Arguments
///
/// * `report` - The finished crawl report
/// * `store_path` - Where the records were appended
pub fn format_report(report: &CrawlReport, store_path: &str) -> String {
    let mut text = String::new();

    text.push_str("=== Crawl Report ===\n\n");
    text.push_str(&format!("Store: {}\n", store_path));
    text.push_str(&format!(
        "Started: {}\n",
        report.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    if let Some(duration) = report.duration() {
        text.push_str(&format!(
            "Duration: {:.2} seconds\n",
            duration.num_milliseconds() as f64 / 1000.0
        ));
    }
    text.push('\n');

    text.push_str("Pages:\n");
    text.push_str(&format!("  Fetched: {}\n", report.pages_fetched));
    text.push_str(&format!("  Succeeded: {}\n", report.pages_succeeded()));
    text.push_str(&format!("  Failed (non-200): {}\n", report.failed));
    text.push_str(&format!("  Errors: {}\n", report.errored));
    text.push_str(&format!(
        "  Dropped (host did not resolve): {}\n",
        report.dropped_unresolved
    ));
    if report.skipped_duplicates > 0 {
        text.push_str(&format!(
            "  Skipped (already visited): {}\n",
            report.skipped_duplicates
        ));
    }
    text.push('\n');

    text.push_str(&format!("Records written: {}\n", report.records_written));
    if report.write_failures > 0 {
        text.push_str(&format!("Records lost to write errors: {}\n", report.write_failures));
    }

    text
}

/// Prints a crawl report to stdout
pub fn print_report(report: &CrawlReport, store_path: &str) {
    print!("{}", format_report(report, store_path));
}
