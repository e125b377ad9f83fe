//! Output module for presenting crawl and query results
//!
//! This module handles:
//! - Rendering query outcomes as plain text for the terminal
//! - Printing crawl reports

pub mod stats;

pub use stats::{format_report, print_report};

use crate::search::QueryOutcome;
use crate::storage::StoredRecord;

/// Shown when the search phrase is blank
pub const PROMPT_MESSAGE: &str = "Enter search term.";

/// Shown when a search matched nothing
pub const NO_RESULTS_MESSAGE: &str = "No results were found.";

/// Renders a query outcome as terminal text
///
/// Matching records are printed field by field in stored order, each record
/// followed by a blank line.
///
/// # Examples
///
/// ```
/// use pagetrail::output::render_outcome;
/// use pagetrail::search::QueryOutcome;
///
/// assert_eq!(render_outcome(&QueryOutcome::Prompt), "Enter search term.\n");
/// ```
pub fn render_outcome(outcome: &QueryOutcome<'_>) -> String {
    match outcome {
        QueryOutcome::Prompt => format!("{}\n", PROMPT_MESSAGE),
        QueryOutcome::NoResults => format!("{}\n", NO_RESULTS_MESSAGE),
        QueryOutcome::Matches(records) => records.iter().map(|r| render_record(r)).collect(),
    }
}

/// Renders one record as `Key: Value` lines plus a blank line
pub fn render_record(record: &StoredRecord) -> String {
    let mut text = String::new();
    for (key, value) in record.fields() {
        text.push_str(&format!("{}: {}\n", key, value));
    }
    text.push('\n');
    text
}

/// Prints a query outcome to stdout
pub fn print_outcome(outcome: &QueryOutcome<'_>) {
    print!("{}", render_outcome(outcome));
}
