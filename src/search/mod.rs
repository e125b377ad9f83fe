//! Search module for querying a loaded store
//!
//! This module contains the query-time half of the system:
//! - Tokenizing a free-text phrase
//! - AND-of-terms, OR-of-fields substring matching
//! - Stable sorting of matches by a chosen field
//! - A session that loads the store once and answers many queries

mod query;
mod session;
mod sort;

pub use query::{search, tokenize};
pub use session::{QueryOutcome, QuerySession};
pub use sort::{sort_results, SortKey};

use thiserror::Error;

/// Errors raised by the query engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Search phrase is empty")]
    EmptyQuery,

    #[error("Unknown sort key '{0}' (expected None, Name or IP)")]
    UnknownSortKey(String),
}
