use crate::search::query::search;
use crate::search::sort::{sort_results, SortKey};
use crate::search::QueryError;
use crate::storage::{load_store, StoreResult, StoredRecord};
use std::path::Path;

/// What a query produced, ready for presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome<'a> {
    /// The phrase was blank; ask the user for a search term
    Prompt,
    /// The phrase matched nothing
    NoResults,
    /// Matching records, searched then sorted
    Matches(Vec<&'a StoredRecord>),
}

impl QueryOutcome<'_> {
    /// Number of matching records
    pub fn match_count(&self) -> usize {
        match self {
            Self::Matches(records) => records.len(),
            _ => 0,
        }
    }
}

/// Records loaded once from a store, queried many times
///
/// The store is read when the session opens and never refreshed; a crawl
/// appending to the same file afterwards is not seen.
#[derive(Debug, Clone, Default)]
pub struct QuerySession {
    records: Vec<StoredRecord>,
}

impl QuerySession {
    /// Loads every record of the store at `path`
    pub fn open(path: &Path) -> StoreResult<Self> {
        Ok(Self::from_records(load_store(path)?))
    }

    pub fn from_records(records: Vec<StoredRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Runs one search and orders the matches
    pub fn run(&self, phrase: &str, sort: SortKey) -> QueryOutcome<'_> {
        let mut matches = match search(&self.records, phrase) {
            Ok(matches) => matches,
            Err(QueryError::EmptyQuery) => return QueryOutcome::Prompt,
            Err(e) => {
                tracing::warn!("Query failed: {}", e);
                return QueryOutcome::NoResults;
            }
        };

        tracing::debug!("'{}' matched {} of {} records", phrase, matches.len(), self.len());

        if matches.is_empty() {
            return QueryOutcome::NoResults;
        }

        sort_results(&mut matches, sort);
        QueryOutcome::Matches(matches)
    }
}
