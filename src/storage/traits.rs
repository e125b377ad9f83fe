//! Storage traits and error types
//!
//! This module defines the sink interface the crawler writes records through
//! and the error type shared by the writer and the reader.

use crate::storage::PageRecord;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to append to store {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read store {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Destination for records produced by the crawler
///
/// Appends are independent: a failed append loses that record only and the
/// sink stays usable for the next one.
pub trait RecordSink {
    /// Appends one record to the end of the store
    fn append(&mut self, record: &PageRecord) -> StoreResult<()>;
}

/// In-memory sink, handy for inspecting a crawl without touching disk
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<PageRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records appended so far, in append order
    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<PageRecord> {
        self.records
    }
}

impl RecordSink for MemorySink {
    fn append(&mut self, record: &PageRecord) -> StoreResult<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn append(&mut self, record: &PageRecord) -> StoreResult<()> {
        (**self).append(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_append_order() {
        let mut sink = MemorySink::new();
        sink.append(&PageRecord::failed("http://one.com")).unwrap();
        sink.append(&PageRecord::errored("http://two.com")).unwrap();

        let urls: Vec<&str> = sink.records().iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["http://one.com", "http://two.com"]);
    }

    #[test]
    fn test_store_error_message_names_path() {
        let err = StoreError::Write {
            path: PathBuf::from("/tmp/pages.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/pages.txt"));
    }
}
