//! Store parser
//!
//! Reads the flat store back into memory. The grammar is deliberately loose:
//! blocks are separated by a blank line, each line is split on its first
//! `": "`, and anything that does not fit is skipped without complaint.

use crate::storage::traits::{StoreError, StoreResult};
use crate::storage::StoredRecord;
use std::path::Path;

/// Separator between two blocks
const BLOCK_SEPARATOR: &str = "\n\n";

/// Separator between a key and its value
const FIELD_SEPARATOR: &str = ": ";

/// Parses store text into records, preserving store order
///
/// LF and CRLF line endings are both accepted. Lines without a `": "`
/// separator are dropped. Blocks left with no fields
/// (such as the empty tail after the final separator) produce no record.
///
/// # Examples
///
/// ```
/// use pagetrail::storage::parse_store;
///
/// let records = parse_store("URL: http://a.com\nName: A\n\nURL: http://b.com\nName: B\n\n");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].get("Name"), Some("B"));
/// ```
pub fn parse_store(text: &str) -> Vec<StoredRecord> {
    // Stores written on Windows use CRLF throughout, separators included
    let text = text.replace("\r\n", "\n");

    text.split(BLOCK_SEPARATOR)
        .filter_map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> Option<StoredRecord> {
    let mut record = StoredRecord::new();

    for line in block.split('\n') {
        match line.split_once(FIELD_SEPARATOR) {
            Some((key, value)) => record.insert(key, value),
            None if line.is_empty() => {}
            None => tracing::trace!("Skipping malformed store line: {:?}", line),
        }
    }

    if record.is_empty() {
        None
    } else {
        Some(record)
    }
}

/// Reads a whole store file and parses it
///
/// # Arguments
///
/// * `path` - Path to the store file
///
/// # Returns
///
/// * `Ok(Vec<StoredRecord>)` - Parsed records in store order
/// * `Err(StoreError)` - The file could not be read
pub fn load_store(path: &Path) -> StoreResult<Vec<StoredRecord>> {
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_store(&text);
    tracing::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_preserves_store_order() {
        let text = "URL: http://b.com\nName: B\n\nURL: http://a.com\nName: A\n\n";
        let records = parse_store(text);
        let urls: Vec<_> = records.iter().map(|r| r.url().unwrap()).collect();
        assert_eq!(urls, vec!["http://b.com", "http://a.com"]);
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        let records = parse_store("Description: ratio: 3: 1\n\n");
        assert_eq!(records[0].description(), Some("ratio: 3: 1"));
    }

    #[test]
    fn test_parse_drops_lines_without_separator() {
        let records = parse_store("URL: http://a.com\ngarbage line\nName:missing-space\nName: A\n\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0].name(), Some("A"));
    }

    #[test]
    fn test_parse_accepts_any_subset_of_keys() {
        let records = parse_store("Name: Lonely\n\nURL: http://x.com\nExtra: field\n\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url(), None);
        assert_eq!(records[1].get("Extra"), Some("field"));
    }

    #[test]
    fn test_parse_keys_are_case_sensitive() {
        let records = parse_store("url: http://a.com\n\n");
        assert_eq!(records[0].url(), None);
        assert_eq!(records[0].get("url"), Some("http://a.com"));
    }

    #[test]
    fn test_parse_crlf_store_keeps_every_block() {
        let text = "URL: http://a.com\r\nName: A\r\n\r\nURL: http://b.com\r\nName: B\r\n\r\n";
        let records = parse_store(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url(), Some("http://a.com"));
        assert_eq!(records[0].name(), Some("A"));
        assert_eq!(records[1].url(), Some("http://b.com"));
        assert_eq!(records[1].name(), Some("B"));
    }

    #[test]
    fn test_load_crlf_store_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"URL: http://a.com\r\nName: A\r\nIP: 1.2.3.4\r\n\r\nURL: http://b.com\r\nName: Failed\r\n\r\n")
            .unwrap();
        file.flush().unwrap();

        let records = load_store(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ip(), Some("1.2.3.4"));
        assert_eq!(records[1].name(), Some("Failed"));
    }

    #[test]
    fn test_parse_empty_store() {
        assert!(parse_store("").is_empty());
        assert!(parse_store("\n\n\n\n").is_empty());
    }

    #[test]
    fn test_parse_keeps_duplicate_urls() {
        let text = "URL: http://a.com\nName: A\n\nURL: http://a.com\nName: A\n\n";
        assert_eq!(parse_store(text).len(), 2);
    }

    #[test]
    fn test_load_store_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"URL: http://a.com\nName: A\nIP: 1.2.3.4\n\n")
            .unwrap();
        file.flush().unwrap();

        let records = load_store(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ip(), Some("1.2.3.4"));
    }

    #[test]
    fn test_load_missing_store() {
        let result = load_store(Path::new("/nonexistent/pages.txt"));
        assert!(matches!(result, Err(StoreError::Read { .. })));
    }
}
