//! Append-only record writer
//!
//! Each record becomes one block of `Key: Value` lines terminated by a blank
//! line. The file is opened in append mode for every record and closed again,
//! so no handle is held across a crawl.

use crate::storage::traits::{RecordSink, StoreError, StoreResult};
use crate::storage::{PageRecord, FIELD_DESCRIPTION, FIELD_IP, FIELD_NAME, FIELD_URL};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Serializes a record into its store block
///
/// Fields are written in the fixed order `URL`, `Name`, `IP`, `Description`;
/// absent optional fields produce no line at all.
///
/// # Examples
///
/// ```
/// use pagetrail::storage::{serialize_record, PageRecord};
///
/// let record = PageRecord::failed("http://example.com/");
/// assert_eq!(serialize_record(&record), "URL: http://example.com/\nName: Failed\n\n");
/// ```
pub fn serialize_record(record: &PageRecord) -> String {
    let mut block = String::new();

    push_line(&mut block, FIELD_URL, &record.url);
    push_line(&mut block, FIELD_NAME, &record.name);
    if let Some(ip) = &record.ip {
        push_line(&mut block, FIELD_IP, ip);
    }
    if let Some(description) = &record.description {
        push_line(&mut block, FIELD_DESCRIPTION, description);
    }

    block.push('\n');
    block
}

fn push_line(block: &mut String, key: &str, value: &str) {
    block.push_str(key);
    block.push_str(": ");
    // A raw newline would end the line early or split the block in two
    block.extend(value.chars().map(|c| match c {
        '\r' | '\n' => ' ',
        c => c,
    }));
    block.push('\n');
}

/// Appends serialized records to a store file
#[derive(Debug, Clone)]
pub struct StoreWriter {
    path: PathBuf,
}

impl StoreWriter {
    /// Creates a writer for the given store path
    ///
    /// Nothing is opened until the first append; the file is created then if
    /// it does not exist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for StoreWriter {
    fn append(&mut self, record: &PageRecord) -> StoreResult<()> {
        let block = serialize_record(record);
        let to_write_error = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_write_error)?;
        file.write_all(block.as_bytes()).map_err(to_write_error)?;

        tracing::trace!("Appended record for {} to {}", record.url, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_serialize_full_record() {
        let record = PageRecord::visited(
            "http://a.com",
            "A",
            Some("1.2.3.4".to_string()),
            Some("test site".to_string()),
        );
        assert_eq!(
            serialize_record(&record),
            "URL: http://a.com\nName: A\nIP: 1.2.3.4\nDescription: test site\n\n"
        );
    }

    #[test]
    fn test_serialize_without_description() {
        let record = PageRecord::visited("http://a.com", "A", Some("1.2.3.4".to_string()), None);
        assert_eq!(
            serialize_record(&record),
            "URL: http://a.com\nName: A\nIP: 1.2.3.4\n\n"
        );
    }

    #[test]
    fn test_serialize_flattens_line_breaks() {
        let record = PageRecord::visited(
            "http://a.com",
            "Multi\nLine\r\nTitle",
            Some("1.2.3.4".to_string()),
            Some("first\n\nsecond".to_string()),
        );
        let block = serialize_record(&record);

        assert_eq!(block.matches('\n').count(), 5);
        assert!(block.contains("Name: Multi Line  Title\n"));
        assert!(block.contains("Description: first  second\n"));
    }

    #[test]
    fn test_append_never_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.txt");
        std::fs::write(&path, "URL: http://old.com\nName: Old\n\n").unwrap();

        let mut writer = StoreWriter::new(&path);
        writer.append(&PageRecord::failed("http://new.com")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "URL: http://old.com\nName: Old\n\nURL: http://new.com\nName: Failed\n\n"
        );
    }

    #[test]
    fn test_append_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fresh.txt");

        let mut writer = StoreWriter::new(&path);
        writer.append(&PageRecord::errored("http://x.com")).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_append_reports_write_failure() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let mut writer = StoreWriter::new(dir.path());

        let result = writer.append(&PageRecord::failed("http://x.com"));
        assert!(matches!(result, Err(StoreError::Write { .. })));
    }
}
