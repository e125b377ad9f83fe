//! Storage module for the flat-file page store
//!
//! This module owns the only contract between crawl time and query time:
//! - `PageRecord`, the fixed-shape record the crawler produces
//! - The block serializer and append-only writer
//! - The store parser that rehydrates blocks for the query phase

mod reader;
mod traits;
mod writer;

pub use reader::{load_store, parse_store};
pub use traits::{MemorySink, RecordSink, StoreError, StoreResult};
pub use writer::{serialize_record, StoreWriter};

/// Field name for the visited URL
pub const FIELD_URL: &str = "URL";
/// Field name for the page title or failure sentinel
pub const FIELD_NAME: &str = "Name";
/// Field name for the resolved host address
pub const FIELD_IP: &str = "IP";
/// Field name for the meta description
pub const FIELD_DESCRIPTION: &str = "Description";

/// Sentinel name for pages that answered with a non-200 status
pub const NAME_FAILED: &str = "Failed";
/// Sentinel name for transport errors and unparseable pages
pub const NAME_ERROR: &str = "Error";

/// One visit outcome, as written to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub url: String,
    pub name: String,
    pub ip: Option<String>,
    pub description: Option<String>,
}

impl PageRecord {
    /// Record for a successfully fetched page
    pub fn visited(
        url: impl Into<String>,
        title: impl Into<String>,
        ip: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            url: url.into(),
            name: title.into(),
            ip,
            description,
        }
    }

    /// Record for a page that answered with a non-200 status
    pub fn failed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: NAME_FAILED.to_string(),
            ip: None,
            description: None,
        }
    }

    /// Record for a page that could not be fetched or parsed
    pub fn errored(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: NAME_ERROR.to_string(),
            ip: None,
            description: None,
        }
    }
}

/// One block read back from the store
///
/// Blocks carry no schema, so this keeps whatever `Key: Value` pairs the
/// block had, in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredRecord {
    fields: Vec<(String, String)>,
}

impl StoredRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field; a repeated key keeps its first position and takes the
    /// new value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn url(&self) -> Option<&str> {
        self.get(FIELD_URL)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(FIELD_NAME)
    }

    pub fn ip(&self) -> Option<&str> {
        self.get(FIELD_IP)
    }

    pub fn description(&self) -> Option<&str> {
        self.get(FIELD_DESCRIPTION)
    }

    /// Projects the block onto the fixed record shape
    ///
    /// Returns `None` unless both `URL` and `Name` are present.
    pub fn to_page_record(&self) -> Option<PageRecord> {
        Some(PageRecord {
            url: self.url()?.to_string(),
            name: self.name()?.to_string(),
            ip: self.ip().map(str::to_string),
            description: self.description().map(str::to_string),
        })
    }
}

impl From<&PageRecord> for StoredRecord {
    fn from(record: &PageRecord) -> Self {
        let mut stored = StoredRecord::new();
        stored.insert(FIELD_URL, record.url.as_str());
        stored.insert(FIELD_NAME, record.name.as_str());
        if let Some(ip) = &record.ip {
            stored.insert(FIELD_IP, ip.as_str());
        }
        if let Some(description) = &record.description {
            stored.insert(FIELD_DESCRIPTION, description.as_str());
        }
        stored
    }
}
