use crate::search::QueryError;
use crate::storage::{StoredRecord, FIELD_IP, FIELD_NAME};
use std::fmt;
use std::str::FromStr;

/// Field used to order search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum SortKey {
    /// Keep store order
    #[default]
    None,
    /// Order by page title
    Name,
    /// Order by address, compared as text
    Ip,
}

impl SortKey {
    /// The record field this key sorts on, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Name => Some(FIELD_NAME),
            Self::Ip => Some(FIELD_IP),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Name => write!(f, "Name"),
            Self::Ip => write!(f, "IP"),
        }
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "name" => Ok(Self::Name),
            "ip" => Ok(Self::Ip),
            _ => Err(QueryError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Sorts search results in place by the chosen field
///
/// The sort is stable and ascending by the raw string value; a missing field
/// sorts as the empty string. Addresses are compared as text, so `10.0.0.1`
/// comes before `2.0.0.1`.
pub fn sort_results(results: &mut [&StoredRecord], key: SortKey) {
    let Some(field) = key.field() else {
        return;
    };

    results.sort_by(|a, b| {
        let left = a.get(field).unwrap_or("");
        let right = b.get(field).unwrap_or("");
        left.cmp(right)
    });
}
