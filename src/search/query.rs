use crate::search::QueryError;
use crate::storage::StoredRecord;

/// Splits a phrase on whitespace and lowercases each token
///
/// # Examples
///
/// ```
/// use pagetrail::search::tokenize;
///
/// assert_eq!(tokenize("  Rust   CRAWLER "), vec!["rust", "crawler"]);
/// assert!(tokenize(" \t ").is_empty());
/// ```
pub fn tokenize(phrase: &str) -> Vec<String> {
    phrase.split_whitespace().map(str::to_lowercase).collect()
}

/// Returns the records matching every token of `phrase`, in store order
///
/// A record matches when each token is a case-insensitive substring of at
/// least one of its field values. Different tokens may match different
/// fields.
///
/// # Arguments
///
/// * `records` - Records loaded from the store
/// * `phrase` - Free-text search phrase
///
/// # Returns
///
/// * `Ok(Vec<&StoredRecord>)` - Matching records (possibly none)
/// * `Err(QueryError::EmptyQuery)` - The phrase has no tokens; nothing was scanned
pub fn search<'a>(
    records: &'a [StoredRecord],
    phrase: &str,
) -> Result<Vec<&'a StoredRecord>, QueryError> {
    let tokens = tokenize(phrase);
    if tokens.is_empty() {
        return Err(QueryError::EmptyQuery);
    }

    Ok(records
        .iter()
        .filter(|record| matches_all(record, &tokens))
        .collect())
}

fn matches_all(record: &StoredRecord, tokens: &[String]) -> bool {
    let values: Vec<String> = record.values().map(str::to_lowercase).collect();

    tokens
        .iter()
        .all(|token| values.iter().any(|value| value.contains(token.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::PageRecord;

    fn sample_records() -> Vec<StoredRecord> {
        vec![
            StoredRecord::from(&PageRecord::visited(
                "http://a.com",
                "A",
                Some("1.2.3.4".to_string()),
                Some("test site".to_string()),
            )),
            StoredRecord::from(&PageRecord::visited(
                "http://b.com",
                "B",
                Some("5.6.7.8".to_string()),
                Some("other".to_string()),
            )),
        ]
    }

    fn urls<'a>(records: &[&'a StoredRecord]) -> Vec<&'a str> {
        records.iter().filter_map(|r| r.url()).collect()
    }

    #[test]
    fn test_single_term() {
        let records = sample_records();
        let results = search(&records, "test").unwrap();
        assert_eq!(urls(&results), vec!["http://a.com"]);
    }

    #[test]
    fn test_terms_must_all_match_one_record() {
        let records = sample_records();
        assert!(search(&records, "site other").unwrap().is_empty());
    }

    #[test]
    fn test_terms_may_match_different_fields() {
        let records = sample_records();
        let results = search(&records, "b.com other 5.6").unwrap();
        assert_eq!(urls(&results), vec!["http://b.com"]);
    }

    #[test]
    fn test_case_insensitive() {
        let records = sample_records();
        let results = search(&records, "TEST Site").unwrap();
        assert_eq!(urls(&results), vec!["http://a.com"]);

        let mut shouting = StoredRecord::new();
        shouting.insert("Name", "LOUD PAGE");
        let results = search(std::slice::from_ref(&shouting), "loud").unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_results_keep_store_order() {
        let records = sample_records();
        let results = search(&records, "http").unwrap();
        assert_eq!(urls(&results), vec!["http://a.com", "http://b.com"]);
    }

    #[test]
    fn test_keys_are_not_searched() {
        let records = sample_records();
        assert!(search(&records, "description").unwrap().is_empty());
    }

    #[test]
    fn test_empty_phrase_is_an_error() {
        let records = sample_records();
        assert_eq!(search(&records, ""), Err(QueryError::EmptyQuery));
        assert_eq!(search(&records, "   \t\n"), Err(QueryError::EmptyQuery));
    }

    #[test]
    fn test_record_without_fields_never_matches() {
        let records = vec![StoredRecord::new()];
        assert!(search(&records, "anything").unwrap().is_empty());
    }
}
