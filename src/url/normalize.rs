use url::Url;

/// Normalizes a URL into the key used by the visited-set
///
/// # Normalization Steps
///
/// 1. Parse the URL (lowercases scheme and host, resolves dot segments)
/// 2. Remove fragment (everything after #)
/// 3. Remove trailing slash (except for root /)
///
/// Strings that do not parse as URLs are keyed by their trimmed text, so
/// they still deduplicate against themselves.
///
/// # Examples
///
/// ```
/// use pagetrail::url::normalize_url;
///
/// assert_eq!(normalize_url("https://EXAMPLE.com/page/#top"), "https://example.com/page");
/// assert_eq!(normalize_url("https://example.com"), "https://example.com/");
/// ```
pub fn normalize_url(url_str: &str) -> String {
    let mut url = match Url::parse(url_str.trim()) {
        Ok(url) => url,
        Err(_) => return url_str.trim().to_string(),
    };

    url.set_fragment(None);

    let path = url.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        url.set_path(path.trim_end_matches('/'));
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_trailing_slash() {
        assert_eq!(
            normalize_url("https://example.com/page/"),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_keep_root_slash() {
        assert_eq!(normalize_url("https://example.com/"), "https://example.com/");
    }

    #[test]
    fn test_empty_path_becomes_root() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com/");
    }

    #[test]
    fn test_remove_fragment() {
        assert_eq!(
            normalize_url("https://example.com/page#section"),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_lowercase_host_keeps_path_case() {
        assert_eq!(
            normalize_url("https://EXAMPLE.COM/Page"),
            "https://example.com/Page"
        );
    }

    #[test]
    fn test_dot_segments_resolved() {
        assert_eq!(
            normalize_url("https://example.com/a/../b/./c"),
            "https://example.com/b/c"
        );
    }

    #[test]
    fn test_query_is_kept() {
        assert_eq!(
            normalize_url("https://example.com/search?q=rust"),
            "https://example.com/search?q=rust"
        );
    }

    #[test]
    fn test_scheme_is_significant() {
        assert_ne!(
            normalize_url("http://example.com/"),
            normalize_url("https://example.com/")
        );
    }

    #[test]
    fn test_unparsable_url_keyed_by_text() {
        assert_eq!(normalize_url("  not a url "), "not a url");
    }
}
