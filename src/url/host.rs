/// Extracts the host portion of a URL string
///
/// The scheme is stripped by taking everything after the first `//` (or the
/// whole string when there is none), and the host is everything up to the
/// next `/`. A `:port` suffix is kept; the resolver deals with it.
///
/// # Arguments
///
/// * `url` - The URL string to extract the host from
///
/// # Returns
///
/// * `Some(&str)` - The host, possibly with a port
/// * `None` - If the host part is empty
///
/// # Examples
///
/// ```
/// use pagetrail::url::extract_host;
///
/// assert_eq!(extract_host("https://example.com/path"), Some("example.com"));
/// assert_eq!(extract_host("http://127.0.0.1:8080/"), Some("127.0.0.1:8080"));
/// assert_eq!(extract_host("https:///path"), None);
/// ```
pub fn extract_host(url: &str) -> Option<&str> {
    let after_scheme = match url.find("//") {
        Some(idx) => &url[idx + 2..],
        None => url,
    };

    let host = match after_scheme.find('/') {
        Some(idx) => &after_scheme[..idx],
        None => after_scheme,
    };

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
