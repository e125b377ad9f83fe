//! URL handling module for Pagetrail
//!
//! This module provides the host extraction used by the resolver and the
//! normalization used as the visited-set key when deduplication is enabled.

mod host;
mod normalize;

pub use host::extract_host;
pub use normalize::normalize_url;

/// Returns true if the href should be followed as an outbound link
///
/// Only values starting with `http` qualify, so relative links, fragments
/// and `mailto:`-style schemes are never followed.
///
/// # Examples
///
/// ```
/// use pagetrail::url::is_followable;
///
/// assert!(is_followable("https://example.com/"));
/// assert!(!is_followable("/about"));
/// ```
pub fn is_followable(href: &str) -> bool {
    href.starts_with("http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_links_are_followable() {
        assert!(is_followable("http://example.com"));
        assert!(is_followable("https://example.com/page"));
    }

    #[test]
    fn test_relative_and_special_links_are_not_followable() {
        assert!(!is_followable("/page"));
        assert!(!is_followable("page.html"));
        assert!(!is_followable("#top"));
        assert!(!is_followable("mailto:someone@example.com"));
        assert!(!is_followable(" https://example.com"));
    }
}
