//! HTML parser for extracting page metadata and links
//!
//! This module handles parsing HTML content to extract:
//! - Page title (required; its absence fails the page)
//! - Meta description
//! - Outbound absolute links to follow

use crate::url::is_followable;
use scraper::{Html, Selector};
use thiserror::Error;

/// Errors raised while extracting a fetched page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Page has no <title> element")]
    MissingTitle,
}

/// Extracted information from an HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: String,

    /// The `content` of `<meta name="description">`, if any
    pub description: Option<String>,

    /// Outbound links, raw `href` values in document order
    pub links: Vec<String>,
}

/// Parses HTML content and extracts title, description and links
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="...">` where the raw value starts with `http`
///
/// **Exclude:**
/// - Relative links (`/page`, `page.html`, `../up`)
/// - Fragment-only links and non-HTTP schemes (`mailto:`, `javascript:`)
///
/// Duplicate links are kept; the traversal decides what to do with them.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
///
/// # Returns
///
/// * `Ok(ParsedPage)` - Successfully parsed page
/// * `Err(ParseError::MissingTitle)` - The document has no `<title>`
///
/// # Example
///
/// ```
/// use pagetrail::crawler::parse_html;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="https://example.com/">Link</a></body></html>"#;
/// let parsed = parse_html(html).unwrap();
/// assert_eq!(parsed.title, "Test");
/// assert_eq!(parsed.links, vec!["https://example.com/".to_string()]);
/// ```
pub fn parse_html(html: &str) -> Result<ParsedPage, ParseError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document).ok_or(ParseError::MissingTitle)?;
    let description = extract_description(&document);
    let links = extract_links(&document);

    Ok(ParsedPage {
        title,
        description,
        links,
    })
}

/// Extracts the text of the first `<title>` element, whitespace included
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// Extracts the `content` attribute of the first `<meta name="description">`
fn extract_description(document: &Html) -> Option<String> {
    let meta_selector = Selector::parse("meta[name]").ok()?;

    document
        .select(&meta_selector)
        .find(|element| element.value().attr("name") == Some("description"))
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}

/// Extracts every followable anchor target
fn extract_links(document: &Html) -> Vec<String> {
    let a_selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| is_followable(href))
        .map(str::to_string)
        .collect()
}
