//! Base URL resolution.
//!
//! Reads the document's `<head><base href>` declaration and keeps it only
//! when it is a well-formed absolute URL.

use url::Url;

use crate::dom::Document;
use crate::patterns::BASE_SELECTOR;

/// Check if a string is an absolute URL (scheme and host present).
///
/// # Examples
///
/// ```
/// use rs_readability::base_url::is_absolute_url;
///
/// assert!(is_absolute_url("https://example.com/a"));
/// assert!(!is_absolute_url("/relative"));
/// ```
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }

    Url::parse(s).is_ok_and(|url| url.has_host())
}

/// Absolute `<base href>` of the document, or an empty string.
///
/// Only the first `head base` element is consulted. A missing element,
/// missing attribute or relative/malformed value all yield `""`.
#[must_use]
pub fn resolve_base_url(document: &Document) -> String {
    // Selection::attr reads the first matched element only.
    document
        .select(BASE_SELECTOR)
        .attr("href")
        .map(|href| href.trim().to_string())
        .filter(|href| is_absolute_url(href))
        .unwrap_or_default()
}
