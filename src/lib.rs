//! # rs-readability
//!
//! Readability-style main content extraction.
//!
//! Given an HTML document, this library isolates the main article and
//! drops navigation, ads, sidebars and other boilerplate. The result is a
//! cleaned HTML fragment plus the document's declared base URL.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::extract;
//!
//! let html = r#"<html><head><base href="https://example.com/"></head>
//! <body><div id="content"><p>The main content of this page, with enough words to be noticed.</p></div>
//! <div class="sidebar"><a href="/">Home</a></div></body></html>"#;
//!
//! let result = extract(html.as_bytes())?;
//! assert_eq!(result.base_url, "https://example.com/");
//! assert!(result.content.contains("The main content"));
//! assert!(!result.content.contains("Home"));
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Base URL**: absolute `<head><base href>` or empty
//! 2. **Preprocessing**: strip scripts/styles, rename misused `<div>`s, drop unlikely candidates
//! 3. **Scoring**: text blocks feed their parent and grandparent
//! 4. **Normalization**: scores scaled by `1 - link density`
//! 5. **Selection**: best candidate, or `<body>` when nothing scored
//! 6. **Assembly**: the top candidate plus qualifying siblings

use std::io::Read;

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Base URL resolution.
pub mod base_url;

/// Class/id classification rules.
pub mod selector;

/// Link density computation.
pub mod link_density;

/// Extraction pipeline stages (preprocessing, scoring, assembly).
pub mod extractor;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::ExtractResult;

/// Extracts the main content from an HTML byte stream using default options.
///
/// The reader is consumed to the end and decoded (see [`encoding`]) before
/// parsing. Only I/O failures are errors; parsing itself is lenient.
pub fn extract<R: Read>(reader: R) -> Result<ExtractResult> {
    extract_with_options(reader, &Options::default())
}

/// Extracts the main content from an HTML byte stream with custom options.
///
/// # Example
///
/// ```rust
/// use rs_readability::{extract_with_options, Options};
///
/// let options = Options {
///     strip_unlikely_candidates: false,
///     ..Options::default()
/// };
/// let result = extract_with_options(&b"<p>hi</p>"[..], &options)?;
/// assert_eq!(result.content, "<div></div>");
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub fn extract_with_options<R: Read>(mut reader: R, options: &Options) -> Result<ExtractResult> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(extract_bytes_with_options(&bytes, options))
}

/// Extracts the main content from an in-memory HTML buffer.
#[must_use]
pub fn extract_bytes(html: &[u8]) -> ExtractResult {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts the main content from an in-memory HTML buffer with custom options.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> ExtractResult {
    let html = encoding::decode_html(html);
    extract::extract_content(&html, options)
}

/// Extracts the main content from already-decoded HTML.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract_str;
///
/// let result = extract_str("<html><body><div>short</div></body></html>");
/// assert_eq!(result.content, "<div></div>");
/// assert_eq!(result.base_url, "");
/// ```
#[must_use]
pub fn extract_str(html: &str) -> ExtractResult {
    extract::extract_content(html, &Options::default())
}

/// Extracts the main content from already-decoded HTML with custom options.
#[must_use]
pub fn extract_str_with_options(html: &str, options: &Options) -> ExtractResult {
    extract::extract_content(html, options)
}
