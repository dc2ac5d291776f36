//! Character encoding detection and transcoding.
//!
//! The extractor accepts raw bytes. They are decoded to UTF-8 before
//! parsing: a byte-order mark wins, then an in-document charset
//! declaration, then UTF-8. Decoding is lossy and never fails.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the character encoding of an HTML byte buffer.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    [&*CHARSET_META_RE, &*CONTENT_TYPE_CHARSET_RE]
        .iter()
        .filter_map(|re| re.captures(&head).and_then(|c| c.get(1)))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD. A leading BOM is stripped.
///
/// # Examples
///
/// ```
/// use rs_readability::encoding::decode_html;
///
/// let html = decode_html(b"<html><body>Hello, World!</body></html>");
/// assert!(html.contains("Hello, World!"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let encoding = detect_encoding(html);
    let (decoded, _had_errors) = encoding.decode_with_bom_removal(html);
    decoded
}
