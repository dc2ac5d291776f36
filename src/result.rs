//! Result type for extraction output.

use serde::{Deserialize, Serialize};

/// Result of content extraction from an HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Absolute URL declared by `<head><base href>`, or empty.
    pub base_url: String,

    /// Extracted article as an HTML fragment.
    ///
    /// Always wrapped in a single outer `<div>`; the worst case is `<div></div>`.
    pub content: String,
}

impl ExtractResult {
    /// True when the article wrapper holds no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content == "<div></div>"
    }
}
