//! Extraction orchestration.
//!
//! Resolve the base URL, preprocess the tree, score, normalize, select and
//! assemble. Each stage runs exactly once, in that order.

use tracing::debug;

use crate::base_url::resolve_base_url;
use crate::dom::Document;
use crate::extractor::{article, candidates, preprocess};
use crate::options::Options;
use crate::result::ExtractResult;

/// Run the full pipeline over an already-decoded document.
///
/// The parser always synthesizes `<html>`, `<head>` and `<body>`, so any
/// input yields a tree to work on.
pub(crate) fn extract_content(html: &str, options: &Options) -> ExtractResult {
    let document = Document::from(html);
    extract_document(&document, options)
}

fn extract_document(document: &Document, options: &Options) -> ExtractResult {
    // Read before preprocessing mutates the tree.
    let base_url = resolve_base_url(document);

    preprocess::preprocess(document, options);

    let mut scored = candidates::score_candidates(document, options);
    candidates::normalize_link_density(&mut scored);
    let top = candidates::select_top_candidate(document, &scored);

    debug!(
        base_url = %base_url,
        count = scored.len(),
        candidates = %scored,
        top_candidate = %top.as_ref().map(ToString::to_string).unwrap_or_default(),
        "readability parsing"
    );

    let content = article::assemble_article(top.as_ref(), &scored, options);

    ExtractResult { base_url, content }
}
