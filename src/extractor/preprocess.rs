//! Tree preprocessing.
//!
//! Runs before scoring and mutates the document in place. Each step first
//! collects its targets with a read-only traversal, then applies the
//! mutations, so removals and renames never disturb the walk.

use dom_query::{Document, Selection};
use tracing::trace;

use crate::dom;
use crate::options::Options;
use crate::patterns::{DIV_TO_P_ELEMENTS, SCRIPT_SELECTOR};
use crate::selector::is_unlikely_candidate;

/// Elements never removed by the unlikely-candidate pass.
const PROTECTED_TAGS: &[&str] = &["html", "body"];

/// Code samples must survive verbatim.
const CODE_TAGS: &[&str] = &["pre", "code"];

/// Run every enabled preprocessing step in order.
pub fn preprocess(document: &Document, options: &Options) {
    remove_scripts(document);

    if options.transform_misused_divs {
        transform_misused_divs(document);
    }

    if options.strip_unlikely_candidates {
        remove_unlikely_candidates(document);
    }
}

/// Remove every `<script>` and `<style>` element.
pub fn remove_scripts(document: &Document) {
    document.select(SCRIPT_SELECTOR).remove();
}

/// Rename `<div>`s that wrap no block-level markup to `<p>`.
///
/// Returns the number of renamed elements. Renamed elements are no longer
/// `<div>`s, so a second run leaves the tree unchanged.
pub fn transform_misused_divs(document: &Document) -> usize {
    let misused: Vec<Selection> = document
        .select("div")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|div| !DIV_TO_P_ELEMENTS.is_match(&dom::inner_html(div)))
        .collect();

    for div in &misused {
        dom::rename(div, "p");
    }

    trace!(count = misused.len(), "renamed misused divs to paragraphs");
    misused.len()
}

/// Remove elements whose class/id names mark them as non-content.
///
/// The root, `<body>`, and anything inside `<pre>`/`<code>` are exempt.
/// Returns the number of removed elements.
pub fn remove_unlikely_candidates(document: &Document) -> usize {
    let unlikely: Vec<Selection> = document
        .select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| {
            dom::tag_name(sel).is_some_and(|tag| !PROTECTED_TAGS.contains(&tag.as_str()))
        })
        .filter(|sel| !dom::has_ancestor_or_self(sel, CODE_TAGS))
        .filter(is_unlikely_candidate)
        .collect();

    for sel in &unlikely {
        trace!(
            class = %dom::class_name(sel).unwrap_or_default(),
            id = %dom::id(sel).unwrap_or_default(),
            "removing unlikely candidate"
        );
        dom::remove(sel);
    }

    unlikely.len()
}
