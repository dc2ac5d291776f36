//! DOM Operations Adapter
//!
//! Thin layer over `dom_query` exposing the handful of tree operations the
//! readability pipeline needs. Elements are addressed through `Selection`s
//! and identified by `NodeId`, the arena handle of the parsed tree.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};
pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase) of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Identity of the first node in the selection.
#[inline]
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}

/// True when the selection's first node is an element.
#[must_use]
pub fn is_element(sel: &Selection) -> bool {
    sel.nodes().first().is_some_and(NodeRef::is_element)
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Number of characters of text inside the selection.
#[must_use]
pub fn text_length(sel: &Selection) -> usize {
    sel.text().chars().count()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

// === Tree Navigation ===

/// Parent element, if the node has one.
///
/// The document node above `<html>` is not an element and yields `None`.
#[must_use]
pub fn parent_element<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    let parent = sel.nodes().first()?.parent()?;
    parent.is_element().then(|| Selection::from(parent))
}

/// Element children of the node's parent in document order, the node included.
///
/// A parentless node is returned alone.
#[must_use]
pub fn siblings_and_self<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    let Some(node) = sel.nodes().first() else {
        return Vec::new();
    };
    match node.parent() {
        Some(parent) => parent
            .children()
            .into_iter()
            .filter(NodeRef::is_element)
            .map(Selection::from)
            .collect(),
        None => vec![sel.clone()],
    }
}

/// True when the node or any of its ancestors carries one of `tags`.
#[must_use]
pub fn has_ancestor_or_self(sel: &Selection, tags: &[&str]) -> bool {
    let Some(node) = sel.nodes().first() else {
        return false;
    };
    std::iter::once(*node)
        .chain(node.ancestors(None))
        .filter_map(|n| n.node_name())
        .any(|name| tags.iter().any(|tag| name.eq_ignore_ascii_case(tag)))
}

// === Tree Manipulation ===

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Rename element tag
#[inline]
pub fn rename(sel: &Selection, new_tag: &str) {
    sel.rename(new_tag);
}
