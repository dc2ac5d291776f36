//! Article assembly.
//!
//! The top candidate and its element siblings are visited in document
//! order. Each one gets a [`SiblingDecision`], and the emitted ones are
//! serialized into a single wrapper `<div>`.

use dom_query::Selection;

use super::candidates::{CandidateSet, TopCandidate};
use crate::dom;
use crate::link_density::link_density;
use crate::options::Options;

/// What to do with one sibling of the top candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiblingDecision {
    /// Emit the element's inner markup wrapped in this tag.
    EmitAs(String),
    /// Leave the element out.
    Skip,
}

/// Decide whether `sibling` belongs to the article.
///
/// - the top candidate itself is emitted as `div` (unless it is the body fallback)
/// - a sibling candidate scoring at least the sibling threshold is emitted as `div`
/// - a `<p>` is kept under its own tag when it reads like prose
#[must_use]
pub fn classify_sibling(
    sibling: &Selection,
    top: &TopCandidate,
    candidates: &CandidateSet,
    options: &Options,
) -> SiblingDecision {
    let sibling_id = dom::node_id(sibling);

    if !top.is_fallback() && sibling_id == top.candidate().node_id() {
        return SiblingDecision::EmitAs("div".to_string());
    }

    let threshold = options.sibling_threshold(top.score());
    if candidates
        .get_for(sibling)
        .is_some_and(|candidate| candidate.score() >= threshold)
    {
        return SiblingDecision::EmitAs("div".to_string());
    }

    match dom::tag_name(sibling) {
        Some(tag) if tag == "p" && is_prose_paragraph(sibling, options) => {
            SiblingDecision::EmitAs(tag)
        }
        _ => SiblingDecision::Skip,
    }
}

/// Long paragraphs need a low link density; short ones must carry no links
/// and look like a sentence.
fn is_prose_paragraph(paragraph: &Selection, options: &Options) -> bool {
    let density = link_density(paragraph);
    let text = dom::text_content(paragraph);

    if text.chars().count() >= options.min_paragraph_length {
        density < options.max_paragraph_link_density
    } else {
        density == 0.0 && contains_sentence(&text)
    }
}

/// Ends with a period or has a period followed by a space.
#[must_use]
pub fn contains_sentence(text: &str) -> bool {
    text.ends_with('.') || text.contains(". ")
}

/// Build the article fragment around the top candidate.
///
/// Without a top candidate the result is the empty wrapper `<div></div>`.
#[must_use]
pub fn assemble_article(
    top: Option<&TopCandidate>,
    candidates: &CandidateSet,
    options: &Options,
) -> String {
    let mut output = String::from("<div>");

    if let Some(top) = top {
        for sibling in dom::siblings_and_self(top.candidate().selection()) {
            if let SiblingDecision::EmitAs(tag) = classify_sibling(&sibling, top, candidates, options) {
                write_element(&mut output, &sibling, &tag);
            }
        }
    }

    output.push_str("</div>");
    output
}

fn write_element(output: &mut String, element: &Selection, tag: &str) {
    output.push('<');
    output.push_str(tag);
    output.push('>');
    output.push_str(&dom::inner_html(element));
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}
