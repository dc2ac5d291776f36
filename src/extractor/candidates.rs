//! Candidate scoring.
//!
//! Text-bearing elements hand a content score to their parent and half of
//! it to their grandparent. Every scored ancestor becomes a [`Candidate`]
//! whose running score starts from its tag and class/id weight. Once the
//! scan is complete, scores are scaled down by link density and the best
//! candidate is picked.

use std::collections::HashMap;
use std::fmt;

use dom_query::{Document, NodeId, Selection};
use tracing::debug;

use crate::dom;
use crate::link_density::link_density_factor;
use crate::options::Options;
use crate::patterns::TAGS_TO_SCORE;
use crate::selector::class_weight;

/// An element paired with its accumulated content score.
#[derive(Clone)]
pub struct Candidate<'a> {
    selection: Selection<'a>,
    score: f32,
}

impl<'a> Candidate<'a> {
    /// Wrap an element with an explicit score.
    #[must_use]
    pub fn new(selection: Selection<'a>, score: f32) -> Self {
        Self { selection, score }
    }

    /// Initial candidate for an element: tag score plus class/id weight.
    #[must_use]
    pub fn from_element(selection: Selection<'a>, options: &Options) -> Self {
        let tag = dom::tag_name(&selection).unwrap_or_default();
        let score = tag_score(&tag) + class_weight(&selection, options.class_weight);
        Self { selection, score }
    }

    #[must_use]
    pub fn selection(&self) -> &Selection<'a> {
        &self.selection
    }

    #[must_use]
    pub fn score(&self) -> f32 {
        self.score
    }

    #[must_use]
    pub fn node_id(&self) -> Option<NodeId> {
        dom::node_id(&self.selection)
    }
}

impl fmt::Display for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", dom::tag_name(&self.selection).unwrap_or_default())?;
        if let Some(id) = dom::id(&self.selection).filter(|id| !id.is_empty()) {
            write!(f, "#{id}")?;
        }
        if let Some(class) = dom::class_name(&self.selection).filter(|c| !c.is_empty()) {
            write!(f, ".{class}")?;
        }
        write!(f, " => {:.2}", self.score)
    }
}

impl fmt::Debug for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Candidates keyed by node identity, iterated in insertion order.
///
/// Insertion order is the document order in which the scan first reached
/// each ancestor, which makes tie-breaking reproducible.
#[derive(Default)]
pub struct CandidateSet<'a> {
    entries: Vec<Candidate<'a>>,
    index: HashMap<NodeId, usize>,
}

impl<'a> CandidateSet<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Candidate<'a>> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    /// Candidate for the given element, if it has one.
    #[must_use]
    pub fn get_for(&self, sel: &Selection) -> Option<&Candidate<'a>> {
        dom::node_id(sel).and_then(|id| self.get(id))
    }

    /// Slot of the element's candidate, creating it on first sight.
    fn ensure(&mut self, sel: &Selection<'a>, options: &Options) -> Option<usize> {
        let id = dom::node_id(sel)?;
        if let Some(&slot) = self.index.get(&id) {
            return Some(slot);
        }

        self.entries.push(Candidate::from_element(sel.clone(), options));
        let slot = self.entries.len() - 1;
        self.index.insert(id, slot);
        Some(slot)
    }

    fn add_score(&mut self, slot: usize, delta: f32) {
        if let Some(candidate) = self.entries.get_mut(slot) {
            candidate.score += delta;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate<'a>> {
        self.entries.iter()
    }

    /// Highest-scoring candidate; the earliest one wins ties.
    #[must_use]
    pub fn best(&self) -> Option<&Candidate<'a>> {
        self.entries.iter().fold(None, |best: Option<&Candidate<'a>>, c| match best {
            Some(b) if b.score >= c.score => Some(b),
            _ => Some(c),
        })
    }
}

impl fmt::Display for CandidateSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, candidate) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{candidate}")?;
        }
        Ok(())
    }
}

/// The element chosen as the root of the article.
#[derive(Debug, Clone)]
pub enum TopCandidate<'a> {
    /// Best entry of the candidate set.
    Best(Candidate<'a>),
    /// Zero-score `<body>` used when nothing was scored.
    BodyFallback(Candidate<'a>),
}

impl<'a> TopCandidate<'a> {
    #[must_use]
    pub fn candidate(&self) -> &Candidate<'a> {
        match self {
            Self::Best(c) | Self::BodyFallback(c) => c,
        }
    }

    #[must_use]
    pub fn score(&self) -> f32 {
        self.candidate().score
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::BodyFallback(_))
    }
}

impl fmt::Display for TopCandidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Best(c) => write!(f, "{c}"),
            Self::BodyFallback(c) => write!(f, "{c} (fallback)"),
        }
    }
}

/// Base score of an element by tag.
#[must_use]
pub fn tag_score(tag: &str) -> f32 {
    match tag {
        "div" => 5.0,
        "pre" | "td" | "blockquote" | "img" => 3.0,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form" => -3.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => -5.0,
        _ => 0.0,
    }
}

/// How article-like a block of text looks.
///
/// One point as a base, one per comma plus one, and one per full hundred
/// characters up to `options.max_length_bonus`.
#[must_use]
pub fn content_score(text: &str, options: &Options) -> f32 {
    let commas = text.matches(',').count();
    let length_bonus = (text.chars().count() / 100).min(options.max_length_bonus);

    1.0 + (commas + 1) as f32 + length_bonus as f32
}

/// Score every scoring-eligible element and collect the resulting candidates.
///
/// Scores are raw sums; call [`normalize_link_density`] afterwards.
#[must_use]
pub fn score_candidates<'a>(document: &'a Document, options: &Options) -> CandidateSet<'a> {
    let mut candidates = CandidateSet::new();

    for node in document.select(TAGS_TO_SCORE).nodes() {
        let element = Selection::from(*node);
        let text = dom::text_content(&element);

        // Too little text to say anything.
        if text.chars().count() < options.min_text_length {
            continue;
        }

        let Some(parent) = dom::parent_element(&element) else {
            continue;
        };
        let grand_parent = dom::parent_element(&parent);

        let Some(parent_slot) = candidates.ensure(&parent, options) else {
            continue;
        };
        let grand_parent_slot = grand_parent
            .as_ref()
            .and_then(|gp| candidates.ensure(gp, options));

        let score = content_score(&text, options);
        candidates.add_score(parent_slot, score);
        if let Some(slot) = grand_parent_slot {
            candidates.add_score(slot, score / 2.0);
        }
    }

    candidates
}

/// Scale every candidate by `1 - link density`.
///
/// Runs once, after all content scores have been accumulated.
pub fn normalize_link_density(candidates: &mut CandidateSet) {
    for candidate in &mut candidates.entries {
        candidate.score *= link_density_factor(&candidate.selection);
    }
}

/// Pick the top candidate, falling back to a zero-score `<body>`.
///
/// Returns `None` only for documents without a `<body>` (e.g. framesets).
#[must_use]
pub fn select_top_candidate<'a>(
    document: &'a Document,
    candidates: &CandidateSet<'a>,
) -> Option<TopCandidate<'a>> {
    if let Some(best) = candidates.best() {
        return Some(TopCandidate::Best(best.clone()));
    }

    let body = document.select("body");
    if !dom::is_element(&body) {
        return None;
    }

    debug!("no candidates scored, falling back to <body>");
    Some(TopCandidate::BodyFallback(Candidate::new(body, 0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "This sentence carries enough words to be scored.";

    fn score_of(set: &CandidateSet, doc: &Document, selector: &str) -> f32 {
        set.get_for(&doc.select(selector)).map(Candidate::score).unwrap()
    }

    #[test]
    fn tag_scores() {
        assert_eq!(tag_score("div"), 5.0);
        assert_eq!(tag_score("blockquote"), 3.0);
        assert_eq!(tag_score("li"), -3.0);
        assert_eq!(tag_score("th"), -5.0);
        assert_eq!(tag_score("article"), 0.0);
    }

    #[test]
    fn content_score_counts_commas_and_length() {
        let options = Options::default();

        // 1 base + 1 (no commas) + 0 length
        assert_eq!(content_score("short text without punctuation", &options), 2.0);
        // 1 base + 3 (two commas) + 0 length
        assert_eq!(content_score("a, b, c", &options), 4.0);
        // 1 base + 1 + 2 (250 chars)
        assert_eq!(content_score(&"x".repeat(250), &options), 4.0);
    }

    #[test]
    fn content_score_length_bonus_is_capped() {
        let options = Options::default();
        assert_eq!(content_score(&"x".repeat(300), &options), 5.0);
        assert_eq!(content_score(&"x".repeat(5000), &options), 5.0);
    }

    #[test]
    fn short_elements_are_not_scored() {
        let doc = dom::parse("<html><body><div><p>too short</p></div></body></html>");
        let set = score_candidates(&doc, &Options::default());
        assert!(set.is_empty());
    }

    #[test]
    fn score_flows_to_parent_and_half_to_grandparent() {
        let doc = dom::parse(&format!(
            r#"<html><body><section id="gp"><article id="parent"><p>{SENTENCE}</p></article></section></body></html>"#
        ));
        let set = score_candidates(&doc, &Options::default());

        // 48 chars, no commas: 1 + 1 + 0
        assert_eq!(score_of(&set, &doc, "#parent"), 2.0);
        assert_eq!(score_of(&set, &doc, "#gp"), 1.0);
    }

    #[test]
    fn initial_score_uses_tag_and_class_weight() {
        let doc = dom::parse(&format!(
            r#"<html><body><div id="content"><blockquote class="sidebar"><p>{SENTENCE}</p></blockquote></div></body></html>"#
        ));
        let set = score_candidates(&doc, &Options::default());

        // blockquote: 3 - 25 + 2
        assert_eq!(score_of(&set, &doc, "blockquote"), -20.0);
        // div#content: 5 + 25, then half of the paragraph's 2
        assert_eq!(score_of(&set, &doc, "#content"), 31.0);
    }

    #[test]
    fn renamed_div_scores_as_paragraph() {
        let doc = dom::parse(
            r#"<html><body><div id="wrap"><h2>A heading that runs long enough</h2></div></body></html>"#,
        );
        assert_eq!(crate::extractor::preprocess::transform_misused_divs(&doc), 1);
        let set = score_candidates(&doc, &Options::default());

        // p tag score 0, plus 1 + 1 from the 31-char heading
        assert_eq!(score_of(&set, &doc, "p#wrap"), 2.0);
    }

    #[test]
    fn candidates_are_created_once_and_accumulate() {
        let doc = dom::parse(&format!(
            r#"<html><body><article id="a"><p>{SENTENCE}</p><p>{SENTENCE}</p><p>{SENTENCE}</p></article></body></html>"#
        ));
        let set = score_candidates(&doc, &Options::default());

        assert_eq!(set.len(), 2); // article and body
        assert_eq!(score_of(&set, &doc, "#a"), 6.0);
        assert_eq!(score_of(&set, &doc, "body"), 3.0);
    }

    #[test]
    fn parent_score_grows_with_commas() {
        let base = dom::parse(&format!("<article><p>{SENTENCE}</p></article>"));
        let more = dom::parse(&format!("<article><p>{SENTENCE}, and more, and more</p></article>"));
        let options = Options::default();

        let base_score = score_of(&score_candidates(&base, &options), &base, "article");
        let more_score = score_of(&score_candidates(&more, &options), &more, "article");
        assert!(more_score > base_score);
    }

    #[test]
    fn link_density_scales_scores() {
        let doc = dom::parse(&format!(
            r#"<html><body>
                <article id="prose"><p>{SENTENCE}</p></article>
                <nav id="links"><p><a href="/">{SENTENCE}</a></p></nav>
            </body></html>"#
        ));
        let mut set = score_candidates(&doc, &Options::default());
        normalize_link_density(&mut set);

        assert_eq!(score_of(&set, &doc, "#prose"), 2.0);
        assert_eq!(score_of(&set, &doc, "#links"), 0.0);
    }

    #[test]
    fn best_prefers_first_on_ties() {
        let doc = dom::parse(&format!(
            r#"<html><body><article id="one"><p>{SENTENCE}</p></article><article id="two"><p>{SENTENCE}</p></article></body></html>"#
        ));
        let set = score_candidates(&doc, &Options::default());

        let best = set.best().unwrap();
        assert_eq!(dom::id(best.selection()), Some("one".to_string()));
    }

    #[test]
    fn top_candidate_falls_back_to_body() {
        let doc = dom::parse("<html><body><p>short</p></body></html>");
        let set = score_candidates(&doc, &Options::default());
        let top = select_top_candidate(&doc, &set).unwrap();

        assert!(top.is_fallback());
        assert_eq!(top.score(), 0.0);
        assert_eq!(dom::tag_name(top.candidate().selection()), Some("body".to_string()));
    }

    #[test]
    fn display_mirrors_tag_id_and_class() {
        let doc = dom::parse(r#"<div id="main" class="post">x</div><span>y</span>"#);

        let div = Candidate::new(doc.select("div"), 12.5);
        assert_eq!(div.to_string(), "div#main.post => 12.50");

        let span = Candidate::new(doc.select("span"), 0.0);
        assert_eq!(span.to_string(), "span => 0.00");
    }
}
