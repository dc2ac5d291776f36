//! Term lists and compiled regex patterns used by the extraction pipeline.
//!
//! Class/id vocabularies are kept here as data so the classifiers in
//! [`crate::selector`] stay pure functions over attribute values.
//! Patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Unlikely Candidate Vocabulary (substring matching, lower-case)
// =============================================================================

/// Markers that always mean "not content". No override applies.
pub const STRONG_CANDIDATES: &[&str] = &["popupbody", "-ad", "g-plus"];

/// Markers that rescue an otherwise unlikely class/id from removal.
pub const MAYBE_CANDIDATES: &[&str] = &["and", "article", "body", "column", "main", "shadow"];

/// Markers of non-content regions (navigation, comments, ads, chrome).
pub const UNLIKELY_CANDIDATES: &[&str] = &[
    "banner",
    "breadcrumbs",
    "combx",
    "comment",
    "community",
    "cover-wrap",
    "disqus",
    "extra",
    "foot",
    "header",
    "legends",
    "menu",
    "modal",
    "related",
    "remark",
    "replies",
    "rss",
    "shoutbox",
    "sidebar",
    "skyscraper",
    "social",
    "sponsor",
    "supplemental",
    "ad-break",
    "agegate",
    "pagination",
    "pager",
    "popup",
    "yom-remote",
];

// =============================================================================
// Class/Id Weight Patterns
// =============================================================================

/// Class/id names that lower a node's score.
pub static NEGATIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"hid|banner|combx|comment|com-|contact|foot|masthead|media|meta|modal|outbrain|promo|related|scroll|share|shoutbox|sidebar|skyscraper|sponsor|shopping|tags|tool|widget|byline|author|dateline|writtenby",
    )
    .expect("NEGATIVE_CLASS regex")
});

/// Class/id names that raise a node's score.
pub static POSITIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"article|body|content|entry|hentry|h-entry|main|page|pagination|post|text|blog|story")
        .expect("POSITIVE_CLASS regex")
});

// =============================================================================
// Markup Patterns
// =============================================================================

/// Block-level opening tags whose presence keeps a `<div>` a `<div>`.
pub static DIV_TO_P_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:a|blockquote|dl|div|img|ol|p|pre|table|ul)[ />]")
        .expect("DIV_TO_P_ELEMENTS regex")
});

// =============================================================================
// CSS Selectors
// =============================================================================

/// Elements whose text feeds the candidate scorer.
pub const TAGS_TO_SCORE: &str = "section, h2, h3, h4, h5, h6, p, td, pre, div";

/// Elements stripped unconditionally before analysis.
pub const SCRIPT_SELECTOR: &str = "script, style";

/// Location of the document base URL declaration.
pub const BASE_SELECTOR: &str = "head base";
