//! Unlikely-candidate detection.
//!
//! Strong markers are checked first and can never be overridden. Unlikely
//! markers are overridden by any "maybe" marker in the same value.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{MAYBE_CANDIDATES, STRONG_CANDIDATES, UNLIKELY_CANDIDATES};

/// Verdict for one `class` or `id` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalDecision {
    /// No marker matched.
    Keep,
    /// An unlikely marker matched but a maybe marker rescued it.
    KeepFalsePositive,
    /// An unlikely marker matched with no override.
    Remove,
    /// A strong marker matched.
    RemoveStrong,
}

impl RemovalDecision {
    /// True for both removal verdicts.
    #[must_use]
    pub fn should_remove(self) -> bool {
        matches!(self, Self::Remove | Self::RemoveStrong)
    }
}

/// Classify an attribute value (case-insensitive substring matching).
///
/// # Example
///
/// ```rust
/// use rs_readability::selector::{classify_removal, RemovalDecision};
///
/// assert_eq!(classify_removal("sidebar"), RemovalDecision::Remove);
/// assert_eq!(classify_removal("sidebar-main"), RemovalDecision::KeepFalsePositive);
/// assert_eq!(classify_removal("g-plus article"), RemovalDecision::RemoveStrong);
/// ```
#[must_use]
pub fn classify_removal(value: &str) -> RemovalDecision {
    let value = value.to_lowercase();

    if STRONG_CANDIDATES.iter().any(|strong| value.contains(strong)) {
        return RemovalDecision::RemoveStrong;
    }

    if !UNLIKELY_CANDIDATES.iter().any(|unlikely| value.contains(unlikely)) {
        return RemovalDecision::Keep;
    }

    if MAYBE_CANDIDATES.iter().any(|maybe| value.contains(maybe)) {
        RemovalDecision::KeepFalsePositive
    } else {
        RemovalDecision::Remove
    }
}

/// True when the element's `class`, or failing that its `id`, marks it as
/// a non-content region.
///
/// Structural exemptions (root, body, code blocks) are the caller's concern.
#[must_use]
pub fn is_unlikely_candidate(sel: &Selection) -> bool {
    dom::class_name(sel).is_some_and(|class| classify_removal(&class).should_remove())
        || dom::id(sel).is_some_and(|id| classify_removal(&id).should_remove())
}
