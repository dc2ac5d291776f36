//! Class/id weighting.
//!
//! Each of `class` and `id` contributes independently: a negative match
//! subtracts the configured weight, otherwise a positive match adds it.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{NEGATIVE_CLASS, POSITIVE_CLASS};

/// Signal carried by one attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightSignal {
    Negative,
    Neutral,
    Positive,
}

impl WeightSignal {
    /// Signed multiplier for the configured class weight.
    #[must_use]
    pub fn factor(self) -> f32 {
        match self {
            Self::Negative => -1.0,
            Self::Neutral => 0.0,
            Self::Positive => 1.0,
        }
    }
}

/// Classify one attribute value. Negative terms win over positive ones.
#[must_use]
pub fn attribute_weight(value: &str) -> WeightSignal {
    let value = value.to_lowercase();

    if NEGATIVE_CLASS.is_match(&value) {
        WeightSignal::Negative
    } else if POSITIVE_CLASS.is_match(&value) {
        WeightSignal::Positive
    } else {
        WeightSignal::Neutral
    }
}

/// Combined `class` + `id` weight of an element.
#[must_use]
pub fn class_weight(sel: &Selection, weight: f32) -> f32 {
    [dom::class_name(sel), dom::id(sel)]
        .iter()
        .flatten()
        .map(|value| attribute_weight(value).factor() * weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_signals() {
        assert_eq!(attribute_weight("article-body"), WeightSignal::Positive);
        assert_eq!(attribute_weight("Sidebar"), WeightSignal::Negative);
        assert_eq!(attribute_weight("wrapper"), WeightSignal::Neutral);
        assert_eq!(attribute_weight(""), WeightSignal::Neutral);
    }

    #[test]
    fn negative_wins_within_one_attribute() {
        // "post" is positive, "share" is negative
        assert_eq!(attribute_weight("post-share"), WeightSignal::Negative);
    }

    #[test]
    fn class_and_id_add_up() {
        let doc = dom::parse(
            r#"<div id="content" class="entry">a</div>
               <div id="sidebar" class="post">b</div>
               <div id="comments" class="widget">c</div>
               <span>d</span>"#,
        );

        assert_eq!(class_weight(&doc.select("#content"), 25.0), 50.0);
        assert_eq!(class_weight(&doc.select("#sidebar"), 25.0), 0.0);
        assert_eq!(class_weight(&doc.select("#comments"), 25.0), -50.0);
        assert_eq!(class_weight(&doc.select("span"), 25.0), 0.0);
    }
}
