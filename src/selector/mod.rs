//! Class/id classification rules.
//!
//! Both classifiers are pure functions over a single attribute value, so
//! they can be tested without building a tree. The element-level helpers
//! read `class` and `id` off a `Selection` and combine the verdicts.
//!
//! - `unlikely`: should an element be removed before scoring?
//! - `weight`: how much does the element's naming raise or lower its score?

pub mod unlikely;
pub mod weight;

pub use unlikely::{classify_removal, is_unlikely_candidate, RemovalDecision};
pub use weight::{attribute_weight, class_weight, WeightSignal};
