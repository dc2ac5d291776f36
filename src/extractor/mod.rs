//! Readability extraction pipeline.
//!
//! # Module Structure
//!
//! - `preprocess`: script/style removal, misused-div renaming, unlikely-candidate removal
//! - `candidates`: candidate scoring, link-density normalization, top-candidate selection
//! - `article`: sibling classification and article serialization
//!
//! # Usage
//!
//! ```rust
//! use rs_readability::{dom, Options};
//! use rs_readability::extractor::{article, candidates, preprocess};
//!
//! let doc = dom::parse("<html><body><div><p>Some article text, long enough to count.</p></div></body></html>");
//! let options = Options::default();
//!
//! preprocess::preprocess(&doc, &options);
//! let mut set = candidates::score_candidates(&doc, &options);
//! candidates::normalize_link_density(&mut set);
//! let top = candidates::select_top_candidate(&doc, &set);
//! let html = article::assemble_article(top.as_ref(), &set, &options);
//! assert!(html.starts_with("<div>"));
//! ```

pub mod article;
pub mod candidates;
pub mod preprocess;

pub use article::{assemble_article, SiblingDecision};
pub use candidates::{Candidate, CandidateSet, TopCandidate};
