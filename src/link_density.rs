//! Link density.
//!
//! Share of an element's text that sits inside `<a>` descendants. High
//! values point at navigation blocks rather than prose.

use dom_query::Selection;

use crate::dom;

/// Link text length divided by total text length.
///
/// An element without text has density `0.0`.
///
/// # Example
///
/// ```rust
/// use rs_readability::{dom, link_density::link_density};
///
/// // "read more": 4 of 9 characters sit inside the link
/// let doc = dom::parse(r#"<p>read <a href="/more">more</a></p>"#);
/// assert!((link_density(&doc.select("p")) - 4.0 / 9.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn link_density(element: &Selection) -> f32 {
    let text_length = dom::text_length(element);
    if text_length == 0 {
        return 0.0;
    }

    let link_length = dom::text_length(&element.select("a"));
    link_length as f32 / text_length as f32
}

/// Factor applied to a candidate score: `1 - density`.
#[must_use]
pub fn link_density_factor(element: &Selection) -> f32 {
    1.0 - link_density(element)
}
