//! Configuration options for content extraction.
//!
//! The defaults reproduce classic readability thresholds. Every heuristic
//! constant the scorer and the assembler rely on lives here so callers can
//! tune them without touching the pipeline.

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::Options;
///
/// let options = Options {
///     min_paragraph_length: 120,
///     strip_unlikely_candidates: false,
///     ..Options::default()
/// };
/// assert_eq!(options.min_text_length, 25);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Scoring-eligible elements with less text than this are ignored.
    ///
    /// Default: `25`
    pub min_text_length: usize,

    /// Cap on the one-point-per-100-characters length bonus.
    ///
    /// Default: `3`
    pub max_length_bonus: usize,

    /// Bonus (or penalty) applied per matching `class`/`id` attribute.
    ///
    /// Default: `25.0`
    pub class_weight: f32,

    /// Lower bound of the sibling inclusion threshold.
    ///
    /// Default: `10.0`
    pub sibling_score_floor: f32,

    /// The sibling threshold is `max(floor, top_score / divisor)`.
    ///
    /// Default: `5.0`
    pub sibling_score_divisor: f32,

    /// Paragraph siblings at least this long only need a low link density.
    /// Shorter ones must look like a sentence and carry no links at all.
    ///
    /// Default: `80`
    pub min_paragraph_length: usize,

    /// Link density a long paragraph sibling must stay strictly below.
    ///
    /// Default: `0.25`
    pub max_paragraph_link_density: f32,

    /// Remove elements whose class/id names indicate non-content regions.
    ///
    /// Default: `true`
    pub strip_unlikely_candidates: bool,

    /// Rename `<div>` elements without block-level children to `<p>`.
    ///
    /// Default: `true`
    pub transform_misused_divs: bool,
}

impl Options {
    /// Minimum score a sibling candidate needs to join the article.
    #[must_use]
    pub fn sibling_threshold(&self, top_score: f32) -> f32 {
        self.sibling_score_floor
            .max(top_score / self.sibling_score_divisor)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_text_length: 25,
            max_length_bonus: 3,
            class_weight: 25.0,
            sibling_score_floor: 10.0,
            sibling_score_divisor: 5.0,
            min_paragraph_length: 80,
            max_paragraph_link_density: 0.25,
            strip_unlikely_candidates: true,
            transform_misused_divs: true,
        }
    }
}
