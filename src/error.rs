//! Error types for rs-readability.
//!
//! Only unreadable input is an error. The HTML parser recovers from any
//! markup, and documents where nothing article-like is found still produce
//! a (possibly empty) fragment.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the input stream failed.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
