//! Error types for search-thumbnails.
//!
//! The extraction pipeline itself is total - it returns plain values for any
//! input string. Errors only arise when translating host site settings into
//! an [`Options`](crate::Options) value.

/// Error type for settings translation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host supplied a negative maximum thumbnail count.
    #[error("max thumbnail count must be non-negative, got {0}")]
    NegativeMaxCount(i64),
}

/// Result type alias for settings translation.
pub type Result<T> = std::result::Result<T, Error>;
