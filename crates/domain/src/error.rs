//! Error types for the domain layer
//!
//! Unchecked construction and conversion of a [`Duration`](crate::Duration)
//! never fail. These errors only come out of the checked entry points:
//! validation, parsing, and conversion into `std::time::Duration`.

use thiserror::Error;

/// Error type for checked duration operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DurationError {
    /// NaN or infinite value
    #[error("Duration must be finite, got {0}")]
    NotFinite(f64),

    /// Value below zero
    #[error("Duration must be non-negative, got {0}ms")]
    Negative(f64),

    /// Value too large for `std::time::Duration`
    #[error("Duration of {0}ms does not fit in std::time::Duration")]
    Overflow(f64),

    /// Malformed duration text (e.g. empty, missing number)
    #[error("Invalid duration format: {0}")]
    Parse(String),

    /// Suffix that does not name a known unit
    #[error("Unknown duration unit: {0}")]
    UnknownUnit(String),
}

impl DurationError {
    /// Creates a parse error for string-to-duration conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// if input.is_empty() {
    ///     return Err(DurationError::parse("empty input"));
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an unknown unit error
    pub fn unknown_unit(suffix: impl Into<String>) -> Self {
        Self::UnknownUnit(suffix.into())
    }
}
