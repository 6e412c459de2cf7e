//! Error types for core domain validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while constructing or coercing core domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Bars are not in ascending date order.
    #[error("{symbol}: bars out of order ({previous} followed by {next})")]
    UnsortedDates {
        /// Symbol of the offending history.
        symbol: String,
        /// Date of the earlier bar in the sequence.
        previous: NaiveDate,
        /// Date of the bar that broke the ordering.
        next: NaiveDate,
    },

    /// Two bars share the same trading date.
    #[error("{symbol}: duplicate bar for {date}")]
    DuplicateDate {
        /// Symbol of the offending history.
        symbol: String,
        /// The repeated date.
        date: NaiveDate,
    },

    /// A required input field is absent.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A value could not be reduced to a single number.
    #[error("cannot coerce {0} to a single number")]
    InvalidScalar(String),

    /// Parallel input series have different lengths.
    #[error("length mismatch: {what} has {actual} values, expected {expected}")]
    LengthMismatch {
        /// Name of the mismatched series.
        what: String,
        /// Expected number of values.
        expected: usize,
        /// Number of values received.
        actual: usize,
    },
}

impl CoreError {
    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Creates a length mismatch error.
    pub fn length_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
