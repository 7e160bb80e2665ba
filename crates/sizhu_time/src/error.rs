//! Error types for civil time handling.

use thiserror::Error;

/// Errors from civil date validation and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The calendar date does not exist (e.g. Feb 30, month 13).
    #[error("invalid civil date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour, minute, or second is outside its clock range.
    #[error("invalid clock time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    /// Text could not be parsed as a civil date-time.
    #[error("cannot parse civil date-time: {0}")]
    Parse(String),
}
