//! Error types for calendar conversion and search.

use sizhu_astro::AstroError;
use sizhu_ganzhi::GanzhiError;
use sizhu_time::TimeError;
use thiserror::Error;

/// Errors from lunar conversion, solar-term search, and reverse search.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Civil date or clock time does not exist.
    #[error(transparent)]
    InvalidDate(#[from] TimeError),
    /// Lunar date does not exist in the given lunar year.
    #[error("invalid lunar date {year}-{month}-{day} (leap month: {is_leap})")]
    InvalidLunarDate {
        year: i32,
        month: u8,
        is_leap: bool,
        day: u8,
    },
    /// Unknown glyph or parity-mismatched pillar.
    #[error(transparent)]
    Pillar(#[from] GanzhiError),
    /// Year falls outside the provider's supported window.
    #[error("year {year} outside supported range {min}..={max}")]
    RangeExceeded { year: i32, min: i32, max: i32 },
    /// Astronomical root finding failed.
    #[error(transparent)]
    Astro(#[from] AstroError),
    /// Configuration value is out of range.
    #[error("invalid calendar config: {0}")]
    InvalidConfig(&'static str),
    /// Reverse search was cancelled by the caller.
    #[error("search cancelled")]
    Cancelled,
}
