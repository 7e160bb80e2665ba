//! Chinese lunisolar calendar for the sizhu engine.
//!
//! This crate provides:
//! - Lunar dates with traditional month and day names
//! - Civil/lunar conversion from a 1900..=2100 table and from astronomy
//! - Solar-term boundaries and the jieqi timeline around a moment
//! - The `LunarCalendarProvider` seam with accurate and approximate providers
//! - Chunked, cancellable reverse search from a chart to civil dates

pub mod astro_calendar;
pub mod error;
pub mod jieqi;
pub mod lunar_date;
pub mod lunar_table;
pub mod provider;
pub mod reverse;

pub use astro_calendar::{ASTRO_FIRST_YEAR, ASTRO_LAST_YEAR};
pub use error::CalendarError;
pub use jieqi::{
    JieqiInfo, JieqiTimeline, OnsetAnchor, SearchDirection, SolarTermBoundary,
    astronomical_boundary, fixed_boundary, jieqi_timeline, nearest_anchor_boundary,
};
pub use lunar_date::{LunarDate, day_name};
pub use lunar_table::{TABLE_EPOCH_JDN, TABLE_FIRST_YEAR, TABLE_LAST_YEAR};
pub use provider::{
    AstronomicalProvider, DEFAULT_UTC_OFFSET_MINUTES, LunarCalendarProvider, LunarSnapshot,
    MAX_UTC_OFFSET_MINUTES, Precision, ProviderConfig, TableProvider,
};
pub use reverse::{ReverseMatch, ReverseProgress, ReverseSearch, ReverseSearchConfig};
