//! Civil time support for the sizhu engine.
//!
//! This crate provides:
//! - `CivilDateTime`, a validated wall-clock date-time
//! - Julian Date / Julian Day Number conversions
//! - ΔT (TT − UT) for the astronomical calendar

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;

pub use civil::CivilDateTime;
pub use delta_t::{delta_t_seconds, tt_to_ut, ut_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year,
    jd_to_calendar, jd_to_centuries, jdn_to_calendar, julian_day_number,
};
