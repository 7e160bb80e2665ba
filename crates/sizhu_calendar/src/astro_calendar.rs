//! Lunisolar calendar computed from the Sun and Moon.
//!
//! Rules:
//! - a month begins on the UTC+8 civil day containing a true new moon
//! - month 11 is the month containing the winter solstice (270°)
//! - when 13 new moons separate two month-11 starts, the first month in
//!   that span whose start and end see the Sun in the same 30° sector (no
//!   principal term) is the leap month and repeats the preceding number
//!
//! Day numbers here are Julian Day Numbers of UTC+8 civil days.

use sizhu_astro::{lunation_before, lunation_nearest, new_moon_jde, sun_longitude_at_ut};
use sizhu_time::{jdn_to_calendar, julian_day_number, tt_to_ut};

use crate::error::CalendarError;
use crate::lunar_date::LunarDate;

pub const ASTRO_FIRST_YEAR: i32 = 1800;
pub const ASTRO_LAST_YEAR: i32 = 2150;

/// Calendar zone, UTC+8, as a fraction of a day.
const CALENDAR_OFFSET_DAYS: f64 = 8.0 / 24.0;

/// Longest run of lunations scanned for a month without a principal term.
const MAX_LEAP_SCAN: i64 = 14;

fn check_year(year: i32) -> Result<(), CalendarError> {
    if !(ASTRO_FIRST_YEAR..=ASTRO_LAST_YEAR).contains(&year) {
        return Err(CalendarError::RangeExceeded {
            year,
            min: ASTRO_FIRST_YEAR,
            max: ASTRO_LAST_YEAR,
        });
    }
    Ok(())
}

fn local_day(jd_ut: f64) -> i64 {
    (jd_ut + 0.5 + CALENDAR_OFFSET_DAYS).floor() as i64
}

/// Civil day (UTC+8) of new moon number `k`.
fn new_moon_day(k: i64) -> i64 {
    local_day(tt_to_ut(new_moon_jde(k)))
}

/// Sun's 30° sector at the UTC+8 midnight that starts `jdn`.
fn sun_sector(jdn: i64) -> i64 {
    let jd_ut = jdn as f64 - 0.5 - CALENDAR_OFFSET_DAYS;
    (sun_longitude_at_ut(jd_ut) / 30.0).floor() as i64
}

/// Lunation number whose month contains `jdn`.
fn lunation_containing(jdn: i64) -> i64 {
    let mut k = lunation_before(jdn as f64);
    while new_moon_day(k + 1) <= jdn {
        k += 1;
    }
    while new_moon_day(k) > jdn {
        k -= 1;
    }
    k
}

/// First day of the month containing the winter solstice of civil `year`.
fn month11(year: i32) -> i64 {
    let k = lunation_before(julian_day_number(year, 12, 31) as f64);
    let start = new_moon_day(k);
    // A new moon on or after the solstice day opens the following month.
    if sun_sector(start) >= 9 {
        new_moon_day(k - 1)
    } else {
        start
    }
}

/// Offset (in months after `a11`) of the leap month in a 13-month span.
fn leap_offset(a11: i64) -> i64 {
    let k = lunation_nearest(a11 as f64);
    let mut i = 1;
    let mut arc = sun_sector(new_moon_day(k + i));
    loop {
        let last = arc;
        i += 1;
        arc = sun_sector(new_moon_day(k + i));
        if arc == last || i >= MAX_LEAP_SCAN {
            break;
        }
    }
    i - 1
}

/// Month number (1..=12) repeated by a leap month at `offset` from month 11.
const fn leap_month_number(offset: i64) -> u8 {
    ((offset + 9).rem_euclid(12) + 1) as u8
}

/// Lunar date of a civil JDN.
pub fn solar_to_lunar(jdn: i64) -> Result<LunarDate, CalendarError> {
    let (year, _, _) = jdn_to_calendar(jdn);
    check_year(year)?;

    let month_start = new_moon_day(lunation_containing(jdn));
    let mut a11 = month11(year);
    let mut b11 = a11;
    let mut lunar_year;
    if a11 >= month_start {
        lunar_year = year;
        a11 = month11(year - 1);
    } else {
        lunar_year = year + 1;
        b11 = month11(year + 1);
    }

    let day = (jdn - month_start + 1) as u8;
    let diff = (month_start - a11).div_euclid(29);
    let mut is_leap = false;
    let mut month = diff + 11;
    if b11 - a11 > 365 {
        let leap = leap_offset(a11);
        if diff >= leap {
            month = diff + 10;
            is_leap = diff == leap;
        }
    }
    if month > 12 {
        month -= 12;
    }
    if month >= 11 && diff < 4 {
        lunar_year -= 1;
    }
    LunarDate::new(lunar_year, month as u8, is_leap, day)
}

/// First and one-past-last civil JDN of a lunar month.
fn month_span(year: i32, month: u8, is_leap: bool) -> Result<(i64, i64), CalendarError> {
    check_year(year)?;
    let invalid = CalendarError::InvalidLunarDate {
        year,
        month,
        is_leap,
        day: 1,
    };
    if !(1..=12).contains(&month) {
        return Err(invalid);
    }
    let (a11, b11) = if month < 11 {
        (month11(year - 1), month11(year))
    } else {
        (month11(year), month11(year + 1))
    };
    let mut k = lunation_nearest(a11 as f64);
    while new_moon_day(k) > a11 {
        k -= 1;
    }
    while new_moon_day(k + 1) <= a11 {
        k += 1;
    }

    let mut offset = (month as i64 - 11).rem_euclid(12);
    if b11 - a11 > 365 {
        let leap = leap_offset(a11);
        if is_leap && month != leap_month_number(leap) {
            return Err(invalid);
        }
        if is_leap || offset >= leap {
            offset += 1;
        }
    } else if is_leap {
        return Err(invalid);
    }
    Ok((new_moon_day(k + offset), new_moon_day(k + offset + 1)))
}

/// Civil JDN of a lunar date.
pub fn lunar_to_solar(date: &LunarDate) -> Result<i64, CalendarError> {
    let (start, end) = month_span(date.year, date.month, date.is_leap)?;
    if date.day == 0 || date.day as i64 > end - start {
        return Err(CalendarError::InvalidLunarDate {
            year: date.year,
            month: date.month,
            is_leap: date.is_leap,
            day: date.day,
        });
    }
    Ok(start + date.day as i64 - 1)
}

/// Length of a lunar month (29 or 30).
pub fn days_in_lunar_month(year: i32, month: u8, is_leap: bool) -> Result<u32, CalendarError> {
    let (start, end) = month_span(year, month, is_leap)?;
    Ok((end - start) as u32)
}

/// Leap month of a lunar year, if any.
pub fn leap_month_of_year(year: i32) -> Result<Option<u8>, CalendarError> {
    check_year(year)?;
    let a = month11(year - 1);
    let b = month11(year);
    if b - a > 365 {
        let m = leap_month_number(leap_offset(a));
        if m <= 10 {
            return Ok(Some(m));
        }
    }
    // Leap 11 or 12 sits in the span after this year's month 11.
    let c = month11(year + 1);
    if c - b > 365 {
        let m = leap_month_number(leap_offset(b));
        if m >= 11 {
            return Ok(Some(m));
        }
    }
    Ok(None)
}

/// Total days in a lunar year.
pub fn days_in_lunar_year(year: i32) -> Result<u32, CalendarError> {
    let first = lunar_to_solar(&LunarDate::new(year, 1, false, 1)?)?;
    let next = lunar_to_solar(&LunarDate::new(year + 1, 1, false, 1)?)?;
    Ok((next - first) as u32)
}
