//! Local civil date-time.
//!
//! `CivilDateTime` is wall-clock time in a fixed zone (China Standard Time
//! unless a provider says otherwise). Its "local JD" is the Julian Date
//! computed straight from the wall-clock fields, without any zone shift;
//! subtracting two local JDs gives elapsed days.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month, jd_to_calendar, julian_day_number};

/// A civil calendar date and wall-clock time, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilDateTime {
    /// Build a validated date-time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Midnight at the start of a date.
    pub fn date(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Julian Date of the wall-clock fields, with no zone shift applied.
    pub fn to_local_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second as f64 / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Inverse of [`to_local_jd`](Self::to_local_jd), rounded to the nearest second.
    pub fn from_local_jd(jd: f64) -> Self {
        // Round to whole seconds first so 23:59:59.9999 does not print as 24:00.
        let seconds = ((jd + 0.5).fract() * 86_400.0).round();
        let day_start = (jd + 0.5).floor() - 0.5;
        let (day_start, seconds) = if seconds >= 86_400.0 {
            (day_start + 1.0, 0.0)
        } else {
            (day_start, seconds)
        };
        let (year, month, day) = jd_to_calendar(day_start);
        let total = seconds as u32;
        Self {
            year,
            month,
            day: day.round() as u32,
            hour: total / 3600,
            minute: (total % 3600) / 60,
            second: total % 60,
        }
    }

    /// Julian Day Number of the civil date.
    pub fn jdn(&self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }

    /// Shift by whole days, keeping the clock time.
    pub fn add_days(&self, days: i64) -> Self {
        let (year, month, day) = crate::julian::jdn_to_calendar(self.jdn() + days);
        Self {
            year,
            month,
            day,
            ..*self
        }
    }

    /// Elapsed days from `earlier` to `self` (negative if `self` is earlier).
    pub fn days_since(&self, earlier: &Self) -> f64 {
        self.to_local_jd() - earlier.to_local_jd()
    }

    /// True when both values fall on the same civil date.
    pub fn same_date(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || TimeError::Parse(s.to_string());
        let (date_part, time_part) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        // Leading '-' belongs to the year.
        let (sign, digits) = match date_part.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, date_part),
        };
        let mut fields = digits.split('-');
        let year: i32 = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let month: u32 = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let day: u32 = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        if fields.next().is_some() {
            return Err(bad());
        }

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0),
            Some(t) => {
                let mut parts = t.split(':');
                let hour: u32 = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
                let minute: u32 = match parts.next() {
                    Some(m) => m.parse().map_err(|_| bad())?,
                    None => 0,
                };
                let second: u32 = match parts.next() {
                    Some(sec) => sec.parse().map_err(|_| bad())?,
                    None => 0,
                };
                if parts.next().is_some() {
                    return Err(bad());
                }
                (hour, minute, second)
            }
        };

        Self::new(sign * year, month, day, hour, minute, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_feb_30() {
        assert_eq!(
            CivilDateTime::new(2024, 2, 30, 0, 0, 0),
            Err(TimeError::InvalidDate {
                year: 2024,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn rejects_non_leap_feb_29() {
        assert!(CivilDateTime::date(2023, 2, 29).is_err());
        assert!(CivilDateTime::date(2024, 2, 29).is_ok());
        assert!(CivilDateTime::date(1900, 2, 29).is_err());
    }

    #[test]
    fn rejects_bad_clock() {
        assert!(CivilDateTime::new(2024, 1, 1, 24, 0, 0).is_err());
        assert!(CivilDateTime::new(2024, 1, 1, 23, 60, 0).is_err());
    }

    #[test]
    fn local_jd_roundtrip() {
        let t = CivilDateTime::new(2024, 2, 4, 16, 27, 7).unwrap();
        let back = CivilDateTime::from_local_jd(t.to_local_jd());
        assert_eq!(back, t);
    }

    #[test]
    fn from_local_jd_near_midnight() {
        let t = CivilDateTime::new(1999, 12, 31, 23, 59, 59).unwrap();
        let back = CivilDateTime::from_local_jd(t.to_local_jd() + 0.4 / 86_400.0);
        assert_eq!(back, t);
        let next = CivilDateTime::from_local_jd(t.to_local_jd() + 0.8 / 86_400.0);
        assert_eq!(next, CivilDateTime::date(2000, 1, 1).unwrap());
    }

    #[test]
    fn add_days_crosses_year() {
        let t = CivilDateTime::new(1999, 12, 31, 12, 0, 0).unwrap();
        let n = t.add_days(1);
        assert_eq!((n.year, n.month, n.day, n.hour), (2000, 1, 1, 12));
        let p = t.add_days(-365);
        assert_eq!((p.year, p.month, p.day), (1998, 12, 31));
    }

    #[test]
    fn days_since_is_signed() {
        let a = CivilDateTime::new(2000, 1, 1, 12, 0, 0).unwrap();
        let b = CivilDateTime::date(1999, 12, 22).unwrap();
        assert!((a.days_since(&b) - 10.5).abs() < 1e-9);
        assert!((b.days_since(&a) + 10.5).abs() < 1e-9);
    }

    #[test]
    fn parse_variants() {
        let a: CivilDateTime = "2000-01-01".parse().unwrap();
        assert_eq!(a, CivilDateTime::date(2000, 1, 1).unwrap());
        let b: CivilDateTime = "2000-01-01 12:30".parse().unwrap();
        assert_eq!((b.hour, b.minute, b.second), (12, 30, 0));
        let c: CivilDateTime = "2000-01-01T23:05:09".parse().unwrap();
        assert_eq!((c.hour, c.minute, c.second), (23, 5, 9));
        assert!("2000-13-01".parse::<CivilDateTime>().is_err());
        assert!("yesterday".parse::<CivilDateTime>().is_err());
    }

    #[test]
    fn display_format() {
        let t = CivilDateTime::new(2024, 2, 4, 16, 27, 7).unwrap();
        assert_eq!(t.to_string(), "2024-02-04 16:27:07");
    }
}
