//! Lunar calendar dates and their traditional names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

const DAY_TENS: [&str; 4] = ["初", "十", "廿", "三"];
const DAY_UNITS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

/// A date in the Chinese lunisolar calendar.
///
/// Construction only checks field ranges. Whether month 30 exists, or
/// whether the year has a leap month at all, depends on the calendar
/// provider and is checked at conversion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year, labelled by the civil year in which it mostly falls.
    pub year: i32,
    /// Month number 1..=12.
    pub month: u8,
    /// True for the intercalary repeat of `month`.
    pub is_leap: bool,
    /// Day of month 1..=30.
    pub day: u8,
}

impl LunarDate {
    pub fn new(year: i32, month: u8, is_leap: bool, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidLunarDate {
                year,
                month,
                is_leap,
                day,
            });
        }
        Ok(Self {
            year,
            month,
            is_leap,
            day,
        })
    }

    /// 正月 … 腊月, prefixed with 闰 for a leap month.
    pub fn month_name(&self) -> String {
        let name = MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize];
        if self.is_leap {
            format!("闰{name}")
        } else {
            name.to_string()
        }
    }

    /// 初一 … 三十.
    pub fn day_name(&self) -> String {
        day_name(self.day)
    }
}

/// Traditional name of a lunar day 1..=30.
pub fn day_name(day: u8) -> String {
    match day {
        10 => "初十".to_string(),
        20 => "二十".to_string(),
        30 => "三十".to_string(),
        1..=29 => {
            let tens = DAY_TENS[(day / 10) as usize];
            let unit = DAY_UNITS[(day % 10 - 1) as usize];
            format!("{tens}{unit}")
        }
        _ => String::new(),
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "农历{}年{}{}", self.year, self.month_name(), self.day_name())
    }
}
