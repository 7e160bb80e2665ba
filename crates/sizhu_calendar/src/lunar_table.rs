//! Tabulated lunar calendar, 1900..=2100.
//!
//! Each year is one 17-bit word:
//! - bits 15..4: month 1..12 is long (30 days) when set, month 1 at bit 15
//! - bits 3..0: leap month ordinal, 0 = no leap month
//! - bit 16: the leap month is long
//!
//! Day 0 of the table is 1900-01-31, lunar 1900 正月初一.

use crate::error::CalendarError;
use crate::lunar_date::LunarDate;

pub const TABLE_FIRST_YEAR: i32 = 1900;
pub const TABLE_LAST_YEAR: i32 = 2100;

/// JDN of 1900-01-31.
pub const TABLE_EPOCH_JDN: i64 = 2_415_051;

#[rustfmt::skip]
const LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,  // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,  // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,  // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,  // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,  // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,  // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,  // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,  // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,  // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0,  // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,  // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,  // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,  // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,  // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,  // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,  // 2050
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,  // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,  // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,  // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,  // 2090
    0x0d520,  // 2100
];

fn info(year: i32) -> Result<u32, CalendarError> {
    if !(TABLE_FIRST_YEAR..=TABLE_LAST_YEAR).contains(&year) {
        return Err(CalendarError::RangeExceeded {
            year,
            min: TABLE_FIRST_YEAR,
            max: TABLE_LAST_YEAR,
        });
    }
    Ok(LUNAR_INFO[(year - TABLE_FIRST_YEAR) as usize])
}

/// Leap month ordinal of a lunar year, if any.
pub fn leap_month_of_year(year: i32) -> Result<Option<u8>, CalendarError> {
    let leap = (info(year)? & 0xf) as u8;
    Ok((leap != 0).then_some(leap))
}

/// Length of a lunar month; errors if `is_leap` names a month that is not leap.
pub fn days_in_lunar_month(year: i32, month: u8, is_leap: bool) -> Result<u32, CalendarError> {
    let word = info(year)?;
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidLunarDate {
            year,
            month,
            is_leap,
            day: 1,
        });
    }
    if is_leap {
        if leap_month_of_year(year)? != Some(month) {
            return Err(CalendarError::InvalidLunarDate {
                year,
                month,
                is_leap,
                day: 1,
            });
        }
        return Ok(if word & 0x1_0000 != 0 { 30 } else { 29 });
    }
    Ok(if word & (0x1_0000 >> month) != 0 { 30 } else { 29 })
}

/// Total days in a lunar year, including any leap month.
pub fn days_in_lunar_year(year: i32) -> Result<u32, CalendarError> {
    let word = info(year)?;
    let regular: u32 = (1..=12)
        .map(|m| if word & (0x1_0000 >> m) != 0 { 30 } else { 29 })
        .sum();
    let leap = match leap_month_of_year(year)? {
        Some(m) => days_in_lunar_month(year, m, true)?,
        None => 0,
    };
    Ok(regular + leap)
}

/// `(month, is_leap, days)` in calendar order.
fn months_of_year(year: i32) -> Result<Vec<(u8, bool, u32)>, CalendarError> {
    let leap = leap_month_of_year(year)?;
    let mut out = Vec::with_capacity(13);
    for month in 1..=12u8 {
        out.push((month, false, days_in_lunar_month(year, month, false)?));
        if leap == Some(month) {
            out.push((month, true, days_in_lunar_month(year, month, true)?));
        }
    }
    Ok(out)
}

/// Lunar date of a civil JDN.
pub fn solar_to_lunar(jdn: i64) -> Result<LunarDate, CalendarError> {
    let mut offset = jdn - TABLE_EPOCH_JDN;
    if offset < 0 {
        let (year, _, _) = sizhu_time::jdn_to_calendar(jdn);
        return Err(CalendarError::RangeExceeded {
            year,
            min: TABLE_FIRST_YEAR,
            max: TABLE_LAST_YEAR,
        });
    }
    let mut year = TABLE_FIRST_YEAR;
    loop {
        let len = days_in_lunar_year(year)? as i64;
        if offset < len {
            break;
        }
        offset -= len;
        year += 1;
    }
    for (month, is_leap, len) in months_of_year(year)? {
        let len = len as i64;
        if offset < len {
            return LunarDate::new(year, month, is_leap, (offset + 1) as u8);
        }
        offset -= len;
    }
    // The year-length loop above leaves offset < year length.
    Err(CalendarError::RangeExceeded {
        year,
        min: TABLE_FIRST_YEAR,
        max: TABLE_LAST_YEAR,
    })
}

/// Civil JDN of a lunar date.
pub fn lunar_to_solar(date: &LunarDate) -> Result<i64, CalendarError> {
    let month_len = days_in_lunar_month(date.year, date.month, date.is_leap)?;
    if date.day == 0 || u32::from(date.day) > month_len {
        return Err(CalendarError::InvalidLunarDate {
            year: date.year,
            month: date.month,
            is_leap: date.is_leap,
            day: date.day,
        });
    }
    let mut offset: i64 = 0;
    for year in TABLE_FIRST_YEAR..date.year {
        offset += days_in_lunar_year(year)? as i64;
    }
    for (month, is_leap, len) in months_of_year(date.year)? {
        if (month, is_leap) == (date.month, date.is_leap) {
            break;
        }
        offset += len as i64;
    }
    Ok(TABLE_EPOCH_JDN + offset + date.day as i64 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_time::julian_day_number;

    #[test]
    fn year_shapes() {
        assert_eq!(leap_month_of_year(2023).unwrap(), Some(2));
        assert_eq!(leap_month_of_year(2020).unwrap(), Some(4));
        assert_eq!(leap_month_of_year(2024).unwrap(), None);
        assert_eq!(days_in_lunar_year(2023).unwrap(), 384);
        assert_eq!(days_in_lunar_year(2024).unwrap(), 354);
    }

    #[test]
    fn table_covers_every_year() {
        assert_eq!(LUNAR_INFO.len() as i32, TABLE_LAST_YEAR - TABLE_FIRST_YEAR + 1);
        assert_eq!(LUNAR_INFO[LUNAR_INFO.len() - 1], 0x0d520);
        assert_eq!(leap_month_of_year(2100).unwrap(), None);
        assert_eq!(days_in_lunar_year(2100).unwrap(), 354);
        assert_eq!(days_in_lunar_month(2100, 1, false).unwrap(), 30);
        assert_eq!(days_in_lunar_month(2100, 12, false).unwrap(), 29);
    }

    #[test]
    fn table_edges() {
        let first = solar_to_lunar(julian_day_number(1900, 1, 31)).unwrap();
        assert_eq!((first.year, first.month, first.is_leap, first.day), (1900, 1, false, 1));
        let last = solar_to_lunar(julian_day_number(2100, 12, 31)).unwrap();
        assert_eq!((last.year, last.month, last.day), (2100, 12, 1));
    }

    #[test]
    fn known_dates() {
        let d = solar_to_lunar(julian_day_number(2000, 1, 1)).unwrap();
        assert_eq!((d.year, d.month, d.is_leap, d.day), (1999, 11, false, 25));
        let d = solar_to_lunar(julian_day_number(2023, 3, 22)).unwrap();
        assert_eq!((d.year, d.month, d.is_leap, d.day), (2023, 2, true, 1));
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            solar_to_lunar(julian_day_number(1900, 1, 30)),
            Err(CalendarError::RangeExceeded { .. })
        ));
        assert!(matches!(
            leap_month_of_year(2101),
            Err(CalendarError::RangeExceeded { year: 2101, .. })
        ));
    }

    #[test]
    fn leap_flag_must_match_table() {
        let bogus = LunarDate::new(2024, 3, true, 1).unwrap();
        assert!(matches!(
            lunar_to_solar(&bogus),
            Err(CalendarError::InvalidLunarDate { .. })
        ));
    }
}
