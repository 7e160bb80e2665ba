//! Calendar providers.
//!
//! A provider answers every calendar question the chart needs: pillars for
//! a moment, civil/lunar conversion, and solar-term boundaries. Two are
//! built in and can be swapped for cross-validation:
//!
//! - [`AstronomicalProvider`]: solar longitude and true new moons.
//!   Pillars change at the exact 立春 and 节 instants.
//! - [`TableProvider`]: the 1900..=2100 lunar table, fixed-date solar terms,
//!   and civil-year/civil-month arithmetic pillars.

use std::ops::RangeInclusive;

use serde::Serialize;
use sizhu_astro::{SolarTermConfig, sun_longitude_at_ut};
use sizhu_ganzhi::{
    FourPillarChart, Pillar, SolarTerm, civil_month_pillar, day_pillar, hour_branch, hour_pillar,
    solar_month_at_longitude, solar_month_pillar, year_pillar,
};
use sizhu_time::{CivilDateTime, jdn_to_calendar};
use tracing::debug;

use crate::astro_calendar::{self, ASTRO_FIRST_YEAR, ASTRO_LAST_YEAR};
use crate::error::CalendarError;
use crate::jieqi::{self, SearchDirection, SolarTermBoundary};
use crate::lunar_date::LunarDate;
use crate::lunar_table::{self, TABLE_FIRST_YEAR, TABLE_LAST_YEAR};

/// China Standard Time, minutes east of UTC.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 480;

/// Largest accepted zone offset, minutes.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Fidelity of a provider's answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Precision {
    Accurate,
    Approximate,
}

impl Precision {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Accurate => "accurate",
            Self::Approximate => "approximate",
        }
    }
}

/// Configuration shared by the built-in providers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderConfig {
    /// Zone of civil input moments, minutes east of UTC.
    pub utc_offset_minutes: i32,
    /// Root finding for solar-term instants.
    pub solar_term: SolarTermConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            solar_term: SolarTermConfig::default(),
        }
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(CalendarError::InvalidConfig(
                "utc_offset_minutes must be within ±14 hours",
            ));
        }
        self.solar_term.validate()?;
        Ok(())
    }

    fn offset_days(&self) -> f64 {
        self.utc_offset_minutes as f64 / 1440.0
    }
}

/// Lunar date and pillars of one civil moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LunarSnapshot {
    pub date: LunarDate,
    pub pillars: FourPillarChart,
}

/// Source of calendar answers for chart construction.
pub trait LunarCalendarProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn precision(&self) -> Precision;

    /// Civil years this provider can answer for.
    fn supported_years(&self) -> RangeInclusive<i32>;

    fn four_pillars(&self, moment: &CivilDateTime) -> Result<FourPillarChart, CalendarError>;

    /// Lunar date of a civil day.
    fn lunar_date_of(&self, jdn: i64) -> Result<LunarDate, CalendarError>;

    /// Civil day of a lunar date.
    fn jdn_of(&self, date: &LunarDate) -> Result<i64, CalendarError>;

    fn leap_month(&self, year: i32) -> Result<Option<u8>, CalendarError>;

    fn days_in_lunar_month(&self, year: i32, month: u8, is_leap: bool)
    -> Result<u32, CalendarError>;

    fn days_in_lunar_year(&self, year: i32) -> Result<u32, CalendarError>;

    /// Boundary of `term` in the cycle opened by 立春 of `term_year`.
    fn solar_term_boundary(
        &self,
        term: SolarTerm,
        term_year: i32,
    ) -> Result<SolarTermBoundary, CalendarError>;

    fn civil_to_lunar(&self, moment: &CivilDateTime) -> Result<LunarSnapshot, CalendarError> {
        Ok(LunarSnapshot {
            date: self.lunar_date_of(moment.jdn())?,
            pillars: self.four_pillars(moment)?,
        })
    }

    /// Civil date (00:00) of a lunar date.
    fn lunar_to_civil(&self, date: &LunarDate) -> Result<CivilDateTime, CalendarError> {
        let (year, month, day) = jdn_to_calendar(self.jdn_of(date)?);
        Ok(CivilDateTime::date(year, month, day)?)
    }

    fn nearest_solar_term(
        &self,
        moment: &CivilDateTime,
        direction: SearchDirection,
    ) -> Result<SolarTermBoundary, CalendarError> {
        jieqi::nearest_boundary(self, moment, direction)
    }

    fn step_solar_term(
        &self,
        boundary: &SolarTermBoundary,
        direction: SearchDirection,
    ) -> Result<SolarTermBoundary, CalendarError> {
        jieqi::step_boundary(self, boundary, direction)
    }
}

/// Day and hour pillars shared by both providers.
///
/// 23:00..=23:59 keeps the civil day's pillar while the hour stem follows
/// the next day's stem.
fn complete_chart(year: Pillar, month: Pillar, moment: &CivilDateTime) -> FourPillarChart {
    let day = day_pillar(moment.jdn());
    let hour_stem_day = if moment.hour == 23 { day.advance(1) } else { day };
    let hour = hour_pillar(hour_stem_day.stem(), hour_branch(moment.hour));
    FourPillarChart::new(year, month, day, hour)
}

fn check_range(year: i32, range: &RangeInclusive<i32>) -> Result<(), CalendarError> {
    if !range.contains(&year) {
        return Err(CalendarError::RangeExceeded {
            year,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

/// Provider backed by solar and lunar theory.
#[derive(Debug, Clone, Default)]
pub struct AstronomicalProvider {
    config: ProviderConfig,
}

impl AstronomicalProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Apparent solar longitude at a local civil moment.
    pub fn sun_longitude(&self, moment: &CivilDateTime) -> f64 {
        sun_longitude_at_ut(moment.to_local_jd() - self.config.offset_days())
    }
}

impl LunarCalendarProvider for AstronomicalProvider {
    fn name(&self) -> &'static str {
        "astronomical"
    }

    fn precision(&self) -> Precision {
        Precision::Accurate
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        ASTRO_FIRST_YEAR..=ASTRO_LAST_YEAR
    }

    fn four_pillars(&self, moment: &CivilDateTime) -> Result<FourPillarChart, CalendarError> {
        check_range(moment.year, &self.supported_years())?;
        let lon = self.sun_longitude(moment);
        let month_index = solar_month_at_longitude(lon);
        // 子 and 丑 months in January or early February belong to the
        // previous solar year.
        let solar_year = if moment.month <= 2 && month_index >= 10 {
            moment.year - 1
        } else {
            moment.year
        };
        let year = year_pillar(solar_year);
        let month = solar_month_pillar(year.stem(), month_index);
        debug!(%moment, lon, month_index, solar_year, "astronomical pillars");
        Ok(complete_chart(year, month, moment))
    }

    fn lunar_date_of(&self, jdn: i64) -> Result<LunarDate, CalendarError> {
        astro_calendar::solar_to_lunar(jdn)
    }

    fn jdn_of(&self, date: &LunarDate) -> Result<i64, CalendarError> {
        astro_calendar::lunar_to_solar(date)
    }

    fn leap_month(&self, year: i32) -> Result<Option<u8>, CalendarError> {
        astro_calendar::leap_month_of_year(year)
    }

    fn days_in_lunar_month(
        &self,
        year: i32,
        month: u8,
        is_leap: bool,
    ) -> Result<u32, CalendarError> {
        astro_calendar::days_in_lunar_month(year, month, is_leap)
    }

    fn days_in_lunar_year(&self, year: i32) -> Result<u32, CalendarError> {
        astro_calendar::days_in_lunar_year(year)
    }

    fn solar_term_boundary(
        &self,
        term: SolarTerm,
        term_year: i32,
    ) -> Result<SolarTermBoundary, CalendarError> {
        check_range(term.civil_year(term_year), &self.supported_years())?;
        jieqi::astronomical_boundary(
            term,
            term_year,
            self.config.utc_offset_minutes,
            &self.config.solar_term,
        )
    }
}

/// Provider backed by the lunar table and fixed-date arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableProvider;

impl TableProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LunarCalendarProvider for TableProvider {
    fn name(&self) -> &'static str {
        "table"
    }

    fn precision(&self) -> Precision {
        Precision::Approximate
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        TABLE_FIRST_YEAR..=TABLE_LAST_YEAR
    }

    /// Civil year and civil month pillars; no solar-term adjustment.
    fn four_pillars(&self, moment: &CivilDateTime) -> Result<FourPillarChart, CalendarError> {
        let year = year_pillar(moment.year);
        let month = civil_month_pillar(year.stem(), moment.month);
        Ok(complete_chart(year, month, moment))
    }

    fn lunar_date_of(&self, jdn: i64) -> Result<LunarDate, CalendarError> {
        lunar_table::solar_to_lunar(jdn)
    }

    fn jdn_of(&self, date: &LunarDate) -> Result<i64, CalendarError> {
        lunar_table::lunar_to_solar(date)
    }

    fn leap_month(&self, year: i32) -> Result<Option<u8>, CalendarError> {
        lunar_table::leap_month_of_year(year)
    }

    fn days_in_lunar_month(
        &self,
        year: i32,
        month: u8,
        is_leap: bool,
    ) -> Result<u32, CalendarError> {
        lunar_table::days_in_lunar_month(year, month, is_leap)
    }

    fn days_in_lunar_year(&self, year: i32) -> Result<u32, CalendarError> {
        lunar_table::days_in_lunar_year(year)
    }

    fn solar_term_boundary(
        &self,
        term: SolarTerm,
        term_year: i32,
    ) -> Result<SolarTermBoundary, CalendarError> {
        jieqi::fixed_boundary(term, term_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> CivilDateTime {
        CivilDateTime::new(y, m, d, h, 0, 0).unwrap()
    }

    fn chart(p: &dyn LunarCalendarProvider, m: CivilDateTime) -> String {
        p.four_pillars(&m).unwrap().to_string()
    }

    #[test]
    fn astronomical_pillars() {
        let p = AstronomicalProvider::default();
        assert_eq!(chart(&p, at(2000, 1, 1, 12)), "己卯 丙子 戊午 戊午");
        assert_eq!(chart(&p, at(2024, 2, 10, 8)), "甲辰 丙寅 甲辰 戊辰");
        assert_eq!(chart(&p, at(1984, 2, 2, 0)), "癸亥 乙丑 丙寅 戊子");
    }

    #[test]
    fn lichun_switches_year_and_month() {
        // 立春 2024 falls at 16:27 Beijing time.
        let p = AstronomicalProvider::default();
        assert_eq!(chart(&p, at(2024, 2, 4, 16)), "癸卯 乙丑 戊戌 庚申");
        assert_eq!(chart(&p, at(2024, 2, 4, 17)), "甲辰 丙寅 戊戌 辛酉");
    }

    #[test]
    fn late_zi_hour_uses_next_day_stem() {
        let p = AstronomicalProvider::default();
        assert_eq!(chart(&p, at(1990, 6, 15, 23)), "庚午 壬午 辛亥 庚子");
    }

    #[test]
    fn table_pillars_use_civil_fields() {
        assert_eq!(chart(&TableProvider, at(2000, 1, 1, 12)), "庚辰 戊寅 戊午 戊午");
    }

    #[test]
    fn range_is_enforced() {
        let p = AstronomicalProvider::default();
        assert!(matches!(
            p.four_pillars(&at(1700, 1, 1, 0)),
            Err(CalendarError::RangeExceeded { year: 1700, .. })
        ));
    }

    #[test]
    fn config_validation() {
        let bad = ProviderConfig {
            utc_offset_minutes: 15 * 60,
            ..ProviderConfig::default()
        };
        assert!(AstronomicalProvider::new(bad).is_err());
    }

    #[test]
    fn lunar_roundtrip_through_trait() {
        let astro = AstronomicalProvider::default();
        let providers: [&dyn LunarCalendarProvider; 2] = [&astro, &TableProvider];
        for p in providers {
            let snap = p.civil_to_lunar(&at(2024, 2, 10, 8)).unwrap();
            assert_eq!(snap.date.to_string(), "农历2024年正月初一");
            let back = p.lunar_to_civil(&snap.date).unwrap();
            assert!(back.same_date(&at(2024, 2, 10, 0)));
        }
    }
}
