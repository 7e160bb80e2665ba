//! Solar-term boundaries around a moment.
//!
//! A boundary is keyed by `(term, term_year)` where the term year runs from
//! 立春 to the following 大寒, so 小寒 and 大寒 of term year Y fall in
//! January of Y + 1. Providers only need to place a single boundary; the
//! nearest-boundary search and stepping here are shared.

use serde::{Deserialize, Serialize};
use sizhu_astro::{SolarTermConfig, find_solar_longitude};
use sizhu_ganzhi::{ALL_SOLAR_TERMS, SolarTerm};
use sizhu_time::{CivilDateTime, calendar_to_jd};

use crate::error::CalendarError;
use crate::provider::LunarCalendarProvider;

/// One solar-term boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SolarTermBoundary {
    pub term: SolarTerm,
    /// Year of the 立春 that opens this term's cycle.
    pub term_year: i32,
    /// Local civil instant the term begins.
    pub instant: CivilDateTime,
}

impl SolarTermBoundary {
    /// Key of the following boundary.
    pub fn next_key(&self) -> (SolarTerm, i32) {
        match self.term {
            SolarTerm::DaHan => (SolarTerm::LiChun, self.term_year + 1),
            t => (t.next(), self.term_year),
        }
    }

    /// Key of the preceding boundary.
    pub fn prev_key(&self) -> (SolarTerm, i32) {
        match self.term {
            SolarTerm::LiChun => (SolarTerm::DaHan, self.term_year - 1),
            t => (t.prev(), self.term_year),
        }
    }
}

/// Which side of a moment to look on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchDirection {
    /// Latest boundary at or before the moment.
    Before,
    /// Earliest boundary strictly after the moment.
    After,
}

/// Which boundaries may anchor the fortune onset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnsetAnchor {
    /// Any of the 24 terms.
    #[default]
    AnyTerm,
    /// Only the 12 节 that open solar months.
    MajorTerm,
}

/// Boundary at its conventional fixed date, 00:00 local time.
pub fn fixed_boundary(term: SolarTerm, term_year: i32) -> Result<SolarTermBoundary, CalendarError> {
    let (month, day) = term.approx_month_day();
    let instant = CivilDateTime::date(term.civil_year(term_year), month, day)?;
    Ok(SolarTermBoundary {
        term,
        term_year,
        instant,
    })
}

/// Boundary at the instant the Sun reaches the term's longitude.
pub fn astronomical_boundary(
    term: SolarTerm,
    term_year: i32,
    utc_offset_minutes: i32,
    config: &SolarTermConfig,
) -> Result<SolarTermBoundary, CalendarError> {
    let (month, day) = term.approx_month_day();
    let offset_days = utc_offset_minutes as f64 / 1440.0;
    let guess_ut = calendar_to_jd(term.civil_year(term_year), month, day as f64 + 0.5) - offset_days;
    let jd_ut = find_solar_longitude(term.longitude_deg(), guess_ut, config)?;
    Ok(SolarTermBoundary {
        term,
        term_year,
        instant: CivilDateTime::from_local_jd(jd_ut + offset_days),
    })
}

/// Latest fixed-date boundary on or before the moment's date.
///
/// Used as a starting point; providers whose boundaries drift from the
/// fixed dates are corrected by stepping.
fn estimate_key(moment: &CivilDateTime) -> (SolarTerm, i32) {
    let date = (moment.year, moment.month, moment.day);
    let mut best = (SolarTerm::DongZhi, moment.year - 2);
    let mut best_date = (moment.year - 2, 12, 22);
    for term_year in [moment.year - 1, moment.year] {
        for term in ALL_SOLAR_TERMS {
            let (m, d) = term.approx_month_day();
            let candidate = (term.civil_year(term_year), m, d);
            if candidate <= date && candidate > best_date {
                best = (term, term_year);
                best_date = candidate;
            }
        }
    }
    best
}

/// Neighbouring boundary of `boundary` in `direction`.
pub fn step_boundary<P>(
    provider: &P,
    boundary: &SolarTermBoundary,
    direction: SearchDirection,
) -> Result<SolarTermBoundary, CalendarError>
where
    P: LunarCalendarProvider + ?Sized,
{
    let (term, term_year) = match direction {
        SearchDirection::After => boundary.next_key(),
        SearchDirection::Before => boundary.prev_key(),
    };
    provider.solar_term_boundary(term, term_year)
}

/// Nearest boundary before or after a moment.
pub fn nearest_boundary<P>(
    provider: &P,
    moment: &CivilDateTime,
    direction: SearchDirection,
) -> Result<SolarTermBoundary, CalendarError>
where
    P: LunarCalendarProvider + ?Sized,
{
    let (term, term_year) = estimate_key(moment);
    let mut before = provider.solar_term_boundary(term, term_year)?;
    while before.instant > *moment {
        before = step_boundary(provider, &before, SearchDirection::Before)?;
    }
    loop {
        let after = step_boundary(provider, &before, SearchDirection::After)?;
        if after.instant > *moment {
            return Ok(match direction {
                SearchDirection::Before => before,
                SearchDirection::After => after,
            });
        }
        before = after;
    }
}

/// Nearest boundary honouring the onset anchor.
pub fn nearest_anchor_boundary<P>(
    provider: &P,
    moment: &CivilDateTime,
    direction: SearchDirection,
    anchor: OnsetAnchor,
) -> Result<SolarTermBoundary, CalendarError>
where
    P: LunarCalendarProvider + ?Sized,
{
    let mut boundary = provider.nearest_solar_term(moment, direction)?;
    if anchor == OnsetAnchor::MajorTerm && !boundary.term.is_major() {
        boundary = provider.step_solar_term(&boundary, direction)?;
    }
    Ok(boundary)
}

/// A boundary with its distance from a query moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JieqiInfo {
    pub boundary: SolarTermBoundary,
    pub direction: SearchDirection,
    /// Absolute distance in fractional days.
    pub distance_days: f64,
    /// `distance_days`, floored.
    pub days: i64,
    /// Civil year of the query moment.
    pub query_year: i32,
}

impl JieqiInfo {
    pub fn new(boundary: SolarTermBoundary, moment: &CivilDateTime, direction: SearchDirection) -> Self {
        let distance_days = boundary.instant.days_since(moment).abs();
        Self {
            boundary,
            direction,
            distance_days,
            days: distance_days.floor() as i64,
            query_year: moment.year,
        }
    }

    /// Where the query moment sits relative to the boundary: `后N日` after a
    /// preceding term, `前N日` before a following one. e.g.
    /// `1月6日小寒（前4日）`, or `1999年12月22日冬至（后10日）` when the
    /// boundary falls in another civil year.
    pub fn describe(&self) -> String {
        let at = &self.boundary.instant;
        let when = match (self.days, self.direction) {
            (0, _) => "今日".to_string(),
            (1, SearchDirection::Before) => "次日".to_string(),
            (1, SearchDirection::After) => "前日".to_string(),
            (n, SearchDirection::Before) => format!("后{n}日"),
            (n, SearchDirection::After) => format!("前{n}日"),
        };
        let year = if at.year != self.query_year {
            format!("{}年", at.year)
        } else {
            String::new()
        };
        format!("{year}{}月{}日{}（{when}）", at.month, at.day, self.boundary.term.name())
    }
}

/// The boundaries bracketing a moment, plus the one before those.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JieqiTimeline {
    pub prev_prev: JieqiInfo,
    pub prev: JieqiInfo,
    pub birth: CivilDateTime,
    pub next: JieqiInfo,
}

impl JieqiTimeline {
    /// One line per boundary, oldest first.
    pub fn describe(&self) -> [String; 3] {
        [
            self.prev_prev.describe(),
            self.prev.describe(),
            self.next.describe(),
        ]
    }
}

/// Build the timeline around `moment`.
///
/// The boundary before the previous one is found by re-querying one day
/// before the previous boundary.
pub fn jieqi_timeline<P>(provider: &P, moment: &CivilDateTime) -> Result<JieqiTimeline, CalendarError>
where
    P: LunarCalendarProvider + ?Sized,
{
    let prev = provider.nearest_solar_term(moment, SearchDirection::Before)?;
    let next = provider.nearest_solar_term(moment, SearchDirection::After)?;
    let probe = prev.instant.add_days(-1);
    let prev_prev = provider.nearest_solar_term(&probe, SearchDirection::Before)?;
    Ok(JieqiTimeline {
        prev_prev: JieqiInfo::new(prev_prev, moment, SearchDirection::Before),
        prev: JieqiInfo::new(prev, moment, SearchDirection::Before),
        birth: *moment,
        next: JieqiInfo::new(next, moment, SearchDirection::After),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_wrap_at_term_year() {
        let b = fixed_boundary(SolarTerm::DaHan, 1999).unwrap();
        assert_eq!(b.instant.year, 2000);
        assert_eq!(b.next_key(), (SolarTerm::LiChun, 2000));
        let b = fixed_boundary(SolarTerm::LiChun, 2000).unwrap();
        assert_eq!(b.prev_key(), (SolarTerm::DaHan, 1999));
    }

    #[test]
    fn estimate_picks_latest_fixed_date() {
        let m = CivilDateTime::new(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(estimate_key(&m), (SolarTerm::DongZhi, 1999));
        let m = CivilDateTime::new(2024, 2, 4, 0, 0, 0).unwrap();
        assert_eq!(estimate_key(&m), (SolarTerm::LiChun, 2024));
    }

    #[test]
    fn describe_variants() {
        let moment = CivilDateTime::new(2000, 1, 1, 12, 0, 0).unwrap();
        let prev = fixed_boundary(SolarTerm::DongZhi, 1999).unwrap();
        let info = JieqiInfo::new(prev, &moment, SearchDirection::Before);
        assert_eq!(info.days, 10);
        assert_eq!(info.describe(), "1999年12月22日冬至（后10日）");

        let next = fixed_boundary(SolarTerm::XiaoHan, 1999).unwrap();
        let info = JieqiInfo::new(next, &moment, SearchDirection::After);
        assert_eq!(info.describe(), "1月6日小寒（前4日）");

        let same = CivilDateTime::new(2000, 1, 6, 8, 0, 0).unwrap();
        let info = JieqiInfo::new(next, &same, SearchDirection::Before);
        assert_eq!(info.describe(), "1月6日小寒（今日）");

        let eve = CivilDateTime::new(2000, 1, 5, 0, 0, 0).unwrap();
        let info = JieqiInfo::new(next, &eve, SearchDirection::After);
        assert_eq!(info.describe(), "1月6日小寒（前日）");

        // Born the day after a term.
        let morrow = CivilDateTime::new(2000, 1, 7, 6, 0, 0).unwrap();
        let info = JieqiInfo::new(next, &morrow, SearchDirection::Before);
        assert_eq!(info.days, 1);
        assert_eq!(info.describe(), "1月6日小寒（次日）");
    }
}
