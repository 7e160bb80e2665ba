//! Reverse search: civil dates whose chart equals a target chart.
//!
//! The scan walks the range day by day at the hour branch's representative
//! hour. Days whose day pillar differs from the target are skipped before
//! the provider is consulted, so only one day in sixty costs a full chart.
//! Work is split into chunks; a shared cancel flag is checked between them.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use sizhu_ganzhi::{FourPillarChart, day_pillar, representative_hour};
use sizhu_time::{CivilDateTime, jdn_to_calendar, julian_day_number};
use tracing::{debug, info};

use crate::error::CalendarError;
use crate::lunar_date::LunarDate;
use crate::provider::LunarCalendarProvider;

/// Bounds and chunking for a reverse search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseSearchConfig {
    /// First civil year scanned (default 1801).
    pub start_year: i32,
    /// Last civil year scanned, inclusive (default 2099).
    pub end_year: i32,
    /// Days per chunk (default 366).
    pub chunk_days: u32,
}

impl Default for ReverseSearchConfig {
    fn default() -> Self {
        Self {
            start_year: 1801,
            end_year: 2099,
            chunk_days: 366,
        }
    }
}

impl ReverseSearchConfig {
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.start_year > self.end_year {
            return Err(CalendarError::InvalidConfig("start_year must be <= end_year"));
        }
        if self.chunk_days == 0 {
            return Err(CalendarError::InvalidConfig("chunk_days must be > 0"));
        }
        Ok(())
    }
}

/// One civil moment that reproduces the target chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReverseMatch {
    pub moment: CivilDateTime,
    /// `None` when the provider has no lunar data for the date.
    pub lunar: Option<LunarDate>,
    /// e.g. `2000年01月01日 12:00`.
    pub solar_text: String,
    /// e.g. `农历1999年冬月廿五 午时`.
    pub lunar_text: Option<String>,
}

/// Scan progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReverseProgress {
    pub scanned_days: u64,
    pub total_days: u64,
    pub matches: usize,
}

impl ReverseProgress {
    pub fn fraction(&self) -> f64 {
        if self.total_days == 0 {
            1.0
        } else {
            self.scanned_days as f64 / self.total_days as f64
        }
    }
}

/// Chunked, cancellable reverse search.
pub struct ReverseSearch<'a, P: LunarCalendarProvider + ?Sized> {
    provider: &'a P,
    target: FourPillarChart,
    hour: u32,
    next_jdn: i64,
    end_jdn: i64,
    chunk_days: u32,
    total_days: u64,
    matches: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a, P: LunarCalendarProvider + ?Sized> ReverseSearch<'a, P> {
    /// Prepare a search; the range must lie within the provider's years.
    pub fn new(
        provider: &'a P,
        target: FourPillarChart,
        config: &ReverseSearchConfig,
    ) -> Result<Self, CalendarError> {
        config.validate()?;
        let supported = provider.supported_years();
        for year in [config.start_year, config.end_year] {
            if !supported.contains(&year) {
                return Err(CalendarError::RangeExceeded {
                    year,
                    min: *supported.start(),
                    max: *supported.end(),
                });
            }
        }
        let next_jdn = julian_day_number(config.start_year, 1, 1);
        let end_jdn = julian_day_number(config.end_year, 12, 31);
        Ok(Self {
            provider,
            target,
            hour: representative_hour(target.hour.branch()),
            next_jdn,
            end_jdn,
            chunk_days: config.chunk_days,
            total_days: (end_jdn - next_jdn + 1) as u64,
            matches: 0,
            cancel: None,
        })
    }

    /// Attach a flag that stops the search at the next chunk boundary.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn is_finished(&self) -> bool {
        self.next_jdn > self.end_jdn
    }

    pub fn progress(&self) -> ReverseProgress {
        let remaining = (self.end_jdn - self.next_jdn + 1).max(0) as u64;
        ReverseProgress {
            scanned_days: self.total_days - remaining,
            total_days: self.total_days,
            matches: self.matches,
        }
    }

    /// Scan the next chunk; `Ok(None)` once the range is exhausted.
    pub fn next_chunk(&mut self) -> Result<Option<Vec<ReverseMatch>>, CalendarError> {
        if self.is_finished() {
            return Ok(None);
        }
        if self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Err(CalendarError::Cancelled);
        }
        let last = (self.next_jdn + self.chunk_days as i64 - 1).min(self.end_jdn);
        let mut found = Vec::new();
        for jdn in self.next_jdn..=last {
            if day_pillar(jdn) != self.target.day {
                continue;
            }
            let (y, m, d) = jdn_to_calendar(jdn);
            let moment = CivilDateTime::new(y, m, d, self.hour, 0, 0)?;
            if self.provider.four_pillars(&moment)? == self.target {
                found.push(self.describe_match(moment));
            }
        }
        debug!(
            from = self.next_jdn,
            to = last,
            found = found.len(),
            "reverse search chunk"
        );
        self.next_jdn = last + 1;
        self.matches += found.len();
        Ok(Some(found))
    }

    /// Scan the whole range, matches in ascending order.
    pub fn run(mut self) -> Result<Vec<ReverseMatch>, CalendarError> {
        let mut all = Vec::new();
        while let Some(chunk) = self.next_chunk()? {
            all.extend(chunk);
        }
        info!(target_chart = %self.target, matches = all.len(), "reverse search finished");
        Ok(all)
    }

    fn describe_match(&self, moment: CivilDateTime) -> ReverseMatch {
        let lunar = self.provider.lunar_date_of(moment.jdn()).ok();
        let branch = self.target.hour.branch().glyph();
        ReverseMatch {
            moment,
            lunar,
            solar_text: format!(
                "{}年{:02}月{:02}日 {:02}:00",
                moment.year, moment.month, moment.day, moment.hour
            ),
            lunar_text: lunar.map(|l| format!("{l} {branch}时")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{AstronomicalProvider, TableProvider};

    fn narrow(start_year: i32, end_year: i32) -> ReverseSearchConfig {
        ReverseSearchConfig {
            start_year,
            end_year,
            chunk_days: 100,
        }
    }

    #[test]
    fn finds_table_chart() {
        let target: FourPillarChart = "庚辰 戊寅 戊午 戊午".parse().unwrap();
        let hits = ReverseSearch::new(&TableProvider, target, &narrow(2000, 2000))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].solar_text, "2000年01月01日 12:00");
        assert_eq!(hits[0].lunar_text.as_deref(), Some("农历1999年冬月廿五 午时"));
    }

    #[test]
    fn progress_and_chunks() {
        let p = AstronomicalProvider::default();
        let target: FourPillarChart = "己卯 丙子 戊午 戊午".parse().unwrap();
        let mut search = ReverseSearch::new(&p, target, &narrow(2000, 2000)).unwrap();
        assert_eq!(search.progress().total_days, 366);
        let first = search.next_chunk().unwrap().unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(search.progress().scanned_days, 100);
        while search.next_chunk().unwrap().is_some() {}
        assert!(search.is_finished());
        assert_eq!(search.progress().fraction(), 1.0);
    }

    #[test]
    fn cancellation() {
        let flag = Arc::new(AtomicBool::new(true));
        let target: FourPillarChart = "己卯 丙子 戊午 戊午".parse().unwrap();
        let search = ReverseSearch::new(&TableProvider, target, &narrow(1950, 2000))
            .unwrap()
            .with_cancel_flag(flag);
        assert_eq!(search.run(), Err(CalendarError::Cancelled));
    }

    #[test]
    fn range_outside_provider() {
        let target: FourPillarChart = "己卯 丙子 戊午 戊午".parse().unwrap();
        assert!(matches!(
            ReverseSearch::new(&TableProvider, target, &narrow(1850, 1950)),
            Err(CalendarError::RangeExceeded { year: 1850, .. })
        ));
        assert!(ReverseSearch::new(&TableProvider, target, &narrow(2000, 1999)).is_err());
    }
}
