//! Chart assembly over a primary provider with an optional fallback.
//!
//! Every provider-dependent part of one report (pillars, lunar date, solar
//! terms, fortune onset) is computed against a single provider, so a report
//! never mixes accurate and approximate answers. When the primary provider
//! cannot answer (year out of range, root finding failed) and a fallback is
//! configured, the whole report is rebuilt on the fallback and the
//! substitution is recorded on the result.

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use serde::Serialize;
use sizhu_calendar::{
    AstronomicalProvider, CalendarError, JieqiInfo, JieqiTimeline, LunarCalendarProvider,
    LunarDate, LunarSnapshot, OnsetAnchor, Precision, ReverseMatch, ReverseSearch,
    ReverseSearchConfig, SearchDirection, TableProvider, jieqi_timeline, nearest_anchor_boundary,
};
use sizhu_config::{ProviderKind, SizhuConfig};
use sizhu_ganzhi::{
    AnnotatedChart, AnnotatedPalaces, DEFAULT_DAYUN_STEPS, DayunStep, FortuneDirection,
    FourPillarChart, Gender, LiunianInfo, QiyunOffset, annotate_chart, annotate_palaces,
    dayun_sequence, fortune_direction, liunian_sequence,
};
use sizhu_time::CivilDateTime;
use tracing::{debug, warn};

use crate::error::SizhuError;

/// Fortune projection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FortuneConfig {
    /// Decade steps to project (default 10).
    pub dayun_steps: usize,
    /// Annual pillars to list (default 10).
    pub liunian_count: usize,
    pub onset_anchor: OnsetAnchor,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            dayun_steps: DEFAULT_DAYUN_STEPS,
            liunian_count: 10,
            onset_anchor: OnsetAnchor::AnyTerm,
        }
    }
}

/// What the chart is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartInput {
    /// Civil birth moment.
    Moment { moment: CivilDateTime, gender: Gender },
    /// Lunar birth date plus clock time.
    Lunar {
        date: LunarDate,
        hour: u32,
        minute: u32,
        gender: Gender,
    },
    /// Pillars entered directly; no calendar is consulted.
    Manual(FourPillarChart),
}

/// Which optional groups to include in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub include_lunar: bool,
    pub include_jieqi: bool,
    pub include_fortune: bool,
    pub include_palaces: bool,
    /// First year of the annual list; defaults to the birth year.
    pub liunian_start: Option<i32>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            include_lunar: true,
            include_jieqi: true,
            include_fortune: true,
            include_palaces: true,
            liunian_start: None,
        }
    }
}

/// Onset, decade, and annual projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FortuneReport {
    pub direction: FortuneDirection,
    /// Boundary the onset was counted to.
    pub anchor: JieqiInfo,
    pub qiyun: QiyunOffset,
    pub dayun: Vec<DayunStep>,
    pub liunian: Vec<LiunianInfo>,
}

/// A chart with every requested derived group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    /// Civil birth moment; absent for manual input.
    pub moment: Option<CivilDateTime>,
    pub gender: Option<Gender>,
    pub chart: FourPillarChart,
    /// Nayin, life stage, taisui spirit, and stars per pillar.
    pub pillars: AnnotatedChart,
    pub lunar: Option<LunarDate>,
    pub jieqi: Option<JieqiTimeline>,
    pub fortune: Option<FortuneReport>,
    pub palaces: Option<AnnotatedPalaces>,
    /// Precision of the provider used; `None` when no calendar was consulted.
    pub precision: Option<Precision>,
    /// Why the fallback provider answered instead of the primary.
    pub fallback_reason: Option<String>,
}

/// A provider answer with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub precision: Precision,
    pub fallback_reason: Option<String>,
}

/// Parts of a report that depend on the calendar provider.
struct MomentParts {
    moment: CivilDateTime,
    chart: FourPillarChart,
    lunar: Option<LunarDate>,
    jieqi: Option<JieqiTimeline>,
    fortune: Option<FortuneReport>,
}

/// Errors worth retrying on another provider; invalid input is not.
fn should_fall_back(err: &CalendarError) -> bool {
    matches!(
        err,
        CalendarError::RangeExceeded { .. } | CalendarError::Astro(_)
    )
}

fn clamp_range(config: ReverseSearchConfig, years: RangeInclusive<i32>) -> ReverseSearchConfig {
    ReverseSearchConfig {
        start_year: config.start_year.max(*years.start()),
        end_year: config.end_year.min(*years.end()),
        ..config
    }
}

/// Chart engine: provider selection plus report assembly.
pub struct ChartEngine {
    primary: Box<dyn LunarCalendarProvider>,
    fallback: Option<Box<dyn LunarCalendarProvider>>,
    fortune: FortuneConfig,
    reverse: ReverseSearchConfig,
}

impl Default for ChartEngine {
    /// Astronomical provider with the table as fallback.
    fn default() -> Self {
        Self::new(Box::new(AstronomicalProvider::default()))
            .with_fallback(Box::new(TableProvider))
    }
}

impl ChartEngine {
    pub fn new(primary: Box<dyn LunarCalendarProvider>) -> Self {
        Self {
            primary,
            fallback: None,
            fortune: FortuneConfig::default(),
            reverse: ReverseSearchConfig::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: Box<dyn LunarCalendarProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn with_fortune_config(mut self, fortune: FortuneConfig) -> Self {
        self.fortune = fortune;
        self
    }

    pub fn with_reverse_config(mut self, reverse: ReverseSearchConfig) -> Self {
        self.reverse = reverse;
        self
    }

    /// Build an engine from a validated configuration file.
    pub fn from_config(config: &SizhuConfig) -> Result<Self, SizhuError> {
        config.validate()?;
        let astro: Box<dyn LunarCalendarProvider> =
            Box::new(AstronomicalProvider::new(config.provider_config())?);
        let table: Box<dyn LunarCalendarProvider> = Box::new(TableProvider);
        let (primary, secondary) = match config.calendar.provider {
            ProviderKind::Astronomical => (astro, table),
            ProviderKind::Table => (table, astro),
        };
        let mut engine = Self::new(primary)
            .with_fortune_config(FortuneConfig {
                dayun_steps: config.fortune.dayun_steps,
                liunian_count: config.fortune.liunian_count,
                onset_anchor: config.fortune.onset_anchor,
            })
            .with_reverse_config(config.reverse_config());
        if config.calendar.fallback {
            engine = engine.with_fallback(secondary);
        }
        debug!(
            primary = engine.primary.name(),
            fallback = ?engine.fallback.as_deref().map(|p| p.name()),
            "chart engine configured"
        );
        Ok(engine)
    }

    pub fn primary(&self) -> &dyn LunarCalendarProvider {
        self.primary.as_ref()
    }

    pub fn fallback(&self) -> Option<&dyn LunarCalendarProvider> {
        self.fallback.as_deref()
    }

    /// Run `op` on the primary provider, retrying on the fallback when the
    /// primary cannot answer.
    pub fn resolve<T>(
        &self,
        op: impl Fn(&dyn LunarCalendarProvider) -> Result<T, CalendarError>,
    ) -> Result<Resolved<T>, SizhuError> {
        let primary = self.primary.as_ref();
        match op(primary) {
            Ok(value) => Ok(Resolved {
                value,
                precision: primary.precision(),
                fallback_reason: None,
            }),
            Err(err) if should_fall_back(&err) => {
                let Some(fallback) = self.fallback.as_deref() else {
                    return Err(err.into());
                };
                warn!(
                    primary = primary.name(),
                    fallback = fallback.name(),
                    error = %err,
                    "substituting fallback calendar provider"
                );
                let value = op(fallback)?;
                Ok(Resolved {
                    value,
                    precision: fallback.precision(),
                    fallback_reason: Some(format!("{} provider: {err}", primary.name())),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Build a full report.
    pub fn chart(&self, input: &ChartInput, options: &ChartOptions) -> Result<ChartReport, SizhuError> {
        let (parts, gender) = match input {
            ChartInput::Manual(chart) => return Ok(self.manual_report(chart, options)),
            ChartInput::Moment { moment, gender } => (
                self.resolve(|p| self.moment_parts(p, moment, *gender, None, options))?,
                *gender,
            ),
            ChartInput::Lunar {
                date,
                hour,
                minute,
                gender,
            } => (
                self.resolve(|p| {
                    let day = p.lunar_to_civil(date)?;
                    let moment =
                        CivilDateTime::new(day.year, day.month, day.day, *hour, *minute, 0)?;
                    self.moment_parts(p, &moment, *gender, Some(*date), options)
                })?,
                *gender,
            ),
        };
        let Resolved {
            value,
            precision,
            fallback_reason,
        } = parts;
        Ok(ChartReport {
            moment: Some(value.moment),
            gender: Some(gender),
            chart: value.chart,
            pillars: annotate_chart(&value.chart),
            lunar: value.lunar,
            jieqi: value.jieqi,
            fortune: value.fortune,
            palaces: options.include_palaces.then(|| annotate_palaces(&value.chart)),
            precision: Some(precision),
            fallback_reason,
        })
    }

    fn manual_report(&self, chart: &FourPillarChart, options: &ChartOptions) -> ChartReport {
        ChartReport {
            moment: None,
            gender: None,
            chart: *chart,
            pillars: annotate_chart(chart),
            lunar: None,
            jieqi: None,
            fortune: None,
            palaces: options.include_palaces.then(|| annotate_palaces(chart)),
            precision: None,
            fallback_reason: None,
        }
    }

    fn moment_parts(
        &self,
        provider: &dyn LunarCalendarProvider,
        moment: &CivilDateTime,
        gender: Gender,
        lunar: Option<LunarDate>,
        options: &ChartOptions,
    ) -> Result<MomentParts, CalendarError> {
        let chart = provider.four_pillars(moment)?;
        let lunar = match (lunar, options.include_lunar) {
            (Some(date), true) => Some(date),
            (None, true) => Some(provider.lunar_date_of(moment.jdn())?),
            (_, false) => None,
        };
        let jieqi = if options.include_jieqi {
            Some(jieqi_timeline(provider, moment)?)
        } else {
            None
        };
        let fortune = if options.include_fortune {
            Some(self.fortune(provider, moment, &chart, gender, options)?)
        } else {
            None
        };
        Ok(MomentParts {
            moment: *moment,
            chart,
            lunar,
            jieqi,
            fortune,
        })
    }

    fn fortune(
        &self,
        provider: &dyn LunarCalendarProvider,
        moment: &CivilDateTime,
        chart: &FourPillarChart,
        gender: Gender,
        options: &ChartOptions,
    ) -> Result<FortuneReport, CalendarError> {
        let direction = fortune_direction(chart.year.stem(), gender);
        let search = match direction {
            FortuneDirection::Forward => SearchDirection::After,
            FortuneDirection::Backward => SearchDirection::Before,
        };
        let boundary = nearest_anchor_boundary(provider, moment, search, self.fortune.onset_anchor)?;
        let anchor = JieqiInfo::new(boundary, moment, search);
        let qiyun = QiyunOffset::from_day_distance(anchor.distance_days, direction);
        Ok(FortuneReport {
            direction,
            anchor,
            qiyun,
            dayun: dayun_sequence(
                chart.month,
                direction,
                qiyun.years,
                moment.year,
                self.fortune.dayun_steps,
            ),
            liunian: liunian_sequence(
                options.liunian_start.unwrap_or(moment.year),
                self.fortune.liunian_count,
                moment.year,
            ),
        })
    }

    /// Four pillars of a civil moment.
    pub fn four_pillars(&self, moment: &CivilDateTime) -> Result<Resolved<FourPillarChart>, SizhuError> {
        self.resolve(|p| p.four_pillars(moment))
    }

    /// Lunar date and pillars of a civil moment.
    pub fn civil_to_lunar(&self, moment: &CivilDateTime) -> Result<Resolved<LunarSnapshot>, SizhuError> {
        self.resolve(|p| p.civil_to_lunar(moment))
    }

    /// Civil date of a lunar date.
    pub fn lunar_to_civil(&self, date: &LunarDate) -> Result<Resolved<CivilDateTime>, SizhuError> {
        self.resolve(|p| p.lunar_to_civil(date))
    }

    pub fn jieqi(&self, moment: &CivilDateTime) -> Result<Resolved<JieqiTimeline>, SizhuError> {
        self.resolve(|p| jieqi_timeline(p, moment))
    }

    /// Civil moments whose chart equals `target`.
    ///
    /// Without an explicit `config`, the engine's range is narrowed to the
    /// years the answering provider supports.
    pub fn reverse_search(
        &self,
        target: FourPillarChart,
        config: Option<ReverseSearchConfig>,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Resolved<Vec<ReverseMatch>>, SizhuError> {
        self.resolve(|p| {
            let config = config.unwrap_or_else(|| clamp_range(self.reverse, p.supported_years()));
            let mut search = ReverseSearch::new(p, target, &config)?;
            if let Some(flag) = &cancel {
                search = search.with_cancel_flag(Arc::clone(flag));
            }
            search.run()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> CivilDateTime {
        CivilDateTime::new(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn fallback_is_recorded() {
        // Before the astronomical window the arithmetic pillars still answer.
        let engine = ChartEngine::default();
        let r = engine.four_pillars(&at(1700, 1, 1, 0)).unwrap();
        assert_eq!(r.precision, Precision::Approximate);
        assert!(r.fallback_reason.is_some());

        let engine = ChartEngine::new(Box::new(TableProvider))
            .with_fallback(Box::new(AstronomicalProvider::default()));
        let r = engine.civil_to_lunar(&at(1850, 6, 1, 0)).unwrap();
        assert_eq!(r.precision, Precision::Accurate);
        assert!(r.fallback_reason.as_deref().is_some_and(|s| s.starts_with("table provider")));
    }

    #[test]
    fn no_fallback_without_secondary() {
        let engine = ChartEngine::new(Box::new(TableProvider));
        assert!(matches!(
            engine.civil_to_lunar(&at(1850, 6, 1, 0)),
            Err(SizhuError::Calendar(CalendarError::RangeExceeded { .. }))
        ));
    }

    #[test]
    fn invalid_input_does_not_fall_back() {
        let engine = ChartEngine::default();
        let bogus = LunarDate::new(2024, 2, true, 1).unwrap();
        assert!(matches!(
            engine.lunar_to_civil(&bogus),
            Err(SizhuError::Calendar(CalendarError::InvalidLunarDate { .. }))
        ));
    }

    #[test]
    fn clamp_keeps_inner_range() {
        let c = clamp_range(ReverseSearchConfig::default(), 1900..=2100);
        assert_eq!((c.start_year, c.end_year), (1900, 2099));
    }
}
