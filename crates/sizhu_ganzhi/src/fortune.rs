//! Fortune periods: onset (起运), decade pillars (大运), annual pillars (流年).
//!
//! Direction follows year-stem polarity and gender: yang-year males and
//! yin-year females walk forward from the month pillar, everyone else
//! backward. Onset converts the day distance to the governing solar term at
//! 3 days → 1 year, 1 day → 4 months, 1 hour → 5 days.

use serde::Serialize;

use crate::pillar::Pillar;
use crate::rules::year_pillar;
use crate::stem::Stem;

/// Default number of decade steps.
pub const DEFAULT_DAYUN_STEPS: usize = 10;

/// Years covered by one decade step.
pub const DAYUN_SPAN_YEARS: u32 = 10;

/// Longest decade sequence produced (120 years).
pub const MAX_DAYUN_STEPS: usize = 12;

/// Longest annual list produced.
pub const MAX_LIUNIAN_COUNT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            other => Err(format!("unknown gender '{other}'")),
        }
    }
}

/// Walk direction of the decade sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FortuneDirection {
    /// 顺行: count to the next solar term, advance the month pillar.
    Forward,
    /// 逆行: count to the previous solar term, step the month pillar back.
    Backward,
}

impl FortuneDirection {
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Forward => "顺行",
            Self::Backward => "逆行",
        }
    }
}

/// Yang year + male, or yin year + female ⇒ forward.
pub const fn fortune_direction(year_stem: Stem, gender: Gender) -> FortuneDirection {
    match (year_stem.is_yang(), gender) {
        (true, Gender::Male) | (false, Gender::Female) => FortuneDirection::Forward,
        _ => FortuneDirection::Backward,
    }
}

/// Delay from birth to the first decade period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QiyunOffset {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    /// Whole days between birth and the governing solar term.
    pub total_days: u32,
    pub direction: FortuneDirection,
}

impl QiyunOffset {
    /// Convert a day distance (fractional days allowed) to an onset offset.
    ///
    /// Whole days give years and months; the sub-day remainder adds days at
    /// 1 hour → 5 days. Negative distances are treated as zero.
    pub fn from_day_distance(distance_days: f64, direction: FortuneDirection) -> Self {
        let d = if distance_days.is_finite() {
            distance_days.max(0.0)
        } else {
            0.0
        };
        let total_days = d.floor() as u32;
        let extra_days = ((d - d.floor()) * 120.0).floor() as u32;
        Self {
            years: total_days / 3,
            months: (total_days % 3) * 4 + extra_days / 30,
            days: extra_days % 30,
            total_days,
            direction,
        }
    }

    /// Chinese summary, e.g. `约3岁4个月零0日后上运`.
    pub fn description(&self) -> String {
        format!(
            "约{}岁{}个月零{}日后上运",
            self.years, self.months, self.days
        )
    }
}

/// One decade period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayunStep {
    /// 1-based position in the sequence.
    pub ordinal: u8,
    pub pillar: Pillar,
    pub start_age: u32,
    /// `start_age + 9`.
    pub end_age: u32,
    /// Calendar year the period starts (birth year + start age).
    pub start_year: i32,
}

/// Decade sequence walked from the month pillar, at most [`MAX_DAYUN_STEPS`].
pub fn dayun_sequence(
    month_pillar: Pillar,
    direction: FortuneDirection,
    onset_years: u32,
    birth_year: i32,
    steps: usize,
) -> Vec<DayunStep> {
    (0..steps.min(MAX_DAYUN_STEPS))
        .map(|i| {
            let start_age = onset_years + i as u32 * DAYUN_SPAN_YEARS;
            DayunStep {
                ordinal: (i + 1) as u8,
                pillar: month_pillar.advance(direction.sign() * (i as i64 + 1)),
                start_age,
                end_age: start_age + DAYUN_SPAN_YEARS - 1,
                start_year: birth_year + start_age as i32,
            }
        })
        .collect()
}

/// One annual period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiunianInfo {
    pub year: i32,
    pub pillar: Pillar,
    /// Nominal age (虚岁): year − birth year + 1.
    pub age: i32,
}

/// Annual pillars for `count` years starting at `start_year`, at most
/// [`MAX_LIUNIAN_COUNT`].
pub fn liunian_sequence(start_year: i32, count: usize, birth_year: i32) -> Vec<LiunianInfo> {
    (0..count.min(MAX_LIUNIAN_COUNT) as i32)
        .map(|i| {
            let year = start_year + i;
            LiunianInfo {
                year,
                pillar: year_pillar(year),
                age: year - birth_year + 1,
            }
        })
        .collect()
}
