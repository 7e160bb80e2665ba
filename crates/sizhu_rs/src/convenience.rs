//! One-call helpers over the global engine.
//!
//! Each helper returns the bare value; use [`engine()`](crate::global::engine) directly
//! to see which provider answered.

use sizhu_calendar::{JieqiTimeline, LunarDate, ReverseMatch, ReverseSearchConfig};
use sizhu_ganzhi::{FourPillarChart, Gender};
use sizhu_time::CivilDateTime;

use crate::engine::{ChartInput, ChartOptions, ChartReport};
use crate::error::SizhuError;
use crate::global::engine;

/// Four pillars of a civil moment.
pub fn four_pillars(moment: &CivilDateTime) -> Result<FourPillarChart, SizhuError> {
    Ok(engine().four_pillars(moment)?.value)
}

/// Full report for a civil birth moment with default options.
pub fn birth_chart(moment: &CivilDateTime, gender: Gender) -> Result<ChartReport, SizhuError> {
    engine().chart(
        &ChartInput::Moment {
            moment: *moment,
            gender,
        },
        &ChartOptions::default(),
    )
}

pub fn solar_to_lunar(moment: &CivilDateTime) -> Result<LunarDate, SizhuError> {
    Ok(engine().civil_to_lunar(moment)?.value.date)
}

pub fn lunar_to_solar(date: &LunarDate) -> Result<CivilDateTime, SizhuError> {
    Ok(engine().lunar_to_civil(date)?.value)
}

pub fn jieqi(moment: &CivilDateTime) -> Result<JieqiTimeline, SizhuError> {
    Ok(engine().jieqi(moment)?.value)
}

/// Reverse search over `start_year..=end_year`.
pub fn reverse_search(
    chart: &str,
    start_year: i32,
    end_year: i32,
) -> Result<Vec<ReverseMatch>, SizhuError> {
    let target: FourPillarChart = chart.parse()?;
    let config = ReverseSearchConfig {
        start_year,
        end_year,
        ..ReverseSearchConfig::default()
    };
    Ok(engine().reverse_search(target, Some(config), None)?.value)
}
