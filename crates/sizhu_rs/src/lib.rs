//! Convenience facade for the sizhu Four Pillars engine.
//!
//! Wraps calendar providers, sexagenary rules, and configuration behind a
//! single [`ChartEngine`], plus one-call helpers over a process-wide default
//! engine.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sizhu_rs::*;
//!
//! let moment: CivilDateTime = "2000-01-01 12:00".parse().unwrap();
//! let report = birth_chart(&moment, Gender::Male).unwrap();
//! println!("{}", report.chart); // 己卯 丙子 戊午 戊午
//! ```

pub mod convenience;
pub mod engine;
pub mod error;
pub mod global;

pub use convenience::{
    birth_chart, four_pillars, jieqi, lunar_to_solar, reverse_search, solar_to_lunar,
};
pub use engine::{
    ChartEngine, ChartInput, ChartOptions, ChartReport, FortuneConfig, FortuneReport, Resolved,
};
pub use error::SizhuError;
pub use global::{engine, init, is_initialized};

// Re-export the types callers need so they can depend on this crate alone.
pub use sizhu_calendar::{
    AstronomicalProvider, CalendarError, JieqiInfo, JieqiTimeline, LunarCalendarProvider,
    LunarDate, LunarSnapshot, OnsetAnchor, Precision, ProviderConfig, ReverseMatch,
    ReverseProgress, ReverseSearch, ReverseSearchConfig, SearchDirection, SolarTermBoundary,
    TableProvider,
};
pub use sizhu_config::{CONFIG_TEMPLATE, ConfigError, ProviderKind, SizhuConfig};
pub use sizhu_ganzhi::{
    AnnotatedChart, AnnotatedPalaces, Branch, DayunStep, FortuneDirection, FourPillarChart,
    Gender, LiunianInfo, Nayin, Pillar, PillarAnnotation, PillarPosition, QiyunOffset, SolarTerm,
    Stem, UNKNOWN, life_stage_name_for, nayin_element_for, nayin_name_for, taisui_name_for,
};
pub use sizhu_time::CivilDateTime;
