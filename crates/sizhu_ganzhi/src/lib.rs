//! Sexagenary (干支) primitives and the rules built on them.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches, and parity-checked pillars
//! - Pillar rules: year, month, day, and hour derivation
//! - Nayin, life stages, taisui spirits, and auxiliary stars
//! - Life, body, and fetal palaces
//! - Fortune direction, qiyun onset, dayun and liunian sequences
//! - The 24 solar terms as a closed enumeration
//!
//! Everything here is pure integer arithmetic over the 60-cycle. Time and
//! calendar concerns live in `sizhu_time` and `sizhu_calendar`.

pub mod annotate;
pub mod branch;
pub mod element;
pub mod error;
pub mod fortune;
pub mod life_stage;
pub mod lookup;
pub mod nayin;
pub mod palace;
pub mod pillar;
pub mod rules;
pub mod solar_term;
pub mod stars;
pub mod stem;
pub mod taisui;

pub use annotate::{
    AnnotatedChart, AnnotatedPalaces, PillarAnnotation, annotate_chart, annotate_palaces,
    annotate_pillar,
};
pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, element_in_name};
pub use error::GanzhiError;
pub use fortune::{
    DAYUN_SPAN_YEARS, DEFAULT_DAYUN_STEPS, DayunStep, FortuneDirection, Gender, LiunianInfo,
    MAX_DAYUN_STEPS, MAX_LIUNIAN_COUNT, QiyunOffset, dayun_sequence, fortune_direction, liunian_sequence,
};
pub use life_stage::{
    ALL_LIFE_STAGES, LifeStage, LifeStageInfo, StrengthLevel, life_stage, life_stage_info,
};
pub use lookup::{UNKNOWN, life_stage_name_for, nayin_element_for, nayin_name_for, taisui_name_for};
pub use nayin::{ALL_NAYIN, Nayin, NayinInfo, nayin, nayin_at_cycle_index, nayin_info};
pub use palace::{PalaceKind, Palaces, palace_pillar, palaces};
pub use pillar::{
    ALL_POSITIONS, CYCLE_LENGTH, FourPillarChart, Pillar, PillarPosition, sexagenary_cycle,
};
pub use rules::{
    civil_month_pillar, day_pillar, first_hour_stem, first_month_stem, hour_branch, hour_pillar,
    representative_hour, solar_month_pillar, year_pillar,
};
pub use solar_term::{
    ALL_SOLAR_TERMS, SolarTerm, solar_month_at_longitude, solar_term_at_longitude,
};
pub use stars::AuxiliaryStars;
pub use stem::{ALL_STEMS, Stem};
pub use taisui::{ALL_TAISUI_SPIRITS, TaisuiSpirit, taisui_spirit};
