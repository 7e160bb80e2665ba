//! Analytic solar and lunar theory for the Chinese calendar.
//!
//! This crate provides:
//! - Apparent solar longitude (Meeus ch. 25)
//! - True new moon instants (Meeus ch. 49)
//! - Solar-longitude root finding for the 24 solar terms

pub mod error;
pub mod moon;
pub mod solar_term;
pub mod sun;

pub use error::AstroError;
pub use moon::{
    LUNATION_EPOCH_JDE, SYNODIC_MONTH_DAYS, lunation_before, lunation_nearest, new_moon_jde,
};
pub use solar_term::{SolarTermConfig, find_solar_longitude, sun_longitude_at_ut};
pub use sun::{
    SUN_MEAN_MOTION_DEG_PER_DAY, normalize_360, normalize_to_pm180, sun_apparent_longitude,
};
