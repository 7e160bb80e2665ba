//! Instants at which the Sun reaches a given apparent longitude.
//!
//! Newton iteration on f(t) = normalize(target − λ(t)), using the Sun's mean
//! motion as the derivative. λ changes monotonically at ~1°/day so a guess
//! within a few days converges in three or four steps.

use sizhu_time::ut_to_tt;

use crate::error::AstroError;
use crate::sun::{SUN_MEAN_MOTION_DEG_PER_DAY, normalize_to_pm180, sun_apparent_longitude};

/// Configuration for solar-longitude root finding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermConfig {
    /// Maximum Newton iterations (default 50).
    pub max_iterations: u32,
    /// Convergence threshold in days (default 1e-7, ~9 ms).
    pub convergence_days: f64,
}

impl SolarTermConfig {
    pub fn validate(&self) -> Result<(), AstroError> {
        if self.max_iterations == 0 {
            return Err(AstroError::InvalidConfig("max_iterations must be > 0"));
        }
        if self.convergence_days.is_nan() || self.convergence_days <= 0.0 {
            return Err(AstroError::InvalidConfig("convergence_days must be > 0"));
        }
        Ok(())
    }
}

impl Default for SolarTermConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            convergence_days: 1e-7,
        }
    }
}

/// Apparent solar longitude at a UT Julian Date.
pub fn sun_longitude_at_ut(jd_ut: f64) -> f64 {
    sun_apparent_longitude(ut_to_tt(jd_ut))
}

/// UT Julian Date at which the Sun's apparent longitude equals `target_deg`,
/// starting from `guess_jd_ut`.
///
/// The result is the crossing nearest the guess (within ±180° of motion).
pub fn find_solar_longitude(
    target_deg: f64,
    guess_jd_ut: f64,
    config: &SolarTermConfig,
) -> Result<f64, AstroError> {
    config.validate()?;
    let mut t = guess_jd_ut;
    for _ in 0..config.max_iterations {
        let lon = sun_longitude_at_ut(t);
        let dt = normalize_to_pm180(target_deg - lon) / SUN_MEAN_MOTION_DEG_PER_DAY;
        t += dt;
        if dt.abs() < config.convergence_days {
            return Ok(t);
        }
    }
    Err(AstroError::NoConvergence("solar longitude search"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_time::calendar_to_jd;

    #[test]
    fn converges_to_target() {
        let config = SolarTermConfig::default();
        let guess = calendar_to_jd(2024, 2, 4.0);
        let t = find_solar_longitude(315.0, guess, &config).unwrap();
        let lon = sun_longitude_at_ut(t);
        assert!(normalize_to_pm180(lon - 315.0).abs() < 1e-5, "got {lon}");
    }

    #[test]
    fn zero_iterations_rejected() {
        let config = SolarTermConfig {
            max_iterations: 0,
            convergence_days: 1e-7,
        };
        assert!(find_solar_longitude(0.0, 2_451_545.0, &config).is_err());
    }

    #[test]
    fn bad_guess_still_finds_nearest_crossing() {
        let config = SolarTermConfig::default();
        // 20 days off
        let guess = calendar_to_jd(2024, 3, 10.0);
        let t = find_solar_longitude(0.0, guess, &config).unwrap();
        let vernal = calendar_to_jd(2024, 3, 20.0);
        assert!((t - vernal).abs() < 1.0, "got {t}");
    }
}
