//! Apparent geocentric longitude of the Sun.
//!
//! Meeus, "Astronomical Algorithms" ch. 25, low-accuracy theory: geometric
//! mean longitude plus equation of center, corrected for nutation in
//! longitude and aberration. Good to ~0.01°, i.e. ~15 minutes of time at
//! worst for a solar-term instant.

use sizhu_time::jd_to_centuries;

/// Mean motion of the Sun in degrees per day.
pub const SUN_MEAN_MOTION_DEG_PER_DAY: f64 = 360.0 / 365.242_2;

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle to (-180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Apparent ecliptic longitude of the Sun in degrees [0, 360), at a TT Julian Date.
pub fn sun_apparent_longitude(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_360(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}
