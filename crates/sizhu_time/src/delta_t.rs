//! ΔT = TT − UT.
//!
//! Piecewise polynomial fits of Espenak & Meeus (NASA eclipse canon, 2006),
//! evaluated at the decimal year `y + (m − 0.5) / 12`. Accuracy is about a
//! second across 1800–2050, which is far below what the calendar rules need
//! (a term instant shifts by ~1 s per 0.0000116° of solar longitude).

use crate::julian::{SECONDS_PER_DAY, jd_to_calendar};

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(decimal_year: f64) -> f64 {
    let y = decimal_year;
    if y < 1860.0 {
        let t = y - 1800.0;
        13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7)
    } else if y < 1900.0 {
        let t = y - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if y < 2150.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// ΔT in days at a given Julian Date.
fn delta_t_days_at(jd: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd);
    let decimal_year = year as f64 + (month as f64 - 0.5) / 12.0;
    delta_t_seconds(decimal_year) / SECONDS_PER_DAY
}

/// Convert a UT Julian Date to TT.
pub fn ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_days_at(jd_ut)
}

/// Convert a TT Julian Date to UT.
///
/// ΔT changes by well under a second over a day, so evaluating it at the
/// TT instant is indistinguishable from a fixed-point solve.
pub fn tt_to_ut(jd_tt: f64) -> f64 {
    jd_tt - delta_t_days_at(jd_tt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000_near_64s() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.01, "got {dt}");
    }

    #[test]
    fn year_1900_near_minus_3s() {
        let dt = delta_t_seconds(1900.0);
        assert!((dt + 2.79).abs() < 0.01, "got {dt}");
    }

    #[test]
    fn year_2024_near_70s() {
        let dt = delta_t_seconds(2024.0);
        assert!(dt > 65.0 && dt < 75.0, "got {dt}");
    }

    #[test]
    fn segments_join_smoothly() {
        for boundary in [1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let before = delta_t_seconds(boundary - 1e-6);
            let after = delta_t_seconds(boundary + 1e-6);
            assert!(
                (before - after).abs() < 2.0,
                "jump at {boundary}: {before} vs {after}"
            );
        }
    }

    #[test]
    fn tt_ut_inverse() {
        let ut = 2_451_545.0;
        let back = tt_to_ut(ut_to_tt(ut));
        assert!((back - ut).abs() < 1e-8);
    }
}
