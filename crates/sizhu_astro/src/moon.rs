//! True new moon instants.
//!
//! Meeus, "Astronomical Algorithms" ch. 49: mean phase for lunation `k`
//! (k = 0 is the new moon of 2000 Jan 6) plus the periodic and planetary
//! correction terms. Accuracy is a few seconds to a minute over 1800–2150.

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// JDE of the mean new moon for lunation 0.
pub const LUNATION_EPOCH_JDE: f64 = 2_451_550.097_66;

/// Periodic terms: (coefficient, E power, multipliers of M, M', F, Ω).
const PERIODIC_TERMS: [(f64, i32, [f64; 4]); 25] = [
    (-0.40720, 0, [0.0, 1.0, 0.0, 0.0]),
    (0.17241, 1, [1.0, 0.0, 0.0, 0.0]),
    (0.01608, 0, [0.0, 2.0, 0.0, 0.0]),
    (0.01039, 0, [0.0, 0.0, 2.0, 0.0]),
    (0.00739, 1, [-1.0, 1.0, 0.0, 0.0]),
    (-0.00514, 1, [1.0, 1.0, 0.0, 0.0]),
    (0.00208, 2, [2.0, 0.0, 0.0, 0.0]),
    (-0.00111, 0, [0.0, 1.0, -2.0, 0.0]),
    (-0.00057, 0, [0.0, 1.0, 2.0, 0.0]),
    (0.00056, 1, [1.0, 2.0, 0.0, 0.0]),
    (-0.00042, 0, [0.0, 3.0, 0.0, 0.0]),
    (0.00042, 1, [1.0, 0.0, 2.0, 0.0]),
    (0.00038, 1, [1.0, 0.0, -2.0, 0.0]),
    (-0.00024, 1, [-1.0, 2.0, 0.0, 0.0]),
    (-0.00017, 0, [0.0, 0.0, 0.0, 1.0]),
    (-0.00007, 0, [2.0, 1.0, 0.0, 0.0]),
    (0.00004, 0, [0.0, 2.0, -2.0, 0.0]),
    (0.00004, 0, [3.0, 0.0, 0.0, 0.0]),
    (0.00003, 0, [1.0, 1.0, -2.0, 0.0]),
    (0.00003, 0, [0.0, 2.0, 2.0, 0.0]),
    (-0.00003, 0, [1.0, 1.0, 2.0, 0.0]),
    (0.00003, 0, [-1.0, 1.0, 2.0, 0.0]),
    (-0.00002, 0, [-1.0, 1.0, -2.0, 0.0]),
    (-0.00002, 0, [1.0, 3.0, 0.0, 0.0]),
    (0.00002, 0, [0.0, 4.0, 0.0, 0.0]),
];

/// Planetary arguments A2..A14: (constant, rate per lunation, coefficient).
const PLANETARY_TERMS: [(f64, f64, f64); 13] = [
    (251.88, 0.016_321, 0.000_165),
    (251.83, 26.651_886, 0.000_164),
    (349.42, 36.412_478, 0.000_126),
    (84.66, 18.206_239, 0.000_110),
    (141.74, 53.303_771, 0.000_062),
    (207.14, 2.453_732, 0.000_060),
    (154.84, 7.306_860, 0.000_056),
    (34.52, 27.261_239, 0.000_047),
    (207.19, 0.121_824, 0.000_042),
    (291.34, 1.844_379, 0.000_040),
    (161.72, 24.198_154, 0.000_037),
    (239.56, 25.513_099, 0.000_035),
    (331.55, 3.592_518, 0.000_023),
];

/// JDE (TT) of the true new moon for integer lunation `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = LUNATION_EPOCH_JDE + 29.530_588_861 * k + 0.000_154_37 * t2 - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = (2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3).to_radians();
    let mp = (201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4)
        .to_radians();
    let f = (160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4)
        .to_radians();
    let omega = (124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3).to_radians();

    let args = [m, mp, f, omega];
    let periodic: f64 = PERIODIC_TERMS
        .iter()
        .map(|(coef, e_pow, mult)| {
            let angle: f64 = mult.iter().zip(args.iter()).map(|(c, a)| c * a).sum();
            coef * e.powi(*e_pow) * angle.sin()
        })
        .sum();

    let a1 = (299.77 + 0.107_408 * k - 0.009_173 * t2).to_radians();
    let planetary: f64 = 0.000_325 * a1.sin()
        + PLANETARY_TERMS
            .iter()
            .map(|(c0, rate, coef)| coef * (c0 + rate * k).to_radians().sin())
            .sum::<f64>();

    mean + periodic + planetary
}

/// Lunation number whose mean new moon most recently precedes `jd`.
pub fn lunation_before(jd: f64) -> i64 {
    ((jd - LUNATION_EPOCH_JDE) / SYNODIC_MONTH_DAYS).floor() as i64
}

/// Lunation number whose mean new moon is nearest to `jd`.
pub fn lunation_nearest(jd: f64) -> i64 {
    ((jd - LUNATION_EPOCH_JDE) / SYNODIC_MONTH_DAYS + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunation_zero_is_2000_jan_6() {
        // 2000 Jan 6 18:14 UT
        let jde = new_moon_jde(0);
        assert!((jde - 2_451_550.26).abs() < 0.01, "got {jde}");
    }

    #[test]
    fn meeus_example_49a() {
        // New moon of 1977 Feb: JDE 2443192.65118
        let jde = new_moon_jde(-283);
        assert!((jde - 2_443_192.651_18).abs() < 0.0001, "got {jde}");
    }

    #[test]
    fn consecutive_lunations_are_a_month_apart() {
        for k in -300..300 {
            let gap = new_moon_jde(k + 1) - new_moon_jde(k);
            assert!(gap > 29.2 && gap < 29.9, "k={k}, gap={gap}");
        }
    }

    #[test]
    fn lunation_index_estimates() {
        assert_eq!(lunation_before(2_451_550.0), -1);
        assert_eq!(lunation_before(2_451_551.0), 0);
        assert_eq!(lunation_nearest(2_451_545.0), 0);
    }
}
