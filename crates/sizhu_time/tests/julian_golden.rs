//! Golden values for calendar <-> JD conversion.

use proptest::prelude::*;
use sizhu_time::{CivilDateTime, calendar_to_jd, jd_to_calendar, jdn_to_calendar, julian_day_number};

/// Meeus table 7.a spot checks.
#[test]
fn meeus_reference_dates() {
    let cases = [
        (2000, 1, 1.5, 2_451_545.0),
        (1999, 1, 1.0, 2_451_179.5),
        (1987, 1, 27.0, 2_446_822.5),
        (1987, 6, 19.5, 2_446_966.0),
        (1988, 1, 27.0, 2_447_187.5),
        (1900, 1, 1.0, 2_415_020.5),
        (1600, 1, 1.0, 2_305_447.5),
    ];
    for (y, m, d, expected) in cases {
        let jd = calendar_to_jd(y, m, d);
        assert!((jd - expected).abs() < 1e-9, "{y}-{m}-{d}: {jd} != {expected}");
        let (yy, mm, dd) = jd_to_calendar(expected);
        assert_eq!((yy, mm), (y, m));
        assert!((dd - d).abs() < 1e-9);
    }
}

#[test]
fn lunar_table_epoch_jdn() {
    assert_eq!(julian_day_number(1900, 1, 31), 2_415_051);
}

proptest! {
    #[test]
    fn jdn_roundtrip(jdn in 2_378_497i64..2_506_697i64) {
        let (y, m, d) = jdn_to_calendar(jdn);
        prop_assert_eq!(julian_day_number(y, m, d), jdn);
        prop_assert!(CivilDateTime::date(y, m, d).is_ok());
    }

    #[test]
    fn local_jd_roundtrip(jdn in 2_378_497i64..2_506_697i64, h in 0u32..24, mi in 0u32..60, s in 0u32..60) {
        let (y, m, d) = jdn_to_calendar(jdn);
        let t = CivilDateTime::new(y, m, d, h, mi, s).unwrap();
        prop_assert_eq!(CivilDateTime::from_local_jd(t.to_local_jd()), t);
    }
}
