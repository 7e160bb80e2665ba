//! Golden values for both calendar providers.
//!
//! Solar-term instants are checked against published Beijing-time tables
//! with a 15 minute tolerance; lunar dates against the Hong Kong
//! Observatory conversion tables.

use proptest::prelude::*;
use sizhu_calendar::{
    AstronomicalProvider, LunarCalendarProvider, LunarDate, ReverseSearch, ReverseSearchConfig,
    SearchDirection, TableProvider, jieqi_timeline,
};
use sizhu_ganzhi::SolarTerm;
use sizhu_time::{CivilDateTime, jdn_to_calendar, julian_day_number};

fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> CivilDateTime {
    CivilDateTime::new(y, m, d, h, mi, 0).unwrap()
}

fn minutes_between(a: &CivilDateTime, b: &CivilDateTime) -> f64 {
    a.days_since(b).abs() * 1440.0
}

#[test]
fn lichun_2024_instant() {
    let p = AstronomicalProvider::default();
    let b = p.solar_term_boundary(SolarTerm::LiChun, 2024).unwrap();
    assert!(minutes_between(&b.instant, &at(2024, 2, 4, 16, 27)) < 15.0, "{}", b.instant);
}

#[test]
fn timeline_around_2000_new_year() {
    let p = AstronomicalProvider::default();
    let birth = at(2000, 1, 1, 12, 0);
    let t = jieqi_timeline(&p, &birth).unwrap();

    assert_eq!(t.prev.boundary.term, SolarTerm::DongZhi);
    assert!(minutes_between(&t.prev.boundary.instant, &at(1999, 12, 22, 15, 44)) < 15.0);
    assert_eq!(t.prev.days, 9);

    assert_eq!(t.next.boundary.term, SolarTerm::XiaoHan);
    assert!(minutes_between(&t.next.boundary.instant, &at(2000, 1, 6, 9, 1)) < 15.0);
    assert_eq!(t.next.days, 4);

    assert_eq!(t.prev_prev.boundary.term, SolarTerm::DaXue);
    assert!(t.prev_prev.describe().starts_with("1999年12月7日大雪"));
}

#[test]
fn table_timeline_uses_fixed_dates() {
    let birth = at(2000, 1, 1, 12, 0);
    let t = jieqi_timeline(&TableProvider, &birth).unwrap();
    assert_eq!(t.prev.boundary.instant, at(1999, 12, 22, 0, 0));
    assert_eq!(t.prev.days, 10);
    assert_eq!(t.next.boundary.instant, at(2000, 1, 6, 0, 0));
    assert_eq!(t.next.describe(), "1月6日小寒（前4日）");
}

#[test]
fn nearest_and_step_agree() {
    let p = AstronomicalProvider::default();
    let m = at(2024, 6, 1, 0, 0);
    let before = p.nearest_solar_term(&m, SearchDirection::Before).unwrap();
    let after = p.nearest_solar_term(&m, SearchDirection::After).unwrap();
    assert_eq!(before.term, SolarTerm::XiaoMan);
    assert_eq!(after.term, SolarTerm::MangZhong);
    assert_eq!(p.step_solar_term(&before, SearchDirection::After).unwrap(), after);
    assert!(before.instant <= m && m < after.instant);
}

#[test]
fn providers_agree_on_ordinary_dates() {
    let astro = AstronomicalProvider::default();
    for (y, m, d) in [(1950, 3, 1), (1985, 7, 15), (2000, 1, 1), (2024, 2, 10), (2040, 10, 10)] {
        let jdn = julian_day_number(y, m, d);
        assert_eq!(
            astro.lunar_date_of(jdn).unwrap(),
            TableProvider.lunar_date_of(jdn).unwrap(),
            "{y}-{m}-{d}"
        );
    }
}

#[test]
fn reverse_search_finds_source_moment() {
    let p = AstronomicalProvider::default();
    let source = at(2000, 1, 1, 12, 0);
    let target = p.four_pillars(&source).unwrap();
    let config = ReverseSearchConfig {
        start_year: 1999,
        end_year: 2001,
        ..ReverseSearchConfig::default()
    };
    let hits = ReverseSearch::new(&p, target, &config).unwrap().run().unwrap();
    assert!(hits.iter().any(|h| h.moment == source));
    assert!(hits.windows(2).all(|w| w[0].moment < w[1].moment));
}

#[test]
fn leap_month_dates() {
    let p = AstronomicalProvider::default();
    let leap = LunarDate::new(2023, 2, true, 1).unwrap();
    assert_eq!(p.lunar_to_civil(&leap).unwrap(), at(2023, 3, 22, 0, 0));
    assert_eq!(TableProvider.lunar_to_civil(&leap).unwrap(), at(2023, 3, 22, 0, 0));
    let too_long = LunarDate::new(2023, 1, false, 30).unwrap();
    assert_eq!(p.days_in_lunar_month(2023, 1, false).unwrap(), 29);
    assert!(p.lunar_to_civil(&too_long).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn astronomical_lunar_roundtrip(jdn in 2_378_862i64..2_506_331i64) {
        let p = AstronomicalProvider::default();
        let lunar = p.lunar_date_of(jdn).unwrap();
        prop_assert_eq!(p.jdn_of(&lunar).unwrap(), jdn);
    }

    #[test]
    fn table_lunar_roundtrip(jdn in 2_415_051i64..2_488_434i64) {
        let lunar = TableProvider.lunar_date_of(jdn).unwrap();
        prop_assert_eq!(TableProvider.jdn_of(&lunar).unwrap(), jdn);
    }

    #[test]
    fn astronomical_pillars_keep_parity(jdn in 2_378_862i64..2_506_331i64, h in 0u32..24) {
        let (y, m, d) = jdn_to_calendar(jdn);
        let chart = AstronomicalProvider::default().four_pillars(&at(y, m, d, h, 0)).unwrap();
        for p in chart.pillars() {
            prop_assert_eq!(p.stem().index() % 2, p.branch().index() % 2);
        }
    }
}
