//! Golden values and cycle properties for the sexagenary rules.
//!
//! Reference charts are cross-checked against published 万年历 tables.

use proptest::prelude::*;
use sizhu_ganzhi::{
    ALL_BRANCHES, ALL_STEMS, Branch, FortuneDirection, FourPillarChart, Gender, Pillar,
    QiyunOffset, Stem, day_pillar, dayun_sequence, fortune_direction, hour_branch, hour_pillar,
    life_stage, liunian_sequence, nayin, palaces, solar_month_pillar, taisui_spirit, year_pillar,
};

#[test]
fn year_pillars() {
    assert_eq!(year_pillar(1984).to_string(), "甲子");
    assert_eq!(year_pillar(1900).to_string(), "庚子");
    assert_eq!(year_pillar(2000).to_string(), "庚辰");
    assert_eq!(year_pillar(2024).to_string(), "甲辰");
    assert_eq!(year_pillar(1983).to_string(), "癸亥");
}

#[test]
fn day_pillars() {
    // 1900-01-01
    assert_eq!(day_pillar(2_415_021).to_string(), "甲戌");
    // 2000-01-01
    assert_eq!(day_pillar(2_451_545).to_string(), "戊午");
    // 2024-02-10
    assert_eq!(day_pillar(2_460_351).to_string(), "甲辰");
}

#[test]
fn chart_2000_01_01_noon() {
    let year = year_pillar(1999);
    let month = solar_month_pillar(year.stem(), 10);
    let day = day_pillar(2_451_545);
    let hour = hour_pillar(day.stem(), hour_branch(12));
    let chart = FourPillarChart::new(year, month, day, hour);
    assert_eq!(chart.to_string(), "己卯 丙子 戊午 戊午");

    let p = palaces(&chart);
    assert_eq!(p.life.to_string(), "壬申");
    assert_eq!(p.body.to_string(), "庚午");
    assert_eq!(p.fetal.to_string(), "辛未");
}

#[test]
fn anchor_lookups() {
    assert_eq!(nayin("甲子".parse().unwrap()).name(), "海中金");
    assert_eq!(nayin("癸亥".parse().unwrap()).name(), "大海水");
    assert_eq!(life_stage(Stem::Jia, Branch::Hai).name(), "长生");
    assert_eq!(taisui_spirit(Branch::Zi, Branch::Wu).name(), "岁破");
}

#[test]
fn backward_fortune_for_yin_year_male() {
    let chart: FourPillarChart = "己卯 丙子 戊午 戊午".parse().unwrap();
    let dir = fortune_direction(chart.year.stem(), Gender::Male);
    assert_eq!(dir, FortuneDirection::Backward);

    let onset = QiyunOffset::from_day_distance(10.5, dir);
    assert_eq!((onset.years, onset.months, onset.days), (3, 6, 0));

    let steps = dayun_sequence(chart.month, dir, onset.years, 2000, 3);
    let names: Vec<String> = steps.iter().map(|s| s.pillar.to_string()).collect();
    assert_eq!(names, ["乙亥", "甲戌", "癸酉"]);
    assert_eq!((steps[0].start_age, steps[0].end_age), (3, 12));
    assert_eq!(steps[2].start_year, 2023);
}

#[test]
fn liunian_ages_are_nominal() {
    let years = liunian_sequence(2000, 3, 2000);
    assert_eq!(years[0].age, 1);
    assert_eq!(years[2].pillar.to_string(), "壬午");
}

proptest! {
    #[test]
    fn every_pillar_is_parity_valid(n in -1000i64..1000) {
        let p = Pillar::from_cycle_index(n);
        prop_assert_eq!(p.stem().index() % 2, p.branch().index() % 2);
    }

    #[test]
    fn sixty_steps_is_identity(n in 0i64..60, k in -5i64..5) {
        let p = Pillar::from_cycle_index(n);
        prop_assert_eq!(p.advance(60 * k), p);
    }

    #[test]
    fn stem_branch_pairs_respect_parity(s in 0usize..10, b in 0usize..12) {
        let r = Pillar::new(ALL_STEMS[s], ALL_BRANCHES[b]);
        prop_assert_eq!(r.is_ok(), s % 2 == b % 2);
    }

    #[test]
    fn year_pillar_repeats_every_sixty(y in 1800i32..2200) {
        prop_assert_eq!(year_pillar(y), year_pillar(y + 60));
    }

    #[test]
    fn consecutive_days_advance_one_step(jdn in 2_378_497i64..2_506_697i64) {
        prop_assert_eq!(day_pillar(jdn + 1), day_pillar(jdn).advance(1));
    }

    #[test]
    fn onset_grows_with_distance(a in 0.0f64..40.0, b in 0.0f64..40.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let months = |q: QiyunOffset| q.years * 12 + q.months;
        let ql = QiyunOffset::from_day_distance(lo, FortuneDirection::Forward);
        let qh = QiyunOffset::from_day_distance(hi, FortuneDirection::Forward);
        prop_assert!(months(ql) <= months(qh));
    }

    #[test]
    fn dayun_steps_are_contiguous(n in 0i64..60, onset in 0u32..12, forward in any::<bool>()) {
        let dir = if forward { FortuneDirection::Forward } else { FortuneDirection::Backward };
        let steps = dayun_sequence(Pillar::from_cycle_index(n), dir, onset, 1990, 8);
        for w in steps.windows(2) {
            prop_assert_eq!(w[1].start_age, w[0].end_age + 1);
            prop_assert_eq!(w[1].pillar, w[0].pillar.advance(dir.sign()));
        }
    }
}
