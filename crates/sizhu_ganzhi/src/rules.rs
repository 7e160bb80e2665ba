//! Arithmetic pillar rules.
//!
//! These are the table-and-modulus rules that need no astronomy:
//! - year pillar counted from 1984 (甲子)
//! - month branch by civil month (month 1 → 寅) or by solar month index
//! - month stem by the "five tigers" rule (甲己之年丙作首)
//! - day pillar counted from a reference Julian Day Number
//! - hour branch by two-hour bucket, hour stem by the "five rats" rule (甲己还加甲)
//!
//! The calendar providers combine them with either civil or solar month
//! boundaries.

use crate::branch::Branch;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Year whose pillar is 甲子.
pub const JIAZI_REFERENCE_YEAR: i32 = 1984;

/// Reference day: 1900-01-01 (JDN 2415021) is 甲戌, cycle index 10.
pub const DAY_REFERENCE_JDN: i64 = 2_415_021;
pub const DAY_REFERENCE_CYCLE_INDEX: i64 = 10;

/// Month branch for civil months 1..=12 (寅 first).
pub const CIVIL_MONTH_BRANCHES: [Branch; 12] = [
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
    Branch::Zi,
    Branch::Chou,
];

/// Year pillar by sexagenary count from 1984.
pub const fn year_pillar(year: i32) -> Pillar {
    Pillar::from_cycle_index(year as i64 - JIAZI_REFERENCE_YEAR as i64)
}

/// Stem of the 寅 month in a year with the given stem.
///
/// 甲/己 → 丙, 乙/庚 → 戊, 丙/辛 → 庚, 丁/壬 → 壬, 戊/癸 → 甲.
pub const fn first_month_stem(year_stem: Stem) -> Stem {
    Stem::from_index((year_stem.index() % 5) as i64 * 2 + 2)
}

/// Month pillar for the `month_index`-th solar month, 0 = 寅 month.
pub const fn solar_month_pillar(year_stem: Stem, month_index: u8) -> Pillar {
    let i = (month_index % 12) as i64;
    Pillar::from_parts(
        first_month_stem(year_stem).offset(i),
        Branch::Yin.offset(i),
    )
}

/// Month pillar for a civil month (1..=12) using the fixed month table.
///
/// Months outside 1..=12 wrap.
pub const fn civil_month_pillar(year_stem: Stem, month: u32) -> Pillar {
    let i = (month as i64 - 1).rem_euclid(12) as usize;
    Pillar::from_parts(
        first_month_stem(year_stem).offset(i as i64),
        CIVIL_MONTH_BRANCHES[i],
    )
}

/// Day pillar for a Julian Day Number.
pub const fn day_pillar(jdn: i64) -> Pillar {
    Pillar::from_cycle_index(DAY_REFERENCE_CYCLE_INDEX + jdn - DAY_REFERENCE_JDN)
}

/// Hour branch for a clock hour: 23 and 0 → 子, 1–2 → 丑, …, 21–22 → 亥.
pub const fn hour_branch(hour: u32) -> Branch {
    Branch::from_index((((hour % 24) + 1) / 2) as i64)
}

/// Stem of the 子 hour on a day with the given stem.
///
/// 甲/己 → 甲, 乙/庚 → 丙, 丙/辛 → 戊, 丁/壬 → 庚, 戊/癸 → 壬.
pub const fn first_hour_stem(day_stem: Stem) -> Stem {
    Stem::from_index((day_stem.index() % 5) as i64 * 2)
}

/// Hour pillar from the governing day stem and the hour branch.
pub const fn hour_pillar(day_stem: Stem, branch: Branch) -> Pillar {
    Pillar::from_parts(first_hour_stem(day_stem).offset(branch.index() as i64), branch)
}

/// Representative clock hour for an hour branch: 子 → 0, 丑 → 2, …, 亥 → 22.
pub const fn representative_hour(branch: Branch) -> u32 {
    branch.index() as u32 * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_1984_is_jiazi() {
        let p = year_pillar(1984);
        assert_eq!(p.stem().index(), 0);
        assert_eq!(p.branch().index(), 0);
    }

    #[test]
    fn years_around_reference() {
        assert_eq!(year_pillar(2024).to_string(), "甲辰");
        assert_eq!(year_pillar(2000).to_string(), "庚辰");
        assert_eq!(year_pillar(1983).to_string(), "癸亥");
        assert_eq!(year_pillar(1900).to_string(), "庚子");
    }

    #[test]
    fn five_tigers() {
        assert_eq!(first_month_stem(Stem::Jia), Stem::Bing);
        assert_eq!(first_month_stem(Stem::Ji), Stem::Bing);
        assert_eq!(first_month_stem(Stem::Yi), Stem::Wu);
        assert_eq!(first_month_stem(Stem::Geng), Stem::Wu);
        assert_eq!(first_month_stem(Stem::Bing), Stem::Geng);
        assert_eq!(first_month_stem(Stem::Ding), Stem::Ren);
        assert_eq!(first_month_stem(Stem::Gui), Stem::Jia);
    }

    #[test]
    fn civil_months_of_jia_year() {
        let names: Vec<String> = (1..=12)
            .map(|m| civil_month_pillar(Stem::Jia, m).to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "丙寅", "丁卯", "戊辰", "己巳", "庚午", "辛未", "壬申", "癸酉", "甲戌", "乙亥",
                "丙子", "丁丑"
            ]
        );
    }

    #[test]
    fn civil_month_branch_table_matches() {
        for m in 1..=12u32 {
            assert_eq!(
                civil_month_pillar(Stem::Geng, m).branch(),
                CIVIL_MONTH_BRANCHES[(m - 1) as usize]
            );
        }
    }

    #[test]
    fn known_days() {
        assert_eq!(day_pillar(2_415_021).to_string(), "甲戌"); // 1900-01-01
        assert_eq!(day_pillar(2_451_545).to_string(), "戊午"); // 2000-01-01
        assert_eq!(day_pillar(2_460_351).to_string(), "甲辰"); // 2024-02-10
        assert_eq!(day_pillar(2_445_733).to_string(), "丙寅"); // 1984-02-02
    }

    #[test]
    fn hour_branch_boundaries() {
        let expected = [
            (23, '子'),
            (0, '子'),
            (1, '丑'),
            (2, '丑'),
            (3, '寅'),
            (5, '卯'),
            (7, '辰'),
            (9, '巳'),
            (11, '午'),
            (12, '午'),
            (13, '未'),
            (15, '申'),
            (17, '酉'),
            (19, '戌'),
            (21, '亥'),
            (22, '亥'),
        ];
        for (hour, glyph) in expected {
            assert_eq!(hour_branch(hour).glyph(), glyph, "hour {hour}");
        }
    }

    #[test]
    fn five_rats() {
        assert_eq!(hour_pillar(Stem::Jia, Branch::Zi).to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Ji, Branch::Zi).to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Wu, Branch::Wu).to_string(), "戊午");
        assert_eq!(hour_pillar(Stem::Gui, Branch::Hai).to_string(), "癸亥");
    }

    #[test]
    fn representative_hours_map_back() {
        for b in crate::branch::ALL_BRANCHES {
            assert_eq!(hour_branch(representative_hour(b)), b);
        }
    }
}
