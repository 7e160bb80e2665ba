//! The 24 solar terms (二十四节气).
//!
//! Terms are indexed from 立春 (apparent solar longitude 315°) in steps of
//! 15°. Even indices are the 12 节 that open the solar months; odd indices
//! are the 12 中气. A "term year" runs 立春 .. 大寒, so 小寒 and 大寒 fall in
//! the following civil January.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[allow(missing_docs)]
pub enum SolarTerm {
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
    XiaoHan,
    DaHan,
}

/// All 24 terms in order (index 0 = 立春).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
];

const TERM_NAMES: [&str; 24] = [
    "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑",
    "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

/// Conventional civil (month, day) of each term, used by the table calendar.
#[rustfmt::skip]
const APPROX_DATES: [(u32, u32); 24] = [
    (2, 4), (2, 19), (3, 6), (3, 21), (4, 5), (4, 20),
    (5, 6), (5, 21), (6, 6), (6, 22), (7, 7), (7, 23),
    (8, 8), (8, 23), (9, 8), (9, 23), (10, 8), (10, 24),
    (11, 8), (11, 22), (12, 7), (12, 22), (1, 6), (1, 20),
];

impl SolarTerm {
    pub const fn index(self) -> u8 {
        match self {
            Self::LiChun => 0,
            Self::YuShui => 1,
            Self::JingZhe => 2,
            Self::ChunFen => 3,
            Self::QingMing => 4,
            Self::GuYu => 5,
            Self::LiXia => 6,
            Self::XiaoMan => 7,
            Self::MangZhong => 8,
            Self::XiaZhi => 9,
            Self::XiaoShu => 10,
            Self::DaShu => 11,
            Self::LiQiu => 12,
            Self::ChuShu => 13,
            Self::BaiLu => 14,
            Self::QiuFen => 15,
            Self::HanLu => 16,
            Self::ShuangJiang => 17,
            Self::LiDong => 18,
            Self::XiaoXue => 19,
            Self::DaXue => 20,
            Self::DongZhi => 21,
            Self::XiaoHan => 22,
            Self::DaHan => 23,
        }
    }

    /// Term at `index mod 24`.
    pub const fn from_index(index: i64) -> Self {
        ALL_SOLAR_TERMS[index.rem_euclid(24) as usize]
    }

    pub const fn name(self) -> &'static str {
        TERM_NAMES[self.index() as usize]
    }

    /// Apparent solar longitude at which the term begins, degrees [0, 360).
    pub fn longitude_deg(self) -> f64 {
        ((315 + 15 * self.index() as u32) % 360) as f64
    }

    /// True for the 12 节 (立春, 惊蛰, ...) that open solar months.
    pub const fn is_major(self) -> bool {
        self.index() % 2 == 0
    }

    /// Solar month opened or contained by this term, 0 = 寅 month.
    pub const fn solar_month_index(self) -> u8 {
        self.index() / 2
    }

    /// Conventional (month, day) for the table calendar.
    pub const fn approx_month_day(self) -> (u32, u32) {
        APPROX_DATES[self.index() as usize]
    }

    /// Civil year in which the term falls for a given term year.
    pub const fn civil_year(self, term_year: i32) -> i32 {
        if self.index() >= 22 {
            term_year + 1
        } else {
            term_year
        }
    }

    /// Next term in sequence.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() as i64 + 1)
    }

    /// Previous term in sequence.
    pub const fn prev(self) -> Self {
        Self::from_index(self.index() as i64 - 1)
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Term in effect at an apparent solar longitude.
pub fn solar_term_at_longitude(lon_deg: f64) -> SolarTerm {
    let offset = (lon_deg - 315.0).rem_euclid(360.0);
    SolarTerm::from_index((offset / 15.0).floor() as i64)
}

/// Solar month index (0 = 寅 month) at an apparent solar longitude.
pub fn solar_month_at_longitude(lon_deg: f64) -> u8 {
    solar_term_at_longitude(lon_deg).solar_month_index()
}
