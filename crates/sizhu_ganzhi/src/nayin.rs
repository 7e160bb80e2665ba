//! Nayin (纳音): the elemental "sound" of each pillar.
//!
//! The 60 pillars are grouped into 30 consecutive pairs; each pair shares
//! one name (甲子/乙丑 = 海中金, 丙寅/丁卯 = 炉中火, ...). The element is read
//! from the name itself by looking for one of the five element glyphs.
//!
//! The pair is looked up by the pillar's sexagenary ordinal halved. Keying
//! on `stem * 6 + branch` instead would split 甲子/乙丑 across two names.

use serde::Serialize;

use crate::element::{Element, element_in_name};
use crate::pillar::Pillar;

/// The 30 nayin names in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Nayin {
    HaiZhongJin,
    LuZhongHuo,
    DaLinMu,
    LuPangTu,
    JianFengJin,
    ShanTouHuo,
    JianXiaShui,
    ChengTouTu,
    BaiLaJin,
    YangLiuMu,
    QuanZhongShui,
    WuShangTu,
    PiLiHuo,
    SongBaiMu,
    ChangLiuShui,
    ShaZhongJin,
    ShanXiaHuo,
    PingDiMu,
    BiShangTu,
    JinBoJin,
    FuDengHuo,
    TianHeShui,
    DaYiTu,
    ChaiChuanJin,
    SangZheMu,
    DaXiShui,
    ShaZhongTu,
    TianShangHuo,
    ShiLiuMu,
    DaHaiShui,
}

/// All 30 nayin in cycle order (index 0 = 海中金).
pub const ALL_NAYIN: [Nayin; 30] = [
    Nayin::HaiZhongJin,
    Nayin::LuZhongHuo,
    Nayin::DaLinMu,
    Nayin::LuPangTu,
    Nayin::JianFengJin,
    Nayin::ShanTouHuo,
    Nayin::JianXiaShui,
    Nayin::ChengTouTu,
    Nayin::BaiLaJin,
    Nayin::YangLiuMu,
    Nayin::QuanZhongShui,
    Nayin::WuShangTu,
    Nayin::PiLiHuo,
    Nayin::SongBaiMu,
    Nayin::ChangLiuShui,
    Nayin::ShaZhongJin,
    Nayin::ShanXiaHuo,
    Nayin::PingDiMu,
    Nayin::BiShangTu,
    Nayin::JinBoJin,
    Nayin::FuDengHuo,
    Nayin::TianHeShui,
    Nayin::DaYiTu,
    Nayin::ChaiChuanJin,
    Nayin::SangZheMu,
    Nayin::DaXiShui,
    Nayin::ShaZhongTu,
    Nayin::TianShangHuo,
    Nayin::ShiLiuMu,
    Nayin::DaHaiShui,
];

const NAYIN_NAMES: [&str; 30] = [
    "海中金",
    "炉中火",
    "大林木",
    "路旁土",
    "剑锋金",
    "山头火",
    "涧下水",
    "城头土",
    "白蜡金",
    "杨柳木",
    "泉中水",
    "屋上土",
    "霹雳火",
    "松柏木",
    "长流水",
    "沙中金",
    "山下火",
    "平地木",
    "壁上土",
    "金箔金",
    "覆灯火",
    "天河水",
    "大驿土",
    "钗钏金",
    "桑柘木",
    "大溪水",
    "沙中土",
    "天上火",
    "石榴木",
    "大海水",
];

impl Nayin {
    /// 0-based index (海中金=0 .. 大海水=29).
    pub const fn index(self) -> u8 {
        match self {
            Self::HaiZhongJin => 0,
            Self::LuZhongHuo => 1,
            Self::DaLinMu => 2,
            Self::LuPangTu => 3,
            Self::JianFengJin => 4,
            Self::ShanTouHuo => 5,
            Self::JianXiaShui => 6,
            Self::ChengTouTu => 7,
            Self::BaiLaJin => 8,
            Self::YangLiuMu => 9,
            Self::QuanZhongShui => 10,
            Self::WuShangTu => 11,
            Self::PiLiHuo => 12,
            Self::SongBaiMu => 13,
            Self::ChangLiuShui => 14,
            Self::ShaZhongJin => 15,
            Self::ShanXiaHuo => 16,
            Self::PingDiMu => 17,
            Self::BiShangTu => 18,
            Self::JinBoJin => 19,
            Self::FuDengHuo => 20,
            Self::TianHeShui => 21,
            Self::DaYiTu => 22,
            Self::ChaiChuanJin => 23,
            Self::SangZheMu => 24,
            Self::DaXiShui => 25,
            Self::ShaZhongTu => 26,
            Self::TianShangHuo => 27,
            Self::ShiLiuMu => 28,
            Self::DaHaiShui => 29,
        }
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        NAYIN_NAMES[self.index() as usize]
    }

    /// Element glyph found in the name.
    pub fn element(self) -> Option<Element> {
        element_in_name(self.name())
    }
}

impl std::fmt::Display for Nayin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Nayin for the pillar at a 0..60 cycle position; each name spans two positions.
pub const fn nayin_at_cycle_index(index: u8) -> Nayin {
    ALL_NAYIN[((index % 60) / 2) as usize]
}

/// Nayin of a pillar.
pub const fn nayin(pillar: Pillar) -> Nayin {
    nayin_at_cycle_index(pillar.cycle_index())
}

/// Nayin with its element, as attached to chart pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NayinInfo {
    pub nayin: Nayin,
    /// `None` only if the name carried no element glyph.
    pub element: Option<Element>,
}

/// Nayin and element for a pillar.
pub fn nayin_info(pillar: Pillar) -> NayinInfo {
    let n = nayin(pillar);
    NayinInfo {
        nayin: n,
        element: n.element(),
    }
}
