//! Taisui twelve spirits (太岁十二神).
//!
//! Counted from the reference (year) branch: the year branch itself is 太岁,
//! the next is 太阳, and so on; the branch opposite the year is 岁破.

use serde::Serialize;

use crate::branch::Branch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TaisuiSpirit {
    /// 太岁
    Taisui,
    /// 太阳
    Taiyang,
    /// 丧门
    Sangmen,
    /// 太阴
    Taiyin,
    /// 官符
    Guanfu,
    /// 死符
    Sifu,
    /// 岁破
    Suipo,
    /// 龙德
    Longde,
    /// 白虎
    Baihu,
    /// 福德
    Fude,
    /// 吊客
    Diaoke,
    /// 病符
    Bingfu,
}

/// All 12 spirits in order (index 0 = 太岁).
pub const ALL_TAISUI_SPIRITS: [TaisuiSpirit; 12] = [
    TaisuiSpirit::Taisui,
    TaisuiSpirit::Taiyang,
    TaisuiSpirit::Sangmen,
    TaisuiSpirit::Taiyin,
    TaisuiSpirit::Guanfu,
    TaisuiSpirit::Sifu,
    TaisuiSpirit::Suipo,
    TaisuiSpirit::Longde,
    TaisuiSpirit::Baihu,
    TaisuiSpirit::Fude,
    TaisuiSpirit::Diaoke,
    TaisuiSpirit::Bingfu,
];

const SPIRIT_NAMES: [&str; 12] = [
    "太岁", "太阳", "丧门", "太阴", "官符", "死符", "岁破", "龙德", "白虎", "福德", "吊客", "病符",
];

const SPIRIT_DESCRIPTIONS: [&str; 12] = [
    "犯太岁，诸事小心",
    "贵人星，光明显达",
    "主丧事孝服",
    "女贵人暗助",
    "主官非口舌",
    "主病灾小耗",
    "主破财大耗",
    "逢凶化吉",
    "主血光意外",
    "福气临门",
    "主吊丧悲伤",
    "主疾病健康",
];

impl TaisuiSpirit {
    pub const fn index(self) -> u8 {
        match self {
            Self::Taisui => 0,
            Self::Taiyang => 1,
            Self::Sangmen => 2,
            Self::Taiyin => 3,
            Self::Guanfu => 4,
            Self::Sifu => 5,
            Self::Suipo => 6,
            Self::Longde => 7,
            Self::Baihu => 8,
            Self::Fude => 9,
            Self::Diaoke => 10,
            Self::Bingfu => 11,
        }
    }

    pub const fn name(self) -> &'static str {
        SPIRIT_NAMES[self.index() as usize]
    }

    pub const fn description(self) -> &'static str {
        SPIRIT_DESCRIPTIONS[self.index() as usize]
    }

    /// Only 太阳, 太阴, 龙德, and 福德 are auspicious.
    pub const fn is_auspicious(self) -> bool {
        matches!(self, Self::Taiyang | Self::Taiyin | Self::Longde | Self::Fude)
    }
}

impl std::fmt::Display for TaisuiSpirit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Spirit governing `target` in a year whose branch is `reference`.
pub const fn taisui_spirit(reference: Branch, target: Branch) -> TaisuiSpirit {
    let i = (target.index() as i64 - reference.index() as i64).rem_euclid(12);
    ALL_TAISUI_SPIRITS[i as usize]
}
