//! Twelve life stages (十二长生 / shengwang).
//!
//! Each stem is "born" (长生) at a fixed branch and walks the twelve stages
//! forward through the branches if yang, backward if yin. The permutation
//! table below is that walk written out per stem.

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::Stem;

/// Life stage of a stem at a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LifeStage {
    /// 长生
    ChangSheng,
    /// 沐浴
    MuYu,
    /// 冠带
    GuanDai,
    /// 临官
    LinGuan,
    /// 帝旺
    DiWang,
    /// 衰
    Shuai,
    /// 病
    Bing,
    /// 死
    Si,
    /// 墓
    Mu,
    /// 绝
    Jue,
    /// 胎
    Tai,
    /// 养
    Yang,
}

/// All 12 stages in order (index 0 = 长生).
pub const ALL_LIFE_STAGES: [LifeStage; 12] = [
    LifeStage::ChangSheng,
    LifeStage::MuYu,
    LifeStage::GuanDai,
    LifeStage::LinGuan,
    LifeStage::DiWang,
    LifeStage::Shuai,
    LifeStage::Bing,
    LifeStage::Si,
    LifeStage::Mu,
    LifeStage::Jue,
    LifeStage::Tai,
    LifeStage::Yang,
];

const STAGE_NAMES: [&str; 12] = [
    "长生", "沐浴", "冠带", "临官", "帝旺", "衰", "病", "死", "墓", "绝", "胎", "养",
];

const STAGE_DESCRIPTIONS: [&str; 12] = [
    "如人初生，充满生机",
    "如人沐浴，易受外界影响",
    "如人成年，开始担当",
    "如人壮年，能力强盛",
    "如人鼎盛，达到巅峰",
    "如人衰老，力量减弱",
    "如人患病，虚弱无力",
    "如人死亡，毫无生机",
    "如人入墓，潜藏不显",
    "如人断绝，生机全无",
    "如人受胎，孕育新生",
    "如人养育，逐渐成长",
];

/// Strength score 1..=10 per stage.
const STAGE_STRENGTH: [u8; 12] = [8, 3, 6, 9, 10, 4, 2, 1, 3, 1, 5, 7];

/// Stage index for `[stem][branch]`.
///
/// 甲 is born at 亥, 丙/戊 at 寅, 庚 at 巳, 壬 at 申 (forward);
/// 乙 at 午, 丁/己 at 酉, 辛 at 子, 癸 at 卯 (backward).
pub const LIFE_STAGE_TABLE: [[u8; 12]; 10] = [
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0],
    [6, 5, 4, 3, 2, 1, 0, 11, 10, 9, 8, 7],
    [10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 11, 10],
    [10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 11, 10],
    [7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5, 6],
    [0, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1],
    [4, 5, 6, 7, 8, 9, 10, 11, 0, 1, 2, 3],
    [3, 2, 1, 0, 11, 10, 9, 8, 7, 6, 5, 4],
];

/// Coarse strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrengthLevel {
    Strong,
    Medium,
    Weak,
}

impl StrengthLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Medium => "medium",
            Self::Weak => "weak",
        }
    }

    /// Chinese label (旺 / 平 / 弱).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "旺",
            Self::Medium => "平",
            Self::Weak => "弱",
        }
    }
}

impl LifeStage {
    pub const fn index(self) -> u8 {
        match self {
            Self::ChangSheng => 0,
            Self::MuYu => 1,
            Self::GuanDai => 2,
            Self::LinGuan => 3,
            Self::DiWang => 4,
            Self::Shuai => 5,
            Self::Bing => 6,
            Self::Si => 7,
            Self::Mu => 8,
            Self::Jue => 9,
            Self::Tai => 10,
            Self::Yang => 11,
        }
    }

    pub const fn name(self) -> &'static str {
        STAGE_NAMES[self.index() as usize]
    }

    pub const fn description(self) -> &'static str {
        STAGE_DESCRIPTIONS[self.index() as usize]
    }

    /// Strength score from 1 (死, 绝) to 10 (帝旺).
    pub const fn strength(self) -> u8 {
        STAGE_STRENGTH[self.index() as usize]
    }

    /// Strong: 长生 临官 帝旺 养. Medium: 冠带 胎 衰. Weak: the rest.
    pub const fn level(self) -> StrengthLevel {
        match self {
            Self::ChangSheng | Self::LinGuan | Self::DiWang | Self::Yang => StrengthLevel::Strong,
            Self::GuanDai | Self::Tai | Self::Shuai => StrengthLevel::Medium,
            Self::MuYu | Self::Bing | Self::Si | Self::Mu | Self::Jue => StrengthLevel::Weak,
        }
    }
}

impl std::fmt::Display for LifeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Life stage of `stem` at `branch`.
pub const fn life_stage(stem: Stem, branch: Branch) -> LifeStage {
    ALL_LIFE_STAGES[LIFE_STAGE_TABLE[stem.index() as usize][branch.index() as usize] as usize]
}

/// Life stage with its bucket, score, and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeStageInfo {
    pub stage: LifeStage,
    pub level: StrengthLevel,
    pub strength: u8,
    pub description: &'static str,
}

pub fn life_stage_info(stem: Stem, branch: Branch) -> LifeStageInfo {
    let stage = life_stage(stem, branch);
    LifeStageInfo {
        stage,
        level: stage.level(),
        strength: stage.strength(),
        description: stage.description(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn jia_born_at_hai() {
        assert_eq!(life_stage(Stem::Jia, Branch::Hai).name(), "长生");
        assert_eq!(life_stage(Stem::Jia, Branch::Mao), LifeStage::DiWang);
    }

    #[test]
    fn yin_stems_walk_backward() {
        assert_eq!(life_stage(Stem::Yi, Branch::Wu), LifeStage::ChangSheng);
        assert_eq!(life_stage(Stem::Yi, Branch::Si), LifeStage::MuYu);
        assert_eq!(life_stage(Stem::Gui, Branch::Mao), LifeStage::ChangSheng);
        assert_eq!(life_stage(Stem::Gui, Branch::Yin), LifeStage::MuYu);
    }

    #[test]
    fn rows_are_permutations() {
        for row in LIFE_STAGE_TABLE {
            let mut seen = [false; 12];
            for v in row {
                seen[v as usize] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn table_matches_birth_branch_and_direction() {
        let births = [11, 6, 2, 9, 2, 9, 5, 0, 8, 3];
        for s in ALL_STEMS {
            let birth = births[s.index() as usize] as i64;
            let dir = if s.is_yang() { 1 } else { -1 };
            for b in ALL_BRANCHES {
                let expected = (dir * (b.index() as i64 - birth)).rem_euclid(12);
                assert_eq!(life_stage(s, b).index() as i64, expected, "{s}{b}");
            }
        }
    }

    #[test]
    fn level_buckets() {
        let strong: Vec<&str> = ALL_LIFE_STAGES
            .iter()
            .filter(|s| s.level() == StrengthLevel::Strong)
            .map(|s| s.name())
            .collect();
        assert_eq!(strong, vec!["长生", "临官", "帝旺", "养"]);
        assert_eq!(LifeStage::Tai.level(), StrengthLevel::Medium);
        assert_eq!(LifeStage::MuYu.level(), StrengthLevel::Weak);
    }

    #[test]
    fn info_carries_score() {
        let info = life_stage_info(Stem::Jia, Branch::Mao);
        assert_eq!(info.strength, 10);
        assert_eq!(info.level, StrengthLevel::Strong);
    }
}
