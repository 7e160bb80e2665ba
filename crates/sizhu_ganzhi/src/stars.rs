//! Auxiliary stars (神煞): traveling horse, blade, prosperity seat, noble patron.
//!
//! 驿马 is keyed off the year branch's trine; 羊刃, 禄神, and 天乙贵人 are keyed
//! off the day stem. A branch may carry any combination of them.

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::Stem;

/// 驿马: 申子辰 → 寅, 寅午戌 → 申, 亥卯未 → 巳, 巳酉丑 → 亥.
pub const fn yima_branch(year_branch: Branch) -> Branch {
    match year_branch {
        Branch::Shen | Branch::Zi | Branch::Chen => Branch::Yin,
        Branch::Yin | Branch::Wu | Branch::Xu => Branch::Shen,
        Branch::Hai | Branch::Mao | Branch::Wei => Branch::Si,
        Branch::Si | Branch::You | Branch::Chou => Branch::Hai,
    }
}

/// 羊刃 by day stem.
pub const fn yangren_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Jia => Branch::Mao,
        Stem::Yi => Branch::Chen,
        Stem::Bing | Stem::Wu => Branch::Wu,
        Stem::Ding | Stem::Ji => Branch::Wei,
        Stem::Geng => Branch::You,
        Stem::Xin => Branch::Xu,
        Stem::Ren => Branch::Zi,
        Stem::Gui => Branch::Chou,
    }
}

/// 禄神 by day stem.
pub const fn lu_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Jia => Branch::Yin,
        Stem::Yi => Branch::Mao,
        Stem::Bing | Stem::Wu => Branch::Si,
        Stem::Ding | Stem::Ji => Branch::Wu,
        Stem::Geng => Branch::Shen,
        Stem::Xin => Branch::You,
        Stem::Ren => Branch::Hai,
        Stem::Gui => Branch::Zi,
    }
}

/// 天乙贵人 by day stem: 甲戊庚 → 丑未, 乙己 → 子申, 丙丁 → 亥酉, 壬癸 → 卯巳, 辛 → 午寅.
pub const fn tianyi_branches(day_stem: Stem) -> [Branch; 2] {
    match day_stem {
        Stem::Jia | Stem::Wu | Stem::Geng => [Branch::Chou, Branch::Wei],
        Stem::Yi | Stem::Ji => [Branch::Zi, Branch::Shen],
        Stem::Bing | Stem::Ding => [Branch::Hai, Branch::You],
        Stem::Ren | Stem::Gui => [Branch::Mao, Branch::Si],
        Stem::Xin => [Branch::Wu, Branch::Yin],
    }
}

/// Which auxiliary stars fall on one branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AuxiliaryStars {
    /// 天乙贵人
    pub tianyi: bool,
    /// 禄神
    pub lu: bool,
    /// 驿马
    pub yima: bool,
    /// 羊刃
    pub yangren: bool,
}

impl AuxiliaryStars {
    /// Short labels in display order 贵 禄 马 刃.
    pub fn labels(&self) -> Vec<&'static str> {
        [
            (self.tianyi, "贵"),
            (self.lu, "禄"),
            (self.yima, "马"),
            (self.yangren, "刃"),
        ]
        .into_iter()
        .filter_map(|(on, label)| on.then_some(label))
        .collect()
    }

    pub const fn is_empty(&self) -> bool {
        !(self.tianyi || self.lu || self.yima || self.yangren)
    }
}

/// Stars present on `target` for a chart with the given day stem and year branch.
pub const fn auxiliary_stars(day_stem: Stem, year_branch: Branch, target: Branch) -> AuxiliaryStars {
    let [g1, g2] = tianyi_branches(day_stem);
    let t = target.index();
    AuxiliaryStars {
        tianyi: t == g1.index() || t == g2.index(),
        lu: t == lu_branch(day_stem).index(),
        yima: t == yima_branch(year_branch).index(),
        yangren: t == yangren_branch(day_stem).index(),
    }
}
