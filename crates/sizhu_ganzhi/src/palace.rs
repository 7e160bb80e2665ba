//! Auxiliary palaces: 命宫 (life), 身宫 (body), 胎元 (fetal).
//!
//! Branches come from the month, day, and hour branches. The palace stem is
//! taken as `branch index mod 10`, i.e. the stem that accompanies the branch
//! in the first pass of the cycle, not the traditional year-stem rule.

use serde::Serialize;

use crate::branch::Branch;
use crate::pillar::{FourPillarChart, Pillar};
use crate::stem::Stem;

/// Which auxiliary palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PalaceKind {
    Life,
    Body,
    Fetal,
}

impl PalaceKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Body => "身宫",
            Self::Fetal => "胎元",
        }
    }
}

/// The three auxiliary palaces of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Palaces {
    pub life: Pillar,
    pub body: Pillar,
    pub fetal: Pillar,
}

impl Palaces {
    pub const fn get(&self, kind: PalaceKind) -> Pillar {
        match kind {
            PalaceKind::Life => self.life,
            PalaceKind::Body => self.body,
            PalaceKind::Fetal => self.fetal,
        }
    }
}

/// Palace pillar for a branch: stem = branch index mod 10.
pub const fn palace_pillar(branch: Branch) -> Pillar {
    // branch index and branch index mod 10 always share parity
    Pillar::from_parts(Stem::from_index(branch.index() as i64 % 10), branch)
}

/// Life palace branch: (14 − month − hour) mod 12.
pub const fn life_palace_branch(month: Branch, hour: Branch) -> Branch {
    Branch::from_index(14 - month.index() as i64 - hour.index() as i64)
}

/// Body palace branch: (month + hour) mod 12.
pub const fn body_palace_branch(month: Branch, hour: Branch) -> Branch {
    Branch::from_index(month.index() as i64 + hour.index() as i64)
}

/// Fetal palace branch: (day + month + 1) mod 12.
pub const fn fetal_palace_branch(day: Branch, month: Branch) -> Branch {
    Branch::from_index(day.index() as i64 + month.index() as i64 + 1)
}

/// All three palaces from a chart.
pub const fn palaces(chart: &FourPillarChart) -> Palaces {
    let month = chart.month.branch();
    let day = chart.day.branch();
    let hour = chart.hour.branch();
    Palaces {
        life: palace_pillar(life_palace_branch(month, hour)),
        body: palace_pillar(body_palace_branch(month, hour)),
        fetal: palace_pillar(fetal_palace_branch(day, month)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    #[test]
    fn palace_pillars_keep_parity() {
        for b in ALL_BRANCHES {
            let p = palace_pillar(b);
            assert_eq!(p.stem().index() % 2, p.branch().index() % 2);
        }
    }

    #[test]
    fn palace_stems_use_first_pass() {
        assert_eq!(palace_pillar(Branch::Zi).to_string(), "甲子");
        assert_eq!(palace_pillar(Branch::Xu).to_string(), "甲戌");
        assert_eq!(palace_pillar(Branch::Hai).to_string(), "乙亥");
    }

    #[test]
    fn chart_palaces() {
        let chart: FourPillarChart = "己卯 丙子 戊午 戊午".parse().unwrap();
        let p = palaces(&chart);
        assert_eq!(p.life.to_string(), "壬申");
        assert_eq!(p.body.to_string(), "庚午");
        assert_eq!(p.fetal.to_string(), "辛未");
    }

    #[test]
    fn life_palace_wraps_negative() {
        // 14 - 11 - 11 = -8 → 4
        assert_eq!(life_palace_branch(Branch::Hai, Branch::Hai), Branch::Chen);
    }
}
