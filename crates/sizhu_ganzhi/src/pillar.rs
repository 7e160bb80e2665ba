//! Sexagenary pillars and the four-pillar chart.
//!
//! A pillar pairs a stem and a branch of equal parity. Only 60 of the 120
//! combinations exist, and the constructors here refuse the rest, so every
//! `Pillar` value in the program is a member of the sexagenary cycle.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::branch::Branch;
use crate::error::GanzhiError;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LENGTH: u8 = 60;

/// One parity-valid (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pair a stem and branch, rejecting mismatched parity.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, GanzhiError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(GanzhiError::ParityMismatch {
                stem: stem.glyph(),
                branch: branch.glyph(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// Pair a stem and branch already known to share parity.
    pub(crate) const fn from_parts(stem: Stem, branch: Branch) -> Self {
        debug_assert!(stem.index() % 2 == branch.index() % 2);
        Self { stem, branch }
    }

    /// Pillar at position `index mod 60` of the cycle (0 = 甲子).
    pub const fn from_cycle_index(index: i64) -> Self {
        let n = index.rem_euclid(CYCLE_LENGTH as i64);
        Self {
            stem: Stem::from_index(n),
            branch: Branch::from_index(n),
        }
    }

    /// Position in the cycle, 0 (甲子) ..= 59 (癸亥).
    ///
    /// Solves n ≡ s (mod 10), n ≡ b (mod 12): n = (6s − 5b) mod 60.
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        (6 * s - 5 * b).rem_euclid(CYCLE_LENGTH as i64) as u8
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Advance `steps` positions (negative walks backward).
    ///
    /// Stem and branch move by the same step, so parity is preserved.
    pub const fn advance(self, steps: i64) -> Self {
        Self {
            stem: self.stem.offset(steps),
            branch: self.branch.offset(steps),
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

impl FromStr for Pillar {
    type Err = GanzhiError;

    /// Parse two glyphs such as `"甲子"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GanzhiError::InvalidPillarText(s.to_string()));
        };
        Self::new(Stem::from_char(sc)?, Branch::from_char(bc)?)
    }
}

/// All 60 pillars in cycle order.
pub fn sexagenary_cycle() -> impl Iterator<Item = Pillar> {
    (0..CYCLE_LENGTH as i64).map(Pillar::from_cycle_index)
}

/// Which of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All four positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// Chinese label (年柱, 月柱, ...).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }
}

/// Year, month, day, and hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillarChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillarChart {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Parse four pillar strings, e.g. `["己卯", "丙子", "戊午", "戊午"]`.
    ///
    /// Any unknown glyph or parity mismatch is reported; nothing is coerced.
    pub fn parse(year: &str, month: &str, day: &str, hour: &str) -> Result<Self, GanzhiError> {
        Ok(Self {
            year: year.parse()?,
            month: month.parse()?,
            day: day.parse()?,
            hour: hour.parse()?,
        })
    }

    /// Pillar at a position.
    pub const fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// The pillars in chart order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl fmt::Display for FourPillarChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

impl FromStr for FourPillarChart {
    type Err = GanzhiError;

    /// Four whitespace-separated pillars.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [y, m, d, h] => Self::parse(y, m, d, h),
            _ => Err(GanzhiError::InvalidPillarText(s.to_string())),
        }
    }
}
