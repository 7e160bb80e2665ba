//! The twelve earthly branches (dizhi).

use serde::Serialize;

use crate::element::Element;
use crate::error::GanzhiError;

/// Earthly branch, 子 (index 0) through 亥 (index 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
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
];

const BRANCH_GLYPHS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const ZODIAC_GLYPHS: [char; 12] = [
    '鼠', '牛', '虎', '兔', '龙', '蛇', '马', '羊', '猴', '鸡', '狗', '猪',
];

impl Branch {
    /// 0-based cycle index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at `index mod 12` (negative indices wrap).
    pub const fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> char {
        BRANCH_GLYPHS[self.index() as usize]
    }

    /// Zodiac animal glyph (生肖).
    pub const fn zodiac(self) -> char {
        ZODIAC_GLYPHS[self.index() as usize]
    }

    /// Parse a single glyph.
    pub fn from_char(c: char) -> Result<Self, GanzhiError> {
        BRANCH_GLYPHS
            .iter()
            .position(|&g| g == c)
            .map(|i| ALL_BRANCHES[i])
            .ok_or(GanzhiError::UnknownBranch(c))
    }

    /// Yang branches have even index.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Primary five-element affiliation.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
        }
    }

    /// Step forward (or backward, for negative `steps`) through the 12-cycle.
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_index(self.index() as i64 + steps)
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn glyph_roundtrip() {
        for b in ALL_BRANCHES {
            assert_eq!(Branch::from_char(b.glyph()), Ok(b));
        }
    }

    #[test]
    fn unknown_glyph() {
        assert_eq!(Branch::from_char('甲'), Err(GanzhiError::UnknownBranch('甲')));
    }

    #[test]
    fn wraps() {
        assert_eq!(Branch::from_index(-1), Branch::Hai);
        assert_eq!(Branch::Zi.offset(25), Branch::Chou);
    }

    #[test]
    fn zodiac_of_chen() {
        assert_eq!(Branch::Chen.zodiac(), '龙');
    }
}
