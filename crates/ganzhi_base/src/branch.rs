//! Earthly branches (地支).
//!
//! Twelve branches cycle with period 12, starting from 子. Branch index also
//! numbers the two-hour periods of the day (子 = 23:00–01:00) and the ke
//! intervals inside one such period.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::element::{Element, Polarity};
use crate::error::GanzhiError;

/// The 12 earthly branches, starting from 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

/// All 12 branches in order (0 = 子, 11 = 亥).
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

const BRANCH_CHARS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

impl Branch {
    /// Chinese name (single character).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// 0-based index (子=0 .. 亥=11).
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

    /// Branch at a 0-based index. Returns None if index >= 12.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Branch at any integer position, reduced with floored modulo.
    pub const fn wrapping(n: i64) -> Self {
        ALL_BRANCHES[n.rem_euclid(12) as usize]
    }

    /// Move `n` steps along the branch cycle; `n` may be negative.
    pub const fn offset(self, n: i64) -> Self {
        Self::wrapping(self.index() as i64 + n.rem_euclid(12))
    }

    /// Five-element of the branch. 辰戌丑未 are Earth.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
        }
    }

    /// Yang for even indices, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// The opposing branch (六冲), six steps away.
    pub const fn clash(self) -> Self {
        self.offset(6)
    }

    /// Parse a single branch character.
    pub fn from_char(c: char) -> Option<Self> {
        BRANCH_CHARS
            .iter()
            .position(|&b| b == c)
            .map(|i| ALL_BRANCHES[i])
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Branch {
    type Err = GanzhiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| GanzhiError::UnknownSymbol(s.into()))
            }
            _ => Err(GanzhiError::UnknownSymbol(s.into())),
        }
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_branches_count() {
        assert_eq!(ALL_BRANCHES.len(), 12);
    }

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as u8), Some(*b));
            assert_eq!(b.name().chars().next(), Some(BRANCH_CHARS[i]));
        }
        assert_eq!(Branch::from_index(12), None);
    }

    #[test]
    fn elements() {
        assert_eq!(Branch::Zi.element(), Element::Water);
        assert_eq!(Branch::Chou.element(), Element::Earth);
        assert_eq!(Branch::Yin.element(), Element::Wood);
        assert_eq!(Branch::Wu.element(), Element::Fire);
        assert_eq!(Branch::You.element(), Element::Metal);
        assert_eq!(Branch::Hai.element(), Element::Water);
    }

    #[test]
    fn offset_wraps_both_ways() {
        assert_eq!(Branch::Hai.offset(1), Branch::Zi);
        assert_eq!(Branch::Zi.offset(-1), Branch::Hai);
        assert_eq!(Branch::Mao.offset(-15), Branch::Zi);
        assert_eq!(Branch::Mao.offset(7), Branch::Xu);
        assert_eq!(Branch::Zi.offset(i64::MIN), Branch::Chen);
    }

    #[test]
    fn clash_is_six_apart() {
        assert_eq!(Branch::Zi.clash(), Branch::Wu);
        assert_eq!(Branch::Yin.clash(), Branch::Shen);
        for b in ALL_BRANCHES {
            assert_eq!(b.clash().clash(), b);
        }
    }

    #[test]
    fn parse_single_char() {
        assert_eq!("卯".parse::<Branch>(), Ok(Branch::Mao));
        assert!("甲".parse::<Branch>().is_err());
    }
}
