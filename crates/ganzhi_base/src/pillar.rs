//! Pillars (柱): validated stem-branch pairs.
//!
//! Only 60 of the 120 stem-branch pairs are valid, those whose stem and
//! branch share polarity (`stem.index % 2 == branch.index % 2`). A [`Pillar`]
//! can only be built through a checked constructor, so every value in
//! circulation is one of the 60.
//!
//! Each valid pillar has a sexagenary ordinal `n` in `0..60` (甲子 = 0,
//! 癸亥 = 59) with `n % 10 == stem` and `n % 12 == branch`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::error::GanzhiError;
use crate::stem::Stem;

/// Length of the combined stem-branch cycle.
pub const SEXAGENARY_CYCLE: u8 = 60;

/// A valid (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Build a pillar, rejecting pairs whose polarity differs.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, GanzhiError> {
        if is_valid_pair(stem, branch) {
            Ok(Self { stem, branch })
        } else {
            Err(GanzhiError::InvalidPillar { stem, branch })
        }
    }

    /// Build from parts already known to share parity.
    pub(crate) const fn from_parts_unchecked(stem: Stem, branch: Branch) -> Self {
        debug_assert!(is_valid_pair(stem, branch));
        Self { stem, branch }
    }

    /// Pillar at any integer position of the 60-cycle (floored modulo).
    pub const fn from_ordinal(n: i64) -> Self {
        Self::from_parts_unchecked(Stem::wrapping(n), Branch::wrapping(n))
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Position in the 60-cycle (甲子 = 0 .. 癸亥 = 59).
    pub const fn ordinal(self) -> u8 {
        let s = self.stem.index() as i16;
        let b = self.branch.index() as i16;
        // n ≡ s (mod 10) and n ≡ b (mod 12) solve to n = 6s - 5b (mod 60).
        (6 * s - 5 * b).rem_euclid(SEXAGENARY_CYCLE as i16) as u8
    }

    /// Move `n` steps along the 60-cycle; `n` may be negative.
    ///
    /// Stem and branch move by the same amount, which keeps their parity
    /// equal, so the result is always valid.
    pub const fn offset(self, n: i64) -> Self {
        Self::from_parts_unchecked(self.stem.offset(n), self.branch.offset(n))
    }

    /// Iterate all 60 pillars in cycle order, starting at 甲子.
    pub fn all() -> impl Iterator<Item = Pillar> {
        (0..SEXAGENARY_CYCLE as i64).map(Self::from_ordinal)
    }
}

/// True iff stem and branch share polarity.
pub const fn is_valid_pair(stem: Stem, branch: Branch) -> bool {
    stem.index() % 2 == branch.index() % 2
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = GanzhiError;

    /// Parse two-character text such as `"丁卯"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GanzhiError::MalformedPillar(text.into()));
        };
        let stem = Stem::from_char(sc).ok_or_else(|| GanzhiError::UnknownSymbol(sc.into()))?;
        let branch = Branch::from_char(bc).ok_or_else(|| GanzhiError::UnknownSymbol(bc.into()))?;
        Self::new(stem, branch)
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_valid_pairs() {
        let mut count = 0;
        for s in Stem::all() {
            for b in Branch::all() {
                if Pillar::new(*s, *b).is_ok() {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 60);
    }

    #[test]
    fn invalid_pair_rejected() {
        assert_eq!(
            Pillar::new(Stem::Jia, Branch::Chou),
            Err(GanzhiError::InvalidPillar {
                stem: Stem::Jia,
                branch: Branch::Chou
            })
        );
    }

    #[test]
    fn ordinal_known_values() {
        let jia_zi = Pillar::new(Stem::Jia, Branch::Zi).unwrap();
        let gui_hai = Pillar::new(Stem::Gui, Branch::Hai).unwrap();
        let jia_xu = Pillar::new(Stem::Jia, Branch::Xu).unwrap();
        let ding_mao = Pillar::new(Stem::Ding, Branch::Mao).unwrap();
        assert_eq!(jia_zi.ordinal(), 0);
        assert_eq!(gui_hai.ordinal(), 59);
        assert_eq!(jia_xu.ordinal(), 10);
        assert_eq!(ding_mao.ordinal(), 3);
    }

    #[test]
    fn all_in_order() {
        for (i, p) in Pillar::all().enumerate() {
            assert_eq!(p.ordinal() as usize, i);
        }
        assert_eq!(Pillar::all().count(), 60);
    }

    #[test]
    fn from_ordinal_wraps_negative() {
        assert_eq!(Pillar::from_ordinal(-1), Pillar::from_ordinal(59));
        assert_eq!(Pillar::from_ordinal(60), Pillar::from_ordinal(0));
        assert_eq!(Pillar::from_ordinal(-61), Pillar::from_ordinal(59));
    }

    #[test]
    fn offset_known() {
        let ding_mao: Pillar = "丁卯".parse().unwrap();
        assert_eq!(ding_mao.offset(1).to_string(), "戊辰");
        assert_eq!(ding_mao.offset(7).to_string(), "甲戌");
        assert_eq!(ding_mao.offset(-1).to_string(), "丙寅");
        assert_eq!(ding_mao.offset(-4).to_string(), "癸亥");
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "甲".parse::<Pillar>(),
            Err(GanzhiError::MalformedPillar(_))
        ));
        assert!(matches!(
            "甲子丑".parse::<Pillar>(),
            Err(GanzhiError::MalformedPillar(_))
        ));
        assert!(matches!(
            "甲X".parse::<Pillar>(),
            Err(GanzhiError::UnknownSymbol(_))
        ));
        assert!(matches!(
            "甲丑".parse::<Pillar>(),
            Err(GanzhiError::InvalidPillar { .. })
        ));
        assert_eq!(" 癸亥 ".parse::<Pillar>().unwrap().ordinal(), 59);
    }

    #[test]
    fn display_and_serialize() {
        let p = Pillar::from_ordinal(26);
        assert_eq!(p.to_string(), "庚寅");
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"庚寅\"");
    }
}
