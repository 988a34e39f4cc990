//! Ten gods (十神): the relation of one stem to a reference stem.
//!
//! The relation is the element distance from the reference to the other
//! stem in generation order, split by whether their polarity matches.

use serde::{Serialize, Serializer};

use crate::stem::Stem;

/// The ten relation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// Same element, same polarity.
    BiJian,
    /// Same element, opposite polarity.
    JieCai,
    /// Reference generates other, same polarity.
    ShiShen,
    ShangGuan,
    /// Reference controls other, same polarity.
    PianCai,
    ZhengCai,
    /// Other controls reference, same polarity.
    QiSha,
    ZhengGuan,
    /// Other generates reference, same polarity.
    PianYin,
    ZhengYin,
}

/// All ten gods, ordered by element distance then same-polarity first.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::BiJian,
    TenGod::JieCai,
    TenGod::ShiShen,
    TenGod::ShangGuan,
    TenGod::PianCai,
    TenGod::ZhengCai,
    TenGod::QiSha,
    TenGod::ZhengGuan,
    TenGod::PianYin,
    TenGod::ZhengYin,
];

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }
}

impl Serialize for TenGod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Relation of `other` to `reference`.
pub const fn ten_god(reference: Stem, other: Stem) -> TenGod {
    let distance = reference.element().distance_to(other.element());
    let opposite = (reference.index() + other.index()) % 2 == 1;
    ALL_TEN_GODS[(distance * 2 + opposite as u8) as usize]
}
