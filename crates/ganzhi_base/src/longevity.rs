//! Twelve longevity stages (十二长生).
//!
//! Each stem (or element) is "born" (长生) at one branch and then walks
//! through the twelve stages around the branch circle. Yang stems walk
//! forward, Yin stems walk backward. The element table used for nayin
//! always walks forward, with Earth sharing Water's birth branch (水土同宫).

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// The 12 stages, from birth to nurture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LongevityStage {
    ChangSheng,
    MuYu,
    GuanDai,
    LinGuan,
    DiWang,
    Shuai,
    Bing,
    Si,
    Mu,
    Jue,
    Tai,
    Yang,
}

/// All 12 stages in cycle order.
pub const ALL_STAGES: [LongevityStage; 12] = [
    LongevityStage::ChangSheng,
    LongevityStage::MuYu,
    LongevityStage::GuanDai,
    LongevityStage::LinGuan,
    LongevityStage::DiWang,
    LongevityStage::Shuai,
    LongevityStage::Bing,
    LongevityStage::Si,
    LongevityStage::Mu,
    LongevityStage::Jue,
    LongevityStage::Tai,
    LongevityStage::Yang,
];

impl LongevityStage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ChangSheng => "长生",
            Self::MuYu => "沐浴",
            Self::GuanDai => "冠带",
            Self::LinGuan => "临官",
            Self::DiWang => "帝旺",
            Self::Shuai => "衰",
            Self::Bing => "病",
            Self::Si => "死",
            Self::Mu => "墓",
            Self::Jue => "绝",
            Self::Tai => "胎",
            Self::Yang => "养",
        }
    }

    /// 0-based index (长生=0 .. 养=11).
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

    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_STAGES[index as usize])
        } else {
            None
        }
    }
}

impl Serialize for LongevityStage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Branch where a stem's cycle begins (长生).
pub const fn birth_branch_of_stem(stem: Stem) -> Branch {
    match stem {
        Stem::Jia => Branch::Hai,
        Stem::Yi => Branch::Wu,
        Stem::Bing | Stem::Wu => Branch::Yin,
        Stem::Ding | Stem::Ji => Branch::You,
        Stem::Geng => Branch::Si,
        Stem::Xin => Branch::Zi,
        Stem::Ren => Branch::Shen,
        Stem::Gui => Branch::Mao,
    }
}

/// Branch where an element's cycle begins. Earth follows Water.
pub const fn birth_branch_of_element(element: Element) -> Branch {
    match element {
        Element::Wood => Branch::Hai,
        Element::Fire => Branch::Yin,
        Element::Metal => Branch::Si,
        Element::Water | Element::Earth => Branch::Shen,
    }
}

/// Stage of `stem` at `branch` (十干长生).
pub const fn stage_for_stem(stem: Stem, branch: Branch) -> LongevityStage {
    let birth = birth_branch_of_stem(stem).index() as i16;
    let b = branch.index() as i16;
    let steps = match stem.polarity() {
        Polarity::Yang => b - birth,
        Polarity::Yin => birth - b,
    };
    ALL_STAGES[steps.rem_euclid(12) as usize]
}

/// Stage of `element` at `branch`, always walking forward.
pub const fn stage_for_element(element: Element, branch: Branch) -> LongevityStage {
    let birth = birth_branch_of_element(element).index() as i16;
    let steps = branch.index() as i16 - birth;
    ALL_STAGES[steps.rem_euclid(12) as usize]
}
