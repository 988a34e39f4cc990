//! Nayin (纳音): the "sound element" of a pillar.
//!
//! The 60-cycle splits into 30 consecutive pairs (甲子乙丑, 丙寅丁卯, ...), and
//! each pair carries one named sound element.

use serde::Serialize;

use crate::element::Element;
use crate::pillar::Pillar;

/// Number of nayin names.
pub const NAYIN_COUNT: usize = 30;

/// Name and element for each pair, indexed by `ordinal / 2`.
const NAYIN_TABLE: [(&str, Element); NAYIN_COUNT] = [
    ("海中金", Element::Metal),
    ("炉中火", Element::Fire),
    ("大林木", Element::Wood),
    ("路旁土", Element::Earth),
    ("剑锋金", Element::Metal),
    ("山头火", Element::Fire),
    ("涧下水", Element::Water),
    ("城头土", Element::Earth),
    ("白蜡金", Element::Metal),
    ("杨柳木", Element::Wood),
    ("泉中水", Element::Water),
    ("屋上土", Element::Earth),
    ("霹雳火", Element::Fire),
    ("松柏木", Element::Wood),
    ("长流水", Element::Water),
    ("沙中金", Element::Metal),
    ("山下火", Element::Fire),
    ("平地木", Element::Wood),
    ("壁上土", Element::Earth),
    ("金箔金", Element::Metal),
    ("覆灯火", Element::Fire),
    ("天河水", Element::Water),
    ("大驿土", Element::Earth),
    ("钗钏金", Element::Metal),
    ("桑柘木", Element::Wood),
    ("大溪水", Element::Water),
    ("沙中土", Element::Earth),
    ("天上火", Element::Fire),
    ("石榴木", Element::Wood),
    ("大海水", Element::Water),
];

/// One of the 30 nayin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Nayin {
    pub name: &'static str,
    pub element: Element,
}

impl Nayin {
    /// Nayin for a 0-based pair index. Returns None if index >= 30.
    pub fn from_index(index: u8) -> Option<Self> {
        NAYIN_TABLE
            .get(index as usize)
            .map(|&(name, element)| Self { name, element })
    }
}

/// Nayin of a pillar.
pub fn nayin(pillar: Pillar) -> Nayin {
    let (name, element) = NAYIN_TABLE[(pillar.ordinal() / 2) as usize];
    Nayin { name, element }
}
