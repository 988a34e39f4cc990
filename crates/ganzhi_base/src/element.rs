//! Five elements (五行) and polarity (阴阳).
//!
//! Elements are kept in generation order (木→火→土→金→水), so the
//! generation/control relationship between two elements reduces to their
//! index distance mod 5.

use serde::Serialize;

/// The five elements, in generation (相生) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generation order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Chinese name (single character).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in generation order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Parse from the single-character Chinese name.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '木' => Some(Self::Wood),
            '火' => Some(Self::Fire),
            '土' => Some(Self::Earth),
            '金' => Some(Self::Metal),
            '水' => Some(Self::Water),
            _ => None,
        }
    }

    /// The element this one generates (木生火, 火生土, ...).
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one controls (木克土, 土克水, ...).
    pub const fn controls(self) -> Element {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// Distance from `self` to `other` in generation order, in `0..5`.
    ///
    /// 0 = same, 1 = self generates other, 2 = self controls other,
    /// 3 = other controls self, 4 = other generates self.
    pub const fn distance_to(self, other: Element) -> u8 {
        (other.index() + 5 - self.index()) % 5
    }
}

/// Yin/Yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of a 0-based stem or branch index: even = Yang.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }
}
