//! Boundary to the lunar calendar.
//!
//! Converting a civil date to year/month/day/hour pillars needs solar-term
//! tables and is not done here. Callers plug in an implementation of
//! [`LunarCalendar`].

use chrono::NaiveDateTime;
use ganzhi_base::{DecoratedPillar, Pillar, ShenSha, decorate_with};
use serde::Serialize;

use crate::error::EngineResult;

/// Year, month, day and hour pillars of one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillars in display order with their labels.
    pub fn labelled(&self) -> [(&'static str, Pillar); 4] {
        [
            ("年柱", self.year),
            ("月柱", self.month),
            ("日柱", self.day),
            ("时柱", self.hour),
        ]
    }

    pub fn decorate(&self, kinds: &[ShenSha]) -> DecoratedFour {
        DecoratedFour {
            year: decorate_with(self.year, kinds),
            month: decorate_with(self.month, kinds),
            day: decorate_with(self.day, kinds),
            hour: decorate_with(self.hour, kinds),
        }
    }
}

/// Four pillars with attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecoratedFour {
    pub year: DecoratedPillar,
    pub month: DecoratedPillar,
    pub day: DecoratedPillar,
    pub hour: DecoratedPillar,
}

impl DecoratedFour {
    pub fn labelled(&self) -> [(&'static str, &DecoratedPillar); 4] {
        [
            ("年柱", &self.year),
            ("月柱", &self.month),
            ("日柱", &self.day),
            ("时柱", &self.hour),
        ]
    }
}

/// Source of four pillars for a local civil time.
pub trait LunarCalendar {
    /// Pillars for `at`. Implementations report failures as
    /// [`EngineError::Calendar`](crate::EngineError::Calendar).
    fn four_pillars(&self, at: NaiveDateTime) -> EngineResult<FourPillars>;
}

impl<C: LunarCalendar + ?Sized> LunarCalendar for &C {
    fn four_pillars(&self, at: NaiveDateTime) -> EngineResult<FourPillars> {
        (**self).four_pillars(at)
    }
}
