//! Decade pillars (大运).
//!
//! Starting from the first decade pillar, successive decades step one
//! position along the 60-cycle in a direction fixed at birth by gender and
//! the polarity of the natal year stem. Each decade spans ten years of age
//! beginning at the start age; ages before it belong to the pre-cycle
//! period (童限), which has no decade pillar.

use serde::Serialize;
use tracing::debug;

use super::types::{AgeRange, CycleContext, Direction, Gender, YEARS_PER_DECADE};
use crate::element::Polarity;
use crate::pillar::Pillar;

/// Decade direction: forward iff (male and Yang year) or (female and Yin year).
pub const fn direction_for(gender: Gender, year_polarity: Polarity) -> Direction {
    match (gender, year_polarity) {
        (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => Direction::Forward,
        (Gender::Male, Polarity::Yin) | (Gender::Female, Polarity::Yang) => Direction::Reverse,
    }
}

/// One decade with its age span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaYunPeriod {
    /// 0-based decade number.
    pub index: u32,
    pub pillar: Pillar,
    pub ages: AgeRange,
}

/// Where an age falls relative to the decade sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DaYunStatus {
    /// Before the first decade (童限).
    PreCycle { start_age: i32 },
    Active(DaYunPeriod),
}

impl DaYunStatus {
    pub fn period(&self) -> Option<&DaYunPeriod> {
        match self {
            Self::Active(p) => Some(p),
            Self::PreCycle { .. } => None,
        }
    }
}

/// Decade engine for one subject. The direction is computed once here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaYunEngine {
    context: CycleContext,
    direction: Direction,
}

impl DaYunEngine {
    pub fn new(context: CycleContext) -> Self {
        let direction = direction_for(context.gender, context.year_stem.polarity());
        debug!(
            first = %context.first_dayun,
            start_age = context.start_age,
            direction = direction.name(),
            "dayun engine"
        );
        Self { context, direction }
    }

    pub const fn context(&self) -> &CycleContext {
        &self.context
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Pillar of decade `k`.
    pub const fn decade_at(&self, k: u32) -> Pillar {
        self.context
            .first_dayun
            .offset(self.direction.sign() * k as i64)
    }

    /// Inclusive age span of decade `k`.
    pub const fn age_range_for(&self, k: u32) -> AgeRange {
        let start = self.context.start_age as i64 + YEARS_PER_DECADE * k as i64;
        AgeRange {
            start,
            end: start + YEARS_PER_DECADE - 1,
        }
    }

    pub const fn period(&self, k: u32) -> DaYunPeriod {
        DaYunPeriod {
            index: k,
            pillar: self.decade_at(k),
            ages: self.age_range_for(k),
        }
    }

    /// Decade active at `age`, or pre-cycle if `age` precedes the start age.
    pub fn decade_for_age(&self, age: i32) -> DaYunStatus {
        self.status_at(age as i64)
    }

    /// Decade active in calendar `year` (age = year - birth year).
    pub fn decade_for_year(&self, year: i32) -> DaYunStatus {
        self.status_at(year as i64 - self.context.birth_year as i64)
    }

    // `age` is a difference of two i32 values; the decade index stays below
    // 2^33 / 10 and fits u32.
    fn status_at(&self, age: i64) -> DaYunStatus {
        let start_age = self.context.start_age;
        if age < start_age as i64 {
            return DaYunStatus::PreCycle { start_age };
        }
        let k = (age - start_age as i64) / YEARS_PER_DECADE;
        DaYunStatus::Active(self.period(k as u32))
    }

    /// The first `count` decades.
    pub fn periods(&self, count: u32) -> Vec<DaYunPeriod> {
        (0..count).map(|k| self.period(k)).collect()
    }
}
