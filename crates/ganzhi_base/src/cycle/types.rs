//! Core types shared by the cycle engines.

use serde::{Deserialize, Serialize};

use crate::pillar::Pillar;
use crate::stem::Stem;

/// Decade length in years.
pub const YEARS_PER_DECADE: i64 = 10;

/// Subject gender, as used by the decade direction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

/// Traversal direction along the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// +1 for forward, -1 for reverse.
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "顺行",
            Self::Reverse => "逆行",
        }
    }
}

/// Inclusive age span.
///
/// Bounds are `i64` so that any decade index over any `i32` start age fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AgeRange {
    pub start: i64,
    pub end: i64,
}

impl AgeRange {
    pub const fn contains(&self, age: i64) -> bool {
        age >= self.start && age <= self.end
    }

    /// Ages in the span, in order.
    pub fn ages(&self) -> impl Iterator<Item = i64> {
        self.start..=self.end
    }
}

/// Birth-derived inputs for the decade and year engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleContext {
    pub birth_year: i32,
    /// Stem of the natal year pillar; its polarity decides direction.
    pub year_stem: Stem,
    pub gender: Gender,
    /// First decade pillar, usually derived from the month pillar.
    pub first_dayun: Pillar,
    /// Age at which the first decade begins.
    pub start_age: i32,
}
