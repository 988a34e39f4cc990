//! Year pillars (流年).
//!
//! The year pillar is a closed form of the calendar year: 4 CE is 甲子,
//! so year `Y` sits at ordinal `Y - 4` of the 60-cycle.

use serde::Serialize;

use super::types::AgeRange;
use crate::pillar::Pillar;

/// A calendar year with its pillar and the subject's age in that year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiuNian {
    pub year: i64,
    pub age: i64,
    pub pillar: Pillar,
}

/// Pillar of calendar year `year` (proleptic, any integer).
pub const fn liunian_at(year: i64) -> Pillar {
    Pillar::from_ordinal(year.rem_euclid(60) - 4)
}

/// Year entry for `age`, where age 0 is the birth year.
pub const fn liunian_for_age(birth_year: i32, age: i32) -> LiuNian {
    entry(birth_year as i64, age as i64)
}

/// Year entries for every age in `ages`.
pub fn liunians_in(ages: AgeRange, birth_year: i32) -> Vec<LiuNian> {
    ages.ages()
        .map(|age| entry(birth_year as i64, age))
        .collect()
}

// Ages come from an `AgeRange`, bounded well inside i64 for any i32 birth year.
const fn entry(birth_year: i64, age: i64) -> LiuNian {
    let year = birth_year + age;
    LiuNian {
        year,
        age,
        pillar: liunian_at(year),
    }
}
