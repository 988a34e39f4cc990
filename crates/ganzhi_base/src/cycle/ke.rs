//! Ke (刻) pillars: twelve ten-minute intervals inside one branch-hour.
//!
//! The ke stem starts from a value fixed by the hour stem (甲己→甲, 乙庚→丙,
//! 丙辛→戊, 丁壬→庚, 戊癸→壬) and advances with the ke index; the ke branch is
//! the branch at the ke index. Stepping past the last ke carries into the
//! hour pillar.

use serde::Serialize;
use tracing::debug;

use crate::branch::Branch;
use crate::error::GanzhiError;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Ke intervals per branch-hour.
pub const KE_PER_HOUR: u8 = 12;

/// Minutes per ke interval.
const MINUTES_PER_KE: u32 = 10;

/// Validated ke index in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct KeIndex(u8);

impl KeIndex {
    pub fn new(index: u8) -> Result<Self, GanzhiError> {
        if index < KE_PER_HOUR {
            Ok(Self(index))
        } else {
            Err(GanzhiError::out_of_range(
                "ke index",
                index as i64,
                0,
                KE_PER_HOUR as i64 - 1,
            ))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// The ke index whose branch is `branch`.
    pub const fn of_branch(branch: Branch) -> Self {
        Self(branch.index())
    }
}

/// First ke stem for an hour stem.
pub const fn ke_start_stem(hour_stem: Stem) -> Stem {
    Stem::wrapping((hour_stem.index() % 5) as i64 * 2)
}

/// Stem of ke `ke` under `hour_stem`.
pub const fn ke_stem(hour_stem: Stem, ke: KeIndex) -> Stem {
    ke_start_stem(hour_stem).offset(ke.0 as i64)
}

/// Ke pillar under `hour_stem`. Always valid: the start stem is Yang and
/// both parts advance by the same index.
pub const fn ke_pillar(hour_stem: Stem, ke: KeIndex) -> Pillar {
    Pillar::from_parts_unchecked(ke_stem(hour_stem, ke), Branch::wrapping(ke.0 as i64))
}

/// Hour branch covering clock hour `hour` (子 = 23:00-00:59).
pub fn branch_hour_for_time(hour: u32) -> Result<Branch, GanzhiError> {
    check_hour(hour)?;
    Ok(Branch::wrapping(((hour + 1) % 24 / 2) as i64))
}

/// Ke index covering the clock time `hour:minute`.
pub fn ke_index_for_time(hour: u32, minute: u32) -> Result<KeIndex, GanzhiError> {
    check_hour(hour)?;
    if minute > 59 {
        return Err(GanzhiError::out_of_range("minute", minute as i64, 0, 59));
    }
    let shifted = (hour * 60 + minute + 60) % 1440;
    let ke = ((shifted % 120) / MINUTES_PER_KE).min(KE_PER_HOUR as u32 - 1);
    Ok(KeIndex(ke as u8))
}

fn check_hour(hour: u32) -> Result<(), GanzhiError> {
    if hour > 23 {
        return Err(GanzhiError::out_of_range("hour", hour as i64, 0, 23));
    }
    Ok(())
}

/// Navigation state: the hour pillar and the ke within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KeState {
    pub hour: Pillar,
    pub ke: KeIndex,
}

impl KeState {
    pub const fn new(hour: Pillar, ke: KeIndex) -> Self {
        Self { hour, ke }
    }

    /// Ke pillar derived from the hour stem.
    pub const fn ke_pillar(&self) -> Pillar {
        ke_pillar(self.hour.stem(), self.ke)
    }

    /// Advance one ke, carrying into the next hour after ke 11.
    pub fn step_next(&self) -> Result<Self, GanzhiError> {
        if self.ke.0 + 1 < KE_PER_HOUR {
            return Ok(Self::new(self.hour, KeIndex(self.ke.0 + 1)));
        }
        let hour = roll_hour(self.hour, 1)?;
        Ok(Self::new(hour, KeIndex(0)))
    }

    /// Step back one ke, borrowing from the previous hour before ke 0.
    pub fn step_previous(&self) -> Result<Self, GanzhiError> {
        if self.ke.0 > 0 {
            return Ok(Self::new(self.hour, KeIndex(self.ke.0 - 1)));
        }
        let hour = roll_hour(self.hour, -1)?;
        Ok(Self::new(hour, KeIndex(KE_PER_HOUR - 1)))
    }
}

/// Move the hour branch by `delta` and find the first stem, scanning forward
/// from the naive candidate, that forms a valid pillar with it.
fn roll_hour(hour: Pillar, delta: i64) -> Result<Pillar, GanzhiError> {
    let branch = hour.branch().offset(delta);
    let candidate = hour.stem().offset(delta);
    let rolled = (0..10)
        .map(|i| candidate.offset(i))
        .find_map(|stem| Pillar::new(stem, branch).ok())
        .ok_or(GanzhiError::RolloverUnresolved { hour })?;
    debug!(from = %hour, to = %rolled, "hour rollover");
    Ok(rolled)
}
