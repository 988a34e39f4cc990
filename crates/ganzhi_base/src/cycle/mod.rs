//! Cyclic navigation over pillars: decades (大运), years (流年) and
//! ten-minute intervals (刻).
//!
//! All engines are pure functions over validated inputs. Navigation returns
//! new values; nothing here holds mutable state.

pub mod dayun;
pub mod ke;
pub mod liunian;
pub mod types;

pub use dayun::{DaYunEngine, DaYunPeriod, DaYunStatus, direction_for};
pub use ke::{
    KE_PER_HOUR, KeIndex, KeState, branch_hour_for_time, ke_index_for_time, ke_pillar,
    ke_start_stem, ke_stem,
};
pub use liunian::{LiuNian, liunian_at, liunian_for_age, liunians_in};
pub use types::{AgeRange, CycleContext, Direction, Gender};
