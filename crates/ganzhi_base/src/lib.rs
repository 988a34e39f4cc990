//! Stem-branch (干支) algebra, attribute tables and cycle navigation.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches, five elements and validated pillars
//! - Static attribute tables: nayin, longevity stages, xunkong, hidden
//!   stems, ten gods and shensha markers
//! - Pillar decoration with the full attribute bundle
//! - Decade (大运), year (流年) and ke (刻) navigation
//!
//! Everything here is pure and deterministic. Lunar calendar conversion is
//! left to callers.

pub mod attributes;
pub mod branch;
pub mod cycle;
pub mod element;
pub mod error;
pub mod hidden_stems;
pub mod longevity;
pub mod lookup;
pub mod nayin;
pub mod pillar;
pub mod shensha;
pub mod stem;
pub mod ten_god;
pub mod xunkong;

pub use attributes::{DecoratedPillar, PillarAttributes, ShenShaMark, decorate, decorate_with};
pub use branch::{ALL_BRANCHES, Branch};
pub use cycle::{
    AgeRange, CycleContext, DaYunEngine, DaYunPeriod, DaYunStatus, Direction, Gender, KeIndex,
    KeState, LiuNian, direction_for, ke_index_for_time, ke_pillar, liunian_at, liunian_for_age,
    liunians_in,
};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::GanzhiError;
pub use hidden_stems::{hidden_stems, main_stem};
pub use longevity::{LongevityStage, stage_for_element, stage_for_stem};
pub use lookup::{Lookup, UNKNOWN_LABEL};
pub use nayin::{Nayin, nayin};
pub use pillar::{Pillar, SEXAGENARY_CYCLE, is_valid_pair};
pub use shensha::{BRANCH_SHENSHA, STEM_SHENSHA, ShenSha, ShenShaKey};
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{TenGod, ten_god};
pub use xunkong::{is_void, void_branches, xun_leader};
