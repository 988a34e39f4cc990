//! Convenience layer over `ganzhi_base`.
//!
//! Builds the 时刻天机 chart (hour and ke pillars with derived attributes)
//! and the 大运/流年 timeline, and renders both as flat Chinese text.
//! Lunar calendar conversion stays outside: callers supply a
//! [`LunarCalendar`].
//!
//! # Quick start
//!
//! ```rust
//! use ganzhi_rs::*;
//!
//! let config = EngineConfig::default();
//! let chart = ShiKeChart::from_ganzhi_text("丁卯", "癸卯", &config).unwrap();
//! assert_eq!(chart.ten_god(), TenGod::QiSha);
//!
//! let next = chart.next().unwrap();
//! assert_eq!(next.ke().pillar.to_string(), "甲辰");
//! println!("{}", chart_text(&next, &config));
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod format;
pub mod random;
pub mod reading;
pub mod timeline;

pub use calendar::{DecoratedFour, FourPillars, LunarCalendar};
pub use config::{EngineConfig, MAX_DAYUN_COUNT};
pub use error::{EngineError, EngineResult};
pub use format::{ChartText, TimelineText, chart_text, timeline_text};
pub use random::{RandomSource, draw_chart_number};
pub use reading::{ChartMethod, ShenShaRow, ShiKeChart};
pub use timeline::{DaYunBlock, DaYunTimeline};

// Re-export core types so callers don't need to depend on ganzhi_base directly.
pub use ganzhi_base::{
    Branch, CycleContext, DaYunStatus, DecoratedPillar, Direction, Gender, GanzhiError, KeIndex,
    KeState, Lookup, Pillar, ShenSha, Stem, TenGod,
};
