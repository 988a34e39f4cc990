//! 时刻天机 chart: an hour pillar, a ke pillar inside it, and everything
//! derived from the pair.
//!
//! Charts are immutable. [`ShiKeChart::next`] and [`ShiKeChart::previous`]
//! return new charts one ke away, re-decorating only the pillars that moved.

use chrono::{Local, NaiveDateTime, Timelike};
use ganzhi_base::{
    Branch, DecoratedPillar, GanzhiError, KeIndex, KeState, Lookup, Pillar, ShenSha, TenGod,
    decorate_with, ke_index_for_time, ten_god,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::calendar::{DecoratedFour, FourPillars, LunarCalendar};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::random::{RANDOM_NUMBER_RANGE, RandomSource, draw_chart_number};

/// How the chart was cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartMethod {
    CurrentTime,
    CustomTime,
    RandomNumber,
    CustomGanzhi,
}

impl ChartMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::CurrentTime => "当前时间",
            Self::CustomTime => "自定义时间",
            Self::RandomNumber => "随机数起盘",
            Self::CustomGanzhi => "自定义干支",
        }
    }
}

/// One shensha evaluated on both the hour and the ke pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShenShaRow {
    pub kind: ShenSha,
    pub hour: Lookup<&'static [Branch]>,
    pub ke: Lookup<&'static [Branch]>,
}

/// A cast chart. Fields are read through accessors so the derived values
/// always match the pillars they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiKeChart {
    method: ChartMethod,
    moment: Option<NaiveDateTime>,
    number: Option<u32>,
    four_pillars: Option<DecoratedFour>,
    state: KeState,
    hour: DecoratedPillar,
    ke: DecoratedPillar,
    ten_god: TenGod,
    ke_voided: bool,
    #[serde(skip)]
    kinds: Vec<ShenSha>,
}

impl ShiKeChart {
    /// Cast for the local clock time now.
    pub fn at_current_time(
        calendar: &impl LunarCalendar,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        let now = Local::now().naive_local();
        Self::at_time(calendar, now, ChartMethod::CurrentTime, config)
    }

    /// Cast for a caller-supplied clock time.
    pub fn at_custom_time(
        calendar: &impl LunarCalendar,
        at: NaiveDateTime,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        Self::at_time(calendar, at, ChartMethod::CustomTime, config)
    }

    fn at_time(
        calendar: &impl LunarCalendar,
        at: NaiveDateTime,
        method: ChartMethod,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        config.validate()?;
        let four = fetch_pillars(calendar, at)?;
        let ke = ke_index_for_time(at.hour(), at.minute())?;
        let state = KeState::new(four.hour, ke);
        Ok(Self::assemble(
            method,
            Some(at),
            None,
            Some(four),
            state,
            state.ke_pillar(),
            config,
        ))
    }

    /// Cast from a number in `1..=12`; number `n` selects ke `n - 1` of the
    /// hour at `at`.
    pub fn from_number(
        calendar: &impl LunarCalendar,
        at: NaiveDateTime,
        number: u32,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        config.validate()?;
        let (low, high) = RANDOM_NUMBER_RANGE;
        if !(low..=high).contains(&number) {
            return Err(GanzhiError::OutOfRange {
                what: "chart number",
                value: number as i64,
                min: low as i64,
                max: high as i64,
            }
            .into());
        }
        let four = fetch_pillars(calendar, at)?;
        let ke = KeIndex::new((number - low) as u8)?;
        let state = KeState::new(four.hour, ke);
        Ok(Self::assemble(
            ChartMethod::RandomNumber,
            Some(at),
            Some(number),
            Some(four),
            state,
            state.ke_pillar(),
            config,
        ))
    }

    /// Draw a number from `source` and cast with it.
    pub fn from_random(
        calendar: &impl LunarCalendar,
        at: NaiveDateTime,
        source: &mut impl RandomSource,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        let number = draw_chart_number(source);
        Self::from_number(calendar, at, number, config)
    }

    /// Cast from explicit hour and ke pillars. The ke index is the ke
    /// branch; the ke pillar is used as given.
    pub fn from_ganzhi(hour: Pillar, ke: Pillar, config: &EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let state = KeState::new(hour, KeIndex::of_branch(ke.branch()));
        Ok(Self::assemble(
            ChartMethod::CustomGanzhi,
            None,
            None,
            None,
            state,
            ke,
            config,
        ))
    }

    /// Like [`from_ganzhi`](Self::from_ganzhi), parsing text such as `"丙寅"`.
    pub fn from_ganzhi_text(hour: &str, ke: &str, config: &EngineConfig) -> EngineResult<Self> {
        let hour: Pillar = hour.parse()?;
        let ke: Pillar = ke.parse()?;
        Self::from_ganzhi(hour, ke, config)
    }

    fn assemble(
        method: ChartMethod,
        moment: Option<NaiveDateTime>,
        number: Option<u32>,
        four: Option<FourPillars>,
        state: KeState,
        ke_pillar: Pillar,
        config: &EngineConfig,
    ) -> Self {
        let kinds = config.shensha_kinds();
        let four_pillars = four.map(|f| f.decorate(&kinds));
        let hour = decorate_with(state.hour, &kinds);
        let ke = decorate_with(ke_pillar, &kinds);
        debug!(
            method = method.name(),
            hour = %hour.pillar,
            ke = %ke.pillar,
            ke_index = state.ke.get(),
            "chart cast"
        );
        Self::with_pillars(method, moment, number, four_pillars, state, hour, ke, kinds)
    }

    #[allow(clippy::too_many_arguments)]
    fn with_pillars(
        method: ChartMethod,
        moment: Option<NaiveDateTime>,
        number: Option<u32>,
        four_pillars: Option<DecoratedFour>,
        state: KeState,
        hour: DecoratedPillar,
        ke: DecoratedPillar,
        kinds: Vec<ShenSha>,
    ) -> Self {
        let ten_god = ten_god(hour.pillar.stem(), ke.pillar.stem());
        let ke_voided = hour.attributes.is_void(ke.pillar.branch());
        Self {
            method,
            moment,
            number,
            four_pillars,
            state,
            hour,
            ke,
            ten_god,
            ke_voided,
            kinds,
        }
    }

    pub const fn method(&self) -> ChartMethod {
        self.method
    }

    /// Clock time the chart was cast for, if any.
    pub const fn moment(&self) -> Option<NaiveDateTime> {
        self.moment
    }

    /// The drawn or supplied number in random-number mode.
    pub const fn number(&self) -> Option<u32> {
        self.number
    }

    pub fn four_pillars(&self) -> Option<&DecoratedFour> {
        self.four_pillars.as_ref()
    }

    pub const fn state(&self) -> KeState {
        self.state
    }

    pub const fn hour(&self) -> &DecoratedPillar {
        &self.hour
    }

    pub const fn ke(&self) -> &DecoratedPillar {
        &self.ke
    }

    /// Relation of the ke stem to the hour stem.
    pub const fn ten_god(&self) -> TenGod {
        self.ten_god
    }

    /// Whether the ke branch is void in the hour pillar's xun.
    pub const fn ke_voided(&self) -> bool {
        self.ke_voided
    }

    /// The chart one ke later.
    pub fn next(&self) -> EngineResult<Self> {
        Ok(self.moved_to(self.state.step_next()?))
    }

    /// The chart one ke earlier.
    pub fn previous(&self) -> EngineResult<Self> {
        Ok(self.moved_to(self.state.step_previous()?))
    }

    fn moved_to(&self, state: KeState) -> Self {
        let hour = if state.hour == self.hour.pillar {
            self.hour.clone()
        } else {
            decorate_with(state.hour, &self.kinds)
        };
        let ke_pillar = state.ke_pillar();
        let ke = if ke_pillar == self.ke.pillar {
            self.ke.clone()
        } else {
            decorate_with(ke_pillar, &self.kinds)
        };
        debug!(hour = %hour.pillar, ke = %ke.pillar, "chart moved");
        Self::with_pillars(
            self.method,
            self.moment,
            self.number,
            self.four_pillars.clone(),
            state,
            hour,
            ke,
            self.kinds.clone(),
        )
    }

    /// Shensha rows in configured order, stem-keyed first.
    pub fn shensha_rows(&self) -> Vec<ShenShaRow> {
        self.kinds
            .iter()
            .map(|&kind| ShenShaRow {
                kind,
                hour: lookup_mark(&self.hour, kind),
                ke: lookup_mark(&self.ke, kind),
            })
            .collect()
    }
}

fn lookup_mark(pillar: &DecoratedPillar, kind: ShenSha) -> Lookup<&'static [Branch]> {
    pillar
        .attributes
        .mark(kind)
        .map_or(Lookup::Unknown, |m| m.targets)
}

fn fetch_pillars(calendar: &impl LunarCalendar, at: NaiveDateTime) -> EngineResult<FourPillars> {
    calendar
        .four_pillars(at)
        .inspect_err(|e| warn!(%at, error = %e, "calendar lookup failed"))
}
