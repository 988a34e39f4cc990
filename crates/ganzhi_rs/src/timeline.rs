//! Decade timeline: decorated 大运 blocks with the 流年 under each.

use ganzhi_base::{
    CycleContext, DaYunEngine, DaYunPeriod, DaYunStatus, DecoratedPillar, Direction, LiuNian,
    decorate_with, liunians_in,
};
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineResult;

/// One decade with its decorated pillar and its ten years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaYunBlock {
    pub period: DaYunPeriod,
    pub decorated: DecoratedPillar,
    pub years: Vec<LiuNian>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaYunTimeline {
    #[serde(skip)]
    engine: DaYunEngine,
    direction: Direction,
    blocks: Vec<DaYunBlock>,
}

impl DaYunTimeline {
    /// Build `config.dayun_count` blocks for `context`.
    pub fn build(context: CycleContext, config: &EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let engine = DaYunEngine::new(context);
        let kinds = config.shensha_kinds();
        let blocks: Vec<DaYunBlock> = engine
            .periods(config.dayun_count)
            .into_iter()
            .map(|period| DaYunBlock {
                period,
                decorated: decorate_with(period.pillar, &kinds),
                years: liunians_in(period.ages, context.birth_year),
            })
            .collect();
        debug!(
            blocks = blocks.len(),
            direction = engine.direction().name(),
            "dayun timeline built"
        );
        Ok(Self {
            engine,
            direction: engine.direction(),
            blocks,
        })
    }

    pub fn context(&self) -> &CycleContext {
        self.engine.context()
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub fn blocks(&self) -> &[DaYunBlock] {
        &self.blocks
    }

    /// Decade status in calendar `year`. Years past the last built block
    /// still resolve through the engine.
    pub fn current(&self, year: i32) -> DaYunStatus {
        self.engine.decade_for_year(year)
    }

    /// The built block active in `year`, if it is one of the built blocks.
    pub fn block_for_year(&self, year: i32) -> Option<&DaYunBlock> {
        let status = self.current(year);
        let index = status.period()?.index as usize;
        self.blocks.get(index)
    }
}
