//! Flat Chinese text rendering of charts and timelines.
//!
//! The text is a plain key/value layout meant to be pasted into a prompt or
//! a log, not a formatted report.

use std::fmt::{self, Display, Formatter};

use ganzhi_base::{Branch, DaYunStatus, DecoratedPillar, Lookup, Stem};

use crate::config::EngineConfig;
use crate::reading::{ShenShaRow, ShiKeChart};
use crate::timeline::DaYunTimeline;

/// Chart text. Render with `to_string()` or `{}`.
pub struct ChartText<'a> {
    pub chart: &'a ShiKeChart,
    pub config: &'a EngineConfig,
}

/// Timeline text, optionally marking the decade active in `year`.
pub struct TimelineText<'a> {
    pub timeline: &'a DaYunTimeline,
    pub config: &'a EngineConfig,
    pub year: Option<i32>,
}

pub fn chart_text(chart: &ShiKeChart, config: &EngineConfig) -> String {
    ChartText { chart, config }.to_string()
}

pub fn timeline_text(timeline: &DaYunTimeline, config: &EngineConfig, year: Option<i32>) -> String {
    TimelineText {
        timeline,
        config,
        year,
    }
    .to_string()
}

fn join_branches(branches: &[Branch]) -> String {
    branches
        .iter()
        .map(|b| b.name())
        .collect::<Vec<_>>()
        .join("、")
}

fn join_stems(stems: &[Stem]) -> String {
    stems.iter().map(|s| s.name()).collect::<Vec<_>>().join("、")
}

fn targets_text(targets: Lookup<&[Branch]>, config: &EngineConfig) -> String {
    match targets {
        Lookup::Found([]) => config.absent_label.clone(),
        Lookup::Found(bs) => join_branches(bs),
        Lookup::Unknown => config.unknown_label.clone(),
    }
}

fn pillar_block(f: &mut Formatter<'_>, label: &str, d: &DecoratedPillar) -> fmt::Result {
    let a = &d.attributes;
    let hidden = if a.hidden_stems.is_empty() {
        "无".to_string()
    } else {
        join_stems(a.hidden_stems)
    };
    writeln!(f, "{label}：")?;
    writeln!(f, "  天干：{}", d.pillar.stem())?;
    writeln!(f, "  地支：{}", d.pillar.branch())?;
    writeln!(f, "  纳音：{}", a.nayin.name)?;
    writeln!(f, "  十二长生：{}", a.stem_stage.name())?;
    writeln!(f, "  纳音长生：{}", a.nayin_stage.name())?;
    writeln!(f, "  旬空：{}{}", a.void_branches[0], a.void_branches[1])?;
    writeln!(f, "  透干：{hidden}")
}

impl Display for ChartText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = self.chart;
        writeln!(f, "时刻天机排盘结果")?;
        writeln!(f, "计算方法：{}", c.method().name())?;
        if let Some(at) = c.moment() {
            writeln!(f, "时间：{}", at.format("%Y-%m-%d %H:%M"))?;
        }
        if let Some(n) = c.number() {
            writeln!(f, "随机数：{n}")?;
        }
        if let Some(four) = c.four_pillars() {
            let parts: Vec<String> = four
                .labelled()
                .iter()
                .map(|(label, d)| format!("{label} {}（{}）", d.pillar, d.attributes.nayin.name))
                .collect();
            writeln!(f, "完整八字：{}", parts.join(" "))?;
        }
        writeln!(f)?;
        pillar_block(f, "时柱", c.hour())?;
        pillar_block(f, "刻柱", c.ke())?;
        writeln!(f)?;
        writeln!(
            f,
            "十神：刻干{}为时干{}之{}",
            c.ke().pillar.stem(),
            c.hour().pillar.stem(),
            c.ten_god().name()
        )?;
        writeln!(f, "刻支旬空：{}", if c.ke_voided() { "是" } else { "否" })?;

        let (stem_rows, branch_rows): (Vec<ShenShaRow>, Vec<ShenShaRow>) = c
            .shensha_rows()
            .into_iter()
            .partition(|r| r.kind.keyed_by() == ganzhi_base::ShenShaKey::Stem);
        for (title, rows) in [("天干神煞", stem_rows), ("地支神煞", branch_rows)] {
            if rows.is_empty() {
                continue;
            }
            writeln!(f, "{title}：")?;
            for r in rows {
                writeln!(
                    f,
                    "  {}：时柱[{}] 刻柱[{}]",
                    r.kind.name(),
                    targets_text(r.hour, self.config),
                    targets_text(r.ke, self.config)
                )?;
            }
        }
        Ok(())
    }
}

impl Display for TimelineText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let t = self.timeline;
        let ctx = t.context();
        writeln!(f, "大运排盘")?;
        writeln!(
            f,
            "出生年：{}  性别：{}  方向：{}  起运年龄：{}",
            ctx.birth_year,
            ctx.gender.name(),
            t.direction().name(),
            ctx.start_age
        )?;
        let active = self.year.map(|y| (y, t.current(y)));
        if let Some((y, DaYunStatus::PreCycle { start_age })) = active {
            writeln!(f, "{y}年：童限（{start_age}岁起运）")?;
        }
        for b in t.blocks() {
            let mark = match active {
                Some((_, DaYunStatus::Active(p))) if p.index == b.period.index => " ← 当前",
                _ => "",
            };
            writeln!(
                f,
                "第{}运 {}（{}） {}-{}岁{mark}",
                b.period.index + 1,
                b.decorated.pillar,
                b.decorated.attributes.nayin.name,
                b.period.ages.start,
                b.period.ages.end
            )?;
            let years: Vec<String> = b
                .years
                .iter()
                .map(|y| format!("{}{}({})", y.year, y.pillar, y.age))
                .collect();
            writeln!(f, "  流年：{}", years.join(" "))?;
        }
        Ok(())
    }
}
