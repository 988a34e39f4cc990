//! Derived attribute bundle for a pillar.
//!
//! Every attribute is looked up independently, so a partial table only
//! degrades its own field. The nayin longevity stage is taken against the
//! nayin element, not the stem's own element; the stem's own stage is kept
//! separately as `stem_stage`.

use serde::Serialize;
use tracing::trace;

use crate::branch::Branch;
use crate::hidden_stems::hidden_stems;
use crate::longevity::{LongevityStage, stage_for_element, stage_for_stem};
use crate::lookup::Lookup;
use crate::nayin::{Nayin, nayin};
use crate::pillar::Pillar;
use crate::shensha::{BRANCH_SHENSHA, STEM_SHENSHA, ShenSha};
use crate::stem::Stem;
use crate::xunkong::void_branches;

/// One shensha marker evaluated for a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShenShaMark {
    pub kind: ShenSha,
    pub targets: Lookup<&'static [Branch]>,
}

impl ShenShaMark {
    /// True iff the marker points at `branch`.
    pub fn hits(&self, branch: Branch) -> bool {
        matches!(self.targets, Lookup::Found(t) if t.contains(&branch))
    }
}

/// Attributes derived from one pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarAttributes {
    pub nayin: Nayin,
    /// Stage of the branch relative to the nayin element.
    pub nayin_stage: LongevityStage,
    /// Stage of the branch relative to the pillar's stem (十干长生).
    pub stem_stage: LongevityStage,
    pub void_branches: [Branch; 2],
    pub hidden_stems: &'static [Stem],
    pub shensha: Vec<ShenShaMark>,
}

impl PillarAttributes {
    /// True iff `branch` is void in this pillar's xun.
    pub fn is_void(&self, branch: Branch) -> bool {
        self.void_branches.contains(&branch)
    }

    /// The mark for `kind`, if it was evaluated.
    pub fn mark(&self, kind: ShenSha) -> Option<&ShenShaMark> {
        self.shensha.iter().find(|m| m.kind == kind)
    }
}

/// A pillar together with its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecoratedPillar {
    pub pillar: Pillar,
    pub attributes: PillarAttributes,
}

/// Decorate with every shensha kind, stem-keyed first.
pub fn decorate(pillar: Pillar) -> DecoratedPillar {
    let kinds: Vec<ShenSha> = STEM_SHENSHA
        .iter()
        .chain(BRANCH_SHENSHA.iter())
        .copied()
        .collect();
    decorate_with(pillar, &kinds)
}

/// Decorate, evaluating only the listed shensha kinds in the given order.
pub fn decorate_with(pillar: Pillar, kinds: &[ShenSha]) -> DecoratedPillar {
    let ny = nayin(pillar);
    let attributes = PillarAttributes {
        nayin: ny,
        nayin_stage: stage_for_element(ny.element, pillar.branch()),
        stem_stage: stage_for_stem(pillar.stem(), pillar.branch()),
        void_branches: void_branches(pillar),
        hidden_stems: hidden_stems(pillar.branch()),
        shensha: kinds
            .iter()
            .map(|&kind| ShenShaMark {
                kind,
                targets: kind.targets(pillar),
            })
            .collect(),
    };
    trace!(%pillar, nayin = ny.name, "decorated pillar");
    DecoratedPillar { pillar, attributes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ding_mao() {
        let d = decorate("丁卯".parse().unwrap());
        let a = &d.attributes;
        assert_eq!(a.nayin.name, "炉中火");
        // Fire is born at 寅, so 卯 is 沐浴.
        assert_eq!(a.nayin_stage, LongevityStage::MuYu);
        // 丁 is born at 酉 and walks backward: 申 沐浴 ... 卯 病.
        assert_eq!(a.stem_stage, LongevityStage::Bing);
        assert_eq!(a.void_branches, [Branch::Xu, Branch::Hai]);
        assert_eq!(a.hidden_stems, &[Stem::Yi]);
        assert!(a.is_void(Branch::Hai));
        assert!(!a.is_void(Branch::Mao));
    }

    #[test]
    fn all_kinds_by_default() {
        let d = decorate(Pillar::from_ordinal(0));
        assert_eq!(d.attributes.shensha.len(), 18);
        assert_eq!(d.attributes.shensha[0].kind, ShenSha::TianYiGuiRen);
        assert_eq!(d.attributes.shensha[7].kind, ShenSha::YiMa);
    }

    #[test]
    fn subset_keeps_order() {
        let kinds = [ShenSha::TaoHua, ShenSha::LuShen];
        let d = decorate_with(Pillar::from_ordinal(0), &kinds);
        let got: Vec<_> = d.attributes.shensha.iter().map(|m| m.kind).collect();
        assert_eq!(got, kinds);
        assert!(d.attributes.mark(ShenSha::YiMa).is_none());
    }

    #[test]
    fn unknown_only_degrades_its_field() {
        let d = decorate("丁卯".parse().unwrap());
        let yangren = d.attributes.mark(ShenSha::YangRen).unwrap();
        assert_eq!(yangren.targets, Lookup::Unknown);
        assert!(!yangren.hits(Branch::Wu));
        let lu = d.attributes.mark(ShenSha::LuShen).unwrap();
        assert!(lu.hits(Branch::Wu));
    }

    #[test]
    fn total_over_all_pillars() {
        for p in Pillar::all() {
            let d = decorate(p);
            assert_eq!(d.pillar, p);
            assert!(!d.attributes.hidden_stems.is_empty());
        }
    }
}
