//! Xunkong (旬空): void branches of a decade group.
//!
//! The 60-cycle divides into six xun of ten pillars, each led by a 甲 pillar.
//! Ten stems cover only ten of the twelve branches, so the two branches
//! following the tenth member are "void" for every pillar of that xun.

use crate::branch::Branch;
use crate::pillar::Pillar;

/// The 甲 pillar that leads the xun containing `pillar`.
pub const fn xun_leader(pillar: Pillar) -> Pillar {
    pillar.offset(-(pillar.stem().index() as i64))
}

/// The two void branches of the pillar's xun, in cycle order.
pub const fn void_branches(pillar: Pillar) -> [Branch; 2] {
    let lead = xun_leader(pillar).branch();
    [lead.offset(10), lead.offset(11)]
}

/// True iff `branch` is void within the pillar's xun.
pub fn is_void(pillar: Pillar, branch: Branch) -> bool {
    void_branches(pillar).contains(&branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Pillar {
        s.parse().unwrap()
    }

    #[test]
    fn six_xun() {
        assert_eq!(void_branches(p("甲子")), [Branch::Xu, Branch::Hai]);
        assert_eq!(void_branches(p("甲戌")), [Branch::Shen, Branch::You]);
        assert_eq!(void_branches(p("甲申")), [Branch::Wu, Branch::Wei]);
        assert_eq!(void_branches(p("甲午")), [Branch::Chen, Branch::Si]);
        assert_eq!(void_branches(p("甲辰")), [Branch::Yin, Branch::Mao]);
        assert_eq!(void_branches(p("甲寅")), [Branch::Zi, Branch::Chou]);
    }

    #[test]
    fn members_share_leader() {
        assert_eq!(xun_leader(p("丁卯")), p("甲子"));
        assert_eq!(xun_leader(p("癸酉")), p("甲子"));
        assert_eq!(xun_leader(p("癸亥")), p("甲寅"));
        assert_eq!(void_branches(p("庚寅")), [Branch::Wu, Branch::Wei]);
    }

    #[test]
    fn members_never_void_themselves() {
        for pl in Pillar::all() {
            assert!(!is_void(pl, pl.branch()), "{pl}");
        }
    }
}
