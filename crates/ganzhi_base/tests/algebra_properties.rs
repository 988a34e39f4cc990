//! Exhaustive property checks over the finite stem-branch domains.
//!
//! Every domain here is small enough to enumerate, so each property is
//! checked for all inputs rather than sampled.

use ganzhi_base::{ALL_BRANCHES, ALL_STEMS, Pillar, is_valid_pair, liunian_at};

// ---------------------------------------------------------------------------
// Pillar construction
// ---------------------------------------------------------------------------

#[test]
fn construction_succeeds_iff_parity_matches() {
    for s in ALL_STEMS {
        for b in ALL_BRANCHES {
            let same_parity = s.index() % 2 == b.index() % 2;
            assert_eq!(Pillar::new(s, b).is_ok(), same_parity, "{s}{b}");
            assert_eq!(is_valid_pair(s, b), same_parity);
        }
    }
}

#[test]
fn ordinal_matches_both_parts() {
    for p in Pillar::all() {
        let n = p.ordinal();
        assert_eq!(n % 10, p.stem().index(), "{p}");
        assert_eq!(n % 12, p.branch().index(), "{p}");
        assert_eq!(Pillar::from_ordinal(n as i64), p);
    }
}

#[test]
fn text_round_trip() {
    for p in Pillar::all() {
        assert_eq!(p.to_string().parse::<Pillar>(), Ok(p));
    }
}

// ---------------------------------------------------------------------------
// Offsets
// ---------------------------------------------------------------------------

#[test]
fn offset_inverse_and_period() {
    for p in Pillar::all() {
        for n in -150..=150 {
            let q = p.offset(n);
            assert_eq!(q.offset(-n), p, "{p} offset {n}");
            assert_eq!(q.ordinal() as i64, (p.ordinal() as i64 + n).rem_euclid(60));
        }
        assert_eq!(p.offset(60), p);
        assert_eq!(p.offset(-60), p);
    }
}

#[test]
fn stem_and_branch_offsets_are_floored() {
    for s in ALL_STEMS {
        for n in -25..=25 {
            let expected = (s.index() as i64 + n).rem_euclid(10);
            assert_eq!(s.offset(n).index() as i64, expected);
        }
    }
    for b in ALL_BRANCHES {
        for n in -30..=30 {
            let expected = (b.index() as i64 + n).rem_euclid(12);
            assert_eq!(b.offset(n).index() as i64, expected);
        }
    }
}

// ---------------------------------------------------------------------------
// Year pillars
// ---------------------------------------------------------------------------

#[test]
fn year_pillar_always_valid_and_periodic() {
    for y in -3000..3000 {
        let p = liunian_at(y);
        assert!(is_valid_pair(p.stem(), p.branch()), "year {y}");
        assert_eq!(liunian_at(y + 60), p);
        assert_eq!(liunian_at(y + 1), p.offset(1));
    }
}

#[test]
fn year_1984_is_jia_zi() {
    assert_eq!(liunian_at(1984).to_string(), "甲子");
}
