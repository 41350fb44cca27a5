//! Integration tests for the fixed house relations.
//!
//! Pure-table tests (no data files needed).

use std::collections::HashSet;

use tuhoa_base::{ALL_BRANCHES, Branch, TRIADIC_GROUPS, opposite, paired, triadic};

#[test]
fn opposite_is_involution() {
    for b in ALL_BRANCHES {
        assert_eq!(opposite(opposite(b)), b, "opposite of opposite of {b}");
        assert_ne!(opposite(b), b);
    }
}

#[test]
fn paired_is_involution() {
    for b in ALL_BRANCHES {
        assert_eq!(paired(paired(b)), b, "paired of paired of {b}");
        assert_ne!(paired(b), b);
    }
}

#[test]
fn known_pairs() {
    assert_eq!(opposite(Branch::Ty), Branch::Ngo);
    assert_eq!(opposite(Branch::Ti), Branch::Hoi);
    assert_eq!(paired(Branch::Ty), Branch::Suu);
    assert_eq!(paired(Branch::Dan), Branch::Hoi);
    assert_eq!(paired(Branch::Ti), Branch::Than);
}

#[test]
fn triadic_excludes_self_and_has_two() {
    for b in ALL_BRANCHES {
        let t = triadic(b);
        assert!(!t.contains(&b), "{b} in its own triadic set");
        assert_ne!(t[0], t[1], "duplicate partner for {b}");
    }
}

#[test]
fn triadic_partners_point_back() {
    for b in ALL_BRANCHES {
        for p in triadic(b) {
            assert!(triadic(p).contains(&b), "{p} does not list {b}");
        }
    }
}

#[test]
fn triadic_groups_partition_all_12() {
    let mut seen = HashSet::new();
    for group in TRIADIC_GROUPS {
        for b in group {
            assert!(seen.insert(b), "{b} appears in two groups");
            let mut expect: Vec<Branch> = group.iter().copied().filter(|x| *x != b).collect();
            let mut got = triadic(b).to_vec();
            expect.sort();
            got.sort();
            assert_eq!(got, expect, "triadic partners of {b}");
        }
    }
    assert_eq!(seen.len(), 12);
}
