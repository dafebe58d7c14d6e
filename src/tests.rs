//! General library tests.

#![cfg(test)]

use crate::prelude::*;

/// A multitude of sets for general-purpose testing.
///
/// Every entry should be normalized, i.e. ascending with `", "` separators.
const SUITE: &[&str] = &[
    "{}",
    "{-10, 10}",
    "{-4, -3, -1}",
    "{-2, 0, 2, 4}",
    "{0}",
    "{1, 2, 3, 4, 5}",
    "{7}",
];

/// Our [`SUITE`] as `(&str, IntSet)` pairs.
fn suite() -> impl Iterator<Item = (&'static str, IntSet)> {
    SUITE.iter().map(|&str| (str, str.parse().unwrap()))
}

/// Verify round-trip conversion between a set and a string.
fn roundtrip(set: &IntSet, str: &str) {
    assert_eq!(set, &str.parse().unwrap());
    assert_eq!(set.to_string(), str);
}

/// Test that our [`SUITE`] round-trips.
#[test]
fn test_suite() {
    for (str, set) in suite() {
        roundtrip(&set, str);
    }
}

/// Test the inclusion–exclusion identity |x ∪ y| + |x ∩ y| = |x| + |y|.
#[test]
fn union_inter_card() {
    for (i, (_, fst)) in suite().enumerate() {
        for (j, (_, snd)) in suite().enumerate() {
            let union = fst.clone().union(snd.clone());
            let inter = fst.clone().inter(snd.clone());

            assert_eq!(
                union.card() + inter.card(),
                fst.card() + snd.card(),
                "inclusion-exclusion fail at {i}, {j}: {fst} | {snd}"
            );
            for set in [&fst, &snd] {
                assert!(
                    set.subset(&union),
                    "union fail at {i}, {j}: {set} not a subset of {union}"
                );
                assert!(
                    inter.subset(set),
                    "intersection fail at {i}, {j}: {inter} not a subset of {set}"
                );
            }
        }
    }
}

/// Test that the difference and intersection partition the left operand.
#[test]
fn diff_partition() {
    for (i, (_, fst)) in suite().enumerate() {
        for (j, (_, snd)) in suite().enumerate() {
            let diff = fst.clone().diff(snd.clone());
            let inter = fst.clone().inter(snd.clone());

            assert!(
                diff.clone().inter(inter.clone()).is_empty(),
                "overlap fail at {i}, {j}: {fst} | {snd}"
            );
            assert_eq!(
                diff.union(inter),
                fst,
                "partition fail at {i}, {j}: {fst} | {snd}"
            );
        }
    }
}

/// Test |x × y| = |x| · |y|, and that every pair projects into the operands.
#[test]
fn prod_card() {
    for (i, (_, fst)) in suite().enumerate() {
        for (j, (_, snd)) in suite().enumerate() {
            let prod = fst.prod(&snd);

            assert_eq!(
                prod.card(),
                fst.card() * snd.card(),
                "product cardinality fail at {i}, {j}: {fst} | {snd}"
            );
            for pair in &prod {
                assert!(fst.contains(pair.fst()) && snd.contains(pair.snd()));
                assert!(prod.contains(*pair));
            }
        }
    }
}

/// Test [`IntSet::union_iter`] over the whole suite.
#[test]
fn union_iter() {
    let all = IntSet::union_iter(suite().map(|(_, set)| set));
    for (_, set) in suite() {
        assert!(set.subset(&all));
    }
    for n in all.iter() {
        assert!(suite().any(|(_, set)| set.contains(n)));
    }
}

/// Test the operation bundle against the lesson's sets.
#[test]
fn lesson_scenario() {
    let (s, a) = sample_sets();
    assert_eq!(s.to_string(), "{0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10}");
    assert_eq!(a.to_string(), "{5, 6, 7, 8, 9, 10, 11, 12, 13, 14}");

    let ops = SetOps::new(&s, &a);
    assert_eq!(ops.union, IntSet::from_range(0..15));
    assert_eq!(ops.difference, IntSet::from_range(0..5));
    assert_eq!(ops.intersection, IntSet::from_range(5..11));
}
