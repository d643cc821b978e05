use num_bigint::BigUint;
use proptest::prelude::*;

use super::*;
use crate::config::{MAX_BITS, MIN_BITS};

fn rule_from(bits: usize, on: &[usize]) -> RuleTable {
    let mut rule = RuleTable::new(bits);
    for &i in on {
        rule.set(i, true);
    }
    rule
}

fn start_from(cells: &[bool]) -> StartVector {
    let mut start = StartVector::default();
    for (x, _) in cells.iter().enumerate().filter(|(_, alive)| **alive) {
        start.toggle(x);
    }
    start
}

fn bools(bits: &[u8]) -> Vec<bool> {
    bits.iter().map(|&b| b == 1).collect()
}

/// Straight evaluation of one cell: walks the window from its highest
/// column down, doubling the weight each step.
fn reference_cell(prev: &[bool], j: usize, rule: &RuleTable) -> bool {
    let bits = rule.bits() as isize;
    let d = (bits - 1) / 2;
    let j = j as isize;
    let mut index = 0;
    let mut mask = 1;
    let mut k = j - d + bits - 1;
    while k >= j - d {
        if 0 <= k && (k as usize) < prev.len() && prev[k as usize] {
            index |= mask;
        }
        mask <<= 1;
        k -= 1;
    }
    rule.get(index)
}

#[test]
fn test_xor_fixed_point() {
    let rule = rule_from(2, &[1, 2]);
    assert_eq!(rule.number(), BigUint::from(6u32));
    let start = start_from(&bools(&[1, 0, 0, 0, 0]));
    let grid = EvolutionGrid::new(5, 3, &start, &rule);
    for generation in 0..3 {
        assert_eq!(grid.row(generation), bools(&[1, 0, 0, 0, 0]).as_slice());
    }
}

#[test]
fn test_left_boundary_reads_dead() {
    // Only pattern 011 survives, so a live virtual column -1 would kill cell 0.
    let rule = rule_from(3, &[3]);
    let start = start_from(&bools(&[1, 1, 0, 0, 1]));
    let grid = EvolutionGrid::new(5, 2, &start, &rule);
    assert_eq!(grid.row(1), bools(&[1, 0, 0, 0, 0]).as_slice());
}

#[test]
fn test_rule_90_from_single_cell() {
    let rule = rule_from(3, &[1, 3, 4, 6]);
    assert_eq!(rule.number(), BigUint::from(90u32));
    let start = start_from(&bools(&[0, 0, 0, 0, 1, 0, 0, 0, 0]));
    let grid = EvolutionGrid::new(9, 3, &start, &rule);
    assert_eq!(grid.row(1), bools(&[0, 0, 0, 1, 0, 1, 0, 0, 0]).as_slice());
    assert_eq!(grid.row(2), bools(&[0, 0, 1, 0, 0, 0, 1, 0, 0]).as_slice());
    assert_eq!(grid.population(), 5);
}

#[test]
fn test_neighborhood_index() {
    let row = bools(&[1, 0, 1, 1]);
    // bits = 1: just the cell itself.
    assert_eq!(neighborhood_index(&row, 0, 1), 1);
    assert_eq!(neighborhood_index(&row, 1, 1), 0);
    // bits = 2: window [j, j + 1], no offset.
    assert_eq!(window_offset(2), 0);
    assert_eq!(neighborhood_index(&row, 1, 2), 0b01);
    assert_eq!(neighborhood_index(&row, 3, 2), 0b10);
    // bits = 4: window [j - 1, j + 2], offset toward lower columns.
    assert_eq!(window_offset(4), 1);
    assert_eq!(neighborhood_index(&row, 0, 4), 0b0101);
    assert_eq!(neighborhood_index(&row, 3, 4), 0b1100);
    // bits = 7: window [j - 3, j + 3].
    assert_eq!(neighborhood_index(&row, 0, 7), 0b0001011);
}

#[test]
fn test_set_dimensions_same_size_is_noop() {
    let rule = rule_from(3, &[1, 3, 4, 6]);
    let start = start_from(&bools(&[0, 1, 1, 0, 1]));
    let mut grid = EvolutionGrid::new(5, 8, &start, &rule);
    let before = grid.clone();

    // A stale rule must not leak in through a no-op resize.
    let other = rule_from(3, &[0, 7]);
    assert!(!grid.set_dimensions(5, 8, &start, &other));
    assert_eq!(grid, before);
}

#[test]
fn test_set_dimensions_reseeds_from_start() {
    let rule = rule_from(3, &[1, 3, 4, 6]);
    let mut start = start_from(&bools(&[1, 0, 0, 0, 0, 0, 1]));
    let mut grid = EvolutionGrid::new(4, 4, &start, &rule);
    assert_eq!(grid.row(0), bools(&[1, 0, 0, 0]).as_slice());

    start.toggle(5);
    assert!(grid.set_dimensions(7, 2, &start, &rule));
    assert_eq!((grid.width(), grid.length()), (7, 2));
    assert_eq!(grid.row(0), bools(&[1, 0, 0, 0, 0, 1, 1]).as_slice());
    assert_eq!(grid.rows().count(), 2);
}

#[test]
fn test_single_generation_grid() {
    let rule = rule_from(1, &[0, 1]);
    let start = start_from(&bools(&[1, 0, 1]));
    let grid = EvolutionGrid::new(3, 1, &start, &rule);
    assert_eq!(grid.rows().count(), 1);
    assert_eq!(grid.row(0), bools(&[1, 0, 1]).as_slice());
}

#[test]
fn test_seed_then_evolve() {
    let rule = rule_from(2, &[1, 2]);
    let start = StartVector::default();
    let mut grid = EvolutionGrid::new(4, 3, &start, &rule);
    assert_eq!(grid.population(), 0);

    grid.set_seed(3, true);
    grid.evolve(&rule);
    assert_eq!(grid.row(1), bools(&[0, 0, 1, 1]).as_slice());
    assert_eq!(grid.row(2), bools(&[0, 1, 0, 1]).as_slice());
}

fn arb_setup() -> impl Strategy<Value = (usize, Vec<bool>, Vec<bool>, usize, usize)> {
    (
        MIN_BITS..=MAX_BITS,
        prop::collection::vec(any::<bool>(), 128),
        prop::collection::vec(any::<bool>(), 40),
        1..40usize,
        1..30usize,
    )
}

proptest! {
    /// Compares every computed cell against the reference evaluation.
    #[test]
    fn test_matches_reference((bits, entries, seed, width, length) in arb_setup()) {
        let mut rule = RuleTable::new(bits);
        for i in 0..rule.size() {
            rule.set(i, entries[i]);
        }
        let start = start_from(&seed);
        let grid = EvolutionGrid::new(width, length, &start, &rule);

        prop_assert_eq!(grid.row(0), &seed[..width]);
        for generation in 1..length {
            let prev = grid.row(generation - 1);
            for j in 0..width {
                prop_assert_eq!(grid.get(j, generation), reference_cell(prev, j, &rule));
            }
        }
    }

    /// Recomputing with unchanged inputs gives an identical grid.
    #[test]
    fn test_recompute_is_deterministic((bits, entries, seed, width, length) in arb_setup()) {
        let mut rule = RuleTable::new(bits);
        for i in 0..rule.size() {
            rule.set(i, entries[i]);
        }
        let start = start_from(&seed);
        let mut grid = EvolutionGrid::new(width, length, &start, &rule);
        let first = grid.clone();
        grid.recompute(&start, &rule);
        prop_assert_eq!(&grid, &first);
        grid.evolve(&rule);
        prop_assert_eq!(&grid, &first);
    }
}
