// grid/mod.rs - The width x length evolution grid

use log::trace;

use crate::rule::RuleTable;
use crate::start::StartVector;

#[cfg(test)]
mod tests;

/// Every generation of the automaton, stored row-major by generation.
///
/// Row 0 is copied from the [`StartVector`]; each later row is a pure
/// function of the row above it and the [`RuleTable`]. Recomputation is
/// always a full replace of rows `1..length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionGrid {
    width: usize,
    length: usize,
    cells: Vec<bool>,
}

impl EvolutionGrid {
    /// Allocates a `width` x `length` grid and fully computes it.
    pub fn new(width: usize, length: usize, start: &StartVector, rule: &RuleTable) -> Self {
        assert!(width > 0, "width must be positive");
        assert!(length > 0, "length must be positive");
        let mut grid = Self {
            width,
            length,
            cells: vec![false; width * length],
        };
        grid.recompute(start, rule);
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Reallocates and recomputes if either dimension changed. Returns whether
    /// anything happened.
    pub fn set_dimensions(
        &mut self,
        width: usize,
        length: usize,
        start: &StartVector,
        rule: &RuleTable,
    ) -> bool {
        assert!(width > 0, "width must be positive");
        assert!(length > 0, "length must be positive");
        if width == self.width && length == self.length {
            return false;
        }
        self.width = width;
        self.length = length;
        self.cells = vec![false; width * length];
        self.recompute(start, rule);
        true
    }

    /// Copies the start prefix into row 0 and recomputes every later row.
    pub fn recompute(&mut self, start: &StartVector, rule: &RuleTable) {
        self.cells[..self.width].copy_from_slice(start.prefix(self.width));
        self.evolve(rule);
    }

    /// Overwrites a single generation-0 cell without recomputing.
    pub fn set_seed(&mut self, x: usize, alive: bool) {
        assert!(x < self.width, "column {} out of range", x);
        self.cells[x] = alive;
    }

    /// Recomputes rows `1..length` from row 0.
    pub fn evolve(&mut self, rule: &RuleTable) {
        let width = self.width;
        for generation in 1..self.length {
            let (done, rest) = self.cells.split_at_mut(generation * width);
            let prev = &done[(generation - 1) * width..];
            next_row(prev, &mut rest[..width], rule);
        }
        trace!(
            "recomputed {} generations of {} cells with rule {}",
            self.length - 1,
            width,
            rule.number()
        );
    }

    pub fn get(&self, x: usize, generation: usize) -> bool {
        assert!(x < self.width && generation < self.length);
        self.cells[generation * self.width + x]
    }

    pub fn row(&self, generation: usize) -> &[bool] {
        assert!(generation < self.length);
        let from = generation * self.width;
        &self.cells[from..from + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Live cells over the whole grid.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

/// Offset of the window's leftmost column from the target column.
pub fn window_offset(bits: usize) -> usize {
    (bits - 1) / 2
}

/// Neighborhood value for column `j` of the generation after `row`.
///
/// The window covers columns `j - d ..= j - d + bits - 1` where `d` is
/// [`window_offset`]. The rightmost column is the least significant bit.
/// Columns outside the row read as dead.
pub fn neighborhood_index(row: &[bool], j: usize, bits: usize) -> usize {
    let left = j as isize - window_offset(bits) as isize;
    let mut index = 0;
    for k in left..left + bits as isize {
        index <<= 1;
        if k >= 0 && (k as usize) < row.len() && row[k as usize] {
            index |= 1;
        }
    }
    index
}

/// Writes the generation after `prev` into `next`.
pub fn next_row(prev: &[bool], next: &mut [bool], rule: &RuleTable) {
    debug_assert_eq!(prev.len(), next.len());
    let bits = rule.bits();
    for (j, cell) in next.iter_mut().enumerate() {
        *cell = rule.get(neighborhood_index(prev, j, bits));
    }
}
