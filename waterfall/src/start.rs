// start.rs - Persisted generation-0 row

use crate::config::MAX_WIDTH;

/// The initial row, addressable up to its fixed capacity regardless of the
/// current grid width. Cells past the active width stay latent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartVector {
    cells: Vec<bool>,
}

impl Default for StartVector {
    fn default() -> Self {
        Self::with_capacity(MAX_WIDTH)
    }
}

impl StartVector {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: vec![false; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, x: usize) -> bool {
        assert!(x < self.capacity(), "start cell {} out of range", x);
        self.cells[x]
    }

    /// Flips cell `x` and returns its new value.
    pub fn toggle(&mut self, x: usize) -> bool {
        assert!(x < self.capacity(), "start cell {} out of range", x);
        self.cells[x] = !self.cells[x];
        self.cells[x]
    }

    /// The first `width` cells.
    pub fn prefix(&self, width: usize) -> &[bool] {
        &self.cells[..width]
    }
}
