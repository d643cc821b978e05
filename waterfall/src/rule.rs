// rule.rs - Neighborhood to output mapping

use num_bigint::BigUint;

use crate::config::{MAX_BITS, MIN_BITS};

/// Maps every neighborhood pattern of `bits` cells to an output bit.
///
/// Storage only ever grows: shrinking the bit-width hides the upper entries
/// without clearing them, so they reappear when the width grows back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    bits: usize,
    entries: Vec<bool>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(MIN_BITS)
    }
}

impl RuleTable {
    pub fn new(bits: usize) -> Self {
        let mut table = Self {
            bits: MIN_BITS,
            entries: Vec::new(),
        };
        table.set_bits(bits);
        table
    }

    /// Neighborhood window width.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Number of neighborhood patterns, `2^bits`.
    pub fn size(&self) -> usize {
        1 << self.bits
    }

    /// Re-scopes the visible window to `2^bits` entries.
    pub fn set_bits(&mut self, bits: usize) {
        assert!(
            (MIN_BITS..=MAX_BITS).contains(&bits),
            "bit-width {} out of range",
            bits
        );
        self.bits = bits;
        let size = self.size();
        if self.entries.len() < size {
            self.entries.resize(size, false);
        }
    }

    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.size(), "rule index {} out of range", index);
        self.entries[index]
    }

    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.size(), "rule index {} out of range", index);
        self.entries[index] = value;
    }

    /// Active window, indexed by neighborhood value.
    pub fn entries(&self) -> &[bool] {
        &self.entries[..self.size()]
    }

    /// Neighborhood cells for entry `index`, leftmost (most significant) first.
    pub fn pattern(&self, index: usize) -> Vec<bool> {
        assert!(index < self.size(), "rule index {} out of range", index);
        (0..self.bits)
            .rev()
            .map(|bit| (index >> bit) & 1 == 1)
            .collect()
    }

    /// The table read as a binary number with entry 0 as the least significant bit.
    pub fn number(&self) -> BigUint {
        let mut bytes = vec![0u8; self.size().div_ceil(8)];
        for (i, _) in self.entries().iter().enumerate().filter(|(_, on)| **on) {
            bytes[i / 8] |= 1 << (i % 8);
        }
        BigUint::from_bytes_le(&bytes)
    }
}
