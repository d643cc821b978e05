// config.rs - Limits and startup configuration for the waterfall

use crate::{Result, WaterfallError};

// Compile-time limits, enforced at the controller boundary
pub const MIN_BITS: usize = 1;                        // Smallest neighborhood window
pub const MAX_BITS: usize = 7;                        // Largest neighborhood window (128 rule entries)
pub const MAX_WIDTH: usize = 257;                     // Columns, also the start vector capacity
pub const MAX_LENGTH: usize = 10240;                  // Generations
pub const CELL_SIZE: f32 = 10.0;                      // Pixels per cell in the renderer

/// Startup values for a [`Controller`](crate::Controller).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub bits: usize,
    pub width: usize,
    pub length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bits: 3,
            width: 32,
            length: 32,
        }
    }
}

impl Config {
    pub fn with_bits(mut self, bits: usize) -> Self {
        self.bits = bits;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Checks every field against the limits above.
    pub fn validate(&self) -> Result<()> {
        check_bits(self.bits)?;
        check_width(self.width)?;
        check_length(self.length)
    }
}

pub(crate) fn check_bits(bits: usize) -> Result<()> {
    if (MIN_BITS..=MAX_BITS).contains(&bits) {
        Ok(())
    } else {
        Err(WaterfallError::BitsOutOfRange { bits })
    }
}

pub(crate) fn check_width(width: usize) -> Result<()> {
    if (1..=MAX_WIDTH).contains(&width) {
        Ok(())
    } else {
        Err(WaterfallError::WidthOutOfRange { width })
    }
}

pub(crate) fn check_length(length: usize) -> Result<()> {
    if (1..=MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(WaterfallError::LengthOutOfRange { length })
    }
}
