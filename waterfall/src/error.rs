//! Errors raised when the controller rejects an input.

use thiserror::Error;

use crate::config::{MAX_BITS, MAX_LENGTH, MAX_WIDTH, MIN_BITS};

/// Out-of-range values caught at the controller boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaterfallError {
    /// Neighborhood bit-width outside the supported range.
    #[error("bit-width {bits} out of range ({}..={})", MIN_BITS, MAX_BITS)]
    BitsOutOfRange {
        /// Requested bit-width.
        bits: usize,
    },

    /// Grid width outside the supported range.
    #[error("width {width} out of range (1..={})", MAX_WIDTH)]
    WidthOutOfRange {
        /// Requested width.
        width: usize,
    },

    /// Grid length outside the supported range.
    #[error("length {length} out of range (1..={})", MAX_LENGTH)]
    LengthOutOfRange {
        /// Requested length.
        length: usize,
    },

    /// Rule entry index outside the active table.
    #[error("rule index {index} out of range (table size {size})")]
    RuleIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current table size.
        size: usize,
    },

    /// Start cell outside the active grid width.
    #[error("start cell {x} out of range (width {width})")]
    StartCellOutOfRange {
        /// Requested column.
        x: usize,
        /// Current grid width.
        width: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WaterfallError>;
