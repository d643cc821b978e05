//! Generalized elementary cellular automata.
//!
//! A row of binary cells evolves generation by generation under a rule table
//! keyed by a neighborhood of 1 to 7 cells. [`Controller`] owns the state and
//! keeps the [`EvolutionGrid`] consistent after every event.

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod rule;
pub mod start;

pub use config::Config;
pub use controller::{Controller, WaterfallInterface, hit_test_start_cell};
pub use error::{Result, WaterfallError};
pub use grid::EvolutionGrid;
pub use rule::RuleTable;
pub use start::StartVector;
