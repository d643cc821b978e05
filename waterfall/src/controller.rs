// controller.rs - Owns the automaton state and turns UI events into recomputes

use log::{debug, info, warn};
use num_bigint::BigUint;

use crate::config::{self, CELL_SIZE, Config};
use crate::grid::EvolutionGrid;
use crate::rule::RuleTable;
use crate::start::StartVector;
use crate::{Result, WaterfallError};

/// Events the front-end forwards. Every call leaves the grid consistent.
pub trait WaterfallInterface {
    fn change_bits(&mut self, bits: usize) -> Result<()>;
    fn set_rule_entry(&mut self, index: usize, value: bool) -> Result<()>;
    fn toggle_rule(&mut self, index: usize) -> Result<bool>;
    fn toggle_start_cell(&mut self, x: usize) -> Result<bool>;
    fn resize(&mut self, width: usize, length: usize) -> Result<()>;
}

/// Holds the rule table, start row and grid for one automaton.
#[derive(Debug, Clone)]
pub struct Controller {
    rule: RuleTable,
    start: StartVector,
    grid: EvolutionGrid,
}

impl Controller {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let rule = RuleTable::default();
        let start = StartVector::default();
        let grid = EvolutionGrid::new(config.width, config.length, &start, &rule);
        let mut controller = Self { rule, start, grid };
        controller.change_bits(config.bits)?;
        info!(
            "waterfall ready: {} bits, {}x{} cells",
            config.bits, config.width, config.length
        );
        Ok(controller)
    }

    pub fn bits(&self) -> usize {
        self.rule.bits()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn length(&self) -> usize {
        self.grid.length()
    }

    pub fn rule_table(&self) -> &RuleTable {
        &self.rule
    }

    pub fn rule_number(&self) -> BigUint {
        self.rule.number()
    }

    pub fn grid(&self) -> &EvolutionGrid {
        &self.grid
    }

    /// Start cells inside the current width.
    pub fn visible_start(&self) -> &[bool] {
        self.start.prefix(self.grid.width())
    }

    /// Handles a click at pixel `(px, py)` on the grid. Returns the toggled
    /// column, if the click landed on a generation-0 cell.
    pub fn click(&mut self, px: f32, py: f32) -> Result<Option<usize>> {
        match hit_test_start_cell(px, py, CELL_SIZE, self.grid.width()) {
            Some(x) => {
                self.toggle_start_cell(x)?;
                Ok(Some(x))
            }
            None => Ok(None),
        }
    }

    fn recompute(&mut self) {
        self.grid.recompute(&self.start, &self.rule);
    }

    fn check_rule_index(&self, index: usize) -> Result<()> {
        let size = self.rule.size();
        if index < size {
            Ok(())
        } else {
            warn!("ignoring rule index {} (table size {})", index, size);
            Err(WaterfallError::RuleIndexOutOfRange { index, size })
        }
    }
}

impl WaterfallInterface for Controller {
    fn change_bits(&mut self, bits: usize) -> Result<()> {
        config::check_bits(bits).inspect_err(|e| warn!("{}", e))?;
        debug!("bit-width {} -> {}", self.rule.bits(), bits);
        self.rule.set_bits(bits);
        self.recompute();
        Ok(())
    }

    fn set_rule_entry(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_rule_index(index)?;
        debug!("rule entry {} = {}", index, value);
        self.rule.set(index, value);
        self.recompute();
        Ok(())
    }

    fn toggle_rule(&mut self, index: usize) -> Result<bool> {
        self.check_rule_index(index)?;
        let value = !self.rule.get(index);
        self.set_rule_entry(index, value)?;
        Ok(value)
    }

    fn toggle_start_cell(&mut self, x: usize) -> Result<bool> {
        let width = self.grid.width();
        if x >= width {
            warn!("ignoring start cell {} (width {})", x, width);
            return Err(WaterfallError::StartCellOutOfRange { x, width });
        }
        let alive = self.start.toggle(x);
        debug!("start cell {} = {}", x, alive);
        self.grid.set_seed(x, alive);
        self.grid.evolve(&self.rule);
        Ok(alive)
    }

    fn resize(&mut self, width: usize, length: usize) -> Result<()> {
        config::check_width(width).inspect_err(|e| warn!("{}", e))?;
        config::check_length(length).inspect_err(|e| warn!("{}", e))?;
        if self.grid.set_dimensions(width, length, &self.start, &self.rule) {
            debug!("resized to {}x{}", width, length);
        }
        Ok(())
    }
}

/// Maps a pixel position to a start column. Only the generation-0 band
/// accepts clicks, and a click exactly on a cell's left grid line misses.
pub fn hit_test_start_cell(px: f32, py: f32, cell_size: f32, width: usize) -> Option<usize> {
    if px < 0.0 || py < 0.0 || py > cell_size {
        return None;
    }
    let x = (px / cell_size).floor() as usize;
    if x < width && px != x as f32 * cell_size {
        Some(x)
    } else {
        None
    }
}
