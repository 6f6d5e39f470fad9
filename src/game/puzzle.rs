//! Single-owner puzzle session
//!
//! Holds the board being played together with its reachable and solved-path
//! sets. Every accepted move turns one tile and recomputes both sets, so readers
//! never see analysis for a stale board.

use log::{debug, info, trace};

use crate::algorithm::cellset::CellSet;
use crate::algorithm::connectivity::reachable_from_start;
use crate::algorithm::generator::{GeneratorConfig, generate};
use crate::algorithm::solver::solved_path;
use crate::io::error::{PuzzleError, Result};
use crate::spatial::grid::{CellKey, Grid};

/// Current puzzle state and its cached analysis
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    config: GeneratorConfig,
    seed: Option<u64>,
    moves: u32,
    reachable: CellSet,
    solved: CellSet,
}

impl Puzzle {
    /// Generate a fresh board
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn generate(config: GeneratorConfig) -> Result<Self> {
        let generation = generate(&config)?;
        info!(
            "New {}x{} puzzle from seed {}",
            config.rows, config.cols, generation.seed
        );
        Ok(Self::from_grid(
            generation.grid,
            config,
            Some(generation.seed),
            0,
        ))
    }

    /// Resume play on an existing board
    ///
    /// `config` records the parameters used for later `new_board` calls; its
    /// dimensions are replaced by the grid's own.
    pub fn from_grid(grid: Grid, config: GeneratorConfig, seed: Option<u64>, moves: u32) -> Self {
        let config = GeneratorConfig {
            rows: grid.rows(),
            cols: grid.cols(),
            seed,
            ..config
        };
        let reachable = reachable_from_start(&grid);
        let solved = solved_path(&grid);

        Self {
            grid,
            config,
            seed,
            moves,
            reachable,
            solved,
        }
    }

    /// Turn the tile at `key` one quarter clockwise
    ///
    /// Returns `false` without counting a move when the cell is locked: blocks
    /// never turn and the start and end stubs are fixed.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is outside the board
    pub fn rotate(&mut self, key: CellKey) -> Result<bool> {
        if !self.grid.contains(key) {
            return Err(PuzzleError::CellOutOfBounds {
                row: key.row,
                col: key.col,
                grid_dimensions: (self.grid.rows(), self.grid.cols()),
            });
        }

        if self.is_locked(key) {
            trace!("Ignoring move on locked cell {key}");
            return Ok(false);
        }

        let Some(tile) = self.grid.rotate(key)? else {
            trace!("Ignoring move on block {key}");
            return Ok(false);
        };

        self.moves += 1;
        self.refresh();
        trace!(
            "Move {}: {key} now {:?} rotation {}, {} reachable{}",
            self.moves,
            tile.kind(),
            tile.rotation(),
            self.reachable.len(),
            if self.is_solved() { ", solved" } else { "" }
        );

        Ok(true)
    }

    /// Replace the board wholesale with a newly generated one
    ///
    /// Uses the stored dimensions and block fraction. The move counter resets.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored configuration fails validation
    pub fn new_board(&mut self, seed: Option<u64>) -> Result<()> {
        let config = GeneratorConfig {
            seed,
            ..self.config
        };
        *self = Self::generate(config)?;
        debug!("Board replaced");
        Ok(())
    }

    /// Whether `key` is an endpoint, which players may not turn
    pub fn is_locked(&self, key: CellKey) -> bool {
        key == self.grid.start() || key == self.grid.end()
    }

    /// Current board
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cells joined to the start cell
    pub const fn reachable(&self) -> &CellSet {
        &self.reachable
    }

    /// Cells on the start-to-end path; empty until solved
    pub const fn solved_path(&self) -> &CellSet {
        &self.solved
    }

    /// Whether the start and end are joined
    pub fn is_solved(&self) -> bool {
        !self.solved.is_empty()
    }

    /// Accepted moves since the board was created
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Seed the board was generated from, when known
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Parameters used for new boards
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn refresh(&mut self) {
        self.reachable = reachable_from_start(&self.grid);
        self.solved = solved_path(&self.grid);
    }
}
