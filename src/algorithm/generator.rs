//! Seeded board generation pipeline
//!
//! Runs the maze builder and the tile synthesizer from a single `StdRng`, so a
//! seed reproduces obstacle sampling, carve order and rotation scrambling.

use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::builder::{MazeBuilder, MazeLayout};
use crate::algorithm::synthesis::{canonical_grid, synthesize};
use crate::io::configuration::{
    DEFAULT_BLOCK_FRACTION, DEFAULT_COLS, DEFAULT_ROWS, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Grid;

/// Board generation parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Number of rows (at least 1)
    pub rows: usize,
    /// Number of columns (at least 1)
    pub cols: usize,
    /// Share of cells to turn into obstacles
    pub block_fraction: f64,
    /// Seed for reproducible boards; drawn from the thread RNG when absent
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            block_fraction: DEFAULT_BLOCK_FRACTION,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Check the board dimensions and block fraction
    ///
    /// Any finite block fraction is accepted: out-of-range values are clamped
    /// by the builder and the open-board fallback keeps the board solvable.
    /// NaN and infinities are rejected since save files cannot store them.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or above `MAX_GRID_DIMENSION`,
    /// or if the block fraction is not finite
    pub fn validate(&self) -> Result<()> {
        if !self.block_fraction.is_finite() {
            return Err(invalid_parameter(
                "block_fraction",
                &self.block_fraction,
                &"must be a finite number",
            ));
        }

        for (parameter, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}

/// A generated board with the layout it was synthesized from
#[derive(Debug, Clone)]
pub struct Generation {
    /// Scrambled, playable grid
    pub grid: Grid,
    /// Carved layout behind the grid
    pub layout: MazeLayout,
    /// Seed that reproduces this board
    pub seed: u64,
}

impl Generation {
    /// The carved maze with solved rotations, before scrambling
    ///
    /// # Errors
    ///
    /// Returns an error if the layout has no cells
    pub fn canonical_grid(&self) -> Result<Grid> {
        canonical_grid(&self.layout)
    }
}

/// Run the full pipeline for `config`
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn generate(config: &GeneratorConfig) -> Result<Generation> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| {
        let drawn = rand::rng().random::<u64>();
        info!("No seed given, using {drawn}");
        drawn
    });
    let mut rng = StdRng::seed_from_u64(seed);

    let layout = MazeBuilder::new(config.rows, config.cols, config.block_fraction).build(&mut rng);
    let grid = synthesize(&layout, &mut rng)?;

    debug!(
        "Generated {}x{} board from seed {seed} ({} obstacles, {} attempts{})",
        config.rows,
        config.cols,
        layout.obstacles.len(),
        layout.attempts,
        if layout.used_fallback { ", open fallback" } else { "" }
    );

    Ok(Generation { grid, layout, seed })
}

/// Generate a playable grid
///
/// With a seed the whole board is reproducible.
///
/// # Errors
///
/// Returns an error if `rows` or `cols` is zero or above `MAX_GRID_DIMENSION`,
/// or if `block_fraction` is NaN or infinite
pub fn generate_grid(
    rows: usize,
    cols: usize,
    block_fraction: f64,
    seed: Option<u64>,
) -> Result<Grid> {
    let config = GeneratorConfig {
        rows,
        cols,
        block_fraction,
        seed,
    };
    generate(&config).map(|generation| generation.grid)
}
