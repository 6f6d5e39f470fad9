//! Conversion of carved opening sets into concrete, scrambled tiles
//!
//! Each carved cell gets the tile kind whose openings match the carve, then
//! an independent random rotation. The endpoints are then pinned to fixed stubs:
//! the start opens south and the end opens north.

use rand::Rng;

use crate::algorithm::builder::MazeLayout;
use crate::io::error::Result;
use crate::spatial::grid::{CellKey, Grid};
use crate::spatial::tiles::{ROTATIONS, Tile, TileKind};

/// Fixed tile for the start cell (stub facing south)
pub const START_TILE: Tile = Tile::new(TileKind::End, 2);

/// Fixed tile for the end cell (stub facing north)
pub const END_TILE: Tile = Tile::new(TileKind::End, 0);

/// Tile matching the carve at `key`, in its solved orientation
///
/// Obstacles and cells the carve never reached become blocks.
pub fn solved_tile(layout: &MazeLayout, key: CellKey) -> Tile {
    if layout.is_obstacle(key) {
        return Tile::BLOCK;
    }

    Tile::matching(layout.openings_at(key)).unwrap_or(Tile::BLOCK)
}

/// Grid of solved tiles with no scrambling and no endpoint override
///
/// Every carved edge is open on both sides, so start and end are connected
/// whenever the carve reached the end cell.
///
/// # Errors
///
/// Returns an error if the layout has no cells
pub fn canonical_grid(layout: &MazeLayout) -> Result<Grid> {
    Grid::from_fn(layout.rows(), layout.cols(), |key| solved_tile(layout, key))
}

/// Playable grid: solved tiles spun to random rotations, endpoints pinned
///
/// Random rotations are drawn in row-major order, one per non-block cell.
///
/// # Errors
///
/// Returns an error if the layout has no cells
pub fn synthesize<R: Rng + ?Sized>(layout: &MazeLayout, rng: &mut R) -> Result<Grid> {
    let mut grid = Grid::from_fn(layout.rows(), layout.cols(), |key| {
        let tile = solved_tile(layout, key);
        if tile.is_rotatable() {
            Tile::new(tile.kind(), rng.random_range(0..ROTATIONS))
        } else {
            tile
        }
    })?;

    let (start, end) = (grid.start(), grid.end());
    grid.set_tile(start, START_TILE)?;
    grid.set_tile(end, END_TILE)?;

    Ok(grid)
}
