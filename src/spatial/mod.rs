//! Spatial data structures for the puzzle board
//!
//! This module contains:
//! - Cardinal directions and direction sets
//! - Tile kinds and their rotations
//! - The rectangular tile grid and cell addressing

/// Directions and direction sets
pub mod direction;
/// Board storage and cell keys
pub mod grid;
/// Tile kinds, rotations and open directions
pub mod tiles;

pub use direction::{Direction, DirectionSet};
pub use grid::{CellKey, Grid};
pub use tiles::{Tile, TileKind};
