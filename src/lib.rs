//! Rotating pipe-tile puzzle: board generation and connectivity analysis
//!
//! A board is a grid of pipe tiles. The player turns tiles until an open path
//! joins the top-left start cell to the bottom-right end cell. Boards are
//! carved as random spanning-tree mazes around obstacle cells, converted into
//! tiles and then scrambled by spinning every tile. After each move the set of
//! cells reachable from the start and the solved path are recomputed.

#![forbid(unsafe_code)]

/// Maze carving, tile synthesis, reachability and path solving
pub mod algorithm;
/// Play session state
pub mod game;
/// Input/output operations and error handling
pub mod io;
/// Directions, tiles and the board grid
pub mod spatial;

pub use algorithm::cellset::CellSet;
pub use algorithm::connectivity::reachable_from_start;
pub use algorithm::generator::{GeneratorConfig, generate_grid};
pub use algorithm::solver::{is_solved, solved_path};
pub use game::Puzzle;
pub use io::error::{PuzzleError, Result};
pub use spatial::{CellKey, Direction, DirectionSet, Grid, Tile, TileKind};
