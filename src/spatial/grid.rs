//! Rectangular tile board with fixed start and end cells
//!
//! Tiles are stored row-major in an `ndarray::Array2`. The start cell is always
//! the top-left corner and the end cell the bottom-right corner. Once built a
//! grid never changes shape; only individual tile rotations change.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::io::error::{PuzzleError, Result, invalid_grid, invalid_parameter};
use crate::spatial::direction::Direction;
use crate::spatial::tiles::{Tile, TileKind};

/// Value-typed (row, col) address of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    /// Row index, 0 at the top
    pub row: usize,
    /// Column index, 0 at the left
    pub col: usize,
}

impl CellKey {
    /// Create a cell key
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major flattened index for a grid with `cols` columns
    pub const fn index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Inverse of `index`
    pub const fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The puzzle board
///
/// Serializes as a row-major nested list of `{kind, rotation}` records. The
/// deserializer rejects empty or ragged data and boards whose start or end cell
/// is a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Grid {
    tiles: Array2<Tile>,
}

impl Grid {
    /// Build a grid by calling `initializer` for every cell in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` or `cols` is zero
    pub fn from_fn<F>(rows: usize, cols: usize, mut initializer: F) -> Result<Self>
    where
        F: FnMut(CellKey) -> Tile,
    {
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{rows}x{cols}"),
                &"a grid needs at least one row and one column",
            ));
        }

        let tiles = Array2::from_shape_fn((rows, cols), |(row, col)| {
            initializer(CellKey::new(row, col))
        });

        Ok(Self { tiles })
    }

    /// Build a grid from row-major nested rows
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, a row is empty, the rows differ
    /// in length, or the start or end cell is a block
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);

        if row_count == 0 || col_count == 0 {
            return Err(invalid_grid(&"grid has no cells"));
        }

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != col_count)
        {
            return Err(invalid_grid(&format!(
                "row {index} has {} tiles, expected {col_count}",
                row.len()
            )));
        }

        let flat: Vec<Tile> = rows.into_iter().flatten().collect();
        let tiles = Array2::from_shape_vec((row_count, col_count), flat)
            .map_err(|error| invalid_grid(&error))?;
        let grid = Self { tiles };

        for (label, key) in [("start", grid.start()), ("end", grid.end())] {
            if grid.tile(key).map(Tile::kind) == Some(TileKind::Block) {
                return Err(invalid_grid(&format!("{label} cell {key} is a block")));
            }
        }

        Ok(grid)
    }

    /// Copy the tiles out as row-major nested rows
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.tiles.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.tiles.ncols()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Top-left cell
    pub const fn start(&self) -> CellKey {
        CellKey::new(0, 0)
    }

    /// Bottom-right cell
    pub fn end(&self) -> CellKey {
        CellKey::new(self.rows() - 1, self.cols() - 1)
    }

    /// Test whether a key addresses a cell of this grid
    pub fn contains(&self, key: CellKey) -> bool {
        key.row < self.rows() && key.col < self.cols()
    }

    /// Tile at `key`, or `None` when out of range
    pub fn tile(&self, key: CellKey) -> Option<Tile> {
        self.tiles.get((key.row, key.col)).copied()
    }

    /// Overwrite the tile at `key`
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is outside the grid
    pub fn set_tile(&mut self, key: CellKey, tile: Tile) -> Result<()> {
        let dimensions = (self.rows(), self.cols());
        let slot = self
            .tiles
            .get_mut((key.row, key.col))
            .ok_or(PuzzleError::CellOutOfBounds {
                row: key.row,
                col: key.col,
                grid_dimensions: dimensions,
            })?;
        *slot = tile;
        Ok(())
    }

    /// Turn the tile at `key` one quarter clockwise
    ///
    /// Returns the tile after the turn, or `None` when the tile is a block and
    /// therefore stays as it is.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is outside the grid
    pub fn rotate(&mut self, key: CellKey) -> Result<Option<Tile>> {
        let tile = self.tile(key).ok_or(PuzzleError::CellOutOfBounds {
            row: key.row,
            col: key.col,
            grid_dimensions: (self.rows(), self.cols()),
        })?;

        if !tile.is_rotatable() {
            return Ok(None);
        }

        let turned = tile.rotated();
        self.set_tile(key, turned)?;
        Ok(Some(turned))
    }

    /// Neighbouring cell one step toward `direction`, if inside the grid
    pub fn neighbor(&self, key: CellKey, direction: Direction) -> Option<CellKey> {
        let (row_delta, col_delta) = direction.offset();
        let row = key.row.checked_add_signed(row_delta)?;
        let col = key.col.checked_add_signed(col_delta)?;
        let neighbor = CellKey::new(row, col);
        self.contains(neighbor).then_some(neighbor)
    }

    /// All in-grid neighbours with the direction leading to them, clockwise from north
    pub fn neighbors(&self, key: CellKey) -> impl Iterator<Item = (Direction, CellKey)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| Some((direction, self.neighbor(key, direction)?)))
    }

    /// Iterate every cell with its tile in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellKey, Tile)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((row, col), &tile)| (CellKey::new(row, col), tile))
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = PuzzleError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Tile>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}
