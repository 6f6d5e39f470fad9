use bitvec::prelude::*;
use std::fmt;

use crate::spatial::grid::CellKey;

/// Fixed-size set of cells for one grid shape
///
/// Membership is stored as a bitset over row-major flattened indices, which
/// makes equality exact and iteration row-major. Keys outside the shape are
/// never members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellSet {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl CellSet {
    /// Create a set with no cells for a `rows` x `cols` grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a set containing every cell of a `rows` x `cols` grid
    pub fn all(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![1; rows * cols],
            rows,
            cols,
        }
    }

    /// Grid shape this set was built for (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Insert a cell, returning `true` if it was not already present
    ///
    /// Out-of-shape keys are ignored and return `false`.
    pub fn insert(&mut self, key: CellKey) -> bool {
        if !self.in_shape(key) {
            return false;
        }

        let index = key.index(self.cols);
        if self.bits.get(index).as_deref() == Some(&true) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Remove a cell, returning `true` if it was present
    pub fn remove(&mut self, key: CellKey) -> bool {
        if !self.contains(key) {
            return false;
        }
        self.bits.set(key.index(self.cols), false);
        true
    }

    /// Test cell membership
    pub fn contains(&self, key: CellKey) -> bool {
        self.in_shape(key) && self.bits.get(key.index(self.cols)).as_deref() == Some(&true)
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate member cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.bits
            .iter_ones()
            .map(|index| CellKey::from_index(index, self.cols))
    }

    /// Extract all member cells as a vector
    pub fn to_vec(&self) -> Vec<CellKey> {
        self.iter().collect()
    }

    const fn in_shape(&self, key: CellKey) -> bool {
        key.row < self.rows && key.col < self.cols
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellSet({} cells:", self.len())?;
        for key in self.iter() {
            write!(f, " {key}")?;
        }
        f.write_str(")")
    }
}
