//! Randomized depth-first maze carving with obstacle cells
//!
//! The builder scatters obstacle cells over the board and carves a spanning
//! tree from the start cell through every reachable open cell. Edges are
//! recorded on both endpoints, so each carved cell ends up with an opening set
//! that one of the pipe tile kinds can represent. When obstacles cut the end
//! cell off, the attempt is discarded and the obstacles resampled; after
//! `MAX_GENERATION_ATTEMPTS` failures the board is carved with no obstacles.

use log::{debug, trace, warn};
use ndarray::Array2;
use rand::Rng;
use rand::seq::{SliceRandom, index};

use crate::algorithm::cellset::CellSet;
use crate::io::configuration::MAX_GENERATION_ATTEMPTS;
use crate::spatial::direction::{Direction, DirectionSet};
use crate::spatial::grid::CellKey;

/// Output of a carve: opening sets per cell and the obstacle cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeLayout {
    /// Carved open directions, indexed by (row, col)
    pub openings: Array2<DirectionSet>,
    /// Cells turned into obstacles
    pub obstacles: CellSet,
    /// Carve attempts made, including the fallback carve if any
    pub attempts: usize,
    /// Whether every obstacle attempt failed and the board was carved open
    pub used_fallback: bool,
}

impl MazeLayout {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.openings.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.openings.ncols()
    }

    /// Carved open directions at `key`; empty for obstacles, isolated and out-of-range cells
    pub fn openings_at(&self, key: CellKey) -> DirectionSet {
        self.openings
            .get((key.row, key.col))
            .copied()
            .unwrap_or_default()
    }

    /// Test whether `key` is an obstacle
    pub fn is_obstacle(&self, key: CellKey) -> bool {
        self.obstacles.contains(key)
    }
}

/// Maze builder parameters
#[derive(Debug, Clone, Copy)]
pub struct MazeBuilder {
    rows: usize,
    cols: usize,
    block_fraction: f64,
    max_attempts: usize,
}

impl MazeBuilder {
    /// Create a builder for a `rows` x `cols` board
    ///
    /// The generator validates dimensions before building. A builder with a
    /// zero dimension still builds, yielding a layout with no cells.
    pub const fn new(rows: usize, cols: usize, block_fraction: f64) -> Self {
        Self {
            rows,
            cols,
            block_fraction,
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }

    /// Override the number of obstacle attempts before the open-board fallback
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    const fn start(&self) -> CellKey {
        CellKey::new(0, 0)
    }

    const fn end(&self) -> CellKey {
        CellKey::new(self.rows.saturating_sub(1), self.cols.saturating_sub(1))
    }

    /// Number of obstacles each attempt samples
    ///
    /// `floor(block_fraction * rows * cols)`, clamped to the cells other than
    /// start and end. Negative and NaN fractions give zero.
    pub fn obstacle_target(&self) -> usize {
        let cells = self.rows * self.cols;
        let candidates = cells.saturating_sub(if cells > 1 { 2 } else { 1 });
        let raw = (self.block_fraction * cells as f64).floor();

        if raw.is_nan() || raw <= 0.0 {
            0
        } else {
            (raw as usize).min(candidates)
        }
    }

    /// Carve a maze whose start and end cells are connected
    ///
    /// Returns a layout with no cells and no attempts when either dimension is
    /// zero.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> MazeLayout {
        if self.rows == 0 || self.cols == 0 {
            warn!("Empty {}x{} board, nothing to carve", self.rows, self.cols);
            return MazeLayout {
                openings: Array2::from_elem((self.rows, self.cols), DirectionSet::EMPTY),
                obstacles: CellSet::new(self.rows, self.cols),
                attempts: 0,
                used_fallback: false,
            };
        }

        let target = self.obstacle_target();

        for attempt in 1..=self.max_attempts {
            let obstacles = self.sample_obstacles(target, rng);
            let (openings, visited) = self.carve(&obstacles, rng);

            if visited.contains(self.end()) {
                debug!(
                    "Carved {}x{} maze with {target} obstacles on attempt {attempt}",
                    self.rows, self.cols
                );
                return MazeLayout {
                    openings,
                    obstacles,
                    attempts: attempt,
                    used_fallback: false,
                };
            }

            debug!("Attempt {attempt}: obstacles cut off the end cell, resampling");
        }

        warn!(
            "No connected layout after {} attempts at block fraction {}, carving without obstacles",
            self.max_attempts, self.block_fraction
        );

        let obstacles = CellSet::new(self.rows, self.cols);
        let (openings, _) = self.carve(&obstacles, rng);

        MazeLayout {
            openings,
            obstacles,
            attempts: self.max_attempts + 1,
            used_fallback: true,
        }
    }

    /// Pick `count` distinct non-endpoint cells uniformly at random
    fn sample_obstacles<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> CellSet {
        let mut obstacles = CellSet::new(self.rows, self.cols);
        let (start, end) = (self.start(), self.end());

        let candidates: Vec<CellKey> = (0..self.rows * self.cols)
            .map(|i| CellKey::from_index(i, self.cols))
            .filter(|&key| key != start && key != end)
            .collect();

        let amount = count.min(candidates.len());
        for i in index::sample(rng, candidates.len(), amount) {
            if let Some(&key) = candidates.get(i) {
                obstacles.insert(key);
            }
        }

        trace!("Sampled obstacles {obstacles}");
        obstacles
    }

    /// Iterative depth-first carve from the start cell
    ///
    /// Returns the opening sets and the cells the traversal visited.
    fn carve<R: Rng + ?Sized>(
        &self,
        obstacles: &CellSet,
        rng: &mut R,
    ) -> (Array2<DirectionSet>, CellSet) {
        let mut openings = Array2::from_elem((self.rows, self.cols), DirectionSet::EMPTY);
        let mut visited = CellSet::new(self.rows, self.cols);
        let mut stack = vec![self.start()];
        visited.insert(self.start());

        while let Some(&current) = stack.last() {
            let mut candidates: Vec<(Direction, CellKey)> = Direction::ALL
                .into_iter()
                .filter_map(|direction| Some((direction, self.step(current, direction)?)))
                .filter(|&(_, next)| !visited.contains(next) && !obstacles.contains(next))
                .collect();

            candidates.shuffle(rng);

            let Some(&(direction, next)) = candidates.first() else {
                stack.pop();
                continue;
            };

            if let Some(cell) = openings.get_mut((current.row, current.col)) {
                cell.insert(direction);
            }
            if let Some(cell) = openings.get_mut((next.row, next.col)) {
                cell.insert(direction.opposite());
            }

            visited.insert(next);
            stack.push(next);
        }

        (openings, visited)
    }

    fn step(&self, key: CellKey, direction: Direction) -> Option<CellKey> {
        let (row_delta, col_delta) = direction.offset();
        let row = key.row.checked_add_signed(row_delta)?;
        let col = key.col.checked_add_signed(col_delta)?;
        (row < self.rows && col < self.cols).then_some(CellKey::new(row, col))
    }
}
