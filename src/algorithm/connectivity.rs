//! Reachability over the current tile rotations
//!
//! Two neighbouring cells are joined only when each tile is open toward the
//! other. A stub pointing at a wall or at a closed side joins nothing.

use std::collections::VecDeque;

use crate::algorithm::cellset::CellSet;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{CellKey, Grid};

/// Test whether `key` and its neighbour toward `direction` are joined
pub fn is_connected(grid: &Grid, key: CellKey, direction: Direction) -> bool {
    let Some(neighbor) = grid.neighbor(key, direction) else {
        return false;
    };

    match (grid.tile(key), grid.tile(neighbor)) {
        (Some(here), Some(there)) => here.opens(direction) && there.opens(direction.opposite()),
        _ => false,
    }
}

/// Cells joined to `key`, clockwise from north
pub fn connected_neighbors(grid: &Grid, key: CellKey) -> impl Iterator<Item = CellKey> + '_ {
    grid.neighbors(key)
        .filter(move |&(direction, _)| is_connected(grid, key, direction))
        .map(|(_, neighbor)| neighbor)
}

/// Breadth-first flood from the start cell over joined neighbours
///
/// The start cell is always a member.
pub fn reachable_from_start(grid: &Grid) -> CellSet {
    let start = grid.start();
    let mut seen = CellSet::new(grid.rows(), grid.cols());
    let mut queue = VecDeque::from([start]);
    seen.insert(start);

    while let Some(current) = queue.pop_front() {
        for next in connected_neighbors(grid, current) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    seen
}
