//! Shortest start-to-end path over the current tile rotations

use std::collections::VecDeque;

use crate::algorithm::cellset::CellSet;
use crate::algorithm::connectivity::connected_neighbors;
use crate::spatial::grid::{CellKey, Grid};

/// Cells of the shortest start-to-end path, ordered from start to end
///
/// Breadth-first search records the cell each newly discovered cell was first
/// reached from and stops once the end cell is dequeued. Neighbours are visited
/// clockwise from north, which fixes the choice among equally short paths.
/// Returns `None` when the end is unreachable or coincides with the start.
pub fn shortest_path(grid: &Grid) -> Option<Vec<CellKey>> {
    let (start, end) = (grid.start(), grid.end());
    if start == end {
        return None;
    }

    let cols = grid.cols();
    let mut parents: Vec<Option<CellKey>> = vec![None; grid.cell_count()];
    let mut seen = CellSet::new(grid.rows(), cols);
    let mut queue = VecDeque::from([start]);
    seen.insert(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            break;
        }

        for next in connected_neighbors(grid, current) {
            if seen.insert(next) {
                if let Some(parent) = parents.get_mut(next.index(cols)) {
                    *parent = Some(current);
                }
                queue.push_back(next);
            }
        }
    }

    if !seen.contains(end) {
        return None;
    }

    let mut path = vec![end];
    let mut cursor = end;
    while cursor != start {
        cursor = parents.get(cursor.index(cols)).copied().flatten()?;
        path.push(cursor);
    }
    path.reverse();

    Some(path)
}

/// Cells lying on the shortest start-to-end path; empty when unsolved
pub fn solved_path(grid: &Grid) -> CellSet {
    let mut cells = CellSet::new(grid.rows(), grid.cols());
    for key in shortest_path(grid).into_iter().flatten() {
        cells.insert(key);
    }
    cells
}

/// Whether the start and end cells are currently joined
pub fn is_solved(grid: &Grid) -> bool {
    shortest_path(grid).is_some()
}
