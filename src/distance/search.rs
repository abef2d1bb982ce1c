use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::{is_marked, Coord, Distance, Grid, Result};

/// BFS outward from `start` until the first marked cell comes off the queue.
///
/// Returns `Some(0)` when `start` is itself marked and `None` when no marked
/// cell is reachable. One call per cell costs quadratic time overall; the
/// ring expansion in `transform` is the one to use for whole grids.
pub fn nearest_marked(grid: &Grid, start: Coord) -> Result<Option<Distance>> {
    if !grid.contains(start) {
        return Err(grid.out_of_bounds(start));
    }

    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let mut queue: VecDeque<(Coord, Distance)> = VecDeque::new();
    visited.insert(start);
    queue.push_back((start, 0));

    while let Some((cur, depth)) = queue.pop_front() {
        if grid.get(cur).is_some_and(is_marked) {
            return Ok(Some(depth));
        }
        for n in grid.neighbors(cur) {
            if visited.insert(n) {
                queue.push_back((n, depth + 1));
            }
        }
    }
    Ok(None)
}

/// Per-cell search over the whole grid. Unreachable cells come out as 0.
pub fn brute_force_distances(grid: &Grid) -> Vec<Vec<Distance>> {
    let (rows, cols) = grid.dimensions();
    if cols == 0 {
        return Vec::new();
    }
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| nearest_marked(grid, Coord::new(r, c)).ok().flatten().unwrap_or(0))
                .collect()
        })
        .collect()
}
