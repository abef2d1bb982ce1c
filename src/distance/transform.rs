// Distance transform: hop distance from every cell to the nearest marked cell.
//
// All sources go into the queue up front and the search advances one ring
// at a time, so each unmarked cell is reached first by its closest source
// and written exactly once.

use std::collections::VecDeque;

use log::{debug, warn};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::core::{is_marked, Coord, Distance, Grid, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceGrid {
    rows: usize,
    cols: usize,
    #[serde(rename = "distances")]
    cells: Vec<Vec<Distance>>,
    sources: usize,
}

impl DistanceGrid {
    fn zeroed(rows: usize, cols: usize, sources: usize) -> Self {
        if cols == 0 {
            return Self { rows, cols, cells: Vec::new(), sources };
        }
        Self { rows, cols, cells: vec![vec![0; cols]; rows], sources }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, at: Coord) -> Option<Distance> {
        self.cells.get(at.row).and_then(|r| r.get(at.col)).copied()
    }

    /// Number of distinct source cells the transform was seeded with.
    pub fn sources(&self) -> usize {
        self.sources
    }

    /// False when there was nothing to measure from and every zero is meaningless.
    pub fn has_sources(&self) -> bool {
        self.sources > 0
    }

    pub fn max_distance(&self) -> Distance {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<Distance>] {
        &self.cells
    }

    pub fn to_rows(&self) -> Vec<Vec<Distance>> {
        self.cells.clone()
    }
}

/// Distance from every cell of `grid` to the nearest coordinate in `marked`.
///
/// `marked` is expected to list cells holding the marked state; that is not
/// re-checked, but every coordinate must lie inside the grid. With no
/// sources the result is all zeros and `sources() == 0`.
pub fn compute_distances(grid: &Grid, marked: &[Coord]) -> Result<DistanceGrid> {
    if let Some(&bad) = marked.iter().find(|c| !grid.contains(**c)) {
        return Err(grid.out_of_bounds(bad));
    }

    Ok(expand(grid, marked))
}

fn expand(grid: &Grid, marked: &[Coord]) -> DistanceGrid {
    let (rows, cols) = grid.dimensions();
    let seeds: FxHashSet<Coord> = marked.iter().copied().collect();
    let mut dist = DistanceGrid::zeroed(rows, cols, seeds.len());
    if seeds.is_empty() {
        if !grid.is_empty() {
            warn!("no marked cells in {}x{} grid, distances undefined", rows, cols);
        }
        return dist;
    }

    let mut visited = vec![vec![false; cols]; rows];
    let mut queue: VecDeque<Coord> = VecDeque::with_capacity(marked.len());
    for &c in marked {
        if !visited[c.row][c.col] {
            visited[c.row][c.col] = true;
            queue.push_back(c);
        }
    }

    let mut next: Vec<Coord> = Vec::new();
    let mut d: Distance = 1;

    loop {
        while let Some(cur) = queue.pop_front() {
            for n in grid.neighbors(cur) {
                if visited[n.row][n.col] || grid.get(n).is_some_and(is_marked) {
                    continue;
                }
                visited[n.row][n.col] = true;
                dist.cells[n.row][n.col] = d;
                next.push(n);
            }
        }
        if next.is_empty() {
            break;
        }
        debug!("ring {}: {} cells", d, next.len());
        d += 1;
        queue.extend(next.drain(..));
    }

    dist
}

/// Scans `grid` for marked cells and transforms from all of them.
pub fn distance_transform(grid: &Grid) -> DistanceGrid {
    expand(grid, &grid.marked_cells())
}
