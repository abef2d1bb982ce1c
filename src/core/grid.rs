// Grid: rectangular table of cell codes with bounds-checked neighbor queries.
//
// Rows are stored as nested vectors, same as the bitmaps coming off the
// parser. Dimensions are kept separately so that an `n x 0` grid still
// remembers its row count; zero-width grids hold no row vectors at all.

use serde::{Deserialize, Serialize};

use super::error::{BitmapError, Result};
use super::types::{is_marked, Cell, Coord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// All-background grid of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        if cols == 0 {
            return Self { rows, cols, cells: Vec::new() };
        }
        Self { rows, cols, cells: vec![vec![0; cols]; rows] }
    }

    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, |r| r.len());
        if let Some((row, r)) = cells.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(BitmapError::JaggedRow { row, expected: cols, found: r.len() });
        }
        if cols == 0 {
            return Ok(Self::new(rows, 0));
        }
        Ok(Self { rows, cols, cells })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.cells.get(at.row).and_then(|r| r.get(at.col)).copied()
    }

    pub fn set(&mut self, at: Coord, cell: Cell) -> Result<()> {
        if !self.contains(at) {
            return Err(self.out_of_bounds(at));
        }
        self.cells[at.row][at.col] = cell;
        Ok(())
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub(crate) fn out_of_bounds(&self, coord: Coord) -> BitmapError {
        BitmapError::OutOfBounds { coord, rows: self.rows, cols: self.cols }
    }

    /// In-bounds axis neighbors of `at`, always in up, down, left, right order.
    pub fn neighbors(&self, at: Coord) -> Vec<Coord> {
        let mut out = Vec::with_capacity(4);
        if at.row > 0 {
            out.push(Coord::new(at.row - 1, at.col));
        }
        if at.row + 1 < self.rows {
            out.push(Coord::new(at.row + 1, at.col));
        }
        if at.col > 0 {
            out.push(Coord::new(at.row, at.col - 1));
        }
        if at.col + 1 < self.cols {
            out.push(Coord::new(at.row, at.col + 1));
        }
        out
    }

    /// Row-major list of every marked cell.
    pub fn marked_cells(&self) -> Vec<Coord> {
        let mut out = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if is_marked(cell) {
                    out.push(Coord::new(r, c));
                }
            }
        }
        out
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = BitmapError;

    fn try_from(cells: Vec<Vec<Cell>>) -> Result<Self> {
        Self::from_rows(cells)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}
