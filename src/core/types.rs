use std::fmt;

/// Raw cell code as read from a bitmap row.
pub type Cell = u8;

/// Hop count between two cells under 4-directional adjacency.
pub type Distance = u32;

/// Cell code of the target class. Every other code is unmarked.
pub const MARKED: Cell = 1;

pub fn is_marked(cell: Cell) -> bool {
    cell == MARKED
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
