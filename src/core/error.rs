use std::fmt;

use super::types::Coord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitmapError {
    JaggedRow { row: usize, expected: usize, found: usize },
    OutOfBounds { coord: Coord, rows: usize, cols: usize },
    InvalidCell { case: usize, row: usize, col: usize, found: char },
    RowLength { case: usize, row: usize, expected: usize, found: usize },
    UnexpectedEof(String),
    InvalidNumber(String),
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JaggedRow { row, expected, found } => {
                write!(f, "jagged grid: row {} has {} cells, expected {}", row, found, expected)
            }
            Self::OutOfBounds { coord, rows, cols } => {
                write!(f, "coordinate {} outside {}x{} grid", coord, rows, cols)
            }
            Self::InvalidCell { case, row, col, found } => {
                write!(f, "case {}: invalid cell {:?} at row {}, col {}", case, found, row, col)
            }
            Self::RowLength { case, row, expected, found } => {
                write!(f, "case {}: row {} has {} cells, expected {}", case, row, found, expected)
            }
            Self::UnexpectedEof(what) => write!(f, "unexpected end of input: expected {}", what),
            Self::InvalidNumber(tok) => write!(f, "invalid number: {:?}", tok),
        }
    }
}

impl std::error::Error for BitmapError {}

pub type Result<T> = std::result::Result<T, BitmapError>;
