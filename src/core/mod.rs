pub mod error;
pub mod grid;
pub mod types;

pub use error::{BitmapError, Result};
pub use grid::Grid;
pub use types::{is_marked, Cell, Coord, Distance, MARKED};
