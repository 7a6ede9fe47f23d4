//! Provides an implementation of Kohonen Self Organizing Map on a flat rectangular grid.

mod map;
pub use self::map::*;

mod prototype;
pub use self::prototype::*;

mod state;
pub use self::state::*;

mod training;
pub use self::training::*;

use serde::Serialize;

/// Coordinate of the prototype in the grid as (row, column).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Coordinate(pub usize, pub usize);

impl Coordinate {
    /// Returns manhattan distance between two grid coordinates.
    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.0.abs_diff(other.0) + self.1.abs_diff(other.1)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from(value: (usize, usize)) -> Self {
        Coordinate(value.0, value.1)
    }
}
