//! Edge coordinates on the Dots-and-Boxes line grid.
//!
//! ## Coordinate Layout
//!
//! A board of `n × n` boxes is drawn on a `(2n + 1) × (2n + 1)` logical
//! grid. Dots sit at (even, even), box interiors at (odd, odd), and edges
//! fill the mixed cells:
//!
//! ```text
//!          col 0   1   2   3   4
//! row 0        .  ---  .  ---  .      horizontal: even row, odd col
//! row 1        |   B   |   B   |      vertical:   odd row, even col
//! row 2        .  ---  .  ---  .
//! ```
//!
//! Box `(r, c)` is bounded by the horizontal edges `(2r, 2c+1)` and
//! `(2r+2, 2c+1)` and the vertical edges `(2r+1, 2c)` and `(2r+1, 2c+2)`.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Which way an edge runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Joins two dots of the same row.
    Horizontal,
    /// Joins two dots of the same column.
    Vertical,
}

/// One edge between two adjacent dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Coordinate on the logical line grid.
    pub at: Position,
    pub orientation: Orientation,
}

impl Edge {
    #[must_use]
    pub const fn new(at: Position, orientation: Orientation) -> Self {
        Self { at, orientation }
    }

    /// A horizontal edge at `(row, col)` of the line grid.
    #[must_use]
    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self::new(Position::new(row, col), Orientation::Horizontal)
    }

    /// A vertical edge at `(row, col)` of the line grid.
    #[must_use]
    pub const fn vertical(row: usize, col: usize) -> Self {
        Self::new(Position::new(row, col), Orientation::Vertical)
    }

    /// Check the coordinate names an edge of this orientation on a board of
    /// `grid_size × grid_size` boxes.
    ///
    /// ```
    /// use rust_boardgames::core::Edge;
    ///
    /// assert!(Edge::horizontal(0, 1).is_valid(1));
    /// assert!(Edge::vertical(1, 2).is_valid(1));
    /// assert!(!Edge::horizontal(1, 1).is_valid(1)); // a box interior
    /// assert!(!Edge::vertical(0, 0).is_valid(1)); // a dot
    /// ```
    #[must_use]
    pub fn is_valid(&self, grid_size: usize) -> bool {
        let limit = 2 * grid_size;
        let Position { row, col } = self.at;
        if row > limit || col > limit {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => row % 2 == 0 && col % 2 == 1,
            Orientation::Vertical => row % 2 == 1 && col % 2 == 0,
        }
    }

    /// The four edges bounding box `(row, col)`: top, bottom, left, right.
    #[must_use]
    pub const fn sides_of(cell: Position) -> [Edge; 4] {
        let (r, c) = (cell.row, cell.col);
        [
            Edge::horizontal(2 * r, 2 * c + 1),
            Edge::horizontal(2 * r + 2, 2 * c + 1),
            Edge::vertical(2 * r + 1, 2 * c),
            Edge::vertical(2 * r + 1, 2 * c + 2),
        ]
    }

    /// Every edge of a `grid_size × grid_size` board, horizontals first,
    /// each group in row-major order.
    pub fn all(grid_size: usize) -> impl Iterator<Item = Edge> {
        let lines = 2 * grid_size + 1;
        let horizontal = (0..lines)
            .step_by(2)
            .flat_map(move |row| (1..lines).step_by(2).map(move |col| Edge::horizontal(row, col)));
        let vertical = (1..lines)
            .step_by(2)
            .flat_map(move |row| (0..lines).step_by(2).map(move |col| Edge::vertical(row, col)));
        horizontal.chain(vertical)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.orientation {
            Orientation::Horizontal => write!(f, "horizontal edge {}", self.at),
            Orientation::Vertical => write!(f, "vertical edge {}", self.at),
        }
    }
}
