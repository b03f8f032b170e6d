//! Board coordinates and scan directions.
//!
//! ## Coordinate Layout
//!
//! `Position { row, col }` is zero-based with row 0 at the top of the board.
//! Connect Four discs fall towards the highest row index.
//!
//! ```text
//!          col 0  1  2 ...
//! row 0    [ ][ ][ ]      <- top
//! row 1    [ ][ ][ ]
//! ...
//! ```

use serde::{Deserialize, Serialize};

/// A cell coordinate on a rectangular board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` times along `(d_row, d_col)`.
    ///
    /// Returns `None` if the result would have a negative coordinate; upper
    /// bounds are the grid's concern.
    #[must_use]
    pub fn step(self, d_row: isize, d_col: isize, steps: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(d_col.checked_mul(steps)?)?;
        Some(Self { row, col })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four undirected lines through a cell.
///
/// Each axis is walked in both senses by the line scan, so four axes cover
/// all eight neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDownRight,
    /// Top-right to bottom-left.
    DiagonalDownLeft,
}

impl Axis {
    /// All axes in scan order.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDownRight,
        Axis::DiagonalDownLeft,
    ];

    /// Columns before rows, then the diagonals. Gomoku scans in this order.
    pub const VERTICAL_FIRST: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::DiagonalDownRight,
        Axis::DiagonalDownLeft,
    ];

    /// The positive-sense `(d_row, d_col)` step for this axis.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDownRight => (1, 1),
            Axis::DiagonalDownLeft => (1, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_forward_and_back() {
        let p = Position::new(2, 3);

        assert_eq!(p.step(1, 1, 2), Some(Position::new(4, 5)));
        assert_eq!(p.step(1, -1, 3), Some(Position::new(5, 0)));
        assert_eq!(p.step(0, 1, -3), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_step_below_zero_is_none() {
        let p = Position::new(0, 1);

        assert_eq!(p.step(-1, 0, 1), None);
        assert_eq!(p.step(1, -1, 2), None);
    }

    #[test]
    fn test_axis_deltas_are_distinct() {
        let deltas: Vec<_> = Axis::ALL.iter().map(|a| a.delta()).collect();
        for (i, a) in deltas.iter().enumerate() {
            for b in &deltas[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(*a, (-b.0, -b.1));
            }
        }
    }

    #[test]
    fn test_scan_orders_cover_every_axis() {
        let mut vertical_first = Axis::VERTICAL_FIRST.to_vec();
        vertical_first.sort_by_key(|a| a.delta());
        let mut all = Axis::ALL.to_vec();
        all.sort_by_key(|a| a.delta());
        assert_eq!(vertical_first, all);
    }

    #[test]
    fn test_position_display_and_from() {
        let p: Position = (4, 7).into();
        assert_eq!(format!("{}", p), "(4, 7)");
    }
}
