//! Fixed-size rectangular board storage.
//!
//! `Grid<T>` is row-major and backed by an `im::Vector`, so cloning a board
//! for a render snapshot is O(1) regardless of its size. Dimensions are set
//! at construction and never change.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// A `rows × cols` board of cells.
///
/// ## Example
///
/// ```
/// use rust_boardgames::core::{Grid, Position};
///
/// let mut grid: Grid<Option<char>> = Grid::new(2, 3, None);
/// grid.set(Position::new(1, 2), Some('x'));
///
/// assert_eq!(grid.get(Position::new(1, 2)), Some(&Some('x')));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid<T: Clone> {
    rows: usize,
    cols: usize,
    cells: Vector<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    #[must_use]
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: std::iter::repeat(fill).take(rows * cols).collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-area grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if a position lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major flat index of an on-board position.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    /// Position of a row-major flat index.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<Position> {
        (index < self.len()).then(|| Position::new(index / self.cols, index % self.cols))
    }

    /// Get a cell, or `None` when off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index_of(pos).and_then(|i| self.cells.get(i))
    }

    /// Overwrite a cell.
    ///
    /// Returns false, leaving the grid untouched, when `pos` is off the board.
    pub fn set(&mut self, pos: Position, value: T) -> bool {
        match self.index_of(pos) {
            Some(i) => {
                self.cells.set(i, value);
                true
            }
            None => false,
        }
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Iterate over (Position, &T) pairs in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (Position, &T)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / cols, i % cols), cell))
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &T> {
        let start = (row.min(self.rows)) * self.cols;
        let end = if row < self.rows { start + self.cols } else { start };
        self.cells.iter().skip(start).take(end - start)
    }
}
