//! Line scanning: contiguous same-owner runs through a pivot cell.
//!
//! This is the single win-detection primitive for the k-in-a-row games.
//! A move can only create a line that passes through the cell it marked,
//! so scanning the four axes through that cell is sufficient.

use smallvec::SmallVec;

use super::grid::Grid;
use super::player::PlayerId;
use super::position::{Axis, Position};

/// Cells of a run, pivot first, then the positive walk, then the negative walk.
///
/// Inline capacity covers a five-in-a-row scan (`2 * 4 + 1`) without
/// allocating.
pub type Run = SmallVec<[Position; 9]>;

/// Collect the contiguous run of `player`'s cells through `pivot` along `axis`.
///
/// Each sense is walked at most `reach` steps and stops at the board edge or
/// at the first cell not owned by `player`. The pivot itself is always
/// included, whether or not it is marked.
#[must_use]
pub fn run_through(
    grid: &Grid<Option<PlayerId>>,
    pivot: Position,
    axis: Axis,
    player: PlayerId,
    reach: usize,
) -> Run {
    let (d_row, d_col) = axis.delta();
    let mut run = Run::new();
    run.push(pivot);

    for sense in [1isize, -1] {
        for step in 1..=reach as isize {
            match pivot.step(d_row * sense, d_col * sense, step) {
                Some(pos) if grid.get(pos) == Some(&Some(player)) => run.push(pos),
                _ => break,
            }
        }
    }

    run
}

/// Find a run of at least `win_length` cells through `pivot`.
///
/// Axes are checked in `scan_order` and the first qualifying one is
/// returned. Returns `None` for an empty pivot.
#[must_use]
pub fn find_winning_run(
    grid: &Grid<Option<PlayerId>>,
    pivot: Position,
    win_length: usize,
    scan_order: &[Axis],
) -> Option<(Axis, Run)> {
    let player = (*grid.get(pivot)?)?;
    let reach = win_length.saturating_sub(1);

    scan_order.iter().find_map(|&axis| {
        let run = run_through(grid, pivot, axis, player, reach);
        (run.len() >= win_length).then_some((axis, run))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: usize, cols: usize, marks: &[(usize, usize, PlayerId)]) -> Grid<Option<PlayerId>> {
        let mut grid = Grid::new(rows, cols, None);
        for &(r, c, p) in marks {
            grid.set(Position::new(r, c), Some(p));
        }
        grid
    }

    #[test]
    fn test_run_counts_both_senses() {
        let p = PlayerId::FIRST;
        let grid = board(1, 7, &[(0, 1, p), (0, 2, p), (0, 3, p), (0, 4, p)]);

        let run = run_through(&grid, Position::new(0, 3), Axis::Horizontal, p, 3);

        assert_eq!(
            run.as_slice(),
            &[
                Position::new(0, 3),
                Position::new(0, 4),
                Position::new(0, 2),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_run_stops_at_opponent_and_edge() {
        let (a, b) = (PlayerId::FIRST, PlayerId::SECOND);
        let grid = board(1, 5, &[(0, 0, a), (0, 1, a), (0, 2, b), (0, 3, a)]);

        let run = run_through(&grid, Position::new(0, 1), Axis::Horizontal, a, 4);
        assert_eq!(run.len(), 2);
    }

    #[test]
    fn test_run_respects_reach() {
        let p = PlayerId::SECOND;
        let marks: Vec<_> = (0..9).map(|c| (0, c, p)).collect();
        let grid = board(1, 9, &marks);

        let run = run_through(&grid, Position::new(0, 4), Axis::Horizontal, p, 3);
        assert_eq!(run.len(), 7);
    }

    #[test]
    fn test_find_winning_run_diagonal() {
        let p = PlayerId::FIRST;
        let grid = board(
            6,
            7,
            &[(5, 0, p), (4, 1, p), (3, 2, p), (2, 3, p)],
        );

        let (axis, run) = find_winning_run(&grid, Position::new(3, 2), 4, &Axis::ALL).unwrap();
        assert_eq!(axis, Axis::DiagonalDownLeft);
        assert_eq!(run.len(), 4);
    }

    #[test]
    fn test_find_winning_run_short_line() {
        let p = PlayerId::FIRST;
        let grid = board(3, 3, &[(1, 0, p), (1, 1, p)]);

        assert!(find_winning_run(&grid, Position::new(1, 1), 3, &Axis::ALL).is_none());
    }

    #[test]
    fn test_find_winning_run_empty_pivot() {
        let grid = board(3, 3, &[]);
        assert!(find_winning_run(&grid, Position::new(0, 0), 1, &Axis::ALL).is_none());
        assert!(find_winning_run(&grid, Position::new(9, 9), 1, &Axis::ALL).is_none());
    }

    #[test]
    fn test_scan_order_picks_first_completed_axis() {
        let p = PlayerId::FIRST;
        // a row and a column meet at (2, 2)
        let grid = board(
            5,
            5,
            &[(2, 0, p), (2, 1, p), (2, 2, p), (0, 2, p), (1, 2, p)],
        );
        let pivot = Position::new(2, 2);

        let (axis, _) = find_winning_run(&grid, pivot, 3, &Axis::ALL).unwrap();
        assert_eq!(axis, Axis::Horizontal);

        let (axis, run) = find_winning_run(&grid, pivot, 3, &Axis::VERTICAL_FIRST).unwrap();
        assert_eq!(axis, Axis::Vertical);
        assert!(run.iter().all(|pos| pos.col == 2));
    }
}
