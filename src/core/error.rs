//! Error types.
//!
//! Move errors are never surfaced by the game-specific move methods, which
//! treat an illegal move as a no-op. They are returned by
//! `BoardGame::apply_move` for callers that want to know why a move was
//! refused.

use thiserror::Error;

use super::position::Position;

/// Why a move was rejected. The engine state is unchanged in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("cell index {0} is off the board")]
    IndexOutOfBounds(usize),

    #[error("cell {0} is off the board")]
    OutOfBounds(Position),

    #[error("cell {0} is already occupied")]
    Occupied(Position),

    #[error("column {0} does not exist")]
    NoSuchColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cell {0} is not the lowest empty cell of its column")]
    Floating(Position),

    #[error("{0} is not an edge of this board")]
    InvalidEdge(Position),

    #[error("edge {0} has already been drawn")]
    EdgeTaken(Position),
}

/// Invalid engine configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("win length must be at least 1")]
    ZeroWinLength,

    #[error("win length {win_length} does not fit on a {rows}x{cols} board")]
    WinLengthTooLong {
        win_length: usize,
        rows: usize,
        cols: usize,
    },

    #[error("dots-and-boxes grid must have at least one box per side")]
    EmptyBoxGrid,
}

/// Convenience Result type for move application.
pub type Result<T> = std::result::Result<T, MoveError>;
