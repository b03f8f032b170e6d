//! Tic-Tac-Toe.
//!
//! - 3×3 board, X moves first
//! - First player to own one of the eight lines wins
//! - A full board without a line is a draw

mod game;

pub use game::{TicTacToe, CELLS, SIDE, WIN_LINES};
