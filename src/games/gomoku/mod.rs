//! Gomoku (five in a row).
//!
//! - N×N board, 15 by default; X moves first
//! - Stones go on any empty intersection
//! - Five or more in a row in any direction wins
//! - A full board without a line is a draw

mod game;

pub use game::{Gomoku, GomokuBuilder, DEFAULT_SIZE, FIVE};
