//! Connect Four.
//!
//! - 6 rows × 7 columns, Red moves first
//! - Discs drop to the lowest empty row of the chosen column
//! - Four in a row horizontally, vertically or diagonally wins
//! - 42 discs without a line is a draw

mod game;

pub use game::{ConnectFour, COLUMNS, CONNECT, ROWS};
