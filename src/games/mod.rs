//! Game implementations.
//!
//! Each game is a standalone engine implementing `BoardGame`, plus its own
//! move method that ignores illegal input.

pub mod tictactoe;
pub mod line;
pub mod connect_four;
pub mod gomoku;
pub mod dots_and_boxes;

pub use tictactoe::TicTacToe;
pub use line::LineGame;
pub use connect_four::ConnectFour;
pub use gomoku::{Gomoku, GomokuBuilder};
pub use dots_and_boxes::{DotsAndBoxes, Edge, Orientation};
