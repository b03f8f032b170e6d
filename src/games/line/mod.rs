//! Generic k-in-a-row engine.
//!
//! One engine parameterised by `LineGameConfig`: board size, win length and
//! placement rule. Connect Four and Gomoku are configurations of it with
//! their own move signatures on top.

mod game;

pub use game::LineGame;
