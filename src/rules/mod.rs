//! Rules surface shared by the games.
//!
//! - `GameStatus`: in progress, won, or drawn
//! - `BoardGame`: the uniform engine interface
//!
//! Game-specific concepts (columns, edges, boxes) stay in `games`.

pub mod engine;
pub mod status;

pub use engine::{BoardGame, MoveReport};
pub use status::GameStatus;
