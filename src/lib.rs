//! # rust-boardgames
//!
//! Rule engines for four two-player board games: Tic-Tac-Toe, Connect Four,
//! Gomoku and Dots-and-Boxes.
//!
//! ## Design Principles
//!
//! 1. **Engines Own the Rules**: Each engine holds the authoritative board,
//!    turn, score and status. A presentation layer only reads state and
//!    forwards move requests.
//!
//! 2. **Illegal Moves Are No-Ops**: Game-specific move methods
//!    (`handle_move`, `drop_disc`, `place_edge`) silently ignore anything
//!    illegal. `BoardGame::apply_move` is the same operation with a
//!    `Result` for callers that want the reason.
//!
//! 3. **Configuration Over Duplication**: Connect Four and Gomoku are two
//!    configurations of one k-in-a-row engine (`LineGame`).
//!
//! ## Architecture
//!
//! - **Persistent Boards**: `Grid<T>` is backed by `im`, so `snapshot()`
//!   clones in O(1) and a reader never sees a half-applied move.
//!
//! - **Explicit Notification**: Engines push `GameEvent`s to a queue the
//!   caller drains after each move, and return a `MoveReport`.
//!
//! ## Modules
//!
//! - `core`: Players, positions, grids, line scanning, RNG, configuration, errors
//! - `rules`: `GameStatus`, the `BoardGame` trait and `MoveReport`
//! - `events`: `GameEvent` and `EventQueue`
//! - `games`: The engines
//! - `playout`: Seeded random playouts over any engine

pub mod core;
pub mod rules;
pub mod events;
pub mod games;
pub mod playout;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    Position, Axis, Grid, Edge, Orientation,
    GameRng,
    LineGameConfig, DotsAndBoxesConfig, Placement,
    MoveError, ConfigError,
};

pub use crate::rules::{BoardGame, GameStatus, MoveReport};

pub use crate::events::{EventQueue, GameEvent};

pub use crate::games::{
    TicTacToe, LineGame, ConnectFour,
    Gomoku, GomokuBuilder,
    DotsAndBoxes,
};

pub use crate::playout::{random_playout, Playout};
