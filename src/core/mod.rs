//! Core engine types: players, board geometry, edges, line scanning, RNG,
//! configuration and errors.
//!
//! This module contains the building blocks shared by every game. Games
//! configure these rather than modifying them.

pub mod player;
pub mod position;
pub mod edge;
pub mod grid;
pub mod line;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use position::{Axis, Position};
pub use edge::{Edge, Orientation};
pub use grid::Grid;
pub use line::{find_winning_run, run_through, Run};
pub use rng::GameRng;
pub use config::{DotsAndBoxesConfig, LineGameConfig, Placement};
pub use error::{ConfigError, MoveError};
