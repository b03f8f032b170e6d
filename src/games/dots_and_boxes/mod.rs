//! Dots-and-Boxes.
//!
//! - N×N boxes (4 by default) on an (N+1)×(N+1) lattice of dots
//! - Players alternately draw one edge between adjacent dots
//! - Drawing the fourth side of a box claims it and earns another move
//! - When every box is claimed the higher score wins; equal scores tie

mod game;

pub use crate::core::{Edge, Orientation};
pub use game::{CompletedBoxes, DotsAndBoxes};
