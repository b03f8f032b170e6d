//! The `BoardGame` trait implemented by every engine.
//!
//! Each engine also has game-specific move methods (`handle_move`,
//! `drop_disc`, `place_edge`) that silently ignore illegal input. The
//! trait is the uniform surface: it reports why a move was refused and what
//! an accepted move did.

use smallvec::SmallVec;

use crate::core::error::Result;
use crate::core::{PlayerId, Position};
use crate::events::GameEvent;

use super::status::GameStatus;

/// What an accepted move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport<M> {
    /// The move as it was requested.
    pub played: M,

    /// Who made it.
    pub mover: PlayerId,

    /// Status after the move.
    pub status: GameStatus,

    /// Who moves next. Equals `mover` after an extra turn or a terminal move.
    pub next_player: PlayerId,

    /// Boxes closed by this move (Dots-and-Boxes only).
    pub completed_boxes: SmallVec<[Position; 2]>,
}

impl<M> MoveReport<M> {
    /// The same report for a differently-shaped move request.
    #[must_use]
    pub fn with_played<N>(self, played: N) -> MoveReport<N> {
        MoveReport {
            played,
            mover: self.mover,
            status: self.status,
            next_player: self.next_player,
            completed_boxes: self.completed_boxes,
        }
    }

    /// True if the same player moves again.
    #[must_use]
    pub fn keeps_turn(&self) -> bool {
        !self.status.is_terminal() && self.next_player == self.mover
    }
}

/// Board game engine trait.
///
/// ## Implementation Notes
///
/// - `check_move` must not mutate, and `apply_move` must validate fully
///   before mutating: an `Err` leaves the engine exactly as it was
/// - `legal_moves` is empty once the game is terminal
/// - `reset` restores the state the engine was constructed with
pub trait BoardGame {
    /// A move request, e.g. a cell index or a column.
    type Move: Copy + std::fmt::Debug + PartialEq;

    /// The player to move. Unchanged once the game is over.
    fn current_player(&self) -> PlayerId;

    /// Current status.
    fn status(&self) -> GameStatus;

    /// Number of accepted moves since construction or the last reset.
    fn move_count(&self) -> usize;

    /// Display name of a player.
    fn player_name(&self, player: PlayerId) -> &str;

    /// Validate a move without applying it.
    fn check_move(&self, mv: Self::Move) -> Result<()>;

    /// Every move `apply_move` would currently accept.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move, or explain why it was refused.
    fn apply_move(&mut self, mv: Self::Move) -> Result<MoveReport<Self::Move>>;

    /// Return to the initial empty state.
    ///
    /// Undrained events are discarded; afterwards the queue holds only
    /// `GameEvent::Reset`.
    fn reset(&mut self);

    /// Take the events recorded since the last drain.
    fn drain_events(&mut self) -> Vec<GameEvent>;

    /// Banner text for the current status.
    fn status_message(&self) -> String;

    // === Convenience Methods ===

    /// Check if a move would be accepted.
    fn is_legal(&self, mv: Self::Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Check if the game has ended.
    fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}
