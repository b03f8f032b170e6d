//! Game events.
//!
//! Engines record what each accepted move changed so a presentation layer
//! can react (animate a drop, highlight a line, flash a captured box)
//! without diffing board snapshots.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Edge, PlayerId, Position};
use crate::rules::GameStatus;

/// Something that happened to an engine's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player marked a cell.
    CellMarked { player: PlayerId, cell: Position },

    /// A player drew an edge.
    EdgeDrawn { player: PlayerId, edge: Edge },

    /// One move closed one or more boxes.
    BoxesCompleted {
        player: PlayerId,
        boxes: SmallVec<[Position; 2]>,
    },

    /// The turn moved to the other player.
    TurnPassed { to: PlayerId },

    /// The mover keeps the turn after completing a box.
    ExtraTurn { player: PlayerId },

    /// The game reached a terminal status.
    GameOver { status: GameStatus },

    /// The engine was returned to its initial state.
    Reset,
}

impl GameEvent {
    /// The player this event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::CellMarked { player, .. }
            | GameEvent::EdgeDrawn { player, .. }
            | GameEvent::BoxesCompleted { player, .. }
            | GameEvent::ExtraTurn { player } => Some(*player),
            GameEvent::TurnPassed { to } => Some(*to),
            GameEvent::GameOver { status } => status.winner().copied(),
            GameEvent::Reset => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_player() {
        let marked = GameEvent::CellMarked {
            player: PlayerId::SECOND,
            cell: Position::new(0, 0),
        };
        assert_eq!(marked.player(), Some(PlayerId::SECOND));

        let over = GameEvent::GameOver { status: GameStatus::Draw };
        assert_eq!(over.player(), None);

        let won = GameEvent::GameOver { status: GameStatus::Won(PlayerId::FIRST) };
        assert_eq!(won.player(), Some(PlayerId::FIRST));

        assert_eq!(GameEvent::Reset.player(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::BoxesCompleted {
            player: PlayerId::FIRST,
            boxes: SmallVec::from_slice(&[Position::new(0, 0), Position::new(0, 1)]),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
