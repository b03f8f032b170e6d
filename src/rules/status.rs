//! Game status shared by every engine.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Where a game stands.
///
/// `Won` and `Draw` are terminal: an engine accepts no further moves until
/// it is reset. A status only ever moves forward from `InProgress`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus<P = PlayerId> {
    /// Moves are still being accepted.
    InProgress,
    /// The given player has won.
    Won(P),
    /// Nobody won: a full board, or a tied score.
    Draw,
}

impl<P> Default for GameStatus<P> {
    fn default() -> Self {
        GameStatus::InProgress
    }
}

impl<P> GameStatus<P> {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<&P> {
        match self {
            GameStatus::Won(p) => Some(p),
            _ => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &P) -> bool
    where
        P: PartialEq,
    {
        self.winner() == Some(player)
    }

    /// Convert the player representation.
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> GameStatus<Q> {
        match self {
            GameStatus::InProgress => GameStatus::InProgress,
            GameStatus::Won(p) => GameStatus::Won(f(p)),
            GameStatus::Draw => GameStatus::Draw,
        }
    }
}

impl GameStatus<PlayerId> {
    /// Banner text for this status.
    ///
    /// Wins read "<name> Wins!"; draws use the game's own `draw_text`.
    #[must_use]
    pub fn message(&self, names: &PlayerMap<String>, draw_text: &str) -> String {
        match self {
            GameStatus::InProgress => "Game in progress".to_string(),
            GameStatus::Won(p) => format!("{} Wins!", names[*p]),
            GameStatus::Draw => draw_text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!GameStatus::<PlayerId>::InProgress.is_terminal());
        assert!(GameStatus::Won(PlayerId::FIRST).is_terminal());
        assert!(GameStatus::<PlayerId>::Draw.is_terminal());
        assert_eq!(GameStatus::<PlayerId>::default(), GameStatus::InProgress);
    }

    #[test]
    fn test_is_winner() {
        let won = GameStatus::Won(PlayerId::SECOND);
        assert!(won.is_winner(&PlayerId::SECOND));
        assert!(!won.is_winner(&PlayerId::FIRST));
        assert!(!GameStatus::<PlayerId>::Draw.is_winner(&PlayerId::FIRST));
    }

    #[test]
    fn test_map_player_type() {
        let won: GameStatus<&str> = GameStatus::Won(PlayerId::FIRST).map(|_| "Red");
        assert_eq!(won, GameStatus::Won("Red"));
        assert_eq!(GameStatus::<PlayerId>::Draw.map(|p| p.index()), GameStatus::Draw);
    }

    #[test]
    fn test_messages() {
        let names = PlayerMap::pair("Red".to_string(), "Yellow".to_string());

        assert_eq!(GameStatus::<PlayerId>::InProgress.message(&names, "Game Draw!"), "Game in progress");
        assert_eq!(GameStatus::Won(PlayerId::SECOND).message(&names, "Game Draw!"), "Yellow Wins!");
        assert_eq!(GameStatus::<PlayerId>::Draw.message(&names, "Game Draw!"), "Game Draw!");
    }

    #[test]
    fn test_status_serialization() {
        let status = GameStatus::Won(PlayerId::FIRST);
        let json = serde_json::to_string(&status).unwrap();
        let deserialized: GameStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, deserialized);
    }
}
