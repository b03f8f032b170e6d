//! Random playouts over any `BoardGame`.
//!
//! Used by tests and benchmarks to drive engines through reproducible
//! games: the same seed always picks the same moves.

use tracing::{debug, warn};

use crate::core::GameRng;
use crate::rules::{BoardGame, GameStatus};

/// The result of a playout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playout<M> {
    /// Moves applied, in order.
    pub moves: Vec<M>,

    /// Status when the playout stopped.
    pub status: GameStatus,
}

impl<M> Playout<M> {
    /// Check if the playout reached the end of the game.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Play uniformly random legal moves until the game ends.
///
/// `max_moves` bounds the playout; 0 means no limit.
///
/// ## Example
///
/// ```
/// use rust_boardgames::core::GameRng;
/// use rust_boardgames::games::TicTacToe;
/// use rust_boardgames::playout::random_playout;
///
/// let mut game = TicTacToe::new();
/// let playout = random_playout(&mut game, &mut GameRng::new(7), 0);
///
/// assert!(playout.finished());
/// assert!(playout.moves.len() >= 5);
/// ```
pub fn random_playout<G: BoardGame>(
    game: &mut G,
    rng: &mut GameRng,
    max_moves: usize,
) -> Playout<G::Move> {
    let mut moves = Vec::new();

    while max_moves == 0 || moves.len() < max_moves {
        let legal = game.legal_moves();
        let Some(&mv) = rng.choose(&legal) else {
            break;
        };
        if let Err(err) = game.apply_move(mv) {
            warn!(?mv, %err, "legal move was refused");
            break;
        }
        moves.push(mv);
    }

    debug!(moves = moves.len(), status = ?game.status(), seed = rng.seed(), "playout finished");
    Playout {
        moves,
        status: game.status(),
    }
}

/// Apply moves in order, skipping refused ones.
///
/// Returns how many were accepted.
pub fn replay<G: BoardGame>(game: &mut G, moves: impl IntoIterator<Item = G::Move>) -> usize {
    moves
        .into_iter()
        .filter(|&mv| game.apply_move(mv).is_ok())
        .count()
}
