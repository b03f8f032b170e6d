//! Connect Four engine.

use serde::Serialize;
use tracing::trace;

use crate::core::error::Result;
use crate::core::{Grid, LineGameConfig, PlayerId, Position};
use crate::events::GameEvent;
use crate::games::line::LineGame;
use crate::rules::{BoardGame, GameStatus, MoveReport};

/// Board rows.
pub const ROWS: usize = 6;

/// Board columns.
pub const COLUMNS: usize = 7;

/// Discs in a row needed to win.
pub const CONNECT: usize = 4;

const DRAW_TEXT: &str = "Game Draw!";

/// Connect Four: Red moves first and discs drop to the lowest empty row.
///
/// Row 0 is the top of the board, so the first disc in a column lands in
/// row 5.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct ConnectFour {
    inner: LineGame,
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectFour {
    /// Create an empty board with Red to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: LineGame::from_valid(LineGameConfig::connect_four()),
        }
    }

    /// True iff the game is in progress and `column` has room.
    #[must_use]
    pub fn can_drop(&self, column: usize) -> bool {
        self.inner.landing_cell(column).is_ok()
    }

    /// Drop the current player's disc into `column`.
    ///
    /// Does nothing if `can_drop(column)` is false.
    pub fn drop_disc(&mut self, column: usize) {
        if let Err(err) = self.apply_move(column) {
            trace!(column, %err, "ignored connect four drop");
        }
    }

    /// The board, row 0 at the top.
    #[must_use]
    pub fn board(&self) -> &Grid<Option<PlayerId>> {
        self.inner.board()
    }

    /// Owner of the disc at `(row, col)`, if any.
    #[must_use]
    pub fn disc(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.inner.cell(Position::new(row, col))
    }

    /// Where the most recent disc landed.
    #[must_use]
    pub fn last_move(&self) -> Option<Position> {
        self.inner.last_move()
    }

    /// The four-or-more discs that won the game; empty otherwise.
    #[must_use]
    pub fn winning_cells(&self) -> &[Position] {
        self.inner.winning_cells()
    }

    /// A copy of the current state with no pending events.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            inner: self.inner.snapshot(),
        }
    }
}

impl BoardGame for ConnectFour {
    type Move = usize;

    fn current_player(&self) -> PlayerId {
        self.inner.current_player()
    }

    fn status(&self) -> GameStatus {
        self.inner.status()
    }

    fn move_count(&self) -> usize {
        self.inner.move_count()
    }

    fn player_name(&self, player: PlayerId) -> &str {
        self.inner.player_name(player)
    }

    fn check_move(&self, column: usize) -> Result<()> {
        self.inner.landing_cell(column).map(|_| ())
    }

    fn legal_moves(&self) -> Vec<usize> {
        (0..COLUMNS).filter(|&c| self.can_drop(c)).collect()
    }

    fn apply_move(&mut self, column: usize) -> Result<MoveReport<usize>> {
        let cell = self.inner.landing_cell(column)?;
        self.inner
            .apply_move(cell)
            .map(|report| report.with_played(column))
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        self.inner.drain_events()
    }

    fn status_message(&self) -> String {
        self.status()
            .message(&self.inner.config().player_names, DRAW_TEXT)
    }
}
