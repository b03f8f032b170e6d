//! Gomoku engine.

use serde::Serialize;
use tracing::trace;

use crate::core::error::Result;
use crate::core::{ConfigError, Grid, LineGameConfig, PlayerId, Position};
use crate::events::GameEvent;
use crate::games::line::LineGame;
use crate::rules::{BoardGame, GameStatus, MoveReport};

/// Default board side.
pub const DEFAULT_SIZE: usize = 15;

/// Stones in a row needed to win.
pub const FIVE: usize = 5;

const DRAW_TEXT: &str = "Draw!";

/// Gomoku: stones go on any empty intersection, X moves first, five or
/// more in a row wins.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct Gomoku {
    inner: LineGame,
}

/// Builder for creating a Gomoku engine.
#[derive(Clone, Debug)]
pub struct GomokuBuilder {
    size: usize,
    player_names: (String, String),
}

impl Default for GomokuBuilder {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            player_names: ("X".to_string(), "O".to_string()),
        }
    }
}

impl GomokuBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board side length.
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = (first.into(), second.into());
        self
    }

    /// Build the engine. Boards smaller than 5×5 are rejected.
    pub fn build(self) -> std::result::Result<Gomoku, ConfigError> {
        let (first, second) = self.player_names;
        let config = LineGameConfig::gomoku(self.size).with_player_names(first, second);
        Ok(Gomoku {
            inner: LineGame::new(config)?,
        })
    }
}

impl Default for Gomoku {
    fn default() -> Self {
        Self::new()
    }
}

impl Gomoku {
    /// Create an empty 15×15 board with X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: LineGame::from_valid(LineGameConfig::gomoku(DEFAULT_SIZE)),
        }
    }

    /// Start building a non-default board.
    pub fn builder() -> GomokuBuilder {
        GomokuBuilder::new()
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.inner.config().rows
    }

    /// Place the current player's stone at `(row, col)`.
    ///
    /// Does nothing if the game is over or the cell is off the board or
    /// taken.
    pub fn handle_move(&mut self, row: usize, col: usize) {
        if let Err(err) = self.apply_move(Position::new(row, col)) {
            trace!(row, col, %err, "ignored gomoku move");
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Grid<Option<PlayerId>> {
        self.inner.board()
    }

    /// Owner of the stone at `(row, col)`, if any.
    #[must_use]
    pub fn stone(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.inner.cell(Position::new(row, col))
    }

    /// The most recently placed stone.
    #[must_use]
    pub fn last_move(&self) -> Option<Position> {
        self.inner.last_move()
    }

    /// The stones that won the game; empty otherwise.
    #[must_use]
    pub fn winning_positions(&self) -> &[Position] {
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

impl BoardGame for Gomoku {
    type Move = Position;

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

    fn check_move(&self, pos: Position) -> Result<()> {
        self.inner.check_move(pos)
    }

    fn legal_moves(&self) -> Vec<Position> {
        self.inner.legal_moves()
    }

    fn apply_move(&mut self, pos: Position) -> Result<MoveReport<Position>> {
        self.inner.apply_move(pos)
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
