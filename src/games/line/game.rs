//! Configurable k-in-a-row engine.

use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::core::error::Result;
use crate::core::{
    find_winning_run, ConfigError, Grid, LineGameConfig, MoveError, Placement, PlayerId, Position, Run,
};
use crate::events::{EventQueue, GameEvent};
use crate::rules::{BoardGame, GameStatus, MoveReport};

const DRAW_TEXT: &str = "Draw!";

/// A k-in-a-row game on a fixed rectangular board.
///
/// Moves name a cell. Under `Placement::Gravity` the only legal cell of a
/// column is its lowest empty one; use `landing_cell` to resolve a column.
///
/// ## Example
///
/// ```
/// use rust_boardgames::core::{LineGameConfig, PlayerId, Position};
/// use rust_boardgames::games::line::LineGame;
/// use rust_boardgames::rules::{BoardGame, GameStatus};
///
/// let config = LineGameConfig::gomoku(3).with_win_length(3);
/// let mut game = LineGame::new(config).unwrap();
///
/// for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
///     game.apply_move(Position::new(row, col)).unwrap();
/// }
/// assert_eq!(game.status(), GameStatus::Won(PlayerId::FIRST));
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct LineGame {
    config: LineGameConfig,
    board: Grid<Option<PlayerId>>,
    current_player: PlayerId,
    status: GameStatus,
    move_count: usize,
    last_move: Option<Position>,
    winning_cells: Run,
    #[serde(skip)]
    events: EventQueue,
}

impl LineGame {
    /// Create an empty board for `config`.
    pub fn new(config: LineGameConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    /// Build from one of the built-in configurations.
    pub(crate) fn from_valid(config: LineGameConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "built-in config must be valid");
        Self::fresh(config)
    }

    fn fresh(config: LineGameConfig) -> Self {
        Self {
            board: Grid::new(config.rows, config.cols, None),
            config,
            current_player: PlayerId::FIRST,
            status: GameStatus::InProgress,
            move_count: 0,
            last_move: None,
            winning_cells: Run::new(),
            events: EventQueue::new(),
        }
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &LineGameConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Grid<Option<PlayerId>> {
        &self.board
    }

    /// Owner of a cell; `None` if empty or off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<PlayerId> {
        self.board.get(pos).copied().flatten()
    }

    /// The most recently marked cell.
    #[must_use]
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// The run that won the game; empty while nobody has won.
    ///
    /// Ordered pivot first, then outward along the positive sense of the
    /// winning axis, then along the negative sense.
    #[must_use]
    pub fn winning_cells(&self) -> &[Position] {
        &self.winning_cells
    }

    /// The lowest empty cell of `column`.
    ///
    /// Fails if the game is over, the column does not exist, or it is full.
    pub fn landing_cell(&self, column: usize) -> Result<Position> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= self.config.cols {
            return Err(MoveError::NoSuchColumn(column));
        }
        (0..self.config.rows)
            .rev()
            .map(|row| Position::new(row, column))
            .find(|&pos| self.board.get(pos) == Some(&None))
            .ok_or(MoveError::ColumnFull(column))
    }

    /// A copy of the current state with no pending events.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            events: EventQueue::new(),
            ..self.clone()
        }
    }

    fn target(&self, pos: Position) -> Result<Position> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        match self.board.get(pos) {
            None => return Err(MoveError::OutOfBounds(pos)),
            Some(Some(_)) => return Err(MoveError::Occupied(pos)),
            Some(None) => {}
        }
        if self.config.placement == Placement::Gravity && self.landing_cell(pos.col)? != pos {
            return Err(MoveError::Floating(pos));
        }
        Ok(pos)
    }
}

impl BoardGame for LineGame {
    type Move = Position;

    fn current_player(&self) -> PlayerId {
        self.current_player
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn move_count(&self) -> usize {
        self.move_count
    }

    fn player_name(&self, player: PlayerId) -> &str {
        &self.config.player_names[player]
    }

    fn check_move(&self, pos: Position) -> Result<()> {
        self.target(pos).map(|_| ())
    }

    fn legal_moves(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        match self.config.placement {
            Placement::Gravity => (0..self.config.cols)
                .filter_map(|col| self.landing_cell(col).ok())
                .collect(),
            Placement::Direct => self
                .board
                .enumerate()
                .filter(|(_, cell)| cell.is_none())
                .map(|(pos, _)| pos)
                .collect(),
        }
    }

    fn apply_move(&mut self, pos: Position) -> Result<MoveReport<Position>> {
        let pos = self.target(pos)?;
        let mover = self.current_player;

        self.board.set(pos, Some(mover));
        self.last_move = Some(pos);
        self.move_count += 1;
        self.events.push(GameEvent::CellMarked { player: mover, cell: pos });
        debug!(player = %mover, row = pos.row, col = pos.col, moves = self.move_count, "line game move");

        let win_length = self.config.win_length;
        if let Some((axis, run)) = find_winning_run(&self.board, pos, win_length, &self.config.scan_order) {
            trace!(?axis, length = run.len(), "winning run");
            self.status = GameStatus::Won(mover);
            self.winning_cells = run;
        } else if self.move_count == self.config.cell_count() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = mover.next();
            self.events.push(GameEvent::TurnPassed { to: self.current_player });
        }

        if self.status.is_terminal() {
            info!(status = ?self.status, moves = self.move_count, "line game over");
            self.events.push(GameEvent::GameOver { status: self.status });
        }

        Ok(MoveReport {
            played: pos,
            mover,
            status: self.status,
            next_player: self.current_player,
            completed_boxes: SmallVec::new(),
        })
    }

    fn reset(&mut self) {
        *self = Self::fresh(self.config.clone());
        self.events.push(GameEvent::Reset);
        info!(rows = self.config.rows, cols = self.config.cols, "line game reset");
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    fn status_message(&self) -> String {
        self.status.message(&self.config.player_names, DRAW_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PlayerId = PlayerId::FIRST;
    const B: PlayerId = PlayerId::SECOND;

    fn direct(rows: usize, cols: usize, win_length: usize) -> LineGame {
        let mut config = LineGameConfig::gomoku(rows.max(cols)).with_win_length(win_length);
        config.rows = rows;
        config.cols = cols;
        LineGame::new(config).unwrap()
    }

    fn gravity(rows: usize, cols: usize, win_length: usize) -> LineGame {
        let mut config = LineGameConfig::connect_four().with_win_length(win_length);
        config.rows = rows;
        config.cols = cols;
        LineGame::new(config).unwrap()
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = LineGame::new(LineGameConfig::gomoku(3));
        assert!(matches!(result, Err(ConfigError::WinLengthTooLong { .. })));
    }

    #[test]
    fn test_direct_placement_marks_named_cell() {
        let mut game = direct(3, 3, 3);
        let report = game.apply_move(Position::new(2, 1)).unwrap();

        assert_eq!(report.mover, A);
        assert_eq!(report.next_player, B);
        assert_eq!(game.cell(Position::new(2, 1)), Some(A));
        assert_eq!(game.last_move(), Some(Position::new(2, 1)));
    }

    #[test]
    fn test_gravity_only_accepts_landing_cell() {
        let mut game = gravity(3, 2, 2);

        assert_eq!(game.landing_cell(0), Ok(Position::new(2, 0)));
        assert_eq!(
            game.apply_move(Position::new(0, 0)),
            Err(MoveError::Floating(Position::new(0, 0)))
        );

        game.apply_move(Position::new(2, 0)).unwrap();
        assert_eq!(game.landing_cell(0), Ok(Position::new(1, 0)));
        assert_eq!(game.legal_moves(), vec![Position::new(1, 0), Position::new(2, 1)]);
    }

    #[test]
    fn test_column_errors() {
        let mut game = gravity(2, 2, 2);

        assert_eq!(game.landing_cell(2), Err(MoveError::NoSuchColumn(2)));

        game.apply_move(Position::new(1, 0)).unwrap();
        game.apply_move(Position::new(0, 0)).unwrap();
        assert_eq!(game.landing_cell(0), Err(MoveError::ColumnFull(0)));
    }

    #[test]
    fn test_out_of_bounds_cell() {
        let mut game = direct(3, 3, 3);
        assert_eq!(
            game.apply_move(Position::new(3, 0)),
            Err(MoveError::OutOfBounds(Position::new(3, 0)))
        );
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_winning_run_order() {
        let mut game = direct(1, 5, 3);
        // A: 0, 2, then 1 joins them; B: 4, 3 (never three in a row)
        for col in [0, 4, 2, 3, 1] {
            game.apply_move(Position::new(0, col)).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Won(A));
        assert_eq!(
            game.winning_cells(),
            &[Position::new(0, 1), Position::new(0, 2), Position::new(0, 0)]
        );
    }

    #[test]
    fn test_full_board_draw() {
        let mut game = direct(1, 2, 2);

        game.apply_move(Position::new(0, 0)).unwrap();
        let report = game.apply_move(Position::new(0, 1)).unwrap();

        assert_eq!(report.status, GameStatus::Draw);
        assert_eq!(game.status_message(), "Draw!");
        assert_eq!(game.current_player(), B);
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.apply_move(Position::new(0, 0)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_reset_keeps_config() {
        let mut game = direct(4, 4, 3);
        game.apply_move(Position::new(1, 1)).unwrap();

        game.reset();

        assert_eq!(game.config().rows, 4);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.current_player(), A);
        assert!(game.board().iter().all(Option::is_none));
        assert!(game.winning_cells().is_empty());
        assert_eq!(game.drain_events(), vec![GameEvent::Reset]);
    }

    #[test]
    fn test_reset_discards_undrained_events() {
        let mut game = gravity(2, 2, 2);
        for _ in 0..20 {
            game.apply_move(Position::new(1, 0)).unwrap();
            game.apply_move(Position::new(1, 1)).unwrap();
            game.reset();
        }

        assert_eq!(game.drain_events(), vec![GameEvent::Reset]);
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_moves() {
        let mut game = direct(3, 3, 3);
        game.apply_move(Position::new(0, 0)).unwrap();
        let snapshot = game.snapshot();

        game.apply_move(Position::new(1, 1)).unwrap();
        game.reset();

        assert_eq!(snapshot.move_count(), 1);
        assert_eq!(snapshot.cell(Position::new(0, 0)), Some(A));
        assert_eq!(snapshot.cell(Position::new(1, 1)), None);
    }
}
