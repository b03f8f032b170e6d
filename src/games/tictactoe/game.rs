//! Tic-Tac-Toe engine.

use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::core::error::Result;
use crate::core::{Grid, MoveError, PlayerId, PlayerMap, Position};
use crate::events::{EventQueue, GameEvent};
use crate::rules::{BoardGame, GameStatus, MoveReport};

/// Cells per side.
pub const SIDE: usize = 3;

/// Total cells; filling them all without a line is a draw.
pub const CELLS: usize = SIDE * SIDE;

/// The eight winning lines as flat cell indices: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const DRAW_TEXT: &str = "It's a Draw!";

/// Tic-Tac-Toe game state.
///
/// Cells are addressed by flat index 0..9, row-major:
///
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct TicTacToe {
    board: Grid<Option<PlayerId>>,
    current_player: PlayerId,
    status: GameStatus,
    winning_line: Option<[usize; 3]>,
    move_count: usize,
    last_move: Option<usize>,
    player_names: PlayerMap<String>,
    #[serde(skip)]
    events: EventQueue,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Create an empty board with X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Grid::new(SIDE, SIDE, None),
            current_player: PlayerId::FIRST,
            status: GameStatus::InProgress,
            winning_line: None,
            move_count: 0,
            last_move: None,
            player_names: PlayerMap::pair("X".to_string(), "O".to_string()),
            events: EventQueue::new(),
        }
    }

    /// Place the current player's mark at `index`.
    ///
    /// Does nothing if the game is over, the index is off the board, or the
    /// cell is taken.
    pub fn handle_move(&mut self, index: usize) {
        if let Err(err) = self.apply_move(index) {
            trace!(index, %err, "ignored tic-tac-toe move");
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Grid<Option<PlayerId>> {
        &self.board
    }

    /// Owner of the cell at `index`; `None` if empty or off the board.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<PlayerId> {
        self.board
            .position_of(index)
            .and_then(|pos| self.board.get(pos).copied().flatten())
    }

    /// The completed line, once somebody has won.
    #[must_use]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// Index of the most recently marked cell.
    #[must_use]
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// A copy of the current state with no pending events.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            events: EventQueue::new(),
            ..self.clone()
        }
    }

    fn target(&self, index: usize) -> Result<Position> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pos = self
            .board
            .position_of(index)
            .ok_or(MoveError::IndexOutOfBounds(index))?;
        match self.board.get(pos) {
            Some(None) => Ok(pos),
            _ => Err(MoveError::Occupied(pos)),
        }
    }

    fn completed_line(&self, player: PlayerId) -> Option<[usize; 3]> {
        WIN_LINES
            .into_iter()
            .find(|line| line.iter().all(|&i| self.cell(i) == Some(player)))
    }
}

impl BoardGame for TicTacToe {
    type Move = usize;

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
        &self.player_names[player]
    }

    fn check_move(&self, index: usize) -> Result<()> {
        self.target(index).map(|_| ())
    }

    fn legal_moves(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.target(i).is_ok()).collect()
    }

    fn apply_move(&mut self, index: usize) -> Result<MoveReport<usize>> {
        let pos = self.target(index)?;
        let mover = self.current_player;

        self.board.set(pos, Some(mover));
        self.last_move = Some(index);
        self.move_count += 1;
        self.events.push(GameEvent::CellMarked { player: mover, cell: pos });
        debug!(player = %mover, index, moves = self.move_count, "tic-tac-toe move");

        if let Some(line) = self.completed_line(mover) {
            self.status = GameStatus::Won(mover);
            self.winning_line = Some(line);
        } else if self.move_count == CELLS {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = mover.next();
            self.events.push(GameEvent::TurnPassed { to: self.current_player });
        }

        if self.status.is_terminal() {
            info!(status = ?self.status, line = ?self.winning_line, "tic-tac-toe game over");
            self.events.push(GameEvent::GameOver { status: self.status });
        }

        Ok(MoveReport {
            played: index,
            mover,
            status: self.status,
            next_player: self.current_player,
            completed_boxes: SmallVec::new(),
        })
    }

    fn reset(&mut self) {
        *self = Self::new();
        self.events.push(GameEvent::Reset);
        info!("tic-tac-toe reset");
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    fn status_message(&self) -> String {
        self.status.message(&self.player_names, DRAW_TEXT)
    }
}
