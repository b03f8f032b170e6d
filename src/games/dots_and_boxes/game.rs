//! Dots-and-Boxes engine.

use std::hash::BuildHasherDefault;

use rustc_hash::FxHasher;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::core::error::Result;
use crate::core::{
    ConfigError, DotsAndBoxesConfig, Edge, Grid, MoveError, Orientation, PlayerId, PlayerMap, Position,
};
use crate::events::{EventQueue, GameEvent};
use crate::rules::{BoardGame, GameStatus, MoveReport};

const TIE_TEXT: &str = "It's a Tie!";

/// Edge owners keyed by line-grid coordinate.
type EdgeMap = im::HashMap<Position, PlayerId, BuildHasherDefault<FxHasher>>;

/// Boxes closed by a single move. At most two on a square board.
pub type CompletedBoxes = SmallVec<[Position; 2]>;

/// Dots-and-Boxes: players take turns drawing edges; closing a box scores
/// it and earns another turn.
///
/// ## Example
///
/// ```
/// use rust_boardgames::core::{DotsAndBoxesConfig, PlayerId, Position};
/// use rust_boardgames::games::dots_and_boxes::{DotsAndBoxes, Orientation};
/// use rust_boardgames::rules::BoardGame;
///
/// let mut game = DotsAndBoxes::with_config(DotsAndBoxesConfig::default().with_grid_size(1)).unwrap();
/// game.place_edge(Position::new(0, 1), Orientation::Horizontal);
/// game.place_edge(Position::new(2, 1), Orientation::Horizontal);
/// game.place_edge(Position::new(1, 0), Orientation::Vertical);
/// game.place_edge(Position::new(1, 2), Orientation::Vertical);
///
/// assert_eq!(game.score(PlayerId::SECOND), 1);
/// assert_eq!(game.status_message(), "Player 2 Wins!");
/// ```
#[derive(Clone, Debug)]
pub struct DotsAndBoxes {
    config: DotsAndBoxesConfig,
    horizontal: EdgeMap,
    vertical: EdgeMap,
    boxes: Grid<Option<PlayerId>>,
    scores: PlayerMap<usize>,
    current_player: PlayerId,
    status: GameStatus,
    move_count: usize,
    last_edge: Option<Edge>,
    last_completed: CompletedBoxes,
    events: EventQueue,
}

impl Default for DotsAndBoxes {
    fn default() -> Self {
        Self::new()
    }
}

impl DotsAndBoxes {
    /// Create a 4×4-box board with Player 1 to move.
    #[must_use]
    pub fn new() -> Self {
        Self::fresh(DotsAndBoxesConfig::default())
    }

    /// Create a board for `config`.
    pub fn with_config(config: DotsAndBoxesConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    fn fresh(config: DotsAndBoxesConfig) -> Self {
        Self {
            boxes: Grid::new(config.grid_size, config.grid_size, None),
            config,
            horizontal: EdgeMap::default(),
            vertical: EdgeMap::default(),
            scores: PlayerMap::with_default(),
            current_player: PlayerId::FIRST,
            status: GameStatus::InProgress,
            move_count: 0,
            last_edge: None,
            last_completed: CompletedBoxes::new(),
            events: EventQueue::new(),
        }
    }

    /// Boxes per side.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.config.grid_size
    }

    #[must_use]
    pub fn config(&self) -> &DotsAndBoxesConfig {
        &self.config
    }

    /// Draw an edge for the current player.
    ///
    /// Does nothing if the game is over, `at` is not an edge of this
    /// orientation, or the edge is already drawn.
    pub fn place_edge(&mut self, at: Position, orientation: Orientation) {
        if let Err(err) = self.apply_move(Edge::new(at, orientation)) {
            trace!(row = at.row, col = at.col, ?orientation, %err, "ignored edge");
        }
    }

    /// Who drew an edge, if anyone.
    #[must_use]
    pub fn edge_owner(&self, edge: Edge) -> Option<PlayerId> {
        self.edges(edge.orientation).get(&edge.at).copied()
    }

    /// Check if an edge has been drawn.
    #[must_use]
    pub fn is_drawn(&self, edge: Edge) -> bool {
        self.edges(edge.orientation).contains_key(&edge.at)
    }

    /// Number of edges drawn so far.
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    /// Box ownership, `grid_size × grid_size`.
    #[must_use]
    pub fn boxes(&self) -> &Grid<Option<PlayerId>> {
        &self.boxes
    }

    /// Owner of box `(row, col)`, if closed.
    #[must_use]
    pub fn box_owner(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.boxes.get(Position::new(row, col)).copied().flatten()
    }

    /// Boxes owned by `player`.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> usize {
        self.scores[player]
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<usize> {
        &self.scores
    }

    /// The most recently drawn edge.
    #[must_use]
    pub fn last_edge(&self) -> Option<Edge> {
        self.last_edge
    }

    /// Boxes closed by the most recent move; empty if it closed none.
    #[must_use]
    pub fn last_completed_boxes(&self) -> &[Position] {
        &self.last_completed
    }

    /// A copy of the current state with no pending events.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            events: EventQueue::new(),
            ..self.clone()
        }
    }

    fn edges(&self, orientation: Orientation) -> &EdgeMap {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn edges_mut(&mut self, orientation: Orientation) -> &mut EdgeMap {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    /// Unowned boxes whose four sides are all drawn.
    fn newly_completed(&self) -> CompletedBoxes {
        self.boxes
            .enumerate()
            .filter(|(_, owner)| owner.is_none())
            .map(|(cell, _)| cell)
            .filter(|&cell| Edge::sides_of(cell).iter().all(|&side| self.is_drawn(side)))
            .collect()
    }

    fn final_status(&self) -> GameStatus {
        let first = self.scores[PlayerId::FIRST];
        let second = self.scores[PlayerId::SECOND];
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameStatus::Won(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameStatus::Won(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameStatus::Draw,
        }
    }
}

impl BoardGame for DotsAndBoxes {
    type Move = Edge;

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

    fn check_move(&self, edge: Edge) -> Result<()> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !edge.is_valid(self.config.grid_size) {
            return Err(MoveError::InvalidEdge(edge.at));
        }
        if self.is_drawn(edge) {
            return Err(MoveError::EdgeTaken(edge.at));
        }
        Ok(())
    }

    fn legal_moves(&self) -> Vec<Edge> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        Edge::all(self.config.grid_size)
            .filter(|&edge| !self.is_drawn(edge))
            .collect()
    }

    fn apply_move(&mut self, edge: Edge) -> Result<MoveReport<Edge>> {
        self.check_move(edge)?;
        let mover = self.current_player;

        self.edges_mut(edge.orientation).insert(edge.at, mover);
        self.last_edge = Some(edge);
        self.move_count += 1;
        self.events.push(GameEvent::EdgeDrawn { player: mover, edge });
        debug!(player = %mover, %edge, moves = self.move_count, "edge drawn");

        let completed = self.newly_completed();
        for &cell in &completed {
            self.boxes.set(cell, Some(mover));
            self.scores[mover] += 1;
        }
        self.last_completed = completed.clone();

        if completed.is_empty() {
            self.current_player = mover.next();
        } else {
            debug!(player = %mover, boxes = completed.len(), score = self.scores[mover], "boxes completed");
            self.events.push(GameEvent::BoxesCompleted {
                player: mover,
                boxes: completed.clone(),
            });
        }

        if self.boxes.iter().all(Option::is_some) {
            self.status = self.final_status();
            info!(
                status = ?self.status,
                first = self.scores[PlayerId::FIRST],
                second = self.scores[PlayerId::SECOND],
                "dots and boxes over"
            );
            self.events.push(GameEvent::GameOver { status: self.status });
        } else if completed.is_empty() {
            self.events.push(GameEvent::TurnPassed { to: self.current_player });
        } else {
            self.events.push(GameEvent::ExtraTurn { player: mover });
        }

        Ok(MoveReport {
            played: edge,
            mover,
            status: self.status,
            next_player: self.current_player,
            completed_boxes: completed,
        })
    }

    fn reset(&mut self) {
        *self = Self::fresh(self.config.clone());
        self.events.push(GameEvent::Reset);
        info!(grid_size = self.config.grid_size, "dots and boxes reset");
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    fn status_message(&self) -> String {
        self.status.message(&self.config.player_names, TIE_TEXT)
    }
}
