//! Complete game state.

use super::line::Line;
use super::outcome::Phase;
use super::position::Position;
use super::rules::Win;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// Everything the engine knows about the current game.
///
/// Only [`GameEngine`](crate::GameEngine) mutates a `GameState`; callers get
/// shared borrows or clones, which makes before/after snapshots cheap to
/// compare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    next_turn: Player,
    marked_cells: u8,
    win: Option<Win>,
    phase: Phase,
}

impl GameState {
    /// State of a brand new engine.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_turn: Player::X,
            marked_cells: 0,
            win: None,
            phase: Phase::NotStarted,
        }
    }

    /// Empty board, ready for the first move.
    pub(crate) fn fresh_game() -> Self {
        Self {
            phase: Phase::InProgress,
            ..Self::new()
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who marks next.
    pub fn next_turn(&self) -> Player {
        self.next_turn
    }

    /// Number of cells holding a mark (0-9).
    pub fn marked_cells(&self) -> u8 {
        self.marked_cells
    }

    /// True once a line has been completed.
    pub fn has_winner(&self) -> bool {
        self.win.is_some()
    }

    /// The completed line and its owner, if any.
    pub fn win(&self) -> Option<Win> {
        self.win
    }

    /// The line completed by the winning move.
    pub fn winning_line(&self) -> Option<Line> {
        self.win.map(|w| w.line)
    }

    /// Where the game is in its lifecycle.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn place(&mut self, pos: Position, player: Player) {
        self.board.set(pos, Square::Occupied(player));
        self.marked_cells += 1;
        self.phase = Phase::InProgress;
    }

    pub(crate) fn record_win(&mut self, win: Win) {
        self.win = Some(win);
        self.phase = Phase::Won;
    }

    pub(crate) fn record_draw(&mut self) {
        self.phase = Phase::Drawn;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.next_turn = self.next_turn.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
