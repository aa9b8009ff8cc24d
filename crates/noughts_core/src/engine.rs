//! The tic-tac-toe rules engine.

use super::error::MoveError;
use super::invariants::assert_invariants;
use super::line::Line;
use super::outcome::{Phase, WinResult};
use super::position::Position;
use super::rules::{check_winner, is_draw};
use super::state::GameState;
use super::types::{Player, Square};
use tracing::{debug, info, instrument, warn};

/// Owns one game's state and applies moves to it.
///
/// The engine is the only writer of its [`GameState`]. Presentation code
/// calls [`mark_cell`](Self::mark_cell) and [`reset`](Self::reset), then
/// renders from the returned [`WinResult`] and the read accessors.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine with no marks placed.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Starts over: empty board, X to move.
    #[instrument(skip(self), fields(marked_cells = self.state.marked_cells()))]
    pub fn reset(&mut self) {
        self.state = GameState::fresh_game();
        info!("Game reset");
    }

    /// Marks the cell at 1-based `(row, col)` for the player whose turn it is.
    ///
    /// Checks, in order: the coordinates are on the board, no winner has
    /// been decided yet, the cell is empty. The first failing check is
    /// returned and the state is left untouched.
    ///
    /// On success the turn passes to the other player unless the move won
    /// or filled the board, in which case the turn is frozen until
    /// [`reset`](Self::reset).
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidPosition`] for coordinates outside `1..=3`
    /// - [`MoveError::GameOver`] once a player has won
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(player = %self.state.next_turn()))]
    pub fn mark_cell(&mut self, row: u8, col: u8) -> Result<WinResult, MoveError> {
        let position = Position::new(row, col).inspect_err(|e| warn!(error = %e, "Move rejected"))?;
        self.mark(position)
    }

    /// Same as [`mark_cell`](Self::mark_cell) for an already validated position.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] or [`MoveError::CellOccupied`].
    #[instrument(skip(self), fields(player = %self.state.next_turn()))]
    pub fn mark(&mut self, position: Position) -> Result<WinResult, MoveError> {
        if let Some(win) = self.state.win() {
            let err = MoveError::GameOver { winner: win.player };
            warn!(error = %err, "Move rejected");
            return Err(err);
        }

        if let Square::Occupied(holder) = self.state.board().get(position) {
            let err = MoveError::CellOccupied { position, holder };
            warn!(error = %err, "Move rejected");
            return Err(err);
        }

        let player = self.state.next_turn();
        self.state.place(position, player);
        debug!(marked_cells = self.state.marked_cells(), "Cell marked");

        let result = if let Some(win) = check_winner(self.state.board()) {
            self.state.record_win(win);
            info!(winner = %win.player, line = %win.line, "Game won");
            WinResult::Winner {
                player: win.player,
                line: win.line,
            }
        } else if is_draw(self.state.board()) {
            self.state.record_draw();
            info!("Game drawn");
            WinResult::Draw
        } else {
            self.state.pass_turn();
            debug!(next_turn = %self.state.next_turn(), "Turn passed");
            WinResult::None
        };

        assert_invariants(&self.state);

        Ok(result)
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Where the game is in its lifecycle.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The player who marks next.
    pub fn next_turn(&self) -> Player {
        self.state.next_turn()
    }

    /// Number of marked cells.
    pub fn marked_cells(&self) -> u8 {
        self.state.marked_cells()
    }

    /// True once a line has been completed.
    pub fn has_winner(&self) -> bool {
        self.state.has_winner()
    }

    /// The line completed by the winning move, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.state.winning_line()
    }

    /// The square at a position.
    pub fn cell(&self, position: Position) -> Square {
        self.state.board().get(position)
    }

    /// Positions that would accept a mark right now, in row-major order.
    ///
    /// Empty once the game is won, even if cells remain unmarked.
    #[instrument(skip(self))]
    pub fn available_cells(&self) -> Vec<Position> {
        if self.has_winner() {
            return Vec::new();
        }
        Position::ALL
            .into_iter()
            .filter(|pos| self.state.board().is_empty(*pos))
            .collect()
    }
}
