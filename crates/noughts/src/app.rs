//! Interactive game state: the engine plus cursor and notice.

use crate::notice::Notice;
use crossterm::event::KeyCode;
use noughts_core::{GameEngine, Player, Position};
use tracing::{debug, instrument};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor up one row.
    Up,
    /// Move the cursor down one row.
    Down,
    /// Move the cursor left one column.
    Left,
    /// Move the cursor right one column.
    Right,
    /// Mark the cell under the cursor.
    Mark,
    /// Mark a specific cell.
    MarkAt(Position),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

impl Action {
    /// Maps a key to an action. Digits `1`-`9` address cells row-major.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Mark),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| (d as usize).checked_sub(1))
                .and_then(Position::from_index)
                .map(Action::MarkAt),
            _ => None,
        }
    }
}

/// State of the interactive front-end.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    notice: Option<Notice>,
    reset_revealed: bool,
    should_quit: bool,
}

impl App {
    /// Creates the app with a fresh engine and the cursor in the center.
    #[instrument]
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::CENTER,
            notice: None,
            reset_revealed: false,
            should_quit: false,
        }
    }

    /// The engine being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The cell the cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The notice from the last action, if any.
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True once the first mark has landed; stays true across resets.
    pub fn is_reset_available(&self) -> bool {
        self.reset_revealed
    }

    /// The player to show in the turn indicator; hidden once someone wins.
    /// After a draw it keeps showing the player who would have moved next.
    pub fn turn_indicator(&self) -> Option<Player> {
        if self.engine.has_winner() {
            None
        } else {
            Some(self.engine.next_turn())
        }
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = Action::from_key(key) {
            self.apply(action);
        }
    }

    /// Applies an action.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Up => self.move_cursor(-1, 0),
            Action::Down => self.move_cursor(1, 0),
            Action::Left => self.move_cursor(0, -1),
            Action::Right => self.move_cursor(0, 1),
            Action::Mark => self.mark(self.cursor),
            Action::MarkAt(pos) => {
                self.cursor = pos;
                self.mark(pos);
            }
            Action::Reset => {
                if self.reset_revealed {
                    self.engine.reset();
                    self.notice = None;
                } else {
                    debug!("Nothing to reset");
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn mark(&mut self, pos: Position) {
        let result = self.engine.mark(pos);
        if result.is_ok() {
            self.reset_revealed = true;
        }
        self.notice = Notice::from_result(&result);
    }

    fn move_cursor(&mut self, d_row: i8, d_col: i8) {
        let row = self.cursor.row().saturating_add_signed(d_row);
        let col = self.cursor.col().saturating_add_signed(d_col);
        // Stay put at the edges.
        if let Ok(pos) = Position::new(row, col) {
            self.cursor = pos;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
