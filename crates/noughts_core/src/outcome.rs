//! Results reported back to the presentation layer.

use super::line::Line;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// What a successful move produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinResult {
    /// The game goes on; the turn has passed to the other player.
    #[default]
    None,
    /// The move completed a line.
    Winner {
        /// The player who completed the line.
        player: Player,
        /// The completed line, for highlighting.
        line: Line,
    },
    /// The board filled up without a completed line.
    Draw,
}

impl WinResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            WinResult::Winner { player, .. } => Some(*player),
            WinResult::None | WinResult::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            WinResult::Winner { line, .. } => Some(*line),
            WinResult::None | WinResult::Draw => None,
        }
    }

    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WinResult::None)
    }
}

impl std::fmt::Display for WinResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinResult::None => write!(f, "No result yet"),
            WinResult::Winner { player, line } => write!(f, "Player {} wins on {}", player, line),
            WinResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Lifecycle of a single game.
///
/// `NotStarted -> InProgress -> {Won, Drawn}`. A reset from any phase
/// lands on `InProgress` with an empty board.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Phase {
    /// Fresh engine, no mark placed yet.
    #[default]
    #[strum(to_string = "not started")]
    NotStarted,
    /// Moves are being accepted.
    #[strum(to_string = "in progress")]
    InProgress,
    /// A player completed a line.
    #[strum(to_string = "won")]
    Won,
    /// The board filled without a winner.
    #[strum(to_string = "drawn")]
    Drawn,
}

impl Phase {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Drawn)
    }
}
