//! Errors returned when a move is rejected.

use super::position::Position;
use super::types::Player;

/// Error that can occur when applying a move.
///
/// Every variant is recoverable: the engine state is left untouched and the
/// caller decides how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// A winner has already been decided; reset before playing again.
    #[display("Game is over: {winner} has already won")]
    GameOver {
        /// The player who won.
        winner: Player,
    },

    /// The target cell already holds a mark.
    #[display("Cell {position} is already marked by {holder}")]
    CellOccupied {
        /// The cell that was targeted.
        position: Position,
        /// The player whose mark is there.
        holder: Player,
    },

    /// Coordinates outside `1..=3`.
    #[display("Position ({row}, {col}) is off the board (rows and columns run 1-3)")]
    InvalidPosition {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },
}
