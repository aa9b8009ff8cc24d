//! User-facing notices derived from engine results.

use noughts_core::{MoveError, Player, WinResult};

/// A message the front-end shows after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Notice {
    /// Someone completed a line.
    #[display("Winner! {}", _0)]
    Winner(Player),
    /// The board filled up.
    #[display("No more moves are available.")]
    Draw,
    /// A move was attempted after the game was won.
    #[display("The game is over.")]
    GameOver,
    /// A move targeted a marked cell.
    #[display("This cell is already marked.")]
    CellOccupied,
    /// A move targeted coordinates off the board.
    #[display("That cell is not on the board.")]
    InvalidPosition,
}

impl Notice {
    /// Maps a move result to the notice to display, if any.
    pub fn from_result(result: &Result<WinResult, MoveError>) -> Option<Self> {
        match result {
            Ok(WinResult::None) => None,
            Ok(WinResult::Winner { player, .. }) => Some(Notice::Winner(*player)),
            Ok(WinResult::Draw) => Some(Notice::Draw),
            Err(MoveError::GameOver { .. }) => Some(Notice::GameOver),
            Err(MoveError::CellOccupied { .. }) => Some(Notice::CellOccupied),
            Err(MoveError::InvalidPosition { .. }) => Some(Notice::InvalidPosition),
        }
    }

    /// True for notices that report a rejected move.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            Notice::GameOver | Notice::CellOccupied | Notice::InvalidPosition
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Line, Position};

    #[test]
    fn test_from_result() {
        assert_eq!(Notice::from_result(&Ok(WinResult::None)), None);
        assert_eq!(
            Notice::from_result(&Ok(WinResult::Winner {
                player: Player::O,
                line: Line::ALL[0],
            })),
            Some(Notice::Winner(Player::O))
        );
        assert_eq!(
            Notice::from_result(&Ok(WinResult::Draw)),
            Some(Notice::Draw)
        );
        assert_eq!(
            Notice::from_result(&Err(MoveError::CellOccupied {
                position: Position::CENTER,
                holder: Player::X,
            })),
            Some(Notice::CellOccupied)
        );
        assert_eq!(
            Notice::from_result(&Err(MoveError::InvalidPosition { row: 9, col: 9 })),
            Some(Notice::InvalidPosition)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(Notice::Winner(Player::X).to_string(), "Winner! X");
        assert_eq!(Notice::Draw.to_string(), "No more moves are available.");
        assert_eq!(Notice::GameOver.to_string(), "The game is over.");
        assert!(Notice::GameOver.is_error());
        assert!(!Notice::Draw.is_error());
    }
}
