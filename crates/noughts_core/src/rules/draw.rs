//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position, Square};
    use super::*;

    fn fill(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (pos, ch) in Position::ALL.iter().zip(rows.concat().chars()) {
            match ch {
                'X' => board.set(*pos, Square::Occupied(Player::X)),
                'O' => board.set(*pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = fill(["X..", ".O.", "..."]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = fill(["XOX", "XOO", "OXX"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = fill(["XXX", "OOX", "OXO"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
