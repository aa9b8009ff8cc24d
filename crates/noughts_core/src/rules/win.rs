//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line and the player who completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The winning player.
    pub player: Player,
    /// The line holding three of their marks.
    pub line: Line,
}

/// Checks every line for three marks by the same player.
///
/// Lines are scanned exhaustively in [`Line::ALL`] order and the first
/// completed line is returned, which keeps the result deterministic even
/// for boards where more than one line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    Line::ALL.into_iter().find_map(|line| {
        let (mut x, mut o) = (0, 0);
        for pos in line.cells() {
            match board.get(pos) {
                Square::Occupied(Player::X) => x += 1,
                Square::Occupied(Player::O) => o += 1,
                Square::Empty => {}
            }
        }
        if x == 3 {
            Some(Win { player: Player::X, line })
        } else if o == 3 {
            Some(Win { player: Player::O, line })
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::super::super::{LineKind, Position};
    use super::*;

    fn board_with(player: Player, cells: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in cells {
            board.set(*pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::X,
            &[Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
        );
        let win = check_winner(&board).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.line.kind(), LineKind::Row(1));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(
            Player::O,
            &[Position::TOP_RIGHT, Position::MIDDLE_RIGHT, Position::BOTTOM_RIGHT],
        );
        let win = check_winner(&board).unwrap();
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line.kind(), LineKind::Column(3));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Player::O,
            &[Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
        );
        let win = check_winner(&board).unwrap();
        assert_eq!(win.line.kind(), LineKind::AntiDiagonal);
        assert_eq!(
            win.line.cells(),
            [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT]
        );
    }

    #[test]
    fn test_rows_take_precedence_over_columns_and_diagonals() {
        // Full X board: every line is complete, row 1 is scanned first.
        let board = board_with(Player::X, &Position::ALL);
        assert_eq!(check_winner(&board).unwrap().line.kind(), LineKind::Row(1));

        // Column 1 and the diagonal both complete: column wins.
        let board = board_with(
            Player::X,
            &[
                Position::TOP_LEFT,
                Position::MIDDLE_LEFT,
                Position::BOTTOM_LEFT,
                Position::CENTER,
                Position::BOTTOM_RIGHT,
            ],
        );
        assert_eq!(
            check_winner(&board).unwrap().line.kind(),
            LineKind::Column(1)
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Player::X, &[Position::TOP_LEFT, Position::TOP_CENTER]);
        board.set(Position::TOP_RIGHT, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }
}
