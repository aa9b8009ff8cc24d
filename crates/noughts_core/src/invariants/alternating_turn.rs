//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: players alternate turns, X first.
///
/// X has either as many marks as O or exactly one more. While the game is
/// still open, X is next exactly when the counts are equal.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);

        if x != o && x != o + 1 {
            return false;
        }

        if state.phase().is_terminal() {
            return true;
        }

        let expected_next = if x == o { Player::X } else { Player::O };
        state.next_turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
