//! Winner-consistent invariant: the recorded win matches the board.

use super::super::rules::check_winner;
use super::super::GameState;
use super::Invariant;

/// Invariant: a win is recorded exactly when the board holds a completed
/// line, and the recorded win is the one the rules find.
pub struct WinnerConsistentInvariant;

impl Invariant<GameState> for WinnerConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.win() == check_winner(state.board())
    }

    fn description() -> &'static str {
        "Recorded winner matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameEngine;

    #[test]
    fn test_holds_before_and_after_win() {
        let mut engine = GameEngine::new();
        for (r, c) in [(1, 1), (1, 2), (2, 2), (1, 3)] {
            engine.mark_cell(r, c).unwrap();
            assert!(WinnerConsistentInvariant::holds(engine.state()));
        }
        engine.mark_cell(3, 3).unwrap();
        assert!(engine.has_winner());
        assert!(WinnerConsistentInvariant::holds(engine.state()));
    }
}
