//! Marked-count invariant: the counter matches the board.

use super::super::GameState;
use super::Invariant;

/// Invariant: `marked_cells` equals the number of non-empty squares and
/// never exceeds 9.
pub struct MarkedCountInvariant;

impl Invariant<GameState> for MarkedCountInvariant {
    fn holds(state: &GameState) -> bool {
        let marked = usize::from(state.marked_cells());
        marked <= 9 && marked == state.board().marked_count()
    }

    fn description() -> &'static str {
        "Marked-cell counter matches the board (0-9)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameEngine;

    #[test]
    fn test_holds_through_a_game() {
        let mut engine = GameEngine::new();
        assert!(MarkedCountInvariant::holds(engine.state()));
        for (r, c) in [(1, 1), (1, 2), (2, 2)] {
            engine.mark_cell(r, c).unwrap();
            assert!(MarkedCountInvariant::holds(engine.state()));
        }
        assert_eq!(engine.marked_cells(), 3);
    }

    #[test]
    fn test_rejected_move_keeps_count() {
        let mut engine = GameEngine::new();
        engine.mark_cell(1, 1).unwrap();
        assert!(engine.mark_cell(1, 1).is_err());
        assert_eq!(engine.marked_cells(), 1);
        assert!(MarkedCountInvariant::holds(engine.state()));
    }
}
