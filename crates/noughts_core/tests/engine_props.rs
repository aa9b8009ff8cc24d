//! Property tests for the game engine.

use noughts_core::{GameEngine, MoveError, Phase, Player, Position, WinResult};
use proptest::prelude::*;

/// Plays cells in the given order until the game ends, skipping nothing.
/// Returns the results of every move made.
fn play_order(engine: &mut GameEngine, order: &[usize]) -> Vec<WinResult> {
    let mut results = Vec::new();
    for &i in order {
        let pos = Position::ALL[i];
        let result = engine.mark(pos).expect("Cell is free and game is open");
        results.push(result);
        if result.is_terminal() {
            break;
        }
    }
    results
}

fn cell_order() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every game played to the end finishes as a win or a draw, and a draw
    /// always means a full board.
    #[test]
    fn games_end_in_win_or_full_draw(order in cell_order()) {
        let mut engine = GameEngine::new();
        let results = play_order(&mut engine, &order);
        let last = *results.last().unwrap();

        match last {
            WinResult::Draw => {
                prop_assert_eq!(engine.marked_cells(), 9);
                prop_assert_eq!(engine.phase(), Phase::Drawn);
                prop_assert!(!engine.has_winner());
            }
            WinResult::Winner { player, line } => {
                prop_assert!(engine.has_winner());
                prop_assert_eq!(engine.phase(), Phase::Won);
                for pos in line.cells() {
                    prop_assert_eq!(engine.cell(pos).player(), Some(player));
                }
            }
            WinResult::None => prop_assert!(false, "Game never ended"),
        }
    }

    /// The turn flips after every non-terminal move and freezes after a
    /// terminal one.
    #[test]
    fn turn_alternates_until_terminal(order in cell_order()) {
        let mut engine = GameEngine::new();
        let mut expected = Player::X;
        for &i in &order {
            prop_assert_eq!(engine.next_turn(), expected);
            let result = engine.mark(Position::ALL[i]).unwrap();
            prop_assert_eq!(engine.cell(Position::ALL[i]).player(), Some(expected));
            if result.is_terminal() {
                prop_assert_eq!(engine.next_turn(), expected);
                break;
            }
            expected = expected.opponent();
        }
    }

    /// Reset followed by a sequence behaves exactly like a fresh game.
    #[test]
    fn reset_matches_fresh_game(
        first in cell_order(),
        prefix in 0usize..=9,
        second in cell_order(),
    ) {
        let mut reused = GameEngine::new();
        play_order(&mut reused, &first[..prefix]);
        reused.reset();

        let mut fresh = GameEngine::new();
        fresh.reset();

        let a = play_order(&mut reused, &second);
        let b = play_order(&mut fresh, &second);
        prop_assert_eq!(a, b);
        prop_assert_eq!(reused.state(), fresh.state());
    }

    /// A rejected move never changes the state.
    #[test]
    fn rejected_moves_leave_state_untouched(
        order in cell_order(),
        played in 1usize..9,
        target in 0usize..9,
    ) {
        let mut engine = GameEngine::new();
        play_order(&mut engine, &order[..played]);
        let before = engine.state().clone();
        let pos = Position::ALL[target];

        match engine.mark(pos) {
            Err(MoveError::GameOver { .. }) => prop_assert!(before.has_winner()),
            Err(MoveError::CellOccupied { position, .. }) => {
                prop_assert_eq!(position, pos);
                prop_assert!(!before.board().is_empty(pos));
            }
            Err(MoveError::InvalidPosition { .. }) => prop_assert!(false, "Position was valid"),
            Ok(_) => return Ok(()),
        }
        prop_assert_eq!(engine.state(), &before);
    }
}
