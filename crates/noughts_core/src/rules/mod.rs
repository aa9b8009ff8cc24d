//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to tic-tac-toe rules,
//! separated from board storage so the engine and the invariants can
//! share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, Win};
