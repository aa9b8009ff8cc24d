//! noughts_core - the rules of 3x3 tic-tac-toe.
//!
//! A [`GameEngine`] owns one game: the board, whose turn it is, and
//! whether someone has won. Front-ends call [`GameEngine::mark_cell`] and
//! [`GameEngine::reset`] and draw whatever the returned [`WinResult`] and
//! the read accessors tell them.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameEngine, Player, WinResult};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
//!     assert_eq!(engine.mark_cell(row, col)?, WinResult::None);
//! }
//! let result = engine.mark_cell(1, 3)?;
//! assert_eq!(result.winner(), Some(Player::X));
//! # Ok::<(), noughts_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod line;
mod outcome;
mod position;
pub mod rules;
mod state;
mod types;

pub use engine::GameEngine;
pub use error::MoveError;
pub use line::{Line, LineKind};
pub use outcome::{Phase, WinResult};
pub use position::Position;
pub use rules::Win;
pub use state::GameState;
pub use types::{Board, Cell, Player, Square};
