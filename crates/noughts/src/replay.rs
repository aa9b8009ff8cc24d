//! Headless play: apply a list of moves and report each result.

use anyhow::{Result, bail};
use noughts_core::{GameEngine, Position};
use std::io::Write;
use tracing::{info, instrument};

/// Plays `moves` on a fresh engine and reports to `out`.
///
/// In text mode `out` gets one line per move and the final board. With
/// `json` set, `out` gets nothing but the final [`GameState`] as JSON and
/// per-move results go to the log instead.
///
/// Stops at the first rejected move and returns it as an error. Moves after
/// a terminal result are still attempted, so they surface as rejections.
///
/// [`GameState`]: noughts_core::GameState
#[instrument(skip(out))]
pub fn replay(moves: &[(u8, u8)], json: bool, out: &mut impl Write) -> Result<GameEngine> {
    let mut engine = GameEngine::new();

    for (i, &(row, col)) in moves.iter().enumerate() {
        let player = engine.next_turn();
        let outcome = Position::new(row, col).and_then(|pos| engine.mark(pos).map(|r| (pos, r)));
        match outcome {
            Ok((pos, result)) => {
                info!(step = i + 1, %player, cell = pos.label(), %result, "Move applied");
                if !json {
                    writeln!(out, "{:>2}. {} -> {} {}: {}", i + 1, player, pos.label(), pos, result)?;
                }
            }
            Err(e) => {
                if !json {
                    writeln!(out, "{}", engine.state().board().display())?;
                }
                bail!("move {} ({}, {}) rejected: {}", i + 1, row, col, e);
            }
        }
    }

    info!(phase = %engine.phase(), marked_cells = engine.marked_cells(), "Replay finished");

    if json {
        serde_json::to_writer_pretty(&mut *out, engine.state())?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", engine.state().board().display())?;
        writeln!(out, "Game {}", engine.phase())?;
    }

    Ok(engine)
}
