//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play,

    /// Apply a sequence of moves and print the outcome
    Replay {
        /// Moves as 1-based `row,col` pairs, X first (e.g. `1,1 2,2 1,3`)
        #[arg(required = true, value_parser = parse_move)]
        moves: Vec<(u8, u8)>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses `row,col`. Range checking is left to the engine so that
/// off-board moves are reported the same way as any other rejected move.
fn parse_move(s: &str) -> Result<(u8, u8), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{}`", s))?;
    let row = row
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("bad row `{}`: {}", row.trim(), e))?;
    let col = col
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("bad column `{}`: {}", col.trim(), e))?;
    Ok((row, col))
}
