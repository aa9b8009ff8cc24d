//! Noughts - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod notice;
mod replay;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Mutex;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// RUST_LOG wins over the configured filter.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Play interactively. Logs go to a file so they don't tear the board.
fn run_play(config: &Config) -> Result<()> {
    let log_file = File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();

    info!("Starting noughts");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = res {
        tracing::error!(error = %e, "Game loop failed");
    }
    info!("Exiting noughts");
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &Config) -> Result<()> {
    let mut app = App::new();

    while !app.should_quit() {
        terminal.draw(|f| ui::render(f, &app, config))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }

    Ok(())
}

/// Apply moves without a terminal UI. Logs go to stderr.
fn run_replay(config: &Config, moves: &[(u8, u8)], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    replay::replay(moves, json, &mut stdout)?;
    Ok(())
}
