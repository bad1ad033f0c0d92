//! Time-travel tic-tac-toe - CLI entry point

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use timetravel_tictactoe::{replay, tui, Settings};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play { log_file: None }) {
        Command::Play { log_file } => {
            let settings = match log_file {
                Some(path) => settings.with_log_file(path),
                None => settings,
            };
            tui::run_tui(&settings)
        }
        Command::Replay { moves, jump, json } => run_replay(&settings, &moves, jump, json),
    }
}

/// Replay a move list and print the result
#[instrument(skip(settings))]
fn run_replay(settings: &Settings, moves: &str, jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let moves = replay::parse_moves(moves)?;
    info!(count = moves.len(), "Replaying moves");
    let report = replay::replay(&moves, jump);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for rejected in &report.rejected {
            eprintln!("move {} ({}) ignored: {}", rejected.index, rejected.position, rejected.reason);
        }
        if let Some(reason) = &report.rejected_jump {
            eprintln!("jump ignored: {}", reason);
        }
        print!("{}", report.render());
    }

    Ok(())
}
