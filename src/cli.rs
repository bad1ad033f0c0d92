//! Command-line interface for timetravel_tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "timetravel_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "timetravel_tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Override the log file from the settings file
        #[arg(long)]
        log_file: Option<std::path::PathBuf>,
    },

    /// Replay a move list and print the resulting position
    Replay {
        /// Cells separated by commas or spaces: 1-9 or labels like top-left
        moves: String,

        /// Jump to this history step after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the full state as JSON
        #[arg(long)]
        json: bool,
    },
}
