//! Time-travel tic-tac-toe
//!
//! A tic-tac-toe game that records every board it passes through and lets
//! players jump back to any earlier move. Playing from a rewound position
//! discards the moves that followed it.
//!
//! # Architecture
//!
//! - **Game**: snapshot history, cursor, win detection and observers
//! - **TUI**: terminal presentation of board, status and history list
//! - **Replay**: scripted play from a move list
//! - **Settings**: optional TOML configuration
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameState, Position};
//!
//! let mut game = GameState::new();
//! game.play(Position::TopLeft).unwrap();
//! game.play(Position::Center).unwrap();
//! game.jump_to(0).unwrap();
//! game.play(Position::TopCenter).unwrap();
//!
//! assert_eq!(game.history().len(), 2);
//! assert_eq!(game.status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;
pub mod replay;
mod settings;
pub mod tui;

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    invariants, rules, step_label, Action, Board, Contract, Game, GameEvent, GameObserver,
    GameState, GameStatus, HistoryEntry, JumpContract, MoveError, PlayContract, Player, Position,
    Square,
};
