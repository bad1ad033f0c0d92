//! Tic-tac-toe with a snapshot history and time-travel cursor.

mod action;
mod contracts;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Action, GameEvent, MoveError};
pub use contracts::{Contract, JumpContract, PlayContract};
pub use game::{Game, GameObserver};
pub use position::Position;
pub use state::{step_label, GameState, GameStatus, HistoryEntry};
pub use types::{Board, Player, Square};
