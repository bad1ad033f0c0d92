//! First-class action and event types for tic-tac-toe.
//!
//! Actions are what the presentation layer asks for. Events are what
//! actually happened and are handed to observers.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A request dispatched into the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the next player's mark at a position.
    Play(Position),
    /// Move the history cursor to a recorded step.
    JumpTo(usize),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(position) => write!(f, "play {}", position.label()),
            Action::JumpTo(step) => write!(f, "jump to step {}", step),
        }
    }
}

/// A state change that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed and a new snapshot appended.
    MovePlayed {
        /// Who moved.
        player: Player,
        /// Where the mark went.
        position: Position,
        /// Step number of the new snapshot.
        step: usize,
    },
    /// The cursor moved without touching history.
    Jumped {
        /// New cursor value.
        step: usize,
    },
}

impl GameEvent {
    /// Cursor value after this event.
    pub fn step(&self) -> usize {
        match self {
            GameEvent::MovePlayed { step, .. } | GameEvent::Jumped { step } => *step,
        }
    }
}

/// Reason an action was ignored.
///
/// Every variant means the game state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The active board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// A raw cell index outside 0-8.
    #[display("Cell {} is off the board", _0)]
    CellOutOfRange(usize),

    /// A history step that was never recorded.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
