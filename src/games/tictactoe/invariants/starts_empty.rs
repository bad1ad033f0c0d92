//! Start invariant: history begins with the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: History is non-empty and its first snapshot is all-empty.
pub struct StartsEmptyInvariant;

impl Invariant<GameState> for StartsEmptyInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}
