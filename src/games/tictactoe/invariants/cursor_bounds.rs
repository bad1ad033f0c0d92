//! Cursor invariant: the step number always names a recorded snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: `step_number < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.step_number() < state.history().len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_rewound_cursor_holds() {
        let mut state = GameState::from_moves(&[Position::Center, Position::TopLeft]).unwrap();
        state.jump_to(0).unwrap();
        assert!(CursorInBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut state = GameState::from_moves(&[Position::Center]).unwrap();
        state.step_number = 2;
        assert!(!CursorInBoundsInvariant::holds(&state));
    }
}
