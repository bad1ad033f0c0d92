//! Terminal invariant: nothing is recorded after a winning snapshot.

use super::super::{rules, GameState};
use super::Invariant;

/// Invariant: only the last snapshot may contain a completed line.
pub struct StopsAtWinInvariant;

impl Invariant<GameState> for StopsAtWinInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let before_last = history.len().saturating_sub(1);
        history[..before_last]
            .iter()
            .all(|board| rules::check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No snapshot follows a winning board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    fn won_game() -> GameState {
        GameState::from_moves(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap()
    }

    #[test]
    fn test_win_as_last_snapshot_holds() {
        assert!(StopsAtWinInvariant::holds(&won_game()));
    }

    #[test]
    fn test_snapshot_after_win_violates() {
        let mut state = won_game();
        let last = *state.current_board();
        state.history.push(last.with_mark(Position::BottomRight, Player::O));
        assert!(!StopsAtWinInvariant::holds(&state));
    }
}
