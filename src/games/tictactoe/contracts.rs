//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules;
use super::state::GameState;
use super::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The active board has no winner.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`MoveError::GameOver`] once a line is complete.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match rules::check_winner(state.current_board()) {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] for a taken square.
    #[instrument(skip(state))]
    pub fn check(position: Position, state: &GameState) -> Result<(), MoveError> {
        if state.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Precondition: A jump target must be a recorded step.
pub struct StepInRange;

impl StepInRange {
    /// Fails with [`MoveError::StepOutOfRange`] past the last snapshot.
    #[instrument(skip(state))]
    pub fn check(step: usize, state: &GameState) -> Result<(), MoveError> {
        let len = state.history().len();
        if step < len {
            Ok(())
        } else {
            Err(MoveError::StepOutOfRange { step, len })
        }
    }
}

fn check_invariants(state: &GameState) -> Result<(), MoveError> {
    TicTacToeInvariants::check_all(state).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

// ─────────────────────────────────────────────────────────────
//  Play Contract
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - No winner on the active board
/// - Square must be empty
///
/// Postconditions:
/// - Snapshots up to the old cursor are untouched
/// - Exactly one snapshot follows them and the cursor sits on it
/// - All game invariants hold
pub struct PlayContract;

impl Contract<GameState, Position> for PlayContract {
    fn pre(state: &GameState, position: &Position) -> Result<(), MoveError> {
        NoWinnerYet::check(state)?;
        SquareIsEmpty::check(*position, state)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let kept = before.step_number() + 1;
        if after.history().len() != kept + 1 || after.step_number() != kept {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history not truncated to cursor".to_string(),
            ));
        }
        if after.history()[..kept] != before.history()[..kept] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: earlier snapshots changed".to_string(),
            ));
        }
        check_invariants(after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Contract for moving the cursor.
///
/// Precondition: step is recorded.
/// Postcondition: history is identical.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    fn pre(state: &GameState, step: &usize) -> Result<(), MoveError> {
        StepInRange::check(*step, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if before.history() != after.history() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: jump altered history".to_string(),
            ));
        }
        check_invariants(after)
    }
}
