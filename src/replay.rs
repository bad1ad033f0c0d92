//! Non-interactive replay of a move list.

use crate::games::tictactoe::{GameState, MoveError, Position};
use serde::Serialize;
use tracing::{instrument, warn};

/// A token in a move list that is not a cell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unrecognized move {:?} (use 1-9 or a label like top-left)", _0)]
pub struct ParseMoveError(pub String);

impl std::error::Error for ParseMoveError {}

/// Parses comma- or whitespace-separated cells: keypad numbers or labels.
///
/// Labels with spaces must use `-` or `_` (e.g. `top-left`) when the list
/// is whitespace separated.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<Position>, ParseMoveError> {
    let separators = |c: char| c == ',' || c.is_whitespace();
    input
        .split(separators)
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token).ok_or_else(|| ParseMoveError(token.to_string()))
        })
        .collect()
}

/// A move that was ignored during replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejected {
    /// 1-based position of the move in the input list.
    pub index: usize,
    /// Cell that was requested.
    pub position: Position,
    /// Why it was ignored.
    pub reason: String,
}

/// Final state plus every ignored action.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// State after all moves and the optional jump.
    pub state: GameState,
    /// Ignored moves, in input order.
    pub rejected: Vec<Rejected>,
    /// Set when the requested jump was out of range.
    pub rejected_jump: Option<String>,
}

/// Plays `moves` in order, skipping ignored ones, then optionally jumps.
#[instrument]
pub fn replay(moves: &[Position], jump: Option<usize>) -> ReplayReport {
    let mut state = GameState::new();
    let mut rejected = Vec::new();

    for (i, position) in moves.iter().enumerate() {
        if let Err(e) = state.play(*position) {
            warn!(index = i + 1, %position, error = %e, "Skipping move");
            rejected.push(Rejected {
                index: i + 1,
                position: *position,
                reason: e.to_string(),
            });
        }
    }

    let rejected_jump = jump
        .map(|step| state.jump_to(step))
        .and_then(Result::err)
        .map(|e: MoveError| {
            warn!(error = %e, "Skipping jump");
            e.to_string()
        });

    ReplayReport {
        state,
        rejected,
        rejected_jump,
    }
}

impl ReplayReport {
    /// Plain-text rendering: board, history list, status.
    pub fn render(&self) -> String {
        let mut out = self.state.current_board().display();
        out.push_str("\n\n");
        for entry in self.state.moves() {
            let marker = if *entry.is_current() { "> " } else { "  " };
            out.push_str(marker);
            out.push_str(entry.label());
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.state.status().to_string());
        out.push('\n');
        out
    }
}
