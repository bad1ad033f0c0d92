//! Snapshot history with a time-travel cursor.
//!
//! [`GameState`] keeps every board the game has passed through. The cursor
//! (`step_number`) selects which snapshot is shown and which one the next
//! move builds on. Playing from a rewound cursor discards the snapshots
//! after it.

use super::action::{GameEvent, MoveError};
use super::contracts::{Contract, JumpContract, PlayContract};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules;
use super::{Board, Player, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What the status line shows for the active snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// A line is complete on the active board.
    Winner(Player),
    /// No line yet; this player moves next.
    NextPlayer(Player),
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Winner(player) => write!(f, "Winner: {}", player),
            GameStatus::NextPlayer(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct HistoryEntry {
    /// Step this entry jumps to.
    step: usize,
    /// "Go to game start" or "Go to move #k".
    label: String,
    /// Whether the cursor is on this step.
    is_current: bool,
}

/// Label shown for a history step.
pub fn step_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// Board history plus the active cursor.
///
/// History is never empty and always starts with the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) step_number: usize,
}

impl GameState {
    /// Creates a game at the start: one empty snapshot, cursor at 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step_number: 0,
        }
    }

    /// Replays `moves` from the start, stopping at the first rejected one.
    #[instrument]
    pub fn from_moves(moves: &[Position]) -> Result<Self, MoveError> {
        let mut state = Self::new();
        for position in moves {
            state.play(*position)?;
        }
        Ok(state)
    }

    /// Places the next player's mark at `position`.
    ///
    /// Ignored (state unchanged, `Err` returned) when the active board
    /// already has a winner or the square is taken. Otherwise every
    /// snapshot after the cursor is discarded before the new one is
    /// appended.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn play(&mut self, position: Position) -> Result<GameEvent, MoveError> {
        if let Err(e) = PlayContract::pre(self, &position) {
            debug!(error = %e, "Move ignored");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_player();
        let next = self.current_board().with_mark(position, player);
        let discarded = self.history.len() - (self.step_number + 1);
        self.history.truncate(self.step_number + 1);
        self.history.push(next);
        self.step_number = self.history.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(e) = PlayContract::post(&before, self) {
            tracing::error!(error = %e, "Postcondition failed, restoring state");
            *self = before;
            return Err(e);
        }

        debug!(%player, %position, discarded, "Move played");
        Ok(GameEvent::MovePlayed {
            player,
            position,
            step: self.step_number,
        })
    }

    /// Plays at a raw cell index (0-8).
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<GameEvent, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::CellOutOfRange(index))?;
        self.play(position)
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// Out-of-range steps are ignored.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&mut self, step: usize) -> Result<GameEvent, MoveError> {
        if let Err(e) = JumpContract::pre(self, &step) {
            debug!(error = %e, "Jump ignored");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.step_number = step;

        #[cfg(debug_assertions)]
        if let Err(e) = JumpContract::post(&before, self) {
            tracing::error!(error = %e, "Postcondition failed, restoring state");
            *self = before;
            return Err(e);
        }

        Ok(GameEvent::Jumped { step })
    }

    /// Snapshot at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step_number]
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Cursor into [`history`](Self::history).
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Whose turn it is at the cursor.
    pub fn next_player(&self) -> Player {
        Player::for_turn(self.step_number)
    }

    /// Winner on the active board.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_board())
    }

    /// Whether the active board is terminal for further plays.
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Status for the active snapshot.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Winner(player),
            None => GameStatus::NextPlayer(self.next_player()),
        }
    }

    /// History list entries, one per snapshot.
    pub fn moves(&self) -> Vec<HistoryEntry> {
        (0..self.history.len())
            .map(|step| HistoryEntry::new(step, step_label(step), step == self.step_number))
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated wire form of [`GameState`].
#[derive(Deserialize)]
struct GameStateRepr {
    history: Vec<Board>,
    step_number: usize,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = MoveError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let state = GameState {
            history: repr.history,
            step_number: repr.step_number,
        };
        TicTacToeInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step_number(), 0);
        assert_eq!(state.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_truncate_on_play_after_jump() {
        let mut state =
            GameState::from_moves(&[Position::TopLeft, Position::Center, Position::BottomRight])
                .unwrap();
        state.jump_to(1).unwrap();
        let event = state.play(Position::TopRight).unwrap();

        assert_eq!(
            event,
            GameEvent::MovePlayed {
                player: Player::O,
                position: Position::TopRight,
                step: 2
            }
        );
        assert_eq!(state.history().len(), 3);
        assert!(state.current_board().is_empty(Position::Center));
    }

    #[test]
    fn test_play_index_rejects_off_board() {
        let mut state = GameState::new();
        assert_eq!(state.play_index(9), Err(MoveError::CellOutOfRange(9)));
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_moves_labels() {
        let mut state = GameState::from_moves(&[Position::Center, Position::TopLeft]).unwrap();
        state.jump_to(1).unwrap();

        let labels: Vec<_> = state.moves().iter().map(|e| e.label().clone()).collect();
        assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);

        let current: Vec<_> = state.moves().iter().map(|e| *e.is_current()).collect();
        assert_eq!(current, [false, true, false]);
    }

    #[test]
    fn test_json_roundtrip_validates() {
        let state = GameState::from_moves(&[Position::Center]).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);

        let corrupt = json.replace("\"step_number\":1", "\"step_number\":7");
        assert!(serde_json::from_str::<GameState>(&corrupt).is_err());
    }
}
