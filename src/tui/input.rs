//! Key mapping and cursor movement for keyboard navigation.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The history list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the game.
    Quit,
    /// Switch between board and history.
    ToggleFocus,
    /// Arrow key, interpreted by the focused pane.
    Navigate(KeyCode),
    /// Play the highlighted cell or jump to the highlighted entry.
    Activate,
    /// Play a cell directly by keypad number.
    PlayCell(Position),
    /// Jump straight to the first snapshot.
    JumpToStart,
}

/// Decodes a key press. Unbound keys return `None`.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::ToggleFocus),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::Navigate(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Activate),
        KeyCode::Home => Some(Command::JumpToStart),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| Position::from_label_or_number(&d.to_string()))
            .map(Command::PlayCell),
        _ => None,
    }
}

/// Moves cursor based on arrow keys. Edges do not wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Moves a history selection up or down within `len` entries.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Down => (selected + 1).min(len.saturating_sub(1)),
        _ => selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopCenter, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Right), Position::BottomCenter);
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(command_for(KeyCode::Char('1')), Some(Command::PlayCell(Position::TopLeft)));
        assert_eq!(command_for(KeyCode::Char('9')), Some(Command::PlayCell(Position::BottomRight)));
        assert_eq!(command_for(KeyCode::Char('0')), None);
        assert_eq!(command_for(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_move_selection_clamps() {
        assert_eq!(move_selection(0, 3, KeyCode::Up), 0);
        assert_eq!(move_selection(2, 3, KeyCode::Down), 2);
        assert_eq!(move_selection(1, 3, KeyCode::Down), 2);
    }
}
