//! Application state and logic.

use super::input::{self, Command, Focus};
use crate::games::tictactoe::{Action, Game, GameEvent, GameState, MoveError, Position};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info};

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected: usize,
    notice: Option<String>,
    show_coordinates: bool,
    needs_redraw: Rc<Cell<bool>>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(show_coordinates: bool) -> Self {
        let mut game = Game::new();
        let needs_redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&needs_redraw);
        game.subscribe(move |_: &GameState, event: &GameEvent| {
            debug!(?event, "Game changed, scheduling redraw");
            flag.set(true);
        });

        let selected = game.state().step_number();
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::default(),
            selected,
            notice: None,
            show_coordinates,
            needs_redraw,
            should_quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Highlighted board cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Why the last action was ignored, if it was.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether empty cells show keypad numbers.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns and clears the redraw flag.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    /// Forces a redraw on the next frame (e.g. after a resize).
    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    /// Applies a decoded command.
    pub fn handle(&mut self, command: Command) {
        debug!(?command, focus = ?self.focus, "Handling command");
        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.request_redraw();
            }
            Command::Navigate(key) => {
                match self.focus {
                    Focus::Board => self.cursor = input::move_cursor(self.cursor, key),
                    Focus::History => {
                        let len = self.state().history().len();
                        self.selected = input::move_selection(self.selected, len, key);
                    }
                }
                self.request_redraw();
            }
            Command::Activate => match self.focus {
                Focus::Board => self.dispatch(Action::Play(self.cursor)),
                Focus::History => self.dispatch(Action::JumpTo(self.selected)),
            },
            Command::PlayCell(position) => {
                self.cursor = position;
                self.dispatch(Action::Play(position));
            }
            Command::JumpToStart => self.dispatch(Action::JumpTo(0)),
        }
    }

    fn dispatch(&mut self, action: Action) {
        match self.game.dispatch(action) {
            Ok(event) => {
                self.selected = event.step();
                self.notice = None;
            }
            Err(e) => {
                debug!(error = %e, %action, "Action ignored");
                self.notice = Some(notice_for(&e));
                self.request_redraw();
            }
        }
    }
}

fn notice_for(error: &MoveError) -> String {
    match error {
        MoveError::SquareOccupied(position) => format!("{} is taken", position),
        MoveError::GameOver(_) => "Game over. Pick a history entry to keep playing.".to_string(),
        other => other.to_string(),
    }
}
