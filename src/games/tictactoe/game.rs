//! Observable game: dispatches actions and notifies observers.
//!
//! [`GameState`] knows nothing about rendering. [`Game`] wraps it and calls
//! every registered [`GameObserver`] after each action that changed state,
//! so a presentation layer can redraw on change instead of polling.

use super::action::{Action, GameEvent, MoveError};
use super::state::GameState;
use tracing::{debug, instrument};

/// Receives a notification after each applied action.
pub trait GameObserver {
    /// Called with the state after the change and the event describing it.
    fn notify(&mut self, state: &GameState, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameState, &GameEvent),
{
    fn notify(&mut self, state: &GameState, event: &GameEvent) {
        self(state, event)
    }
}

/// A [`GameState`] plus its observers.
#[derive(Default)]
pub struct Game {
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Creates a new game at the start.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies an action.
    ///
    /// Observers are notified only when the action was applied; a rejected
    /// action leaves both state and observers untouched.
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn dispatch(&mut self, action: Action) -> Result<GameEvent, MoveError> {
        let event = match action {
            Action::Play(position) => self.state.play(position)?,
            Action::JumpTo(step) => self.state.jump_to(step)?,
        };

        debug!(observers = self.observers.len(), ?event, "Notifying observers");
        for observer in &mut self.observers {
            observer.notify(&self.state, &event);
        }
        Ok(event)
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_observer_sees_applied_actions_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut game = Game::new();
        let sink = Rc::clone(&seen);
        game.subscribe(move |state: &GameState, event: &GameEvent| {
            sink.borrow_mut().push((state.step_number(), *event));
        });

        game.dispatch(Action::Play(Position::Center)).unwrap();
        assert!(game.dispatch(Action::Play(Position::Center)).is_err());
        assert!(game.dispatch(Action::JumpTo(5)).is_err());
        game.dispatch(Action::JumpTo(0)).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                (
                    1,
                    GameEvent::MovePlayed {
                        player: Player::X,
                        position: Position::Center,
                        step: 1
                    }
                ),
                (0, GameEvent::Jumped { step: 0 }),
            ]
        );
    }

    #[test]
    fn test_every_observer_notified() {
        let count = Rc::new(RefCell::new(0));
        let mut game = Game::new();
        for _ in 0..3 {
            let count = Rc::clone(&count);
            game.subscribe(move |_: &GameState, _: &GameEvent| *count.borrow_mut() += 1);
        }

        game.dispatch(Action::Play(Position::TopLeft)).unwrap();
        assert_eq!(*count.borrow(), 3);
    }
}
