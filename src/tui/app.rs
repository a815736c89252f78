//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info, instrument};

use super::input::{move_cursor, position_for_digit};
use crate::games::tictactoe::{GameAction, GameState, GameView, HistoryView, Position, SortOrder};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the history list.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the single [`GameState`] for the session. The host re-derives a
/// [`GameView`] from it after every key.
#[derive(Debug)]
pub struct App {
    state: GameState,
    history: HistoryView,
    cursor: Position,
    focus: Focus,
    history_step: usize,
}

impl App {
    /// Creates a new application with the history list in `order`.
    #[instrument]
    pub fn new(order: SortOrder) -> Self {
        Self {
            state: GameState::new(),
            history: HistoryView::new(order),
            cursor: Position::Center,
            focus: Focus::default(),
            history_step: 0,
        }
    }

    /// Gets the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step under the list cursor.
    pub fn history_step(&self) -> usize {
        self.history_step
    }

    /// Derives the view for the current frame.
    pub fn view(&self) -> GameView {
        GameView::derive(&self.state, &self.history)
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.history_step = self.state.current_step();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.history.toggle_order(),
            KeyCode::Char(' ') if self.focus == Focus::Board => {
                self.dispatch(GameAction::Play(self.cursor));
            }
            KeyCode::Char(c) => {
                if let Some(pos) = position_for_digit(c) {
                    self.cursor = pos;
                    self.dispatch(GameAction::Play(pos));
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.dispatch(GameAction::Play(self.cursor)),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.state.history().len() - 1;
        // Up moves toward the top of the list as displayed.
        let (up, down) = match self.history.order() {
            SortOrder::Ascending => (
                self.history_step.saturating_sub(1),
                (self.history_step + 1).min(last),
            ),
            SortOrder::Descending => (
                (self.history_step + 1).min(last),
                self.history_step.saturating_sub(1),
            ),
        };
        match code {
            KeyCode::Up => self.history_step = up,
            KeyCode::Down => self.history_step = down,
            KeyCode::Enter => self.dispatch(GameAction::JumpTo(self.history_step)),
            _ => {}
        }
    }

    /// Feeds an action to the game state.
    fn dispatch(&mut self, action: GameAction) {
        debug!(?action, "Dispatching action");
        self.state = std::mem::take(&mut self.state).apply(action);
        self.history_step = self.state.current_step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> Control {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digit_plays_square() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(
            app.state().current_board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.state().current_board().get(Position::TopRight),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new(SortOrder::Ascending);
        for c in ['1', '2', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.history_step(), 3);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().current_step(), 1);
        assert_eq!(app.state().history().len(), 4);
    }

    #[test]
    fn test_history_navigation_follows_descending_order() {
        let mut app = App::new(SortOrder::Descending);
        for c in ['1', '2'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().current_step(), 1);

        // The newest entry sits at the top of the list; Up stops there.
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.history_step(), 2);
    }

    #[test]
    fn test_sort_toggle_does_not_change_state() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('5'));
        let before = app.state().clone();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.view().order, SortOrder::Descending);
        assert_eq!(app.state(), &before);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(SortOrder::Ascending);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Quit);
        assert_eq!(press(&mut app, KeyCode::Left), Control::Continue);
    }
}
