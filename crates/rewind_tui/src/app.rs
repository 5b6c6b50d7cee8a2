//! Application state and logic.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use rewind_tictactoe::{GameState, MoveOutcome, Position};
use tracing::{debug, info, instrument};

use crate::config::TuiConfig;
use crate::input::{self, Action, Direction, Focus};

/// Main application state.
#[derive(Debug, Clone, Getters)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection marker, in display order.
    selected: usize,
    show_sidebar: bool,
    message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application from the loaded config.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: GameState::new().with_ascending(*config.ascending()),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_sidebar: *config.show_sidebar(),
            message: "Player X's turn.".to_string(),
            should_quit: false,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = %self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = input::action_for(key, self.focus) {
            self.apply(action);
        }
    }

    /// Applies an action to the game or the view.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "Applying action");
        match action {
            Action::Cursor(dir) => self.cursor = input::move_cursor(self.cursor, dir),
            Action::PlaceAtCursor => {
                let outcome = self.game.apply_move(self.cursor);
                self.after_move(outcome);
            }
            Action::PlaceAt(index) => {
                let outcome = self.game.apply_index(index);
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.after_move(outcome);
            }
            Action::Select(dir) => self.move_selection(dir),
            Action::JumpToSelected => self.jump_to_selected(),
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Board if self.show_sidebar => Focus::History,
                    _ => Focus::Board,
                };
            }
            Action::ToggleOrder => {
                let step = self.selected_step();
                self.game.toggle_order();
                self.selected = self.row_of(step);
                self.message = if self.game.is_ascending() {
                    "History oldest first.".to_string()
                } else {
                    "History newest first.".to_string()
                };
            }
            Action::ToggleSidebar => {
                self.show_sidebar = !self.show_sidebar;
                if !self.show_sidebar {
                    self.focus = Focus::Board;
                }
            }
            Action::NewGame => {
                self.game.reset();
                self.selected = self.row_of(0);
                self.cursor = Position::Center;
                self.message = "Game restarted. Player X's turn.".to_string();
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Step of the entry under the selection marker.
    pub fn selected_step(&self) -> usize {
        self.game
            .moves()
            .get(self.selected)
            .map(|entry| *entry.step())
            .unwrap_or(0)
    }

    fn row_of(&self, step: usize) -> usize {
        if self.game.is_ascending() {
            step
        } else {
            self.game.history().len() - 1 - step
        }
    }

    fn after_move(&mut self, outcome: MoveOutcome) {
        if !outcome.is_applied() {
            self.message = outcome.to_string();
            return;
        }
        self.selected = self.row_of(self.game.current_step());
        self.message = if self.game.status().is_over() {
            format!("{}. Press N for a new game.", outcome)
        } else {
            outcome.to_string()
        };
    }

    fn move_selection(&mut self, dir: Direction) {
        let last = self.game.history().len() - 1;
        self.selected = match dir {
            Direction::Up | Direction::Left => self.selected.saturating_sub(1),
            Direction::Down | Direction::Right => (self.selected + 1).min(last),
        };
    }

    fn jump_to_selected(&mut self) {
        let step = self.selected_step();
        if self.game.jump_to(step) {
            self.message = if step == 0 {
                "Back at game start.".to_string()
            } else {
                format!("Viewing move #{}.", step)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rewind_tictactoe::{Player, Square, Status};

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.game().board().get(Position::TopCenter),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.message(), "X played Top-center");
        assert_eq!(*app.selected(), 1);
    }

    #[test]
    fn test_occupied_square_reports_without_change() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.message(), "move ignored: Center is already occupied");
    }

    #[test]
    fn test_history_jump() {
        let mut app = app();
        for key in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(key));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(*app.focus(), Focus::History);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game().current_step(), 1);
        assert_eq!(app.game().history().len(), 4);
        assert_eq!(app.game().status(), Status::NextPlayer(Player::O));
        assert_eq!(app.message(), "Viewing move #1.");
    }

    #[test]
    fn test_toggle_order_keeps_selected_entry() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.selected_step(), 2);

        press(&mut app, KeyCode::Char('o'));
        assert!(!app.game().is_ascending());
        assert_eq!(*app.selected(), 0);
        assert_eq!(app.selected_step(), 2);

        press(&mut app, KeyCode::Char('o'));
        assert_eq!(*app.selected(), 2);
    }

    #[test]
    fn test_hidden_sidebar_keeps_focus_on_board() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('h'));
        assert!(!app.show_sidebar());
        assert_eq!(*app.focus(), Focus::Board);
        press(&mut app, KeyCode::Tab);
        assert_eq!(*app.focus(), Focus::Board);
    }

    #[test]
    fn test_new_game() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(*app.cursor(), Position::Center);
    }

    #[test]
    fn test_finishing_move_suggests_new_game() {
        let mut app = app();
        // X: 1 2 3, O: 4 5
        for key in ['1', '4', '2', '5'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.message(), "O played Center");
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.game().status(), Status::Winner(Player::X));
        assert_eq!(app.message(), "X played Top-right. Press N for a new game.");

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.message(), "move ignored: game is already over");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(*app.should_quit());
    }
}
