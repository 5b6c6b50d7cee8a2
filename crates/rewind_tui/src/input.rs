//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rewind_tictactoe::Position;
use tracing::instrument;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    Cursor(Direction),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a board index (digit keys).
    PlaceAt(usize),
    /// Move the history selection.
    Select(Direction),
    /// Jump to the selected history entry.
    JumpToSelected,
    /// Switch focus between board and history.
    SwitchFocus,
    /// Flip the move list order.
    ToggleOrder,
    /// Show or hide the history sidebar.
    ToggleSidebar,
    /// Start a new game.
    NewGame,
    /// Leave the program.
    Quit,
}

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up.
    Up,
    /// Down.
    Down,
    /// Left.
    Left,
    /// Right.
    Right,
}

impl Direction {
    fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            _ => None,
        }
    }
}

/// Maps a key event to an action given the focused pane.
#[instrument]
pub fn action_for(key: KeyEvent, focus: Focus) -> Option<Action> {
    // Skip key release events (crossterm fires both press and release on some platforms).
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NewGame),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(Action::ToggleOrder),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Action::ToggleSidebar),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::PlaceAt(digit as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(match focus {
            Focus::Board => Action::PlaceAtCursor,
            Focus::History => Action::JumpToSelected,
        }),
        code => Direction::from_key(code).map(|dir| match focus {
            Focus::Board => Action::Cursor(dir),
            Focus::History => Action::Select(dir),
        }),
    }
}

/// Moves the board cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, dir: Direction) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match dir {
        Direction::Up => (row.saturating_sub(1), column),
        Direction::Down => ((row + 1).min(2), column),
        Direction::Left => (row, column.saturating_sub(1)),
        Direction::Right => (row, (column + 1).min(2)),
    };
    Position::from_row_column(row, column).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Left), Position::BottomCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digits_place_regardless_of_focus() {
        assert_eq!(action_for(press(KeyCode::Char('1')), Focus::Board), Some(Action::PlaceAt(0)));
        assert_eq!(
            action_for(press(KeyCode::Char('9')), Focus::History),
            Some(Action::PlaceAt(8))
        );
        assert_eq!(action_for(press(KeyCode::Char('0')), Focus::Board), None);
    }

    #[test]
    fn test_enter_depends_on_focus() {
        assert_eq!(action_for(press(KeyCode::Enter), Focus::Board), Some(Action::PlaceAtCursor));
        assert_eq!(
            action_for(press(KeyCode::Enter), Focus::History),
            Some(Action::JumpToSelected)
        );
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            action_for(press(KeyCode::Down), Focus::Board),
            Some(Action::Cursor(Direction::Down))
        );
        assert_eq!(
            action_for(press(KeyCode::Down), Focus::History),
            Some(Action::Select(Direction::Down))
        );
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for(key, Focus::Board), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(key, Focus::Board), Some(Action::Quit));
    }
}
