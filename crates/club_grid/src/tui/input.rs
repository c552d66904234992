//! Keyboard mapping.

use club_grid_board::Cell;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to another cell.
    Cursor(Cell),
    /// Select the cell under the cursor.
    Select,
    /// Submit the typed player name.
    Submit,
    /// Start a new match.
    Restart,
    /// Leave the game.
    Quit,
    /// Append a character to the player name.
    Type(char),
    /// Delete the last character of the player name.
    Backspace,
    /// Key has no meaning here.
    Nothing,
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    match key {
        KeyCode::Up => cursor.up(),
        KeyCode::Down => cursor.down(),
        KeyCode::Left => cursor.left(),
        KeyCode::Right => cursor.right(),
        _ => cursor,
    }
}

/// Maps a key event to an action, given the cursor position.
pub fn map_key(event: KeyEvent, cursor: Cell) -> Action {
    if event.kind == KeyEventKind::Release {
        return Action::Nothing;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

    match event.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('r') if ctrl => Action::Restart,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Cursor(move_cursor(cursor, event.code))
        }
        KeyCode::Tab => Action::Select,
        KeyCode::Char(' ') if ctrl => Action::Select,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) if !ctrl => Action::Type(c),
        _ => Action::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_move_cursor() {
        assert_eq!(
            map_key(press(KeyCode::Down), Cell::CENTER),
            Action::Cursor(Cell::new(2, 1).unwrap())
        );
        assert_eq!(move_cursor(Cell::CENTER, KeyCode::Enter), Cell::CENTER);
    }

    #[test]
    fn test_letters_and_spaces_are_typed() {
        assert_eq!(map_key(press(KeyCode::Char('r')), Cell::CENTER), Action::Type('r'));
        assert_eq!(map_key(press(KeyCode::Char(' ')), Cell::CENTER), Action::Type(' '));
    }

    #[test]
    fn test_control_keys() {
        let restart = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(map_key(restart, Cell::CENTER), Action::Restart);
        assert_eq!(map_key(press(KeyCode::Tab), Cell::CENTER), Action::Select);
        assert_eq!(map_key(press(KeyCode::Esc), Cell::CENTER), Action::Quit);
    }
}
