//! Key mapping from terminal events to game keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a terminal key event to a game key.
///
/// Ctrl+C maps to ENTER: in raw mode it does not raise SIGINT, and ENTER is
/// what ends the program.
pub fn map_key_event(key: KeyEvent) -> Key {
    if key.kind != KeyEventKind::Press {
        return Key::None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Key::Enter;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => Key::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => Key::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => Key::Right,
        KeyCode::Enter => Key::Enter,
        _ => Key::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Up)), Key::Up);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Down)), Key::Down);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Left)), Key::Left);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Right)), Key::Right);
    }

    #[test]
    fn test_letter_aliases() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('H'))), Key::Left);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('d'))), Key::Right);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('j'))), Key::Down);
    }

    #[test]
    fn test_enter_and_ctrl_c_quit() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Enter)), Key::Enter);
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Key::Enter
        );
        // Plain 'c' is not bound.
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('c'))), Key::None);
    }

    #[test]
    fn test_unrecognized_is_none() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Esc)), Key::None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::F(5))), Key::None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char(' '))), Key::None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key_event(release), Key::None);
    }
}
