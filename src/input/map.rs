//! Keyboard mapping: crossterm key events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::GameAction;

/// Map a key press to a game action.
///
/// Arrow keys drive play; WASD-style letters alias them. `q` and Esc quit.
pub fn map_key(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Rotate),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameAction::Quit),
        _ => None,
    }
}

/// Map a full key event, filtering repeats/releases and honoring Ctrl-C.
pub fn map_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameAction::Quit);
    }
    map_key(key.code)
}
