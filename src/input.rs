//! Key event mapping.
//!
//! Turns crossterm key events into the UI-agnostic inputs of the menu and
//! gameplay modules.

use crate::gameplay::GameInput;
use crate::menu::MenuInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Ctrl+C exits the program from any screen.
pub fn is_global_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Releases and repeats-as-release are ignored everywhere.
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

pub fn map_game_key(key: &KeyEvent) -> Option<GameInput> {
    if !is_press(key) {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => Some(GameInput::Jump),
        KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

pub fn map_menu_key(key: &KeyEvent) -> Option<MenuInput> {
    if !is_press(key) {
        return None;
    }
    let input = match key.code {
        KeyCode::Up | KeyCode::Char('k') => MenuInput::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuInput::Down,
        KeyCode::Enter | KeyCode::Char(' ') => MenuInput::Select,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => MenuInput::Back,
        _ => MenuInput::Other,
    };
    Some(input)
}
