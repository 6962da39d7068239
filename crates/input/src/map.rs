//! Key mapping from terminal events to session inputs.

use crate::types::{Command, Input};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a session input.
pub fn map_key(key: KeyEvent) -> Option<Input> {
    let input = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Input::Move(Command::Left),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Input::Move(Command::Right),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Input::Move(Command::Down),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Input::Move(Command::Rotate),
        KeyCode::Char(' ') => Input::Move(Command::HardDrop),

        // Game control
        KeyCode::Char('p' | 'P') => Input::TogglePause,
        KeyCode::Esc => Input::Finish,
        KeyCode::Char('r' | 'R') => Input::Restart,

        _ => return None,
    };
    Some(input)
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
