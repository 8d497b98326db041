//! Key mapping from terminal events to turn commands.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the player asked to do this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step one cell
    Move(Direction),
    /// Stay put and let the monsters move
    Wait,
}

/// Map keyboard input to a turn command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),

        // Vi keys
        KeyCode::Char('k') | KeyCode::Char('K') => Some(Command::Move(Direction::Up)),
        KeyCode::Char('j') | KeyCode::Char('J') => Some(Command::Move(Direction::Down)),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::Move(Direction::Left)),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(Command::Move(Direction::Right)),

        KeyCode::Char(' ') | KeyCode::Char('.') => Some(Command::Wait),

        // Classic w/a/s/d
        KeyCode::Char(ch) => Direction::from_symbol(ch).map(Command::Move),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
