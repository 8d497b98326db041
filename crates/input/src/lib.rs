//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events into turn [`Command`]s. The dungeon is turn-synchronous, so there is
//! no key-repeat handling: one key press is one turn.

pub mod map;

pub use tui_dungeon_types as types;

pub use map::{handle_key_event, should_quit, Command};
