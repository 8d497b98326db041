//! TUI Dungeon (workspace facade crate).
//!
//! This package exposes `tui_dungeon::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_dungeon_core as core;
pub use tui_dungeon_input as input;
pub use tui_dungeon_term as term;
pub use tui_dungeon_types as types;
