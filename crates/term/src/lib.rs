//! Terminal front end for the dungeon.
//!
//! No widget framework: each frame is painted into a glyph framebuffer and
//! flushed through crossterm.
//!
//! - [`GameView`] maps a dungeon into a framebuffer of palette [`Glyph`]s (pure, testable)
//! - [`TerminalRenderer`] owns raw mode and the alternate screen, and turns
//!   [`Ink`]s into terminal colors
//! - Map cells are 2 characters wide to keep the grid square-ish

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_dungeon_core as core;
pub use tui_dungeon_types as types;

pub use fb::{FrameBuffer, Glyph, Ink, Weight};
pub use game_view::{AnchorY, GameView, Hud, Viewport};
pub use renderer::TerminalRenderer;
