//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the dungeon simulation: grid storage, move resolution
//! and monster pursuit. It has **no dependencies** on terminal UI or input
//! handling, making it:
//!
//! - **Deterministic**: the same level and inputs always produce the same game
//! - **Testable**: every rule is exercised by unit and property tests
//! - **Portable**: runs headless, in a terminal, or inside benchmarks
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular tile buffer with doubling resize
//! - [`player`]: player position and treasure count
//! - [`movement`]: the move resolver ([`attempt_move`])
//! - [`monsters`]: line-of-sight monster advance ([`advance_monsters`])
//! - [`level`]: level text format parsing and file loading
//! - [`dungeon`]: session context sequencing one turn at a time
//!
//! # Game Rules
//!
//! - **Movement**: one cell per turn; pillars, walls and monsters block
//! - **Exit**: passable only after collecting at least one treasure
//! - **Amulet**: doubles the dungeon, replicating it into three new quadrants
//! - **Door**: ends the level; the next level keeps the treasure count
//! - **Monsters**: on each of the four rays from the player, the nearest monster
//!   in sight steps one cell closer; reaching the player ends the game
//!
//! # Example
//!
//! ```
//! use tui_dungeon_core::{Dungeon, Level};
//! use tui_dungeon_types::{Direction, GameStatus, MoveOutcome};
//!
//! let level = Level::parse("1 4\n0 0\n-$-!\n").unwrap();
//! let mut dungeon = Dungeon::from_level(level);
//!
//! assert_eq!(dungeon.step(Direction::Right).outcome, Some(MoveOutcome::Treasure));
//! assert_eq!(dungeon.player().treasure, 1);
//!
//! dungeon.step(Direction::Right);
//! let report = dungeon.step(Direction::Right);
//! assert_eq!(report.status, GameStatus::Escaped);
//! ```

pub mod dungeon;
pub mod error;
pub mod grid;
pub mod level;
pub mod monsters;
pub mod movement;
pub mod player;

pub use tui_dungeon_types as types;

// Re-export commonly used types for convenience
pub use dungeon::{Dungeon, TurnReport};
pub use error::{GridError, LevelError};
pub use grid::{Grid, MAX_CELLS};
pub use level::Level;
pub use monsters::{advance_monsters, advance_monsters_traced, MonsterAdvance, MonsterStep};
pub use movement::attempt_move;
pub use player::Player;
