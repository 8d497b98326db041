//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, level parsing).
//!
//! # Tile Symbols
//!
//! Every tile has a single-character symbol used by level files and debug output:
//!
//! | Tile | Symbol | Walkable | Blocks sight |
//! |------|--------|----------|--------------|
//! | `Open` | `-` | yes | no |
//! | `Player` | `o` | - | no |
//! | `Treasure` | `$` | yes | no |
//! | `Amulet` | `@` | yes | no |
//! | `Monster` | `M` | no | - |
//! | `Pillar` | `+` | no | yes |
//! | `Door` | `?` | yes | no |
//! | `Exit` | `!` | with treasure | no |
//! | `Wall` | `#` | no | yes |
//!
//! # Movement Keys
//!
//! The classic keys map to directions: `w` up, `s` down, `a` left, `d` right.
//!
//! # Examples
//!
//! ```
//! use tui_dungeon_types::{Direction, MoveOutcome, Position, Tile};
//!
//! // Parse a tile from its level symbol
//! assert_eq!(Tile::from_symbol('$'), Some(Tile::Treasure));
//! assert_eq!(Tile::Pillar.symbol(), '+');
//!
//! // Step a position inside a 3x3 grid
//! let pos = Position::new(0, 0);
//! assert_eq!(pos.step(Direction::Right, 3, 3), Some(Position::new(0, 1)));
//! assert_eq!(pos.step(Direction::Up, 3, 3), None);
//!
//! // Outcomes
//! assert!(MoveOutcome::Treasure.moved());
//! assert!(!MoveOutcome::Stayed.moved());
//! ```

/// Minimum number of collected treasures required to pass through an exit.
pub const EXIT_TREASURE_REQUIRED: u32 = 1;

/// Key symbol for moving up.
pub const MOVE_UP: char = 'w';

/// Key symbol for moving down.
pub const MOVE_DOWN: char = 's';

/// Key symbol for moving left.
pub const MOVE_LEFT: char = 'a';

/// Key symbol for moving right.
pub const MOVE_RIGHT: char = 'd';

/// Content of a single grid cell.
///
/// Tiles are mutually exclusive per cell. Exactly one cell of a live dungeon
/// holds [`Tile::Player`], mirroring the player's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// Free floor
    #[default]
    Open,
    /// Impassable, blocks line of sight
    Pillar,
    Monster,
    Treasure,
    Amulet,
    /// Leads to the next level
    Door,
    /// Escape hatch, needs at least one treasure
    Exit,
    /// The player marker
    Player,
    /// Fill written into replicated quadrants when the dungeon grows
    Wall,
}

impl Tile {
    /// All tile variants, in declaration order.
    pub const ALL: [Tile; 9] = [
        Tile::Open,
        Tile::Pillar,
        Tile::Monster,
        Tile::Treasure,
        Tile::Amulet,
        Tile::Door,
        Tile::Exit,
        Tile::Player,
        Tile::Wall,
    ];

    /// Parse a tile from its level symbol
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dungeon_types::Tile;
    ///
    /// assert_eq!(Tile::from_symbol('-'), Some(Tile::Open));
    /// assert_eq!(Tile::from_symbol('M'), Some(Tile::Monster));
    /// assert_eq!(Tile::from_symbol('!'), Some(Tile::Exit));
    /// assert_eq!(Tile::from_symbol('x'), None);
    /// ```
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '-' => Some(Tile::Open),
            '+' => Some(Tile::Pillar),
            'M' => Some(Tile::Monster),
            '$' => Some(Tile::Treasure),
            '@' => Some(Tile::Amulet),
            '?' => Some(Tile::Door),
            '!' => Some(Tile::Exit),
            'o' => Some(Tile::Player),
            '#' => Some(Tile::Wall),
            _ => None,
        }
    }

    /// Level symbol for this tile
    pub fn symbol(&self) -> char {
        match self {
            Tile::Open => '-',
            Tile::Pillar => '+',
            Tile::Monster => 'M',
            Tile::Treasure => '$',
            Tile::Amulet => '@',
            Tile::Door => '?',
            Tile::Exit => '!',
            Tile::Player => 'o',
            Tile::Wall => '#',
        }
    }

    /// Lowercase name, used in logs and the HUD
    pub fn as_str(&self) -> &'static str {
        match self {
            Tile::Open => "open",
            Tile::Pillar => "pillar",
            Tile::Monster => "monster",
            Tile::Treasure => "treasure",
            Tile::Amulet => "amulet",
            Tile::Door => "door",
            Tile::Exit => "exit",
            Tile::Player => "player",
            Tile::Wall => "wall",
        }
    }

    /// Whether a monster scan stops at this tile.
    pub fn blocks_sight(&self) -> bool {
        matches!(self, Tile::Pillar | Tile::Wall)
    }

    /// Whether the player can never step onto this tile.
    ///
    /// Exit is conditional on treasure and is not included here.
    pub fn blocks_movement(&self) -> bool {
        matches!(self, Tile::Pillar | Tile::Wall | Tile::Monster)
    }
}

/// One of the four cardinal directions
///
/// - **Up**: row - 1
/// - **Down**: row + 1
/// - **Left**: col - 1
/// - **Right**: col + 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in monster scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit (row, col) delta for this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dungeon_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (-1, 0));
    /// assert_eq!(Direction::Right.delta(), (0, 1));
    /// ```
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse a classic movement key (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dungeon_types::Direction;
    ///
    /// assert_eq!(Direction::from_symbol('w'), Some(Direction::Up));
    /// assert_eq!(Direction::from_symbol('D'), Some(Direction::Right));
    /// assert_eq!(Direction::from_symbol('q'), None);
    /// ```
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            MOVE_UP => Some(Direction::Up),
            MOVE_DOWN => Some(Direction::Down),
            MOVE_LEFT => Some(Direction::Left),
            MOVE_RIGHT => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A (row, col) grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one cell in `direction`, staying within a `rows` x `cols` grid.
    ///
    /// Returns `None` when the step would leave the grid.
    pub fn step(&self, direction: Direction, rows: usize, cols: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row >= rows || col >= cols {
            return None;
        }
        Some(Position { row, col })
    }
}

/// Result of a single move attempt
///
/// Every target tile maps to exactly one outcome. Blocked moves are a normal
/// outcome (`Stayed`), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Blocked: out of bounds, obstacle, or exit without treasure
    Stayed,
    /// Moved onto open floor
    Moved,
    /// Moved and collected a treasure
    Treasure,
    /// Moved onto the amulet
    Amulet,
    /// Moved onto a door (level transition)
    Door,
    /// Moved onto the exit (session-ending escape)
    Exit,
}

impl MoveOutcome {
    /// Whether the player changed position.
    pub fn moved(&self) -> bool {
        !matches!(self, MoveOutcome::Stayed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOutcome::Stayed => "stayed",
            MoveOutcome::Moved => "moved",
            MoveOutcome::Treasure => "treasure",
            MoveOutcome::Amulet => "amulet",
            MoveOutcome::Door => "door",
            MoveOutcome::Exit => "exit",
        }
    }
}

/// Where a session stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Reached a door; the caller loads the next level
    LevelComplete,
    /// Left through the exit
    Escaped,
    /// A monster reached the player
    Caught,
}

impl GameStatus {
    /// Whether no further turns can be played on this level.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}
