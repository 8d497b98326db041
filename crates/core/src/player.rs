//! Player state - position and collected treasure.

use crate::types::Position;

/// The player's position and inventory.
///
/// Only the move resolver changes a player during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Player {
    pub row: usize,
    pub col: usize,
    /// Treasure tiles collected so far
    pub treasure: u32,
}

impl Player {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            treasure: 0,
        }
    }

    pub fn with_treasure(mut self, treasure: u32) -> Self {
        self.treasure = treasure;
        self
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    pub(crate) fn place(&mut self, pos: Position) {
        self.row = pos.row;
        self.col = pos.col;
    }
}

impl From<Position> for Player {
    fn from(pos: Position) -> Self {
        Self::new(pos.row, pos.col)
    }
}
