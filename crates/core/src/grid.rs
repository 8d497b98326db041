//! Grid module - owns the dungeon tile buffer
//!
//! The grid is a `rows x cols` rectangle of tiles stored in a flat vector in
//! row-major order (`row * cols + col`). Unlike a fixed playfield, dungeon grids
//! are sized by the level and can grow: [`Grid::resize_double`] doubles both
//! dimensions, keeping the original content in the top-left quadrant and
//! replicating it into the other three.

use std::fmt;

use log::debug;

use crate::error::GridError;
use crate::types::{Position, Tile};

/// Largest number of cells a grid may hold.
///
/// Level headers and amulet growth are both checked against this bound, so
/// a hostile level file gets [`GridError::TooLarge`] instead of an
/// allocation failure.
pub const MAX_CELLS: usize = 1 << 24;

/// Cell count for `rows x cols`, if it stays within [`MAX_CELLS`].
fn cell_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols).filter(|&cells| cells <= MAX_CELLS)
}

/// Rectangular tile buffer, exclusively owned by a dungeon session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of tiles, row-major order (row * cols + col)
    cells: Vec<Tile>,
}

impl Grid {
    /// Allocate a grid with every cell set to [`Tile::Open`].
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero. Use [`Grid::try_new`] for
    /// caller-supplied dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "grid dimensions must be positive, got {rows}x{cols}"
        );
        Self {
            rows,
            cols,
            cells: vec![Tile::Open; rows * cols],
        }
    }

    /// Allocate a grid, reporting invalid dimensions instead of panicking.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        cell_count(rows, cols).ok_or(GridError::TooLarge { rows, cols })?;
        Ok(Self::new(rows, cols))
    }

    /// Build a grid from nested rows.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if row_count == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions {
                rows: row_count,
                cols,
            });
        }
        if cell_count(row_count, cols).is_none() {
            return Err(GridError::TooLarge {
                rows: row_count,
                cols,
            });
        }

        let mut cells = Vec::with_capacity(row_count * cols);
        for (row, tiles) in rows.into_iter().enumerate() {
            if tiles.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: tiles.len(),
                });
            }
            cells.extend(tiles);
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Convert to nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.cols).map(<[Tile]>::to_vec).collect()
    }

    /// Tear down the grid and its storage.
    ///
    /// Taking `self` by value means a grid can only be released once.
    pub fn release(self) {
        debug!("releasing {}x{} grid", self.rows, self.cols);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Check if (row, col) lies inside the grid
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    pub fn tile_at(&self, pos: Position) -> Option<Tile> {
        self.get(pos.row, pos.col)
    }

    pub fn set_at(&mut self, pos: Position, tile: Tile) -> bool {
        self.set(pos.row, pos.col, tile)
    }

    /// Tiles in row-major order.
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// One row of tiles.
    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Positions of every cell holding `tile`, in row-major order.
    pub fn positions_of(&self, tile: Tile) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, &t)| t == tile)
            .map(move |(idx, _)| Position::new(idx / cols, idx % cols))
    }

    /// Build the doubled grid without touching `self`.
    ///
    /// Quadrant layout of the result:
    ///
    /// ```text
    /// +----------+----------+
    /// | original | replica  |
    /// +----------+----------+
    /// | replica  | replica  |
    /// +----------+----------+
    /// ```
    ///
    /// Replicas copy every tile except `Open` and `Player`, which become
    /// [`Tile::Wall`]. Only the original quadrant stays walkable, and the
    /// player marker is never duplicated.
    pub fn doubled(&self) -> Result<Grid, GridError> {
        let too_large = GridError::TooLarge {
            rows: self.rows,
            cols: self.cols,
        };
        let rows = self.rows.checked_mul(2).ok_or_else(|| too_large.clone())?;
        let cols = self.cols.checked_mul(2).ok_or_else(|| too_large.clone())?;
        cell_count(rows, cols).ok_or(too_large)?;

        let mut grown = Grid::new(rows, cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let tile = self.cells[row * self.cols + col];
                let replica = replica_tile(tile);
                grown.set(row, col, tile);
                grown.set(row, col + self.cols, replica);
                grown.set(row + self.rows, col, replica);
                grown.set(row + self.rows, col + self.cols, replica);
            }
        }
        Ok(grown)
    }

    /// Double both dimensions in place.
    ///
    /// The new grid is fully built before it replaces the old one; on error
    /// the grid is left untouched.
    pub fn resize_double(&mut self) -> Result<(), GridError> {
        let grown = self.doubled()?;
        debug!(
            "resizing grid {}x{} -> {}x{}",
            self.rows,
            self.cols,
            grown.rows,
            grown.cols
        );
        std::mem::replace(self, grown).release();
        Ok(())
    }
}

/// Tile written into a replicated quadrant.
fn replica_tile(tile: Tile) -> Tile {
    match tile {
        Tile::Open | Tile::Player => Tile::Wall,
        other => other,
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for tile in row {
                write!(f, "{}", tile.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 3), Some(3));
        assert_eq!(grid.index(1, 0), Some(4));
        assert_eq!(grid.index(2, 3), Some(11));
        assert_eq!(grid.index(3, 0), None);
        assert_eq!(grid.index(0, 4), None);
    }

    #[test]
    fn test_new_is_all_open() {
        let grid = Grid::new(2, 5);
        assert_eq!(grid.cells().len(), 10);
        assert_eq!(grid.count(Tile::Open), 10);
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be positive")]
    fn test_new_rejects_zero_rows() {
        let _ = Grid::new(0, 3);
    }

    #[test]
    fn test_try_new_reports_invalid_dimensions() {
        assert_eq!(
            Grid::try_new(4, 0),
            Err(GridError::InvalidDimensions { rows: 4, cols: 0 })
        );
        assert!(Grid::try_new(1, 1).is_ok());
    }

    #[test]
    fn test_try_new_caps_cell_count() {
        assert_eq!(
            Grid::try_new(MAX_CELLS + 1, 1),
            Err(GridError::TooLarge {
                rows: MAX_CELLS + 1,
                cols: 1
            })
        );
        // Fits in usize but not in an allocation.
        assert_eq!(
            Grid::try_new(1 << 32, (1 << 32) - 1),
            Err(GridError::TooLarge {
                rows: 1 << 32,
                cols: (1 << 32) - 1
            })
        );
        assert_eq!(Grid::try_new(MAX_CELLS, 1).map(|g| g.cells().len()), Ok(MAX_CELLS));
    }

    #[test]
    fn test_doubled_refuses_past_cell_cap() {
        let grid = Grid::new(1, MAX_CELLS / 2);
        let before = grid.clone();
        let mut grid = grid;
        assert_eq!(
            grid.resize_double(),
            Err(GridError::TooLarge {
                rows: 1,
                cols: MAX_CELLS / 2
            })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![vec![Tile::Open; 3], vec![Tile::Open; 2]];
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_replica_tiles() {
        assert_eq!(replica_tile(Tile::Open), Tile::Wall);
        assert_eq!(replica_tile(Tile::Player), Tile::Wall);
        assert_eq!(replica_tile(Tile::Monster), Tile::Monster);
        assert_eq!(replica_tile(Tile::Pillar), Tile::Pillar);
        assert_eq!(replica_tile(Tile::Treasure), Tile::Treasure);
    }

    #[test]
    fn test_display_prints_symbols() {
        let mut grid = Grid::new(2, 3);
        grid.set(0, 1, Tile::Player);
        grid.set(1, 2, Tile::Monster);
        assert_eq!(grid.to_string(), "-o-\n--M\n");
    }

    #[test]
    fn test_positions_of() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 2, Tile::Monster);
        grid.set(2, 1, Tile::Monster);
        let found: Vec<Position> = grid.positions_of(Tile::Monster).collect();
        assert_eq!(found, vec![Position::new(0, 2), Position::new(2, 1)]);
    }
}
