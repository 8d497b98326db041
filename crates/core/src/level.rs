//! Level files - text layout parsing and loading.
//!
//! # Format
//!
//! ```text
//! 4 5        <- rows cols
//! 1 2        <- player start row, col
//! -----
//! -+-$-
//! --M--
//! ?---!
//! ```
//!
//! After the header come `rows * cols` tile symbols, read left to right and
//! top to bottom. Whitespace between symbols is ignored, so a layout can be
//! written one row per line or with spaces between cells. The start cell is
//! overwritten with the player marker, whatever symbol it held.

use std::path::Path;

use log::debug;

use crate::error::LevelError;
use crate::grid::Grid;
use crate::player::Player;
use crate::types::{Position, Tile};

/// A parsed level: a populated grid with the marker placed, and the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub grid: Grid,
    pub player: Player,
}

impl Level {
    /// Parse a level from its text layout.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut tokens = text.split_whitespace();
        let rows = header_field(tokens.next(), "rows")?;
        let cols = header_field(tokens.next(), "cols")?;
        let start_row = header_field(tokens.next(), "player row")?;
        let start_col = header_field(tokens.next(), "player col")?;

        let mut grid = Grid::try_new(rows, cols)?;
        if !grid.contains(start_row, start_col) {
            return Err(LevelError::PlayerOutOfBounds {
                row: start_row,
                col: start_col,
                rows,
                cols,
            });
        }
        let start = Position::new(start_row, start_col);

        let expected = rows * cols;
        let mut found = 0;
        for symbol in tokens.flat_map(str::chars) {
            if found < expected {
                let (row, col) = (found / cols, found % cols);
                let tile = Tile::from_symbol(symbol)
                    .ok_or(LevelError::UnknownTile { symbol, row, col })?;
                let pos = Position::new(row, col);
                if tile == Tile::Player && pos != start {
                    return Err(LevelError::StrayPlayer { row, col });
                }
                grid.set_at(pos, tile);
            }
            found += 1;
        }
        if found != expected {
            return Err(LevelError::TileCount { expected, found });
        }

        grid.set_at(start, Tile::Player);
        debug!("parsed {}x{} level, player at {:?}", rows, cols, start);
        Ok(Self {
            grid,
            player: Player::from(start),
        })
    }

    /// Read and parse a level file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading level from {}", path.display());
        Self::parse(&text)
    }
}

fn header_field(token: Option<&str>, field: &'static str) -> Result<usize, LevelError> {
    let token = token.ok_or(LevelError::MissingHeader(field))?;
    token.parse().map_err(|_| LevelError::InvalidHeader {
        field,
        value: token.to_string(),
    })
}
