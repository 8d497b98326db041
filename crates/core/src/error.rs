//! Error types for grid allocation and level loading.

use std::path::PathBuf;

use thiserror::Error;

/// Grid allocation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("grid {rows}x{cols} is too large to allocate or grow")]
    TooLarge { rows: usize, cols: usize },

    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Level file parse and validation failures.
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("could not read level file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing {0} in level header")]
    MissingHeader(&'static str),

    #[error("invalid {field} in level header: '{value}'")]
    InvalidHeader { field: &'static str, value: String },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("player start ({row}, {col}) is outside the {rows}x{cols} grid")]
    PlayerOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown tile symbol '{symbol}' at ({row}, {col})")]
    UnknownTile { symbol: char, row: usize, col: usize },

    #[error("stray player marker at ({row}, {col}); the start position comes from the header")]
    StrayPlayer { row: usize, col: usize },

    #[error("level has {found} tiles, expected {expected}")]
    TileCount { expected: usize, found: usize },
}
