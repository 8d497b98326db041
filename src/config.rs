//! Command-line and environment configuration.
//!
//! Every option can be given as a flag or through an environment variable:
//!
//! - `DUNGEON_LEVELS`: comma-separated level files, played in order
//! - `DUNGEON_LOG_PATH`: write logs to this file (logging is off otherwise)
//! - `DUNGEON_LOG_LEVEL`: log filter, e.g. `debug` or `tui_dungeon_core=trace`

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Level played when none is given.
pub const DEFAULT_LEVEL: &str = "levels/level1.txt";

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-dungeon", version, about = "Turn-based terminal dungeon crawl")]
pub struct Config {
    /// Level files, played in order; a door leads to the next one
    #[arg(env = "DUNGEON_LEVELS", value_delimiter = ',', default_value = DEFAULT_LEVEL)]
    pub levels: Vec<PathBuf>,

    /// Write logs to this file
    #[arg(long, env = "DUNGEON_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Log filter used when logging to a file
    #[arg(long, env = "DUNGEON_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Route `log` output to the configured file.
    ///
    /// The terminal is in raw mode on the alternate screen, so logs never go
    /// to stderr.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_path else {
            return Ok(());
        };
        let file = File::create(path)
            .with_context(|| format!("creating log file '{}'", path.display()))?;
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init()
            .context("initializing logger")?;
        Ok(())
    }
}
