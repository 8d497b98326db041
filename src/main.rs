//! Terminal dungeon runner (default binary).
//!
//! Loads the configured level files, then runs the turn loop: read one key,
//! resolve the player's move, let the monsters react, redraw. Uses crossterm
//! for input and a framebuffer-based renderer.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_dungeon::core::{Dungeon, Level, TurnReport};
use tui_dungeon::input::{handle_key_event, should_quit, Command};
use tui_dungeon::term::{GameView, Hud, TerminalRenderer, Viewport};
use tui_dungeon::types::{GameStatus, MoveOutcome};

use config::Config;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    Escaped { treasure: u32 },
    Caught { treasure: u32 },
    Quit,
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.init_logging()?;

    let first_path = config.levels.first().context("no level files given")?;
    let first = Level::load(first_path)
        .with_context(|| format!("loading level '{}'", first_path.display()))?;
    info!(
        "starting with {} level(s), first is {}",
        config.levels.len(),
        first_path.display()
    );

    let mut term = TerminalRenderer::enter()?;
    let result = run(&mut term, &config.levels, Dungeon::from_level(first));
    // Always try to restore terminal state.
    let _ = term.leave();

    match result? {
        Ending::Escaped { treasure } => println!("You escaped with {treasure} treasure!"),
        Ending::Caught { treasure } => {
            println!("A monster caught you. You had {treasure} treasure.")
        }
        Ending::Quit => println!("Bye."),
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, levels: &[PathBuf], mut dungeon: Dungeon) -> Result<Ending> {
    let view = GameView::default();
    let mut level_index = 0;
    let mut message = String::from("Find treasure, then reach the exit (!).");

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = Hud {
            level: u32::try_from(level_index + 1).unwrap_or(u32::MAX),
            message: Some(message.as_str()),
        };
        let fb = view.render(&dungeon, &hud, Viewport::new(w, h));
        term.draw(&fb)?;

        let ending = match dungeon.status() {
            GameStatus::Escaped => Some(Ending::Escaped {
                treasure: dungeon.player().treasure,
            }),
            GameStatus::Caught => Some(Ending::Caught {
                treasure: dungeon.player().treasure,
            }),
            GameStatus::Playing | GameStatus::LevelComplete => None,
        };
        if let Some(ending) = ending {
            info!("session over: {:?} after {} turns", ending, dungeon.turn());
            wait_for_key()?;
            return Ok(ending);
        }

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Resize(_, _) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };
        if should_quit(key) {
            return Ok(Ending::Quit);
        }
        let Some(command) = handle_key_event(key) else {
            continue;
        };

        let report = match command {
            Command::Move(direction) => dungeon.step(direction),
            Command::Wait => dungeon.wait(),
        };
        message = turn_message(&report).to_string();

        if report.status == GameStatus::LevelComplete {
            match levels.get(level_index + 1) {
                Some(path) => {
                    let level = Level::load(path)
                        .with_context(|| format!("loading level '{}'", path.display()))?;
                    info!("door taken, entering {}", path.display());
                    dungeon = dungeon.enter_level(level);
                    level_index += 1;
                }
                None => {
                    warn!("door taken on the last level, counting it as an escape");
                    return Ok(Ending::Escaped {
                        treasure: dungeon.player().treasure,
                    });
                }
            }
        }
    }
}

/// Block until any key is pressed.
fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// One-line HUD message for a turn.
fn turn_message(report: &TurnReport) -> &'static str {
    if report.caught() {
        return "A monster caught you!";
    }
    match report.outcome {
        Some(MoveOutcome::Stayed) => "You can't go that way.",
        Some(MoveOutcome::Treasure) => "You found treasure!",
        Some(MoveOutcome::Amulet) if report.grew => "The amulet glows. The dungeon grows!",
        Some(MoveOutcome::Amulet) => "The amulet flickers.",
        Some(MoveOutcome::Door) => "You go through the door.",
        Some(MoveOutcome::Exit) => "You escaped!",
        Some(MoveOutcome::Moved) | None if !report.monster_steps.is_empty() => {
            "Something moves closer..."
        }
        Some(MoveOutcome::Moved) => "",
        None => "You wait.",
    }
}
