//! Dungeon session - grid and player owned together, advanced one turn at a time.
//!
//! A turn is one move resolution followed by one monster advance. Both borrow
//! the grid and player mutably for the duration of the call and leave the
//! marker tile in sync with the player's position.

use log::{debug, warn};

use crate::grid::Grid;
use crate::level::Level;
use crate::monsters::{advance_monsters_traced, MonsterStep};
use crate::movement::attempt_move;
use crate::player::Player;
use crate::types::{Direction, GameStatus, MoveOutcome, Tile};

use arrayvec::ArrayVec;

/// Everything that happened during one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// `None` when the player waited
    pub outcome: Option<MoveOutcome>,
    pub monster_steps: ArrayVec<MonsterStep, 4>,
    /// The grid doubled this turn
    pub grew: bool,
    pub status: GameStatus,
}

impl TurnReport {
    pub fn caught(&self) -> bool {
        self.status == GameStatus::Caught
    }
}

/// Session context for one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dungeon {
    grid: Grid,
    player: Player,
    status: GameStatus,
    turn: u32,
}

impl Dungeon {
    /// Create a session from a grid that already holds the player marker.
    ///
    /// # Panics
    ///
    /// Panics if the player's cell is outside the grid or does not hold the marker.
    pub fn new(grid: Grid, player: Player) -> Self {
        let dungeon = Self {
            grid,
            player,
            status: GameStatus::Playing,
            turn: 0,
        };
        assert!(
            dungeon.check_invariants(),
            "player at ({}, {}) does not match the grid marker",
            player.row,
            player.col
        );
        dungeon
    }

    pub fn from_level(level: Level) -> Self {
        Self::new(level.grid, level.player)
    }

    /// Start the next level, carrying over the collected treasure.
    pub fn enter_level(&self, level: Level) -> Self {
        let player = level.player.with_treasure(self.player.treasure);
        debug!(
            "entering next level with {} treasure after {} turns",
            player.treasure, self.turn
        );
        Self::new(level.grid, player)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of turns played on this level.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Play one turn: move the player, then let the monsters react.
    ///
    /// Reaching the exit or a door ends the level before monsters move.
    /// Picking up the amulet doubles the grid. Turns on a finished level are
    /// ignored and report `Stayed`.
    pub fn step(&mut self, direction: Direction) -> TurnReport {
        if self.status.is_over() {
            warn!("turn requested after the level ended ({:?})", self.status);
            return self.finished_report();
        }

        self.turn += 1;
        let outcome = attempt_move(&mut self.grid, &mut self.player, direction);
        let mut report = TurnReport {
            outcome: Some(outcome),
            ..TurnReport::default()
        };

        match outcome {
            MoveOutcome::Exit => self.status = GameStatus::Escaped,
            MoveOutcome::Door => self.status = GameStatus::LevelComplete,
            MoveOutcome::Amulet => report.grew = self.grow(),
            MoveOutcome::Stayed | MoveOutcome::Moved | MoveOutcome::Treasure => {}
        }

        if !self.status.is_over() {
            self.advance_monsters(&mut report);
        }
        report.status = self.status;
        debug_assert!(self.check_invariants(), "marker out of sync after turn {}", self.turn);
        debug!("turn {}: {:?}", self.turn, report);
        report
    }

    /// Skip the player's move; monsters still advance.
    pub fn wait(&mut self) -> TurnReport {
        if self.status.is_over() {
            warn!("wait requested after the level ended ({:?})", self.status);
            return self.finished_report();
        }

        self.turn += 1;
        let mut report = TurnReport::default();
        self.advance_monsters(&mut report);
        report.status = self.status;
        debug_assert!(self.check_invariants(), "marker out of sync after turn {}", self.turn);
        report
    }

    fn advance_monsters(&mut self, report: &mut TurnReport) {
        let advance = advance_monsters_traced(&mut self.grid, &self.player);
        report.monster_steps = advance.steps;
        if advance.caught {
            self.status = GameStatus::Caught;
        }
    }

    fn grow(&mut self) -> bool {
        match self.grid.resize_double() {
            Ok(()) => true,
            Err(err) => {
                warn!("dungeon cannot grow: {}", err);
                false
            }
        }
    }

    fn finished_report(&self) -> TurnReport {
        TurnReport {
            outcome: Some(MoveOutcome::Stayed),
            status: self.status,
            ..TurnReport::default()
        }
    }

    /// Check that exactly one cell holds the marker and it is the player's cell.
    ///
    /// After a catch the monster stands on the player's cell instead.
    pub fn check_invariants(&self) -> bool {
        let here = self.grid.tile_at(self.player.position());
        let markers = self.grid.count(Tile::Player);
        match self.status {
            GameStatus::Caught => here == Some(Tile::Monster) && markers == 0,
            _ => here == Some(Tile::Player) && markers == 1,
        }
    }
}
