//! Monster advancer - straight-line sight and one-step pursuit.
//!
//! Each turn four rays are cast from the player's cell, in the fixed order
//! up, down, left, right. Along each ray the first sight-blocking tile ends
//! the scan; the first monster seen steps one cell toward the player and ends
//! the scan. Rays share the grid, so a later ray sees the moves of earlier ones.

use arrayvec::ArrayVec;
use log::debug;

use crate::grid::Grid;
use crate::player::Player;
use crate::types::{Direction, Position, Tile};

/// A single monster step made during one advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterStep {
    /// Ray the monster was seen on (outward from the player)
    pub ray: Direction,
    pub from: Position,
    pub to: Position,
}

/// Result of one monster advance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterAdvance {
    /// At most one step per ray
    pub steps: ArrayVec<MonsterStep, 4>,
    /// A monster now stands on the player's cell
    pub caught: bool,
}

/// Advance the nearest visible monster on each ray.
///
/// Returns `true` if a monster now occupies the player's cell. The player
/// itself is never modified; ending the session is up to the caller.
pub fn advance_monsters(grid: &mut Grid, player: &Player) -> bool {
    advance_monsters_traced(grid, player).caught
}

/// Like [`advance_monsters`], also reporting which monsters moved.
pub fn advance_monsters_traced(grid: &mut Grid, player: &Player) -> MonsterAdvance {
    let origin = player.position();
    let mut advance = MonsterAdvance::default();

    for ray in Direction::ALL {
        if let Some(step) = scan_ray(grid, origin, ray) {
            debug!(
                "monster on {} ray moves {:?} -> {:?}",
                ray.as_str(),
                step.from,
                step.to
            );
            advance.steps.push(step);
        }
    }

    advance.caught = grid.tile_at(origin) == Some(Tile::Monster);
    if advance.caught {
        debug!("player caught at {:?}", origin);
    }
    advance
}

/// Walk outward from `origin` along `ray` and move the first monster seen.
///
/// The scan starts one cell away from the player: a monster already standing
/// on the player's cell has caught them and stays put.
fn scan_ray(grid: &mut Grid, origin: Position, ray: Direction) -> Option<MonsterStep> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut toward = origin;
    let mut cursor = origin.step(ray, rows, cols);

    while let Some(pos) = cursor {
        let tile = grid.tile_at(pos)?;
        if tile.blocks_sight() {
            return None;
        }
        if tile == Tile::Monster {
            grid.set_at(pos, Tile::Open);
            grid.set_at(toward, Tile::Monster);
            return Some(MonsterStep {
                ray,
                from: pos,
                to: toward,
            });
        }
        toward = pos;
        cursor = pos.step(ray, rows, cols);
    }

    None
}
