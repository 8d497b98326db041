//! Move resolver - validates and applies a single player step.

use log::trace;

use crate::grid::Grid;
use crate::player::Player;
use crate::types::{Direction, MoveOutcome, Tile, EXIT_TREASURE_REQUIRED};

/// Try to move the player one cell in `direction`.
///
/// Blocked moves (out of bounds, pillar, wall, monster, exit without treasure)
/// return [`MoveOutcome::Stayed`] and leave `grid` and `player` untouched.
/// Accepted moves clear the old marker, place the marker on the target and
/// report what the target held.
///
/// # Panics
///
/// Panics if the target already holds a player marker, which means the grid
/// and player were out of sync before the call.
pub fn attempt_move(grid: &mut Grid, player: &mut Player, direction: Direction) -> MoveOutcome {
    let from = player.position();
    let Some(to) = from.step(direction, grid.rows(), grid.cols()) else {
        trace!("move {} from {:?}: out of bounds", direction.as_str(), from);
        return MoveOutcome::Stayed;
    };
    let Some(target) = grid.tile_at(to) else {
        return MoveOutcome::Stayed;
    };

    let outcome = match target {
        Tile::Pillar | Tile::Wall | Tile::Monster => MoveOutcome::Stayed,
        Tile::Exit if player.treasure < EXIT_TREASURE_REQUIRED => MoveOutcome::Stayed,
        Tile::Exit => MoveOutcome::Exit,
        Tile::Treasure => MoveOutcome::Treasure,
        Tile::Amulet => MoveOutcome::Amulet,
        Tile::Door => MoveOutcome::Door,
        Tile::Open => MoveOutcome::Moved,
        Tile::Player => unreachable!(
            "player marker at {:?} while the player stands at {:?}",
            to, from
        ),
    };

    if outcome == MoveOutcome::Stayed {
        trace!(
            "move {} from {:?}: blocked by {}",
            direction.as_str(),
            from,
            target.as_str()
        );
        return outcome;
    }

    grid.set_at(from, Tile::Open);
    grid.set_at(to, Tile::Player);
    player.place(to);
    if outcome == MoveOutcome::Treasure {
        player.treasure += 1;
    }

    trace!(
        "move {} from {:?} to {:?}: {}",
        direction.as_str(),
        from,
        to,
        outcome.as_str()
    );
    outcome
}
