//! Property tests for the simulation invariants

use proptest::prelude::*;

use tui_dungeon::core::{advance_monsters, advance_monsters_traced, attempt_move, Grid, Player};
use tui_dungeon::types::{Direction, MoveOutcome, Position, Tile};

fn tile() -> impl Strategy<Value = Tile> {
    prop_oneof![
        5 => Just(Tile::Open),
        1 => Just(Tile::Pillar),
        1 => Just(Tile::Wall),
        2 => Just(Tile::Monster),
        1 => Just(Tile::Treasure),
        1 => Just(Tile::Amulet),
        1 => Just(Tile::Door),
        1 => Just(Tile::Exit),
    ]
}

/// A random grid with exactly one marker, matching the player.
fn dungeon() -> impl Strategy<Value = (Grid, Player)> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        (
            prop::collection::vec(tile(), rows * cols),
            0..rows,
            0..cols,
            0u32..3,
        )
            .prop_map(move |(tiles, row, col, treasure)| {
                let mut grid = Grid::new(rows, cols);
                for (i, t) in tiles.into_iter().enumerate() {
                    grid.set(i / cols, i % cols, t);
                }
                grid.set(row, col, Tile::Player);
                (grid, Player::new(row, col).with_treasure(treasure))
            })
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn marker_matches(grid: &Grid, player: &Player) -> bool {
    grid.count(Tile::Player) == 1 && grid.tile_at(player.position()) == Some(Tile::Player)
}

proptest! {
    #[test]
    fn blocked_moves_change_nothing((grid, player) in dungeon(), dir in direction()) {
        let (mut g, mut p) = (grid.clone(), player);
        if attempt_move(&mut g, &mut p, dir) == MoveOutcome::Stayed {
            prop_assert_eq!(g, grid);
            prop_assert_eq!(p, player);
        }
    }

    #[test]
    fn treasure_counts_pickups(
        (mut grid, mut player) in dungeon(),
        dirs in prop::collection::vec(direction(), 0..40),
    ) {
        for dir in dirs {
            let before = player.treasure;
            let outcome = attempt_move(&mut grid, &mut player, dir);
            let expected = before + u32::from(outcome == MoveOutcome::Treasure);
            prop_assert_eq!(player.treasure, expected);
            prop_assert!(marker_matches(&grid, &player));
        }
    }

    #[test]
    fn marker_survives_monster_advance((mut grid, player) in dungeon()) {
        let caught = advance_monsters(&mut grid, &player);
        if caught {
            prop_assert_eq!(grid.tile_at(player.position()), Some(Tile::Monster));
            prop_assert_eq!(grid.count(Tile::Player), 0);
        } else {
            prop_assert!(marker_matches(&grid, &player));
        }
    }

    #[test]
    fn monster_advance_keeps_population((mut grid, player) in dungeon()) {
        let monsters = grid.count(Tile::Monster);
        if advance_monsters(&mut grid, &player) {
            // Adjacent monsters on several rays all land on the player's cell.
            prop_assert!(grid.count(Tile::Monster) <= monsters);
            prop_assert!(grid.count(Tile::Monster) >= 1);
        } else {
            prop_assert_eq!(grid.count(Tile::Monster), monsters);
        }
    }

    #[test]
    fn nearest_visible_monster_steps_once((grid, player) in dungeon()) {
        let before = grid.clone();
        let mut after = grid;
        let advance = advance_monsters_traced(&mut after, &player);
        let origin = player.position();

        for ray in Direction::ALL {
            // First non-passable tile along the ray in the original grid.
            let mut seen = None;
            let mut cursor = origin.step(ray, before.rows(), before.cols());
            while let Some(pos) = cursor {
                let tile = before.tile_at(pos).unwrap();
                if tile.blocks_sight() || tile == Tile::Monster {
                    seen = Some((pos, tile));
                    break;
                }
                cursor = pos.step(ray, before.rows(), before.cols());
            }

            let step = advance.steps.iter().find(|s| s.ray == ray);
            match seen {
                Some((pos, Tile::Monster)) => {
                    let step = step.expect("visible monster must move");
                    prop_assert_eq!(step.from, pos);
                    prop_assert_eq!(Some(step.to), pos.step(ray.opposite(), before.rows(), before.cols()));
                    prop_assert_eq!(distance(origin, step.from), distance(origin, step.to) + 1);
                    prop_assert_eq!(after.tile_at(step.to), Some(Tile::Monster));
                }
                _ => prop_assert!(step.is_none()),
            }
        }
    }

    #[test]
    fn resize_replicates_quadrants((grid, _player) in dungeon()) {
        let grown = grid.doubled().unwrap();
        let (rows, cols) = (grid.rows(), grid.cols());
        prop_assert_eq!(grown.rows(), rows * 2);
        prop_assert_eq!(grown.cols(), cols * 2);
        prop_assert_eq!(grown.count(Tile::Player), 1);

        for row in 0..rows {
            for col in 0..cols {
                let tile = grid.get(row, col).unwrap();
                let replica = match tile {
                    Tile::Open | Tile::Player => Tile::Wall,
                    other => other,
                };
                prop_assert_eq!(grown.get(row, col), Some(tile));
                prop_assert_eq!(grown.get(row, col + cols), Some(replica));
                prop_assert_eq!(grown.get(row + rows, col), Some(replica));
                prop_assert_eq!(grown.get(row + rows, col + cols), Some(replica));
            }
        }
    }
}

fn distance(a: Position, b: Position) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
