use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_dungeon::core::{advance_monsters, attempt_move, Dungeon, Grid, Level, Player};
use tui_dungeon::types::{Direction, Tile};

/// 32x32 open arena, player in the middle, a monster at the end of every ray.
fn arena() -> (Grid, Player) {
    let mut grid = Grid::new(32, 32);
    let player = Player::new(16, 16);
    grid.set(16, 16, Tile::Player);
    for (row, col) in [(0, 16), (31, 16), (16, 0), (16, 31)] {
        grid.set(row, col, Tile::Monster);
    }
    (grid, player)
}

fn bench_attempt_move(c: &mut Criterion) {
    let (mut grid, mut player) = arena();

    c.bench_function("attempt_move_back_and_forth", |b| {
        b.iter(|| {
            attempt_move(&mut grid, &mut player, black_box(Direction::Left));
            attempt_move(&mut grid, &mut player, black_box(Direction::Right));
        })
    });
}

fn bench_advance_monsters(c: &mut Criterion) {
    let (grid, player) = arena();

    c.bench_function("advance_monsters_four_rays", |b| {
        b.iter(|| {
            let mut grid = grid.clone();
            advance_monsters(&mut grid, black_box(&player))
        })
    });
}

fn bench_resize_double(c: &mut Criterion) {
    let (grid, _) = arena();

    c.bench_function("resize_double_32x32", |b| {
        b.iter(|| black_box(&grid).doubled())
    });
}

fn bench_turn(c: &mut Criterion) {
    let level = Level::load("levels/level1.txt").expect("bundled level");

    c.bench_function("dungeon_turn", |b| {
        b.iter(|| {
            let mut dungeon = Dungeon::from_level(level.clone());
            dungeon.step(black_box(Direction::Down));
            dungeon.wait()
        })
    });
}

criterion_group!(
    benches,
    bench_attempt_move,
    bench_advance_monsters,
    bench_resize_double,
    bench_turn
);
criterion_main!(benches);
