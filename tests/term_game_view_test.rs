use tui_dungeon::core::{Dungeon, Level};
use tui_dungeon::term::{AnchorY, GameView, Hud, Viewport};
use tui_dungeon::types::Direction;

fn dungeon(text: &str) -> Dungeon {
    Dungeon::from_level(Level::parse(text).unwrap())
}

fn screen_text(fb: &tui_dungeon::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let d = dungeon("3 3\n1 1\n---\n---\n---\n");
    let view = GameView::default();

    // 3 cells * 2 chars + border => 8 wide, 3 rows + border => 5 tall
    let fb = view.render(&d, &Hud::default(), Viewport::new(8, 5));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(7, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 4).unwrap().ch, '└');
    assert_eq!(fb.get(7, 4).unwrap().ch, '┘');
}

#[test]
fn term_view_places_tiles_two_chars_wide() {
    let d = dungeon("2 3\n0 0\n-$M\n+-!\n");
    let view = GameView::default();
    let fb = view.render(&d, &Hud::default(), Viewport::new(8, 4));

    assert_eq!(fb.row_text(1), "│o $ M │");
    assert_eq!(fb.row_text(2), "│██· ! │");
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut d = dungeon("1 3\n0 0\n-$-\n");
    d.step(Direction::Right);

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let hud = Hud {
        level: 2,
        message: Some("You found treasure!"),
    };
    let all = screen_text(&view.render(&d, &hud, Viewport::new(60, 16)));

    assert!(all.contains("LEVEL"));
    assert!(all.contains("TREASURE"));
    assert!(all.contains("1x3"));
    assert!(all.contains("You found treasure!"));
}

#[test]
fn term_view_camera_follows_player_on_large_grids() {
    let mut row = "-".repeat(40);
    row.replace_range(35..36, "$");
    let d = dungeon(&format!("1 40\n0 39\n{row}\n"));

    // Room for 10 cells: the window ends at the right edge of the grid.
    let fb = GameView::default().render(&d, &Hud::default(), Viewport::new(22, 3));
    let text = fb.row_text(1);
    assert!(text.contains('o'));
    assert!(text.contains('$'));
}

#[test]
fn term_view_shows_overlay_when_caught() {
    let mut d = dungeon("1 2\n0 0\n-M\n");
    d.wait();

    let fb = GameView::default().render(&d, &Hud::default(), Viewport::new(30, 9));
    assert!(screen_text(&fb).contains("CAUGHT"));
}
