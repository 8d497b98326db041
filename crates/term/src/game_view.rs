//! GameView: maps a `core::Dungeon` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Dungeon;
use crate::fb::{FrameBuffer, Glyph, Ink};
use crate::types::{GameStatus, Tile};

/// Width of the side panel in terminal columns.
const PANEL_W: u16 = 20;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Session information drawn next to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud<'a> {
    /// 1-based level number
    pub level: u32,
    /// Last event message
    pub message: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Draws the visible part of the dungeon, the side panel and overlays.
pub struct GameView {
    /// Terminal columns per map cell; 2 keeps cells roughly square.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Screen placement of the map for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MapFrame {
    /// Top-left corner of the border
    x: u16,
    y: u16,
    /// Border size, including the border itself
    w: u16,
    h: u16,
    /// First visible grid cell
    row0: usize,
    col0: usize,
    rows: usize,
    cols: usize,
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the dungeon into an existing framebuffer.
    ///
    /// Grids larger than the viewport are cropped to a window that follows
    /// the player.
    pub fn render_into(
        &self,
        dungeon: &Dungeon,
        hud: &Hud<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let panel_room = if viewport.width >= PANEL_W * 2 {
            PANEL_W + 2
        } else {
            0
        };
        let Some(map) = self.place_map(dungeon, viewport, panel_room) else {
            fb.write(0, 0, "terminal too small", Glyph::default());
            return;
        };

        draw_border(fb, &map);
        let grid = dungeon.grid();
        for dy in 0..map.rows {
            for dx in 0..map.cols {
                let tile = grid.get(map.row0 + dy, map.col0 + dx).unwrap_or_default();
                let x = map.x + 1 + dx as u16 * self.cell_w;
                let y = map.y + 1 + dy as u16;
                let glyph = tile_glyph(tile);
                if matches!(tile, Tile::Pillar | Tile::Wall) {
                    fb.fill(x, y, self.cell_w, 1, glyph);
                } else {
                    fb.fill(x, y, self.cell_w, 1, glyph.with_char(' '));
                    fb.put(x, y, glyph);
                }
            }
        }

        if panel_room > 0 {
            draw_side_panel(fb, dungeon, hud, viewport, map.x + map.w + 2, map.y);
        }

        let banner = match dungeon.status() {
            GameStatus::Playing => None,
            GameStatus::LevelComplete => Some("LEVEL CLEAR"),
            GameStatus::Escaped => Some("ESCAPED"),
            GameStatus::Caught => Some("CAUGHT"),
        };
        if let Some(text) = banner {
            let text_w = text.chars().count() as u16;
            let x = map.x.saturating_add(map.w.saturating_sub(text_w) / 2);
            fb.write(x, map.y + map.h / 2, text, Glyph::new(' ', Ink::Banner).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, dungeon: &Dungeon, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(dungeon, hud, viewport, &mut fb);
        fb
    }

    fn place_map(&self, dungeon: &Dungeon, viewport: Viewport, panel_room: u16) -> Option<MapFrame> {
        let room_w = viewport.width.saturating_sub(panel_room);
        let inner_w = room_w.saturating_sub(2);
        let inner_h = viewport.height.saturating_sub(2);

        let grid = dungeon.grid();
        let cols = grid.cols().min(usize::from(inner_w / self.cell_w));
        let rows = grid.rows().min(usize::from(inner_h));
        if cols == 0 || rows == 0 {
            return None;
        }

        let player = dungeon.player();
        let w = cols as u16 * self.cell_w + 2;
        let h = rows as u16 + 2;
        Some(MapFrame {
            x: room_w.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
            row0: camera_origin(player.row, rows, grid.rows()),
            col0: camera_origin(player.col, cols, grid.cols()),
            rows,
            cols,
        })
    }
}

fn draw_border(fb: &mut FrameBuffer, map: &MapFrame) {
    let pen = Glyph::new(' ', Ink::Frame);
    let (right, bottom) = (map.x + map.w - 1, map.y + map.h - 1);

    fb.put(map.x, map.y, pen.with_char('┌'));
    fb.put(right, map.y, pen.with_char('┐'));
    fb.put(map.x, bottom, pen.with_char('└'));
    fb.put(right, bottom, pen.with_char('┘'));
    fb.fill(map.x + 1, map.y, map.w - 2, 1, pen.with_char('─'));
    fb.fill(map.x + 1, bottom, map.w - 2, 1, pen.with_char('─'));
    fb.fill(map.x, map.y + 1, 1, map.h - 2, pen.with_char('│'));
    fb.fill(right, map.y + 1, 1, map.h - 2, pen.with_char('│'));
}

fn draw_side_panel(
    fb: &mut FrameBuffer,
    dungeon: &Dungeon,
    hud: &Hud<'_>,
    viewport: Viewport,
    x: u16,
    top: u16,
) {
    let label = Glyph::new(' ', Ink::Label).bold();
    let value = Glyph::new(' ', Ink::Text);
    let grid = dungeon.grid();
    let size = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);

    let stats = [
        ("LEVEL", hud.level),
        ("TURN", dungeon.turn()),
        ("TREASURE", dungeon.player().treasure),
    ];
    let mut y = top;
    for (name, number) in stats {
        fb.write(x, y, name, label);
        fb.write_number(x, y.saturating_add(1), number, value);
        y = y.saturating_add(3);
    }

    fb.write(x, y, "SIZE", label);
    let next = fb.write_number(x, y.saturating_add(1), size(grid.rows()), value);
    let next = fb.write(next, y.saturating_add(1), "x", value);
    fb.write_number(next, y.saturating_add(1), size(grid.cols()), value);
    y = y.saturating_add(3);

    if let Some(message) = hud.message {
        if y < viewport.height {
            fb.write(x, y, message, value.faint());
        }
    }
}

/// First visible grid index along one axis, keeping `focus` centered when possible.
fn camera_origin(focus: usize, visible: usize, total: usize) -> usize {
    if visible >= total {
        return 0;
    }
    focus.saturating_sub(visible / 2).min(total - visible)
}

fn tile_glyph(tile: Tile) -> Glyph {
    let ch = match tile {
        Tile::Open => '·',
        Tile::Pillar => '█',
        Tile::Wall => '▒',
        other => other.symbol(),
    };
    let glyph = Glyph::new(ch, Ink::for_tile(tile)).on_map();
    match tile {
        Tile::Open => glyph.faint(),
        Tile::Pillar | Tile::Wall => glyph,
        _ => glyph.bold(),
    }
}
