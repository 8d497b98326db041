//! Glyph framebuffer the dungeon view paints into.
//!
//! Cells carry a palette [`Ink`] rather than raw colors. The renderer owns the
//! mapping from inks to terminal colors, so the view stays pure.

use crate::types::Tile;

/// Named colors of the dungeon palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ink {
    #[default]
    Text,
    /// Side panel headings
    Label,
    /// Map border
    Frame,
    Floor,
    Stone,
    /// Fill of replicated quadrants
    Rubble,
    Monster,
    Gold,
    Magic,
    Door,
    Exit,
    Hero,
    /// End-of-level overlay text
    Banner,
}

impl Ink {
    /// Ink a map tile is drawn with.
    pub fn for_tile(tile: Tile) -> Self {
        match tile {
            Tile::Open => Ink::Floor,
            Tile::Pillar => Ink::Stone,
            Tile::Wall => Ink::Rubble,
            Tile::Monster => Ink::Monster,
            Tile::Treasure => Ink::Gold,
            Tile::Amulet => Ink::Magic,
            Tile::Door => Ink::Door,
            Tile::Exit => Ink::Exit,
            Tile::Player => Ink::Hero,
        }
    }
}

/// Stroke weight of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
    Faint,
}

/// One screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub ink: Ink,
    pub weight: Weight,
    /// Painted over the map backdrop instead of the terminal background
    pub on_map: bool,
}

impl Default for Glyph {
    fn default() -> Self {
        Self::new(' ', Ink::Text)
    }
}

impl Glyph {
    pub const fn new(ch: char, ink: Ink) -> Self {
        Self {
            ch,
            ink,
            weight: Weight::Normal,
            on_map: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.weight = Weight::Bold;
        self
    }

    pub const fn faint(mut self) -> Self {
        self.weight = Weight::Faint;
        self
    }

    pub const fn on_map(mut self) -> Self {
        self.on_map = true;
        self
    }

    /// Same style, another character.
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }
}

/// `width x height` grid of glyphs, row-major. Writes outside it are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank the buffer at a possibly new size, keeping the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(usize::from(width) * usize::from(height), Glyph::default());
    }

    fn slot(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.slot(x, y).map(|i| self.glyphs[i])
    }

    pub fn put(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.slot(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    /// Write `text` in the style of `pen`, clipped at the right edge.
    ///
    /// Returns the column after the last character written.
    pub fn write(&mut self, x: u16, y: u16, text: &str, pen: Glyph) -> u16 {
        let mut cx = x;
        for ch in text.chars() {
            if cx >= self.width {
                break;
            }
            self.put(cx, y, pen.with_char(ch));
            cx += 1;
        }
        cx
    }

    /// Write a decimal number without allocating. Returns the next column.
    pub fn write_number(&mut self, x: u16, y: u16, value: u32, pen: Glyph) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let mut cx = x;
        for &d in digits[..len].iter().rev() {
            self.put(cx, y, pen.with_char(char::from(d)));
            cx = cx.saturating_add(1);
        }
        cx
    }

    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: Glyph) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x.saturating_add(dx), y.saturating_add(dy), glyph);
            }
        }
    }

    /// Characters of one row, mostly useful in tests.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|glyph| glyph.ch)
            .collect()
    }
}
