//! TerminalRenderer: puts dungeon frames on a real terminal.
//!
//! The first frame after [`TerminalRenderer::enter`] or
//! [`TerminalRenderer::invalidate`] repaints every cell. Later frames only
//! repaint cells whose glyph changed.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Ink, Weight};

const MAP_BACKDROP: Color = Color::Rgb { r: 25, g: 22, b: 30 };
const SCREEN_BACKDROP: Color = Color::Rgb { r: 0, g: 0, b: 0 };

/// Owns raw mode and the alternate screen while the game runs.
pub struct TerminalRenderer {
    /// What the terminal currently shows, if known
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl TerminalRenderer {
    /// Switch to raw mode on the alternate screen.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        let mut renderer = Self {
            shown: None,
            out: Vec::with_capacity(16 * 1024),
        };
        if let Err(err) = renderer.open_screen() {
            let _ = terminal::disable_raw_mode();
            return Err(err.context("entering the alternate screen"));
        }
        Ok(renderer)
    }

    fn open_screen(&mut self) -> Result<()> {
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Give the terminal back in the state it was found.
    pub fn leave(mut self) -> Result<()> {
        self.out.clear();
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("disabling raw mode")
    }

    /// Forget what is on screen; the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    pub fn draw(&mut self, frame: &FrameBuffer) -> Result<()> {
        let shown = self.shown.take().filter(|shown| {
            shown.width() == frame.width() && shown.height() == frame.height()
        });

        self.out.clear();
        paint(shown.as_ref(), frame, &mut self.out)?;

        let mut shown = shown.unwrap_or_else(|| FrameBuffer::new(0, 0));
        shown.clone_from(frame);
        self.shown = Some(shown);
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.out).context("writing frame")?;
        stdout.flush().context("flushing terminal")
    }
}

/// Encode the glyphs of `next` that differ from `prev` into `out`.
///
/// With no previous frame the screen is cleared and every glyph is painted.
fn paint(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen: Option<(Ink, Weight, bool)> = None;
    let mut cursor_at: Option<(u16, u16)> = None;
    for y in 0..next.height() {
        for x in 0..next.width() {
            let glyph = next.get(x, y).unwrap_or_default();
            if prev.and_then(|prev| prev.get(x, y)) == Some(glyph) {
                continue;
            }
            if cursor_at != Some((x, y)) {
                out.queue(cursor::MoveTo(x, y))?;
            }
            let style = (glyph.ink, glyph.weight, glyph.on_map);
            if pen != Some(style) {
                set_pen(out, glyph)?;
                pen = Some(style);
            }
            out.queue(Print(glyph.ch))?;
            cursor_at = x.checked_add(1).map(|nx| (nx, y));
        }
    }

    if pen.is_some() {
        out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn set_pen(out: &mut Vec<u8>, glyph: Glyph) -> io::Result<()> {
    let backdrop = if glyph.on_map {
        MAP_BACKDROP
    } else {
        SCREEN_BACKDROP
    };
    // Attribute reset also drops colors on some terminals, so it goes first.
    out.queue(SetAttribute(Attribute::Reset))?
        .queue(SetForegroundColor(ink_color(glyph.ink)))?
        .queue(SetBackgroundColor(backdrop))?;
    match glyph.weight {
        Weight::Normal => {}
        Weight::Bold => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Weight::Faint => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
    }
    Ok(())
}

fn ink_color(ink: Ink) -> Color {
    let (r, g, b) = match ink {
        Ink::Text => (200, 200, 200),
        Ink::Label => (220, 220, 220),
        Ink::Frame => (150, 140, 130),
        Ink::Floor => (90, 90, 100),
        Ink::Stone => (150, 150, 160),
        Ink::Rubble => (90, 80, 70),
        Ink::Monster => (230, 70, 70),
        Ink::Gold => (240, 210, 80),
        Ink::Magic => (200, 120, 230),
        Ink::Door => (120, 180, 240),
        Ink::Exit => (100, 220, 120),
        Ink::Hero => (255, 255, 255),
        Ink::Banner => (255, 240, 200),
    };
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn encoded(command: impl crossterm::Command) -> Vec<u8> {
        let mut out = Vec::new();
        out.queue(command).unwrap();
        out
    }

    #[test]
    fn unchanged_frame_paints_nothing() {
        let mut frame = FrameBuffer::new(4, 3);
        frame.write(0, 1, "o$", Glyph::new('?', Ink::Gold));
        let mut out = Vec::new();
        paint(Some(&frame), &frame.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn first_frame_clears_and_paints_rows() {
        let mut frame = FrameBuffer::new(3, 2);
        frame.write(0, 0, "M-o", Glyph::default());
        let mut out = Vec::new();
        paint(None, &frame, &mut out).unwrap();

        assert!(contains(&out, &encoded(terminal::Clear(terminal::ClearType::All))));
        assert!(contains(&out, b"M-o"));
        assert!(contains(&out, &encoded(cursor::MoveTo(0, 1))));
    }

    #[test]
    fn changed_glyphs_are_painted_in_place() {
        let before = FrameBuffer::new(6, 2);
        let mut after = before.clone();
        after.write(1, 0, "MMM", Glyph::new('M', Ink::Monster).bold());
        after.put(5, 1, Glyph::new('o', Ink::Hero));

        let mut out = Vec::new();
        paint(Some(&before), &after, &mut out).unwrap();

        assert!(!contains(&out, &encoded(terminal::Clear(terminal::ClearType::All))));
        assert!(contains(&out, &encoded(cursor::MoveTo(1, 0))));
        assert!(contains(&out, b"MMM"));
        assert!(contains(&out, &encoded(cursor::MoveTo(5, 1))));
        assert!(!contains(&out, &encoded(cursor::MoveTo(0, 0))));
    }
}
