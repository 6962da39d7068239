//! TerminalRenderer: puts screens on a real terminal.
//!
//! Tiles get their colors here, at encode time. After the first frame only
//! tiles that differ from the previous screen are written, and the cursor is
//! moved only when the next changed tile is not where the last print left it.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::screen::{Screen, Tile};
use crate::types::Color;

const fn rgb(r: u8, g: u8, b: u8) -> TermColor {
    TermColor::Rgb { r, g, b }
}

const BACKDROP: TermColor = rgb(0, 0, 0);
/// Background behind playfield and preview cells.
const WELL: TermColor = rgb(30, 30, 40);
const TEXT: TermColor = rgb(220, 220, 220);
const DIM: TermColor = rgb(200, 200, 200);

/// Terminal color for each entry of the color table.
pub fn palette(color: Color) -> TermColor {
    match color {
        Color::Cyan => rgb(80, 220, 220),
        Color::Blue => rgb(80, 120, 220),
        Color::Orange => rgb(255, 165, 0),
        Color::Yellow => rgb(240, 220, 80),
        Color::Green => rgb(100, 220, 120),
        Color::Purple => rgb(200, 120, 220),
        Color::Red => rgb(220, 80, 80),
    }
}

/// Colors and weight a tile is printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Look {
    pub fg: TermColor,
    pub bg: TermColor,
    pub bold: bool,
}

pub fn look(tile: Tile) -> Look {
    let (fg, bg, bold) = match tile {
        Tile::Blank => (TEXT, BACKDROP, false),
        Tile::Frame(_) | Tile::Value(_) => (DIM, BACKDROP, false),
        Tile::Empty => (rgb(90, 90, 100), WELL, false),
        Tile::Block(color) => (palette(color), WELL, true),
        Tile::Caption(_) => (TEXT, BACKDROP, true),
        Tile::Banner(_) => (rgb(144, 238, 144), BACKDROP, true),
    };
    Look { fg, bg, bold }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Screen currently on the terminal.
    last: Option<Screen>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo everything [`TerminalRenderer::enter`] did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")
    }

    /// Make the next [`TerminalRenderer::present`] repaint everything.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Show `screen`, then swap it with the previous frame.
    ///
    /// On return `screen` holds stale tiles; `GameView::render_into` resets
    /// it before the next frame, so no copy is made.
    pub fn present(&mut self, screen: &mut Screen) -> Result<()> {
        self.buf.clear();
        let prev = self.last.as_ref().filter(|last| last.size() == screen.size());
        encode_into(prev, screen, &mut self.buf)?;
        self.flush_buf()?;

        match self.last.as_mut() {
            Some(last) => std::mem::swap(last, screen),
            None => self.last = Some(screen.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode `next` into `out`.
///
/// With `prev` only tiles that changed are written. Without it the terminal
/// is cleared and every tile is written.
pub fn encode_into(prev: Option<&Screen>, next: &Screen, out: &mut Vec<u8>) -> Result<()> {
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen: Option<Look> = None;
    let mut cursor_at: Option<(u16, u16)> = None;

    for y in 0..next.height() {
        let old = prev.map(|p| p.row(y));
        for (x, &tile) in (0u16..).zip(next.row(y)) {
            if old.and_then(|row| row.get(x as usize)) == Some(&tile) {
                continue;
            }
            if cursor_at != Some((x, y)) {
                out.queue(cursor::MoveTo(x, y))?;
            }
            let wanted = look(tile);
            if pen != Some(wanted) {
                apply_look(out, wanted)?;
                pen = Some(wanted);
            }
            out.queue(Print(tile.ch()))?;
            cursor_at = Some((x.saturating_add(1), y));
        }
    }

    if pen.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_look(out: &mut Vec<u8>, look: Look) -> Result<()> {
    // Attribute::Reset also drops colors, so it goes first.
    let weight = if look.bold {
        Attribute::Bold
    } else {
        Attribute::Reset
    };
    out.queue(SetAttribute(weight))?;
    out.queue(SetForegroundColor(look.fg))?;
    out.queue(SetBackgroundColor(look.bg))?;
    Ok(())
}
