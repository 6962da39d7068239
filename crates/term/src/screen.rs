//! Screen: the game's terminal layout as a grid of tiles.
//!
//! A tile says what occupies a terminal cell (a block of some color, an empty
//! playfield cell, part of the frame, a caption) rather than how it looks.
//! Colors are picked when the renderer encodes a tile, so two frames can be
//! compared tile by tile.

use core::fmt::Write as _;

use arrayvec::ArrayString;

use crate::types::Color;

/// Content of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    /// Nothing drawn
    #[default]
    Blank,
    /// Border line around the playfield
    Frame(char),
    /// Free playfield or preview cell
    Empty,
    /// Part of a locked or falling piece
    Block(Color),
    /// Side panel caption
    Caption(char),
    /// Side panel number
    Value(char),
    /// Overlay banner text (PAUSED, GAME OVER) and its band
    Banner(char),
}

impl Tile {
    /// Character printed for this tile.
    pub fn ch(self) -> char {
        match self {
            Tile::Blank => ' ',
            Tile::Empty => '·',
            Tile::Block(_) => '█',
            Tile::Frame(c) | Tile::Caption(c) | Tile::Value(c) | Tile::Banner(c) => c,
        }
    }
}

/// Row-major tile grid sized to the terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    width: u16,
    height: u16,
    tiles: Vec<Tile>,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        let mut screen = Self::default();
        screen.resize(width, height);
        screen
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Match the terminal size and blank every tile.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.resize(width, height);
        self.tiles.fill(Tile::Blank);
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.tiles
            .resize(width as usize * height as usize, Tile::Blank);
    }

    /// One row of tiles; empty outside the screen.
    pub fn row(&self, y: u16) -> &[Tile] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.tiles[start..start + self.width as usize]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Tile> {
        self.row(y).get(x as usize).copied()
    }

    /// Tiles outside the screen are dropped.
    pub fn set(&mut self, x: u16, y: u16, tile: Tile) {
        if x < self.width && y < self.height {
            self.tiles[y as usize * self.width as usize + x as usize] = tile;
        }
    }

    /// A horizontal strip of `len` copies of `tile`.
    pub fn hline(&mut self, x: u16, y: u16, len: u16, tile: Tile) {
        for dx in 0..len {
            self.set(x.saturating_add(dx), y, tile);
        }
    }

    /// Write `text` left to right, wrapping each char with `make`.
    pub fn text(&mut self, x: u16, y: u16, text: &str, make: fn(char) -> Tile) {
        for (dx, ch) in (0u16..).zip(text.chars()) {
            self.set(x.saturating_add(dx), y, make(ch));
        }
    }

    /// Decimal `value` as [`Tile::Value`] digits.
    pub fn number(&mut self, x: u16, y: u16, value: u32) {
        let mut digits = ArrayString::<10>::new();
        // u32::MAX has 10 digits, so this never overflows.
        let _ = write!(digits, "{}", value);
        self.text(x, y, &digits, Tile::Value);
    }

    /// Printed characters of one row, for assertions.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|tile| tile.ch()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_tiles_are_dropped() {
        let mut screen = Screen::new(3, 2);
        screen.set(3, 0, Tile::Empty);
        screen.set(0, 2, Tile::Empty);
        assert_eq!(screen.row_text(0), "   ");
        assert_eq!(screen.row_text(1), "   ");
        assert_eq!(screen.get(0, 2), None);
        assert!(screen.row(5).is_empty());
    }

    #[test]
    fn numbers_are_value_tiles() {
        let mut screen = Screen::new(12, 1);
        screen.number(1, 0, 40_230);
        assert_eq!(screen.row_text(0), " 40230      ");
        assert_eq!(screen.get(1, 0), Some(Tile::Value('4')));
        screen.number(0, 0, u32::MAX);
        assert_eq!(screen.row_text(0).trim_end(), "4294967295");
    }

    #[test]
    fn text_clips_at_right_edge() {
        let mut screen = Screen::new(4, 1);
        screen.text(2, 0, "SCORE", Tile::Caption);
        assert_eq!(screen.row_text(0), "  SC");
        assert_eq!(screen.get(3, 0), Some(Tile::Caption('C')));
    }

    #[test]
    fn reset_resizes_and_blanks() {
        let mut screen = Screen::new(2, 2);
        screen.set(1, 1, Tile::Block(Color::Red));
        screen.reset(3, 1);
        assert_eq!(screen.size(), (3, 1));
        assert_eq!(screen.row(0), &[Tile::Blank; 3]);
    }
}
