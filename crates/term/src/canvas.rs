//! Canvas: a [`RenderSink`] backed by a grid of colors.
//!
//! The board and pieces draw into a canvas in grid units; the game view then
//! paints the canvas onto the screen, scaling each unit to `cell_w`
//! terminal columns to compensate for tall glyphs.

use crate::core::{RenderSink, SurfaceConfig};
use crate::screen::{Screen, Tile};
use crate::types::Color;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    cols: u8,
    rows: u8,
    cells: Vec<Option<Color>>,
}

impl Canvas {
    /// A canvas already sized to `config`.
    pub fn with_config(config: SurfaceConfig) -> Self {
        let mut canvas = Self::default();
        canvas.configure(config);
        canvas
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Color at `(x, y)`; `None` when empty or outside.
    pub fn get(&self, x: u8, y: u8) -> Option<Color> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.cells[(y as usize) * (self.cols as usize) + (x as usize)]
    }

    /// Paint onto `screen` with the top-left unit at `(x, y)`.
    pub fn paint_into(&self, screen: &mut Screen, x: u16, y: u16, cell_w: u16) {
        for cy in 0..self.rows {
            for cx in 0..self.cols {
                let tile = self.get(cx, cy).map_or(Tile::Empty, Tile::Block);
                let px = x.saturating_add(cx as u16 * cell_w);
                screen.hline(px, y.saturating_add(cy as u16), cell_w, tile);
            }
        }
    }
}

impl RenderSink for Canvas {
    fn configure(&mut self, config: SurfaceConfig) {
        self.cols = config.cols;
        self.rows = config.rows;
        self.cells = vec![None; (config.cols as usize) * (config.rows as usize)];
    }

    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn fill_cell(&mut self, color: Color, x: i8, y: i8) {
        if x < 0 || y < 0 || x as u8 >= self.cols || y as u8 >= self.rows {
            return;
        }
        self.cells[(y as usize) * (self.cols as usize) + (x as usize)] = Some(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_canvas_ignores_fills() {
        let mut canvas = Canvas::default();
        canvas.fill_cell(Color::Red, 0, 0);
        assert_eq!(canvas.get(0, 0), None);
    }

    #[test]
    fn fills_land_and_clear_wipes() {
        let mut canvas = Canvas::with_config(SurfaceConfig::PREVIEW);
        canvas.fill_cell(Color::Cyan, 3, 1);
        canvas.fill_cell(Color::Cyan, 4, 1);
        canvas.fill_cell(Color::Cyan, -1, 1);
        assert_eq!(canvas.get(3, 1), Some(Color::Cyan));
        canvas.clear();
        assert_eq!(canvas.get(3, 1), None);
    }

    #[test]
    fn paint_scales_horizontally() {
        let mut canvas = Canvas::with_config(SurfaceConfig::PREVIEW);
        canvas.fill_cell(Color::Yellow, 1, 0);
        let mut screen = Screen::new(8, 4);
        canvas.paint_into(&mut screen, 0, 0, 2);
        assert_eq!(screen.row_text(0), "··██····");
        assert_eq!(screen.get(2, 0), Some(Tile::Block(Color::Yellow)));
        assert_eq!(screen.get(3, 0), Some(Tile::Block(Color::Yellow)));
        assert_eq!(screen.get(4, 0), Some(Tile::Empty));
    }
}
