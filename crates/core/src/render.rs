//! Rendering seam - the write-only drawing collaborator
//!
//! The core never reads anything back from a sink. One grid cell is one
//! drawing unit; scaling to pixels or terminal columns is the sink's business.

use crate::types::{Color, COLS, PREVIEW_SIZE, ROWS};

/// Size of a drawing surface in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub cols: u8,
    pub rows: u8,
}

impl SurfaceConfig {
    /// The main playfield.
    pub const BOARD: SurfaceConfig = SurfaceConfig {
        cols: COLS,
        rows: ROWS,
    };

    /// The next-piece preview area.
    pub const PREVIEW: SurfaceConfig = SurfaceConfig {
        cols: PREVIEW_SIZE,
        rows: PREVIEW_SIZE,
    };
}

/// Receives drawing requests from the board and pieces.
pub trait RenderSink {
    /// One-time sizing call; one cell becomes one drawing unit.
    fn configure(&mut self, config: SurfaceConfig);

    /// Wipe the whole surface.
    fn clear(&mut self);

    /// Fill the unit cell at `(x, y)` with `color`.
    fn fill_cell(&mut self, color: Color, x: i8, y: i8);
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn configure(&mut self, config: SurfaceConfig) {
        (**self).configure(config);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn fill_cell(&mut self, color: Color, x: i8, y: i8) {
        (**self).fill_cell(color, x, y);
    }
}
