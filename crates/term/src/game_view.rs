//! GameView: lays out the board canvas, preview and labels on the screen.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::Canvas;
use crate::labels::Labels;
use crate::screen::{Screen, Tile};
use crate::types::ProgressField;

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

/// Everything one frame shows.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub board: &'a Canvas,
    pub preview: &'a Canvas,
    pub labels: &'a Labels,
    /// Centered banner over the board, e.g. "PAUSED".
    pub message: Option<&'a str>,
}

pub struct GameView {
    /// Terminal columns per grid cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing screen, resizing it to the viewport.
    pub fn render_into(&self, frame: &Frame<'_>, viewport: Viewport, screen: &mut Screen) {
        screen.reset(viewport.width, viewport.height);

        let frame_w = frame.board.cols() as u16 * self.cell_w + 2;
        let frame_h = frame.board.rows() as u16 + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(screen, start_x, start_y, frame_w, frame_h);
        frame
            .board
            .paint_into(screen, start_x + 1, start_y + 1, self.cell_w);

        self.draw_side_panel(screen, frame, viewport, start_x + frame_w + 2, start_y);

        if let Some(message) = frame.message {
            draw_banner(screen, start_x, start_y + frame_h / 3, frame_w, message);
        }
    }

    /// Convenience helper that allocates a new screen.
    pub fn render(&self, frame: &Frame<'_>, viewport: Viewport) -> Screen {
        let mut screen = Screen::default();
        self.render_into(frame, viewport, &mut screen);
        screen
    }

    fn draw_side_panel(
        &self,
        screen: &mut Screen,
        frame: &Frame<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        // Not enough room for the widest caption plus a value.
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let mut y = start_y;
        for field in ProgressField::ALL {
            screen.text(panel_x, y, field.label(), Tile::Caption);
            screen.number(panel_x, y + 1, frame.labels.get(field));
            y = y.saturating_add(3);
        }

        screen.text(panel_x, y, "NEXT", Tile::Caption);
        frame.preview.paint_into(screen, panel_x, y + 1, self.cell_w);
    }
}

fn draw_border(screen: &mut Screen, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);

    screen.hline(x + 1, y, w - 2, Tile::Frame('─'));
    screen.hline(x + 1, bottom, w - 2, Tile::Frame('─'));
    for row in y + 1..bottom {
        screen.set(x, row, Tile::Frame('│'));
        screen.set(right, row, Tile::Frame('│'));
    }
    screen.set(x, y, Tile::Frame('┌'));
    screen.set(right, y, Tile::Frame('┐'));
    screen.set(x, bottom, Tile::Frame('└'));
    screen.set(right, bottom, Tile::Frame('┘'));
}

/// A band across the inside of the frame with `text` centered on it.
fn draw_banner(screen: &mut Screen, frame_x: u16, y: u16, frame_w: u16, text: &str) {
    screen.hline(frame_x + 1, y, frame_w.saturating_sub(2), Tile::Banner(' '));
    let text_w = text.chars().count() as u16;
    let x = frame_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    screen.text(x, y, text, Tile::Banner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RenderSink, SurfaceConfig};
    use crate::types::Color;

    fn canvases() -> (Canvas, Canvas) {
        (
            Canvas::with_config(SurfaceConfig::BOARD),
            Canvas::with_config(SurfaceConfig::PREVIEW),
        )
    }

    #[test]
    fn board_is_framed_and_centered() {
        let (board, preview) = canvases();
        let labels = Labels::default();
        let frame = Frame {
            board: &board,
            preview: &preview,
            labels: &labels,
            message: None,
        };
        let screen = GameView::default().render(&frame, Viewport::new(22, 22));
        assert_eq!(screen.get(0, 0), Some(Tile::Frame('┌')));
        assert_eq!(screen.get(21, 21), Some(Tile::Frame('┘')));
        assert_eq!(screen.get(1, 1), Some(Tile::Empty));
    }

    #[test]
    fn filled_cells_are_double_width() {
        let (mut board, preview) = canvases();
        board.fill_cell(Color::Red, 0, 19);
        let labels = Labels::default();
        let frame = Frame {
            board: &board,
            preview: &preview,
            labels: &labels,
            message: None,
        };
        let screen = GameView::default().render(&frame, Viewport::new(22, 22));
        assert_eq!(screen.get(1, 20), Some(Tile::Block(Color::Red)));
        assert_eq!(screen.get(2, 20), Some(Tile::Block(Color::Red)));
        assert_eq!(screen.get(3, 20), Some(Tile::Empty));
    }

    #[test]
    fn side_panel_shows_labels() {
        use crate::core::ProgressReporter;

        let (board, preview) = canvases();
        let mut labels = Labels::default();
        labels.report_progress(ProgressField::Score, 1234);
        let frame = Frame {
            board: &board,
            preview: &preview,
            labels: &labels,
            message: None,
        };
        let screen = GameView::default().render(&frame, Viewport::new(50, 22));
        assert!(screen.row_text(0).contains("SCORE"));
        assert!(screen.row_text(1).contains("1234"));
        assert!(screen.row_text(9).contains("NEXT"));
    }

    #[test]
    fn message_is_drawn_over_board() {
        let (board, preview) = canvases();
        let labels = Labels::default();
        let frame = Frame {
            board: &board,
            preview: &preview,
            labels: &labels,
            message: Some("PAUSED"),
        };
        let screen = GameView::default().render(&frame, Viewport::new(22, 22));
        let y = (0..22)
            .find(|&y| screen.row_text(y).contains("PAUSED"))
            .expect("banner row");
        assert_eq!(y, 7);
        assert_eq!(screen.get(1, y), Some(Tile::Banner(' ')));
        assert_eq!(screen.get(8, y), Some(Tile::Banner('P')));
    }
}
