//! Board module - the grid, the falling piece and the next piece
//!
//! The board is a 10x20 grid of rows, each cell empty or holding the kind of
//! a locked piece. Coordinates: (x, y) where x ranges 0..9 (left to right)
//! and y ranges 0..19 (top to bottom).
//!
//! The board is the only authority on placement legality. Every move, rotation
//! and gravity step builds a candidate [`Piece`], runs it through
//! [`Board::is_placement_valid`], and commits it only when that passes.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::progress::{LevelUp, Progress, ProgressReporter};
use crate::render::{RenderSink, SurfaceConfig};
use crate::scoring::calculate_score;
use crate::source::{RandomTypes, TypeSource};
use crate::types::{Cell, Command, COLS, ROWS};

const WIDTH: usize = COLS as usize;
const HEIGHT: usize = ROWS as usize;

/// One grid row
pub type Row = [Cell; WIDTH];

/// Result of a single movement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The candidate was valid and is now the current piece.
    Moved,
    /// The candidate was rejected; nothing changed.
    Blocked,
}

impl MoveOutcome {
    pub fn moved(self) -> bool {
        self == MoveOutcome::Moved
    }
}

/// What a line-clear pass did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Number of rows removed.
    pub lines: u8,
    /// Indices of the removed rows, top to bottom, as seen before removal.
    pub rows: ArrayVec<u8, HEIGHT>,
    /// Points added to the score.
    pub points: u32,
    /// Set when this clear pushed the player to a new level.
    pub level_up: Option<LevelUp>,
}

/// Result of a gravity step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece locked and the next piece took over.
    Locked(LineClear),
    /// The piece locked without ever leaving the top row.
    GameOver(LineClear),
}

impl TickOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, TickOutcome::GameOver(_))
    }

    /// Line-clear report, if the piece locked.
    pub fn line_clear(&self) -> Option<&LineClear> {
        match self {
            TickOutcome::Fell => None,
            TickOutcome::Locked(clear) | TickOutcome::GameOver(clear) => Some(clear),
        }
    }
}

/// The playfield with its current and next piece.
#[derive(Debug, Clone)]
pub struct Board<S = RandomTypes> {
    rows: [Row; HEIGHT],
    current: Piece,
    next: Piece,
    source: S,
}

impl<S: TypeSource> Board<S> {
    /// Empty grid with a fresh current and next piece.
    pub fn new(mut source: S) -> Self {
        let mut current = Piece::create(&mut source);
        current.set_start_position();
        let next = Piece::create(&mut source);
        Self {
            rows: [[None; WIDTH]; HEIGHT],
            current,
            next,
            source,
        }
    }

    /// Size the drawing surface so one grid cell is one drawing unit.
    pub fn initialize(&self, sink: &mut impl RenderSink) {
        sink.configure(SurfaceConfig::BOARD);
    }

    /// Empty the grid and spawn a new current and next piece.
    pub fn reset(&mut self) {
        self.rows = [[None; WIDTH]; HEIGHT];
        self.current = Piece::create(&mut self.source);
        self.current.set_start_position();
        self.spawn_next();
    }

    /// The piece under player control
    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// The preview piece
    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn rows(&self) -> &[Row; HEIGHT] {
        &self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Upper-edge-inclusive bounds test.
    ///
    /// `x == COLS` and `y == ROWS` pass and negative `y` is not checked;
    /// [`Board::is_cell_free`] rejects those positions anyway.
    pub fn is_inside_bounds(&self, x: i8, y: i8) -> bool {
        x >= 0 && x <= COLS as i8 && y <= ROWS as i8
    }

    /// The cell exists and nothing is locked there.
    pub fn is_cell_free(&self, x: i8, y: i8) -> bool {
        matches!(self.cell(x, y), Some(None))
    }

    /// Every occupied cell of `candidate` is inside the grid and free.
    pub fn is_placement_valid(&self, candidate: &Piece) -> bool {
        candidate
            .cells()
            .all(|(x, y)| self.is_inside_bounds(x, y) && self.is_cell_free(x, y))
    }

    /// Build, validate and commit the candidate for one command.
    pub fn apply_move(&mut self, command: Command) -> MoveOutcome {
        let candidate = match command.offset() {
            Some((dx, dy)) => self.current.propose_move(dx, dy),
            None => self.current.propose_rotation(),
        };
        if self.is_placement_valid(&candidate) {
            self.current.commit(candidate);
            MoveOutcome::Moved
        } else {
            MoveOutcome::Blocked
        }
    }

    /// Step the piece down until it is blocked; returns the rows covered.
    ///
    /// Does not lock. The loop ends because every step moves the piece one
    /// row closer to the floor.
    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.apply_move(Command::HardDrop).moved() {
            rows += 1;
        }
        rows
    }

    /// Gravity step.
    ///
    /// When the piece cannot descend it is frozen, full rows are cleared, and
    /// either the game ends (the piece never left row 0) or the next piece
    /// takes over at its start position.
    pub fn tick<R: ProgressReporter>(&mut self, progress: &mut Progress<R>) -> TickOutcome {
        if self.apply_move(Command::Down).moved() {
            return TickOutcome::Fell;
        }

        self.freeze();
        let clear = self.clear_lines(progress);
        if self.current.y() == 0 {
            return TickOutcome::GameOver(clear);
        }

        self.current = self.next;
        self.current.set_start_position();
        self.spawn_next();
        TickOutcome::Locked(clear)
    }

    /// Copy the current piece's cells into the grid.
    ///
    /// Callers must have established that the piece cannot move down. Cells
    /// that would land outside the grid are dropped.
    pub fn freeze(&mut self) {
        let (px, py) = (self.current.x(), self.current.y());
        for (dx, dy, kind) in self.current.shape().occupied() {
            let (x, y) = (px + dx, py + dy);
            if x < 0 || y < 0 {
                continue;
            }
            if let Some(cell) = self
                .rows
                .get_mut(y as usize)
                .and_then(|row| row.get_mut(x as usize))
            {
                *cell = Some(kind);
            }
        }
    }

    /// Remove every full row and report the reward.
    ///
    /// Rows are scanned top to bottom; a full row is dropped, everything above
    /// it shifts down one row and an empty row appears at the top.
    pub fn clear_lines<R: ProgressReporter>(&mut self, progress: &mut Progress<R>) -> LineClear {
        let rows = self.clear_full_rows();
        let lines = rows.len() as u8;
        if lines == 0 {
            return LineClear::default();
        }

        let points = calculate_score(lines as usize);
        progress.add_score(points);
        let level_up = progress.add_lines(lines as u32);

        LineClear {
            lines,
            rows,
            points,
            level_up,
        }
    }

    /// Remove full rows without touching progress; returns their indices.
    pub fn clear_full_rows(&mut self) -> ArrayVec<u8, HEIGHT> {
        let mut cleared = ArrayVec::new();
        for y in 0..HEIGHT {
            if self.rows[y].iter().all(|cell| cell.is_some()) {
                self.rows.copy_within(0..y, 1);
                self.rows[0] = [None; WIDTH];
                cleared.push(y as u8);
            }
        }
        cleared
    }

    /// Draw locked cells, then the current piece.
    pub fn draw(&self, sink: &mut impl RenderSink) {
        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    sink.fill_cell(kind.color(), x as i8, y as i8);
                }
            }
        }
        self.current.draw(sink);
    }

    /// Redraw the preview surface with the next piece at its own origin.
    pub fn draw_preview(&self, sink: &mut impl RenderSink) {
        sink.clear();
        self.next.draw(sink);
    }

    /// Overwrite a single cell (fixtures and tests).
    /// Returns false if out of bounds
    pub fn set_cell(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        match self
            .rows
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Replace the current piece (fixtures and tests). No validation.
    pub fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    fn spawn_next(&mut self) {
        self.next = Piece::create(&mut self.source);
    }
}

impl Default for Board<RandomTypes> {
    fn default() -> Self {
        Self::new(RandomTypes::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullReporter;
    use crate::types::PieceKind;

    fn board_of(kind: PieceKind) -> Board<impl TypeSource> {
        Board::new(move || kind)
    }

    fn fill_row(board: &mut Board<impl TypeSource>, y: i8, except: Option<i8>) {
        for x in 0..COLS as i8 {
            if Some(x) != except {
                board.set_cell(x, y, Some(PieceKind::Z));
            }
        }
    }

    #[test]
    fn test_new_board_is_empty_with_spawned_piece() {
        let board = board_of(PieceKind::T);
        assert!(board.rows().iter().flatten().all(|c| c.is_none()));
        assert_eq!((board.current().x(), board.current().y()), (3, 0));
        assert_eq!((board.next().x(), board.next().y()), (0, 0));
    }

    #[test]
    fn test_bounds_check_is_upper_inclusive() {
        let board = board_of(PieceKind::T);
        assert!(board.is_inside_bounds(0, 0));
        assert!(board.is_inside_bounds(COLS as i8, 0));
        assert!(board.is_inside_bounds(0, ROWS as i8));
        assert!(board.is_inside_bounds(0, -3));
        assert!(!board.is_inside_bounds(-1, 0));
        assert!(!board.is_inside_bounds(COLS as i8 + 1, 0));
        assert!(!board.is_inside_bounds(0, ROWS as i8 + 1));
    }

    #[test]
    fn test_cell_free_rejects_missing_cells() {
        let board = board_of(PieceKind::T);
        assert!(board.is_cell_free(0, 0));
        assert!(!board.is_cell_free(COLS as i8, 0));
        assert!(!board.is_cell_free(0, ROWS as i8));
        assert!(!board.is_cell_free(0, -1));
        assert!(!board.is_cell_free(-1, 0));
    }

    #[test]
    fn test_clear_full_rows_shifts_down() {
        let mut board = board_of(PieceKind::T);
        fill_row(&mut board, 19, None);
        board.set_cell(2, 18, Some(PieceKind::I));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19]);
        assert_eq!(board.cell(2, 19), Some(Some(PieceKind::I)));
        assert_eq!(board.cell(2, 18), Some(None));
    }

    #[test]
    fn test_clear_two_separated_rows() {
        let mut board = board_of(PieceKind::T);
        fill_row(&mut board, 19, None);
        fill_row(&mut board, 17, None);
        board.set_cell(0, 18, Some(PieceKind::J));
        board.set_cell(5, 16, Some(PieceKind::L));

        let mut progress = Progress::new(NullReporter);
        let clear = board.clear_lines(&mut progress);
        assert_eq!(clear.lines, 2);
        assert_eq!(clear.points, 300);
        assert_eq!(clear.rows.as_slice(), &[17, 19]);
        assert_eq!(board.cell(0, 19), Some(Some(PieceKind::J)));
        assert_eq!(board.cell(5, 18), Some(Some(PieceKind::L)));
        assert_eq!(board.rows().iter().flatten().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_freeze_writes_piece_kind() {
        let mut board = board_of(PieceKind::O);
        let piece = board.current().propose_move(0, 18);
        board.set_current(piece);
        board.freeze();
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(board.cell(x, y), Some(Some(PieceKind::O)));
        }
    }

    #[test]
    fn test_hard_drop_lands_on_floor() {
        let mut board = board_of(PieceKind::O);
        assert_eq!(board.hard_drop(), 18);
        assert_eq!(board.current().y(), 18);
        assert_eq!(board.apply_move(Command::Down), MoveOutcome::Blocked);
    }
}
