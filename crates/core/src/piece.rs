//! Pieces module - tetromino shape matrices and the falling piece
//!
//! A shape is a small square matrix (2x2 for O, 4x4 for I, 3x3 otherwise)
//! whose occupied entries store the piece kind. Rotation works on the whole
//! matrix: transpose, then reverse each row, which turns it 90° clockwise
//! inside the same square. Four rotations always give back the original.
//!
//! Movement is two-phase. [`Piece::propose_move`] and
//! [`Piece::propose_rotation`] return a candidate by value, the board checks
//! it, and only then [`Piece::commit`] copies it back.

use crate::render::RenderSink;
use crate::source::TypeSource;
use crate::types::{Cell, Color, PieceKind};

/// Largest shape side (the I piece)
pub const MAX_SIDE: usize = 4;

/// Square occupancy matrix of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    side: u8,
    /// Row-major; only the top-left `side x side` block is meaningful.
    cells: [[Cell; MAX_SIDE]; MAX_SIDE],
}

impl Shape {
    /// Canonical spawn orientation for a kind.
    pub fn of(kind: PieceKind) -> Self {
        // One bit per column; the leftmost column is the highest of `side` bits.
        let (side, rows): (u8, [u8; MAX_SIDE]) = match kind {
            PieceKind::I => (4, [0b0000, 0b1111, 0b0000, 0b0000]),
            PieceKind::J => (3, [0b100, 0b111, 0b000, 0]),
            PieceKind::L => (3, [0b001, 0b111, 0b000, 0]),
            PieceKind::O => (2, [0b11, 0b11, 0, 0]),
            PieceKind::S => (3, [0b011, 0b110, 0b000, 0]),
            PieceKind::T => (3, [0b010, 0b111, 0b000, 0]),
            PieceKind::Z => (3, [0b110, 0b011, 0b000, 0]),
        };
        let n = side as usize;
        let mut cells = [[None; MAX_SIDE]; MAX_SIDE];
        for (row, bits) in cells.iter_mut().zip(rows) {
            for (x, cell) in row.iter_mut().take(n).enumerate() {
                if bits & (1 << (n - 1 - x)) != 0 {
                    *cell = Some(kind);
                }
            }
        }
        Self { side, cells }
    }

    /// Build a shape from rows of type ids (0 = empty).
    ///
    /// Returns `None` unless the rows form a square of side 1 to 4 holding
    /// only valid ids.
    ///
    /// ```
    /// use blockfall_core::piece::Shape;
    /// use blockfall_core::types::PieceKind;
    ///
    /// let t = Shape::from_rows(&[&[0, 6, 0], &[6, 6, 6], &[0, 0, 0]]).unwrap();
    /// assert_eq!(t, Shape::of(PieceKind::T));
    /// assert!(Shape::from_rows(&[&[1, 1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let side = rows.len();
        if side == 0 || side > MAX_SIDE || rows.iter().any(|row| row.len() != side) {
            return None;
        }
        let mut cells = [[None; MAX_SIDE]; MAX_SIDE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                if id != 0 {
                    cells[y][x] = Some(PieceKind::from_id(id)?);
                }
            }
        }
        Some(Self {
            side: side as u8,
            cells,
        })
    }

    /// Side length of the square matrix
    pub fn side(&self) -> usize {
        self.side as usize
    }

    /// Matrix entry at column `x`, row `y`; `None` outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.side() || y >= self.side() {
            return None;
        }
        self.cells[y][x]
    }

    /// Clockwise quarter turn: transpose, then reverse each row.
    pub fn rotated(&self) -> Self {
        let n = self.side();
        let mut t = self.cells;
        for y in 0..n {
            for x in 0..y {
                let tmp = t[x][y];
                t[x][y] = t[y][x];
                t[y][x] = tmp;
            }
        }
        for row in t.iter_mut().take(n) {
            row[..n].reverse();
        }
        Self {
            side: self.side,
            cells: t,
        }
    }

    /// Occupied entries as `(dx, dy, kind)` relative to the matrix origin.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        let n = self.side();
        self.cells[..n].iter().enumerate().flat_map(move |(y, row)| {
            row[..n]
                .iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|kind| (x as i8, y as i8, kind)))
        })
    }
}

/// A tetromino with its shape, kind and grid position.
///
/// `Copy` on purpose: candidates produced by the `propose_*` methods are
/// independent values owned by the caller until committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    /// Column of the shape matrix's top-left corner
    x: i8,
    /// Row of the shape matrix's top-left corner
    y: i8,
}

impl Piece {
    /// New piece of `kind` at (0, 0) in its canonical orientation.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::of(kind),
            x: 0,
            y: 0,
        }
    }

    /// New piece of a kind drawn from `source`.
    pub fn create(source: &mut impl TypeSource) -> Self {
        Self::new(source.next_kind())
    }

    /// Place the piece at its spawn column. The O piece sits one further right.
    pub fn set_start_position(&mut self) {
        self.x = if self.kind == PieceKind::O { 4 } else { 3 };
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Absolute grid coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy, _)| (self.x + dx, self.y + dy))
    }

    /// Candidate shifted by `(dx, dy)`; `self` is untouched.
    pub fn propose_move(&self, dx: i8, dy: i8) -> Piece {
        Piece {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate turned 90° clockwise in place; `self` is untouched.
    pub fn propose_rotation(&self) -> Piece {
        Piece {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    /// Adopt the position and shape of a candidate the board already accepted.
    pub fn commit(&mut self, candidate: Piece) {
        debug_assert_eq!(self.kind, candidate.kind, "candidate of another piece");
        self.x = candidate.x;
        self.y = candidate.y;
        self.shape = candidate.shape;
    }

    /// Emit one fill request per occupied cell.
    pub fn draw(&self, sink: &mut impl RenderSink) {
        let color = self.color();
        for (x, y) in self.cells() {
            sink.fill_cell(color, x, y);
        }
    }
}
