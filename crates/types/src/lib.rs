//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so it can be used by the
//! simulation, the session driver, the key map and the terminal front end alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn column**: 3 for most pieces, 4 for the O piece
//!
//! # Rewards
//!
//! | Event | Points |
//! |-------|--------|
//! | Single | 100 |
//! | Double | 300 |
//! | Triple | 500 |
//! | Tetris | 800 |
//! | Soft drop step | 1 |
//! | Hard drop row | 2 |
//!
//! # Fall Intervals by Level
//!
//! Milliseconds between forced down steps, see [`LEVEL_INTERVALS_MS`]. Levels past
//! the end of the table keep the last interval.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, Command, PieceKind, COLS, ROWS};
//!
//! let kind = PieceKind::from_id(4).unwrap();
//! assert_eq!(kind, PieceKind::O);
//! assert_eq!(kind.color(), Color::Yellow);
//!
//! assert_eq!(Command::Left.offset(), Some((-1, 0)));
//!
//! assert_eq!(COLS, 10);
//! assert_eq!(ROWS, 20);
//! ```

/// Grid width in cells (10 columns)
pub const COLS: u8 = 10;

/// Grid height in cells (20 rows)
pub const ROWS: u8 = 20;

/// Side of the square preview area in cells
pub const PREVIEW_SIZE: u8 = 4;

/// Frame interval of the terminal loop in milliseconds (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points for clearing one line
pub const REWARD_SINGLE: u32 = 100;

/// Points for clearing two lines at once
pub const REWARD_DOUBLE: u32 = 300;

/// Points for clearing three lines at once
pub const REWARD_TRIPLE: u32 = 500;

/// Points for clearing four lines at once
pub const REWARD_TETRIS: u32 = 800;

/// Points for each successful manual down step
pub const REWARD_SOFT_DROP: u32 = 1;

/// Points for each row covered by a hard drop
pub const REWARD_HARD_DROP: u32 = 2;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Fall interval per level in milliseconds.
///
/// Index 0 = level 0. Levels beyond the table use the last entry.
pub const LEVEL_INTERVALS_MS: [u32; 21] = [
    800, 720, 630, 550, 470, 380, 300, 220, 130, 100, 80, 80, 80, 70, 70, 70, 50, 50, 50, 30, 30,
];

/// Number of distinct piece kinds
pub const KIND_COUNT: u8 = 7;

/// The seven tetromino kinds, numbered by their type id.
///
/// The id doubles as the index into the color table and is the value a locked
/// cell holds in a numeric grid (0 = empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in type id order (id = index + 1)
    pub const ALL: [PieceKind; KIND_COUNT as usize] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Type id in `1..=7`
    pub fn id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Look up a kind by type id
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=KIND_COUNT => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Display color from the fixed color table
    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Purple,
            PieceKind::Z => Color::Red,
        }
    }
}

/// Cell colors of the fixed color table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// A grid cell: `None` when empty, otherwise the kind of the locked piece.
pub type Cell = Option<PieceKind>;

/// Movement commands understood by the board.
///
/// `HardDrop` on its own is a single downward step; the session repeats it
/// until the piece is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    Left,
    /// Move piece one cell right
    Right,
    /// Move piece one cell down (soft drop when player-triggered)
    Down,
    /// Rotate piece 90° clockwise
    Rotate,
    /// One step of a hard drop
    HardDrop,
}

impl Command {
    /// Position delta for translating commands, `None` for rotation
    pub fn offset(self) -> Option<(i8, i8)> {
        match self {
            Command::Left => Some((-1, 0)),
            Command::Right => Some((1, 0)),
            Command::Down | Command::HardDrop => Some((0, 1)),
            Command::Rotate => None,
        }
    }
}

/// Driver-level inputs: piece commands plus game control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Forward a movement command to the board
    Move(Command),
    /// Pause or resume
    TogglePause,
    /// End the current game
    Finish,
    /// Start a new game
    Restart,
}

/// Named fields of the player's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressField {
    Score,
    Level,
    Lines,
}

impl ProgressField {
    pub const ALL: [ProgressField; 3] = [
        ProgressField::Score,
        ProgressField::Level,
        ProgressField::Lines,
    ];

    /// Caption shown above the value
    pub fn label(self) -> &'static str {
        match self {
            ProgressField::Score => "SCORE",
            ProgressField::Level => "LEVEL",
            ProgressField::Lines => "LINES",
        }
    }
}
