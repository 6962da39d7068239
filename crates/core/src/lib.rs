//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the board and piece simulation: the grid, collision
//! checks, movement and rotation, locking, line clears, scoring and level
//! progression. It has **no dependencies** on terminal I/O. Drawing and
//! progress display go through two small traits the caller implements:
//!
//! - [`RenderSink`]: receives unit-cell fill requests
//! - [`ProgressReporter`]: receives score/level/lines updates as they happen
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, placement validation, locking and line clearing
//! - [`piece`]: shape matrices, rotation and the two-phase move protocol
//! - [`progress`]: score/level/lines with synchronous change notification
//! - [`render`]: the rendering seam
//! - [`scoring`]: reward and level-speed tables
//! - [`source`]: random and scripted piece kind sources
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, NullReporter, Progress, TickOutcome};
//! use blockfall_core::types::{Command, PieceKind};
//!
//! let mut board = Board::new(|| PieceKind::T);
//! let mut progress = Progress::new(NullReporter);
//!
//! board.apply_move(Command::Left);
//! board.apply_move(Command::Rotate);
//! assert_eq!(board.tick(&mut progress), TickOutcome::Fell);
//! assert_eq!(board.current().y(), 1);
//! ```

pub mod board;
pub mod piece;
pub mod progress;
pub mod render;
pub mod scoring;
pub mod source;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineClear, MoveOutcome, Row, TickOutcome};
pub use piece::{Piece, Shape};
pub use progress::{LevelUp, NullReporter, Progress, ProgressReporter};
pub use render::{RenderSink, SurfaceConfig};
pub use scoring::{calculate_score, drop_reward, fall_interval_ms};
pub use source::{RandomTypes, Sequence, TypeSource};
