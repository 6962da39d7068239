//! Session driver.
//!
//! Wraps a [`core::Board`] with the parts of the game loop that live outside
//! the board: progress bookkeeping, drop rewards, level speed, pause, finish
//! and restart. It is still free of I/O; the binary feeds it key inputs and
//! elapsed time.

pub mod session;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use session::{Session, SessionStatus};
