//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Input`] values for the
//! session. Key repeat is left to the terminal; there is no DAS/ARR handling.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};
