//! Terminal front end.
//!
//! A small, game-oriented rendering layer: the board draws into [`Canvas`]
//! sinks, progress lands in [`Labels`], [`GameView`] lays both out as
//! [`Tile`]s on a [`Screen`], and [`TerminalRenderer`] puts that screen on
//! the terminal.

pub mod canvas;
pub mod game_view;
pub mod labels;
pub mod renderer;
pub mod screen;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use canvas::Canvas;
pub use game_view::{Frame, GameView, Viewport};
pub use labels::Labels;
pub use renderer::{encode_into, look, palette, Look, TerminalRenderer};
pub use screen::{Screen, Tile};
