//! Console mirror of the playfield.
//!
//! The view is pure: [`ConsoleView`] lays out a [`GameState`](crate::core::GameState)
//! into a [`FrameBuffer`] of characters. [`TerminalRenderer`] owns the terminal
//! (raw mode, alternate screen) and flushes only the cells that changed since
//! the previous frame. [`ConsoleRenderer`] ties both together behind the
//! core [`Render`](crate::core::Render) trait.

pub mod console_view;
pub mod fb;
pub mod renderer;

pub use stetris_core as core;
pub use stetris_types as types;

pub use console_view::{ConsoleView, PANEL_WIDTH};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame_into, ConsoleRenderer, TerminalRenderer};
