//! Input module - turns devices into the game's key alphabet.
//!
//! - [`map`]: terminal key events (crossterm) to [`Key`](crate::types::Key)
//! - [`evdev`]: raw Linux `input_event` records to keys
//! - [`source`]: the per-frame [`KeySource`] trait and the terminal keyboard
//!
//! Every source must return `Key::None` instead of blocking when nothing is
//! pending; read failures are logged and also come back as `Key::None`.

pub mod evdev;
pub mod map;
pub mod source;

pub use stetris_types as types;

pub use evdev::{decode_events, first_key_press, InputEvent, EVENT_SIZE, MAX_EVENTS};
pub use map::map_key_event;
pub use source::{first_pressed, KeySource, Keyboard};
