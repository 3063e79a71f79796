//! Per-frame key sources.

use std::time::Duration;

use crossterm::event::{self, Event};
use log::warn;

use crate::map::map_key_event;
use crate::types::Key;

/// Something that can be asked, once per frame, for the key pressed.
pub trait KeySource {
    /// Return the pending key or `Key::None`. Must not block.
    fn read_key(&mut self) -> Key;
}

/// First non-NONE key across `sources`, asked in order.
///
/// Sources after the first hit are not polled this frame.
pub fn first_pressed(sources: &mut [Box<dyn KeySource>]) -> Key {
    for source in sources.iter_mut() {
        let key = source.read_key();
        if !key.is_none() {
            return key;
        }
    }
    Key::None
}

/// Terminal keyboard via crossterm (expects raw mode to be enabled).
#[derive(Debug, Default)]
pub struct Keyboard;

impl Keyboard {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for Keyboard {
    fn read_key(&mut self) -> Key {
        match event::poll(Duration::ZERO) {
            Ok(false) => Key::None,
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => map_key_event(key),
                Ok(_) => Key::None,
                Err(err) => {
                    warn!("keyboard read failed: {err}");
                    Key::None
                }
            },
            Err(err) => {
                warn!("keyboard poll failed: {err}");
                Key::None
            }
        }
    }
}
