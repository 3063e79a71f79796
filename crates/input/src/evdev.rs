//! Linux event device records.
//!
//! An event device delivers `struct input_event` records: a timestamp
//! followed by `type: u16`, `code: u16` and `value: i32`. Decoding works on the
//! raw bytes so the device reader stays free of `unsafe` casts.

use std::mem::size_of;

use arrayvec::ArrayVec;

use crate::types::Key;

/// `EV_KEY` event type
pub const EV_KEY: u16 = 0x01;

pub const KEY_ESC: u16 = 1;
pub const KEY_ENTER: u16 = 28;
pub const KEY_UP: u16 = 103;
pub const KEY_LEFT: u16 = 105;
pub const KEY_RIGHT: u16 = 106;
pub const KEY_DOWN: u16 = 108;

/// Key press (as opposed to release = 0 or autorepeat = 2)
pub const VALUE_PRESS: i32 = 1;

/// Size of one `input_event` record on this platform
pub const EVENT_SIZE: usize = size_of::<libc::input_event>();

const TIME_SIZE: usize = size_of::<libc::timeval>();

/// Records read per poll
pub const MAX_EVENTS: usize = 64;

/// One decoded `input_event` (timestamp dropped)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: u16,
    pub code: u16,
    pub value: i32,
}

impl InputEvent {
    pub const fn key_press(code: u16) -> Self {
        Self {
            kind: EV_KEY,
            code,
            value: VALUE_PRESS,
        }
    }

    /// Decode one record; `None` if `raw` is shorter than a record.
    pub fn from_bytes(raw: &[u8]) -> Option<Self> {
        let rec = raw.get(..EVENT_SIZE)?;
        let kind = u16::from_ne_bytes([rec[TIME_SIZE], rec[TIME_SIZE + 1]]);
        let code = u16::from_ne_bytes([rec[TIME_SIZE + 2], rec[TIME_SIZE + 3]]);
        let value = i32::from_ne_bytes([
            rec[TIME_SIZE + 4],
            rec[TIME_SIZE + 5],
            rec[TIME_SIZE + 6],
            rec[TIME_SIZE + 7],
        ]);
        Some(Self { kind, code, value })
    }

    /// Encode as a record with a zero timestamp
    pub fn to_bytes(&self) -> [u8; EVENT_SIZE] {
        let mut rec = [0u8; EVENT_SIZE];
        rec[TIME_SIZE..TIME_SIZE + 2].copy_from_slice(&self.kind.to_ne_bytes());
        rec[TIME_SIZE + 2..TIME_SIZE + 4].copy_from_slice(&self.code.to_ne_bytes());
        rec[TIME_SIZE + 4..TIME_SIZE + 8].copy_from_slice(&self.value.to_ne_bytes());
        rec
    }

    pub fn is_key_press(&self) -> bool {
        self.kind == EV_KEY && self.value == VALUE_PRESS
    }
}

/// Decode every whole record in `buf`; a trailing partial record is dropped.
pub fn decode_events(buf: &[u8]) -> ArrayVec<InputEvent, MAX_EVENTS> {
    buf.chunks_exact(EVENT_SIZE)
        .take(MAX_EVENTS)
        .filter_map(InputEvent::from_bytes)
        .collect()
}

/// Map a Linux key code to the game alphabet
pub fn key_from_code(code: u16) -> Key {
    match code {
        KEY_UP => Key::Up,
        KEY_DOWN => Key::Down,
        KEY_LEFT => Key::Left,
        KEY_RIGHT => Key::Right,
        KEY_ENTER => Key::Enter,
        _ => Key::None,
    }
}

/// The first recognized key press in a batch, or `Key::None`.
pub fn first_key_press(events: &[InputEvent]) -> Key {
    events
        .iter()
        .filter(|ev| ev.is_key_press())
        .map(|ev| key_from_code(ev.code))
        .find(|key| !key.is_none())
        .unwrap_or_default()
}
