//! Core types module - shared data structures and constants
//!
//! Everything in here is plain data with no dependencies, so the game core,
//! the input adapters and both renderers can agree on one vocabulary.
//!
//! # Playfield Dimensions
//!
//! The default playfield matches the 8x8 LED matrix:
//!
//! - **Width**: 8 columns (indexed 0-7)
//! - **Height**: 8 rows (indexed 0-7, row 0 is the spawn row)
//! - **Spawn position**: ((width - 1) / 2, 0) = (3, 0)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_US` | 10000 | Frame period in microseconds (100 Hz polling) |
//! | `INIT_NEXT_GAME_TICK` | 50 | Frames per game step at level 0 (500ms) |
//! | `ROWS_PER_LEVEL` | 2 | Cleared rows needed for a level-up |
//!
//! # Examples
//!
//! ```
//! use stetris_types::{Color, Key, StateFlags, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(Key::from_str("left"), Some(Key::Left));
//! assert_eq!(Color::Red.rgb565(), 0xF800);
//!
//! let mut state = StateFlags::GAME_OVER;
//! assert!(state.is_game_over());
//! state.insert(StateFlags::ACTIVE | StateFlags::TILE_ADDED);
//! assert!(state.contains(StateFlags::ACTIVE));
//!
//! assert_eq!((GRID_WIDTH, GRID_HEIGHT), (8, 8));
//! ```

use std::ops::BitOr;

/// Playfield width in cells (8 columns)
pub const GRID_WIDTH: usize = 8;

/// Playfield height in cells (8 rows)
pub const GRID_HEIGHT: usize = 8;

/// Frame period in microseconds (10ms = 100 Hz)
pub const TICK_US: u64 = 10_000;

/// Cleared rows per level-up
pub const ROWS_PER_LEVEL: u32 = 2;

/// Initial tick wrap threshold (one game step every 50 frames)
pub const INIT_NEXT_GAME_TICK: u32 = 50;

/// Side length of the LED matrix in pixels
pub const MATRIX_SIZE: usize = 8;

/// Size in bytes of the LED matrix pixel memory (8x8 RGB565 pixels)
pub const MATRIX_BYTES: usize = MATRIX_SIZE * MATRIX_SIZE * 2;


/// Input alphabet shared by every key source.
///
/// `None` means "nothing pressed this frame" and is the value every adapter
/// must return when no event is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Key {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
    Enter,
}

impl Key {
    /// Parse a key name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use stetris_types::Key;
    ///
    /// assert_eq!(Key::from_str("UP"), Some(Key::Up));
    /// assert_eq!(Key::from_str("enter"), Some(Key::Enter));
    /// assert_eq!(Key::from_str("space"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(Key::None),
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "enter" => Some(Key::Enter),
            _ => None,
        }
    }

    /// Upper-case name, as echoed by the matrix test tool
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::None => "NONE",
            Key::Up => "UP",
            Key::Down => "DOWN",
            Key::Left => "LEFT",
            Key::Right => "RIGHT",
            Key::Enter => "ENTER",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Key::None
    }
}

/// LED matrix palette (16-bit RGB565 values as written to the display).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Color {
    Red = 0xF800,
    Green = 0x07E0,
    Blue = 0x001F,
    Magenta = 0xF81F,
    Cyan = 0x07FF,
    Yellow = 0xFFE0,
    Black = 0x0000,
    White = 0xFFFF,
}

/// Colors a block may take when it is spawned.
pub const BLOCK_PALETTE: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
];

impl Color {
    /// Every named color, in palette order
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Yellow,
        Color::Black,
        Color::White,
    ];

    /// Raw pixel value for the display
    pub const fn rgb565(self) -> u16 {
        self as u16
    }

    /// Expand to 8 bits per channel (for terminals)
    pub fn to_rgb888(self) -> (u8, u8, u8) {
        let v = self.rgb565();
        let r = ((v >> 11) & 0x1F) as u32;
        let g = ((v >> 5) & 0x3F) as u32;
        let b = (v & 0x1F) as u32;
        (
            (r * 255 / 31) as u8,
            (g * 255 / 63) as u8,
            (b * 255 / 31) as u8,
        )
    }

    /// Parse a color name, ignoring surrounding whitespace and case
    ///
    /// # Examples
    ///
    /// ```
    /// use stetris_types::Color;
    ///
    /// assert_eq!(Color::from_str(" Cyan "), Some(Color::Cyan));
    /// assert_eq!(Color::from_str("orange"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let name = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

/// A cell on the playfield
///
/// - `None`: empty (has no color)
/// - `Some(Color)`: occupied, drawn in that color
pub type Cell = Option<Color>;

/// Playfield coordinate: x is the column, y is the row (0 = top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Game state bitset.
///
/// The empty set is GAME_OVER. `ROW_CLEAR` and `TILE_ADDED` are informational
/// and only describe the most recent game step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StateFlags(u8);

impl StateFlags {
    pub const GAME_OVER: StateFlags = StateFlags(0);
    pub const ACTIVE: StateFlags = StateFlags(1 << 0);
    pub const ROW_CLEAR: StateFlags = StateFlags(1 << 1);
    pub const TILE_ADDED: StateFlags = StateFlags(1 << 2);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: StateFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: StateFlags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: StateFlags) {
        self.0 &= !other.0;
    }

    pub const fn is_active(self) -> bool {
        self.contains(Self::ACTIVE)
    }

    pub const fn is_game_over(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for StateFlags {
    type Output = StateFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        StateFlags(self.0 | rhs.0)
    }
}
