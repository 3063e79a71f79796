//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the game and nothing else. It has no
//! knowledge of terminals, framebuffers or event devices, which keeps it:
//!
//! - **Deterministic**: the same seed and key sequence produce the same game
//! - **Testable**: every rule can be driven one frame at a time
//! - **Portable**: renderers and key sources plug in from outside
//!
//! # Module Structure
//!
//! - [`playfield`]: fixed-size grid of cells with row/cell copy primitives
//! - [`clock`]: frame counter that wraps at a level-dependent threshold
//! - [`game_state`]: the state machine driven once per frame
//! - [`rng`]: small LCG used to pick block colors
//! - [`config`]: construction-time constants and their validation
//! - [`render`]: the trait renderers implement
//!
//! # Game Rules
//!
//! - The falling tile is a single cell spawned at `((width - 1) / 2, 0)`
//! - LEFT/RIGHT slide the tile one column, DOWN drops it to the bottom
//! - Only a full bottom row is cleared; everything above shifts down by one
//! - Every `rows_per_level` cleared rows the game steps faster
//! - A blocked spawn cell ends the game; any key starts a new one
//!
//! # Example
//!
//! ```
//! use stetris_core::{GameConfig, GameState};
//! use stetris_types::Key;
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//! assert!(game.state().is_game_over());
//!
//! // Any key starts a game and spawns the first tile.
//! assert!(game.step(Key::Left));
//! assert_eq!(game.tiles(), 1);
//!
//! // Hard drop lands the tile on the floor and spawns the next one.
//! assert!(game.step(Key::Down));
//! assert_eq!(game.tiles(), 2);
//! ```
//!
//! # Timing
//!
//! The caller runs one frame every `tick_us` microseconds: it calls
//! [`GameState::step`] with the key read this frame, renders if the step
//! reported a change, then calls [`GameState::advance_tick`].

pub mod clock;
pub mod config;
pub mod game_state;
pub mod playfield;
pub mod render;
pub mod rng;

pub use stetris_types as types;

// Re-export commonly used types for convenience
pub use clock::{next_game_tick_after_level_up, TickClock};
pub use config::{BlockColors, ConfigError, GameConfig};
pub use game_state::GameState;
pub use playfield::Playfield;
pub use render::Render;
pub use rng::{ColorPicker, SimpleRng};
