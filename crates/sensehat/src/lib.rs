//! Raspberry Pi Sense HAT devices: the 8x8 LED matrix and the joystick.
//!
//! Both are located by the name their driver reports rather than by a fixed
//! device node, see [`discovery`].

pub mod discovery;
pub mod error;
pub mod joystick;
pub mod matrix;

pub use stetris_core as core;
pub use stetris_input as input;
pub use stetris_types as types;

pub use error::DeviceError;
pub use joystick::{Joystick, JOYSTICK_NAME};
pub use matrix::{LedMatrix, PixelBuffer, FB_NAME};
