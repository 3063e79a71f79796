//! The 8x8 RGB565 LED matrix.
//!
//! The framebuffer is 64 native-endian `u16` pixels in row-major order. It is
//! mapped once at startup, blanked on open and blanked again on drop so the
//! LEDs are dark after the game exits.

use std::path::Path;

use anyhow::Result;
use log::info;
use memmap2::{MmapMut, MmapOptions};

use crate::core::{GameState, Playfield, Render};
use crate::discovery::{self, DEV_DIR};
use crate::error::DeviceError;
use crate::types::{Color, MATRIX_BYTES, MATRIX_SIZE};

/// `id` the Sense HAT framebuffer driver reports
pub const FB_NAME: &str = "RPi-Sense FB";

/// Writable pixel storage backing an [`LedMatrix`].
pub trait PixelBuffer {
    fn bytes_mut(&mut self) -> &mut [u8];
    fn bytes(&self) -> &[u8];
}

impl PixelBuffer for MmapMut {
    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self[..]
    }

    fn bytes(&self) -> &[u8] {
        &self[..]
    }
}

impl PixelBuffer for Vec<u8> {
    fn bytes_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }

    fn bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

pub struct LedMatrix<B: PixelBuffer = MmapMut> {
    buf: B,
}

impl LedMatrix<MmapMut> {
    /// Find the framebuffer named `name` under `/dev` and map it.
    pub fn open(name: &str) -> Result<Self, DeviceError> {
        Self::open_in(Path::new(DEV_DIR), name)
    }

    pub fn open_in(dir: &Path, name: &str) -> Result<Self, DeviceError> {
        let file = discovery::open_framebuffer(dir, name)?;
        // SAFETY: the framebuffer mapping is only written through this
        // `LedMatrix`; the driver reads it asynchronously.
        let map = unsafe { MmapOptions::new().len(MATRIX_BYTES).map_mut(&file) }
            .map_err(DeviceError::Map)?;
        info!("LED matrix '{}' mapped ({} bytes)", name, MATRIX_BYTES);
        Self::new(map)
    }
}

impl<B: PixelBuffer> LedMatrix<B> {
    /// Wrap `buf` and blank it.
    pub fn new(buf: B) -> Result<Self, DeviceError> {
        let len = buf.bytes().len();
        if len < MATRIX_BYTES {
            return Err(DeviceError::TooSmall { len });
        }
        let mut matrix = Self { buf };
        matrix.clear();
        Ok(matrix)
    }

    pub fn clear(&mut self) {
        self.buf.bytes_mut()[..MATRIX_BYTES].fill(0);
    }

    /// Set one pixel; coordinates outside the matrix are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> bool {
        self.write(x, y, color.rgb565())
    }

    /// Raw RGB565 value at `(x, y)`
    pub fn pixel(&self, x: usize, y: usize) -> Option<u16> {
        if x >= MATRIX_SIZE || y >= MATRIX_SIZE {
            return None;
        }
        let i = (y * MATRIX_SIZE + x) * 2;
        let bytes = self.buf.bytes();
        Some(u16::from_ne_bytes([bytes[i], bytes[i + 1]]))
    }

    /// Paint the playfield; cells beyond 8x8 are clipped, empty cells are black.
    pub fn paint(&mut self, field: &Playfield) {
        for (y, row) in field.rows().take(MATRIX_SIZE).enumerate() {
            for (x, cell) in row.iter().take(MATRIX_SIZE).enumerate() {
                let value = cell.map_or(Color::Black.rgb565(), Color::rgb565);
                self.write(x, y, value);
            }
        }
    }

    fn write(&mut self, x: usize, y: usize, value: u16) -> bool {
        if x >= MATRIX_SIZE || y >= MATRIX_SIZE {
            return false;
        }
        let i = (y * MATRIX_SIZE + x) * 2;
        self.buf.bytes_mut()[i..i + 2].copy_from_slice(&value.to_ne_bytes());
        true
    }
}

impl<B: PixelBuffer> Render for LedMatrix<B> {
    fn render(&mut self, game: &GameState) -> Result<()> {
        self.paint(game.playfield());
        Ok(())
    }
}

impl<B: PixelBuffer> Drop for LedMatrix<B> {
    fn drop(&mut self) {
        self.clear();
    }
}
