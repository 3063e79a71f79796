use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::MATRIX_BYTES;

/// Device initialization failures. All of them are fatal to the game.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("cannot scan {}: {source}", .dir.display())]
    Scan {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("framebuffer device '{name}' not found in {}", .dir.display())]
    FramebufferNotFound { name: String, dir: PathBuf },
    #[error("event device '{name}' not found in {}", .dir.display())]
    EventDeviceNotFound { name: String, dir: PathBuf },
    #[error("failed to map framebuffer: {0}")]
    Map(#[source] io::Error),
    #[error("framebuffer has {len} bytes, the LED matrix needs {}", MATRIX_BYTES)]
    TooSmall { len: usize },
}
