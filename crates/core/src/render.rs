//! Renderer seam.
//!
//! Renderers get read-only access to the game and are only invoked on frames
//! where the game reported a change.

use anyhow::Result;

use crate::GameState;

pub trait Render {
    /// Paint the current playfield and status.
    fn render(&mut self, game: &GameState) -> Result<()>;
}
