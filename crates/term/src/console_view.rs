//! ConsoleView: lays the game out as text.
//!
//! Pure (no I/O). The layout is the playfield inside a `-`/`|` frame with a
//! stats panel to the right of it:
//!
//! ```text
//! ----------
//! |   #    | Tiles:          1
//! |        | Rows:           0
//! |        | Score:          0
//! |        |
//! |        | Level:          0
//! |        |
//! |        |
//! |        |         Game Over
//! ----------
//! ```

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Columns used by the stats panel
pub const PANEL_WIDTH: u16 = 18;

/// Panel rows reserved even on short playfields
const PANEL_LINES: u16 = 8;

const OCCUPIED: char = '#';

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }

    /// Framebuffer size needed for a playfield of the given size
    pub fn size_for(grid_width: usize, grid_height: usize) -> (u16, u16) {
        let w = grid_width as u16 + 2 + PANEL_WIDTH;
        let h = (grid_height as u16).max(PANEL_LINES) + 2;
        (w, h)
    }

    /// Allocate a framebuffer sized for `game`
    pub fn framebuffer_for(game: &GameState) -> FrameBuffer {
        let field = game.playfield();
        let (w, h) = Self::size_for(field.width(), field.height());
        FrameBuffer::new(w, h)
    }

    /// Render `game` into `fb`, which must come from
    /// [`ConsoleView::framebuffer_for`] (or be at least that large).
    pub fn render_into(&self, game: &GameState, fb: &mut FrameBuffer) {
        fb.clear();

        let field = game.playfield();
        let grid_w = field.width() as u16;
        let grid_h = field.height() as u16;
        let border = CellStyle::default();

        // Top and bottom frame rows.
        for x in 0..grid_w + 2 {
            fb.set(x, 0, '-', border);
            fb.set(x, grid_h + 1, '-', border);
        }

        for (y, row) in field.rows().enumerate() {
            let fy = y as u16 + 1;
            fb.set(0, fy, '|', border);
            for (x, cell) in row.iter().enumerate() {
                if let Some(color) = cell {
                    fb.set(x as u16 + 1, fy, OCCUPIED, CellStyle::bold(Rgb::from(*color)));
                }
            }
            fb.set(grid_w + 1, fy, '|', border);
        }

        let px = grid_w + 2;
        let label = CellStyle::default();
        fb.put_str(px, 1, &format!(" Tiles: {:>10}", game.tiles()), label);
        fb.put_str(px, 2, &format!(" Rows:  {:>10}", game.rows()), label);
        fb.put_str(px, 3, &format!(" Score: {:>10}", game.score()), label);
        fb.put_str(px, 5, &format!(" Level: {:>10}", game.level()), label);
        if game.state().is_game_over() {
            let alert = CellStyle::bold(Rgb::new(255, 80, 80));
            fb.put_str(px, 8, &format!(" {:>17}", "Game Over"), alert);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState) -> FrameBuffer {
        let mut fb = Self::framebuffer_for(game);
        self.render_into(game, &mut fb);
        fb
    }
}
