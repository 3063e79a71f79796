//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame is drawn in full; after that only runs of changed cells
//! are rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::console_view::ConsoleView;
use crate::core::{GameState, Render};
use crate::fb::{CellStyle, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(4 * 1024),
            entered: false,
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Restore the terminal. Safe to call when `enter` was never called.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw `fb`, diffing against the previous frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.last.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        match self.last.as_mut() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                prev.clone_from(fb);
            }
            _ => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// Without a previous frame (or when the size changed) every row is written.
pub fn encode_frame_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style: Option<CellStyle> = None;
    for y in 0..next.height() {
        let mut x = 0;
        while x < next.width() {
            if prev.is_some_and(|p| p.get(x, y) == next.get(x, y)) {
                x += 1;
                continue;
            }

            out.queue(cursor::MoveTo(x, y))?;
            while x < next.width() && !prev.is_some_and(|p| p.get(x, y) == next.get(x, y)) {
                let cell = next.get(x, y).unwrap_or_default();
                if style != Some(cell.style) {
                    apply_style_into(out, cell.style)?;
                    style = Some(cell.style);
                }
                out.queue(Print(cell.ch))?;
                x += 1;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(Color::Rgb {
        r: style.fg.r,
        g: style.fg.g,
        b: style.fg.b,
    }))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

/// Console mirror: renders the game through [`ConsoleView`] into a terminal.
pub struct ConsoleRenderer {
    view: ConsoleView,
    fb: FrameBuffer,
    term: TerminalRenderer,
}

impl ConsoleRenderer {
    /// Take over the terminal (raw mode, alternate screen).
    pub fn enter(game: &GameState) -> Result<Self> {
        let mut term = TerminalRenderer::new();
        term.enter()?;
        Ok(Self {
            view: ConsoleView::new(),
            fb: ConsoleView::framebuffer_for(game),
            term,
        })
    }

    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }
}

impl Render for ConsoleRenderer {
    fn render(&mut self, game: &GameState) -> Result<()> {
        self.view.render_into(game, &mut self.fb);
        self.term.draw(&self.fb)
    }
}
