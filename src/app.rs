//! Frame loop: read a key, step the game, repaint on change, keep the pace.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::debug;

use crate::core::{GameState, Render};
use crate::input::{first_pressed, KeySource};
use crate::types::Key;

/// Outcome of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// ENTER was read; stop the loop
    Quit,
    /// The game stepped but nothing visible changed
    Idle,
    /// Renderers were run
    Rendered,
}

/// Fixed frame period bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    period: Duration,
}

impl FramePacer {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the frame after `elapsed`, or `None` if the frame is already over.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.period
            .checked_sub(elapsed)
            .filter(|left| !left.is_zero())
    }
}

pub struct App {
    game: GameState,
    sources: Vec<Box<dyn KeySource>>,
    renderers: Vec<Box<dyn Render>>,
    pacer: FramePacer,
}

impl App {
    pub fn new(game: GameState) -> Self {
        let pacer = FramePacer::new(game.config().tick_duration());
        Self {
            game,
            sources: Vec::new(),
            renderers: Vec::new(),
            pacer,
        }
    }

    /// Key sources are asked in the order they were added.
    pub fn add_source(&mut self, source: Box<dyn KeySource>) {
        self.sources.push(source);
    }

    pub fn add_renderer(&mut self, renderer: Box<dyn Render>) {
        self.renderers.push(renderer);
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn pacer(&self) -> FramePacer {
        self.pacer
    }

    /// First key any source reports this frame
    pub fn poll_key(&mut self) -> Key {
        first_pressed(&mut self.sources)
    }

    pub fn render_all(&mut self) -> Result<()> {
        for renderer in self.renderers.iter_mut() {
            renderer.render(&self.game).context("render failed")?;
        }
        Ok(())
    }

    /// Run the game logic for one frame with `key`.
    pub fn run_frame(&mut self, key: Key) -> Result<Frame> {
        if key == Key::Enter {
            debug!("quit requested");
            return Ok(Frame::Quit);
        }

        let changed = self.game.step(key);
        if changed {
            self.render_all()?;
        }
        self.game.advance_tick();

        Ok(if changed { Frame::Rendered } else { Frame::Idle })
    }

    /// Paint the initial state, then loop until ENTER.
    pub fn run(&mut self) -> Result<()> {
        self.render_all()?;
        loop {
            let start = Instant::now();
            let key = self.poll_key();
            if self.run_frame(key)? == Frame::Quit {
                return Ok(());
            }
            if let Some(left) = self.pacer.remaining(start.elapsed()) {
                thread::sleep(left);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    struct Scripted(VecDeque<Key>);

    impl KeySource for Scripted {
        fn read_key(&mut self) -> Key {
            self.0.pop_front().unwrap_or_default()
        }
    }

    struct Counting(Rc<RefCell<u32>>);

    impl Render for Counting {
        fn render(&mut self, _game: &GameState) -> Result<()> {
            *self.0.borrow_mut() += 1;
            Ok(())
        }
    }

    fn app_with_counter() -> (App, Rc<RefCell<u32>>) {
        let game = GameState::new(GameConfig::default()).unwrap();
        let mut app = App::new(game);
        let count = Rc::new(RefCell::new(0));
        app.add_renderer(Box::new(Counting(count.clone())));
        (app, count)
    }

    #[test]
    fn test_enter_quits_without_stepping() {
        let (mut app, count) = app_with_counter();
        assert_eq!(app.run_frame(Key::Enter).unwrap(), Frame::Quit);
        assert_eq!(*count.borrow(), 0);
        assert_eq!(app.game().tick(), 0);
    }

    #[test]
    fn test_key_starts_game_and_renders() {
        let (mut app, count) = app_with_counter();
        assert_eq!(app.run_frame(Key::Left).unwrap(), Frame::Rendered);
        assert!(app.game().is_active());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_idle_frames_skip_render() {
        let (mut app, count) = app_with_counter();
        assert_eq!(app.run_frame(Key::None).unwrap(), Frame::Idle);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_run_quits_on_enter() {
        let (mut app, count) = app_with_counter();
        app.add_source(Box::new(Scripted(VecDeque::from([
            Key::None,
            Key::Up,
            Key::Enter,
        ]))));
        app.run().unwrap();
        // Initial paint plus the frame that started the game.
        assert_eq!(*count.borrow(), 2);
        assert!(app.game().is_active());
    }

    #[test]
    fn test_pacer_remaining() {
        let pacer = FramePacer::new(Duration::from_millis(10));
        assert_eq!(
            pacer.remaining(Duration::from_millis(3)),
            Some(Duration::from_millis(7))
        );
        assert_eq!(pacer.remaining(Duration::from_millis(10)), None);
        assert_eq!(pacer.remaining(Duration::from_millis(25)), None);
    }
}
