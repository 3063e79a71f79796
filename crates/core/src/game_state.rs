//! Game state module - the per-frame state machine
//!
//! Ties the playfield, the tick clock and the color picker together. The
//! caller feeds one key per frame into [`GameState::step`]; whenever the clock
//! has wrapped the same call also runs one game step (row clear, gravity,
//! spawn).

use log::debug;

use crate::clock::TickClock;
use crate::config::{ConfigError, GameConfig};
use crate::playfield::Playfield;
use crate::rng::ColorPicker;
use crate::types::{Coord, Key, StateFlags};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    playfield: Playfield,
    clock: TickClock,
    colors: ColorPicker,
    state: StateFlags,
    /// Cell of the falling tile; only meaningful while ACTIVE.
    active_tile: Coord,
    tiles: u32,
    rows: u32,
    score: u32,
    level: u32,
}

impl GameState {
    /// Create the game in GAME_OVER with an empty playfield.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut game = Self {
            playfield: Playfield::new(config.grid_width, config.grid_height),
            clock: TickClock::new(config.init_next_game_tick),
            colors: ColorPicker::new(config.block_colors, config.seed),
            state: StateFlags::GAME_OVER,
            active_tile: Coord::default(),
            tiles: 0,
            rows: 0,
            score: 0,
            level: 0,
            config,
        };
        game.game_over();
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Direct playfield access for scenario setup; bypasses the game rules.
    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    pub fn state(&self) -> StateFlags {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// The falling tile, if a game is running
    pub fn active_tile(&self) -> Option<Coord> {
        self.is_active().then_some(self.active_tile)
    }

    pub fn tiles(&self) -> u32 {
        self.tiles
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn tick(&self) -> u32 {
        self.clock.tick()
    }

    pub fn next_game_tick(&self) -> u32 {
        self.clock.next_game_tick()
    }

    /// Spawn coordinate: top row, middle column (left of center on even widths)
    pub fn spawn_coord(&self) -> Coord {
        Coord::new((self.playfield.width() - 1) / 2, 0)
    }

    /// Count one frame. Call once per frame after [`GameState::step`].
    pub fn advance_tick(&mut self) {
        self.clock.advance();
    }

    /// Run one frame of game logic for `key`.
    ///
    /// Returns whether the playfield (or the status shown next to it)
    /// changed, i.e. whether the renderers need to run.
    pub fn step(&mut self, key: Key) -> bool {
        let mut changed = false;

        if self.state.is_active() {
            match key {
                Key::None => {}
                Key::Left => {
                    self.move_left();
                    changed = true;
                }
                Key::Right => {
                    self.move_right();
                    changed = true;
                }
                Key::Down => {
                    self.hard_drop();
                    changed = true;
                }
                // UP and ENTER have no meaning during play.
                Key::Up | Key::Enter => {}
            }

            if self.clock.is_step_due() {
                self.game_step();
                changed = true;
            }
        }

        // Any key starts a new game. This also fires in the frame the game
        // was lost if a key was pressed in it.
        if self.state.is_game_over() && !key.is_none() {
            self.new_game();
            changed = true;
        }

        changed
    }

    fn game_step(&mut self) {
        self.state.remove(StateFlags::ROW_CLEAR | StateFlags::TILE_ADDED);

        if self.clear_row() {
            self.state.insert(StateFlags::ROW_CLEAR);
            self.rows += 1;
            self.score += self.level + 1;
            if self.rows % self.config.rows_per_level == 0 {
                self.advance_level();
            }
        }

        if !self.playfield.is_occupied(self.active_tile) || !self.move_down() {
            if self.add_new_tile() {
                self.state.insert(StateFlags::TILE_ADDED);
                self.tiles += 1;
            } else {
                self.game_over();
            }
        }
    }

    /// Spawn a tile at the spawn coordinate; false if the cell is taken.
    pub fn add_new_tile(&mut self) -> bool {
        self.active_tile = self.spawn_coord();
        if self.playfield.is_occupied(self.active_tile) {
            return false;
        }
        let color = self.colors.next_color();
        self.playfield.set_occupied(self.active_tile, color);
        true
    }

    fn slide_to(&mut self, target: Coord) {
        self.playfield.copy_cell(target, self.active_tile);
        self.playfield.clear_cell(self.active_tile);
        self.active_tile = target;
    }

    pub fn move_left(&mut self) -> bool {
        let Coord { x, y } = self.active_tile;
        if x == 0 {
            return false;
        }
        let target = Coord::new(x - 1, y);
        if self.playfield.is_occupied(target) {
            return false;
        }
        self.slide_to(target);
        true
    }

    pub fn move_right(&mut self) -> bool {
        let Coord { x, y } = self.active_tile;
        if x + 1 >= self.playfield.width() {
            return false;
        }
        let target = Coord::new(x + 1, y);
        if self.playfield.is_occupied(target) {
            return false;
        }
        self.slide_to(target);
        true
    }

    pub fn move_down(&mut self) -> bool {
        let Coord { x, y } = self.active_tile;
        if y + 1 >= self.playfield.height() {
            return false;
        }
        let target = Coord::new(x, y + 1);
        if self.playfield.is_occupied(target) {
            return false;
        }
        self.slide_to(target);
        true
    }

    /// Drop the tile as far as it goes and make this frame a game step.
    ///
    /// Returns the number of rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.move_down() {
            distance += 1;
        }
        self.clock.force_step();
        distance
    }

    /// Clear the bottom row if it is full. Rows above are never inspected.
    pub fn clear_row(&mut self) -> bool {
        let bottom = self.playfield.height() - 1;
        if !self.playfield.is_row_full(bottom) {
            return false;
        }
        self.playfield.shift_down();
        true
    }

    fn advance_level(&mut self) {
        self.level += 1;
        self.clock.speed_up();
        debug!(
            "level {} reached, game step every {} ticks",
            self.level,
            self.clock.next_game_tick()
        );
    }

    /// Reset counters and the playfield and spawn the first tile.
    pub fn new_game(&mut self) {
        self.state = StateFlags::ACTIVE;
        self.tiles = 0;
        self.rows = 0;
        self.score = 0;
        self.level = 0;
        self.clock.reset_tick();
        self.playfield.reset();

        // The playfield is empty, so the first spawn cannot fail.
        self.add_new_tile();
        self.state.insert(StateFlags::TILE_ADDED);
        self.tiles += 1;
        debug!("new game started");
    }

    fn game_over(&mut self) {
        if self.tiles > 0 {
            debug!(
                "game over: score {} rows {} tiles {} level {}",
                self.score, self.rows, self.tiles, self.level
            );
        }
        self.state = StateFlags::GAME_OVER;
        self.clock.reset_speed();
    }
}
