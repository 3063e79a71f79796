//! Construction-time game constants.
//!
//! None of these change while the game runs; a new `GameState` is needed to
//! play with different values.

use thiserror::Error;

use crate::types::{
    Color, GRID_HEIGHT, GRID_WIDTH, INIT_NEXT_GAME_TICK, ROWS_PER_LEVEL, TICK_US,
};

/// How spawned blocks are colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockColors {
    /// Pick from the 6-entry block palette per spawn
    Random,
    /// Every block gets the same color
    Fixed(Color),
}

impl BlockColors {
    /// Parse `random` or a color name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("random") {
            return Some(BlockColors::Random);
        }
        Color::from_str(s).map(BlockColors::Fixed)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must be at least 2x2, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },
    #[error("tick time must be greater than zero")]
    ZeroTickTime,
    #[error("rows per level must be greater than zero")]
    ZeroRowsPerLevel,
    #[error("initial game tick threshold must be greater than zero")]
    ZeroInitialTicks,
    #[error("unknown block color '{0}'")]
    UnknownColor(String),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Frame period in microseconds
    pub tick_us: u64,
    pub rows_per_level: u32,
    pub init_next_game_tick: u32,
    pub block_colors: BlockColors,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            tick_us: TICK_US,
            rows_per_level: ROWS_PER_LEVEL,
            init_next_game_tick: INIT_NEXT_GAME_TICK,
            block_colors: BlockColors::Random,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < 2 || self.grid_height < 2 {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.tick_us == 0 {
            return Err(ConfigError::ZeroTickTime);
        }
        if self.rows_per_level == 0 {
            return Err(ConfigError::ZeroRowsPerLevel);
        }
        if self.init_next_game_tick == 0 {
            return Err(ConfigError::ZeroInitialTicks);
        }
        Ok(())
    }

    /// Frame period as a `Duration`
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_micros(self.tick_us)
    }
}
