//! Runtime configuration for the `stetris` binary.

use std::env;

use crate::core::{BlockColors, ConfigError, GameConfig};
use crate::sensehat::{FB_NAME, JOYSTICK_NAME};

/// Everything the binary needs before the first frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    pub fb_name: String,
    pub joystick_name: String,
    /// Drive the Sense HAT LED matrix and joystick
    pub matrix: bool,
    /// Mirror the game to the terminal and read the keyboard
    pub console: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            fb_name: FB_NAME.to_string(),
            joystick_name: JOYSTICK_NAME.to_string(),
            matrix: true,
            console: true,
        }
    }
}

impl AppConfig {
    /// Create from `STETRIS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`AppConfig::from_env`], reading variables through `lookup`.
    ///
    /// Numbers that fail to parse fall back to their defaults. Without
    /// `STETRIS_SEED` the color RNG is seeded randomly.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = GameConfig::default();
        let var = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let tick_us = var("STETRIS_TICK_US")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.tick_us);
        let rows_per_level = var("STETRIS_ROWS_PER_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.rows_per_level);
        let init_next_game_tick = var("STETRIS_INIT_TICKS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.init_next_game_tick);

        let block_colors = match var("STETRIS_BLOCK_COLOR") {
            Some(name) => {
                BlockColors::from_str(&name).ok_or(ConfigError::UnknownColor(name))?
            }
            None => defaults.block_colors,
        };

        let seed = var("STETRIS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);

        let game = GameConfig {
            tick_us,
            rows_per_level,
            init_next_game_tick,
            block_colors,
            seed,
            ..defaults
        };
        game.validate()?;

        Ok(Self {
            game,
            fb_name: var("STETRIS_FB_NAME").unwrap_or_else(|| FB_NAME.to_string()),
            joystick_name: var("STETRIS_JOYSTICK_NAME")
                .unwrap_or_else(|| JOYSTICK_NAME.to_string()),
            matrix: !var("STETRIS_NO_MATRIX").is_some_and(|s| is_truthy(&s)),
            console: !var("STETRIS_NO_CONSOLE").is_some_and(|s| is_truthy(&s)),
        })
    }
}

fn is_truthy(s: &str) -> bool {
    s == "1" || s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let cfg = from_vars(&[]).unwrap();
        assert_eq!(cfg.game.tick_us, 10_000);
        assert_eq!(cfg.game.rows_per_level, 2);
        assert_eq!(cfg.game.init_next_game_tick, 50);
        assert_eq!(cfg.game.block_colors, BlockColors::Random);
        assert_eq!(cfg.fb_name, "RPi-Sense FB");
        assert_eq!(cfg.joystick_name, "Raspberry Pi Sense HAT Joystick");
        assert!(cfg.matrix);
        assert!(cfg.console);
    }

    #[test]
    fn test_overrides() {
        let cfg = from_vars(&[
            ("STETRIS_TICK_US", "20000"),
            ("STETRIS_ROWS_PER_LEVEL", "3"),
            ("STETRIS_INIT_TICKS", " 25 "),
            ("STETRIS_BLOCK_COLOR", "Red"),
            ("STETRIS_SEED", "42"),
            ("STETRIS_NO_MATRIX", "true"),
        ])
        .unwrap();
        assert_eq!(cfg.game.tick_us, 20_000);
        assert_eq!(cfg.game.rows_per_level, 3);
        assert_eq!(cfg.game.init_next_game_tick, 25);
        assert_eq!(cfg.game.block_colors, BlockColors::Fixed(Color::Red));
        assert_eq!(cfg.game.seed, 42);
        assert!(!cfg.matrix);
        assert!(cfg.console);
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let cfg = from_vars(&[("STETRIS_TICK_US", "fast"), ("STETRIS_NO_CONSOLE", "0")]).unwrap();
        assert_eq!(cfg.game.tick_us, 10_000);
        assert!(cfg.console);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert_eq!(
            from_vars(&[("STETRIS_BLOCK_COLOR", "plaid")]),
            Err(ConfigError::UnknownColor("plaid".to_string()))
        );
        assert_eq!(
            from_vars(&[("STETRIS_ROWS_PER_LEVEL", "0")]),
            Err(ConfigError::ZeroRowsPerLevel)
        );
    }
}
