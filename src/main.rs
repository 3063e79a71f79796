//! Sense HAT falling-block game (default binary).
//!
//! Plays on the LED matrix with the joystick and mirrors the game to the
//! terminal. `STETRIS_NO_MATRIX` / `STETRIS_NO_CONSOLE` switch either side off.

use anyhow::{bail, Context, Result};
use log::info;

use stetris::app::App;
use stetris::config::AppConfig;
use stetris::core::GameState;
use stetris::input::Keyboard;
use stetris::sensehat::{Joystick, LedMatrix};
use stetris::term::ConsoleRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    if !config.matrix && !config.console {
        bail!("nothing to play on: both the LED matrix and the console are disabled");
    }

    let game = GameState::new(config.game.clone())?;
    let mut app = App::new(game);

    if config.matrix {
        let matrix = LedMatrix::open(&config.fb_name)
            .with_context(|| format!("cannot open framebuffer '{}'", config.fb_name))?;
        let joystick = Joystick::open(&config.joystick_name)
            .with_context(|| format!("cannot open joystick '{}'", config.joystick_name))?;
        app.add_source(Box::new(joystick));
        app.add_renderer(Box::new(matrix));
    }

    // The keyboard needs raw mode, which the console renderer owns.
    if config.console {
        let console = ConsoleRenderer::enter(app.game())?;
        app.add_source(Box::new(Keyboard::new()));
        app.add_renderer(Box::new(console));
    }

    info!(
        "starting: {}x{} grid, {} us per frame, seed {}",
        config.game.grid_width, config.game.grid_height, config.game.tick_us, config.game.seed
    );

    // Dropping the app blanks the matrix and restores the terminal.
    app.run()
}
