//! Headless snake runner (default binary).
//!
//! A line-oriented diagnostics harness around the engine: feed it direction
//! tokens and virtual time on stdin, read JSON state lines back. This is the
//! same automation surface the game has always exposed for end-to-end
//! drivers, with the rendering loop left to the caller.
//!
//! Commands: `up` `down` `left` `right` `pause` `restart` `advance <ms>`
//! `state` `quit`. Unrecognized input is ignored, the same way the engine
//! ignores unknown direction tokens.
//!
//! Environment: `SNAKE_SEED` (deterministic food placement), `SNAKE_GRID`
//! (starting board size).

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Result;

use grid_snake::core::{GameConfig, GameState, ProgressionConfig, RestartOptions, SimpleRng};
use grid_snake::engine::advance_tick;
use grid_snake::types::Direction;

fn main() -> Result<()> {
    let mut state = GameState::new(config_from_env());
    let progression = ProgressionConfig::default();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut accumulator: u64 = 0;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else { continue };

        match command {
            "quit" | "exit" => break,
            "state" => {
                let json = state.snapshot().to_json()?;
                writeln!(stdout, "{json}")?;
                stdout.flush()?;
            }
            "pause" => state.toggle_pause(),
            "restart" => {
                state.restart(RestartOptions::default());
                accumulator = 0;
            }
            "advance" => {
                if let Some(ms) = words.next().and_then(|w| w.parse::<u64>().ok()) {
                    advance(&mut state, &progression, &mut accumulator, ms);
                }
            }
            token => {
                if let Some(direction) = Direction::from_str(token) {
                    state.set_direction(direction);
                }
            }
        }
    }

    Ok(())
}

/// Fixed-interval catch-up over virtual time. The interval is re-read every
/// iteration so a score gained mid-burst speeds up the remaining ticks.
fn advance(state: &mut GameState, cfg: &ProgressionConfig, accumulator: &mut u64, ms: u64) {
    *accumulator += ms;
    loop {
        let tick_ms = u64::from(cfg.current_tick_ms(state.score()));
        if *accumulator < tick_ms {
            break;
        }
        advance_tick(state, cfg);
        *accumulator -= tick_ms;
    }
}

fn config_from_env() -> GameConfig {
    let mut config = GameConfig::default();
    if let Some(grid) = env::var("SNAKE_GRID").ok().and_then(|v| v.parse().ok()) {
        config.grid_size = grid;
    }
    if let Some(seed) = env::var("SNAKE_SEED").ok().and_then(|v| v.parse().ok()) {
        config.rng = Some(Box::new(SimpleRng::new(seed)));
    }
    config
}
