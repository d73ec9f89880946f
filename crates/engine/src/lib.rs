//! Driver-side glue over the core engine.
//!
//! The core never reads progression; the driving loop is expected to ask
//! [`ProgressionConfig`] for its tick cadence and to grow the board when the
//! score earns it. These helpers are that wiring, kept out of the core so the
//! state machine stays free of policy.

use grid_snake_core::{GameState, ProgressionConfig};

/// Grow the board until it matches what the score has earned.
///
/// Applies one `size_level_grid_increase` expansion at a time, stopping at
/// the progression target or the configured ceiling. Returns `true` if any
/// expansion was applied (a driver would resize its viewport on `true`).
pub fn sync_grid_to_score(state: &mut GameState, cfg: &ProgressionConfig) -> bool {
    let mut expanded = false;
    while state.grid_size() < cfg.target_grid_size(state.score()) {
        if !state.expand_grid(cfg.size_level_grid_increase, cfg.max_grid_size) {
            break;
        }
        expanded = true;
    }
    expanded
}

/// One full driver tick: advance the game, then grow the board if the score
/// just earned it.
pub fn advance_tick(state: &mut GameState, cfg: &ProgressionConfig) {
    state.step();
    sync_grid_to_score(state, cfg);
}
