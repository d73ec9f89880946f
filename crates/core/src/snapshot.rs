//! Snapshot module - serializable state for diagnostics
//!
//! A [`GameSnapshot`] is a plain-data copy of everything an external observer
//! needs: status, score, direction, the snake, the food, and the board size,
//! plus a fixed note pinning down the coordinate convention. Serializes to
//! the same camelCase JSON shape the game has always reported.

use serde::Serialize;

use crate::game_state::GameState;
use crate::types::GridPos;

/// Coordinate convention reported in every snapshot
pub const COORDINATE_CONVENTION: &str =
    "origin at top-left; x increases right, y increases down";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellSnapshot {
    pub x: i32,
    pub y: i32,
}

impl From<GridPos> for CellSnapshot {
    fn from(value: GridPos) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub coordinates: &'static str,
    pub status: &'static str,
    pub score: u32,
    pub direction: &'static str,
    pub snake: Vec<CellSnapshot>,
    pub food: CellSnapshot,
    pub grid_size: i32,
}

impl GameSnapshot {
    /// Copy the observable state out of a game
    pub fn capture(state: &GameState) -> Self {
        Self {
            coordinates: COORDINATE_CONVENTION,
            status: state.status().as_str(),
            score: state.score(),
            direction: state.direction().as_str(),
            snake: state.snake().iter().copied().map(CellSnapshot::from).collect(),
            food: state.food().into(),
            grid_size: state.grid_size(),
        }
    }

    /// Encode as a single JSON line
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
