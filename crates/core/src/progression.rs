//! Progression module - score-driven speed and board-size tiers
//!
//! Pure functions of a score and a configuration record. The driving loop
//! asks [`ProgressionConfig::current_tick_ms`] how fast to tick and
//! [`ProgressionConfig::target_grid_size`] how large the board should be;
//! the engine itself never reads these.
//!
//! Both tiers are monotone in score: speed level and size level never
//! regress, the tick interval never grows.

use crate::types::{
    BASE_GRID_SIZE, BASE_TICK_MS, MAX_GRID_SIZE, MIN_TICK_MS, SIZE_LEVEL_GRID_INCREASE,
    SIZE_POINTS_PER_LEVEL, SPEED_LEVEL_TICK_DROP, SPEED_POINTS_PER_LEVEL,
};

/// Tuning knobs for score-driven progression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionConfig {
    /// Tick interval at speed level 1
    pub base_tick_ms: u32,
    /// Fastest allowed tick interval
    pub min_tick_ms: u32,
    /// Interval reduction per speed level
    pub speed_level_tick_drop: u32,
    /// Points needed per speed level
    pub speed_points_per_level: u32,
    /// Board dimension at size level 1
    pub base_grid_size: i32,
    /// Largest allowed board dimension
    pub max_grid_size: i32,
    /// Board growth per size level
    pub size_level_grid_increase: i32,
    /// Points needed per size level
    pub size_points_per_level: u32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            base_tick_ms: BASE_TICK_MS,
            min_tick_ms: MIN_TICK_MS,
            speed_level_tick_drop: SPEED_LEVEL_TICK_DROP,
            speed_points_per_level: SPEED_POINTS_PER_LEVEL,
            base_grid_size: BASE_GRID_SIZE,
            max_grid_size: MAX_GRID_SIZE,
            size_level_grid_increase: SIZE_LEVEL_GRID_INCREASE,
            size_points_per_level: SIZE_POINTS_PER_LEVEL,
        }
    }
}

impl ProgressionConfig {
    /// Highest reachable speed level (the one whose interval hits the floor)
    pub fn max_speed_level(&self) -> u32 {
        (self.base_tick_ms - self.min_tick_ms).div_ceil(self.speed_level_tick_drop) + 1
    }

    /// Speed level for a score, starting at 1, clamped to the maximum
    pub fn speed_level(&self, score: u32) -> u32 {
        (score / self.speed_points_per_level + 1).min(self.max_speed_level())
    }

    /// Tick interval for a speed level, clamped to the minimum
    pub fn tick_ms_for_level(&self, speed_level: u32) -> u32 {
        self.base_tick_ms
            .saturating_sub(speed_level.saturating_sub(1).saturating_mul(self.speed_level_tick_drop))
            .max(self.min_tick_ms)
    }

    /// Tick interval for a score
    pub fn current_tick_ms(&self, score: u32) -> u32 {
        self.tick_ms_for_level(self.speed_level(score))
    }

    /// Highest reachable size level (the one whose target hits the ceiling)
    pub fn max_size_level(&self) -> u32 {
        ((self.max_grid_size - self.base_grid_size) / self.size_level_grid_increase) as u32 + 1
    }

    /// Size level for a score, starting at 1, clamped to the maximum
    pub fn size_level(&self, score: u32) -> u32 {
        (score / self.size_points_per_level + 1).min(self.max_size_level())
    }

    /// Board dimension the score has earned
    pub fn target_grid_size(&self, score: u32) -> i32 {
        self.base_grid_size + (self.size_level(score) - 1) as i32 * self.size_level_grid_increase
    }
}
