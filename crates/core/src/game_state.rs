//! Game state module - manages the complete game state
//!
//! This module ties together the snake, the food, the direction queue, and
//! the game lifecycle. All mutation goes through the operations here; callers
//! drive one `step` per elapsed tick interval and read state back through the
//! accessors.

use arrayvec::ArrayVec;

use crate::rng::{SimpleRng, ThreadRngSource, UniformSource};
use crate::snapshot::GameSnapshot;
use crate::types::{
    Direction, GameStatus, GridPos, DEFAULT_GRID_SIZE, DEFAULT_SNAKE_LEN, DIRECTION_QUEUE_LIMIT,
    FOOD_NONE,
};

/// Configuration for a new game.
///
/// Every field has a sensible default: a 20x20 board, a 3-cell snake centered
/// on it heading right, and platform entropy for food placement.
#[derive(Debug)]
pub struct GameConfig {
    pub grid_size: i32,
    /// Initial snake body, head first. `None` = centered horizontal snake.
    pub start: Option<Vec<GridPos>>,
    pub direction: Direction,
    /// Food placement randomness. `None` = thread rng.
    pub rng: Option<Box<dyn UniformSource>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            start: None,
            direction: Direction::Right,
            rng: None,
        }
    }
}

/// Overrides for [`GameState::restart`]. Fields left `None` preserve the
/// live value (the usual case: keep the rng stream and the grown board).
#[derive(Debug, Default)]
pub struct RestartOptions {
    pub grid_size: Option<i32>,
    pub rng: Option<Box<dyn UniformSource>>,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    grid_size: i32,
    /// Body cells, head at index 0, tail last. Always at least one cell,
    /// never a duplicate cell.
    snake: Vec<GridPos>,
    /// Direction committed on the most recent tick.
    direction: Direction,
    /// Direction the next tick will commit (equals `direction` once the
    /// queue drains).
    pending_direction: Direction,
    /// Buffered direction changes, FIFO, applied one per tick.
    direction_queue: ArrayVec<Direction, DIRECTION_QUEUE_LIMIT>,
    /// Current food cell, or the `(-1, -1)` sentinel when the board is full.
    food: GridPos,
    score: u32,
    status: GameStatus,
    rng: Box<dyn UniformSource>,
}

impl GameState {
    /// Create a new game and place the initial food
    pub fn new(config: GameConfig) -> Self {
        let grid_size = config.grid_size;
        let snake = config
            .start
            .unwrap_or_else(|| default_start(grid_size, config.direction));
        let rng = config
            .rng
            .unwrap_or_else(|| Box::new(ThreadRngSource::new()));

        let mut state = Self {
            grid_size,
            snake,
            direction: config.direction,
            pending_direction: config.direction,
            direction_queue: ArrayVec::new(),
            food: FOOD_NONE,
            score: 0,
            status: GameStatus::Idle,
            rng,
        };
        state.food = state.spawn_food();
        state
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// Body cells, head first
    pub fn snake(&self) -> &[GridPos] {
        &self.snake
    }

    pub fn head(&self) -> GridPos {
        self.snake[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Buffered direction changes in application order
    pub fn direction_queue(&self) -> &[Direction] {
        &self.direction_queue
    }

    pub fn food(&self) -> GridPos {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Queue a direction change for an upcoming tick.
    ///
    /// Silently dropped when it would reverse 180 degrees against the last
    /// queued-or-pending direction, when it duplicates that direction, when
    /// the queue is full, or after game over.
    pub fn set_direction(&mut self, next: Direction) {
        if self.status == GameStatus::GameOver {
            return;
        }

        let last_intended = self
            .direction_queue
            .last()
            .copied()
            .unwrap_or(self.pending_direction);

        if next == last_intended || next == last_intended.opposite() {
            return;
        }
        if self.direction_queue.is_full() {
            return;
        }
        self.direction_queue.push(next);
    }

    /// Advance the game by one tick.
    ///
    /// No-op while paused or after game over. The first tick moves the game
    /// from idle to running.
    pub fn step(&mut self) {
        match self.status {
            GameStatus::Paused | GameStatus::GameOver => return,
            GameStatus::Idle => self.status = GameStatus::Running,
            GameStatus::Running => {}
        }

        if !self.direction_queue.is_empty() {
            self.pending_direction = self.direction_queue.remove(0);
        }
        self.direction = self.pending_direction;

        let next_head = self.head().moved_in(self.direction);
        let ate_food = next_head == self.food;

        // The tail vacates its cell this tick unless the snake grows, so it
        // only counts as body when food is being eaten.
        let body_len = if ate_food {
            self.snake.len()
        } else {
            self.snake.len() - 1
        };

        let hit_wall = next_head.x < 0
            || next_head.y < 0
            || next_head.x >= self.grid_size
            || next_head.y >= self.grid_size;

        if hit_wall || self.snake[..body_len].contains(&next_head) {
            self.status = GameStatus::GameOver;
            return;
        }

        self.snake.insert(0, next_head);
        if ate_food {
            self.score += 1;
            self.food = self.spawn_food();
        } else {
            self.snake.pop();
        }
    }

    /// Pick a food cell not occupied by the snake.
    ///
    /// Returns the `(-1, -1)` sentinel without drawing from the rng when the
    /// snake covers the whole board. Otherwise rejection-samples until a free
    /// cell comes up; the full-board guard is what bounds the loop.
    pub fn spawn_food(&mut self) -> GridPos {
        let total_cells = (self.grid_size * self.grid_size) as usize;
        if self.snake.len() >= total_cells {
            return FOOD_NONE;
        }

        loop {
            let x = (self.rng.next_unit() * self.grid_size as f64) as i32;
            let y = (self.rng.next_unit() * self.grid_size as f64) as i32;
            let candidate = GridPos::new(x, y);
            if !self.snake.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Toggle between running and paused; no effect from idle or game over
    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Running => self.status = GameStatus::Paused,
            GameStatus::Paused => self.status = GameStatus::Running,
            GameStatus::Idle | GameStatus::GameOver => {}
        }
    }

    /// Reinitialize in place.
    ///
    /// The rng stream and the current grid size carry over unless overridden,
    /// so a restarted game keeps its entropy and board growth by default.
    pub fn restart(&mut self, options: RestartOptions) {
        let rng = match options.rng {
            Some(rng) => rng,
            None => std::mem::replace(&mut self.rng, Box::new(SimpleRng::new(1))),
        };
        *self = Self::new(GameConfig {
            grid_size: options.grid_size.unwrap_or(self.grid_size),
            start: None,
            direction: Direction::Right,
            rng: Some(rng),
        });
    }

    /// Grow the board by `amount` cells per side, capped at `max_grid_size`.
    ///
    /// Every snake cell and the food (unless it is the sentinel) shift by
    /// half the applied growth on both axes, keeping them centered on the
    /// larger board. Returns `false` (and changes nothing) at the ceiling.
    pub fn expand_grid(&mut self, amount: i32, max_grid_size: i32) -> bool {
        if self.grid_size >= max_grid_size {
            return false;
        }

        let next_size = max_grid_size.min(self.grid_size + amount);
        let offset = (next_size - self.grid_size) / 2;
        self.grid_size = next_size;

        for part in &mut self.snake {
            part.x += offset;
            part.y += offset;
        }
        if self.food.x >= 0 && self.food.y >= 0 {
            self.food.x += offset;
            self.food.y += offset;
        }

        true
    }

    /// Capture a serializable snapshot for diagnostics
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Horizontal snake centered on the board, head first, trailing away from
/// the travel direction.
fn default_start(grid_size: i32, direction: Direction) -> Vec<GridPos> {
    let center = GridPos::new(grid_size / 2, grid_size / 2);
    let (dx, dy) = direction.delta();
    (0..DEFAULT_SNAKE_LEN as i32)
        .map(|i| GridPos::new(center.x - dx * i, center.y - dy * i))
        .collect()
}
