//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has no dependencies on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: an injected random source means the same seed
//!   produces identical games
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: the snake, the food, the direction queue, and every
//!   state-mutating operation
//! - [`progression`]: pure score → speed tier / board size tier math
//! - [`rng`]: the injected uniform source abstraction and its implementations
//! - [`snapshot`]: serializable state snapshots for diagnostics
//!
//! # Game Rules
//!
//! - The snake advances one cell per tick in its committed direction
//! - Direction changes are buffered (FIFO, bounded) and applied one per tick;
//!   180-degree reversals and duplicates are dropped
//! - Eating food grows the snake by one cell and scores one point
//! - Hitting a wall or the snake's own body ends the game; the cell the tail
//!   is vacating this tick does not count as body
//! - The board can grow over time; existing entities stay centered
//!
//! # Example
//!
//! ```
//! use grid_snake_core::{GameConfig, GameState, SimpleRng};
//!
//! let mut game = GameState::new(GameConfig {
//!     rng: Some(Box::new(SimpleRng::new(7))),
//!     ..GameConfig::default()
//! });
//!
//! game.step();
//! assert_eq!(game.status(), grid_snake_core::types::GameStatus::Running);
//! ```

pub mod game_state;
pub mod progression;
pub mod rng;
pub mod snapshot;

pub use grid_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameConfig, GameState, RestartOptions};
pub use progression::ProgressionConfig;
pub use rng::{SequenceSource, SimpleRng, ThreadRngSource, UniformSource};
pub use snapshot::{CellSnapshot, GameSnapshot};
