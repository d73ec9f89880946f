//! Grid snake (workspace facade crate).
//!
//! This package keeps the `grid_snake::{core,engine,types}` public API in one
//! place while the implementation lives in dedicated crates under `crates/`.

pub use grid_snake_core as core;
pub use grid_snake_engine as engine;
pub use grid_snake_types as types;
