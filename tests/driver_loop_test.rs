//! Driver-loop integration: step + progression-driven board growth

use std::collections::HashSet;

use grid_snake::core::{GameConfig, GameState, ProgressionConfig, SequenceSource, SimpleRng};
use grid_snake::engine::{advance_tick, sync_grid_to_score};
use grid_snake::types::{Direction, GameStatus, GridPos};

#[test]
fn test_scripted_run_eats_and_expands_board() {
    // Food scripted in front of the snake twice; two points earn one size
    // level under this config.
    let mut state = GameState::new(GameConfig {
        grid_size: 10,
        start: Some(vec![
            GridPos::new(2, 2),
            GridPos::new(1, 2),
            GridPos::new(0, 2),
        ]),
        rng: Some(Box::new(SequenceSource::new(
            vec![0.3, 0.2, 0.4, 0.2, 0.9, 0.9],
            0.9,
        ))),
        ..GameConfig::default()
    });
    let cfg = ProgressionConfig {
        base_grid_size: 10,
        size_points_per_level: 2,
        ..ProgressionConfig::default()
    };

    advance_tick(&mut state, &cfg);
    assert_eq!(state.score(), 1);
    assert_eq!(state.grid_size(), 10);

    advance_tick(&mut state, &cfg);
    assert_eq!(state.score(), 2);
    assert_eq!(state.grid_size(), 12);
    assert_eq!(state.snake().len(), 5);
    assert_eq!(state.head(), GridPos::new(5, 3));
    assert_eq!(state.food(), GridPos::new(10, 10));

    // Two points are not enough to change tick cadence.
    assert_eq!(cfg.current_tick_ms(state.score()), 220);
}

#[test]
fn test_sync_alone_reaches_progression_target() {
    let mut state = GameState::new(GameConfig {
        rng: Some(Box::new(SimpleRng::new(5))),
        ..GameConfig::default()
    });
    let cfg = ProgressionConfig {
        base_grid_size: 26,
        ..ProgressionConfig::default()
    };

    assert!(sync_grid_to_score(&mut state, &cfg));
    assert_eq!(state.grid_size(), cfg.target_grid_size(state.score()));
}

/// Greedy chase toward the food, x axis first.
fn toward_food(state: &GameState) -> Option<Direction> {
    let head = state.head();
    let food = state.food();
    if food.x < 0 {
        return None;
    }
    if food.x != head.x {
        Some(if food.x > head.x {
            Direction::Right
        } else {
            Direction::Left
        })
    } else if food.y != head.y {
        Some(if food.y > head.y {
            Direction::Down
        } else {
            Direction::Up
        })
    } else {
        None
    }
}

fn assert_invariants(state: &GameState, cfg: &ProgressionConfig) {
    let cells: HashSet<GridPos> = state.snake().iter().copied().collect();
    assert_eq!(
        cells.len(),
        state.snake().len(),
        "snake cells must stay distinct"
    );

    for part in state.snake() {
        assert!(part.x >= 0 && part.x < state.grid_size());
        assert!(part.y >= 0 && part.y < state.grid_size());
    }

    let food = state.food();
    if food.x >= 0 {
        assert!(food.x < state.grid_size() && food.y >= 0 && food.y < state.grid_size());
        assert!(!state.snake().contains(&food), "food must not sit on the snake");
    }

    assert!(state.direction_queue().len() <= 2);
    assert_eq!(state.score() as usize, state.snake().len() - 3);
    assert_eq!(state.grid_size(), cfg.target_grid_size(state.score()));
}

#[test]
fn test_greedy_chase_soak_holds_invariants() {
    let mut state = GameState::new(GameConfig {
        rng: Some(Box::new(SimpleRng::new(42))),
        ..GameConfig::default()
    });
    let cfg = ProgressionConfig {
        size_points_per_level: 2,
        ..ProgressionConfig::default()
    };

    for _ in 0..500 {
        if state.status() == GameStatus::GameOver {
            break;
        }
        if let Some(direction) = toward_food(&state) {
            state.set_direction(direction);
        }
        advance_tick(&mut state, &cfg);
        assert_invariants(&state, &cfg);
    }

    assert_ne!(state.status(), GameStatus::Idle);
}
