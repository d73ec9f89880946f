//! RNG module - injected uniform randomness
//!
//! The engine never touches a global random function; food placement draws
//! from a [`UniformSource`] handed in at construction time. That keeps games
//! replayable: swap in [`SimpleRng`] with a fixed seed (or [`SequenceSource`]
//! with scripted values) and every food spawn is deterministic.
//!
//! [`ThreadRngSource`] is the default used when the caller supplies nothing.

use std::fmt;

use rand::Rng;

/// A source of uniformly distributed values in `[0, 1)`.
///
/// The only randomness the engine consumes. One draw per axis per food
/// placement attempt.
pub trait UniformSource: fmt::Debug {
    /// Next value, uniform in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (usable as a seed to resume the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl UniformSource for SimpleRng {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (u32::MAX as f64 + 1.0)
    }
}

/// Platform entropy source backed by [`rand::rngs::ThreadRng`].
#[derive(Debug, Clone)]
pub struct ThreadRngSource {
    rng: rand::rngs::ThreadRng,
}

impl ThreadRngSource {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for ThreadRngSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a scripted list of values, then a constant fallback.
///
/// Lets tests steer food placement to exact cells without touching engine
/// internals.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    next: usize,
    fallback: f64,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>, fallback: f64) -> Self {
        Self {
            values,
            next: 0,
            fallback,
        }
    }
}

impl UniformSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values.get(self.next).copied().unwrap_or(self.fallback);
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_unit_values_stay_in_range() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_thread_source_stays_in_range() {
        let mut source = ThreadRngSource::new();
        for _ in 0..100 {
            let v = source.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_sequence_replays_then_falls_back() {
        let mut source = SequenceSource::new(vec![0.25, 0.75], 0.5);
        assert_eq!(source.next_unit(), 0.25);
        assert_eq!(source.next_unit(), 0.75);
        assert_eq!(source.next_unit(), 0.5);
        assert_eq!(source.next_unit(), 0.5);
    }
}
