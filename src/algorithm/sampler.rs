//! Seeded random draws behind spanning tree construction
//!
//! All stochastic choices flow through a single selector so a fixed seed
//! reproduces the full generation sequence.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{GenerationError, Result};
use crate::spatial::direction::Direction;

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Draw a uniform index below `length`
    ///
    /// # Errors
    ///
    /// Returns an error when `length` is zero and no index can exist.
    pub fn pick_index(&mut self, length: usize, operation: &'static str) -> Result<usize> {
        if length == 0 {
            return Err(GenerationError::ExhaustedRandomSource { operation });
        }
        Ok(self.rng.random_range(0..length))
    }

    /// Draw a uniform cardinal direction
    pub fn direction(&mut self) -> Direction {
        let index = self.rng.random_range(0..Direction::ALL.len());
        Direction::from_index(index).unwrap_or(Direction::East)
    }
}
