//! Seeded random input arrays
//!
//! Arrays are drawn from a ChaCha8 stream so that a seed printed in the logs
//! reproduces the exact same bars.

use super::element::Element;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Smallest generated value
pub const MIN_VALUE: u32 = 1;

/// Largest generated value
pub const MAX_VALUE: u32 = 100;

/// Produces random unlabeled arrays from a fixed seed
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    seed: u64,
    rng: ChaCha8Rng,
}

impl ArrayGenerator {
    pub fn new(seed: u64) -> Self {
        ArrayGenerator {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed drawn from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate `size` elements with values in `MIN_VALUE..=MAX_VALUE`
    pub fn generate(&mut self, size: usize) -> Vec<Element> {
        let elements: Vec<Element> = (0..size)
            .map(|origin| Element::new(self.rng.gen_range(MIN_VALUE..=MAX_VALUE), origin))
            .collect();
        tracing::debug!(seed = self.seed, size, "generated random array");
        elements
    }
}
