//! Deterministic random number generation.
//!
//! Wraps PCG (Permuted Congruential Generator) so that a given master seed
//! always produces the same array contents, across runs and platforms. This
//! keeps step sequences and metric totals reproducible in tests.

use rand::prelude::*;
use rand_pcg::Pcg64;

/// Deterministic, reproducible random number generator.
#[derive(Debug, Clone)]
pub struct VizRng {
    /// Master seed for reproducibility.
    master_seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl VizRng {
    /// Create a new RNG with the given master seed.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            rng: Pcg64::seed_from_u64(master_seed),
        }
    }

    /// Get the master seed.
    #[must_use]
    pub const fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Generate n random f64 samples in [0, 1).
    #[must_use]
    pub fn sample_n(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.gen_f64()).collect()
    }
}
