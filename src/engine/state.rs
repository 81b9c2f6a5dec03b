//! Array state and metered operations.
//!
//! Owns the sequence being sorted plus the two run counters. Every comparison
//! and every value mutation performed by an algorithm MUST go through the
//! metered operations here; that is what makes the emitted counts comparable
//! across algorithms.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::engine::VizRng;

/// The mutable sequence being sorted, plus comparison and write counters.
///
/// Counters are monotonically non-decreasing during a run and reset to zero
/// when a new run starts or a new array is generated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArrayState {
    values: Vec<f64>,
    comparisons: u64,
    writes: u64,
}

impl ArrayState {
    /// Create state from explicit values (tests and headless drivers).
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            values,
            comparisons: 0,
            writes: 0,
        }
    }

    /// Replace the sequence with `size` uniform-random values in [0, 1)
    /// and reset both counters.
    pub fn generate(&mut self, size: usize, rng: &mut VizRng) {
        self.values = rng.sample_n(size);
        self.reset_counters();
    }

    /// Reset both counters to zero.
    pub fn reset_counters(&mut self) {
        self.comparisons = 0;
        self.writes = 0;
    }

    /// Current values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total comparisons performed since the last reset.
    #[must_use]
    pub const fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Total writes performed since the last reset.
    #[must_use]
    pub const fn writes(&self) -> u64 {
        self.writes
    }

    /// Metered comparison of `a[i]` against `a[j]`.
    ///
    /// Increments the comparison counter by one and returns the ordering of
    /// the two slots. Has no effect on the sequence itself.
    pub fn compare(&mut self, i: usize, j: usize) -> Ordering {
        let (x, y) = (self.values[i], self.values[j]);
        self.compare_keys(x, y)
    }

    /// Metered comparison of `a[i]` against an out-of-array key.
    ///
    /// Insertion sort compares slots against a saved key rather than another
    /// slot; the operation is still a single metered comparison.
    pub fn compare_key(&mut self, i: usize, key: f64) -> Ordering {
        let x = self.values[i];
        self.compare_keys(x, key)
    }

    /// Metered comparison of two values (merge sort compares buffer heads,
    /// not array slots).
    pub fn compare_keys(&mut self, x: f64, y: f64) -> Ordering {
        self.comparisons += 1;
        x.total_cmp(&y)
    }

    /// Metered write: sets `a[i] = value`, one write.
    pub fn write(&mut self, i: usize, value: f64) {
        self.values[i] = value;
        self.writes += 1;
    }

    /// Unmetered write: restores a value a cancelled emitter held outside
    /// the array. Not part of any algorithm's work, so no write is counted.
    pub fn restore(&mut self, i: usize, value: f64) {
        self.values[i] = value;
    }

    /// Metered swap: two writes, or a no-op (zero writes) when `i == j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.values.swap(i, j);
        self.writes += 2;
    }

    /// Whether the sequence is in non-descending order (unmetered; used by
    /// callers and tests, never by the algorithms themselves).
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}
