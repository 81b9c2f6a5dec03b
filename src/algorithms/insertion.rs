//! Insertion sort step emitter.
//!
//! Outer index `i` over `1..n`; `key = a[i]` is held aside while the scan
//! `j = i-1, i-2, ...` compares slots against it. A slot strictly greater
//! than the key is shifted right (one metered write per shift); the scan
//! stops at the first slot not greater, which keeps equal elements in their
//! original relative order. The final placement write of the key is always
//! metered, even when nothing shifted.

use std::cmp::Ordering;

use crate::algorithms::{Highlight, StepEmitter};
use crate::engine::ArrayState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Start of an outer iteration: capture `key = a[i]`.
    Begin,
    /// Compare `a[j]` against the key.
    Compare,
    /// Shift `a[j]` one slot right.
    Shift,
    /// Write the key into its final slot for this pass.
    Place,
}

/// Insertion sort as a poll-driven state machine.
#[derive(Debug, Clone)]
pub struct InsertionEmitter {
    i: usize,
    /// Scan index; goes negative when the key belongs at slot 0.
    j: isize,
    key: f64,
    phase: Phase,
    done: bool,
}

impl InsertionEmitter {
    /// Create an emitter positioned at the start of the first pass.
    #[must_use]
    pub fn new() -> Self {
        Self {
            i: 1,
            j: 0,
            key: 0.0,
            phase: Phase::Begin,
            done: false,
        }
    }
}

impl Default for InsertionEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl StepEmitter for InsertionEmitter {
    fn next_step(&mut self, array: &mut ArrayState) -> Option<Highlight> {
        loop {
            if self.done {
                return None;
            }
            let n = array.len();
            if n < 2 {
                self.done = true;
                return None;
            }

            match self.phase {
                Phase::Begin => {
                    // Capturing the key is an unmetered read; fall through to
                    // the first compare without emitting a step.
                    self.key = array.values()[self.i];
                    self.j = self.i as isize - 1;
                    self.phase = Phase::Compare;
                }
                Phase::Compare => {
                    let j = self.j as usize;
                    let greater = array.compare_key(j, self.key) == Ordering::Greater;
                    let highlight = Highlight::comparing(&[j, j + 1]);
                    self.phase = if greater { Phase::Shift } else { Phase::Place };
                    return Some(highlight);
                }
                Phase::Shift => {
                    let j = self.j as usize;
                    let shifted = array.values()[j];
                    array.write(j + 1, shifted);
                    let highlight = Highlight::swapping(&[j]);
                    self.j -= 1;
                    self.phase = if self.j >= 0 { Phase::Compare } else { Phase::Place };
                    return Some(highlight);
                }
                Phase::Place => {
                    let slot = (self.j + 1) as usize;
                    array.write(slot, self.key);
                    let highlight = Highlight::swapping(&[slot]);
                    self.i += 1;
                    if self.i >= n {
                        self.done = true;
                    } else {
                        self.phase = Phase::Begin;
                    }
                    return Some(highlight);
                }
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.done
    }

    fn cancel(&mut self, array: &mut ArrayState) {
        // Mid-pass the key exists only here; slot `j+1` holds a duplicate.
        if !self.done && self.phase != Phase::Begin {
            array.restore((self.j + 1) as usize, self.key);
        }
        self.done = true;
    }
}
