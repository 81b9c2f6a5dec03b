//! Selection sort step emitter.
//!
//! Outer position `i` over `0..=n-2`; the inner scan `j` over `i+1..n`
//! locates the minimum of the unsorted suffix, one compare step per index.
//! The closing swap step is emitted whether or not values actually moved,
//! matching the rendered behavior of the reference visualizer.

use std::cmp::Ordering;

use crate::algorithms::{Highlight, StepEmitter};
use crate::engine::ArrayState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Compare `a[j]` against the current minimum.
    Compare,
    /// Swap the found minimum into position `i`.
    Swap,
}

/// Selection sort as a poll-driven state machine.
#[derive(Debug, Clone)]
pub struct SelectionEmitter {
    i: usize,
    j: usize,
    min_index: usize,
    phase: Phase,
    done: bool,
}

impl SelectionEmitter {
    /// Create an emitter positioned at the start of the first scan.
    #[must_use]
    pub fn new() -> Self {
        Self {
            i: 0,
            j: 1,
            min_index: 0,
            phase: Phase::Compare,
            done: false,
        }
    }
}

impl Default for SelectionEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl StepEmitter for SelectionEmitter {
    fn next_step(&mut self, array: &mut ArrayState) -> Option<Highlight> {
        if self.done {
            return None;
        }
        let n = array.len();
        if n < 2 {
            self.done = true;
            return None;
        }

        match self.phase {
            Phase::Compare => {
                // Highlight uses the minimum as it stood before this compare.
                let highlight = Highlight::comparing(&[self.min_index, self.j]);
                if array.compare(self.j, self.min_index) == Ordering::Less {
                    self.min_index = self.j;
                }
                self.j += 1;
                if self.j == n {
                    self.phase = Phase::Swap;
                }
                Some(highlight)
            }
            Phase::Swap => {
                array.swap(self.i, self.min_index);
                let highlight = Highlight::swapping(&[self.i, self.min_index]);
                self.i += 1;
                if self.i >= n - 1 {
                    self.done = true;
                } else {
                    self.min_index = self.i;
                    self.j = self.i + 1;
                    self.phase = Phase::Compare;
                }
                Some(highlight)
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.done
    }
}
