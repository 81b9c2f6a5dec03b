//! Bubble sort step emitter.
//!
//! Outer pass `i` over `0..=n-2`, inner index `j` over `0..=n-2-i`. Each
//! inner iteration is one compare step, followed by one swap step when the
//! pair is out of order. After each pass the tail `[n-1-i, n-1]` is emitted
//! as sorted; the outer loop exits early after a swap-free pass.

use std::cmp::Ordering;

use crate::algorithms::{Highlight, StepEmitter};
use crate::engine::ArrayState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Compare `a[j]` with `a[j+1]`.
    Compare,
    /// Swap the pair just found out of order.
    Swap,
    /// Emit the sorted tail for the finished pass.
    PassEnd,
}

/// Bubble sort as a poll-driven state machine.
#[derive(Debug, Clone)]
pub struct BubbleEmitter {
    i: usize,
    j: usize,
    swapped: bool,
    phase: Phase,
    done: bool,
}

impl BubbleEmitter {
    /// Create an emitter positioned at the start of the first pass.
    #[must_use]
    pub fn new() -> Self {
        Self {
            i: 0,
            j: 0,
            swapped: false,
            phase: Phase::Compare,
            done: false,
        }
    }

    /// Move to the next inner index, or to the pass end when the inner
    /// range is exhausted.
    fn advance_inner(&mut self, n: usize) {
        if self.j == n - 2 - self.i {
            self.phase = Phase::PassEnd;
        } else {
            self.j += 1;
            self.phase = Phase::Compare;
        }
    }
}

impl Default for BubbleEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl StepEmitter for BubbleEmitter {
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
                let out_of_order = array.compare(self.j, self.j + 1) == Ordering::Greater;
                let highlight = Highlight::comparing(&[self.j, self.j + 1]);
                if out_of_order {
                    self.phase = Phase::Swap;
                } else {
                    self.advance_inner(n);
                }
                Some(highlight)
            }
            Phase::Swap => {
                array.swap(self.j, self.j + 1);
                self.swapped = true;
                let highlight = Highlight::swapping(&[self.j, self.j + 1]);
                self.advance_inner(n);
                Some(highlight)
            }
            Phase::PassEnd => {
                let highlight = Highlight::sorted_range(n - 1 - self.i..n);
                if !self.swapped || self.i >= n - 2 {
                    self.done = true;
                } else {
                    self.i += 1;
                    self.j = 0;
                    self.swapped = false;
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
