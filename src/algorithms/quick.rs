//! Quick sort step emitter.
//!
//! Lomuto partitioning with the last element of the range as pivot. The
//! recursion is flattened into an explicit work stack (left range pushed so
//! it pops first), giving depth-first order with suspension possible at
//! every metered operation.
//!
//! Each scan index `j` costs one compare step against the pivot slot; an
//! element below the pivot costs an additional swap step into the boundary
//! `i`. The closing swap of pivot and boundary is always emitted, even when
//! the two indices coincide (the swap itself is then a zero-write no-op).

use std::cmp::Ordering;

use crate::algorithms::{Highlight, StepEmitter};
use crate::engine::ArrayState;

/// In-flight Lomuto partition of `a[lo..=hi]` with pivot `a[hi]`.
#[derive(Debug, Clone)]
struct PartitionState {
    lo: usize,
    hi: usize,
    /// Boundary: slots below `i` hold values less than the pivot.
    i: usize,
    /// Scan index.
    j: usize,
    /// Swap scheduled by the last compare step.
    pending_swap: bool,
}

#[derive(Debug, Clone)]
enum Frame {
    /// Sort the inclusive range `lo..=hi`.
    Sort { lo: usize, hi: usize },
    /// Partition in progress.
    Partition(PartitionState),
}

/// Quick sort as a poll-driven state machine over an explicit work stack.
#[derive(Debug, Clone)]
pub struct QuickEmitter {
    stack: Vec<Frame>,
    primed: bool,
    done: bool,
}

impl QuickEmitter {
    /// Create an emitter covering the whole array.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            primed: false,
            done: false,
        }
    }
}

impl Default for QuickEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl StepEmitter for QuickEmitter {
    fn next_step(&mut self, array: &mut ArrayState) -> Option<Highlight> {
        if self.done {
            return None;
        }
        if !self.primed {
            self.primed = true;
            let n = array.len();
            if n >= 2 {
                self.stack.push(Frame::Sort { lo: 0, hi: n - 1 });
            }
        }

        loop {
            let frame = match self.stack.pop() {
                Some(f) => f,
                None => {
                    self.done = true;
                    return None;
                }
            };

            match frame {
                Frame::Sort { lo, hi } => {
                    if lo >= hi {
                        continue;
                    }
                    self.stack.push(Frame::Partition(PartitionState {
                        lo,
                        hi,
                        i: lo,
                        j: lo,
                        pending_swap: false,
                    }));
                }
                Frame::Partition(mut st) => {
                    if st.pending_swap {
                        st.pending_swap = false;
                        array.swap(st.i, st.j);
                        let highlight = Highlight::swapping(&[st.i, st.j]);
                        st.i += 1;
                        st.j += 1;
                        self.stack.push(Frame::Partition(st));
                        return Some(highlight);
                    }

                    if st.j < st.hi {
                        // Compare the scan slot against the pivot slot.
                        let below = array.compare(st.j, st.hi) == Ordering::Less;
                        let highlight = Highlight::comparing(&[st.j, st.hi]);
                        if below {
                            st.pending_swap = true;
                        } else {
                            st.j += 1;
                        }
                        self.stack.push(Frame::Partition(st));
                        return Some(highlight);
                    }

                    // Scan finished: move the pivot to the boundary, then
                    // recurse left and right of its final position.
                    array.swap(st.i, st.hi);
                    let highlight = Highlight::swapping(&[st.i, st.hi]);
                    let p = st.i;
                    if p + 1 < st.hi {
                        self.stack.push(Frame::Sort { lo: p + 1, hi: st.hi });
                    }
                    if p > st.lo + 1 {
                        self.stack.push(Frame::Sort { lo: st.lo, hi: p - 1 });
                    }
                    return Some(highlight);
                }
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(values: Vec<f64>) -> (ArrayState, Vec<Highlight>) {
        let mut array = ArrayState::from_values(values);
        let mut emitter = QuickEmitter::new();
        let mut steps = Vec::new();
        while let Some(h) = emitter.next_step(&mut array) {
            steps.push(h);
        }
        (array, steps)
    }

    #[test]
    fn test_sorts() {
        let (array, _) = drive(vec![0.6, 0.2, 0.8, 0.4, 0.1, 0.9, 0.3, 0.5]);
        assert!(array.is_sorted());
    }

    #[test]
    fn test_all_equal_performs_compares_but_changes_nothing() {
        // [2,2,2]: partition of 0..=2 does two compares, no below-pivot
        // swaps, closing swap(0,2) exchanges equal values; then 1..=2 does
        // one compare and swap(1,2). Result unchanged.
        let (array, _) = drive(vec![2.0, 2.0, 2.0]);
        assert_eq!(array.values(), &[2.0, 2.0, 2.0]);
        assert_eq!(array.comparisons(), 3);
        assert_eq!(array.writes(), 4);
    }

    #[test]
    fn test_closing_swap_emitted_when_noop() {
        // [1,2]: the compare schedules a boundary swap of (0,0), then the
        // closing swap is (1,1); both emit highlights but write nothing.
        let (array, steps) = drive(vec![0.1, 0.2]);
        assert_eq!(array.values(), &[0.1, 0.2]);
        assert_eq!(
            steps,
            vec![
                Highlight::comparing(&[0, 1]),
                Highlight::swapping(&[0, 0]),
                Highlight::swapping(&[1, 1]),
            ]
        );
        assert_eq!(array.writes(), 0);
    }

    #[test]
    fn test_compare_highlight_targets_pivot() {
        let (_, steps) = drive(vec![0.3, 0.1, 0.2]);
        // Every compare highlight pairs the scan index with the pivot slot.
        let first = &steps[0];
        assert_eq!(first.compare, vec![0, 2]);
    }

    #[test]
    fn test_depth_first_left_before_right() {
        // [0.2, 0.1, 0.4, 0.3, 0.5]: pivot 0.5 lands at index 4; the next
        // compare must come from the left subrange, whose pivot slot is 3.
        let (_, steps) = drive(vec![0.2, 0.1, 0.4, 0.3, 0.5]);
        let after_first_partition: Vec<_> = steps
            .iter()
            .skip_while(|h| h.swap.is_empty() || h.swap != vec![4, 4])
            .skip(1)
            .collect();
        let next_compare = after_first_partition
            .iter()
            .find(|h| !h.compare.is_empty());
        assert_eq!(next_compare.map(|h| h.compare[1]), Some(3));
    }

    #[test]
    fn test_empty_and_singleton() {
        for input in [vec![], vec![0.5]] {
            let (array, steps) = drive(input.clone());
            assert!(steps.is_empty());
            assert_eq!(array.values(), input.as_slice());
        }
    }
}
