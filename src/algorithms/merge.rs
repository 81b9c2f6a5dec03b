//! Merge sort step emitter.
//!
//! Top-down merge over inclusive ranges, midpoint `floor((l+r)/2)`, left
//! subtree fully before right subtree. The recursion is flattened into an
//! explicit work stack so the procedure can suspend between any two metered
//! operations, including deep inside a merge.
//!
//! Merging copies both halves into side buffers when the merge frame is
//! first entered (by which point both halves are sorted in place), then
//! interleaves compare and write steps per destination slot. Ties take the
//! left buffer (`<=`), which is what makes the sort stable. Once either
//! buffer empties, the remainder drains as metered writes with no compares.

use std::cmp::Ordering;

use crate::algorithms::{Highlight, StepEmitter};
use crate::engine::ArrayState;

/// In-flight merge of `a[lo..=mid]` and `a[mid+1..=hi]`.
#[derive(Debug, Clone)]
struct MergeState {
    left: Vec<f64>,
    right: Vec<f64>,
    /// Cursor into `left`.
    i: usize,
    /// Cursor into `right`.
    j: usize,
    /// Destination slot in the array.
    k: usize,
    /// Value chosen by the last compare step, awaiting its write step.
    pending: Option<f64>,
}

#[derive(Debug, Clone)]
enum Frame {
    /// Sort the inclusive range `lo..=hi`.
    Sort { lo: usize, hi: usize },
    /// Both halves sorted; copy buffers and begin merging on first entry.
    MergePending { lo: usize, mid: usize, hi: usize },
    /// Merge in progress.
    Merging(MergeState),
}

/// Merge sort as a poll-driven state machine over an explicit work stack.
#[derive(Debug, Clone)]
pub struct MergeEmitter {
    stack: Vec<Frame>,
    primed: bool,
    done: bool,
}

impl MergeEmitter {
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

impl Default for MergeEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl StepEmitter for MergeEmitter {
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
                    let mid = (lo + hi) / 2;
                    // Pushed in reverse so the left half pops first.
                    self.stack.push(Frame::MergePending { lo, mid, hi });
                    self.stack.push(Frame::Sort { lo: mid + 1, hi });
                    self.stack.push(Frame::Sort { lo, hi: mid });
                }
                Frame::MergePending { lo, mid, hi } => {
                    let values = array.values();
                    let state = MergeState {
                        left: values[lo..=mid].to_vec(),
                        right: values[mid + 1..=hi].to_vec(),
                        i: 0,
                        j: 0,
                        k: lo,
                        pending: None,
                    };
                    self.stack.push(Frame::Merging(state));
                }
                Frame::Merging(mut st) => {
                    // Write step for the value chosen by the previous compare.
                    if let Some(value) = st.pending.take() {
                        array.write(st.k, value);
                        let highlight = Highlight::swapping(&[st.k]);
                        st.k += 1;
                        self.stack.push(Frame::Merging(st));
                        return Some(highlight);
                    }

                    // Compare step while both buffers have heads.
                    if st.i < st.left.len() && st.j < st.right.len() {
                        let ord = array.compare_keys(st.left[st.i], st.right[st.j]);
                        let value = if ord == Ordering::Greater {
                            let v = st.right[st.j];
                            st.j += 1;
                            v
                        } else {
                            // Left wins ties: stability.
                            let v = st.left[st.i];
                            st.i += 1;
                            v
                        };
                        st.pending = Some(value);
                        let highlight = Highlight::comparing(&[st.k]);
                        self.stack.push(Frame::Merging(st));
                        return Some(highlight);
                    }

                    // Drain: metered writes, no further compares.
                    if st.i < st.left.len() {
                        let value = st.left[st.i];
                        st.i += 1;
                        array.write(st.k, value);
                        let highlight = Highlight::swapping(&[st.k]);
                        st.k += 1;
                        self.stack.push(Frame::Merging(st));
                        return Some(highlight);
                    }
                    if st.j < st.right.len() {
                        let value = st.right[st.j];
                        st.j += 1;
                        array.write(st.k, value);
                        let highlight = Highlight::swapping(&[st.k]);
                        st.k += 1;
                        self.stack.push(Frame::Merging(st));
                        return Some(highlight);
                    }
                    // Merge exhausted; frame retires.
                }
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.done
    }

    fn cancel(&mut self, array: &mut ArrayState) {
        // Only the top merge can be in flight; its side buffers (and the
        // pending value) hold everything not yet written back. Flushing
        // them into the uncovered slots restores the permutation.
        while let Some(frame) = self.stack.pop() {
            let Frame::Merging(mut st) = frame else {
                continue;
            };
            if let Some(value) = st.pending.take() {
                array.restore(st.k, value);
                st.k += 1;
            }
            for &value in &st.left[st.i..] {
                array.restore(st.k, value);
                st.k += 1;
            }
            for &value in &st.right[st.j..] {
                array.restore(st.k, value);
                st.k += 1;
            }
        }
        self.done = true;
    }
}
