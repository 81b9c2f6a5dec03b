//! Step emitters: one poll-driven state machine per sorting algorithm.
//!
//! Each emitter performs at most one metered operation (comparison or write)
//! per poll and returns the highlight describing that step, so a controller
//! can pace, pause, and cancel a run at every step boundary. Recursive
//! algorithms (merge, quick) use an explicit work stack so suspension is
//! possible mid-recursion.

pub mod bubble;
pub mod info;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::ArrayState;
use crate::error::VizError;

pub use bubble::BubbleEmitter;
pub use info::AlgorithmInfo;
pub use insertion::InsertionEmitter;
pub use merge::MergeEmitter;
pub use quick::QuickEmitter;
pub use selection::SelectionEmitter;

/// The five supported comparison sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Bubble sort with early exit on a swap-free pass.
    #[default]
    Bubble,
    /// Selection sort.
    Selection,
    /// Insertion sort.
    Insertion,
    /// Top-down merge sort (stable, left-biased tie-break).
    Merge,
    /// Quick sort with Lomuto partitioning, last element as pivot.
    Quick,
}

impl Algorithm {
    /// All algorithms, in selector order.
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
    ];

    /// Stable identifier used in configuration files.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }

    /// Static catalog entry (name, complexity, description, pseudocode).
    #[must_use]
    pub const fn info(self) -> &'static AlgorithmInfo {
        info::lookup(self)
    }

    /// Build a fresh step emitter for this algorithm.
    #[must_use]
    pub fn emitter(self) -> Box<dyn StepEmitter> {
        match self {
            Self::Bubble => Box::new(BubbleEmitter::new()),
            Self::Selection => Box::new(SelectionEmitter::new()),
            Self::Insertion => Box::new(InsertionEmitter::new()),
            Self::Merge => Box::new(MergeEmitter::new()),
            Self::Quick => Box::new(QuickEmitter::new()),
        }
    }

    /// Next algorithm in selector order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| VizError::config(format!("unknown algorithm '{s}'")))
    }
}

/// Index sets to visually mark for one render frame.
///
/// Transient: valid only for the step that emitted it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Indices involved in a comparison.
    pub compare: Vec<usize>,
    /// Indices written or exchanged.
    pub swap: Vec<usize>,
    /// Indices known to be in final sorted position.
    pub sorted: Vec<usize>,
}

impl Highlight {
    /// Highlight a comparison between the given indices.
    #[must_use]
    pub fn comparing(indices: &[usize]) -> Self {
        Self {
            compare: indices.to_vec(),
            ..Self::default()
        }
    }

    /// Highlight a write/exchange at the given indices.
    #[must_use]
    pub fn swapping(indices: &[usize]) -> Self {
        Self {
            swap: indices.to_vec(),
            ..Self::default()
        }
    }

    /// Highlight a contiguous range of sorted indices.
    #[must_use]
    pub fn sorted_range(range: std::ops::Range<usize>) -> Self {
        Self {
            sorted: range.collect(),
            ..Self::default()
        }
    }

    /// Highlight all `n` indices as sorted (run completion).
    #[must_use]
    pub fn sorted_all(n: usize) -> Self {
        Self::sorted_range(0..n)
    }
}

/// A resumable sorting procedure.
///
/// One call to [`next_step`](Self::next_step) performs at most one metered
/// operation against the shared array state and returns the highlight for
/// that step; `None` means the algorithm has finished. Cancelling mid-run
/// goes through [`cancel`](Self::cancel), which flushes any values the
/// emitter holds outside the array so the partial array is always a
/// permutation of the input.
pub trait StepEmitter {
    /// Perform the next step, mutating `array` in place.
    fn next_step(&mut self, array: &mut ArrayState) -> Option<Highlight>;

    /// Whether the algorithm has run to completion.
    fn is_complete(&self) -> bool;

    /// Cancel the run, writing back any values held outside the array.
    ///
    /// Must be called before discarding an emitter mid-run: an insertion
    /// key or merge buffer exists only inside the emitter between certain
    /// steps, and dropping without a flush would lose those values. The
    /// write-back is unmetered. Emitters whose entire state lives in the
    /// array keep this default no-op.
    fn cancel(&mut self, _array: &mut ArrayState) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive an emitter to completion without pacing, collecting highlights.
    pub(crate) fn run_all(algo: Algorithm, values: Vec<f64>) -> (ArrayState, Vec<Highlight>) {
        let mut array = ArrayState::from_values(values);
        let mut emitter = algo.emitter();
        let mut steps = Vec::new();
        while let Some(h) = emitter.next_step(&mut array) {
            steps.push(h);
        }
        assert!(emitter.is_complete());
        (array, steps)
    }

    /// Sorted copy for permutation checks (bit-exact on totally ordered f64).
    fn canonical(mut v: Vec<f64>) -> Vec<f64> {
        v.sort_by(f64::total_cmp);
        v
    }

    #[test]
    fn test_all_algorithms_sort() {
        let input = vec![0.9, 0.1, 0.5, 0.5, 0.0, 0.73, 0.2];
        for algo in Algorithm::ALL {
            let (array, _) = run_all(algo, input.clone());
            assert!(array.is_sorted(), "{algo} failed to sort");
            assert_eq!(
                canonical(array.values().to_vec()),
                canonical(input.clone()),
                "{algo} lost or duplicated values"
            );
        }
    }

    #[test]
    fn test_empty_and_singleton_complete_without_metered_steps() {
        for algo in Algorithm::ALL {
            for input in [vec![], vec![0.42]] {
                let (array, _) = run_all(algo, input.clone());
                assert_eq!(array.comparisons(), 0, "{algo} compared on {input:?}");
                assert_eq!(array.writes(), 0, "{algo} wrote on {input:?}");
                assert_eq!(array.values(), input.as_slice());
            }
        }
    }

    #[test]
    fn test_already_sorted_input() {
        let input: Vec<f64> = (0..20).map(|i| f64::from(i) / 20.0).collect();
        for algo in Algorithm::ALL {
            let (array, _) = run_all(algo, input.clone());
            assert_eq!(array.values(), input.as_slice());
        }
    }

    #[test]
    fn test_reverse_sorted_input() {
        let input: Vec<f64> = (0..20).rev().map(|i| f64::from(i) / 20.0).collect();
        for algo in Algorithm::ALL {
            let (array, _) = run_all(algo, input.clone());
            assert!(array.is_sorted(), "{algo} failed on reverse input");
        }
    }

    #[test]
    fn test_counters_monotone_across_steps() {
        let input = vec![0.8, 0.3, 0.6, 0.1, 0.9, 0.2];
        for algo in Algorithm::ALL {
            let mut array = ArrayState::from_values(input.clone());
            let mut emitter = algo.emitter();
            let mut last = (0, 0);
            while emitter.next_step(&mut array).is_some() {
                let now = (array.comparisons(), array.writes());
                assert!(now.0 >= last.0 && now.1 >= last.1);
                last = now;
            }
        }
    }

    #[test]
    fn test_cancellation_preserves_permutation() {
        let input = vec![0.7, 0.2, 0.9, 0.4, 0.1, 0.6, 0.3];
        for algo in Algorithm::ALL {
            // Cancel at every step boundary; the flushed array must always
            // be a permutation of the input.
            let (_, steps) = run_all(algo, input.clone());
            for cut in 0..=steps.len() {
                let mut array = ArrayState::from_values(input.clone());
                let mut emitter = algo.emitter();
                for _ in 0..cut {
                    emitter.next_step(&mut array);
                }
                emitter.cancel(&mut array);
                assert_eq!(
                    canonical(array.values().to_vec()),
                    canonical(input.clone()),
                    "{algo} corrupted values when cancelled after {cut} steps"
                );
            }
        }
    }

    #[test]
    fn test_algorithm_id_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.id().parse::<Algorithm>().ok(), Some(algo));
        }
    }

    #[test]
    fn test_algorithm_from_str_unknown() {
        assert!("bogo".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_algorithm_serde_lowercase() {
        let json = serde_json::to_string(&Algorithm::Quick).expect("serialize");
        assert_eq!(json, "\"quick\"");
        let back: Algorithm = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Algorithm::Quick);
    }

    #[test]
    fn test_algorithm_next_cycles() {
        let mut algo = Algorithm::Bubble;
        for _ in 0..Algorithm::ALL.len() {
            algo = algo.next();
        }
        assert_eq!(algo, Algorithm::Bubble);
    }

    #[test]
    fn test_highlight_constructors() {
        let h = Highlight::comparing(&[1, 2]);
        assert_eq!(h.compare, vec![1, 2]);
        assert!(h.swap.is_empty() && h.sorted.is_empty());

        let h = Highlight::swapping(&[4]);
        assert_eq!(h.swap, vec![4]);

        let h = Highlight::sorted_range(2..5);
        assert_eq!(h.sorted, vec![2, 3, 4]);

        let h = Highlight::sorted_all(3);
        assert_eq!(h.sorted, vec![0, 1, 2]);
    }
}
