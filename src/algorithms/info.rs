//! Static algorithm catalog: complexity, stability, description, pseudocode.
//!
//! Display-only data consumed by the TUI info panels; the playback engine
//! never reads it.

use crate::algorithms::Algorithm;

/// Descriptive metadata for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    /// Human-readable name.
    pub name: &'static str,
    /// Time complexity.
    pub time: &'static str,
    /// Space complexity.
    pub space: &'static str,
    /// Whether equal elements keep their relative order.
    pub stable: bool,
    /// One-paragraph description.
    pub description: &'static str,
    /// Pseudocode listing.
    pub pseudocode: &'static str,
}

impl AlgorithmInfo {
    /// Stability label for display.
    #[must_use]
    pub const fn stability_label(&self) -> &'static str {
        if self.stable {
            "Stable"
        } else {
            "Unstable"
        }
    }
}

const BUBBLE: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    time: "O(n²)",
    space: "O(1)",
    stable: true,
    description: "Bubble sort repeatedly scans the array, swapping adjacent \
elements that are out of order. Large values move to the end with each pass, \
like bubbles rising in water.",
    pseudocode: "bubbleSort(a):\n  n = length(a)\n  repeat\n    swapped = false\n    \
for i from 0 to n - 2:\n      if a[i] > a[i+1]:\n        swap a[i], a[i+1]\n        \
swapped = true\n  until not swapped",
};

const SELECTION: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    time: "O(n²)",
    space: "O(1)",
    stable: false,
    description: "Selection sort repeatedly selects the smallest remaining \
element and swaps it into the next position. It minimizes writes but still \
does O(n²) comparisons.",
    pseudocode: "selectionSort(a):\n  n = length(a)\n  for i from 0 to n - 2:\n    \
minIndex = i\n    for j from i+1 to n - 1:\n      if a[j] < a[minIndex]:\n        \
minIndex = j\n    swap a[i], a[minIndex]",
};

const INSERTION: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    time: "O(n²) (best: O(n))",
    space: "O(1)",
    stable: true,
    description: "Insertion sort builds a sorted prefix one element at a time. \
Each new element is inserted into its correct spot within the already sorted \
part of the array.",
    pseudocode: "insertionSort(a):\n  n = length(a)\n  for i from 1 to n - 1:\n    \
key = a[i]\n    j = i - 1\n    while j >= 0 and a[j] > key:\n      a[j+1] = a[j]\n      \
j = j - 1\n    a[j+1] = key",
};

const MERGE: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    time: "O(n log n)",
    space: "O(n)",
    stable: true,
    description: "Merge sort uses divide-and-conquer: it recursively splits the \
array, sorts each half, then merges the sorted halves back together.",
    pseudocode: "mergeSort(a):\n  if length(a) <= 1:\n    return a\n  \
mid = length(a) / 2\n  left  = mergeSort(a[0..mid-1])\n  right = mergeSort(a[mid..end])\n  \
return merge(left, right)",
};

const QUICK: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    time: "O(n log n) average",
    space: "O(log n) stack",
    stable: false,
    description: "Quick sort chooses a pivot, partitions the array into elements \
less than and greater than the pivot, then recursively sorts each side. Very \
fast in practice.",
    pseudocode: "quickSort(a, lo, hi):\n  if lo < hi:\n    p = partition(a, lo, hi)\n    \
quickSort(a, lo, p - 1)\n    quickSort(a, p + 1, hi)",
};

/// Catalog entry for the given algorithm.
#[must_use]
pub const fn lookup(algorithm: Algorithm) -> &'static AlgorithmInfo {
    match algorithm {
        Algorithm::Bubble => &BUBBLE,
        Algorithm::Selection => &SELECTION,
        Algorithm::Insertion => &INSERTION,
        Algorithm::Merge => &MERGE,
        Algorithm::Quick => &QUICK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_algorithm_has_info() {
        for algo in Algorithm::ALL {
            let info = algo.info();
            assert!(!info.name.is_empty());
            assert!(!info.time.is_empty());
            assert!(!info.space.is_empty());
            assert!(!info.description.is_empty());
            assert!(!info.pseudocode.is_empty());
        }
    }

    #[test]
    fn test_stability_labels() {
        assert_eq!(Algorithm::Merge.info().stability_label(), "Stable");
        assert_eq!(Algorithm::Insertion.info().stability_label(), "Stable");
        assert_eq!(Algorithm::Bubble.info().stability_label(), "Stable");
        assert_eq!(Algorithm::Selection.info().stability_label(), "Unstable");
        assert_eq!(Algorithm::Quick.info().stability_label(), "Unstable");
    }

    #[test]
    fn test_names_match_catalog() {
        assert_eq!(Algorithm::Bubble.info().name, "Bubble Sort");
        assert_eq!(Algorithm::Quick.info().name, "Quick Sort");
    }
}
