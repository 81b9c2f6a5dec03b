//! Playback controller: drives a step emitter at a configurable pace.
//!
//! The controller owns the array, the selected algorithm, and the in-flight
//! emitter. A host event loop calls [`PlaybackController::advance`] on every
//! tick; the controller performs one step whenever the pacing delay has
//! elapsed. Pausing cancels the in-flight emitter, flushing any values it
//! held outside the array so the partial array stays a permutation of the
//! input; resuming re-invokes the algorithm from the top on that partial
//! array, reproducing the reference visualizer's pause-via-restart
//! semantics.

use std::time::{Duration, Instant};

use crate::algorithms::{Algorithm, Highlight, StepEmitter};
use crate::config::VizConfig;
use crate::engine::{ArrayState, RunStatus, VizRng};

/// Consumer of render frames.
///
/// Called after every emitted step, and once more at uncancelled run
/// completion with all indices marked sorted. Must not mutate the array.
pub trait Renderer {
    /// Redraw from an array snapshot and the step's highlight.
    fn render(&mut self, snapshot: &[f64], highlight: &Highlight);
}

/// Consumer of counter deltas and status transitions.
///
/// Called synchronously whenever the corresponding value changes.
pub trait MetricsReporter {
    /// Comparison counter changed.
    fn on_comparisons_changed(&mut self, total: u64);
    /// Write counter changed.
    fn on_writes_changed(&mut self, total: u64);
    /// Run status changed.
    fn on_status_changed(&mut self, status: RunStatus);
}

/// Drives a selected step emitter against the shared array state.
pub struct PlaybackController {
    array: ArrayState,
    rng: VizRng,
    algorithm: Algorithm,
    emitter: Option<Box<dyn StepEmitter>>,
    status: RunStatus,
    speed: Duration,
    last_step_at: Option<Instant>,
    last_highlight: Highlight,
    renderer: Option<Box<dyn Renderer>>,
    reporter: Option<Box<dyn MetricsReporter>>,
}

impl PlaybackController {
    /// Create a controller with a freshly generated array.
    #[must_use]
    pub fn new(size: usize, seed: u64, speed_ms: u64, algorithm: Algorithm) -> Self {
        let mut rng = VizRng::new(seed);
        let mut array = ArrayState::default();
        array.generate(size, &mut rng);
        Self {
            array,
            rng,
            algorithm,
            emitter: None,
            status: RunStatus::Idle,
            speed: Duration::from_millis(speed_ms),
            last_step_at: None,
            last_highlight: Highlight::default(),
            renderer: None,
            reporter: None,
        }
    }

    /// Create a controller from a validated configuration.
    #[must_use]
    pub fn from_config(config: &VizConfig) -> Self {
        Self::new(
            config.array.size,
            config.array.seed,
            config.playback.speed_ms,
            config.algorithm,
        )
    }

    /// Attach a renderer observer.
    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = Some(renderer);
    }

    /// Attach a metrics reporter observer.
    pub fn set_reporter(&mut self, reporter: Box<dyn MetricsReporter>) {
        self.reporter = Some(reporter);
    }

    /// Current array snapshot.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.array.values()
    }

    /// Number of elements in the array.
    #[must_use]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Whether the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Total comparisons in the current run.
    #[must_use]
    pub fn comparisons(&self) -> u64 {
        self.array.comparisons()
    }

    /// Total writes in the current run.
    #[must_use]
    pub fn writes(&self) -> u64 {
        self.array.writes()
    }

    /// Current run status.
    #[must_use]
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Currently selected algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current pacing delay in milliseconds.
    #[must_use]
    pub fn speed_ms(&self) -> u64 {
        self.speed.as_millis() as u64
    }

    /// Highlight of the most recent step.
    #[must_use]
    pub fn last_highlight(&self) -> &Highlight {
        &self.last_highlight
    }

    /// Direct access to the array state (tests and headless drivers).
    #[must_use]
    pub fn array(&self) -> &ArrayState {
        &self.array
    }

    /// Start a run of the given algorithm.
    ///
    /// No-op while a run is in flight. Otherwise resets both counters,
    /// builds a fresh emitter, and transitions to `Sorting`. The array is
    /// left as-is, so starting after a pause re-sorts the partial array
    /// from the top.
    pub fn start(&mut self, algorithm: Algorithm) {
        if self.status == RunStatus::Sorting {
            return;
        }
        self.algorithm = algorithm;
        self.array.reset_counters();
        self.notify_counters(true, true);
        self.emitter = Some(algorithm.emitter());
        self.last_step_at = None;
        self.set_status(RunStatus::Sorting);
    }

    /// Cancel the in-flight run.
    ///
    /// The emitter flushes any values it held outside the array, then is
    /// discarded at the current step boundary; the array keeps its partial
    /// mutations as a permutation of the input. No-op when not sorting.
    pub fn pause(&mut self) {
        if self.status != RunStatus::Sorting {
            return;
        }
        if let Some(mut emitter) = self.emitter.take() {
            emitter.cancel(&mut self.array);
        }
        self.set_status(RunStatus::Paused);
    }

    /// Play/pause toggle: pauses a running sort, otherwise (re)starts the
    /// currently selected algorithm.
    pub fn toggle_pause(&mut self) {
        if self.status == RunStatus::Sorting {
            self.pause();
        } else {
            self.start(self.algorithm);
        }
    }

    /// Replace the array with `size` fresh random values.
    ///
    /// Silently ignored while sorting, to avoid corrupting in-flight state.
    pub fn request_new_array(&mut self, size: usize) {
        if !self.status.accepts_configuration() {
            return;
        }
        self.array.generate(size, &mut self.rng);
        self.notify_counters(true, true);
        self.set_status(RunStatus::Idle);
        self.emit_render(Highlight::default());
    }

    /// Select a different algorithm. Silently ignored while sorting.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if !self.status.accepts_configuration() {
            return;
        }
        self.algorithm = algorithm;
    }

    /// Update the pacing delay; effective for the next step, regardless of
    /// which emitter is active.
    pub fn set_speed(&mut self, ms: u64) {
        self.speed = Duration::from_millis(ms);
    }

    /// Pacing-gated driver: performs one step when the delay has elapsed.
    ///
    /// Returns `true` when a step (or the completion transition) happened.
    pub fn advance(&mut self) -> bool {
        if self.status != RunStatus::Sorting {
            return false;
        }
        let due = match self.last_step_at {
            None => true,
            Some(at) => at.elapsed() >= self.speed,
        };
        if !due {
            return false;
        }
        self.step_once()
    }

    /// Perform exactly one step, ignoring pacing.
    ///
    /// Returns `true` when a step happened or the run just completed.
    pub fn step_once(&mut self) -> bool {
        if self.status != RunStatus::Sorting {
            return false;
        }
        let Some(emitter) = self.emitter.as_mut() else {
            return false;
        };
        let comparisons_before = self.array.comparisons();
        let writes_before = self.array.writes();

        match emitter.next_step(&mut self.array) {
            Some(highlight) => {
                self.last_step_at = Some(Instant::now());
                self.notify_counters(
                    self.array.comparisons() != comparisons_before,
                    self.array.writes() != writes_before,
                );
                self.emit_render(highlight);
                true
            }
            None => {
                self.emitter = None;
                self.set_status(RunStatus::Done);
                let n = self.array.len();
                self.emit_render(Highlight::sorted_all(n));
                true
            }
        }
    }

    /// Drive the current run to completion without pacing.
    pub fn run_to_completion(&mut self) {
        while self.status == RunStatus::Sorting {
            self.step_once();
        }
    }

    fn set_status(&mut self, status: RunStatus) {
        if self.status == status {
            return;
        }
        self.status = status;
        if let Some(reporter) = self.reporter.as_mut() {
            reporter.on_status_changed(status);
        }
    }

    fn notify_counters(&mut self, comparisons: bool, writes: bool) {
        if let Some(reporter) = self.reporter.as_mut() {
            if comparisons {
                reporter.on_comparisons_changed(self.array.comparisons());
            }
            if writes {
                reporter.on_writes_changed(self.array.writes());
            }
        }
    }

    fn emit_render(&mut self, highlight: Highlight) {
        self.last_highlight = highlight;
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(self.array.values(), &self.last_highlight);
        }
    }
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("algorithm", &self.algorithm)
            .field("status", &self.status)
            .field("len", &self.array.len())
            .field("comparisons", &self.array.comparisons())
            .field("writes", &self.array.writes())
            .field("speed", &self.speed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(mut v: Vec<f64>) -> Vec<f64> {
        v.sort_by(f64::total_cmp);
        v
    }

    fn controller(size: usize) -> PlaybackController {
        PlaybackController::new(size, 42, 0, Algorithm::Bubble)
    }

    #[test]
    fn test_initial_state() {
        let c = controller(16);
        assert_eq!(c.status(), RunStatus::Idle);
        assert_eq!(c.len(), 16);
        assert_eq!(c.comparisons(), 0);
        assert_eq!(c.writes(), 0);
    }

    #[test]
    fn test_run_to_completion_sorts() {
        for algo in Algorithm::ALL {
            let mut c = controller(24);
            c.start(algo);
            c.run_to_completion();
            assert_eq!(c.status(), RunStatus::Done, "{algo}");
            assert!(c.array().is_sorted(), "{algo}");
        }
    }

    #[test]
    fn test_start_while_sorting_is_noop() {
        let mut c = controller(8);
        c.start(Algorithm::Bubble);
        c.step_once();
        let comparisons = c.comparisons();
        c.start(Algorithm::Quick);
        // Still the same run: algorithm unchanged, counters not reset.
        assert_eq!(c.algorithm(), Algorithm::Bubble);
        assert_eq!(c.comparisons(), comparisons);
        assert_eq!(c.status(), RunStatus::Sorting);
    }

    #[test]
    fn test_pause_retains_partial_permutation() {
        let mut c = controller(16);
        let original = canonical(c.values().to_vec());
        c.start(Algorithm::Quick);
        for _ in 0..10 {
            c.step_once();
        }
        c.pause();
        assert_eq!(c.status(), RunStatus::Paused);
        assert_eq!(canonical(c.values().to_vec()), original);
    }

    #[test]
    fn test_resume_restarts_from_top_with_reset_counters() {
        let mut c = controller(12);
        c.start(Algorithm::Bubble);
        for _ in 0..8 {
            c.step_once();
        }
        c.pause();
        assert!(c.comparisons() > 0);
        c.toggle_pause();
        assert_eq!(c.status(), RunStatus::Sorting);
        assert_eq!(c.comparisons(), 0);
        assert_eq!(c.writes(), 0);
        c.run_to_completion();
        assert!(c.array().is_sorted());
    }

    #[test]
    fn test_pause_at_every_step_boundary_keeps_permutation() {
        // Insertion and merge hold values outside the array between steps;
        // pausing must flush them back regardless of where the run stops.
        for algo in [Algorithm::Insertion, Algorithm::Merge] {
            let mut full = controller(10);
            full.start(algo);
            let mut total = 0;
            while full.status() == RunStatus::Sorting {
                full.step_once();
                total += 1;
            }

            for cut in 0..total {
                let mut c = controller(10);
                let original = canonical(c.values().to_vec());
                c.start(algo);
                for _ in 0..cut {
                    c.step_once();
                }
                c.pause();
                assert_eq!(
                    canonical(c.values().to_vec()),
                    original,
                    "{algo} lost values when paused after {cut} steps"
                );
            }
        }
    }

    #[test]
    fn test_pause_when_not_sorting_is_noop() {
        let mut c = controller(8);
        c.pause();
        assert_eq!(c.status(), RunStatus::Idle);
        c.start(Algorithm::Merge);
        c.run_to_completion();
        c.pause();
        assert_eq!(c.status(), RunStatus::Done);
    }

    #[test]
    fn test_new_array_rejected_while_sorting() {
        let mut c = controller(8);
        c.start(Algorithm::Selection);
        c.step_once();
        let before = c.values().to_vec();
        c.request_new_array(32);
        assert_eq!(c.len(), 8);
        assert_eq!(c.values(), before.as_slice());
        assert_eq!(c.status(), RunStatus::Sorting);
    }

    #[test]
    fn test_new_array_resets_to_idle() {
        let mut c = controller(8);
        c.start(Algorithm::Merge);
        c.run_to_completion();
        c.request_new_array(10);
        assert_eq!(c.status(), RunStatus::Idle);
        assert_eq!(c.len(), 10);
        assert_eq!(c.comparisons(), 0);
        assert_eq!(c.writes(), 0);
    }

    #[test]
    fn test_set_algorithm_rejected_while_sorting() {
        let mut c = controller(8);
        c.start(Algorithm::Bubble);
        c.step_once();
        c.set_algorithm(Algorithm::Quick);
        assert_eq!(c.algorithm(), Algorithm::Bubble);
        c.pause();
        c.set_algorithm(Algorithm::Quick);
        assert_eq!(c.algorithm(), Algorithm::Quick);
    }

    #[test]
    fn test_set_speed_any_time() {
        let mut c = controller(8);
        c.set_speed(120);
        assert_eq!(c.speed_ms(), 120);
        c.start(Algorithm::Bubble);
        c.set_speed(5);
        assert_eq!(c.speed_ms(), 5);
    }

    #[test]
    fn test_advance_respects_pacing() {
        let mut c = controller(8);
        c.set_speed(10_000);
        c.start(Algorithm::Bubble);
        // First step is immediate, second is gated behind the long delay.
        assert!(c.advance());
        assert!(!c.advance());
        assert_eq!(c.comparisons(), 1);
    }

    #[test]
    fn test_advance_when_idle_is_noop() {
        let mut c = controller(8);
        assert!(!c.advance());
    }

    #[test]
    fn test_done_emits_full_sorted_highlight() {
        let mut c = controller(6);
        c.start(Algorithm::Insertion);
        c.run_to_completion();
        assert_eq!(c.last_highlight(), &Highlight::sorted_all(6));
    }

    #[test]
    fn test_empty_array_run() {
        let mut c = controller(0);
        c.start(Algorithm::Merge);
        c.run_to_completion();
        assert_eq!(c.status(), RunStatus::Done);
        assert_eq!(c.comparisons(), 0);
        assert_eq!(c.last_highlight(), &Highlight::sorted_all(0));
    }

    #[test]
    fn test_same_seed_same_array() {
        let a = PlaybackController::new(20, 7, 0, Algorithm::Bubble);
        let b = PlaybackController::new(20, 7, 0, Algorithm::Bubble);
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn test_restart_after_done_resorts() {
        let mut c = controller(10);
        c.start(Algorithm::Quick);
        c.run_to_completion();
        c.toggle_pause(); // restart on the sorted array
        assert_eq!(c.status(), RunStatus::Sorting);
        c.run_to_completion();
        assert_eq!(c.status(), RunStatus::Done);
        assert!(c.array().is_sorted());
    }
}
