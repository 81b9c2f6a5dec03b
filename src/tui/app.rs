//! Sort visualizer TUI application state and logic.
//!
//! Terminal I/O is handled by the binary; all state management and key
//! handling lives here so it can be tested headlessly.

use crossterm::event::KeyCode;

use crate::algorithms::Algorithm;
use crate::config::VizConfig;
use crate::engine::{PlaybackController, RunStatus};

/// Application state for the sort visualizer TUI.
pub struct SortApp {
    /// Playback engine.
    pub controller: PlaybackController,
    /// Pacing mapping and bounds from configuration.
    config: VizConfig,
    /// Current speed control position (1..=pacing steps).
    pub speed_position: u32,
    /// Requested array size.
    pub size: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
}

/// Array size adjustment per keypress.
const SIZE_STEP: usize = 5;
/// Smallest and largest sizes reachable from the keyboard.
const SIZE_MIN: usize = 5;
const SIZE_MAX: usize = 200;

impl SortApp {
    /// Create the app from a validated configuration.
    #[must_use]
    pub fn from_config(config: VizConfig) -> Self {
        let controller = PlaybackController::from_config(&config);
        // Derive the control position closest to the configured delay.
        let pacing = &config.playback.pacing;
        let speed_position = (1..=pacing.steps)
            .min_by_key(|p| pacing.delay_for(*p).abs_diff(config.playback.speed_ms))
            .unwrap_or(1);
        let size = config.array.size;
        Self {
            controller,
            config,
            speed_position,
            size,
            should_quit: false,
        }
    }

    /// Create the app with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(VizConfig::default())
    }

    /// Advance the playback engine by one paced tick.
    pub fn update(&mut self) {
        self.controller.advance();
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.controller.toggle_pause(),
            KeyCode::Char('n') => self.controller.request_new_array(self.size),
            KeyCode::Char('+' | '=') => self.adjust_speed(1),
            KeyCode::Char('-') => self.adjust_speed(-1),
            KeyCode::Char(']') => self.adjust_size(SIZE_STEP as isize),
            KeyCode::Char('[') => self.adjust_size(-(SIZE_STEP as isize)),
            KeyCode::Tab => self.select_algorithm(self.controller.algorithm().next()),
            KeyCode::Char(c @ '1'..='5') => {
                let idx = (c as usize) - ('1' as usize);
                self.select_algorithm(Algorithm::ALL[idx]);
            }
            _ => {}
        }
    }

    /// Currently selected algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.controller.algorithm()
    }

    /// Current run status.
    #[must_use]
    pub fn status(&self) -> RunStatus {
        self.controller.status()
    }

    fn adjust_speed(&mut self, delta: i32) {
        let steps = self.config.playback.pacing.steps;
        self.speed_position = self
            .speed_position
            .saturating_add_signed(delta)
            .clamp(1, steps.max(1));
        let delay = self.config.playback.pacing.delay_for(self.speed_position);
        self.controller.set_speed(delay);
    }

    fn adjust_size(&mut self, delta: isize) {
        // Size changes regenerate the array and are rejected mid-run.
        if !self.status().accepts_configuration() {
            return;
        }
        self.size = self
            .size
            .saturating_add_signed(delta)
            .clamp(SIZE_MIN, SIZE_MAX);
        self.controller.request_new_array(self.size);
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        // The controller ignores this mid-run; mirror that here.
        self.controller.set_algorithm(algorithm);
    }
}

impl Default for SortApp {
    fn default() -> Self {
        Self::new()
    }
}
