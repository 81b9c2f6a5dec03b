//! Playback engine core.
//!
//! - Array state with metered comparisons and writes
//! - Deterministic RNG for array generation
//! - Playback controller with play/pause/restart semantics and pacing

pub mod playback;
pub mod rng;
pub mod state;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use playback::{MetricsReporter, PlaybackController, Renderer};
pub use rng::VizRng;
pub use state::ArrayState;

/// Lifecycle of one visualization run.
///
/// Transitions: `Idle -> Sorting` (run started), `Sorting -> Paused` (cancel
/// requested mid-run), `Paused -> Sorting` (restart from the top on the
/// current, possibly partially-sorted array), `Sorting -> Done` (completion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// No run active; configuration may change freely.
    #[default]
    Idle,
    /// An emitter is being driven.
    Sorting,
    /// A run was cancelled mid-flight; the array keeps its partial state.
    Paused,
    /// The last run finished without cancellation; the array is sorted.
    Done,
}

impl RunStatus {
    /// Whether configuration changes (new array, algorithm) are accepted.
    #[must_use]
    pub const fn accepts_configuration(self) -> bool {
        !matches!(self, Self::Sorting)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Sorting => "sorting",
            Self::Paused => "paused",
            Self::Done => "done",
        };
        f.write_str(label)
    }
}
