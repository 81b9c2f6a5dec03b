//! # sortviz
//!
//! Step-by-step sorting algorithm visualizer.
//!
//! The crate decouples "compute the next algorithmic step" from "render and
//! pace that step": each algorithm is an explicit poll-driven state machine
//! that performs one metered operation (comparison or write) per poll, and a
//! playback controller drives the machine at a configurable pace with
//! play/pause/restart semantics and live metrics.
//!
//! ## Example
//!
//! ```rust
//! use sortviz::prelude::*;
//!
//! let config = VizConfig::builder().size(16).seed(42).build();
//! let mut controller = PlaybackController::from_config(&config);
//! controller.start(Algorithm::Merge);
//! controller.run_to_completion();
//! assert_eq!(controller.status(), RunStatus::Done);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn
)]

pub mod algorithms;
pub mod config;
pub mod engine;
pub mod error;
#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::algorithms::{Algorithm, Highlight, StepEmitter};
    pub use crate::config::{VizConfig, VizConfigBuilder};
    pub use crate::engine::{ArrayState, PlaybackController, RunStatus, VizRng};
    pub use crate::error::{VizError, VizResult};
}

/// Re-export for public API.
pub use error::{VizError, VizResult};
