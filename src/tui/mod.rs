//! TUI module for sortviz.
//!
//! Contains the testable application state and key handling. The actual
//! terminal I/O lives in the `sort_tui` binary.

pub mod app;

pub use app::SortApp;
