//! Error types for sortviz.
//!
//! The playback engine itself has no recoverable failure modes: invalid
//! requests (new array while sorting, pause while idle) are silently ignored.
//! Errors only arise at the configuration boundary.

use thiserror::Error;

/// Result type alias for sortviz operations.
pub type VizResult<T> = Result<T, VizError>;

/// Unified error type for all sortviz operations.
#[derive(Debug, Error)]
pub enum VizError {
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VizError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_config() {
        let err = VizError::config("size must be positive");
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("size must be positive"));
    }

    #[test]
    fn test_error_from_yaml() {
        let result: Result<crate::config::VizConfig, _> =
            serde_yaml::from_str("{{{{not valid yaml").map_err(VizError::from);
        assert!(matches!(result, Err(VizError::YamlParse(_))));
    }

    #[test]
    fn test_error_io() {
        let io = std::io::Error::other("missing file");
        let err = VizError::from(io);
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_debug() {
        let err = VizError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
