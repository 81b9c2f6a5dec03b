//! Configuration system with YAML schema and validation.
//!
//! Out-of-range values are rejected here, at the configuration boundary;
//! the engine itself never validates and never throws during normal
//! operation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::algorithms::Algorithm;
use crate::error::{VizError, VizResult};

/// Top-level visualizer configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VizConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Array generation settings.
    #[validate(nested)]
    #[serde(default)]
    pub array: ArrayConfig,

    /// Playback pacing settings.
    #[validate(nested)]
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Initially selected algorithm.
    #[serde(default)]
    pub algorithm: Algorithm,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl VizConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> VizResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> VizResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> VizConfigBuilder {
        VizConfigBuilder::default()
    }

    /// Validate semantic constraints beyond the schema.
    fn validate_semantic(&self) -> VizResult<()> {
        let pacing = &self.playback.pacing;
        if pacing.min_delay_ms > pacing.max_delay_ms {
            return Err(VizError::config(format!(
                "pacing min delay {}ms exceeds max delay {}ms",
                pacing.min_delay_ms, pacing.max_delay_ms
            )));
        }
        Ok(())
    }
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            array: ArrayConfig::default(),
            playback: PlaybackConfig::default(),
            algorithm: Algorithm::default(),
        }
    }
}

/// Array generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ArrayConfig {
    /// Number of elements to generate.
    #[validate(range(min = 1, max = 512))]
    #[serde(default = "default_size")]
    pub size: usize,

    /// Master seed for reproducible arrays.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

const fn default_size() -> usize {
    40
}

const fn default_seed() -> u64 {
    42
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            seed: default_seed(),
        }
    }
}

/// Playback pacing settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Initial delay between steps, in milliseconds.
    #[validate(range(max = 10_000))]
    #[serde(default = "default_speed_ms")]
    pub speed_ms: u64,

    /// Mapping from the speed control position to a delay.
    #[serde(default)]
    pub pacing: PacingConfig,
}

const fn default_speed_ms() -> u64 {
    40
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_ms: default_speed_ms(),
            pacing: PacingConfig::default(),
        }
    }
}

/// Linear inverse mapping from a speed control position to a pacing delay:
/// position 1 is slowest (`max_delay_ms`), position `steps` fastest
/// (approaches `min_delay_ms`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PacingConfig {
    /// Fastest delay, in milliseconds.
    #[serde(default = "default_min_delay")]
    pub min_delay_ms: u64,

    /// Slowest delay, in milliseconds.
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,

    /// Number of control positions.
    #[serde(default = "default_steps")]
    pub steps: u32,
}

const fn default_min_delay() -> u64 {
    10
}

const fn default_max_delay() -> u64 {
    120
}

const fn default_steps() -> u32 {
    60
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay(),
            max_delay_ms: default_max_delay(),
            steps: default_steps(),
        }
    }
}

impl PacingConfig {
    /// Delay for a control position, clamped to `1..=steps`.
    #[must_use]
    pub fn delay_for(&self, position: u32) -> u64 {
        let position = position.clamp(1, self.steps.max(1));
        // Saturate: direct construction can bypass semantic validation.
        let span = self.max_delay_ms.saturating_sub(self.min_delay_ms) as f64;
        let factor = 1.0 - f64::from(position) / f64::from(self.steps.max(1));
        self.min_delay_ms + (factor * span).round() as u64
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct VizConfigBuilder {
    size: Option<usize>,
    seed: Option<u64>,
    speed_ms: Option<u64>,
    algorithm: Option<Algorithm>,
}

impl VizConfigBuilder {
    /// Set the array size.
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the master seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial pacing delay in milliseconds.
    #[must_use]
    pub const fn speed_ms(mut self, ms: u64) -> Self {
        self.speed_ms = Some(ms);
        self
    }

    /// Set the initially selected algorithm.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> VizConfig {
        let mut config = VizConfig::default();
        if let Some(size) = self.size {
            config.array.size = size;
        }
        if let Some(seed) = self.seed {
            config.array.seed = seed;
        }
        if let Some(ms) = self.speed_ms {
            config.playback.speed_ms = ms;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        config
    }
}
