//! TOML-based run configuration and preset definitions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pso::PsoParams;

/// Top-level run configuration parsed from TOML.
///
/// All fields have defaults matching the reference run (600 training
/// values, 30-step forecast, 30 particles, 100 iterations). Load from TOML
/// with [`RunConfig::from_toml_file`] or use [`RunConfig::standard`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Input series location and train/holdout split.
    #[serde(default)]
    pub data: DataConfig,
    /// Swarm tuning constants and seed.
    #[serde(default)]
    pub swarm: SwarmConfig,
    /// Optional CSV export targets.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input series location and train/holdout split.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// CSV file holding the series.
    pub path: Option<PathBuf>,
    /// Zero-based column index of the value to read.
    pub column: usize,
    /// Leading rows to skip before the first value.
    pub header_rows: usize,
    /// Number of leading values used for training (must be > 0).
    pub train_len: usize,
    /// Number of values forecast past the training window (must be > 0).
    pub holdout_len: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: None,
            column: 1,
            header_rows: 1,
            train_len: 600,
            holdout_len: 30,
        }
    }
}

/// Swarm tuning constants and seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwarmConfig {
    /// Number of particles (must be > 0).
    pub particles: usize,
    /// Number of evaluate/update iterations.
    pub iterations: usize,
    /// Velocity inertia weight.
    pub inertia: f64,
    /// Attraction toward the personal best.
    pub cognitive: f64,
    /// Attraction toward the global best.
    pub social: f64,
    /// Random seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        let p = PsoParams::default();
        Self {
            particles: p.particles,
            iterations: p.iterations,
            inertia: p.inertia,
            cognitive: p.cognitive,
            social: p.social,
            seed: None,
        }
    }
}

impl SwarmConfig {
    /// The optimizer parameters described by this section.
    pub fn params(&self) -> PsoParams {
        PsoParams {
            particles: self.particles,
            iterations: self.iterations,
            inertia: self.inertia,
            cognitive: self.cognitive,
            social: self.social,
        }
    }
}

/// Optional CSV export targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Forecast-vs-actual table.
    pub forecast_out: Option<PathBuf>,
    /// Per-iteration global best fitness.
    pub trace_out: Option<PathBuf>,
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"swarm.particles"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl RunConfig {
    /// Returns the reference configuration.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Returns the quick preset: small swarm, short run.
    pub fn quick() -> Self {
        Self {
            swarm: SwarmConfig {
                particles: 10,
                iterations: 20,
                ..SwarmConfig::default()
            },
            ..Self::default()
        }
    }

    /// Returns the thorough preset: larger swarm, long run.
    pub fn thorough() -> Self {
        Self {
            swarm: SwarmConfig {
                particles: 60,
                iterations: 300,
                ..SwarmConfig::default()
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["default", "quick", "thorough"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" => Ok(Self::standard()),
            "quick" => Ok(Self::quick()),
            "thorough" => Ok(Self::thorough()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let d = &self.data;
        if d.path.is_none() {
            errors.push(ConfigError::new("data.path", "a CSV file is required"));
        }
        if d.train_len == 0 {
            errors.push(ConfigError::new("data.train_len", "must be > 0"));
        }
        if d.holdout_len == 0 {
            errors.push(ConfigError::new("data.holdout_len", "must be > 0"));
        }

        let s = &self.swarm;
        if s.particles == 0 {
            errors.push(ConfigError::new("swarm.particles", "must be > 0"));
        }
        for (field, value) in [
            ("swarm.inertia", s.inertia),
            ("swarm.cognitive", s.cognitive),
            ("swarm.social", s.social),
        ] {
            if !value.is_finite() {
                errors.push(ConfigError::new(field, "must be finite"));
            }
        }

        errors
    }
}
