//! TOML-based generator configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::sim::seed::DEFAULT_GLOBAL_SEED;

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"generator.scenarios_csv"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

/// Top-level generator configuration parsed from TOML.
///
/// All fields have defaults, so an absent config file is equivalent to an
/// empty one. Load with [`GeneratorConfig::from_toml_file`] or use
/// `GeneratorConfig::default()`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Run-wide generator settings.
    #[serde(default)]
    pub generator: GeneratorSection,
}

/// Run-wide generator settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSection {
    /// Global seed; combined with each scenario-id hash to derive the
    /// scenario stream. Changing it changes every scenario's output.
    pub seed: u64,
    /// Path of the scenario table CSV.
    pub scenarios_csv: String,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            seed: DEFAULT_GLOBAL_SEED,
            scenarios_csv: "scenarios.csv".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.generator.scenarios_csv.trim().is_empty() {
            errors.push(ConfigError {
                field: "generator.scenarios_csv".into(),
                message: "must not be empty".into(),
            });
        }
        errors
    }
}
