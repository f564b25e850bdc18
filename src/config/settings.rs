//! Application configuration loading and validation.
//!
//! Every section is optional; a missing section falls back to the built-in
//! scenario and step defaults.
//!
//! # Example
//!
//! ```no_run
//! use feedlot::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("feedlot.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::logging::LoggingConfig;
use crate::domain::{GridSteps, ScenarioInputs};
use crate::error::{ConfigError, Result};

/// Documented configuration template written by `config init`.
pub const CONFIG_TEMPLATE: &str = include_str!("../../feedlot.toml.example");

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Base scenario used when no input is given on the command line.
    #[serde(default)]
    pub scenario: ScenarioInputs,

    /// Step sizes of the sensitivity tables.
    #[serde(default)]
    pub sensitivity: GridSteps,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            source,
            content: content.to_string(),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !LoggingConfig::FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {}", LoggingConfig::FORMATS.join(", ")),
            }
            .into());
        }

        let steps = [
            ("price_step", self.sensitivity.price_step),
            ("conversion_step", self.sensitivity.conversion_step),
            ("daily_gain_step", self.sensitivity.daily_gain_step),
        ];
        for (field, step) in steps {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
        }

        self.scenario.validate()?;

        Ok(())
    }
}
