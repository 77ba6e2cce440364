//! Configuration for the enumerators and the configurable problems.
//!
//! Every field has a default, so an empty document is a valid config.
//!
//! ```
//! use exhaust::config::ExhaustConfig;
//!
//! let config = ExhaustConfig::from_toml_str(r#"
//!     [engine]
//!     memoize = true
//!
//!     [steps]
//!     sizes = [2, 1]
//!
//!     [robot]
//!     max_x = 5
//! "#).unwrap();
//!
//! assert!(config.engine.memoize);
//! assert_eq!(config.steps.sizes, vec![2, 1]);
//! assert_eq!(config.robot.max_x, 5);
//! assert_eq!(config.robot.max_y, 10);
//! ```
//!
//! Fall back to defaults when the file is missing:
//!
//! ```
//! use exhaust::config::ExhaustConfig;
//!
//! let config = ExhaustConfig::load("exhaust.toml").unwrap_or_default();
//! assert!(!config.engine.memoize);
//! ```

use crate::builder::BuildError;
use crate::problems::{Grid, Steps};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid problem configuration: {0}")]
    Build(#[from] BuildError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExhaustConfig {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub steps: StepsConfig,

    #[serde(default)]
    pub robot: RobotConfig,
}

impl ExhaustConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.engine.memoize = memoize;
        self
    }

    /// Checks every section, reporting the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps.sizes.is_empty() {
            return Err(ConfigError::Invalid(
                "steps.sizes must list at least one step size".to_string(),
            ));
        }
        self.steps_problem()?;
        self.grid()?;
        Ok(())
    }

    /// The `Steps` problem described by the `[steps]` section.
    pub fn steps_problem(&self) -> Result<Steps, ConfigError> {
        Ok(Steps::new(self.steps.sizes.clone())?)
    }

    /// The grid described by the `[robot]` section.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.robot.max_x, self.robot.max_y)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Answer repeated states from a `SuffixTable`.
    #[serde(default)]
    pub memoize: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StepsConfig {
    /// Step sizes in the order they are tried.
    #[serde(default = "default_step_sizes")]
    pub sizes: Vec<i64>,
}

impl Default for StepsConfig {
    fn default() -> Self {
        Self {
            sizes: default_step_sizes(),
        }
    }
}

fn default_step_sizes() -> Vec<i64> {
    vec![1, 2, 3]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RobotConfig {
    #[serde(default = "default_extent")]
    pub max_x: i64,

    #[serde(default = "default_extent")]
    pub max_y: i64,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            max_x: default_extent(),
            max_y: default_extent(),
        }
    }
}

fn default_extent() -> i64 {
    10
}
