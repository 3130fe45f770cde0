//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::NagretResult;

use super::loader::{self, ConfigWarning};

/// Exit status used when nagret itself fails (UNKNOWN to the framework)
pub const DEFAULT_ERROR_EXIT_CODE: u8 = 3;

/// How the `emit` command prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The plain status line
    #[default]
    Text,
    /// One JSON object with message, code and label
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Failure handling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorsConfig {
    #[serde(default = "default_error_exit_code")]
    pub exit_code: u8,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            exit_code: default_error_exit_code(),
        }
    }
}

fn default_error_exit_code() -> u8 {
    DEFAULT_ERROR_EXIT_CODE
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `warn` or `nagret=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub errors: ErrorsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NagretResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NagretResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the explicit path, working directory or user config, then
    /// apply environment overrides.
    pub fn resolve(
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> NagretResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, working_dir)
    }

    /// Apply environment variable overrides (NAGRET_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
