//! Configuration for the nagret binary
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NAGRET_*)
//! 3. `--config <path>`, else `./nagret.toml`, else the user config
//!    (`<config dir>/nagret/config.toml`)
//! 4. Built-in defaults (lowest priority)
//!
//! The library types in `check` and `perfdata` never read configuration.

mod loader;
mod types;

pub use loader::{ConfigWarning, LOCAL_CONFIG_FILE};
pub use types::{
    Config, ErrorsConfig, LoggingConfig, OutputConfig, OutputFormat, DEFAULT_ERROR_EXIT_CODE,
};
