//! nagret - monitoring plugin output builder
//!
//! Turns a check outcome into the text protocol read by plugin execution
//! frameworks: a status line, optional performance data, and an exit code.
//!
//! ```
//! use nagret::{CheckResult, PerfField};
//!
//! let mut result = CheckResult::new(1, "disk space")?;
//! result
//!     .add_field(PerfField::new("ddrive", 2)?.with_unit("TB")?)
//!     .add_field(PerfField::new("cdrive", 10)?.with_unit("GB")?);
//!
//! let output = result.render()?;
//! assert_eq!(
//!     output.message,
//!     "WARNING disk space  ; | 'ddrive'=2TB;;;; 'cdrive'=10GB;;;;"
//! );
//! assert_eq!(output.exit_code(), 1);
//! # Ok::<(), nagret::NagretError>(())
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod logging;
pub mod perfdata;
pub mod severity;

// Re-exports for convenience
pub use check::{CheckResult, PluginOutput};
pub use config::{Config, ConfigWarning, OutputFormat};
pub use error::{NagretError, NagretResult};
pub use perfdata::{PerfField, Unit};
pub use severity::{severity_label, validate_code, Severity};
