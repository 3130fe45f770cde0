//! Error types for nagret
//!
//! Uses `thiserror` for library errors. Reporting a CRITICAL check is not an
//! error; these variants only cover failures to build or render the output.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for nagret operations
pub type NagretResult<T> = Result<T, NagretError>;

/// Main error type for nagret operations
#[derive(Error, Debug)]
pub enum NagretError {
    /// Required constructor input missing or unusable
    #[error("{message}")]
    Initialization { message: String },

    /// Unit outside the allowed set
    #[error("invalid unit '{unit}'. Valid units are: (blank),s,ms,us,%,B,MB,KB,GB,TB,c")]
    UnitValidation { unit: String },

    /// Severity code outside 0..=2 or not an integer
    #[error("invalid return code '{code}'. Valid return codes are 0,1, and 2 for OK,WARNING, and CRITICAL respectively.")]
    SeverityMapping { code: String },

    /// Unexpected failure while rendering the perf trailer or extra lines
    #[error("failed to render plugin output: {cause}")]
    GeneralRender { cause: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl NagretError {
    pub(crate) fn init(message: impl Into<String>) -> Self {
        Self::Initialization {
            message: message.into(),
        }
    }

    pub(crate) fn severity(code: impl ToString) -> Self {
        Self::SeverityMapping {
            code: code.to_string(),
        }
    }
}

impl From<std::fmt::Error> for NagretError {
    fn from(err: std::fmt::Error) -> Self {
        Self::GeneralRender {
            cause: err.to_string(),
        }
    }
}
