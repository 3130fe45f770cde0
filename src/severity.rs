//! Severity of a check result
//!
//! The monitoring framework reads the plugin exit status as one of three
//! levels. Anything else is rejected rather than clamped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NagretError, NagretResult};

/// Return codes understood by the framework, in increasing severity.
pub const VALID_CODES: [i64; 3] = [0, 1, 2];

/// Code used when no severity is supplied to [`validate_code`].
pub const DEFAULT_CODE: i64 = 2;

/// Outcome classification of a monitoring check
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub enum Severity {
    Ok,
    Warning,
    /// Fail-safe default
    #[default]
    Critical,
}

impl Severity {
    /// All severities, ordered from OK to CRITICAL
    pub const ALL: [Severity; 3] = [Severity::Ok, Severity::Warning, Severity::Critical];

    /// Numeric status handed to the framework as the exit code
    pub fn code(self) -> i64 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
        }
    }

    /// Label printed at the start of the status line
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

impl TryFrom<i64> for Severity {
    type Error = NagretError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Ok),
            1 => Ok(Self::Warning),
            2 => Ok(Self::Critical),
            other => Err(NagretError::severity(other)),
        }
    }
}

impl From<Severity> for i64 {
    fn from(severity: Severity) -> Self {
        severity.code()
    }
}

impl FromStr for Severity {
    type Err = NagretError;

    /// Accepts the numeric code or the label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::try_from(code);
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "OK" => Ok(Self::Ok),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "CRITICAL" | "CRIT" => Ok(Self::Critical),
            _ => Err(NagretError::severity(trimmed)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw code to its label.
///
/// This is the canonical severity check: construction and rendering both
/// report out-of-range codes through the error returned here.
pub fn severity_label(code: i64) -> NagretResult<&'static str> {
    Severity::try_from(code).map(Severity::as_str)
}

/// Validate a raw code, defaulting an absent one to CRITICAL.
pub fn validate_code(code: Option<i64>) -> NagretResult<i64> {
    match code {
        None => Ok(DEFAULT_CODE),
        Some(code) if VALID_CODES.contains(&code) => Ok(code),
        Some(code) => Err(NagretError::severity(code)),
    }
}
