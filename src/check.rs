//! Check results and the final plugin output
//!
//! A [`CheckResult`] collects the severity, the status message, any extra
//! output lines and performance fields, then renders them into a single
//! status line:
//!
//! ```text
//! <LABEL> <message> <extra lines> ; | 'label'=value<unit>;warn;crit;min;max ...
//! ```
//!
//! Rendering yields a [`PluginOutput`] carrying the line and the exit code.
//! A CRITICAL result is a successful render, not an error.

use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::error::{NagretError, NagretResult};
use crate::perfdata::PerfField;
use crate::severity::{severity_label, validate_code, Severity};

/// The rendered status line and the status code to exit with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginOutput {
    pub message: String,
    pub severity: Severity,
}

impl PluginOutput {
    /// Process exit status expected by the monitoring framework
    pub fn exit_code(&self) -> i32 {
        match self.severity {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
        }
    }

    /// Print the status line on stdout and terminate with its exit code.
    pub fn print_and_exit(self) -> ! {
        println!("{}", self.message);
        std::process::exit(self.exit_code())
    }
}

impl fmt::Display for PluginOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of a single check, built up by the caller before rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    code: i64,
    message: String,
    fields: Vec<PerfField>,
    lines: Vec<String>,
    /// Reserved: meant to stop later stages overriding the severity.
    force_severity: bool,
}

impl CheckResult {
    /// Create a result from a severity code and a non-empty message.
    ///
    /// Out-of-range codes fail with [`NagretError::SeverityMapping`].
    pub fn new(code: i64, message: impl Into<String>) -> NagretResult<Self> {
        let message = message.into();
        if message.is_empty() {
            return Err(NagretError::init(
                "a return code and a message are required. Valid return codes are \
                 integers 0, 1, 2 which are OK, WARNING, and CRITICAL respectively.",
            ));
        }

        let code = validate_code(Some(code))?;
        severity_label(code)?;

        tracing::debug!(code, message = %message, "created check result");
        Ok(Self {
            code,
            message,
            fields: Vec::new(),
            lines: Vec::new(),
            force_severity: false,
        })
    }

    /// Create a result from untyped input, e.g. command line arguments.
    ///
    /// A missing input or a code that is not an integer is an
    /// initialization error; an integer outside 0..=2 is a severity error.
    pub fn from_raw(code: Option<&str>, message: Option<&str>) -> NagretResult<Self> {
        let (Some(code), Some(message)) = (code, message) else {
            return Err(NagretError::init(
                "a return code and a message are required to build a check result",
            ));
        };
        let code: i64 = code.trim().parse().map_err(|_| {
            NagretError::init(format!(
                "return code '{code}' is not an integer. Valid return codes are \
                 integers 0, 1, 2 which are OK, WARNING, and CRITICAL respectively."
            ))
        })?;
        Self::new(code, message)
    }

    /// Create a result from an already valid severity.
    pub fn from_severity(severity: Severity, message: impl Into<String>) -> NagretResult<Self> {
        Self::new(severity.code(), message)
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    /// Replace the stored code. It is only checked again when rendering.
    pub fn set_code(&mut self, code: i64) {
        self.code = code;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fields(&self) -> &[PerfField] {
        &self.fields
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn force_severity(&self) -> bool {
        self.force_severity
    }

    pub fn set_force_severity(&mut self, force: bool) {
        self.force_severity = force;
    }

    /// Append a performance field; rendering keeps insertion order.
    pub fn add_field(&mut self, field: PerfField) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Append an extra output line; rendering keeps insertion order.
    pub fn add_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Severity used for rendering. An invalid stored code reports CRITICAL.
    pub fn severity(&self) -> Severity {
        match validate_code(Some(self.code)).and_then(Severity::try_from) {
            Ok(severity) => severity,
            Err(err) => {
                tracing::warn!(
                    code = self.code,
                    error = %err,
                    "invalid return code at render time, reporting CRITICAL"
                );
                Severity::Critical
            }
        }
    }

    /// Render the `|` marker followed by each field fragment.
    ///
    /// With no fields the trailer is a bare `|`.
    pub fn perf_trailer(&self) -> NagretResult<String> {
        let mut trailer = String::from("|");
        for field in &self.fields {
            write!(trailer, " {field}")?;
        }
        Ok(trailer)
    }

    /// Render the extra lines, each prefixed with `"; \n "`.
    pub fn extra_lines_block(&self) -> NagretResult<String> {
        let mut block = String::new();
        for line in &self.lines {
            write!(block, "; \n {line}")?;
        }
        Ok(block)
    }

    /// Build the final status line and exit code.
    ///
    /// Rendering does not modify the result, so calling it again yields the
    /// same output.
    pub fn render(&self) -> NagretResult<PluginOutput> {
        let severity = self.severity();
        let label = severity_label(severity.code())?;
        let trailer = self.perf_trailer()?;
        let lines = self.extra_lines_block()?;

        let message = format!("{label} {} {lines} ; {trailer}", self.message);
        tracing::debug!(
            severity = %severity,
            fields = self.fields.len(),
            lines = self.lines.len(),
            "rendered plugin output"
        );
        Ok(PluginOutput { message, severity })
    }
}
