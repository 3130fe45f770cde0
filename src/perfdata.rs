//! Performance data fields
//!
//! A [`PerfField`] is one measured quantity rendered into the status line
//! trailer as:
//!
//! ```text
//! 'label'=value[unit];[warn];[crit];[min];[max]
//! ```
//!
//! Every optional slot is always present, so a bare field renders as
//! `'label'=value;;;;`. Thresholds and bounds are passed through as text.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{NagretError, NagretResult};

/// Unit of measure accepted in a performance field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum Unit {
    /// No unit; a plain number
    #[default]
    Blank,
    Seconds,
    Milliseconds,
    Microseconds,
    Percent,
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    /// Continuous counter
    Counter,
}

impl Unit {
    pub const ALL: [Unit; 11] = [
        Unit::Blank,
        Unit::Seconds,
        Unit::Milliseconds,
        Unit::Microseconds,
        Unit::Percent,
        Unit::Bytes,
        Unit::Kilobytes,
        Unit::Megabytes,
        Unit::Gigabytes,
        Unit::Terabytes,
        Unit::Counter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "",
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Microseconds => "us",
            Self::Percent => "%",
            Self::Bytes => "B",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
            Self::Terabytes => "TB",
            Self::Counter => "c",
        }
    }
}

impl FromStr for Unit {
    type Err = NagretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| NagretError::UnitValidation { unit: s.to_string() })
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named measurement attached to a check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerfField {
    label: String,
    value: String,
    unit: Unit,
    warn: String,
    crit: String,
    min: String,
    max: String,
    /// Marks the headline metric. Not used when rendering.
    primary: bool,
}

impl PerfField {
    /// Create a field from its required label and value.
    ///
    /// Both must be non-empty once converted to text.
    pub fn new(label: impl Into<String>, value: impl ToString) -> NagretResult<Self> {
        let label = label.into();
        let value = value.to_string();
        if label.is_empty() || value.is_empty() {
            return Err(NagretError::init(
                "a performance field requires a label and a value; \
                 unit, warn, crit, min and max are optional",
            ));
        }

        tracing::trace!(label = %label, value = %value, "created perf field");
        Ok(Self {
            label,
            value,
            unit: Unit::Blank,
            warn: String::new(),
            crit: String::new(),
            min: String::new(),
            max: String::new(),
            primary: false,
        })
    }

    /// Set the unit from its textual form. Empty means no unit.
    pub fn with_unit(mut self, unit: &str) -> NagretResult<Self> {
        self.unit = unit.parse()?;
        Ok(self)
    }

    pub fn with_warn(mut self, warn: impl ToString) -> Self {
        self.warn = warn.to_string();
        self
    }

    pub fn with_crit(mut self, crit: impl ToString) -> Self {
        self.crit = crit.to_string();
        self
    }

    pub fn with_min(mut self, min: impl ToString) -> Self {
        self.min = min.to_string();
        self
    }

    pub fn with_max(mut self, max: impl ToString) -> Self {
        self.max = max.to_string();
        self
    }

    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn warn(&self) -> &str {
        &self.warn
    }

    pub fn crit(&self) -> &str {
        &self.crit
    }

    pub fn min(&self) -> &str {
        &self.min
    }

    pub fn max(&self) -> &str {
        &self.max
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Render the protocol fragment.
    ///
    /// The label is not escaped: a label containing `'` yields a malformed
    /// fragment.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Human-readable listing of every attribute, for debugging only.
    pub fn dump(&self) -> String {
        let mut out = String::from("PerfField:\n");
        for (key, value) in [
            ("label", self.label.as_str()),
            ("value", self.value.as_str()),
            ("unit", self.unit.as_str()),
            ("warn", self.warn.as_str()),
            ("crit", self.crit.as_str()),
            ("min", self.min.as_str()),
            ("max", self.max.as_str()),
        ] {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{key} = '{value}'");
        }
        out
    }
}

impl fmt::Display for PerfField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}'={}{};{};{};{};{}",
            self.label, self.value, self.unit, self.warn, self.crit, self.min, self.max
        )
    }
}

impl FromStr for PerfField {
    type Err = NagretError;

    /// Parse `label=value[unit][;warn[;crit[;min[;max]]]]`.
    ///
    /// The unit is whatever follows the numeric part of the value. A value
    /// with no numeric part (e.g. `U`) is kept whole with no unit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(';');
        let head = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();
        if rest.len() > 4 {
            return Err(NagretError::init(format!(
                "too many ';' separated slots in perf field '{s}'; expected at most warn;crit;min;max"
            )));
        }

        let (label, raw_value) = head.rsplit_once('=').ok_or_else(|| {
            NagretError::init(format!("perf field '{s}' must look like label=value"))
        })?;
        let label = label.trim();
        // One surrounding pair of quotes is syntax; any other quote is label text
        let label = label
            .strip_prefix('\'')
            .and_then(|l| l.strip_suffix('\''))
            .unwrap_or(label);
        let (value, unit) = split_value_unit(raw_value.trim());

        let mut field = PerfField::new(label, value)?.with_unit(unit)?;
        let mut slots = rest.into_iter().map(str::trim);
        field.warn = slots.next().unwrap_or_default().to_string();
        field.crit = slots.next().unwrap_or_default().to_string();
        field.min = slots.next().unwrap_or_default().to_string();
        field.max = slots.next().unwrap_or_default().to_string();
        Ok(field)
    }
}

fn split_value_unit(raw: &str) -> (&str, &str) {
    let end = raw
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
        .unwrap_or(raw.len());
    if end == 0 {
        (raw, "")
    } else {
        raw.split_at(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_label_and_value_only() {
        let field = PerfField::new("load", 3).unwrap();
        assert_eq!(field.render(), "'load'=3;;;;");
    }

    #[test]
    fn test_render_with_unit() {
        let field = PerfField::new("ddrive", 2).unwrap().with_unit("TB").unwrap();
        assert_eq!(field.render(), "'ddrive'=2TB;;;;");
    }

    #[test]
    fn test_render_all_slots() {
        let field = PerfField::new("/boot", 68)
            .unwrap()
            .with_unit("MB")
            .unwrap()
            .with_warn(88)
            .with_crit(93)
            .with_min(0)
            .with_max(98);
        assert_eq!(field.render(), "'/boot'=68MB;88;93;0;98");
    }

    #[test]
    fn test_every_allowed_unit_is_accepted() {
        for unit in ["", "s", "ms", "us", "%", "B", "KB", "MB", "GB", "TB", "c"] {
            let field = PerfField::new("x", 1).unwrap().with_unit(unit).unwrap();
            assert_eq!(field.unit().as_str(), unit);
            assert_eq!(field.render(), format!("'x'=1{unit};;;;"));
        }
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        for unit in ["kb", "PB", "sec", " ", "%%"] {
            let err = PerfField::new("x", 1).unwrap().with_unit(unit).unwrap_err();
            assert!(matches!(err, NagretError::UnitValidation { .. }), "{unit}");
            assert!(err
                .to_string()
                .contains("(blank),s,ms,us,%,B,MB,KB,GB,TB,c"));
        }
    }

    #[test]
    fn test_missing_value_is_initialization_error() {
        let err = PerfField::new("ddrive", "").unwrap_err();
        assert!(matches!(err, NagretError::Initialization { .. }));
    }

    #[test]
    fn test_missing_label_is_initialization_error() {
        let err = PerfField::new("", 1).unwrap_err();
        assert!(matches!(err, NagretError::Initialization { .. }));
    }

    #[test]
    fn test_quote_in_label_is_not_escaped() {
        // Known limitation: the fragment is malformed but still produced.
        let field = PerfField::new("it's", 1).unwrap();
        assert_eq!(field.render(), "'it's'=1;;;;");
    }

    #[test]
    fn test_primary_flag_does_not_change_rendering() {
        let plain = PerfField::new("x", 1).unwrap();
        let primary = plain.clone().with_primary(true);
        assert!(primary.is_primary());
        assert_eq!(plain.render(), primary.render());
    }

    #[test]
    fn test_dump_lists_all_attributes() {
        let field = PerfField::new("ddrive", 2)
            .unwrap()
            .with_unit("TB")
            .unwrap()
            .with_warn("1");
        insta::assert_snapshot!(field.dump().trim_end(), @r"
        PerfField:
        label = 'ddrive'
        value = '2'
        unit = 'TB'
        warn = '1'
        crit = ''
        min = ''
        max = ''
        ");
    }

    #[test]
    fn test_parse_value_with_unit_and_slots() {
        let field: PerfField = "cdrive=10GB;20;30;0;100".parse().unwrap();
        assert_eq!(field.label(), "cdrive");
        assert_eq!(field.value(), "10");
        assert_eq!(field.unit(), Unit::Gigabytes);
        assert_eq!(field.render(), "'cdrive'=10GB;20;30;0;100");
    }

    #[test]
    fn test_parse_partial_slots_and_quoted_label() {
        let field: PerfField = "'rta'=0.25ms;1".parse().unwrap();
        assert_eq!(field.render(), "'rta'=0.25ms;1;;;");
    }

    #[test]
    fn test_parse_strips_only_one_quote_pair() {
        let field: PerfField = "x'=1".parse().unwrap();
        assert_eq!(field.label(), "x'");
        assert_eq!(field.render(), "'x''=1;;;;");

        let field: PerfField = "'it's'=1".parse().unwrap();
        assert_eq!(field.label(), "it's");

        let field: PerfField = "''x''=1".parse().unwrap();
        assert_eq!(field.label(), "'x'");
    }

    #[test]
    fn test_parse_non_numeric_value_keeps_blank_unit() {
        let field: PerfField = "state=U".parse().unwrap();
        assert_eq!(field.value(), "U");
        assert_eq!(field.unit(), Unit::Blank);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "ddrive".parse::<PerfField>(),
            Err(NagretError::Initialization { .. })
        ));
        assert!(matches!(
            "ddrive=".parse::<PerfField>(),
            Err(NagretError::Initialization { .. })
        ));
        assert!(matches!(
            "ddrive=5parsecs".parse::<PerfField>(),
            Err(NagretError::UnitValidation { .. })
        ));
        assert!(matches!(
            "x=1;1;2;3;4;5".parse::<PerfField>(),
            Err(NagretError::Initialization { .. })
        ));
    }
}
