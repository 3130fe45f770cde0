//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NagretError, NagretResult};

use super::types::{Config, OutputFormat};

/// File looked up in the working directory when no `--config` is given
pub const LOCAL_CONFIG_FILE: &str = "nagret.toml";

/// Keys a config file may contain, used for "did you mean" hints
const KNOWN_KEYS: &[&str] = &["output", "format", "errors", "exit_code", "logging", "level"];

/// Non-fatal configuration problem, reported once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key in a config file that nagret does not read
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// `NAGRET_*` variable whose value was ignored
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{key}' in {}", file.display())?;
                if let Some(line) = line {
                    write!(f, ":{line}")?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{suggestion}'?)")?;
                }
                Ok(())
            }
            Self::InvalidEnv {
                var,
                value,
                expected,
            } => write!(f, "ignoring {var}='{value}', expected {expected}"),
        }
    }
}

/// Load configuration and collect unknown keys as warnings.
pub fn load_with_warnings(path: &Path) -> NagretResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut ignored: Vec<String> = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |p| {
            ignored.push(p.to_string());
        })
        .map_err(|e| NagretError::Config {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = ignored
        .iter()
        .map(|dotted| {
            // `errors.exit_cod` reports the leaf key
            let key = dotted.rsplit('.').next().unwrap_or(dotted);
            ConfigWarning::UnknownKey {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: line_of(&content, key),
                suggestion: closest_known_key(key).map(str::to_string),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config source and apply env overrides.
///
/// An explicit path must load. Otherwise `./nagret.toml`, then
/// `<config dir>/nagret/config.toml`, then built-in defaults.
pub fn resolve(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> NagretResult<(Config, Vec<ConfigWarning>)> {
    resolve_with(explicit, working_dir, user_config_path(), |key| {
        std::env::var(key).ok()
    })
}

/// [`resolve`] with the user config path and environment supplied.
pub(crate) fn resolve_with(
    explicit: Option<&Path>,
    working_dir: &Path,
    user_config: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> NagretResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(working_dir.join(LOCAL_CONFIG_FILE))
            .filter(|p| p.exists())
            .or_else(|| user_config.filter(|p| p.exists())),
    };

    let (config, mut warnings) = match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };
    let (config, env_warnings) = apply_overrides(config, lookup);
    warnings.extend(env_warnings);
    Ok((config, warnings))
}

/// Apply environment variable overrides (NAGRET_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok()).0
}

/// Apply overrides from `lookup`; invalid values keep the current setting.
pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();

    if let Some(format) = lookup("NAGRET_OUTPUT") {
        match format.trim().to_lowercase().as_str() {
            "text" => config.output.format = OutputFormat::Text,
            "json" => config.output.format = OutputFormat::Json,
            _ => warnings.push(ConfigWarning::InvalidEnv {
                var: "NAGRET_OUTPUT",
                value: format,
                expected: "'text' or 'json'",
            }),
        }
    }

    if let Some(code) = lookup("NAGRET_ERROR_EXIT_CODE") {
        match code.trim().parse::<u8>() {
            Ok(code) => config.errors.exit_code = code,
            Err(_) => warnings.push(ConfigWarning::InvalidEnv {
                var: "NAGRET_ERROR_EXIT_CODE",
                value: code,
                expected: "an exit status between 0 and 255",
            }),
        }
    }

    if let Some(level) = lookup("NAGRET_LOG_LEVEL") {
        if !level.trim().is_empty() {
            config.logging.level = level.trim().to_string();
        }
    }

    (config, warnings)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nagret").join("config.toml"))
}

/// 1-based line of the first `key =` assignment or `[key]` header
fn line_of(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .map(str::trim)
        .position(|line| {
            let assigned = line
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='));
            let header = line
                .strip_prefix('[')
                .and_then(|l| l.strip_suffix(']'))
                .is_some_and(|name| name.trim() == key);
            assigned || header
        })
        .map(|i| i + 1)
}

fn closest_known_key(unknown: &str) -> Option<&'static str> {
    KNOWN_KEYS
        .iter()
        .map(|known| (*known, edit_distance(unknown, known)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(known, _)| known)
}

/// Levenshtein distance over bytes, single-row variant
fn edit_distance(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ac != bc);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[b.len()]
}
