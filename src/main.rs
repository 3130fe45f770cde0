//! nagret CLI - monitoring plugin output builder
//!
//! Usage: nagret <COMMAND>
//!
//! Commands:
//!   emit    Print a status line and exit with its status code
//!   dump    Show every attribute of performance fields (debugging)
//!   labels  List status codes and their labels
//!
//! Any failure exits with the configured error code (UNKNOWN by default),
//! never with 1 or 2, which the framework would read as WARNING/CRITICAL.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use nagret::config::{Config, OutputFormat};
use nagret::{logging, CheckResult, PerfField, Severity};

/// nagret - monitoring plugin output builder
#[derive(Parser, Debug)]
#[command(name = "nagret")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv), logged to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a nagret.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a status line and exit with its status code
    Emit {
        /// Status code: 0 (OK), 1 (WARNING) or 2 (CRITICAL)
        #[arg(short, long, allow_hyphen_values = true)]
        code: String,

        /// Status message
        #[arg(short, long)]
        message: String,

        /// Performance field: label=value[unit][;warn[;crit[;min[;max]]]]
        #[arg(short, long = "perf")]
        perf: Vec<String>,

        /// Extra output line, appended after the message
        #[arg(short, long = "line")]
        lines: Vec<String>,

        /// Print a JSON object instead of the status line
        #[arg(long)]
        json: bool,
    },

    /// Show every attribute of performance fields (debugging)
    Dump {
        /// Performance field: label=value[unit][;warn[;crit[;min[;max]]]]
        #[arg(short, long = "perf", required = true)]
        perf: Vec<String>,
    },

    /// List status codes and their labels
    Labels,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version go to stdout and exit 0
            if !err.use_stderr() {
                err.exit();
            }
            let _ = err.print();
            std::process::exit(fallback_exit_code());
        }
    };

    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, warnings) = match Config::resolve(cli.config.as_deref(), &working_dir) {
        Ok(resolved) => resolved,
        Err(err) => {
            println!("UNKNOWN - {err}");
            std::process::exit(fallback_exit_code());
        }
    };

    logging::init(&config.logging.level, cli.verbose);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let outcome = match cli.command {
        Commands::Emit {
            code,
            message,
            perf,
            lines,
            json,
        } => cmd_emit(&code, &message, &perf, lines, json, &config),
        Commands::Dump { perf } => cmd_dump(&perf),
        Commands::Labels => cmd_labels(),
    };

    match outcome {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::error!("{err:?}");
            println!("UNKNOWN - {err:#}");
            std::process::exit(i32::from(config.errors.exit_code));
        }
    }
}

fn cmd_emit(
    code: &str,
    message: &str,
    perf: &[String],
    lines: Vec<String>,
    json: bool,
    config: &Config,
) -> Result<i32> {
    let mut result = CheckResult::from_raw(Some(code), Some(message))
        .context("cannot build check result")?;
    for field in parse_fields(perf)? {
        result.add_field(field);
    }
    for line in lines {
        result.add_line(line);
    }

    let output = result.render()?;
    let format = if json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match format {
        OutputFormat::Text => output.print_and_exit(),
        OutputFormat::Json => {
            let event = serde_json::json!({
                "message": output.message,
                "code": output.exit_code(),
                "label": output.severity.as_str(),
            });
            println!("{}", serde_json::to_string(&event)?);
            Ok(output.exit_code())
        }
    }
}

fn cmd_dump(perf: &[String]) -> Result<i32> {
    for field in parse_fields(perf)? {
        print!("{}", field.dump());
    }
    Ok(0)
}

fn cmd_labels() -> Result<i32> {
    for severity in Severity::ALL {
        println!("{} {}", severity.code(), severity);
    }
    Ok(0)
}

fn parse_fields(specs: &[String]) -> Result<Vec<PerfField>> {
    specs
        .iter()
        .map(|spec| {
            spec.parse::<PerfField>()
                .with_context(|| format!("invalid --perf '{spec}'"))
        })
        .collect()
}

/// Error exit code before the config file is loaded
fn fallback_exit_code() -> i32 {
    i32::from(Config::default().with_env_overrides().errors.exit_code)
}
