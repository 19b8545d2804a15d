//! Command-line interface for palcheck
//!
//! Parses flags, resolves configuration, sets up logging, and runs one
//! palindrome check against stdin/stdout.

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::PossibleValuesParser;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use strum::VariantNames;
use tracing::debug;

use crate::logging::init_tracing;
use crate::types::ErrorKind;
use crate::report::ERROR_SCHEMA_VERSION;
use crate::{
    CliArgs, Config, ExitCode, IntWidth, OutputMode, OverflowPolicy, PalcheckError,
    PalindromeChecker, UserFriendlyError, emit_jcs,
};

/// palcheck - report whether an integer's decimal digits form a palindrome
#[derive(Parser, Debug)]
#[command(name = "palcheck")]
#[command(about = "Read an integer from stdin and report whether it is a palindrome")]
#[command(long_about = r#"
palcheck prompts for one integer, reverses its decimal digits by repeated
division (truncating toward zero), and reports whether the reversal equals the
original value.

EXAMPLES:
  # Check a number typed at the prompt
  palcheck

  # Check a piped number
  echo 12321 | palcheck

  # Machine-readable output (no prompt)
  echo -121 | palcheck --json

  # Treat an unrepresentable reversal as an error
  echo 1000000009 | palcheck --overflow error

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  Config file is --config, else $PALCHECK_CONFIG, else the nearest
  .palcheck/config.toml found searching upward from the current directory

EXIT CODES:
  0 check completed, 2 bad arguments or configuration,
  3 input is not an integer of the selected width, 4 reversal overflowed
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Integer width to parse and reverse in
    #[arg(long, value_parser = PossibleValuesParser::new(IntWidth::VARIANTS.iter().copied()))]
    pub width: Option<String>,

    /// What to do when the reversal does not fit the width
    #[arg(long, value_parser = PossibleValuesParser::new(OverflowPolicy::VARIANTS.iter().copied()))]
    pub overflow: Option<String>,

    /// Emit the result as canonical JSON instead of the prompt and message
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the effective configuration and exit without reading input
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    fn to_cli_args(&self) -> CliArgs {
        CliArgs {
            config_path: self.config.clone(),
            width: self.width.clone(),
            overflow: self.overflow.clone(),
            verbose: Some(self.verbose),
            json: Some(self.json),
        }
    }
}

/// Error body emitted on stdout in JSON mode.
#[derive(Debug, Serialize)]
struct ErrorOutput {
    schema_version: &'static str,
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    kind: ErrorKind,
    message: String,
}

/// Entry point used by `main`. Returns the exit code on failure.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();
    run_with(&cli, &mut io::stdin().lock(), &mut io::stdout().lock())
}

/// Run with explicit streams. Errors are reported to stderr (and `output` in
/// JSON mode) before the exit code is returned.
pub fn run_with<R: io::BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    output: &mut W,
) -> Result<(), ExitCode> {
    let config = match Config::discover(&cli.to_cli_args()) {
        Ok(config) => config,
        Err(err) => return Err(report_error(&err, cli.json, output)),
    };

    // Initialized after discovery so `verbose` from a config file applies.
    // A second initialization (e.g. in tests) is harmless.
    let _ = init_tracing(config.verbose);
    debug!(
        config_path = ?config.config_path,
        config_source = ?config.source_attribution.get("config_path"),
        width = %config.width,
        overflow = %config.overflow,
        "Resolved configuration"
    );

    if cli.print_config {
        return print_config(&config, output).map_err(|e| {
            eprintln!("Error: {e:#}");
            ExitCode::INTERNAL
        });
    }

    let mode = if config.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let checker = PalindromeChecker::new(config.width, config.overflow).with_mode(mode);

    match checker.run(input, output) {
        Ok(_) => Ok(()),
        Err(err) => Err(report_error(&err, config.json, output)),
    }
}

fn report_error<W: Write>(err: &PalcheckError, json: bool, output: &mut W) -> ExitCode {
    debug!(category = %err.category(), kind = ?err.kind(), "Reporting error");
    eprint!("{}", err.display_for_user());

    if json {
        let body = ErrorOutput {
            schema_version: ERROR_SCHEMA_VERSION,
            error: ErrorBody {
                kind: err.kind(),
                message: err.to_string(),
            },
        };
        let written = emit_jcs(&body)
            .and_then(|line| writeln!(output, "{line}").map_err(anyhow::Error::from));
        if let Err(e) = written {
            // The original error's exit code still wins.
            eprintln!("Error: failed to write JSON error body: {e:#}");
        }
    }

    err.to_exit_code()
}

fn print_config<W: Write>(config: &Config, output: &mut W) -> Result<()> {
    let effective = config.effective_config();

    if config.json {
        let line = emit_jcs(&effective).context("Failed to encode effective configuration")?;
        writeln!(output, "{line}").context("Failed to write effective configuration")?;
        return Ok(());
    }

    for (key, entry) in &effective {
        writeln!(output, "{key} = {} ({})", entry.value, entry.source.label())
            .context("Failed to write effective configuration")?;
    }
    Ok(())
}
