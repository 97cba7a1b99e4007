//! recovergoroutine CLI
//!
//! Reports goroutines that can crash the process with an unrecovered panic.
//!
//! # Usage
//!
//! ```bash
//! # Lint the current module
//! recovergoroutine ./...
//!
//! # Treat `(*Guard).Recover` as a recovery call
//! recovergoroutine --recover Recover ./internal
//!
//! # Machine-readable output
//! recovergoroutine --format json .
//! ```
//!
//! Exit status: 0 clean, 3 diagnostics reported, 1 error.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use recovergoroutine::api::{render, ANALYZER_DOC};
use recovergoroutine::config::RECOVER_OPTION_HELP;
use recovergoroutine::{Analyzer, AnalyzerConfig, OutputFormat, RecoverError};

#[derive(Parser)]
#[command(name = "recovergoroutine")]
#[command(about = ANALYZER_DOC, long_about = None)]
struct Cli {
    /// Files or directories to analyze (`dir/...` is accepted and means `dir`)
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    #[arg(long, value_name = "NAME", help = RECOVER_OPTION_HELP)]
    recover: Option<String>,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not analyze `_test.go` files
    #[arg(long)]
    skip_tests: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

const EXIT_CLEAN: u8 = 0;
const EXIT_DIAGNOSTICS: u8 = 3;
const EXIT_ERROR: u8 = 1;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = run(cli, &mut std::io::stdout().lock());
    if let Err(err) = &result {
        eprintln!("recovergoroutine: {}", err);
    }
    ExitCode::from(exit_status(&result))
}

fn exit_status(result: &Result<bool, RecoverError>) -> u8 {
    match result {
        Ok(true) => EXIT_CLEAN,
        Ok(false) => EXIT_DIAGNOSTICS,
        Err(_) => EXIT_ERROR,
    }
}

/// Returns whether the run was clean
fn run(cli: Cli, out: &mut impl Write) -> Result<bool, RecoverError> {
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::from_yaml_file(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(name) = cli.recover {
        config = config.with_recover(name)?;
    }
    if cli.skip_tests {
        config = config.with_skip_tests(true);
    }

    let paths: Vec<PathBuf> = cli.paths.iter().map(|p| strip_ellipsis(p)).collect();
    let report = Analyzer::new(config).run_paths(&paths)?;

    let output = render(&report.diagnostics, cli.format)
        .map_err(|e| RecoverError::io("<stdout>", e.into()))?;
    out.write_all(output.as_bytes())
        .map_err(|e| RecoverError::io("<stdout>", e))?;
    Ok(report.is_clean())
}

/// `./...` → `.`, `pkg/...` → `pkg`; the walk is recursive anyway
fn strip_ellipsis(path: &Path) -> PathBuf {
    match path.to_str().and_then(|p| p.strip_suffix("...")) {
        Some("") | Some("./") => PathBuf::from("."),
        Some(prefix) => PathBuf::from(prefix.trim_end_matches('/')),
        None => path.to_path_buf(),
    }
}
