//! fp-lint CLI tool.
//!
//! Usage:
//! ```bash
//! fp-lint lint [OPTIONS] [PATH]...
//! fp-lint list-rules
//! fp-lint init
//! ```
//!
//! Exit status: 0 when clean, 1 when a finding reaches `fail_on`, 2 when a
//! path could not be found, read or parsed, or the invocation itself was
//! invalid.

use clap::{Parser, Subcommand};
use fp_lint_core::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Exit status for invocation errors (unknown rule, bad config, I/O).
const INVOCATION_ERROR: u8 = 2;

/// Functional-style linter for JavaScript
#[derive(Parser)]
#[command(name = "fp-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FP_LINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint JavaScript files
    #[command(alias = "check")]
    Lint {
        /// Files or directories to lint (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format: human or machine
        #[arg(short, long, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Only run these rules, by id or code (repeatable, comma-separated)
        #[arg(short, long = "rule")]
        rules: Vec<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Lint {
            paths,
            format,
            rules,
            exclude,
        } => commands::lint::run(&commands::lint::LintArgs {
            paths,
            format,
            rules,
            exclude,
            config: cli.config,
        })
        .map(|status| status.exit_code()),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => commands::init::run(force).map(|()| ExitCode::SUCCESS),
    };

    outcome.unwrap_or_else(|e| {
        eprintln!("error: {e:#}");
        ExitCode::from(INVOCATION_ERROR)
    })
}
