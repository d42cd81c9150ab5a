//! Litt CLI - command-line front end for the LitCode scanner.
//!
//! This is the main entry point for the litt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::{Config, OutputFormat};
use error::{LittError, Result};

/// Litt - scan LitCode sources into tokens
#[derive(Parser, Debug)]
#[command(name = "litt")]
#[command(author = "LitCode Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan LitCode sources into tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LITT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LITT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LITT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the litt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each file
    Tokens(TokensCommand),

    /// Check that each file scans without errors
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to scan
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave the end-of-file token out of the dump
    #[arg(long)]
    no_eof: bool,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to scan
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Main entry point for the litt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Per-file errors were already reported by the command.
        Err(LittError::Failed { .. }) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;
    let config = load_config(cli.config.as_deref())?;
    execute_command(cli.command, &config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token dumps on stdout.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LittError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                input: args.input,
                format: args.format,
                no_eof: args.no_eof,
                jobs: args.jobs,
            };
            run_tokens(tokens_args, config, &mut out)?;
        },
        Commands::Check(args) => {
            let check_args = CheckArgs {
                input: args.input,
                jobs: args.jobs,
            };
            run_check(check_args, config, &mut out)?;
        },
    }

    out.flush()?;
    Ok(())
}
