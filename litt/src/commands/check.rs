//! Check command implementation.
//!
//! Scans each input and reports whether it tokenizes cleanly.

use std::io::Write;
use std::path::PathBuf;

use crate::commands::common::scan_files;
use crate::config::Config;
use crate::error::{LittError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source files to scan.
    pub input: Vec<PathBuf>,
    /// Worker threads; falls back to the configured count.
    pub jobs: Option<usize>,
}

/// Runs the check command, writing one status line per file to `out`.
pub fn run_check(args: CheckArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let jobs = args.jobs.unwrap_or(config.scan.jobs);

    let mut failed = 0;
    for file in scan_files(&args.input, jobs)? {
        match file.tokens {
            Ok(tokens) => {
                writeln!(out, "{}: ok ({} tokens)", file.path.display(), tokens.len())?;
            },
            Err(e) => {
                failed += 1;
                eprintln!("error: {}", e);
            },
        }
    }

    tracing::info!(files = args.input.len(), failed, "check finished");

    if failed > 0 {
        return Err(LittError::Failed {
            failed,
            total: args.input.len(),
        });
    }
    Ok(())
}
