//! Tokens command implementation.
//!
//! Dumps the token stream of each input file, as text or JSON.

use std::io::Write;
use std::path::PathBuf;

use litc_lex::Token;

use crate::commands::common::scan_files;
use crate::config::{Config, OutputFormat};
use crate::error::{LittError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Source files to scan.
    pub input: Vec<PathBuf>,
    /// Output format; falls back to the configured one.
    pub format: Option<OutputFormat>,
    /// Drop the end-of-file token from the dump.
    pub no_eof: bool,
    /// Worker threads; falls back to the configured count.
    pub jobs: Option<usize>,
}

/// Runs the tokens command, writing dumps to `out`.
///
/// Files that fail to load or scan are reported on stderr and the command
/// returns [`LittError::Failed`] after all files were processed.
pub fn run_tokens(args: TokensArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let format = args.format.unwrap_or(config.output.format);
    let show_eof = config.output.show_eof && !args.no_eof;
    let jobs = args.jobs.unwrap_or(config.scan.jobs);
    let with_headers = args.input.len() > 1;

    let mut failed = 0;
    for file in scan_files(&args.input, jobs)? {
        match file.tokens {
            Ok(tokens) => {
                let tokens: Vec<&Token> =
                    tokens.iter().filter(|t| show_eof || !t.is_eof()).collect();
                if with_headers && format == OutputFormat::Text {
                    writeln!(out, "==> {} <==", file.path.display())?;
                }
                write_tokens(out, &tokens, format)?;
            },
            Err(e) => {
                failed += 1;
                eprintln!("error: {}", e);
            },
        }
    }

    if failed > 0 {
        return Err(LittError::Failed {
            failed,
            total: args.input.len(),
        });
    }
    Ok(())
}

/// Writes one file's tokens in the requested format.
fn write_tokens(out: &mut impl Write, tokens: &[&Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, tokens)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
