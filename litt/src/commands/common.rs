//! Common types and utilities for litt commands.

use std::path::{Path, PathBuf};

use litc_lex::Token;
use rayon::prelude::*;

use crate::error::{LittError, Result};

/// The outcome of scanning one input file.
#[derive(Debug)]
pub struct ScannedFile {
    /// Path the source was read from.
    pub path: PathBuf,
    /// The token stream, or why it could not be produced.
    pub tokens: Result<Vec<Token>>,
}

/// Reads and scans a single file.
///
/// The file is scanned as raw bytes, so sources that are not valid UTF-8
/// (Latin-1 comments, stray bytes) still scan.
pub fn scan_file(path: &Path) -> Result<Vec<Token>> {
    let bytes = std::fs::read(path).map_err(|source| LittError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    litc_lex::tokenize(&bytes).map_err(|source| {
        tracing::debug!(path = %path.display(), line = source.line(), "scan failed");
        LittError::Lex {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Scans every file in parallel and returns the results in input order.
///
/// `jobs == 0` uses rayon's default thread count.
pub fn scan_files(paths: &[PathBuf], jobs: usize) -> Result<Vec<ScannedFile>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| LittError::Config(format!("Failed to start worker pool: {}", e)))?;

    tracing::debug!(files = paths.len(), threads = pool.current_num_threads(), "scanning");

    let scanned: Vec<ScannedFile> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| ScannedFile {
                path: path.clone(),
                tokens: scan_file(path),
            })
            .collect()
    });
    Ok(scanned)
}
