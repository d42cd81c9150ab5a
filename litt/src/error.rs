//! Error handling module for the litt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use litc_lex::LexError;
use thiserror::Error;

/// Main error type for the litt CLI application.
#[derive(Error, Debug)]
pub enum LittError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        /// The file that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Error when a source file fails to scan.
    #[error("{}: {source}", .path.display())]
    Lex {
        /// The file being scanned.
        path: PathBuf,
        /// Underlying scanner error.
        source: LexError,
    },

    /// Error when one or more inputs failed; each was already reported.
    #[error("{failed} of {total} file(s) failed")]
    Failed {
        /// Number of inputs that failed.
        failed: usize,
        /// Number of inputs processed.
        total: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LittError.
pub type Result<T> = std::result::Result<T, LittError>;
