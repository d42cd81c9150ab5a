//! Error types for litc-lex.
//!
//! Scanning has exactly one failure: a string literal whose closing quote is
//! missing. Every other irregularity degrades to an unknown token.

use std::fmt;

use thiserror::Error;

/// What cut an unterminated string literal short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unterminated {
    /// A newline was reached inside the literal.
    Newline,
    /// The source ended inside the literal.
    EndOfInput,
}

impl fmt::Display for Unterminated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unterminated::Newline => f.write_str("newline"),
            Unterminated::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Error type for scanning operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal was not closed before a newline or end of input.
    #[error("unterminated string literal at line {line}, column {column} (reached {cause})")]
    UnterminatedLiteral {
        /// Line where scanning failed (the literal's own line).
        line: u32,
        /// Column of the opening quote.
        column: u32,
        /// The condition that ended the literal.
        cause: Unterminated,
    },
}

impl LexError {
    /// Returns the line the error is reported at.
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnterminatedLiteral { line, .. } => *line,
        }
    }
}

/// Result type alias for scanning operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
