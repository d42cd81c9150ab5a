//! litc-lex - Lexical Scanner for the LitCode Scripting Language
//!
//! This crate turns LitCode source text into a flat, ordered sequence of
//! classified tokens for a downstream parser. Scanning either produces the
//! whole stream, terminated by a single end-of-file token, or fails with a
//! located error.
//!
//! # Example Usage
//!
//! ```
//! use litc_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("fr x yeet 5").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[1].lexeme, "x");
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
//!
//! // Or drive the scanner one token at a time
//! let mut scanner = litc_lex::Scanner::new("a==b");
//! assert_eq!(scanner.next_token().unwrap().lexeme, "a");
//! assert_eq!(scanner.next_token().unwrap().lexeme, "=");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kind and keyword definitions
//! - [`scanner`] - Scanner and its sub-scanners
//! - [`cursor`] - Byte cursor for source traversal
//! - [`ascii`] - ASCII character classes used for dispatch
//! - [`error`] - Scanning errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `fr` (if), `cap` (else), `yeet` (return). Matched exactly and
//! case-sensitively.
//!
//! ## Identifiers
//!
//! `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Number**: a run of ASCII digits (`42`). Signs, fractions and
//!   exponents are not part of the literal.
//! - **String**: `"hello"`. No escapes, no newlines.
//!
//! ## Symbols
//!
//! Every ASCII punctuation character is its own token; `==` is two symbols.
//!
//! ## Comments
//!
//! `$` to end of line. Comments are dropped from the stream.
//!
//! ## Special
//!
//! - **EndOfFile**: End of input marker
//! - **Unknown**: One byte outside every class above. Each byte of a
//!   non-ASCII character is its own unknown token, and columns count bytes.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult, Unterminated};
pub use scanner::Scanner;
pub use token::{Keyword, Token, TokenKind};

/// Scans `source` into a token list ending with one end-of-file token.
///
/// Shorthand for `Scanner::new(source).tokenize()`. The source may be any
/// byte buffer, including one that is not valid UTF-8.
pub fn tokenize<S: AsRef<[u8]> + ?Sized>(source: &S) -> LexResult<Vec<Token>> {
    Scanner::new(source).tokenize()
}
