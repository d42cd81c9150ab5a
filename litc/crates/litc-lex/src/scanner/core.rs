//! Core scanner implementation.
//!
//! This module contains the main Scanner struct, the dispatch on the first
//! character of each token, and the `tokenize` drain loop.

use tracing::{debug, trace};

use crate::ascii::{is_ident_start, is_symbol};
use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::token::{Token, TokenKind};

/// Decodes a lexeme, replacing bytes that are not valid UTF-8.
pub(crate) fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Scanner for LitCode source text.
///
/// The scanner owns a [`Cursor`] over an immutable source buffer and turns
/// it into [`Token`]s by looking at the first character of each token and
/// dispatching to the matching sub-scanner.
///
/// # Example
///
/// ```
/// use litc_lex::{Scanner, TokenKind};
///
/// let tokens = Scanner::new("fr x yeet 5").tokenize().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Keyword,
///         TokenKind::Identifier,
///         TokenKind::Keyword,
///         TokenKind::Number,
///         TokenKind::EndOfFile,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    pub(crate) token_line: u32,

    /// Column where the current token starts (0-based).
    pub(crate) token_column: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner over a source buffer.
    ///
    /// Accepts anything byte-like (`&str`, `&[u8]`, `&Vec<u8>`); the source
    /// does not have to be valid UTF-8.
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'a S) -> Self {
        Self {
            cursor: Cursor::new(source.as_ref()),
            token_start: 0,
            token_line: 1,
            token_column: 0,
        }
    }

    /// Scans the whole source into a token list.
    ///
    /// The result always ends with exactly one [`TokenKind::EndOfFile`]
    /// token. An unterminated string literal aborts the scan and no partial
    /// list is returned.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }

        debug!(
            tokens = tokens.len(),
            lines = self.cursor.line(),
            "tokenized source"
        );
        Ok(tokens)
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// byte. Once the source is exhausted this returns an end-of-file
    /// token, on this call and every later one.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace_and_comments();
        self.start_token();

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::EndOfFile, String::new()));
        }

        let token = match self.cursor.current_byte() {
            Some(b) if b.is_ascii_digit() => self.scan_number(),
            Some(b) if is_ident_start(b) => self.scan_identifier(),
            Some(b'"') => self.scan_string()?,
            Some(b) if is_symbol(b) => self.scan_symbol(),
            _ => self.scan_unknown(),
        };

        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, column = token.column);
        Ok(token)
    }

    /// Emits a one-byte unknown token and moves past it.
    ///
    /// The lexeme is the byte read as a Latin-1 character, so every byte of
    /// a multi-byte UTF-8 sequence gets its own token.
    fn scan_unknown(&mut self) -> Token {
        let b = self.cursor.advance().unwrap_or(0);
        debug!(
            line = self.token_line,
            column = self.token_column,
            "unrecognized byte {:#04x}",
            b
        );
        self.make_token(TokenKind::Unknown, char::from(b).to_string())
    }

    /// Records the cursor position as the start of the next token.
    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_line = self.cursor.line();
        self.token_column = self.cursor.column();
    }

    /// Returns the text of the current token so far.
    ///
    /// Identifier, number and symbol tokens are pure ASCII here.
    pub(crate) fn token_text(&self) -> String {
        lossy(self.cursor.slice_from(self.token_start))
    }

    /// Builds a token positioned at the start of the current token.
    pub(crate) fn make_token(&self, kind: TokenKind, lexeme: String) -> Token {
        Token::new(kind, lexeme, self.token_line, self.token_column)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (0-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next character to be scanned.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}
