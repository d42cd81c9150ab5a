//! String literal scanning.
//!
//! Strings are delimited by `"` and taken verbatim: there are no escape
//! sequences and a literal may not span lines.

use crate::error::{LexError, LexResult, Unterminated};
use super::core::lossy;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a string literal starting at the opening quote.
    ///
    /// # Returns
    ///
    /// A [`TokenKind::StringLiteral`] token whose lexeme is the body
    /// between the quotes. The body is taken byte for byte; bytes that are
    /// not valid UTF-8 are replaced with `U+FFFD` in the lexeme.
    ///
    /// # Errors
    ///
    /// [`LexError::UnterminatedLiteral`] if a newline or the end of input is
    /// reached before the closing quote. The newline itself is not consumed.
    pub(crate) fn scan_string(&mut self) -> LexResult<Token> {
        self.cursor.advance();
        let body_start = self.cursor.position();

        loop {
            match self.cursor.current_byte() {
                Some(b'"') => break,
                Some(b'\n') => return Err(self.unterminated(Unterminated::Newline)),
                None => return Err(self.unterminated(Unterminated::EndOfInput)),
                Some(_) => {
                    self.cursor.advance();
                },
            }
        }

        let body = lossy(self.cursor.slice_from(body_start));
        self.cursor.advance();
        Ok(self.make_token(TokenKind::StringLiteral, body))
    }

    fn unterminated(&self, cause: Unterminated) -> LexError {
        LexError::UnterminatedLiteral {
            line: self.cursor.line(),
            column: self.token_column,
            cause,
        }
    }
}
