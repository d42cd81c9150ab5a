//! Punctuation scanning.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans exactly one ASCII punctuation byte as a symbol.
    ///
    /// Multi-character operators are not recognized here; `<=` is two
    /// symbols and it is up to the parser to recombine adjacent ones.
    pub(crate) fn scan_symbol(&mut self) -> Token {
        self.cursor.advance();
        let text = self.token_text();
        self.make_token(TokenKind::Symbol, text)
    }
}
