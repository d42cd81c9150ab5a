//! Number literal scanning.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a number literal.
    ///
    /// A number is a maximal run of ASCII digits. There is no sign, decimal
    /// point or exponent: `-1.5` scans as `-`, `1`, `.`, `5`.
    pub(crate) fn scan_number(&mut self) -> Token {
        self.cursor.advance_while(|b| b.is_ascii_digit());
        let text = self.token_text();
        self.make_token(TokenKind::Number, text)
    }
}
