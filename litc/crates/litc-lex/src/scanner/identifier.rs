//! Identifier and keyword scanning.

use crate::ascii::is_ident_continue;
use crate::token::{Keyword, Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an identifier or keyword.
    ///
    /// Consumes a maximal run of `[A-Za-z0-9_]`, then looks the text up in
    /// the fixed keyword table.
    ///
    /// # Returns
    ///
    /// A [`TokenKind::Keyword`] token for `fr`, `cap` and `yeet`, otherwise
    /// a [`TokenKind::Identifier`] token.
    pub(crate) fn scan_identifier(&mut self) -> Token {
        self.cursor.advance_while(is_ident_continue);

        let text = self.token_text();
        let kind = match Keyword::from_ident(&text) {
            Some(_) => TokenKind::Keyword,
            None => TokenKind::Identifier,
        };
        self.make_token(kind, text)
    }
}
