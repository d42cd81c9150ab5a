//! Whitespace and comment skipping.

use crate::ascii::is_space;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Skips whitespace and `$` line comments.
    ///
    /// Called before scanning each token. Comments never produce tokens.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.cursor.advance_while(is_space);
            if self.cursor.current_byte() != Some(b'$') {
                return;
            }
            self.skip_line_comment();
        }
    }

    /// Skips a line comment from `$` up to, but not including, the newline.
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance_while(|b| b != b'\n');
    }
}
