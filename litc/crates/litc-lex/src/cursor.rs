//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking the source buffer one byte at a time. It tracks the offset
//! of the next unread byte together with the line and column used in
//! diagnostics.

/// A cursor for traversing source code byte by byte.
///
/// `line` and `column` always describe the next byte to be consumed.
/// Lines are 1-based and columns are 0-based byte counts. Advancing past
/// `\n` moves to the next line and resets the column; any other byte moves
/// the column forward by one, so a two-byte UTF-8 character occupies two
/// columns.
///
/// # Example
///
/// ```
/// use litc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"fr x");
///
/// assert_eq!(cursor.current_byte(), Some(b'f'));
/// cursor.advance();
/// assert_eq!(cursor.current_byte(), Some(b'r'));
/// assert_eq!(cursor.column(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source buffer being traversed.
    source: &'a [u8],

    /// Offset of the next unread byte.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (0-based, in bytes).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 0,
        }
    }

    /// Returns the current byte, or `None` at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use litc_lex::cursor::Cursor;
    ///
    /// assert_eq!(Cursor::new(b"abc").current_byte(), Some(b'a'));
    /// assert_eq!(Cursor::new(b"").current_byte(), None);
    /// ```
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.source.get(self.position).copied()
    }

    /// Consumes the current byte and returns it.
    ///
    /// Updates line and column tracking. Returns `None` and does nothing if
    /// already at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use litc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"a\nb");
    /// assert_eq!(cursor.advance(), Some(b'a'));
    /// assert_eq!(cursor.advance(), Some(b'\n'));
    /// assert_eq!((cursor.line(), cursor.column()), (2, 0));
    /// ```
    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.current_byte()?;
        self.position += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    /// Advances while `predicate` holds for the current byte.
    ///
    /// Stops at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use litc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"123abc");
    /// cursor.advance_while(|b| b.is_ascii_digit());
    /// assert_eq!(cursor.current_byte(), Some(b'a'));
    /// ```
    pub fn advance_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while let Some(b) = self.current_byte() {
            if !predicate(b) {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (0-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the bytes between `start` and the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use litc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"yeet 5");
    /// let start = cursor.position();
    /// cursor.advance_while(|b| b.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), b"yeet");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.position]
    }
}
