//! ASCII character classes used by the scanner's dispatch.
//!
//! Classification works on single bytes and is ASCII-only: every byte of
//! a multi-byte character falls outside all of these classes and is
//! reported as an unknown token.

/// Checks if a byte is whitespace skipped between tokens.
///
/// Matches space, tab, newline, vertical tab, form feed and carriage return.
///
/// # Example
///
/// ```
/// use litc_lex::ascii::is_space;
///
/// assert!(is_space(b' '));
/// assert!(is_space(b'\x0B'));
/// assert!(!is_space(0xA0)); // Latin-1 no-break space is not ASCII
/// ```
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Checks if a byte can start an identifier: `[A-Za-z_]`.
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte can continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Checks if a byte is scanned as a single-character symbol.
///
/// Any printable ASCII character that is not a letter, digit or space.
/// `"` and `$` are in this class too but the scanner dispatches them to the
/// string and comment routines before reaching the symbol case.
///
/// # Example
///
/// ```
/// use litc_lex::ascii::is_symbol;
///
/// assert!(is_symbol(b'='));
/// assert!(is_symbol(b'_'));
/// assert!(!is_symbol(b'a'));
/// assert!(!is_symbol(b'\x07'));
/// ```
#[inline]
pub fn is_symbol(b: u8) -> bool {
    b.is_ascii_punctuation()
}
