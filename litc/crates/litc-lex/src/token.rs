//! Token type definitions.
//!
//! A [`Token`] is a classified, positioned slice of source text. Tokens are
//! produced once by the scanner and never mutated afterwards.

use std::fmt;

/// The category of a token.
///
/// The set is closed. [`TokenKind::Comment`] is part of the taxonomy so that
/// downstream consumers can match on it, but the scanner elides comments and
/// never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// A name: `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword.
    Identifier,
    /// A maximal run of ASCII digits.
    Number,
    /// One of the reserved words in the [`Keyword`] table.
    Keyword,
    /// A single ASCII punctuation character.
    Symbol,
    /// The body of a `"..."` literal, quotes excluded.
    StringLiteral,
    /// A `$` line comment (never emitted).
    Comment,
    /// End of input marker.
    EndOfFile,
    /// Any character the scanner cannot classify.
    Unknown,
}

impl TokenKind {
    /// Returns the name of the kind as used in diagnostics and dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::Keyword => "Keyword",
            TokenKind::Symbol => "Symbol",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Comment => "Comment",
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words of the language.
///
/// The table is fixed; identifiers are matched against it exactly and
/// case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `fr`: conditional if.
    If,
    /// `cap`: conditional else.
    Else,
    /// `yeet`: return.
    Return,
}

impl Keyword {
    /// Looks up an identifier in the keyword table.
    ///
    /// # Example
    ///
    /// ```
    /// use litc_lex::Keyword;
    ///
    /// assert_eq!(Keyword::from_ident("fr"), Some(Keyword::If));
    /// assert_eq!(Keyword::from_ident("Fr"), None);
    /// assert_eq!(Keyword::from_ident("if"), None);
    /// ```
    pub fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "fr" => Some(Keyword::If),
            "cap" => Some(Keyword::Else),
            "yeet" => Some(Keyword::Return),
            _ => None,
        }
    }

    /// Returns the source spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "fr",
            Keyword::Else => "cap",
            Keyword::Return => "yeet",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexical token.
///
/// `line` is 1-based and `column` is 0-based; both describe the first
/// character of the token as seen when scanning of the token began.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Category of the token.
    pub kind: TokenKind,
    /// Extracted text. For string literals this is the body without quotes.
    pub lexeme: String,
    /// Line of the first character (1-based).
    pub line: u32,
    /// Column of the first character (0-based).
    pub column: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Creates the end-of-file marker at the given position.
    pub fn eof(line: u32, column: u32) -> Self {
        Self::new(TokenKind::EndOfFile, String::new(), line, column)
    }

    /// Returns true if this is the end-of-file marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Returns the canonical keyword for a [`TokenKind::Keyword`] token.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::from_ident(&self.lexeme),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {:?}",
            self.line, self.column, self.kind, self.lexeme
        )
    }
}
