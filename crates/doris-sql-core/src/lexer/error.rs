//! Lexical errors.

use std::fmt;

use super::{Location, Span};

/// What went wrong while scanning a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A string literal without its closing quote.
    UnterminatedString,
    /// A backtick-quoted identifier without its closing backtick.
    UnterminatedIdentifier,
    /// A `/* ... */` comment that never closes.
    UnterminatedComment,
    /// A backslash with nothing after it.
    InvalidEscape,
    /// A numeric literal running into letters, or an empty exponent/hex part.
    InvalidNumber(String),
    /// A character that cannot start any token.
    UnexpectedCharacter(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => f.write_str("unterminated string literal"),
            Self::UnterminatedIdentifier => f.write_str("unterminated quoted identifier"),
            Self::UnterminatedComment => f.write_str("unterminated block comment"),
            Self::InvalidEscape => f.write_str("invalid escape sequence at end of input"),
            Self::InvalidNumber(text) => write!(f, "invalid numeric literal `{text}`"),
            Self::UnexpectedCharacter(c) => write!(f, "unexpected character `{c}`"),
        }
    }
}

/// A malformed token. Lexing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// The offending text.
    pub span: Span,
    /// Where the offending token starts.
    pub location: Location,
}

impl LexError {
    #[must_use]
    pub const fn new(kind: LexErrorKind, span: Span, location: Location) -> Self {
        Self {
            kind,
            span,
            location,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lexical error at {}: {}", self.location, self.kind)
    }
}

impl std::error::Error for LexError {}
