//! Parser error types.

use std::fmt;

use crate::lexer::{Location, Span, Token, TokenKind};

/// A grammar mismatch: the parser met a token none of its alternatives accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// The error message.
    pub message: String,
    /// The offending token.
    pub span: Span,
    /// Where the offending token starts.
    pub location: Location,
    /// What would have been accepted instead.
    pub expected: Vec<String>,
    /// Description of the token actually found; `None` at end of input.
    pub found: Option<String>,
}

impl SyntaxError {
    /// Creates a syntax error at `token` with a free-form message.
    #[must_use]
    pub fn new(message: impl Into<String>, token: &Token<'_>) -> Self {
        Self {
            message: message.into(),
            span: token.span,
            location: token.location,
            expected: Vec::new(),
            found: found(&token.kind),
        }
    }

    /// Creates an "unexpected token" error listing what was expected.
    #[must_use]
    pub fn unexpected(expected: &[&str], token: &Token<'_>) -> Self {
        let expected: Vec<String> = expected.iter().map(|e| String::from(*e)).collect();
        let message = match token.kind {
            TokenKind::Eof => format!("unexpected end of input, expected {}", join_expected(&expected)),
            _ => format!(
                "unexpected {}, expected {}",
                token.kind.describe(),
                join_expected(&expected)
            ),
        };
        Self {
            message,
            span: token.span,
            location: token.location,
            expected,
            found: found(&token.kind),
        }
    }
}

fn found(kind: &TokenKind) -> Option<String> {
    match kind {
        TokenKind::Eof => None,
        other => Some(other.describe()),
    }
}

fn join_expected(expected: &[String]) -> String {
    match expected {
        [] => String::from("something else"),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error at {}: {}", self.location, self.message)
    }
}

impl std::error::Error for SyntaxError {}
