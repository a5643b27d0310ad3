//! Crate-level error type.

use thiserror::Error;

use crate::lexer::{LexError, Location, Span};
use crate::parser::SyntaxError;

/// Every way a parse can fail. The first failure aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0}")]
    Lexical(#[from] LexError),

    #[error("{0}")]
    Syntax(#[from] SyntaxError),

    #[error("nesting too deep at {location}: limit is {limit}")]
    TooDeep {
        limit: usize,
        span: Span,
        location: Location,
    },

    #[error("invalid parser configuration: {0}")]
    Config(String),
}

impl Error {
    /// Position of the failure, if it came from the source text.
    #[must_use]
    pub const fn location(&self) -> Option<Location> {
        match self {
            Self::Lexical(err) => Some(err.location),
            Self::Syntax(err) => Some(err.location),
            Self::TooDeep { location, .. } => Some(*location),
            Self::Config(_) => None,
        }
    }

    /// Byte span of the failure, if it came from the source text.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Lexical(err) => Some(err.span),
            Self::Syntax(err) => Some(err.span),
            Self::TooDeep { span, .. } => Some(*span),
            Self::Config(_) => None,
        }
    }

    /// 1-based line of the failure; 0 for configuration errors.
    #[must_use]
    pub fn line(&self) -> usize {
        self.location().map_or(0, |l| l.line)
    }

    /// 1-based column of the failure; 0 for configuration errors.
    #[must_use]
    pub fn column(&self) -> usize {
        self.location().map_or(0, |l| l.column)
    }

    /// The syntax error, if this is one.
    #[must_use]
    pub const fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, Error>;
