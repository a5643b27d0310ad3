//! SQL lexer.
//!
//! Turns raw SQL text into a stream of typed tokens. Whitespace and
//! comments are skipped; keywords are matched case-insensitively against a
//! static table that also records which words are reserved.

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::{LexError, LexErrorKind};
pub use span::{Location, Span};
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::{tokenize, Lexer};
