//! Recursive-descent parser producing [`crate::ast`] trees.
//!
//! The grammar is split by statement family; every file adds its own
//! `impl Parser` block over the shared cursor in `parser.rs`.

mod admin;
mod ddl;
mod dml;
mod error;
mod expr;
#[allow(clippy::module_inception)]
mod parser;
mod query;
mod types;

pub use error::SyntaxError;
pub use parser::{ParsedStatement, Parser};
