//! # doris-sql-core
//!
//! A hand-written parser for the Doris/MySQL SQL dialect.
//!
//! This crate provides:
//! - A lexer with case-insensitive keywords and MySQL string, comment and
//!   variable syntax
//! - A recursive-descent parser with an explicit precedence ladder for
//!   expressions
//! - A typed syntax tree covering queries, DML, DDL, bulk loads and
//!   administrative statements, printable back to canonical SQL
//! - A listener-based tree walker and a statement classifier
//!
//! ## Parsing
//!
//! ```rust
//! use doris_sql_core::{parse, Category};
//!
//! let parsed = parse("CREATE TABLE t (id INT) DISTRIBUTED BY HASH (id); SELECT * FROM t").unwrap();
//! assert_eq!(parsed.len(), 2);
//! assert_eq!(parsed[0].category, Category::Create);
//! assert_eq!(parsed[1].statement.to_string(), "SELECT * FROM t");
//! ```
//!
//! Statements the grammar recognizes by their leading keyword but does not
//! model are kept as [`ast::Unsupported`] with their original text:
//!
//! ```rust
//! use doris_sql_core::{ast::Statement, parse_statement};
//!
//! let stmt = parse_statement("LOCK TABLES t READ").unwrap();
//! assert!(matches!(stmt, Statement::Unsupported(_)));
//! ```
//!
//! ## Walking the tree
//!
//! ```rust
//! use doris_sql_core::{parse_statement, visit::referenced_tables};
//!
//! let stmt = parse_statement("SELECT a FROM db.t1 JOIN t2 ON t1.id = t2.id").unwrap();
//! let tables: Vec<String> = referenced_tables(&stmt).iter().map(ToString::to_string).collect();
//! assert_eq!(tables, ["db.t1", "t2"]);
//! ```

pub mod ast;
pub mod classify;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod visit;

pub use ast::{Expr, Statement};
pub use classify::{classify, Category};
pub use config::ParserConfig;
pub use error::{Error, Result};
pub use lexer::{tokenize, Keyword, Lexer, Location, Span, Token, TokenKind};
pub use parser::{ParsedStatement, Parser, SyntaxError};
pub use visit::{walk, walk_all, Handlers, Listener, Node, NodeKind};

/// Parses `sql` with the default configuration.
///
/// Input holding only whitespace, comments and `;` yields no statements.
///
/// # Errors
///
/// Returns the first lexical or syntax error.
pub fn parse(sql: &str) -> Result<Vec<ParsedStatement>> {
    parse_with_config(sql, &ParserConfig::default())
}

/// Parses `sql` with an explicit configuration.
///
/// # Errors
///
/// Returns the first lexical or syntax error.
pub fn parse_with_config(sql: &str, config: &ParserConfig) -> Result<Vec<ParsedStatement>> {
    Parser::new(sql, config)?.parse_statements()
}

/// Parses `sql` into bare statements.
///
/// # Errors
///
/// Returns the first lexical or syntax error.
pub fn parse_statements(sql: &str) -> Result<Vec<Statement>> {
    Ok(parse(sql)?.into_iter().map(|p| p.statement).collect())
}

/// Parses exactly one statement; a trailing `;` is allowed.
///
/// # Errors
///
/// Fails on empty input, on more than one statement, or on any lexical or
/// syntax error.
pub fn parse_statement(sql: &str) -> Result<Statement> {
    Parser::new(sql, &ParserConfig::default())?.parse_single_statement()
}
