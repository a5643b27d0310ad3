#![allow(dead_code)]

use doris_sql_core::ast::{
    AlterTable, CreateTable, Delete, Expr, Insert, Query, Select, SelectItem, SetExpr, Statement,
    Update,
};
use doris_sql_core::{parse_statement, parse_with_config, Error, ParserConfig};

pub fn parse(sql: &str) -> Statement {
    parse_statement(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> Error {
    match parse_statement(sql) {
        Ok(stmt) => panic!("Expected parse error for: {sql}\nGot: {stmt:?}"),
        Err(err) => err,
    }
}

pub fn parse_with(sql: &str, config: &ParserConfig) -> Vec<Statement> {
    parse_with_config(sql, config)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
        .into_iter()
        .map(|p| p.statement)
        .collect()
}

pub fn parse_query(sql: &str) -> Query {
    match parse(sql) {
        Statement::Query(q) => *q,
        other => panic!("Expected query, got {other:?}"),
    }
}

pub fn parse_select(sql: &str) -> Select {
    match parse_query(sql).body {
        SetExpr::Select(s) => *s,
        other => panic!("Expected SELECT body, got {other:?}"),
    }
}

/// The single projected expression of `SELECT <expr>`.
pub fn parse_expr(expr: &str) -> Expr {
    let mut select = parse_select(&format!("SELECT {expr}"));
    assert_eq!(select.items.len(), 1, "expected one item in SELECT {expr}");
    match select.items.remove(0) {
        SelectItem::Expr { expr, .. } => expr,
        other => panic!("Expected expression, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> Insert {
    match parse(sql) {
        Statement::Insert(i) => *i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> Update {
    match parse(sql) {
        Statement::Update(u) => *u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> Delete {
    match parse(sql) {
        Statement::Delete(d) => *d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

pub fn parse_create_table(sql: &str) -> CreateTable {
    match parse(sql) {
        Statement::CreateTable(t) => *t,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

pub fn parse_alter_table(sql: &str) -> AlterTable {
    match parse(sql) {
        Statement::AlterTable(t) => t,
        other => panic!("Expected ALTER TABLE, got {other:?}"),
    }
}

/// Verifies that `to_string()` produces a fixed point:
/// parse(sql).to_string() re-parses to the same tree and prints the
/// same string again.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
    assert_eq!(ast1, ast2, "Re-parsed tree differs for: {sql}");
}

/// Renders binary and unary nesting with explicit parentheses.
pub fn shape(expr: &Expr) -> String {
    match expr {
        Expr::Binary { left, op, right } => {
            format!("({} {} {})", shape(left), op.as_str(), shape(right))
        }
        Expr::Unary { op, operand } => format!("({} {})", op.as_str(), shape(operand)),
        Expr::Nested(inner) => shape(inner),
        Expr::IsNull { expr, negated } => {
            format!("({} IS {}NULL)", shape(expr), if *negated { "NOT " } else { "" })
        }
        Expr::Between {
            expr, low, high, ..
        } => format!("({} BETWEEN {} AND {})", shape(expr), shape(low), shape(high)),
        other => other.to_string(),
    }
}

/// Installs a test-writer subscriber so parser debug events show up in
/// failing test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
