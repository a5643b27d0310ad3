//! Tests for statement categories and the spans reported by `parse`.

mod common;
use common::*;

use doris_sql_core::{classify, parse as parse_batch, Category};
use pretty_assertions::assert_eq;

#[test]
fn categories_by_statement() {
    let cases = [
        ("SELECT 1", Category::Query),
        ("(SELECT 1) UNION (SELECT 2)", Category::Query),
        ("WITH x AS (SELECT 1) SELECT * FROM x", Category::Query),
        ("INSERT INTO t VALUES (1)", Category::Insert),
        ("UPDATE t SET a = 1", Category::Update),
        ("DELETE FROM t WHERE a = 1", Category::Delete),
        ("TRUNCATE TABLE t", Category::Delete),
        ("LOAD LABEL l (DATA INFILE ('x') INTO TABLE t)", Category::Load),
        ("LOAD DATA INFILE '/tmp/x' INTO TABLE t", Category::Load),
        ("EXPORT TABLE t TO 'hdfs://x/'", Category::Export),
        ("CREATE DATABASE d", Category::Create),
        ("CREATE VIEW v AS SELECT 1", Category::Create),
        ("CREATE USER 'u' IDENTIFIED BY 'p'", Category::Create),
        ("CREATE TABLE t2 LIKE t1", Category::Create),
        (
            "CREATE MATERIALIZED VIEW mv BUILD DEFERRED REFRESH AUTO ON SCHEDULE EVERY 1 DAY \
             DUPLICATE KEY (k) DISTRIBUTED BY HASH (k) BUCKETS 2 AS SELECT k FROM t",
            Category::Create,
        ),
        ("CREATE INDEX idx ON t (c) USING INVERTED", Category::Create),
        ("CREATE ROLE analyst", Category::Create),
        ("CREATE CATALOG hive PROPERTIES ('type' = 'hms')", Category::Create),
        ("ALTER TABLE t ADD COLUMN c INT", Category::Alter),
        ("ALTER SYSTEM ADD BACKEND 'h:9050'", Category::Alter),
        ("ALTER VIEW v AS SELECT a FROM t", Category::Alter),
        ("ALTER DATABASE db RENAME db2", Category::Alter),
        ("ALTER USER 'jack'@'%' IDENTIFIED BY 'new'", Category::Alter),
        ("DROP TABLE t", Category::Drop),
        ("DROP USER 'u'", Category::Drop),
        ("DROP ROLE analyst", Category::Drop),
        ("SHOW DATABASES", Category::Show),
        ("DESC t", Category::Describe),
        ("EXPLAIN t", Category::Describe),
        ("EXPLAIN SELECT 1", Category::Explain),
        ("SET @a = 1", Category::Set),
        ("SET NAMES utf8", Category::Set),
        ("SET PASSWORD FOR 'jack'@'%' = PASSWORD('123')", Category::Set),
        ("USE db", Category::Use),
        ("SWITCH hive", Category::Use),
        ("BEGIN", Category::Transaction),
        ("COMMIT", Category::Transaction),
        ("ROLLBACK", Category::Transaction),
        ("GRANT SELECT_PRIV ON *.* TO u", Category::Privilege),
        ("REVOKE SELECT_PRIV ON *.* FROM u", Category::Privilege),
        ("KILL 1", Category::Admin),
        ("ADMIN SHOW REPLICA STATUS FROM t", Category::Admin),
        ("ANALYZE TABLE t", Category::Admin),
        ("SYNC", Category::Admin),
        ("REFRESH CATALOG hive", Category::Admin),
        ("RECOVER TABLE db.t AS t_restored", Category::Admin),
        ("CANCEL EXPORT", Category::Admin),
        ("HELP 'x'", Category::Utility),
        ("LOCK TABLES t READ", Category::Unsupported),
    ];
    for (sql, expected) in cases {
        assert_eq!(classify(&parse(sql)), expected, "for {sql}");
    }
}

#[test]
fn category_groups() {
    assert!(Category::Create.is_ddl());
    assert!(Category::Drop.is_ddl());
    assert!(!Category::Insert.is_ddl());
    assert!(Category::Load.is_dml());
    assert!(!Category::Show.is_dml());
    assert_eq!(Category::Privilege.to_string(), "privilege");
}

#[test]
fn parsed_statements_carry_category_and_span() {
    let sql = "SELECT 1;\n  INSERT INTO t VALUES (2) ;; SHOW TABLES";
    let parsed = parse_batch(sql).unwrap();
    let summary: Vec<(Category, &str)> = parsed
        .iter()
        .map(|p| (p.category, &sql[p.span.start..p.span.end]))
        .collect();
    assert_eq!(
        summary,
        [
            (Category::Query, "SELECT 1"),
            (Category::Insert, "INSERT INTO t VALUES (2)"),
            (Category::Show, "SHOW TABLES"),
        ]
    );
    assert_eq!(parsed[1].statement.category(), Category::Insert);
}

#[test]
fn categories_serialize_for_config_and_logs() {
    let json = serde_json::to_string(&[Category::Query, Category::Unsupported]).unwrap();
    assert_eq!(json, r#"["query","unsupported"]"#);
    let back: Vec<Category> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, [Category::Query, Category::Unsupported]);
}
