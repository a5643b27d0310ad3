//! Tests for CREATE, ALTER and DROP statements.

mod common;
use common::*;

use doris_sql_core::ast::{
    AggregateType, AlterDatabaseOperation, AlterTableOperation, Buckets, ColumnPosition,
    DataType, Distribution, Ident, IndexType, KeyKind, LessThan, ObjectType, PartitionDef,
    Literal, PartitionKind, PartitionValue, PrimitiveType, RefreshTrigger, Statement,
};
use pretty_assertions::assert_eq;

// ===================================================================
// CREATE TABLE
// ===================================================================

const DUPLICATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS example_db.site_visits (
    visit_date DATE NOT NULL COMMENT 'day',
    site_id INT,
    city VARCHAR(64) DEFAULT 'unknown',
    pv BIGINT SUM DEFAULT '0',
    INDEX idx_city (city) USING INVERTED PROPERTIES ('parser' = 'english') COMMENT 'city index'
)
ENGINE = OLAP
AGGREGATE KEY (visit_date, site_id, city)
COMMENT 'daily visits'
PARTITION BY RANGE (visit_date) (
    PARTITION p202401 VALUES LESS THAN ('2024-02-01'),
    PARTITION p202402 VALUES [('2024-02-01'), ('2024-03-01')),
    PARTITION pmax VALUES LESS THAN MAXVALUE
)
DISTRIBUTED BY HASH (site_id) BUCKETS 16
PROPERTIES ('replication_num' = '3', 'storage_medium' = 'SSD')";

#[test]
fn create_table_full() {
    let t = parse_create_table(DUPLICATE_TABLE);
    assert!(t.if_not_exists);
    assert_eq!(t.name.to_string(), "example_db.site_visits");
    assert_eq!(t.columns.len(), 4);
    assert_eq!(t.columns[0].nullable, Some(false));
    assert_eq!(t.columns[0].comment.as_deref(), Some("day"));
    assert_eq!(t.columns[3].aggregate, Some(AggregateType::Sum));
    assert_eq!(t.indexes.len(), 1);
    assert_eq!(t.indexes[0].index_type, Some(IndexType::Inverted));
    assert_eq!(t.engine, Some(Ident::new("OLAP")));
    assert_eq!(t.key.as_ref().map(|k| k.kind), Some(KeyKind::Aggregate));
    assert_eq!(t.comment.as_deref(), Some("daily visits"));

    let partition = t.partition.as_ref().unwrap();
    assert_eq!(partition.kind, PartitionKind::Range);
    assert_eq!(partition.partitions.len(), 3);
    assert!(matches!(
        &partition.partitions[2],
        PartitionDef::LessThan {
            bound: LessThan::MaxValue,
            ..
        }
    ));

    assert_eq!(
        t.distribution,
        Some(Distribution::Hash {
            columns: vec![Ident::new("site_id")],
            buckets: Some(Buckets::Count(16)),
        })
    );
    assert_eq!(t.properties.len(), 2);
    assert_eq!(t.properties[1].key, "storage_medium");

    round_trip(DUPLICATE_TABLE);
}

#[test]
fn create_table_unique_key_random_auto_buckets() {
    let sql = "CREATE TABLE t (id BIGINT NOT NULL AUTO_INCREMENT, v STRING) \
               UNIQUE KEY (id) DISTRIBUTED BY RANDOM BUCKETS AUTO";
    let t = parse_create_table(sql);
    assert!(t.columns[0].auto_increment);
    assert_eq!(t.columns[1].data_type, DataType::Primitive(PrimitiveType::String));
    assert_eq!(
        t.distribution,
        Some(Distribution::Random {
            buckets: Some(Buckets::Auto)
        })
    );
    round_trip(sql);
}

#[test]
fn create_table_keeps_auto_increment_start_and_int_width() {
    let sql = "CREATE TABLE t (id BIGINT NOT NULL AUTO_INCREMENT(100), n INT(11)) \
               UNIQUE KEY (id) DISTRIBUTED BY HASH (id)";
    let t = parse_create_table(sql);
    assert_eq!(t.columns[0].auto_increment_start, Some(100));
    assert_eq!(
        t.columns[1].data_type,
        DataType::Integer {
            kind: PrimitiveType::Int,
            width: 11
        }
    );
    let rendered = parse(sql).to_string();
    assert!(rendered.contains("AUTO_INCREMENT(100)"), "{rendered}");
    assert!(rendered.contains("n INT(11)"), "{rendered}");
    round_trip(sql);

    let plain = parse_create_table(
        "CREATE TABLE t (id BIGINT NOT NULL AUTO_INCREMENT, n INT) \
         UNIQUE KEY (id) DISTRIBUTED BY HASH (id)",
    );
    assert_ne!(plain.columns, t.columns);
}

#[test]
fn create_table_step_partitions() {
    let sql = "CREATE TABLE t (d DATE) DUPLICATE KEY (d) PARTITION BY RANGE (d) \
               (FROM ('2024-01-01') TO ('2024-02-01') INTERVAL 1 DAY) DISTRIBUTED BY HASH (d)";
    let t = parse_create_table(sql);
    let partition = t.partition.unwrap();
    assert!(matches!(
        &partition.partitions[0],
        PartitionDef::Step { interval: 1, .. }
    ));
    round_trip(sql);
}

#[test]
fn create_table_list_partitions() {
    let sql = "CREATE TABLE t (region VARCHAR(8), n INT) DUPLICATE KEY (region) \
               PARTITION BY LIST (region) (PARTITION p_north VALUES IN ('bj', 'tj'), \
               PARTITION p_other VALUES IN (('sh'), ('gz')))";
    let t = parse_create_table(sql);
    let partition = t.partition.unwrap();
    assert_eq!(partition.kind, PartitionKind::List);
    let PartitionDef::In { values, .. } = &partition.partitions[0] else {
        panic!("Expected IN partition");
    };
    assert_eq!(
        values,
        &vec![
            vec![PartitionValue::Literal(Literal::String(String::from("bj")))],
            vec![PartitionValue::Literal(Literal::String(String::from("tj")))],
        ]
    );
    round_trip(sql);
}

#[test]
fn create_table_complex_types() {
    round_trip(
        "CREATE TABLE t (a ARRAY<INT>, m MAP<STRING, ARRAY<INT>>, s STRUCT<x:INT, y:STRING>, \
         j JSON, d DECIMAL(27, 9), ts DATETIME(3)) DISTRIBUTED BY HASH (a)",
    );
}

#[test]
fn create_table_like_and_ctas() {
    assert!(matches!(
        parse("CREATE TABLE IF NOT EXISTS t2 LIKE db.t1"),
        Statement::CreateTableLike(like) if like.if_not_exists && like.like.to_string() == "db.t1"
    ));
    let t = parse_create_table(
        "CREATE TABLE t2 PROPERTIES ('replication_num' = '1') AS SELECT * FROM t1",
    );
    assert!(t.columns.is_empty());
    assert!(t.as_query.is_some());
    round_trip("CREATE TABLE t2 PROPERTIES ('replication_num' = '1') AS SELECT * FROM t1");
}

#[test]
fn create_external_table() {
    let t = parse_create_table(
        "CREATE EXTERNAL TABLE ext (k INT) ENGINE = mysql PROPERTIES ('host' = '127.0.0.1')",
    );
    assert!(t.external);
    assert_eq!(t.engine, Some(Ident::new("mysql")));
}

// ===================================================================
// Other CREATE statements
// ===================================================================

#[test]
fn create_view() {
    let Statement::CreateView(view) =
        parse("CREATE VIEW IF NOT EXISTS v (a, b COMMENT 'second') COMMENT 'v' AS SELECT 1, 2")
    else {
        panic!("Expected view");
    };
    assert!(view.if_not_exists);
    assert_eq!(view.columns.len(), 2);
    assert_eq!(view.comment.as_deref(), Some("v"));
    round_trip("CREATE OR REPLACE VIEW v AS SELECT a FROM t WHERE b > 1");
}

#[test]
fn create_async_materialized_view() {
    let sql = "CREATE MATERIALIZED VIEW mv BUILD IMMEDIATE REFRESH AUTO ON SCHEDULE EVERY 1 HOUR \
               DISTRIBUTED BY RANDOM BUCKETS 2 PROPERTIES ('replication_num' = '1') \
               AS SELECT a, sum(b) FROM t GROUP BY a";
    let Statement::CreateMaterializedView(mv) = parse(sql) else {
        panic!("Expected materialized view");
    };
    let refresh = mv.refresh.as_ref().unwrap();
    assert!(matches!(
        refresh.trigger,
        Some(RefreshTrigger::Schedule { every: 1, .. })
    ));
    round_trip(sql);
}

#[test]
fn create_database_index_catalog() {
    assert!(matches!(
        parse("CREATE DATABASE IF NOT EXISTS db PROPERTIES ('replication_allocation' = 'tag.location.default: 1')"),
        Statement::CreateDatabase(db) if db.if_not_exists && db.properties.len() == 1
    ));
    assert!(matches!(
        parse("CREATE SCHEMA s"),
        Statement::CreateDatabase(_)
    ));
    round_trip("CREATE INDEX IF NOT EXISTS idx ON t (c) USING NGRAM_BF PROPERTIES ('gram_size' = '3') COMMENT 'x'");
    round_trip("CREATE CATALOG hive WITH RESOURCE hms COMMENT 'lake' PROPERTIES ('type' = 'hms')");
}

#[test]
fn create_user_and_role() {
    round_trip("CREATE USER IF NOT EXISTS 'jack'@'192.168.%' IDENTIFIED BY 'pwd' DEFAULT ROLE 'analyst'");
    round_trip("CREATE ROLE analyst COMMENT 'read only'");
}

// ===================================================================
// ALTER
// ===================================================================

#[test]
fn alter_table_columns() {
    let alter = parse_alter_table(
        "ALTER TABLE db.t ADD COLUMN c INT DEFAULT '0' FIRST, MODIFY COLUMN d BIGINT AFTER c, DROP COLUMN e",
    );
    assert_eq!(alter.name.to_string(), "db.t");
    assert_eq!(alter.operations.len(), 3);
    assert!(matches!(
        &alter.operations[0],
        AlterTableOperation::AddColumn {
            position: Some(ColumnPosition::First),
            ..
        }
    ));
    assert!(matches!(
        &alter.operations[1],
        AlterTableOperation::ModifyColumn {
            position: Some(ColumnPosition::After(_)),
            ..
        }
    ));
    assert_eq!(
        alter.operations[2],
        AlterTableOperation::DropColumn(Ident::new("e"))
    );
    round_trip("ALTER TABLE t ADD COLUMN (a INT, b STRING)");
}

#[test]
fn alter_table_partitions_and_properties() {
    round_trip("ALTER TABLE t ADD PARTITION p9 VALUES LESS THAN ('2025-01-01')");
    round_trip("ALTER TABLE t DROP PARTITION IF EXISTS p1 FORCE");
    round_trip("ALTER TABLE t SET ('dynamic_partition.enable' = 'true')");
    round_trip("ALTER TABLE t RENAME t_new");
    round_trip("ALTER TABLE t MODIFY COMMENT 'new comment'");
    round_trip("ALTER TABLE t ADD INDEX idx (c) USING BITMAP");
}

#[test]
fn alter_view_and_database() {
    round_trip("ALTER VIEW v AS SELECT a FROM t");
    let Statement::AlterDatabase(db) = parse("ALTER DATABASE db RENAME db2") else {
        panic!("Expected ALTER DATABASE");
    };
    assert_eq!(db.operation, AlterDatabaseOperation::Rename(Ident::new("db2")));
}

#[test]
fn alter_system_and_user() {
    round_trip("ALTER SYSTEM DECOMMISSION BACKEND 'host:9050'");
    round_trip("ALTER SYSTEM ADD BROKER hdfs_broker 'b1:8000', 'b2:8000'");
    round_trip("ALTER USER 'jack'@'%' IDENTIFIED BY 'new'");
    assert!(matches!(
        parse("ALTER SYSTEM MODIFY BACKEND 'h:9050' SET ('tag.location' = 'g1')"),
        Statement::Unsupported(_)
    ));
}

// ===================================================================
// DROP
// ===================================================================

#[test]
fn drop_objects() {
    for (sql, object_type) in [
        ("DROP TABLE IF EXISTS db.t FORCE", ObjectType::Table),
        ("DROP VIEW v", ObjectType::View),
        ("DROP DATABASE d", ObjectType::Database),
        ("DROP SCHEMA d", ObjectType::Database),
        ("DROP CATALOG c", ObjectType::Catalog),
        ("DROP INDEX idx ON t", ObjectType::Index),
    ] {
        let Statement::Drop(drop) = parse(sql) else {
            panic!("Expected DROP for {sql}");
        };
        assert_eq!(drop.object_type, object_type, "for {sql}");
    }
    round_trip("DROP TABLE IF EXISTS db.t FORCE");
    round_trip("DROP USER IF EXISTS 'jack'@'%'");
    round_trip("DROP ROLE analyst");
}

#[test]
fn drop_unknown_object_is_unsupported() {
    let Statement::Unsupported(u) = parse("DROP FUNCTION f(INT)") else {
        panic!("Expected unsupported");
    };
    assert_eq!(u.keywords, vec!["DROP", "FUNCTION"]);
    assert_eq!(u.text, "DROP FUNCTION f(INT)");
}
