//! Larger statements mixing many features, checked for a stable printed
//! form and a whole-script parse.

mod common;
use common::*;

use doris_sql_core::{parse_statements, Category};
use pretty_assertions::assert_eq;

const CORPUS: &[&str] = &[
    "WITH recent AS (SELECT user_id, max(ts) AS last_seen FROM events \
     WHERE ts >= date_sub(now(), INTERVAL 7 DAY) GROUP BY user_id) \
     SELECT u.id, u.name, r.last_seen, CASE WHEN r.last_seen IS NULL THEN 'idle' ELSE 'active' END AS state \
     FROM users AS u LEFT JOIN recent AS r ON u.id = r.user_id \
     WHERE u.deleted = 0 AND u.name NOT LIKE 'test%' \
     ORDER BY r.last_seen DESC NULLS LAST LIMIT 100",
    "SELECT dt, sum(cnt) OVER (ORDER BY dt ROWS BETWEEN 6 PRECEDING AND CURRENT ROW) AS rolling \
     FROM (SELECT date(ts) AS dt, count(*) AS cnt FROM logs GROUP BY date(ts)) AS daily",
    "SELECT k, array_join(array_sort(collect_set(tag)), ',') FROM t LATERAL VIEW explode_split(tags, ',') tmp AS tag GROUP BY k",
    "SELECT a FROM t1 WHERE a IN (SELECT a FROM t2 UNION SELECT a FROM t3) AND NOT EXISTS (SELECT 1 FROM t4 WHERE t4.a = t1.a)",
    "SELECT `__ext`['container']['name'], cast(value AS DOUBLE) / 1024 FROM metrics WHERE dtEventTimeStamp BETWEEN 1700000000000 AND 1700003600000",
    "INSERT INTO db.summary PARTITION (p202401) WITH LABEL job_42 (k, v) SELECT k, sum(v) FROM db.detail GROUP BY k",
    "UPDATE stock SET qty = qty - 1, updated_at = now() WHERE sku = 'A-1' AND qty > 0",
    "DELETE FROM orders PARTITION (p1) WHERE created < '2023-01-01'",
    "CREATE MATERIALIZED VIEW mv_daily BUILD IMMEDIATE REFRESH AUTO ON SCHEDULE EVERY 1 HOUR \
     DISTRIBUTED BY HASH (k) BUCKETS 2 AS SELECT k, count(*) AS c FROM t GROUP BY k",
    "ALTER TABLE t ADD COLUMN c2 VARCHAR(10) DEFAULT '' AFTER c1, DROP COLUMN c3",
    "EXPLAIN VERBOSE SELECT * FROM a JOIN [broadcast] b ON a.id = b.id",
    "GRANT SELECT_PRIV ON internal.db.* TO ROLE 'reader'",
];

#[test]
fn corpus_round_trips() {
    for sql in CORPUS {
        round_trip(sql);
    }
}

#[test]
fn whole_script() {
    init_tracing();
    let script = "
        -- set up
        CREATE DATABASE IF NOT EXISTS demo;
        USE demo;
        CREATE TABLE t (id BIGINT, name STRING) DUPLICATE KEY (id) DISTRIBUTED BY HASH (id) BUCKETS 1;
        # load some rows
        INSERT INTO t VALUES (1, 'a'), (2, 'b');
        SELECT * FROM t WHERE id > 1;
        /* clean up */
        DROP TABLE t;
        LOCK TABLES t READ
    ";
    let categories: Vec<Category> = parse_statements(script)
        .unwrap()
        .iter()
        .map(|s| s.category())
        .collect();
    assert_eq!(
        categories,
        [
            Category::Create,
            Category::Use,
            Category::Create,
            Category::Insert,
            Category::Query,
            Category::Drop,
            Category::Unsupported,
        ]
    );
}
