//! Tests for SHOW, DESCRIBE, EXPLAIN, session control, privileges and
//! cluster administration statements.

mod common;
use common::*;

use doris_sql_core::ast::{
    Grant, GrantObject, GrantTarget, Grantee, Ident, Literal, ObjectName, SetValue, Show,
    ShowFilter, ShowTarget, Statement, UserIdentity, VariableName, VariableScope,
};
use pretty_assertions::assert_eq;

fn parse_show(sql: &str) -> Show {
    match parse(sql) {
        Statement::Show(show) => *show,
        other => panic!("Expected SHOW, got {other:?}"),
    }
}

// ===================================================================
// SHOW
// ===================================================================

#[test]
fn show_with_filters() {
    let show = parse_show("SHOW FULL TABLES FROM db LIKE 'ods_%'");
    assert!(show.full);
    assert_eq!(show.from, Some(ObjectName::from("db")));
    assert_eq!(show.filter, Some(ShowFilter::Like(String::from("ods_%"))));

    round_trip("SHOW FULL TABLES FROM db LIKE 't%'");
    round_trip("SHOW LOAD FROM db WHERE State = 'FINISHED' LIMIT 10");
    round_trip("SHOW GLOBAL VARIABLES LIKE 'exec%'");
    round_trip("SHOW PROCESSLIST");
}

#[test]
fn show_table_scoped_targets() {
    assert_eq!(
        parse("SHOW FIELDS IN db.t").to_string(),
        "SHOW COLUMNS FROM db.t"
    );
    assert_eq!(parse("SHOW KEYS FROM t").to_string(), "SHOW INDEXES FROM t");
    round_trip("SHOW FULL COLUMNS FROM t LIKE 'k%'");
    round_trip("SHOW PARTITIONS FROM db.t WHERE PartitionName = 'p1'");
}

#[test]
fn show_create() {
    assert_eq!(
        parse_show("SHOW CREATE TABLE db.t").target,
        ShowTarget::CreateTable(ObjectName::new(["db", "t"]))
    );
    assert_eq!(
        parse("SHOW CREATE SCHEMA db").to_string(),
        "SHOW CREATE DATABASE db"
    );
    round_trip("SHOW CREATE MATERIALIZED VIEW mv");
    round_trip("SHOW CREATE VIEW v");
}

#[test]
fn show_schemas_is_show_databases() {
    assert_eq!(parse_show("SHOW SCHEMAS").target, ShowTarget::Databases);
    assert_eq!(parse("SHOW SCHEMAS").to_string(), "SHOW DATABASES");
}

#[test]
fn show_table_status() {
    assert_eq!(parse_show("SHOW TABLE STATUS FROM db").target, ShowTarget::TableStatus);
    round_trip("SHOW TABLE STATUS FROM db");
}

#[test]
fn show_unknown_target_is_unsupported() {
    let Statement::Unsupported(u) = parse("SHOW ROUTINE LOAD FOR db.job") else {
        panic!("Expected unsupported");
    };
    assert_eq!(u.keywords, vec!["SHOW", "ROUTINE"]);
}

// ===================================================================
// DESCRIBE / EXPLAIN / USE
// ===================================================================

#[test]
fn describe_forms() {
    assert_eq!(parse("DESC t").to_string(), "DESCRIBE t");
    assert_eq!(parse("EXPLAIN db.t").to_string(), "DESCRIBE db.t");
    round_trip("DESCRIBE db.t ALL");
}

#[test]
fn explain_statement() {
    let Statement::Explain(explain) = parse("EXPLAIN SELECT * FROM t") else {
        panic!("Expected EXPLAIN");
    };
    assert!(explain.level.is_none());
    assert!(matches!(*explain.statement, Statement::Query(_)));
    round_trip("EXPLAIN VERBOSE SELECT a FROM t WHERE b = 1");
    round_trip("EXPLAIN GRAPH INSERT INTO t SELECT * FROM s");
}

#[test]
fn use_and_switch() {
    round_trip("USE db1");
    round_trip("USE hive.db1");
    round_trip("SWITCH hive");
}

// ===================================================================
// SET
// ===================================================================

#[test]
fn set_variables() {
    let Statement::SetVariables(items) =
        parse("SET SESSION query_timeout = 300, @x = 'a' , @@global.time_zone = DEFAULT")
    else {
        panic!("Expected SET");
    };
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].scope, Some(VariableScope::Session));
    assert_eq!(
        items[0].name,
        VariableName::Plain(Ident::new("query_timeout"))
    );
    assert_eq!(items[2].value, SetValue::Default);
    round_trip("SET SESSION query_timeout = 300, @x = 'a', @@global.time_zone = DEFAULT");
    round_trip("SET enable_profile = TRUE");
}

#[test]
fn set_names_and_password() {
    assert_eq!(parse("SET NAMES utf8").to_string(), "SET NAMES 'utf8'");
    round_trip("SET NAMES 'utf8mb4' COLLATE 'utf8mb4_bin'");
    round_trip("SET NAMES DEFAULT");
    round_trip("SET PASSWORD FOR 'jack'@'%' = PASSWORD('123456')");
    round_trip("SET PASSWORD = '*6BB4837EB74329105EE4568DDA7DC67ED2CA2AD9'");
}

#[test]
fn set_property_is_unsupported() {
    let Statement::Unsupported(u) =
        parse("SET PROPERTY FOR 'jack' 'max_user_connections' = '1000'")
    else {
        panic!("Expected unsupported");
    };
    assert_eq!(u.keywords, vec!["SET", "PROPERTY"]);
    assert_eq!(
        u.text,
        "SET PROPERTY FOR 'jack' 'max_user_connections' = '1000'"
    );
}

// ===================================================================
// Transactions
// ===================================================================

#[test]
fn transactions() {
    assert_eq!(
        parse("BEGIN WITH LABEL l1"),
        Statement::Begin {
            label: Some(Ident::new("l1"))
        }
    );
    assert_eq!(parse("COMMIT WORK").to_string(), "COMMIT");
    assert_eq!(parse("ROLLBACK WORK").to_string(), "ROLLBACK");
    round_trip("BEGIN");
}

// ===================================================================
// Privileges
// ===================================================================

#[test]
fn grant_privileges() {
    let Statement::Grant(Grant { object, grantee }) =
        parse("GRANT select_priv, load_priv ON db.* TO 'jack'@'%'")
    else {
        panic!("Expected GRANT");
    };
    let GrantObject::Privileges { privileges, .. } = object else {
        panic!("Expected privileges");
    };
    assert_eq!(privileges, vec!["SELECT_PRIV", "LOAD_PRIV"]);
    assert_eq!(
        grantee,
        Grantee::User(UserIdentity {
            name: String::from("jack"),
            host: Some(String::from("%")),
        })
    );
    round_trip("GRANT SELECT_PRIV, LOAD_PRIV ON ctl.db.* TO 'jack'@'%'");
    round_trip("GRANT USAGE_PRIV ON RESOURCE 'spark_resource' TO ROLE 'etl'");
    round_trip("GRANT USAGE_PRIV ON WORKLOAD GROUP 'normal' TO 'jack'");
    round_trip("GRANT ALL PRIVILEGES ON *.*.* TO 'admin'@'localhost'");
}

#[test]
fn grant_and_revoke_roles() {
    assert_eq!(
        parse("GRANT 'r1', 'r2' TO jack").to_string(),
        "GRANT 'r1', 'r2' TO 'jack'"
    );
    let Statement::Revoke(revoke) = parse("REVOKE DROP_PRIV ON db.t FROM ROLE analyst") else {
        panic!("Expected REVOKE");
    };
    assert_eq!(revoke.grantee, Grantee::Role(String::from("analyst")));
    assert!(matches!(
        revoke.object,
        GrantObject::Privileges {
            target: GrantTarget::Objects(ref parts),
            ..
        } if parts.len() == 2
    ));
    round_trip("REVOKE DROP_PRIV ON db.t FROM ROLE 'analyst'");
}

// ===================================================================
// Cluster administration
// ===================================================================

#[test]
fn kill() {
    let Statement::Kill(kill) = parse("KILL 42") else {
        panic!("Expected KILL");
    };
    assert!(kill.scope.is_none());
    assert_eq!(kill.id, Literal::Integer(42));
    round_trip("KILL CONNECTION 42");
    round_trip("KILL QUERY 'a1b2c3'");
}

#[test]
fn admin_keeps_command_text() {
    let Statement::Admin(admin) =
        parse("ADMIN SET REPLICA STATUS PROPERTIES ('tablet_id' = '10003', 'status' = 'bad')")
    else {
        panic!("Expected ADMIN");
    };
    assert_eq!(admin.words, vec!["SET", "REPLICA", "STATUS"]);
    round_trip("ADMIN CLEAN TRASH ON ('192.168.0.1:9050')");
}

#[test]
fn analyze_refresh_recover_cancel() {
    round_trip("ANALYZE TABLE db.t (a, b) WITH SYNC");
    round_trip("ANALYZE DATABASE db");
    round_trip("REFRESH CATALOG hive");
    round_trip("REFRESH MATERIALIZED VIEW db.mv AUTO");
    round_trip("RECOVER TABLE db.t AS t_restored");
    round_trip("RECOVER PARTITION p1 FROM t AS p2");
    round_trip("CANCEL LOAD FROM db WHERE State = 'LOADING'");
    round_trip("CANCEL ALTER TABLE ROLLUP FROM db.t");
    round_trip("CANCEL EXPORT");
}

#[test]
fn help_and_sync() {
    assert_eq!(parse("HELP 'SHOW TABLES'"), Statement::Help(String::from("SHOW TABLES")));
    assert_eq!(parse("HELP functions").to_string(), "HELP 'functions'");
    assert_eq!(parse("SYNC"), Statement::Sync);
}

#[test]
fn unrecognized_admin_forms_are_unsupported() {
    for (sql, keywords) in [
        ("REFRESH LDAP ALL", vec!["REFRESH", "LDAP"]),
        ("CANCEL BACKUP FROM db", vec!["CANCEL", "BACKUP"]),
        ("SHOW CREATE FUNCTION f", vec!["SHOW", "CREATE", "FUNCTION"]),
    ] {
        let Statement::Unsupported(u) = parse(sql) else {
            panic!("Expected unsupported for {sql}");
        };
        assert_eq!(u.keywords, keywords, "for {sql}");
        assert_eq!(u.text, sql);
    }
}
