//! SHOW, SET, session control, privileges and cluster administration.

use super::Parser;
use crate::ast::{
    Admin, AlterJobKind, Analyze, Cancel, CancelTarget, Describe, Explain, ExplainLevel, Grant,
    GrantObject, GrantPart, GrantTarget, Grantee, Kill, KillScope, Literal, ObjectName, Recover,
    RecoverObject, Refresh, RefreshMethod, RefreshObject, SetNames, SetPassword, SetValue,
    SetVariable, Show, ShowFilter, ShowTarget, Statement, Use, VariableName, VariableScope,
};
use crate::error::Result;
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    pub(super) fn parse_show(&mut self) -> Result<Statement> {
        let start = self.position();
        self.expect_keyword(Keyword::Show)?;
        let scope = self.parse_variable_scope();
        let full = self.eat_keyword(Keyword::Full);

        let target = match self.peek().keyword() {
            Some(Keyword::Databases) => ShowTarget::Databases,
            Some(Keyword::Tables) => ShowTarget::Tables,
            Some(Keyword::Views) => ShowTarget::Views,
            Some(Keyword::Table) if self.check_nth_keyword(1, Keyword::Status) => {
                self.advance();
                ShowTarget::TableStatus
            }
            Some(Keyword::Columns | Keyword::Fields) => {
                self.advance();
                return self.finish_show(scope, full, |table| ShowTarget::Columns { table });
            }
            Some(Keyword::Index | Keyword::Indexes | Keyword::Keys) => {
                self.advance();
                return self.finish_show(scope, full, |table| ShowTarget::Indexes { table });
            }
            Some(Keyword::Partitions) => {
                self.advance();
                return self.finish_show(scope, full, |table| ShowTarget::Partitions { table });
            }
            Some(Keyword::Create) => {
                let target: fn(ObjectName) -> ShowTarget = match self.peek_nth(1).keyword() {
                    Some(Keyword::Table) => ShowTarget::CreateTable,
                    Some(Keyword::View) => ShowTarget::CreateView,
                    Some(Keyword::Database | Keyword::Schema) => ShowTarget::CreateDatabase,
                    Some(Keyword::Materialized) if self.check_nth_keyword(2, Keyword::View) => {
                        self.advance();
                        ShowTarget::CreateMaterializedView
                    }
                    _ => return self.parse_unsupported(start, 3),
                };
                self.advance();
                self.advance();
                let name = self.parse_table_name()?;
                let mut show = Show::new(target(name));
                show.scope = scope;
                show.full = full;
                return Ok(Statement::Show(Box::new(show)));
            }
            Some(Keyword::Variables) => ShowTarget::Variables,
            Some(Keyword::Status) => ShowTarget::Status,
            Some(Keyword::Processlist) => ShowTarget::Processlist,
            Some(Keyword::Grants) => ShowTarget::Grants,
            Some(Keyword::Roles) => ShowTarget::Roles,
            Some(Keyword::Catalogs) => ShowTarget::Catalogs,
            Some(Keyword::Frontends) => ShowTarget::Frontends,
            Some(Keyword::Backends) => ShowTarget::Backends,
            Some(Keyword::Load) => ShowTarget::Load,
            Some(Keyword::Export) => ShowTarget::Export,
            Some(Keyword::Warnings) => ShowTarget::Warnings,
            Some(Keyword::Errors) => ShowTarget::Errors,
            Some(Keyword::Engines) => ShowTarget::Engines,
            Some(Keyword::Charset) => ShowTarget::Charset,
            Some(Keyword::Collation) => ShowTarget::Collation,
            Some(Keyword::Triggers) => ShowTarget::Triggers,
            Some(Keyword::Property) => ShowTarget::Property,
            Some(Keyword::Data) => ShowTarget::Data,
            Some(Keyword::Functions) => ShowTarget::Functions,
            _ if self.check_word("SCHEMAS") => ShowTarget::Databases,
            _ => return self.parse_unsupported(start, 2),
        };
        self.advance();

        let mut show = Show::new(target);
        show.scope = scope;
        show.full = full;
        self.parse_show_tail(&mut show)?;
        Ok(Statement::Show(Box::new(show)))
    }

    /// `FROM|IN t` after COLUMNS, INDEXES and PARTITIONS, then the usual tail.
    fn finish_show(
        &mut self,
        scope: Option<VariableScope>,
        full: bool,
        target: impl FnOnce(ObjectName) -> ShowTarget,
    ) -> Result<Statement> {
        if !self.eat_keyword(Keyword::From) {
            self.expect_keyword(Keyword::In)?;
        }
        let table = self.parse_table_name()?;
        let mut show = Show::new(target(table));
        show.scope = scope;
        show.full = full;
        self.parse_show_tail(&mut show)?;
        Ok(Statement::Show(Box::new(show)))
    }

    /// `[FROM|IN db] [LIKE 's' | WHERE e] [LIMIT ..]`
    fn parse_show_tail(&mut self, show: &mut Show) -> Result<()> {
        if self.eat_keyword(Keyword::From) || self.eat_keyword(Keyword::In) {
            show.from = Some(self.parse_object_name()?);
        }
        if self.eat_keyword(Keyword::Like) {
            show.filter = Some(ShowFilter::Like(self.parse_string()?));
        } else if let Some(selection) = self.parse_optional_where()? {
            show.filter = Some(ShowFilter::Where(selection));
        }
        show.limit = self.parse_limit()?;
        Ok(())
    }

    fn parse_variable_scope(&mut self) -> Option<VariableScope> {
        let scope = match self.peek().keyword()? {
            Keyword::Global => VariableScope::Global,
            Keyword::Session => VariableScope::Session,
            Keyword::Local => VariableScope::Local,
            _ => return None,
        };
        self.advance();
        Some(scope)
    }

    pub(super) fn parse_describe(&mut self) -> Result<Statement> {
        self.advance();
        self.parse_describe_body()
    }

    fn parse_describe_body(&mut self) -> Result<Statement> {
        let table = self.parse_table_name()?;
        let all = self.eat_keyword(Keyword::All);
        Ok(Statement::Describe(Describe { table, all }))
    }

    /// `EXPLAIN [VERBOSE|GRAPH|PLAN] statement`; `EXPLAIN t` describes a table.
    pub(super) fn parse_explain(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Explain)?;
        let level = if self.eat_keyword(Keyword::Verbose) {
            Some(ExplainLevel::Verbose)
        } else if self.eat_keyword(Keyword::Graph) {
            Some(ExplainLevel::Graph)
        } else if self.eat_keyword(Keyword::Plan) {
            Some(ExplainLevel::Plan)
        } else {
            None
        };
        if level.is_none()
            && matches!(
                self.peek().kind,
                TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_)
            )
        {
            return self.parse_describe_body();
        }
        let statement = self.nested(Self::parse_statement)?;
        Ok(Statement::Explain(Explain {
            level,
            statement: Box::new(statement),
        }))
    }

    pub(super) fn parse_use(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Use)?;
        let first = self.parse_identifier()?;
        if self.eat(&TokenKind::Dot) {
            let database = self.parse_identifier()?;
            return Ok(Statement::Use(Use {
                catalog: Some(first),
                database,
            }));
        }
        Ok(Statement::Use(Use {
            catalog: None,
            database: first,
        }))
    }

    pub(super) fn parse_set(&mut self) -> Result<Statement> {
        let start = self.position();
        self.expect_keyword(Keyword::Set)?;

        if self.eat_keyword(Keyword::Names) {
            let charset = if self.eat_keyword(Keyword::Default) {
                None
            } else {
                Some(self.parse_name_or_string()?)
            };
            let collate = if self.eat_word("COLLATE") {
                Some(self.parse_name_or_string()?)
            } else {
                None
            };
            return Ok(Statement::SetNames(SetNames { charset, collate }));
        }

        if self.check_keyword(Keyword::Password)
            && (self.check_nth_keyword(1, Keyword::For) || self.check_nth(1, &TokenKind::Eq))
        {
            return self.parse_set_password();
        }

        let offset = usize::from(matches!(
            self.peek().keyword(),
            Some(Keyword::Global | Keyword::Session | Keyword::Local)
        ));
        let assignable = match self.peek_nth(offset).kind {
            TokenKind::UserVariable(_) | TokenKind::SystemVariable(_) => true,
            _ => self.check_nth_name(offset) && self.check_nth(offset + 1, &TokenKind::Eq),
        };
        if !assignable {
            return self.parse_unsupported(start, 2);
        }
        let items = self.parse_comma_separated(Self::parse_set_variable)?;
        Ok(Statement::SetVariables(items))
    }

    fn parse_set_variable(&mut self) -> Result<SetVariable> {
        let scope = self.parse_variable_scope();
        let name = match &self.peek().kind {
            TokenKind::UserVariable(name) => {
                let name = VariableName::User(name.clone());
                self.advance();
                name
            }
            TokenKind::SystemVariable(name) => {
                let name = VariableName::System(name.clone());
                self.advance();
                name
            }
            _ => VariableName::Plain(self.parse_identifier()?),
        };
        self.expect(&TokenKind::Eq)?;
        let value = if self.eat_keyword(Keyword::Default) {
            SetValue::Default
        } else {
            SetValue::Expr(self.parse_expr()?)
        };
        Ok(SetVariable { scope, name, value })
    }

    fn parse_set_password(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Password)?;
        let user = if self.eat_keyword(Keyword::For) {
            Some(self.parse_user_identity()?)
        } else {
            None
        };
        self.expect(&TokenKind::Eq)?;
        let (password, hashed) = if self.eat_keyword(Keyword::Password) {
            self.expect(&TokenKind::LeftParen)?;
            let password = self.parse_string()?;
            self.expect(&TokenKind::RightParen)?;
            (password, false)
        } else {
            (self.parse_string()?, true)
        };
        Ok(Statement::SetPassword(SetPassword {
            user,
            password,
            hashed,
        }))
    }

    /// `BEGIN [WITH LABEL l]`, `COMMIT [WORK]`, `ROLLBACK [WORK]`
    pub(super) fn parse_transaction(&mut self) -> Result<Statement> {
        let token = self.advance();
        match token.keyword() {
            Some(Keyword::Begin) => {
                let label =
                    if self.check_keyword(Keyword::With) && self.check_nth_keyword(1, Keyword::Label) {
                        self.advance();
                        self.advance();
                        Some(self.parse_identifier()?)
                    } else {
                        None
                    };
                Ok(Statement::Begin { label })
            }
            Some(Keyword::Commit) => {
                self.eat_keyword(Keyword::Work);
                Ok(Statement::Commit)
            }
            _ => {
                self.eat_keyword(Keyword::Work);
                Ok(Statement::Rollback)
            }
        }
    }

    /// GRANT and REVOKE share a body; only the preposition differs.
    pub(super) fn parse_grant(&mut self) -> Result<Statement> {
        let revoke = self.check_keyword(Keyword::Revoke);
        self.advance();

        let object = if matches!(self.peek().kind, TokenKind::String(_)) {
            GrantObject::Roles(self.parse_comma_separated(Self::parse_string)?)
        } else {
            let privileges = self.parse_comma_separated(Self::parse_privilege)?;
            self.expect_keyword(Keyword::On)?;
            let target = self.parse_grant_target()?;
            GrantObject::Privileges { privileges, target }
        };

        if revoke {
            self.expect_keyword(Keyword::From)?;
        } else {
            self.expect_keyword(Keyword::To)?;
        }
        let grantee = if self.eat_keyword(Keyword::Role) {
            Grantee::Role(self.parse_name_or_string()?)
        } else {
            Grantee::User(self.parse_user_identity()?)
        };

        let grant = Grant { object, grantee };
        Ok(if revoke {
            Statement::Revoke(grant)
        } else {
            Statement::Grant(grant)
        })
    }

    fn parse_privilege(&mut self) -> Result<String> {
        let Some(word) = self.peek().word() else {
            return Err(self.expected(&["privilege"]));
        };
        let mut privilege = word.to_ascii_uppercase();
        self.advance();
        if self.eat_word("PRIVILEGES") {
            privilege.push_str(" PRIVILEGES");
        }
        Ok(privilege)
    }

    fn parse_grant_target(&mut self) -> Result<GrantTarget> {
        let named = matches!(self.peek_nth(1).kind, TokenKind::String(_));
        if named && self.eat_word("RESOURCE") {
            return Ok(GrantTarget::Resource(self.parse_string()?));
        }
        if self.check_word("WORKLOAD") && self.check_nth_keyword(1, Keyword::Group) {
            self.advance();
            self.advance();
            return Ok(GrantTarget::WorkloadGroup(self.parse_string()?));
        }
        let mut parts = Vec::new();
        loop {
            if self.eat(&TokenKind::Star) {
                parts.push(GrantPart::Wildcard);
            } else {
                parts.push(GrantPart::Name(self.parse_identifier()?));
            }
            if !self.eat(&TokenKind::Dot) {
                break;
            }
        }
        Ok(GrantTarget::Objects(parts))
    }

    pub(super) fn parse_kill(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Kill)?;
        let scope = if self.eat_keyword(Keyword::Connection) {
            Some(KillScope::Connection)
        } else if self.eat_keyword(Keyword::Query) {
            Some(KillScope::Query)
        } else {
            None
        };
        let id = match &self.peek().kind {
            TokenKind::Integer(value) => Literal::Integer(*value),
            TokenKind::String(value) => Literal::String(value.clone()),
            _ => return Err(self.expected(&["connection id", "query id"])),
        };
        self.advance();
        Ok(Statement::Kill(Kill { scope, id }))
    }

    /// `ADMIN ...`: the command is kept as written, with its leading words.
    pub(super) fn parse_admin(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Admin)?;
        let start = self.position();
        if self.peek().word().is_none() {
            return Err(self.expected(&["admin command"]));
        }
        let words = self.leading_words(start, 3);
        let text = self.capture_to_end(start);
        Ok(Statement::Admin(Admin { words, text }))
    }

    /// `ANALYZE TABLE t [(cols)] [WITH SYNC]` or `ANALYZE DATABASE db [WITH SYNC]`
    pub(super) fn parse_analyze(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Analyze)?;
        let database = if self.eat_keyword(Keyword::Table) {
            false
        } else if self.eat_keyword(Keyword::Database) {
            true
        } else {
            return Err(self.expected(&["TABLE", "DATABASE"]));
        };
        let name = if database {
            self.parse_object_name()?
        } else {
            self.parse_table_name()?
        };
        let columns = if database {
            Vec::new()
        } else {
            self.parse_optional_ident_list()?
        };
        let sync = self.check_keyword(Keyword::With) && self.check_nth_keyword(1, Keyword::Sync);
        if sync {
            self.advance();
            self.advance();
        }
        Ok(Statement::Analyze(Analyze {
            database,
            name,
            columns,
            sync,
        }))
    }

    pub(super) fn parse_refresh(&mut self) -> Result<Statement> {
        let start = self.position();
        self.expect_keyword(Keyword::Refresh)?;
        let object = match self.peek().keyword() {
            Some(Keyword::Catalog) => RefreshObject::Catalog,
            Some(Keyword::Database) => RefreshObject::Database,
            Some(Keyword::Table) => RefreshObject::Table,
            Some(Keyword::Materialized) if self.check_nth_keyword(1, Keyword::View) => {
                self.advance();
                RefreshObject::MaterializedView
            }
            _ => return self.parse_unsupported(start, 2),
        };
        self.advance();
        let name = self.parse_object_name()?;
        let method = if self.eat_keyword(Keyword::Complete) {
            Some(RefreshMethod::Complete)
        } else if self.eat_keyword(Keyword::Auto) {
            Some(RefreshMethod::Auto)
        } else {
            None
        };
        Ok(Statement::Refresh(Refresh {
            object,
            name,
            method,
        }))
    }

    /// `RECOVER DATABASE db | TABLE t | PARTITION p FROM t [AS new_name]`
    pub(super) fn parse_recover(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Recover)?;
        let object = if self.eat_keyword(Keyword::Database) {
            RecoverObject::Database
        } else if self.eat_keyword(Keyword::Table) {
            RecoverObject::Table
        } else if self.eat_keyword(Keyword::Partition) {
            RecoverObject::Partition
        } else {
            return Err(self.expected(&["DATABASE", "TABLE", "PARTITION"]));
        };
        let name = self.parse_object_name()?;
        let from = if object == RecoverObject::Partition {
            self.expect_keyword(Keyword::From)?;
            Some(self.parse_table_name()?)
        } else {
            None
        };
        let new_name = if self.eat_keyword(Keyword::As) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        Ok(Statement::Recover(Recover {
            object,
            name,
            from,
            new_name,
        }))
    }

    pub(super) fn parse_cancel(&mut self) -> Result<Statement> {
        let start = self.position();
        self.expect_keyword(Keyword::Cancel)?;
        let target = match self.peek().keyword() {
            Some(Keyword::Load) => {
                self.advance();
                CancelTarget::Load
            }
            Some(Keyword::Export) => {
                self.advance();
                CancelTarget::Export
            }
            Some(Keyword::Alter) if self.check_nth_keyword(1, Keyword::Table) => {
                self.advance();
                self.advance();
                let kind = if self.eat_keyword(Keyword::Column) {
                    AlterJobKind::Column
                } else if self.eat_keyword(Keyword::Rollup) {
                    AlterJobKind::Rollup
                } else if self.eat_keyword(Keyword::Materialized) {
                    self.expect_keyword(Keyword::View)?;
                    AlterJobKind::MaterializedView
                } else {
                    return Err(self.expected(&["COLUMN", "ROLLUP", "MATERIALIZED VIEW"]));
                };
                CancelTarget::AlterTable(kind)
            }
            _ => return self.parse_unsupported(start, 2),
        };
        let from = if self.eat_keyword(Keyword::From) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let selection = self.parse_optional_where()?;
        Ok(Statement::Cancel(Cancel {
            target,
            from,
            selection,
        }))
    }

    pub(super) fn parse_help(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Help)?;
        Ok(Statement::Help(self.parse_name_or_string()?))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::{Expr, Ident, Limit, UserIdentity};
    use crate::config::ParserConfig;

    fn statement(sql: &str) -> Statement {
        Parser::new(sql, &ParserConfig::default())
            .unwrap()
            .parse_single_statement()
            .unwrap()
    }

    fn parse_show(sql: &str) -> Show {
        let Statement::Show(show) = statement(sql) else {
            panic!("expected SHOW: {sql}");
        };
        *show
    }

    #[test]
    fn test_show_tables_with_filters() {
        let show = parse_show("SHOW FULL TABLES FROM db LIKE 'ods_%'");
        assert!(show.full);
        assert_eq!(show.target, ShowTarget::Tables);
        assert_eq!(show.from, Some(ObjectName::new(["db"])));
        assert_eq!(show.filter, Some(ShowFilter::Like(String::from("ods_%"))));

        let show = parse_show("SHOW LOAD FROM db WHERE State = 'FINISHED' LIMIT 10");
        assert_eq!(show.target, ShowTarget::Load);
        assert!(matches!(show.filter, Some(ShowFilter::Where(_))));
        assert_eq!(
            show.limit,
            Some(Limit {
                count: 10,
                offset: None
            })
        );
    }

    #[test]
    fn test_show_columns_and_create() {
        assert_eq!(
            parse_show("SHOW COLUMNS FROM t").target,
            ShowTarget::Columns { table: "t".into() }
        );
        assert_eq!(
            parse_show("SHOW KEYS IN t").target,
            ShowTarget::Indexes { table: "t".into() }
        );
        assert_eq!(
            parse_show("SHOW CREATE MATERIALIZED VIEW db.mv").target,
            ShowTarget::CreateMaterializedView(ObjectName::new(["db", "mv"]))
        );
        assert_eq!(parse_show("SHOW GLOBAL VARIABLES").scope, Some(VariableScope::Global));
        assert_eq!(parse_show("SHOW TABLE STATUS").target, ShowTarget::TableStatus);
    }

    #[test]
    fn test_show_unknown_target_is_unsupported() {
        let Statement::Unsupported(unsupported) = statement("SHOW ROUTINE LOAD FOR db.job") else {
            panic!("expected unsupported");
        };
        assert_eq!(unsupported.keywords, vec!["SHOW", "ROUTINE"]);
        assert_eq!(unsupported.text, "SHOW ROUTINE LOAD FOR db.job");
    }

    #[test]
    fn test_describe_and_explain() {
        assert_eq!(
            statement("DESC db.t ALL"),
            Statement::Describe(Describe {
                table: ObjectName::new(["db", "t"]),
                all: true,
            })
        );
        assert_eq!(
            statement("EXPLAIN t"),
            Statement::Describe(Describe {
                table: "t".into(),
                all: false,
            })
        );
        let Statement::Explain(explain) = statement("EXPLAIN VERBOSE SELECT 1") else {
            panic!("expected EXPLAIN");
        };
        assert_eq!(explain.level, Some(ExplainLevel::Verbose));
        assert!(matches!(*explain.statement, Statement::Query(_)));
    }

    #[test]
    fn test_use() {
        assert_eq!(
            statement("USE hive.db1"),
            Statement::Use(Use {
                catalog: Some(Ident::new("hive")),
                database: Ident::new("db1"),
            })
        );
    }

    #[test]
    fn test_set_variables() {
        let Statement::SetVariables(items) =
            statement("SET GLOBAL exec_mem_limit = 1024, @x = 'a', @@session.time_zone = DEFAULT")
        else {
            panic!("expected SET");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].scope, Some(VariableScope::Global));
        assert_eq!(items[1].name, VariableName::User(String::from("x")));
        assert_eq!(items[2].value, SetValue::Default);
        assert_eq!(
            items[0].value,
            SetValue::Expr(Expr::literal(Literal::Integer(1024)))
        );
    }

    #[test]
    fn test_set_names_and_password() {
        assert_eq!(
            statement("SET NAMES utf8mb4 COLLATE 'utf8mb4_bin'"),
            Statement::SetNames(SetNames {
                charset: Some(String::from("utf8mb4")),
                collate: Some(String::from("utf8mb4_bin")),
            })
        );
        assert_eq!(
            statement("SET PASSWORD FOR 'jack'@'%' = PASSWORD('123')"),
            Statement::SetPassword(SetPassword {
                user: Some(UserIdentity {
                    name: String::from("jack"),
                    host: Some(String::from("%")),
                }),
                password: String::from("123"),
                hashed: false,
            })
        );
    }

    #[test]
    fn test_set_without_assignment_is_unsupported() {
        let Statement::Unsupported(unsupported) =
            statement("SET PROPERTY FOR 'jack' 'max_user_connections' = '1000'")
        else {
            panic!("expected unsupported");
        };
        assert_eq!(unsupported.keywords, vec!["SET", "PROPERTY"]);
    }

    #[test]
    fn test_transactions() {
        assert_eq!(
            statement("BEGIN WITH LABEL txn1"),
            Statement::Begin {
                label: Some(Ident::new("txn1"))
            }
        );
        assert_eq!(statement("COMMIT WORK"), Statement::Commit);
        assert_eq!(statement("ROLLBACK"), Statement::Rollback);
    }

    #[test]
    fn test_grant_and_revoke() {
        let Statement::Grant(grant) =
            statement("GRANT select_priv, LOAD_PRIV ON ctl.db.* TO 'jack'@'%'")
        else {
            panic!("expected GRANT");
        };
        assert_eq!(
            grant.object,
            GrantObject::Privileges {
                privileges: vec![String::from("SELECT_PRIV"), String::from("LOAD_PRIV")],
                target: GrantTarget::Objects(vec![
                    GrantPart::Name(Ident::new("ctl")),
                    GrantPart::Name(Ident::new("db")),
                    GrantPart::Wildcard,
                ]),
            }
        );

        let Statement::Revoke(revoke) =
            statement("REVOKE USAGE_PRIV ON RESOURCE 'spark' FROM ROLE 'analyst'")
        else {
            panic!("expected REVOKE");
        };
        assert_eq!(revoke.grantee, Grantee::Role(String::from("analyst")));

        let Statement::Grant(grant) = statement("GRANT 'r1', 'r2' TO jack") else {
            panic!("expected GRANT");
        };
        assert_eq!(
            grant.object,
            GrantObject::Roles(vec![String::from("r1"), String::from("r2")])
        );
    }

    #[test]
    fn test_kill_and_admin() {
        assert_eq!(
            statement("KILL QUERY 'a1b2'"),
            Statement::Kill(Kill {
                scope: Some(KillScope::Query),
                id: Literal::String(String::from("a1b2")),
            })
        );
        let Statement::Admin(admin) =
            statement("ADMIN SET FRONTEND CONFIG ('disable_balance' = 'true')")
        else {
            panic!("expected ADMIN");
        };
        assert_eq!(admin.words, vec!["SET", "FRONTEND", "CONFIG"]);
        assert_eq!(admin.text, "SET FRONTEND CONFIG ('disable_balance' = 'true')");
    }

    #[test]
    fn test_analyze_refresh_recover_cancel() {
        assert_eq!(
            statement("ANALYZE TABLE t (a, b) WITH SYNC"),
            Statement::Analyze(Analyze {
                database: false,
                name: "t".into(),
                columns: vec![Ident::new("a"), Ident::new("b")],
                sync: true,
            })
        );
        assert_eq!(
            statement("REFRESH MATERIALIZED VIEW mv COMPLETE"),
            Statement::Refresh(Refresh {
                object: RefreshObject::MaterializedView,
                name: "mv".into(),
                method: Some(RefreshMethod::Complete),
            })
        );
        assert_eq!(
            statement("RECOVER PARTITION p1 FROM t AS p2"),
            Statement::Recover(Recover {
                object: RecoverObject::Partition,
                name: "p1".into(),
                from: Some("t".into()),
                new_name: Some(Ident::new("p2")),
            })
        );
        let Statement::Cancel(cancel) = statement("CANCEL ALTER TABLE COLUMN FROM db.t") else {
            panic!("expected CANCEL");
        };
        assert_eq!(cancel.target, CancelTarget::AlterTable(AlterJobKind::Column));
        assert_eq!(statement("HELP 'CREATE TABLE'"), Statement::Help(String::from("CREATE TABLE")));
    }
}
