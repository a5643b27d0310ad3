//! The statement enum and the smaller utility, session and admin statements.

use std::fmt;

use super::display::{comma_separated, write_paren_list, QuotedString};
use super::{
    AlterDatabase, AlterSystem, AlterTable, AlterUser, AlterView, BrokerLoad, CreateCatalog,
    CreateDatabase, CreateIndex, CreateMaterializedView, CreateRole, CreateTable,
    CreateTableLike, CreateUser, CreateView, Delete, Drop, DropRole, DropUser, Export, Expr,
    Ident, Insert, Limit, Literal, MysqlLoad, ObjectName, Query, RefreshMethod, Truncate, Update,
    UserIdentity,
};

/// A parsed SQL statement.
///
/// One variant per statement shape. Statements the grammar recognizes but
/// does not model land in [`Statement::Unsupported`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Query(Box<Query>),
    Insert(Box<Insert>),
    Update(Box<Update>),
    Delete(Box<Delete>),
    BrokerLoad(Box<BrokerLoad>),
    MysqlLoad(Box<MysqlLoad>),
    Export(Box<Export>),
    Truncate(Truncate),

    CreateTable(Box<CreateTable>),
    CreateTableLike(CreateTableLike),
    CreateView(Box<CreateView>),
    CreateMaterializedView(Box<CreateMaterializedView>),
    CreateDatabase(CreateDatabase),
    CreateIndex(CreateIndex),
    CreateUser(CreateUser),
    CreateRole(CreateRole),
    CreateCatalog(CreateCatalog),

    AlterTable(AlterTable),
    AlterView(Box<AlterView>),
    AlterDatabase(AlterDatabase),
    AlterUser(AlterUser),
    AlterSystem(AlterSystem),

    Drop(Drop),
    DropUser(DropUser),
    DropRole(DropRole),

    Show(Box<Show>),
    Describe(Describe),
    Explain(Explain),

    Use(Use),
    /// `SWITCH catalog`
    SwitchCatalog(Ident),
    /// `SET a = 1, GLOBAL b = DEFAULT, @x = 2`
    SetVariables(Vec<SetVariable>),
    SetNames(SetNames),
    SetPassword(SetPassword),

    /// `BEGIN [WITH LABEL l]`
    Begin { label: Option<Ident> },
    Commit,
    Rollback,

    Grant(Grant),
    Revoke(Grant),

    Kill(Kill),
    Admin(Admin),
    Analyze(Analyze),
    Refresh(Refresh),
    Recover(Recover),
    Cancel(Cancel),
    /// `HELP 'topic'`
    Help(String),
    Sync,

    Unsupported(Unsupported),
}

/// `GLOBAL`, `SESSION` or `LOCAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableScope {
    Global,
    Session,
    Local,
}

impl VariableScope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Global => "GLOBAL",
            Self::Session => "SESSION",
            Self::Local => "LOCAL",
        }
    }
}

/// `LIKE 'pattern'` or `WHERE expr` after a SHOW.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShowFilter {
    Like(String),
    Where(Expr),
}

/// What a SHOW statement lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShowTarget {
    Databases,
    Tables,
    Views,
    TableStatus,
    /// `COLUMNS | FIELDS FROM t`
    Columns { table: ObjectName },
    /// `INDEX | INDEXES | KEYS FROM t`
    Indexes { table: ObjectName },
    Partitions { table: ObjectName },
    CreateTable(ObjectName),
    CreateView(ObjectName),
    CreateDatabase(ObjectName),
    CreateMaterializedView(ObjectName),
    Variables,
    Status,
    Processlist,
    Grants,
    Roles,
    Catalogs,
    Frontends,
    Backends,
    Load,
    Export,
    Warnings,
    Errors,
    Engines,
    Charset,
    Collation,
    Triggers,
    Property,
    Data,
    Functions,
}

impl fmt::Display for ShowTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Columns { table } => return write!(f, "COLUMNS FROM {table}"),
            Self::Indexes { table } => return write!(f, "INDEXES FROM {table}"),
            Self::Partitions { table } => return write!(f, "PARTITIONS FROM {table}"),
            Self::CreateTable(name) => return write!(f, "CREATE TABLE {name}"),
            Self::CreateView(name) => return write!(f, "CREATE VIEW {name}"),
            Self::CreateDatabase(name) => return write!(f, "CREATE DATABASE {name}"),
            Self::CreateMaterializedView(name) => {
                return write!(f, "CREATE MATERIALIZED VIEW {name}")
            }
            Self::Databases => "DATABASES",
            Self::Tables => "TABLES",
            Self::Views => "VIEWS",
            Self::TableStatus => "TABLE STATUS",
            Self::Variables => "VARIABLES",
            Self::Status => "STATUS",
            Self::Processlist => "PROCESSLIST",
            Self::Grants => "GRANTS",
            Self::Roles => "ROLES",
            Self::Catalogs => "CATALOGS",
            Self::Frontends => "FRONTENDS",
            Self::Backends => "BACKENDS",
            Self::Load => "LOAD",
            Self::Export => "EXPORT",
            Self::Warnings => "WARNINGS",
            Self::Errors => "ERRORS",
            Self::Engines => "ENGINES",
            Self::Charset => "CHARSET",
            Self::Collation => "COLLATION",
            Self::Triggers => "TRIGGERS",
            Self::Property => "PROPERTY",
            Self::Data => "DATA",
            Self::Functions => "FUNCTIONS",
        };
        f.write_str(word)
    }
}

/// `SHOW [GLOBAL | SESSION] [FULL] target [FROM db] [LIKE .. | WHERE ..] [LIMIT ..]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Show {
    pub scope: Option<VariableScope>,
    pub full: bool,
    pub target: ShowTarget,
    pub from: Option<ObjectName>,
    pub filter: Option<ShowFilter>,
    pub limit: Option<Limit>,
}

impl Show {
    /// A bare `SHOW target`.
    #[must_use]
    pub const fn new(target: ShowTarget) -> Self {
        Self {
            scope: None,
            full: false,
            target,
            from: None,
            filter: None,
            limit: None,
        }
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SHOW ")?;
        if let Some(scope) = self.scope {
            write!(f, "{} ", scope.as_str())?;
        }
        if self.full {
            f.write_str("FULL ")?;
        }
        write!(f, "{}", self.target)?;
        if let Some(from) = &self.from {
            write!(f, " FROM {from}")?;
        }
        match &self.filter {
            Some(ShowFilter::Like(pattern)) => write!(f, " LIKE {}", QuotedString(pattern))?,
            Some(ShowFilter::Where(expr)) => write!(f, " WHERE {expr}")?,
            None => {}
        }
        if let Some(limit) = &self.limit {
            write!(f, " {limit}")?;
        }
        Ok(())
    }
}

/// `DESCRIBE t [ALL]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Describe {
    pub table: ObjectName,
    pub all: bool,
}

impl fmt::Display for Describe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DESCRIBE {}", self.table)?;
        if self.all {
            f.write_str(" ALL")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplainLevel {
    Verbose,
    Graph,
    Plan,
}

/// `EXPLAIN [VERBOSE | GRAPH | PLAN] statement`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Explain {
    pub level: Option<ExplainLevel>,
    pub statement: Box<Statement>,
}

impl fmt::Display for Explain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EXPLAIN ")?;
        match self.level {
            Some(ExplainLevel::Verbose) => f.write_str("VERBOSE ")?,
            Some(ExplainLevel::Graph) => f.write_str("GRAPH ")?,
            Some(ExplainLevel::Plan) => f.write_str("PLAN ")?,
            None => {}
        }
        write!(f, "{}", self.statement)
    }
}

/// `USE [catalog.]db`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Use {
    pub catalog: Option<Ident>,
    pub database: Ident,
}

impl fmt::Display for Use {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("USE ")?;
        if let Some(catalog) = &self.catalog {
            write!(f, "{catalog}.")?;
        }
        write!(f, "{}", self.database)
    }
}

/// The left-hand side of a SET assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariableName {
    /// A session variable named bare: `exec_mem_limit`.
    Plain(Ident),
    /// `@name`
    User(String),
    /// `@@[scope.]name`
    System(String),
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(name) => write!(f, "{name}"),
            Self::User(name) => write!(
                f,
                "{}",
                Expr::Variable {
                    system: false,
                    name: name.clone()
                }
            ),
            Self::System(name) => write!(f, "@@{name}"),
        }
    }
}

/// `DEFAULT` or an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SetValue {
    Default,
    Expr(Expr),
}

/// One `[scope] name = value` item of a SET statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetVariable {
    pub scope: Option<VariableScope>,
    pub name: VariableName,
    pub value: SetValue,
}

impl fmt::Display for SetVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scope) = self.scope {
            write!(f, "{} ", scope.as_str())?;
        }
        write!(f, "{} = ", self.name)?;
        match &self.value {
            SetValue::Default => f.write_str("DEFAULT"),
            SetValue::Expr(expr) => write!(f, "{expr}"),
        }
    }
}

/// `SET NAMES charset [COLLATE collation]`; `charset` is `None` for `DEFAULT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetNames {
    pub charset: Option<String>,
    pub collate: Option<String>,
}

impl fmt::Display for SetNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SET NAMES ")?;
        match &self.charset {
            Some(charset) => write!(f, "{}", QuotedString(charset))?,
            None => f.write_str("DEFAULT")?,
        }
        if let Some(collate) = &self.collate {
            write!(f, " COLLATE {}", QuotedString(collate))?;
        }
        Ok(())
    }
}

/// `SET PASSWORD [FOR user] = PASSWORD('plain') | 'hashed'`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetPassword {
    pub user: Option<UserIdentity>,
    pub password: String,
    pub hashed: bool,
}

impl fmt::Display for SetPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SET PASSWORD ")?;
        if let Some(user) = &self.user {
            write!(f, "FOR {user} ")?;
        }
        if self.hashed {
            write!(f, "= {}", QuotedString(&self.password))
        } else {
            write!(f, "= PASSWORD({})", QuotedString(&self.password))
        }
    }
}

/// A part of a `db.table` privilege target; `*` matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GrantPart {
    Wildcard,
    Name(Ident),
}

impl fmt::Display for GrantPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str("*"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// What privileges apply to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GrantTarget {
    /// `*.*.*`, `db.*`, `ctl.db.tbl`
    Objects(Vec<GrantPart>),
    /// `RESOURCE 'name'`
    Resource(String),
    /// `WORKLOAD GROUP 'name'`
    WorkloadGroup(String),
}

impl fmt::Display for GrantTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Objects(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    write!(f, "{part}")?;
                }
                Ok(())
            }
            Self::Resource(name) => write!(f, "RESOURCE {}", QuotedString(name)),
            Self::WorkloadGroup(name) => write!(f, "WORKLOAD GROUP {}", QuotedString(name)),
        }
    }
}

/// What is granted or revoked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GrantObject {
    /// Uppercased privilege names on a target.
    Privileges {
        privileges: Vec<String>,
        target: GrantTarget,
    },
    /// Role names.
    Roles(Vec<String>),
}

/// Who receives (or loses) the privileges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Grantee {
    User(UserIdentity),
    Role(String),
}

/// Body of GRANT and REVOKE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grant {
    pub object: GrantObject,
    pub grantee: Grantee,
}

impl Grant {
    fn write(&self, f: &mut fmt::Formatter<'_>, verb: &str, preposition: &str) -> fmt::Result {
        write!(f, "{verb} ")?;
        match &self.object {
            GrantObject::Privileges { privileges, target } => {
                write!(f, "{} ON {target}", privileges.join(", "))?;
            }
            GrantObject::Roles(roles) => {
                for (i, role) in roles.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", QuotedString(role))?;
                }
            }
        }
        match &self.grantee {
            Grantee::User(user) => write!(f, " {preposition} {user}"),
            Grantee::Role(role) => write!(f, " {preposition} ROLE {}", QuotedString(role)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KillScope {
    Connection,
    Query,
}

/// `KILL [CONNECTION | QUERY] id`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Kill {
    pub scope: Option<KillScope>,
    /// A connection id or a quoted query id.
    pub id: Literal,
}

impl fmt::Display for Kill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KILL ")?;
        match self.scope {
            Some(KillScope::Connection) => f.write_str("CONNECTION ")?,
            Some(KillScope::Query) => f.write_str("QUERY ")?,
            None => {}
        }
        write!(f, "{}", self.id)
    }
}

/// `ADMIN ...`; the command after `ADMIN` is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Admin {
    /// Uppercased leading words of the command, e.g. `["SET", "FRONTEND", "CONFIG"]`.
    pub words: Vec<String>,
    pub text: String,
}

/// `ANALYZE TABLE t [(cols)] [WITH SYNC]` or `ANALYZE DATABASE db [WITH SYNC]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Analyze {
    pub database: bool,
    pub name: ObjectName,
    pub columns: Vec<Ident>,
    pub sync: bool,
}

impl fmt::Display for Analyze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let object = if self.database { "DATABASE" } else { "TABLE" };
        write!(f, "ANALYZE {object} {}", self.name)?;
        write_paren_list(f, &self.columns)?;
        if self.sync {
            f.write_str(" WITH SYNC")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshObject {
    Catalog,
    Database,
    Table,
    MaterializedView,
}

/// `REFRESH CATALOG | DATABASE | TABLE | MATERIALIZED VIEW name [COMPLETE | AUTO]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Refresh {
    pub object: RefreshObject,
    pub name: ObjectName,
    pub method: Option<RefreshMethod>,
}

impl fmt::Display for Refresh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let object = match self.object {
            RefreshObject::Catalog => "CATALOG",
            RefreshObject::Database => "DATABASE",
            RefreshObject::Table => "TABLE",
            RefreshObject::MaterializedView => "MATERIALIZED VIEW",
        };
        write!(f, "REFRESH {object} {}", self.name)?;
        if let Some(method) = self.method {
            write!(f, " {}", method.as_str())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecoverObject {
    Database,
    Table,
    Partition,
}

/// `RECOVER DATABASE db | TABLE t | PARTITION p FROM t [AS new_name]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recover {
    pub object: RecoverObject,
    pub name: ObjectName,
    pub from: Option<ObjectName>,
    pub new_name: Option<Ident>,
}

impl fmt::Display for Recover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let object = match self.object {
            RecoverObject::Database => "DATABASE",
            RecoverObject::Table => "TABLE",
            RecoverObject::Partition => "PARTITION",
        };
        write!(f, "RECOVER {object} {}", self.name)?;
        if let Some(from) = &self.from {
            write!(f, " FROM {from}")?;
        }
        if let Some(new_name) = &self.new_name {
            write!(f, " AS {new_name}")?;
        }
        Ok(())
    }
}

/// Kind of schema change job cancelled by `CANCEL ALTER TABLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlterJobKind {
    Column,
    Rollup,
    MaterializedView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelTarget {
    Load,
    Export,
    AlterTable(AlterJobKind),
}

/// `CANCEL LOAD | EXPORT [FROM db] [WHERE ..]`, `CANCEL ALTER TABLE kind FROM t`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cancel {
    pub target: CancelTarget,
    pub from: Option<ObjectName>,
    pub selection: Option<Expr>,
}

impl fmt::Display for Cancel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CANCEL ")?;
        match self.target {
            CancelTarget::Load => f.write_str("LOAD")?,
            CancelTarget::Export => f.write_str("EXPORT")?,
            CancelTarget::AlterTable(kind) => {
                let kind = match kind {
                    AlterJobKind::Column => "COLUMN",
                    AlterJobKind::Rollup => "ROLLUP",
                    AlterJobKind::MaterializedView => "MATERIALIZED VIEW",
                };
                write!(f, "ALTER TABLE {kind}")?;
            }
        }
        if let Some(from) = &self.from {
            write!(f, " FROM {from}")?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE {selection}")?;
        }
        Ok(())
    }
}

/// A statement the grammar recognizes by its leading keyword but does not
/// model. `text` is the statement exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unsupported {
    /// Uppercased leading words, e.g. `["CREATE", "FUNCTION"]`.
    pub keywords: Vec<String>,
    pub text: String,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query(query) => write!(f, "{query}"),
            Self::Insert(insert) => write!(f, "{insert}"),
            Self::Update(update) => write!(f, "{update}"),
            Self::Delete(delete) => write!(f, "{delete}"),
            Self::BrokerLoad(load) => write!(f, "{load}"),
            Self::MysqlLoad(load) => write!(f, "{load}"),
            Self::Export(export) => write!(f, "{export}"),
            Self::Truncate(truncate) => write!(f, "{truncate}"),
            Self::CreateTable(create) => write!(f, "{create}"),
            Self::CreateTableLike(create) => write!(f, "{create}"),
            Self::CreateView(create) => write!(f, "{create}"),
            Self::CreateMaterializedView(create) => write!(f, "{create}"),
            Self::CreateDatabase(create) => write!(f, "{create}"),
            Self::CreateIndex(create) => write!(f, "{create}"),
            Self::CreateUser(create) => write!(f, "{create}"),
            Self::CreateRole(create) => write!(f, "{create}"),
            Self::CreateCatalog(create) => write!(f, "{create}"),
            Self::AlterTable(alter) => write!(f, "{alter}"),
            Self::AlterView(alter) => write!(f, "{alter}"),
            Self::AlterDatabase(alter) => write!(f, "{alter}"),
            Self::AlterUser(alter) => write!(f, "{alter}"),
            Self::AlterSystem(alter) => write!(f, "{alter}"),
            Self::Drop(drop) => write!(f, "{drop}"),
            Self::DropUser(drop) => write!(f, "{drop}"),
            Self::DropRole(drop) => write!(f, "{drop}"),
            Self::Show(show) => write!(f, "{show}"),
            Self::Describe(describe) => write!(f, "{describe}"),
            Self::Explain(explain) => write!(f, "{explain}"),
            Self::Use(use_db) => write!(f, "{use_db}"),
            Self::SwitchCatalog(catalog) => write!(f, "SWITCH {catalog}"),
            Self::SetVariables(items) => write!(f, "SET {}", comma_separated(items)),
            Self::SetNames(names) => write!(f, "{names}"),
            Self::SetPassword(password) => write!(f, "{password}"),
            Self::Begin { label } => {
                f.write_str("BEGIN")?;
                if let Some(label) = label {
                    write!(f, " WITH LABEL {label}")?;
                }
                Ok(())
            }
            Self::Commit => f.write_str("COMMIT"),
            Self::Rollback => f.write_str("ROLLBACK"),
            Self::Grant(grant) => grant.write(f, "GRANT", "TO"),
            Self::Revoke(revoke) => revoke.write(f, "REVOKE", "FROM"),
            Self::Kill(kill) => write!(f, "{kill}"),
            Self::Admin(admin) => write!(f, "ADMIN {}", admin.text),
            Self::Analyze(analyze) => write!(f, "{analyze}"),
            Self::Refresh(refresh) => write!(f, "{refresh}"),
            Self::Recover(recover) => write!(f, "{recover}"),
            Self::Cancel(cancel) => write!(f, "{cancel}"),
            Self::Help(topic) => write!(f, "HELP {}", QuotedString(topic)),
            Self::Sync => f.write_str("SYNC"),
            Self::Unsupported(unsupported) => f.write_str(&unsupported.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_display() {
        let mut show = Show::new(ShowTarget::Tables);
        show.full = true;
        show.from = Some(ObjectName::new(["db"]));
        show.filter = Some(ShowFilter::Like(String::from("t%")));
        assert_eq!(show.to_string(), "SHOW FULL TABLES FROM db LIKE 't%'");
    }

    #[test]
    fn test_set_variables_display() {
        let stmt = Statement::SetVariables(vec![
            SetVariable {
                scope: Some(VariableScope::Global),
                name: VariableName::Plain(Ident::new("exec_mem_limit")),
                value: SetValue::Expr(Expr::Literal(Literal::Integer(1024))),
            },
            SetVariable {
                scope: None,
                name: VariableName::User(String::from("x")),
                value: SetValue::Default,
            },
        ]);
        assert_eq!(stmt.to_string(), "SET GLOBAL exec_mem_limit = 1024, @x = DEFAULT");
    }

    #[test]
    fn test_grant_display() {
        let grant = Statement::Grant(Grant {
            object: GrantObject::Privileges {
                privileges: vec![String::from("SELECT_PRIV"), String::from("LOAD_PRIV")],
                target: GrantTarget::Objects(vec![
                    GrantPart::Name(Ident::new("db1")),
                    GrantPart::Wildcard,
                ]),
            },
            grantee: Grantee::User(UserIdentity {
                name: String::from("jack"),
                host: Some(String::from("%")),
            }),
        });
        assert_eq!(grant.to_string(), "GRANT SELECT_PRIV, LOAD_PRIV ON db1.* TO 'jack'@'%'");
    }

    #[test]
    fn test_unsupported_prints_source_text() {
        let stmt = Statement::Unsupported(Unsupported {
            keywords: vec![String::from("LOCK"), String::from("TABLES")],
            text: String::from("LOCK TABLES t READ"),
        });
        assert_eq!(stmt.to_string(), "LOCK TABLES t READ");
    }
}
