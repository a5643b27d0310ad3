//! Data definition statements: CREATE, ALTER and DROP.

use std::fmt;

use super::display::{comma_separated, write_paren_list, QuotedString};
use super::{DataType, Expr, Ident, IntervalUnit, Literal, ObjectName, Property, Query};

/// Aggregation applied to a value column of an AGGREGATE KEY table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateType {
    Sum,
    Max,
    Min,
    Replace,
    ReplaceIfNotNull,
    HllUnion,
    BitmapUnion,
    QuantileUnion,
    Generic,
}

impl AggregateType {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name.to_ascii_uppercase().as_str() {
            "SUM" => Self::Sum,
            "MAX" => Self::Max,
            "MIN" => Self::Min,
            "REPLACE" => Self::Replace,
            "REPLACE_IF_NOT_NULL" => Self::ReplaceIfNotNull,
            "HLL_UNION" => Self::HllUnion,
            "BITMAP_UNION" => Self::BitmapUnion,
            "QUANTILE_UNION" => Self::QuantileUnion,
            "GENERIC" => Self::Generic,
            _ => return None,
        };
        Some(ty)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Replace => "REPLACE",
            Self::ReplaceIfNotNull => "REPLACE_IF_NOT_NULL",
            Self::HllUnion => "HLL_UNION",
            Self::BitmapUnion => "BITMAP_UNION",
            Self::QuantileUnion => "QUANTILE_UNION",
            Self::Generic => "GENERIC",
        }
    }
}

/// A column definition in CREATE TABLE or ALTER TABLE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnDef {
    pub name: Ident,
    pub data_type: DataType,
    pub key: bool,
    pub aggregate: Option<AggregateType>,
    /// `Some(false)` for `NOT NULL`, `Some(true)` for an explicit `NULL`.
    pub nullable: Option<bool>,
    pub auto_increment: bool,
    /// Initial value from `AUTO_INCREMENT(n)`.
    pub auto_increment_start: Option<u64>,
    pub default: Option<Expr>,
    pub on_update: Option<Expr>,
    pub comment: Option<String>,
}

impl ColumnDef {
    /// Creates a column with no options.
    #[must_use]
    pub fn new(name: impl Into<Ident>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            key: false,
            aggregate: None,
            nullable: None,
            auto_increment: false,
            auto_increment_start: None,
            default: None,
            on_update: None,
            comment: None,
        }
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)?;
        if self.key {
            f.write_str(" KEY")?;
        }
        if let Some(aggregate) = self.aggregate {
            write!(f, " {}", aggregate.as_str())?;
        }
        match self.nullable {
            Some(true) => f.write_str(" NULL")?,
            Some(false) => f.write_str(" NOT NULL")?,
            None => {}
        }
        if self.auto_increment {
            f.write_str(" AUTO_INCREMENT")?;
            if let Some(start) = self.auto_increment_start {
                write!(f, "({start})")?;
            }
        }
        if let Some(default) = &self.default {
            write!(f, " DEFAULT {default}")?;
        }
        if let Some(on_update) = &self.on_update {
            write!(f, " ON UPDATE {on_update}")?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT {}", QuotedString(comment))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
    Bitmap,
    Inverted,
    NgramBf,
}

impl IndexType {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "BITMAP" => Some(Self::Bitmap),
            "INVERTED" => Some(Self::Inverted),
            "NGRAM_BF" => Some(Self::NgramBf),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bitmap => "BITMAP",
            Self::Inverted => "INVERTED",
            Self::NgramBf => "NGRAM_BF",
        }
    }
}

/// `INDEX name (cols) [USING type] [PROPERTIES (...)] [COMMENT '...']`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexDef {
    pub name: Ident,
    pub columns: Vec<Ident>,
    pub index_type: Option<IndexType>,
    pub properties: Vec<Property>,
    pub comment: Option<String>,
}

impl fmt::Display for IndexDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INDEX {}", self.name)?;
        write_paren_list(f, &self.columns)?;
        write_index_options(f, self.index_type, &self.properties, self.comment.as_deref())
    }
}

fn write_index_options(
    f: &mut fmt::Formatter<'_>,
    index_type: Option<IndexType>,
    properties: &[Property],
    comment: Option<&str>,
) -> fmt::Result {
    if let Some(index_type) = index_type {
        write!(f, " USING {}", index_type.as_str())?;
    }
    if !properties.is_empty() {
        write!(f, " PROPERTIES ({})", comma_separated(properties))?;
    }
    if let Some(comment) = comment {
        write!(f, " COMMENT {}", QuotedString(comment))?;
    }
    Ok(())
}

/// Data model of an OLAP table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Duplicate,
    Unique,
    Aggregate,
}

/// `DUPLICATE KEY (a, b)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyDesc {
    pub kind: KeyKind,
    pub columns: Vec<Ident>,
}

impl fmt::Display for KeyDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            KeyKind::Duplicate => "DUPLICATE",
            KeyKind::Unique => "UNIQUE",
            KeyKind::Aggregate => "AGGREGATE",
        };
        write!(f, "{kind} KEY ({})", comma_separated(&self.columns))
    }
}

/// A single value in a partition bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartitionValue {
    MaxValue,
    Literal(Literal),
}

impl fmt::Display for PartitionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxValue => f.write_str("MAXVALUE"),
            Self::Literal(lit) => write!(f, "{lit}"),
        }
    }
}

/// Upper bound of a `VALUES LESS THAN` partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LessThan {
    MaxValue,
    Values(Vec<PartitionValue>),
}

/// A partition definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartitionDef {
    /// `PARTITION p VALUES LESS THAN (...)`
    LessThan {
        if_not_exists: bool,
        name: Ident,
        bound: LessThan,
    },
    /// `PARTITION p VALUES [(lower), (upper))`
    FixedRange {
        if_not_exists: bool,
        name: Ident,
        lower: Vec<PartitionValue>,
        upper: Vec<PartitionValue>,
    },
    /// `PARTITION p VALUES IN ((...), ...)`
    In {
        if_not_exists: bool,
        name: Ident,
        values: Vec<Vec<PartitionValue>>,
    },
    /// `FROM (...) TO (...) INTERVAL n [unit]`
    Step {
        from: Vec<PartitionValue>,
        to: Vec<PartitionValue>,
        interval: u64,
        unit: Option<IntervalUnit>,
    },
}

fn if_not_exists(flag: bool) -> &'static str {
    if flag {
        "IF NOT EXISTS "
    } else {
        ""
    }
}

fn if_exists(flag: bool) -> &'static str {
    if flag {
        "IF EXISTS "
    } else {
        ""
    }
}

impl fmt::Display for PartitionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LessThan {
                if_not_exists: ine,
                name,
                bound,
            } => {
                write!(f, "PARTITION {}{name} VALUES LESS THAN ", if_not_exists(*ine))?;
                match bound {
                    LessThan::MaxValue => f.write_str("MAXVALUE"),
                    LessThan::Values(values) => write!(f, "({})", comma_separated(values)),
                }
            }
            Self::FixedRange {
                if_not_exists: ine,
                name,
                lower,
                upper,
            } => write!(
                f,
                "PARTITION {}{name} VALUES [({}), ({}))",
                if_not_exists(*ine),
                comma_separated(lower),
                comma_separated(upper)
            ),
            Self::In {
                if_not_exists: ine,
                name,
                values,
            } => {
                write!(f, "PARTITION {}{name} VALUES IN (", if_not_exists(*ine))?;
                for (i, tuple) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "({})", comma_separated(tuple))?;
                }
                f.write_str(")")
            }
            Self::Step {
                from,
                to,
                interval,
                unit,
            } => {
                write!(
                    f,
                    "FROM ({}) TO ({}) INTERVAL {interval}",
                    comma_separated(from),
                    comma_separated(to)
                )?;
                if let Some(unit) = unit {
                    write!(f, " {}", unit.as_str())?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionKind {
    Range,
    List,
}

/// `PARTITION BY RANGE|LIST (cols) (defs)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartitionDesc {
    pub kind: PartitionKind,
    pub columns: Vec<Ident>,
    pub partitions: Vec<PartitionDef>,
}

impl fmt::Display for PartitionDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            PartitionKind::Range => "RANGE",
            PartitionKind::List => "LIST",
        };
        write!(
            f,
            "PARTITION BY {kind} ({}) ({})",
            comma_separated(&self.columns),
            comma_separated(&self.partitions)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Buckets {
    Auto,
    Count(u64),
}

/// `DISTRIBUTED BY HASH (cols) | RANDOM [BUCKETS n | AUTO]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Distribution {
    Hash {
        columns: Vec<Ident>,
        buckets: Option<Buckets>,
    },
    Random {
        buckets: Option<Buckets>,
    },
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buckets = match self {
            Self::Hash { columns, buckets } => {
                write!(f, "DISTRIBUTED BY HASH ({})", comma_separated(columns))?;
                buckets
            }
            Self::Random { buckets } => {
                f.write_str("DISTRIBUTED BY RANDOM")?;
                buckets
            }
        };
        match buckets {
            Some(Buckets::Auto) => f.write_str(" BUCKETS AUTO"),
            Some(Buckets::Count(n)) => write!(f, " BUCKETS {n}"),
            None => Ok(()),
        }
    }
}

/// `CREATE [EXTERNAL | TEMPORARY] TABLE ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreateTable {
    pub external: bool,
    pub temporary: bool,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub columns: Vec<ColumnDef>,
    pub indexes: Vec<IndexDef>,
    pub engine: Option<Ident>,
    pub key: Option<KeyDesc>,
    pub comment: Option<String>,
    pub partition: Option<PartitionDesc>,
    pub distribution: Option<Distribution>,
    pub properties: Vec<Property>,
    pub as_query: Option<Box<Query>>,
}

impl CreateTable {
    /// Creates a bare `CREATE TABLE name` with no clauses.
    #[must_use]
    pub const fn new(name: ObjectName) -> Self {
        Self {
            external: false,
            temporary: false,
            if_not_exists: false,
            name,
            columns: Vec::new(),
            indexes: Vec::new(),
            engine: None,
            key: None,
            comment: None,
            partition: None,
            distribution: None,
            properties: Vec::new(),
            as_query: None,
        }
    }
}

impl fmt::Display for CreateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE ")?;
        if self.external {
            f.write_str("EXTERNAL ")?;
        }
        if self.temporary {
            f.write_str("TEMPORARY ")?;
        }
        write!(f, "TABLE {}{}", if_not_exists(self.if_not_exists), self.name)?;
        if !self.columns.is_empty() || !self.indexes.is_empty() {
            f.write_str(" (")?;
            let mut sep = "";
            for column in &self.columns {
                write!(f, "{sep}{column}")?;
                sep = ", ";
            }
            for index in &self.indexes {
                write!(f, "{sep}{index}")?;
                sep = ", ";
            }
            f.write_str(")")?;
        }
        if let Some(engine) = &self.engine {
            write!(f, " ENGINE = {engine}")?;
        }
        if let Some(key) = &self.key {
            write!(f, " {key}")?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT {}", QuotedString(comment))?;
        }
        if let Some(partition) = &self.partition {
            write!(f, " {partition}")?;
        }
        if let Some(distribution) = &self.distribution {
            write!(f, " {distribution}")?;
        }
        if !self.properties.is_empty() {
            write!(f, " PROPERTIES ({})", comma_separated(&self.properties))?;
        }
        if let Some(query) = &self.as_query {
            write!(f, " AS {query}")?;
        }
        Ok(())
    }
}

/// `CREATE TABLE [IF NOT EXISTS] t LIKE source`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreateTableLike {
    pub external: bool,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub like: ObjectName,
}

impl fmt::Display for CreateTableLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE ")?;
        if self.external {
            f.write_str("EXTERNAL ")?;
        }
        write!(
            f,
            "TABLE {}{} LIKE {}",
            if_not_exists(self.if_not_exists),
            self.name,
            self.like
        )
    }
}

/// A column of a view's explicit column list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewColumn {
    pub name: Ident,
    pub comment: Option<String>,
}

impl fmt::Display for ViewColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT {}", QuotedString(comment))?;
        }
        Ok(())
    }
}

/// `CREATE [OR REPLACE] VIEW ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreateView {
    pub or_replace: bool,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub columns: Vec<ViewColumn>,
    pub comment: Option<String>,
    pub query: Box<Query>,
}

impl fmt::Display for CreateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE ")?;
        if self.or_replace {
            f.write_str("OR REPLACE ")?;
        }
        write!(f, "VIEW {}{}", if_not_exists(self.if_not_exists), self.name)?;
        write_paren_list(f, &self.columns)?;
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT {}", QuotedString(comment))?;
        }
        write!(f, " AS {}", self.query)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    Immediate,
    Deferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshMethod {
    Complete,
    Auto,
}

impl RefreshMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "COMPLETE",
            Self::Auto => "AUTO",
        }
    }
}

/// `ON MANUAL | ON COMMIT | ON SCHEDULE EVERY n unit [STARTS '...']`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RefreshTrigger {
    Manual,
    Commit,
    Schedule {
        every: u64,
        unit: IntervalUnit,
        starts: Option<String>,
    },
}

/// `REFRESH [method] [ON trigger]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefreshSpec {
    pub method: Option<RefreshMethod>,
    pub trigger: Option<RefreshTrigger>,
}

impl fmt::Display for RefreshSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("REFRESH")?;
        if let Some(method) = self.method {
            write!(f, " {}", method.as_str())?;
        }
        match &self.trigger {
            Some(RefreshTrigger::Manual) => f.write_str(" ON MANUAL"),
            Some(RefreshTrigger::Commit) => f.write_str(" ON COMMIT"),
            Some(RefreshTrigger::Schedule {
                every,
                unit,
                starts,
            }) => {
                write!(f, " ON SCHEDULE EVERY {every} {}", unit.as_str())?;
                if let Some(starts) = starts {
                    write!(f, " STARTS {}", QuotedString(starts))?;
                }
                Ok(())
            }
            None => Ok(()),
        }
    }
}

/// `CREATE MATERIALIZED VIEW ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreateMaterializedView {
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub columns: Vec<ViewColumn>,
    pub build: Option<BuildMode>,
    pub refresh: Option<RefreshSpec>,
    pub key: Option<KeyDesc>,
    pub comment: Option<String>,
    pub partition_by: Vec<Ident>,
    pub distribution: Option<Distribution>,
    pub properties: Vec<Property>,
    pub query: Box<Query>,
}

impl fmt::Display for CreateMaterializedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREATE MATERIALIZED VIEW {}{}",
            if_not_exists(self.if_not_exists),
            self.name
        )?;
        write_paren_list(f, &self.columns)?;
        match self.build {
            Some(BuildMode::Immediate) => f.write_str(" BUILD IMMEDIATE")?,
            Some(BuildMode::Deferred) => f.write_str(" BUILD DEFERRED")?,
            None => {}
        }
        if let Some(refresh) = &self.refresh {
            write!(f, " {refresh}")?;
        }
        if let Some(key) = &self.key {
            write!(f, " {key}")?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT {}", QuotedString(comment))?;
        }
        if !self.partition_by.is_empty() {
            write!(f, " PARTITION BY ({})", comma_separated(&self.partition_by))?;
        }
        if let Some(distribution) = &self.distribution {
            write!(f, " {distribution}")?;
        }
        if !self.properties.is_empty() {
            write!(f, " PROPERTIES ({})", comma_separated(&self.properties))?;
        }
        write!(f, " AS {}", self.query)
    }
}

/// `CREATE DATABASE [IF NOT EXISTS] name [PROPERTIES (...)]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreateDatabase {
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub properties: Vec<Property>,
}

impl fmt::Display for CreateDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREATE DATABASE {}{}",
            if_not_exists(self.if_not_exists),
            self.name
        )?;
        if !self.properties.is_empty() {
            write!(f, " PROPERTIES ({})", comma_separated(&self.properties))?;
        }
        Ok(())
    }
}

/// `CREATE INDEX [IF NOT EXISTS] name ON t (cols) ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreateIndex {
    pub if_not_exists: bool,
    pub name: Ident,
    pub table: ObjectName,
    pub columns: Vec<Ident>,
    pub index_type: Option<IndexType>,
    pub properties: Vec<Property>,
    pub comment: Option<String>,
}

impl fmt::Display for CreateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREATE INDEX {}{} ON {} ({})",
            if_not_exists(self.if_not_exists),
            self.name,
            self.table,
            comma_separated(&self.columns)
        )?;
        write_index_options(f, self.index_type, &self.properties, self.comment.as_deref())
    }
}

/// `'name'@'host'`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserIdentity {
    pub name: String,
    pub host: Option<String>,
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", QuotedString(&self.name))?;
        if let Some(host) = &self.host {
            write!(f, "@{}", QuotedString(host))?;
        }
        Ok(())
    }
}

/// Options shared by CREATE USER and ALTER USER.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserOptions {
    /// `IDENTIFIED BY [PASSWORD] '...'`; `hashed` for the PASSWORD form.
    pub password: Option<String>,
    pub hashed: bool,
    pub default_role: Option<String>,
    pub comment: Option<String>,
}

impl fmt::Display for UserOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(password) = &self.password {
            f.write_str(" IDENTIFIED BY ")?;
            if self.hashed {
                f.write_str("PASSWORD ")?;
            }
            write!(f, "{}", QuotedString(password))?;
        }
        if let Some(role) = &self.default_role {
            write!(f, " DEFAULT ROLE {}", QuotedString(role))?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT {}", QuotedString(comment))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreateUser {
    pub if_not_exists: bool,
    pub user: UserIdentity,
    pub options: UserOptions,
}

impl fmt::Display for CreateUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREATE USER {}{}{}",
            if_not_exists(self.if_not_exists),
            self.user,
            self.options
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreateRole {
    pub if_not_exists: bool,
    pub name: Ident,
    pub comment: Option<String>,
}

impl fmt::Display for CreateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE ROLE {}{}", if_not_exists(self.if_not_exists), self.name)?;
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT {}", QuotedString(comment))?;
        }
        Ok(())
    }
}

/// `CREATE CATALOG [IF NOT EXISTS] name [WITH RESOURCE r] [COMMENT ..] [PROPERTIES (..)]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreateCatalog {
    pub if_not_exists: bool,
    pub name: Ident,
    pub resource: Option<Ident>,
    pub comment: Option<String>,
    pub properties: Vec<Property>,
}

impl fmt::Display for CreateCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE CATALOG {}{}", if_not_exists(self.if_not_exists), self.name)?;
        if let Some(resource) = &self.resource {
            write!(f, " WITH RESOURCE {resource}")?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT {}", QuotedString(comment))?;
        }
        if !self.properties.is_empty() {
            write!(f, " PROPERTIES ({})", comma_separated(&self.properties))?;
        }
        Ok(())
    }
}

/// `FIRST` or `AFTER col` in ADD/MODIFY COLUMN.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnPosition {
    First,
    After(Ident),
}

impl fmt::Display for ColumnPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("FIRST"),
            Self::After(column) => write!(f, "AFTER {column}"),
        }
    }
}

/// One clause of ALTER TABLE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlterTableOperation {
    AddColumn {
        column: ColumnDef,
        position: Option<ColumnPosition>,
    },
    /// `ADD COLUMN (a INT, b INT)`
    AddColumns(Vec<ColumnDef>),
    DropColumn(Ident),
    ModifyColumn {
        column: ColumnDef,
        position: Option<ColumnPosition>,
    },
    RenameColumn {
        old: Ident,
        new: Ident,
    },
    RenameTable(Ident),
    AddPartition(PartitionDef),
    DropPartition {
        if_exists: bool,
        name: Ident,
        force: bool,
    },
    SetProperties(Vec<Property>),
    AddIndex(IndexDef),
    DropIndex {
        if_exists: bool,
        name: Ident,
    },
    ModifyComment(String),
}

impl fmt::Display for AlterTableOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddColumn { column, position } | Self::ModifyColumn { column, position } => {
                let verb = if matches!(self, Self::AddColumn { .. }) {
                    "ADD"
                } else {
                    "MODIFY"
                };
                write!(f, "{verb} COLUMN {column}")?;
                if let Some(position) = position {
                    write!(f, " {position}")?;
                }
                Ok(())
            }
            Self::AddColumns(columns) => write!(f, "ADD COLUMN ({})", comma_separated(columns)),
            Self::DropColumn(name) => write!(f, "DROP COLUMN {name}"),
            Self::RenameColumn { old, new } => write!(f, "RENAME COLUMN {old} {new}"),
            Self::RenameTable(name) => write!(f, "RENAME {name}"),
            Self::AddPartition(def) => write!(f, "ADD {def}"),
            Self::DropPartition {
                if_exists: ie,
                name,
                force,
            } => {
                write!(f, "DROP PARTITION {}{name}", if_exists(*ie))?;
                if *force {
                    f.write_str(" FORCE")?;
                }
                Ok(())
            }
            Self::SetProperties(properties) => write!(f, "SET ({})", comma_separated(properties)),
            Self::AddIndex(index) => write!(f, "ADD {index}"),
            Self::DropIndex { if_exists: ie, name } => {
                write!(f, "DROP INDEX {}{name}", if_exists(*ie))
            }
            Self::ModifyComment(comment) => write!(f, "MODIFY COMMENT {}", QuotedString(comment)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlterTable {
    pub name: ObjectName,
    pub operations: Vec<AlterTableOperation>,
}

impl fmt::Display for AlterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ALTER TABLE {} {}",
            self.name,
            comma_separated(&self.operations)
        )
    }
}

/// `ALTER VIEW name [(cols)] [COMMENT ..] AS query`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlterView {
    pub name: ObjectName,
    pub columns: Vec<ViewColumn>,
    pub comment: Option<String>,
    pub query: Box<Query>,
}

impl fmt::Display for AlterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER VIEW {}", self.name)?;
        write_paren_list(f, &self.columns)?;
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT {}", QuotedString(comment))?;
        }
        write!(f, " AS {}", self.query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlterDatabaseOperation {
    SetProperties(Vec<Property>),
    Rename(Ident),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlterDatabase {
    pub name: ObjectName,
    pub operation: AlterDatabaseOperation,
}

impl fmt::Display for AlterDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER DATABASE {} ", self.name)?;
        match &self.operation {
            AlterDatabaseOperation::SetProperties(properties) => {
                write!(f, "SET PROPERTIES ({})", comma_separated(properties))
            }
            AlterDatabaseOperation::Rename(name) => write!(f, "RENAME {name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlterUser {
    pub if_exists: bool,
    pub user: UserIdentity,
    pub options: UserOptions,
}

impl fmt::Display for AlterUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ALTER USER {}{}{}",
            if_exists(self.if_exists),
            self.user,
            self.options
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemAction {
    Add,
    Drop,
    Decommission,
}

/// Kind of cluster node named by ALTER SYSTEM.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClusterNode {
    Backend,
    Frontend,
    Follower,
    Observer,
    Broker(Ident),
}

/// `ALTER SYSTEM ADD BACKEND 'host:port', ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlterSystem {
    pub action: SystemAction,
    pub node: ClusterNode,
    pub hosts: Vec<String>,
}

impl fmt::Display for AlterSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.action {
            SystemAction::Add => "ADD",
            SystemAction::Drop => "DROP",
            SystemAction::Decommission => "DECOMMISSION",
        };
        write!(f, "ALTER SYSTEM {action} ")?;
        match &self.node {
            ClusterNode::Backend => f.write_str("BACKEND")?,
            ClusterNode::Frontend => f.write_str("FRONTEND")?,
            ClusterNode::Follower => f.write_str("FOLLOWER")?,
            ClusterNode::Observer => f.write_str("OBSERVER")?,
            ClusterNode::Broker(name) => write!(f, "BROKER {name}")?,
        }
        for (i, host) in self.hosts.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{}", QuotedString(host))?;
        }
        Ok(())
    }
}

/// Objects removable with plain `DROP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Table,
    View,
    Database,
    MaterializedView,
    Catalog,
    Index,
}

impl ObjectType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "TABLE",
            Self::View => "VIEW",
            Self::Database => "DATABASE",
            Self::MaterializedView => "MATERIALIZED VIEW",
            Self::Catalog => "CATALOG",
            Self::Index => "INDEX",
        }
    }
}

/// `DROP <object> [IF EXISTS] name [ON table] [FORCE]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Drop {
    pub object_type: ObjectType,
    pub if_exists: bool,
    pub name: ObjectName,
    pub on: Option<ObjectName>,
    pub force: bool,
}

impl fmt::Display for Drop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DROP {} {}{}",
            self.object_type.as_str(),
            if_exists(self.if_exists),
            self.name
        )?;
        if let Some(on) = &self.on {
            write!(f, " ON {on}")?;
        }
        if self.force {
            f.write_str(" FORCE")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropUser {
    pub if_exists: bool,
    pub user: UserIdentity,
}

impl fmt::Display for DropUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DROP USER {}{}", if_exists(self.if_exists), self.user)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropRole {
    pub if_exists: bool,
    pub name: Ident,
}

impl fmt::Display for DropRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DROP ROLE {}{}", if_exists(self.if_exists), self.name)
    }
}
