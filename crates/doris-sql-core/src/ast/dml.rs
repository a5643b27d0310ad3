//! Data manipulation statements: INSERT, UPDATE, DELETE, LOAD, EXPORT, TRUNCATE.

use std::fmt;

use super::display::{comma_separated, write_paren_list, QuotedString};
use super::{Expr, Ident, ObjectName, Property, Query, TableRef};

/// `column = value`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub column: ObjectName,
    pub value: Expr,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.column, self.value)
    }
}

/// Where inserted rows come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InsertSource {
    Query(Box<Query>),
    Values(Vec<Vec<Expr>>),
}

/// `INSERT INTO|OVERWRITE TABLE ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Insert {
    pub overwrite: bool,
    pub table: ObjectName,
    pub partitions: Vec<Ident>,
    pub label: Option<Ident>,
    pub columns: Vec<Ident>,
    pub source: InsertSource,
}

impl fmt::Display for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.overwrite {
            write!(f, "INSERT OVERWRITE TABLE {}", self.table)?;
        } else {
            write!(f, "INSERT INTO {}", self.table)?;
        }
        if !self.partitions.is_empty() {
            write!(f, " PARTITION ({})", comma_separated(&self.partitions))?;
        }
        if let Some(label) = &self.label {
            write!(f, " WITH LABEL {label}")?;
        }
        write_paren_list(f, &self.columns)?;
        match &self.source {
            InsertSource::Query(query) => write!(f, " {query}"),
            InsertSource::Values(rows) => {
                f.write_str(" VALUES ")?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "({})", comma_separated(row))?;
                }
                Ok(())
            }
        }
    }
}

/// `UPDATE t SET ... [FROM ...] [WHERE ...]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Update {
    pub table: ObjectName,
    pub alias: Option<Ident>,
    pub assignments: Vec<Assignment>,
    pub from: Vec<TableRef>,
    pub selection: Option<Expr>,
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UPDATE {}", self.table)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        write!(f, " SET {}", comma_separated(&self.assignments))?;
        if !self.from.is_empty() {
            write!(f, " FROM {}", comma_separated(&self.from))?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE {selection}")?;
        }
        Ok(())
    }
}

/// `DELETE FROM t [PARTITION (...)] [USING ...] [WHERE ...]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delete {
    pub table: ObjectName,
    pub alias: Option<Ident>,
    pub partitions: Vec<Ident>,
    pub using: Vec<TableRef>,
    pub selection: Option<Expr>,
}

impl fmt::Display for Delete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DELETE FROM {}", self.table)?;
        if !self.partitions.is_empty() {
            write!(f, " PARTITION ({})", comma_separated(&self.partitions))?;
        }
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        if !self.using.is_empty() {
            write!(f, " USING {}", comma_separated(&self.using))?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE {selection}")?;
        }
        Ok(())
    }
}

/// `WITH BROKER name (...)`, `WITH S3 (...)`, `WITH RESOURCE name (...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageClause {
    /// Uppercased storage kind: `BROKER`, `S3`, `HDFS`, `RESOURCE`, ...
    pub kind: String,
    pub name: Option<Ident>,
    pub properties: Vec<Property>,
}

impl fmt::Display for StorageClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WITH {}", self.kind)?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        write_paren_list(f, &self.properties)
    }
}

/// One `DATA INFILE (...) INTO TABLE t ...` entry of a broker load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataDescription {
    pub files: Vec<String>,
    pub negative: bool,
    pub table: Ident,
    pub partitions: Vec<Ident>,
    pub column_separator: Option<String>,
    pub line_delimiter: Option<String>,
    pub format: Option<String>,
    pub columns: Vec<Ident>,
    pub set: Vec<Assignment>,
    pub selection: Option<Expr>,
}

impl fmt::Display for DataDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DATA INFILE (")?;
        for (i, file) in self.files.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", QuotedString(file))?;
        }
        f.write_str(")")?;
        if self.negative {
            f.write_str(" NEGATIVE")?;
        }
        write!(f, " INTO TABLE {}", self.table)?;
        if !self.partitions.is_empty() {
            write!(f, " PARTITION ({})", comma_separated(&self.partitions))?;
        }
        if let Some(sep) = &self.column_separator {
            write!(f, " COLUMNS TERMINATED BY {}", QuotedString(sep))?;
        }
        if let Some(delim) = &self.line_delimiter {
            write!(f, " LINES TERMINATED BY {}", QuotedString(delim))?;
        }
        if let Some(format) = &self.format {
            write!(f, " FORMAT AS {}", QuotedString(format))?;
        }
        write_paren_list(f, &self.columns)?;
        if !self.set.is_empty() {
            write!(f, " SET ({})", comma_separated(&self.set))?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE {selection}")?;
        }
        Ok(())
    }
}

/// `LOAD LABEL db.label (DATA INFILE ...) [WITH ...] [PROPERTIES (...)]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BrokerLoad {
    pub label: ObjectName,
    pub data: Vec<DataDescription>,
    pub storage: Option<StorageClause>,
    pub properties: Vec<Property>,
}

impl fmt::Display for BrokerLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LOAD LABEL {} ({})",
            self.label,
            comma_separated(&self.data)
        )?;
        if let Some(storage) = &self.storage {
            write!(f, " {storage}")?;
        }
        if !self.properties.is_empty() {
            write!(f, " PROPERTIES ({})", comma_separated(&self.properties))?;
        }
        Ok(())
    }
}

/// `LOAD DATA [LOCAL] INFILE 'file' INTO TABLE t ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MysqlLoad {
    pub local: bool,
    pub file: String,
    pub table: ObjectName,
    pub partitions: Vec<Ident>,
    pub column_separator: Option<String>,
    pub line_delimiter: Option<String>,
    pub ignore_lines: Option<u64>,
    pub columns: Vec<Ident>,
    pub set: Vec<Assignment>,
    pub properties: Vec<Property>,
}

impl fmt::Display for MysqlLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LOAD DATA ")?;
        if self.local {
            f.write_str("LOCAL ")?;
        }
        write!(
            f,
            "INFILE {} INTO TABLE {}",
            QuotedString(&self.file),
            self.table
        )?;
        if !self.partitions.is_empty() {
            write!(f, " PARTITION ({})", comma_separated(&self.partitions))?;
        }
        if let Some(sep) = &self.column_separator {
            write!(f, " COLUMNS TERMINATED BY {}", QuotedString(sep))?;
        }
        if let Some(delim) = &self.line_delimiter {
            write!(f, " LINES TERMINATED BY {}", QuotedString(delim))?;
        }
        if let Some(n) = self.ignore_lines {
            write!(f, " IGNORE {n} LINES")?;
        }
        write_paren_list(f, &self.columns)?;
        if !self.set.is_empty() {
            write!(f, " SET ({})", comma_separated(&self.set))?;
        }
        if !self.properties.is_empty() {
            write!(f, " PROPERTIES ({})", comma_separated(&self.properties))?;
        }
        Ok(())
    }
}

/// `EXPORT TABLE t [PARTITION (...)] [WHERE ...] TO 'path' ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Export {
    pub table: ObjectName,
    pub partitions: Vec<Ident>,
    pub selection: Option<Expr>,
    pub path: String,
    pub properties: Vec<Property>,
    pub storage: Option<StorageClause>,
}

impl fmt::Display for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EXPORT TABLE {}", self.table)?;
        if !self.partitions.is_empty() {
            write!(f, " PARTITION ({})", comma_separated(&self.partitions))?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE {selection}")?;
        }
        write!(f, " TO {}", QuotedString(&self.path))?;
        if !self.properties.is_empty() {
            write!(f, " PROPERTIES ({})", comma_separated(&self.properties))?;
        }
        if let Some(storage) = &self.storage {
            write!(f, " {storage}")?;
        }
        Ok(())
    }
}

/// `TRUNCATE TABLE t [PARTITION (...)]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Truncate {
    pub table: ObjectName,
    pub partitions: Vec<Ident>,
}

impl fmt::Display for Truncate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TRUNCATE TABLE {}", self.table)?;
        if !self.partitions.is_empty() {
            write!(f, " PARTITION ({})", comma_separated(&self.partitions))?;
        }
        Ok(())
    }
}
