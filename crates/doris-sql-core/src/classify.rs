//! Coarse statement categories for routing parsed statements.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::Statement;

/// The family a statement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Query,
    Insert,
    Update,
    Delete,
    Load,
    Export,
    Create,
    Alter,
    Drop,
    Show,
    Describe,
    Explain,
    Set,
    Use,
    Transaction,
    Privilege,
    Admin,
    Utility,
    Unsupported,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Query,
        Self::Insert,
        Self::Update,
        Self::Delete,
        Self::Load,
        Self::Export,
        Self::Create,
        Self::Alter,
        Self::Drop,
        Self::Show,
        Self::Describe,
        Self::Explain,
        Self::Set,
        Self::Use,
        Self::Transaction,
        Self::Privilege,
        Self::Admin,
        Self::Utility,
        Self::Unsupported,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Load => "load",
            Self::Export => "export",
            Self::Create => "create",
            Self::Alter => "alter",
            Self::Drop => "drop",
            Self::Show => "show",
            Self::Describe => "describe",
            Self::Explain => "explain",
            Self::Set => "set",
            Self::Use => "use",
            Self::Transaction => "transaction",
            Self::Privilege => "privilege",
            Self::Admin => "admin",
            Self::Utility => "utility",
            Self::Unsupported => "unsupported",
        }
    }

    /// CREATE, ALTER and DROP.
    #[must_use]
    pub const fn is_ddl(self) -> bool {
        matches!(self, Self::Create | Self::Alter | Self::Drop)
    }

    /// Statements that read or change table data.
    #[must_use]
    pub const fn is_dml(self) -> bool {
        matches!(
            self,
            Self::Query | Self::Insert | Self::Update | Self::Delete | Self::Load | Self::Export
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a statement to its category.
#[must_use]
pub const fn classify(statement: &Statement) -> Category {
    match statement {
        Statement::Query(_) => Category::Query,
        Statement::Insert(_) => Category::Insert,
        Statement::Update(_) => Category::Update,
        Statement::Delete(_) | Statement::Truncate(_) => Category::Delete,
        Statement::BrokerLoad(_) | Statement::MysqlLoad(_) => Category::Load,
        Statement::Export(_) => Category::Export,

        Statement::CreateTable(_)
        | Statement::CreateTableLike(_)
        | Statement::CreateView(_)
        | Statement::CreateMaterializedView(_)
        | Statement::CreateDatabase(_)
        | Statement::CreateIndex(_)
        | Statement::CreateUser(_)
        | Statement::CreateRole(_)
        | Statement::CreateCatalog(_) => Category::Create,

        Statement::AlterTable(_)
        | Statement::AlterView(_)
        | Statement::AlterDatabase(_)
        | Statement::AlterUser(_)
        | Statement::AlterSystem(_) => Category::Alter,

        Statement::Drop(_) | Statement::DropUser(_) | Statement::DropRole(_) => Category::Drop,

        Statement::Show(_) => Category::Show,
        Statement::Describe(_) => Category::Describe,
        Statement::Explain(_) => Category::Explain,

        Statement::SetVariables(_) | Statement::SetNames(_) | Statement::SetPassword(_) => {
            Category::Set
        }
        Statement::Use(_) | Statement::SwitchCatalog(_) => Category::Use,
        Statement::Begin { .. } | Statement::Commit | Statement::Rollback => {
            Category::Transaction
        }
        Statement::Grant(_) | Statement::Revoke(_) => Category::Privilege,

        Statement::Kill(_)
        | Statement::Admin(_)
        | Statement::Analyze(_)
        | Statement::Refresh(_)
        | Statement::Recover(_)
        | Statement::Cancel(_)
        | Statement::Sync => Category::Admin,
        Statement::Help(_) => Category::Utility,

        Statement::Unsupported(_) => Category::Unsupported,
    }
}

impl Statement {
    /// Shorthand for [`classify`].
    #[must_use]
    pub const fn category(&self) -> Category {
        classify(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Truncate, Unsupported};

    #[test]
    fn test_truncate_is_delete() {
        let stmt = Statement::Truncate(Truncate {
            table: "t".into(),
            partitions: Vec::new(),
        });
        assert_eq!(classify(&stmt), Category::Delete);
        assert!(stmt.category().is_dml());
    }

    #[test]
    fn test_unsupported_category() {
        let stmt = Statement::Unsupported(Unsupported {
            keywords: vec![String::from("LOCK")],
            text: String::from("LOCK TABLES t READ"),
        });
        assert_eq!(stmt.category(), Category::Unsupported);
        assert!(!Category::Unsupported.is_ddl());
    }

    #[test]
    fn test_all_names_are_distinct() {
        let mut names: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn test_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&Category::Transaction).unwrap(),
            "\"transaction\""
        );
    }
}
