//! Query AST types.

use std::fmt;

use super::display::{comma_separated, write_paren_list, QuotedString};
use super::{Expr, FunctionCall, Ident, Literal, ObjectName};

/// A complete query: `[WITH ...] body [ORDER BY ...] [LIMIT ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub with: Vec<Cte>,
    pub body: SetExpr,
    pub order_by: Vec<OrderByItem>,
    pub limit: Option<Limit>,
}

impl Query {
    /// Wraps a bare `SELECT` in a query with no extra clauses.
    #[must_use]
    pub fn from_select(select: Select) -> Self {
        Self {
            with: Vec::new(),
            body: SetExpr::Select(Box::new(select)),
            order_by: Vec::new(),
            limit: None,
        }
    }

    /// Returns the `SELECT` if the body is a single one.
    #[must_use]
    pub fn as_select(&self) -> Option<&Select> {
        match &self.body {
            SetExpr::Select(select) => Some(select),
            _ => None,
        }
    }
}

/// A common table expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cte {
    pub name: Ident,
    pub columns: Vec<Ident>,
    pub query: Box<Query>,
}

/// The body of a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SetExpr {
    Select(Box<Select>),
    /// A parenthesized query used as an operand.
    Query(Box<Query>),
    SetOperation {
        op: SetOperator,
        quantifier: SetQuantifier,
        left: Box<SetExpr>,
        right: Box<SetExpr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOperator {
    Union,
    Except,
    /// Doris spelling of `EXCEPT`.
    Minus,
    Intersect,
}

impl SetOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::Except => "EXCEPT",
            Self::Minus => "MINUS",
            Self::Intersect => "INTERSECT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SetQuantifier {
    #[default]
    None,
    All,
    Distinct,
}

/// `LIMIT count [OFFSET offset]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limit {
    pub count: u64,
    pub offset: Option<u64>,
}

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderDirection {
    Asc,
    Desc,
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullOrdering {
    First,
    Last,
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderByItem {
    pub expr: Expr,
    pub direction: Option<OrderDirection>,
    pub nulls: Option<NullOrdering>,
}

/// A `SELECT` block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Select {
    /// Entries of a `/*+ ... */` comment right after `SELECT`.
    pub hints: Vec<Hint>,
    pub distinct: bool,
    pub items: Vec<SelectItem>,
    pub from: Vec<TableRef>,
    pub selection: Option<Expr>,
    pub group_by: Option<GroupBy>,
    pub having: Option<Expr>,
    pub qualify: Option<Expr>,
}

/// One optimizer hint: `SET_VAR(exec_mem_limit = 8589934592)`,
/// `LEADING(t1 t2)` or a bare `ORDERED`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hint {
    pub name: Ident,
    pub args: Vec<HintArg>,
}

/// `key` or `key = value` inside a hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HintArg {
    pub key: HintValue,
    pub value: Option<HintValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HintValue {
    Name(ObjectName),
    Literal(Literal),
}

/// `TABLESAMPLE (n PERCENT | n ROWS) [REPEATABLE seed]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableSample {
    pub size: SampleSize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleSize {
    Percent(u64),
    Rows(u64),
}

/// An entry of the select list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectItem {
    Expr { expr: Expr, alias: Option<Ident> },
    /// `*`, `t.*`, `* EXCEPT (a, b)`
    Wildcard {
        qualifier: Option<ObjectName>,
        except: Vec<Ident>,
    },
}

/// `GROUP BY` forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupBy {
    Exprs(Vec<Expr>),
    Rollup(Vec<Expr>),
    Cube(Vec<Expr>),
    GroupingSets(Vec<Vec<Expr>>),
}

impl GroupBy {
    /// All grouping expressions in source order.
    #[must_use]
    pub fn exprs(&self) -> Vec<&Expr> {
        match self {
            Self::Exprs(exprs) | Self::Rollup(exprs) | Self::Cube(exprs) => exprs.iter().collect(),
            Self::GroupingSets(sets) => sets.iter().flatten().collect(),
        }
    }
}

/// `[AS] name [(col, ...)]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableAlias {
    pub name: Ident,
    pub columns: Vec<Ident>,
}

impl From<Ident> for TableAlias {
    fn from(name: Ident) -> Self {
        Self {
            name,
            columns: Vec::new(),
        }
    }
}

/// A `'key' = 'value'` pair in `PROPERTIES (...)` and similar lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    pub key: String,
    pub value: String,
}

impl Property {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Join operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinOperator {
    Inner,
    Cross,
    LeftOuter,
    RightOuter,
    FullOuter,
    LeftSemi,
    RightSemi,
    LeftAnti,
    RightAnti,
}

impl JoinOperator {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Cross => "CROSS JOIN",
            Self::LeftOuter => "LEFT JOIN",
            Self::RightOuter => "RIGHT JOIN",
            Self::FullOuter => "FULL JOIN",
            Self::LeftSemi => "LEFT SEMI JOIN",
            Self::RightSemi => "RIGHT SEMI JOIN",
            Self::LeftAnti => "LEFT ANTI JOIN",
            Self::RightAnti => "RIGHT ANTI JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JoinConstraint {
    None,
    On(Expr),
    Using(Vec<Ident>),
}

/// `LATERAL VIEW [OUTER] explode(arr) t AS c`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LateralView {
    pub outer: bool,
    pub function: FunctionCall,
    pub table_alias: Ident,
    pub column_aliases: Vec<Ident>,
}

/// A relation in `FROM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableRef {
    Table {
        name: ObjectName,
        partitions: Vec<Ident>,
        /// `TABLET (10001, 10002)`
        tablets: Vec<u64>,
        alias: Option<TableAlias>,
        sample: Option<TableSample>,
    },
    /// `(SELECT ...) [AS] alias`
    Derived {
        subquery: Box<Query>,
        alias: Option<TableAlias>,
    },
    /// Table-valued function: `s3('uri' = '...') [AS] alias`
    Function {
        name: ObjectName,
        properties: Vec<Property>,
        alias: Option<TableAlias>,
    },
    /// `(t1 JOIN t2 ON ...)`
    Nested(Box<TableRef>),
    Join {
        left: Box<TableRef>,
        operator: JoinOperator,
        /// `[shuffle]` or `[broadcast]`
        hint: Option<Ident>,
        right: Box<TableRef>,
        constraint: JoinConstraint,
    },
    LateralView {
        base: Box<TableRef>,
        view: LateralView,
    },
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.with.is_empty() {
            write!(f, "WITH {} ", comma_separated(&self.with))?;
        }
        write!(f, "{}", self.body)?;
        if !self.order_by.is_empty() {
            write!(f, " ORDER BY {}", comma_separated(&self.order_by))?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " {limit}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Cte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        write_paren_list(f, &self.columns)?;
        write!(f, " AS ({})", self.query)
    }
}

impl fmt::Display for SetExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(select) => write!(f, "{select}"),
            Self::Query(query) => write!(f, "({query})"),
            Self::SetOperation {
                op,
                quantifier,
                left,
                right,
            } => {
                write!(f, "{left} {}", op.as_str())?;
                match quantifier {
                    SetQuantifier::None => {}
                    SetQuantifier::All => f.write_str(" ALL")?,
                    SetQuantifier::Distinct => f.write_str(" DISTINCT")?,
                }
                write!(f, " {right}")
            }
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LIMIT {}", self.count)?;
        if let Some(offset) = self.offset {
            write!(f, " OFFSET {offset}")?;
        }
        Ok(())
    }
}

impl fmt::Display for OrderByItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        match self.direction {
            Some(OrderDirection::Asc) => f.write_str(" ASC")?,
            Some(OrderDirection::Desc) => f.write_str(" DESC")?,
            None => {}
        }
        match self.nulls {
            Some(NullOrdering::First) => f.write_str(" NULLS FIRST")?,
            Some(NullOrdering::Last) => f.write_str(" NULLS LAST")?,
            None => {}
        }
        Ok(())
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if !self.hints.is_empty() {
            write!(f, "/*+ {} */ ", comma_separated(&self.hints))?;
        }
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        write!(f, "{}", comma_separated(&self.items))?;
        if !self.from.is_empty() {
            write!(f, " FROM {}", comma_separated(&self.from))?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE {selection}")?;
        }
        if let Some(group_by) = &self.group_by {
            write!(f, " GROUP BY {group_by}")?;
        }
        if let Some(having) = &self.having {
            write!(f, " HAVING {having}")?;
        }
        if let Some(qualify) = &self.qualify {
            write!(f, " QUALIFY {qualify}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            write!(f, "({})", comma_separated(&self.args))?;
        }
        Ok(())
    }
}

impl fmt::Display for HintArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)?;
        if let Some(value) = &self.value {
            write!(f, " = {value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for HintValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Literal(lit) => write!(f, "{lit}"),
        }
    }
}

impl fmt::Display for TableSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size {
            SampleSize::Percent(n) => write!(f, "TABLESAMPLE ({n} PERCENT)")?,
            SampleSize::Rows(n) => write!(f, "TABLESAMPLE ({n} ROWS)")?,
        }
        if let Some(seed) = self.seed {
            write!(f, " REPEATABLE {seed}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expr { expr, alias } => {
                write!(f, "{expr}")?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            Self::Wildcard { qualifier, except } => {
                if let Some(qualifier) = qualifier {
                    write!(f, "{qualifier}.")?;
                }
                f.write_str("*")?;
                if !except.is_empty() {
                    write!(f, " EXCEPT ({})", comma_separated(except))?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exprs(exprs) => write!(f, "{}", comma_separated(exprs)),
            Self::Rollup(exprs) => write!(f, "ROLLUP ({})", comma_separated(exprs)),
            Self::Cube(exprs) => write!(f, "CUBE ({})", comma_separated(exprs)),
            Self::GroupingSets(sets) => {
                f.write_str("GROUPING SETS (")?;
                for (i, set) in sets.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "({})", comma_separated(set))?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for TableAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        write_paren_list(f, &self.columns)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", QuotedString(&self.key), QuotedString(&self.value))
    }
}

fn write_alias(f: &mut fmt::Formatter<'_>, alias: Option<&TableAlias>) -> fmt::Result {
    match alias {
        Some(alias) => write!(f, " AS {alias}"),
        None => Ok(()),
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table {
                name,
                partitions,
                tablets,
                alias,
                sample,
            } => {
                write!(f, "{name}")?;
                if !partitions.is_empty() {
                    write!(f, " PARTITION ({})", comma_separated(partitions))?;
                }
                if !tablets.is_empty() {
                    write!(f, " TABLET ({})", comma_separated(tablets))?;
                }
                write_alias(f, alias.as_ref())?;
                if let Some(sample) = sample {
                    write!(f, " {sample}")?;
                }
                Ok(())
            }
            Self::Derived { subquery, alias } => {
                write!(f, "({subquery})")?;
                write_alias(f, alias.as_ref())
            }
            Self::Function {
                name,
                properties,
                alias,
            } => {
                write!(f, "{name}({})", comma_separated(properties))?;
                write_alias(f, alias.as_ref())
            }
            Self::Nested(inner) => write!(f, "({inner})"),
            Self::Join {
                left,
                operator,
                hint,
                right,
                constraint,
            } => {
                write!(f, "{left} {}", operator.as_str())?;
                if let Some(hint) = hint {
                    write!(f, " [{hint}]")?;
                }
                write!(f, " {right}")?;
                match constraint {
                    JoinConstraint::None => Ok(()),
                    JoinConstraint::On(expr) => write!(f, " ON {expr}"),
                    JoinConstraint::Using(columns) => {
                        write!(f, " USING ({})", comma_separated(columns))
                    }
                }
            }
            Self::LateralView { base, view } => {
                write!(f, "{base} LATERAL VIEW ")?;
                if view.outer {
                    f.write_str("OUTER ")?;
                }
                write!(f, "{} {}", view.function, view.table_alias)?;
                if !view.column_aliases.is_empty() {
                    write!(f, " AS {}", comma_separated(&view.column_aliases))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Literal;

    #[test]
    fn test_limit_display() {
        let limit = Limit {
            count: 10,
            offset: Some(20),
        };
        assert_eq!(limit.to_string(), "LIMIT 10 OFFSET 20");
    }

    #[test]
    fn test_select_display() {
        let select = Select {
            items: vec![SelectItem::Wildcard {
                qualifier: None,
                except: vec![Ident::new("secret")],
            }],
            from: vec![TableRef::Table {
                name: ObjectName::new(["db", "t"]),
                partitions: vec![Ident::new("p1")],
                tablets: vec![10001],
                alias: Some(TableAlias::from(Ident::new("x"))),
                sample: Some(TableSample {
                    size: SampleSize::Percent(10),
                    seed: Some(7),
                }),
            }],
            selection: Some(Expr::Literal(Literal::Boolean(true))),
            ..Select::default()
        };
        assert_eq!(
            select.to_string(),
            "SELECT * EXCEPT (secret) FROM db.t PARTITION (p1) TABLET (10001) AS x \
             TABLESAMPLE (10 PERCENT) REPEATABLE 7 WHERE TRUE"
        );
    }

    #[test]
    fn test_hint_display() {
        let select = Select {
            hints: vec![
                Hint {
                    name: Ident::new("SET_VAR"),
                    args: vec![HintArg {
                        key: HintValue::Name(ObjectName::new(["query_timeout"])),
                        value: Some(HintValue::Literal(Literal::Integer(10))),
                    }],
                },
                Hint {
                    name: Ident::new("ORDERED"),
                    args: Vec::new(),
                },
            ],
            items: vec![SelectItem::Wildcard {
                qualifier: None,
                except: Vec::new(),
            }],
            ..Select::default()
        };
        assert_eq!(
            select.to_string(),
            "SELECT /*+ SET_VAR(query_timeout = 10), ORDERED */ *"
        );
    }

    #[test]
    fn test_group_by_exprs() {
        let group = GroupBy::GroupingSets(vec![vec![Expr::column("a")], vec![]]);
        assert_eq!(group.to_string(), "GROUPING SETS ((a), ())");
        assert_eq!(group.exprs().len(), 1);
    }
}
