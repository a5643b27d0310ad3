//! Tree traversal.
//!
//! [`walk`] visits every node of a statement depth-first in source order,
//! calling [`Listener::enter`] before a node's children and
//! [`Listener::exit`] after them. Returning [`ControlFlow::Break`] from
//! either callback stops the walk immediately.
//!
//! Consumers either implement [`Listener`] directly or register closures on
//! a [`Handlers`] table keyed by [`NodeKind`].

mod collect;
mod handlers;

use std::fmt;
use std::ops::ControlFlow;

use crate::ast::{
    AlterTableOperation, Assignment, ColumnDef, Cte, DataDescription, Expr, FunctionArgs,
    FunctionCall, GroupBy, IndexDef, InsertSource, JoinConstraint, OrderByItem, PartitionDef,
    Query, Select, SelectItem, SetExpr, SetValue, ShowFilter, Statement, TableRef, WhenClause,
    WindowSpec,
};

pub use collect::{outline, referenced_columns, referenced_tables};
pub use handlers::Handlers;

/// A borrowed view of one walkable tree node.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Statement(&'a Statement),
    Query(&'a Query),
    Cte(&'a Cte),
    /// A `UNION`/`EXCEPT`/`INTERSECT` operation. Plain SELECT bodies and
    /// parenthesized queries appear as [`Node::Select`] and [`Node::Query`].
    SetOperation(&'a SetExpr),
    Select(&'a Select),
    SelectItem(&'a SelectItem),
    TableRef(&'a TableRef),
    Expr(&'a Expr),
    /// A function call outside an expression, as in `LATERAL VIEW`.
    Function(&'a FunctionCall),
    WindowSpec(&'a WindowSpec),
    OrderByItem(&'a OrderByItem),
    WhenClause(&'a WhenClause),
    ColumnDef(&'a ColumnDef),
    IndexDef(&'a IndexDef),
    PartitionDef(&'a PartitionDef),
    AlterTableOperation(&'a AlterTableOperation),
    Assignment(&'a Assignment),
    DataDescription(&'a DataDescription),
}

/// Flat tag for every node shape: one per statement variant, one per
/// expression variant and one per relation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    // Statements
    QueryStatement,
    Insert,
    Update,
    Delete,
    BrokerLoad,
    MysqlLoad,
    Export,
    Truncate,
    CreateTable,
    CreateTableLike,
    CreateView,
    CreateMaterializedView,
    CreateDatabase,
    CreateIndex,
    CreateUser,
    CreateRole,
    CreateCatalog,
    AlterTable,
    AlterView,
    AlterDatabase,
    AlterUser,
    AlterSystem,
    Drop,
    DropUser,
    DropRole,
    Show,
    Describe,
    Explain,
    Use,
    SwitchCatalog,
    SetVariables,
    SetNames,
    SetPassword,
    Begin,
    Commit,
    Rollback,
    Grant,
    Revoke,
    Kill,
    Admin,
    Analyze,
    Refresh,
    Recover,
    Cancel,
    Help,
    Sync,
    Unsupported,

    // Queries
    Query,
    Cte,
    SetOperation,
    Select,
    SelectItem,
    Wildcard,
    OrderByItem,
    WindowSpec,

    // Relations
    Table,
    DerivedTable,
    TableFunction,
    NestedJoin,
    Join,
    LateralView,

    // Expressions
    Literal,
    TypedString,
    Interval,
    Column,
    Placeholder,
    Variable,
    UnaryOp,
    BinaryOp,
    IsNull,
    IsBool,
    Pattern,
    InList,
    InSubquery,
    Between,
    Match,
    Nested,
    Row,
    Subquery,
    Exists,
    Case,
    WhenClause,
    Cast,
    Convert,
    Extract,
    Function,
    Index,
    Slice,
    Field,
    Collate,
    DefaultValue,
    Array,
    Map,
    Lambda,
    Niladic,

    // Definitions
    ColumnDef,
    IndexDef,
    PartitionDef,
    AlterTableOperation,
    Assignment,
    DataDescription,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Receives enter and exit events from [`walk`].
pub trait Listener<'a> {
    fn enter(&mut self, node: Node<'a>) -> ControlFlow<()> {
        let _ = node;
        ControlFlow::Continue(())
    }

    fn exit(&mut self, node: Node<'a>) -> ControlFlow<()> {
        let _ = node;
        ControlFlow::Continue(())
    }
}

/// Walks `root` depth-first. Returns `Break` if a callback stopped the walk.
pub fn walk<'a, L>(root: &'a Statement, listener: &mut L) -> ControlFlow<()>
where
    L: Listener<'a> + ?Sized,
{
    walk_node(Node::Statement(root), listener)
}

/// Walks every statement in order, stopping at the first `Break`.
pub fn walk_all<'a, I, L>(roots: I, listener: &mut L) -> ControlFlow<()>
where
    I: IntoIterator<Item = &'a Statement>,
    L: Listener<'a> + ?Sized,
{
    for root in roots {
        walk(root, listener)?;
    }
    ControlFlow::Continue(())
}

/// Walks the subtree under any node.
pub fn walk_node<'a, L>(node: Node<'a>, listener: &mut L) -> ControlFlow<()>
where
    L: Listener<'a> + ?Sized,
{
    listener.enter(node)?;
    for child in node.children() {
        walk_node(child, listener)?;
    }
    listener.exit(node)
}

impl<'a> Node<'a> {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Statement(statement) => statement_kind(statement),
            Self::Query(_) => NodeKind::Query,
            Self::Cte(_) => NodeKind::Cte,
            Self::SetOperation(SetExpr::Select(_)) => NodeKind::Select,
            Self::SetOperation(SetExpr::Query(_)) => NodeKind::Query,
            Self::SetOperation(SetExpr::SetOperation { .. }) => NodeKind::SetOperation,
            Self::Select(_) => NodeKind::Select,
            Self::SelectItem(SelectItem::Expr { .. }) => NodeKind::SelectItem,
            Self::SelectItem(SelectItem::Wildcard { .. }) => NodeKind::Wildcard,
            Self::TableRef(table) => match table {
                TableRef::Table { .. } => NodeKind::Table,
                TableRef::Derived { .. } => NodeKind::DerivedTable,
                TableRef::Function { .. } => NodeKind::TableFunction,
                TableRef::Nested(_) => NodeKind::NestedJoin,
                TableRef::Join { .. } => NodeKind::Join,
                TableRef::LateralView { .. } => NodeKind::LateralView,
            },
            Self::Expr(expr) => expr_kind(expr),
            Self::Function(_) => NodeKind::Function,
            Self::WindowSpec(_) => NodeKind::WindowSpec,
            Self::OrderByItem(_) => NodeKind::OrderByItem,
            Self::WhenClause(_) => NodeKind::WhenClause,
            Self::ColumnDef(_) => NodeKind::ColumnDef,
            Self::IndexDef(_) => NodeKind::IndexDef,
            Self::PartitionDef(_) => NodeKind::PartitionDef,
            Self::AlterTableOperation(_) => NodeKind::AlterTableOperation,
            Self::Assignment(_) => NodeKind::Assignment,
            Self::DataDescription(_) => NodeKind::DataDescription,
        }
    }

    /// Direct children in source order.
    #[must_use]
    pub fn children(&self) -> Vec<Node<'a>> {
        let mut out = Vec::new();
        match *self {
            Self::Statement(statement) => statement_children(statement, &mut out),
            Self::Query(query) => {
                out.extend(query.with.iter().map(Node::Cte));
                out.push(set_expr_node(&query.body));
                out.extend(query.order_by.iter().map(Node::OrderByItem));
            }
            Self::Cte(cte) => out.push(Node::Query(&cte.query)),
            Self::SetOperation(set) => match set {
                SetExpr::SetOperation { left, right, .. } => {
                    out.push(set_expr_node(left));
                    out.push(set_expr_node(right));
                }
                SetExpr::Select(select) => out.push(Node::Select(select)),
                SetExpr::Query(query) => out.push(Node::Query(query)),
            },
            Self::Select(select) => select_children(select, &mut out),
            Self::SelectItem(item) => {
                if let SelectItem::Expr { expr, .. } = item {
                    out.push(Node::Expr(expr));
                }
            }
            Self::TableRef(table) => table_children(table, &mut out),
            Self::Expr(expr) => expr_children(expr, &mut out),
            Self::Function(call) => function_children(call, &mut out),
            Self::WindowSpec(window) => {
                out.extend(window.partition_by.iter().map(Node::Expr));
                out.extend(window.order_by.iter().map(Node::OrderByItem));
            }
            Self::OrderByItem(item) => out.push(Node::Expr(&item.expr)),
            Self::WhenClause(clause) => {
                out.push(Node::Expr(&clause.condition));
                out.push(Node::Expr(&clause.result));
            }
            Self::ColumnDef(column) => {
                out.extend(column.default.iter().map(Node::Expr));
                out.extend(column.on_update.iter().map(Node::Expr));
            }
            Self::IndexDef(_) | Self::PartitionDef(_) => {}
            Self::AlterTableOperation(operation) => match operation {
                AlterTableOperation::AddColumn { column, .. }
                | AlterTableOperation::ModifyColumn { column, .. } => {
                    out.push(Node::ColumnDef(column));
                }
                AlterTableOperation::AddColumns(columns) => {
                    out.extend(columns.iter().map(Node::ColumnDef));
                }
                AlterTableOperation::AddPartition(def) => out.push(Node::PartitionDef(def)),
                AlterTableOperation::AddIndex(index) => out.push(Node::IndexDef(index)),
                _ => {}
            },
            Self::Assignment(assignment) => out.push(Node::Expr(&assignment.value)),
            Self::DataDescription(data) => {
                out.extend(data.set.iter().map(Node::Assignment));
                out.extend(data.selection.iter().map(Node::Expr));
            }
        }
        out
    }
}

fn set_expr_node(set: &SetExpr) -> Node<'_> {
    match set {
        SetExpr::Select(select) => Node::Select(select),
        SetExpr::Query(query) => Node::Query(query),
        SetExpr::SetOperation { .. } => Node::SetOperation(set),
    }
}

fn statement_children<'a>(statement: &'a Statement, out: &mut Vec<Node<'a>>) {
    match statement {
        Statement::Query(query) => out.push(Node::Query(query)),
        Statement::Insert(insert) => match &insert.source {
            InsertSource::Query(query) => out.push(Node::Query(query)),
            InsertSource::Values(rows) => out.extend(rows.iter().flatten().map(Node::Expr)),
        },
        Statement::Update(update) => {
            out.extend(update.assignments.iter().map(Node::Assignment));
            out.extend(update.from.iter().map(Node::TableRef));
            out.extend(update.selection.iter().map(Node::Expr));
        }
        Statement::Delete(delete) => {
            out.extend(delete.using.iter().map(Node::TableRef));
            out.extend(delete.selection.iter().map(Node::Expr));
        }
        Statement::BrokerLoad(load) => out.extend(load.data.iter().map(Node::DataDescription)),
        Statement::MysqlLoad(load) => out.extend(load.set.iter().map(Node::Assignment)),
        Statement::Export(export) => out.extend(export.selection.iter().map(Node::Expr)),
        Statement::CreateTable(create) => {
            out.extend(create.columns.iter().map(Node::ColumnDef));
            out.extend(create.indexes.iter().map(Node::IndexDef));
            if let Some(partition) = &create.partition {
                out.extend(partition.partitions.iter().map(Node::PartitionDef));
            }
            out.extend(create.as_query.iter().map(|q| Node::Query(q)));
        }
        Statement::CreateView(create) => out.push(Node::Query(&create.query)),
        Statement::CreateMaterializedView(create) => out.push(Node::Query(&create.query)),
        Statement::AlterTable(alter) => {
            out.extend(alter.operations.iter().map(Node::AlterTableOperation));
        }
        Statement::AlterView(alter) => out.push(Node::Query(&alter.query)),
        Statement::Show(show) => {
            if let Some(ShowFilter::Where(expr)) = &show.filter {
                out.push(Node::Expr(expr));
            }
        }
        Statement::Explain(explain) => out.push(Node::Statement(&explain.statement)),
        Statement::SetVariables(items) => {
            for item in items {
                if let SetValue::Expr(expr) = &item.value {
                    out.push(Node::Expr(expr));
                }
            }
        }
        Statement::Cancel(cancel) => out.extend(cancel.selection.iter().map(Node::Expr)),
        _ => {}
    }
}

fn select_children<'a>(select: &'a Select, out: &mut Vec<Node<'a>>) {
    out.extend(select.items.iter().map(Node::SelectItem));
    out.extend(select.from.iter().map(Node::TableRef));
    out.extend(select.selection.iter().map(Node::Expr));
    if let Some(group_by) = &select.group_by {
        match group_by {
            GroupBy::Exprs(exprs) | GroupBy::Rollup(exprs) | GroupBy::Cube(exprs) => {
                out.extend(exprs.iter().map(Node::Expr));
            }
            GroupBy::GroupingSets(sets) => out.extend(sets.iter().flatten().map(Node::Expr)),
        }
    }
    out.extend(select.having.iter().map(Node::Expr));
    out.extend(select.qualify.iter().map(Node::Expr));
}

fn table_children<'a>(table: &'a TableRef, out: &mut Vec<Node<'a>>) {
    match table {
        TableRef::Table { .. } | TableRef::Function { .. } => {}
        TableRef::Derived { subquery, .. } => out.push(Node::Query(subquery)),
        TableRef::Nested(inner) => out.push(Node::TableRef(inner)),
        TableRef::Join {
            left,
            right,
            constraint,
            ..
        } => {
            out.push(Node::TableRef(left));
            out.push(Node::TableRef(right));
            if let JoinConstraint::On(expr) = constraint {
                out.push(Node::Expr(expr));
            }
        }
        TableRef::LateralView { base, view } => {
            out.push(Node::TableRef(base));
            out.push(Node::Function(&view.function));
        }
    }
}

fn function_children<'a>(call: &'a FunctionCall, out: &mut Vec<Node<'a>>) {
    if let FunctionArgs::List(args) = &call.args {
        out.extend(args.iter().map(Node::Expr));
    }
    out.extend(call.order_by.iter().map(Node::OrderByItem));
    out.extend(call.over.iter().map(Node::WindowSpec));
}

fn expr_children<'a>(expr: &'a Expr, out: &mut Vec<Node<'a>>) {
    match expr {
        Expr::Literal(_)
        | Expr::TypedString { .. }
        | Expr::Column(_)
        | Expr::Placeholder(_)
        | Expr::Variable { .. }
        | Expr::Niladic(_)
        | Expr::Default => {}
        Expr::Interval { value, .. } => out.push(Node::Expr(value)),
        Expr::Unary { operand, .. } => out.push(Node::Expr(operand)),
        Expr::Binary { left, right, .. } => {
            out.push(Node::Expr(left));
            out.push(Node::Expr(right));
        }
        Expr::IsNull { expr, .. }
        | Expr::IsBool { expr, .. }
        | Expr::Nested(expr)
        | Expr::Cast { expr, .. }
        | Expr::Convert { expr, .. }
        | Expr::Extract { expr, .. }
        | Expr::Field { expr, .. }
        | Expr::Collate { expr, .. } => out.push(Node::Expr(expr)),
        Expr::Pattern { expr, pattern, .. } | Expr::Match { expr, pattern, .. } => {
            out.push(Node::Expr(expr));
            out.push(Node::Expr(pattern));
        }
        Expr::InList { expr, list, .. } => {
            out.push(Node::Expr(expr));
            out.extend(list.iter().map(Node::Expr));
        }
        Expr::InSubquery { expr, subquery, .. } => {
            out.push(Node::Expr(expr));
            out.push(Node::Query(subquery));
        }
        Expr::Between {
            expr, low, high, ..
        } => {
            out.push(Node::Expr(expr));
            out.push(Node::Expr(low));
            out.push(Node::Expr(high));
        }
        Expr::Row(items) | Expr::Array(items) => out.extend(items.iter().map(Node::Expr)),
        Expr::Subquery(query) | Expr::Exists(query) => out.push(Node::Query(query)),
        Expr::Case {
            operand,
            branches,
            else_result,
        } => {
            out.extend(operand.iter().map(|e| Node::Expr(e)));
            out.extend(branches.iter().map(Node::WhenClause));
            out.extend(else_result.iter().map(|e| Node::Expr(e)));
        }
        Expr::Function(call) => function_children(call, out),
        Expr::Index { expr, index } => {
            out.push(Node::Expr(expr));
            out.push(Node::Expr(index));
        }
        Expr::Slice { expr, lower, upper } => {
            out.push(Node::Expr(expr));
            out.extend(lower.iter().map(|e| Node::Expr(e)));
            out.extend(upper.iter().map(|e| Node::Expr(e)));
        }
        Expr::Map(entries) => {
            for entry in entries {
                out.push(Node::Expr(&entry.key));
                out.push(Node::Expr(&entry.value));
            }
        }
        Expr::Lambda { body, .. } => out.push(Node::Expr(body)),
    }
}

const fn statement_kind(statement: &Statement) -> NodeKind {
    match statement {
        Statement::Query(_) => NodeKind::QueryStatement,
        Statement::Insert(_) => NodeKind::Insert,
        Statement::Update(_) => NodeKind::Update,
        Statement::Delete(_) => NodeKind::Delete,
        Statement::BrokerLoad(_) => NodeKind::BrokerLoad,
        Statement::MysqlLoad(_) => NodeKind::MysqlLoad,
        Statement::Export(_) => NodeKind::Export,
        Statement::Truncate(_) => NodeKind::Truncate,
        Statement::CreateTable(_) => NodeKind::CreateTable,
        Statement::CreateTableLike(_) => NodeKind::CreateTableLike,
        Statement::CreateView(_) => NodeKind::CreateView,
        Statement::CreateMaterializedView(_) => NodeKind::CreateMaterializedView,
        Statement::CreateDatabase(_) => NodeKind::CreateDatabase,
        Statement::CreateIndex(_) => NodeKind::CreateIndex,
        Statement::CreateUser(_) => NodeKind::CreateUser,
        Statement::CreateRole(_) => NodeKind::CreateRole,
        Statement::CreateCatalog(_) => NodeKind::CreateCatalog,
        Statement::AlterTable(_) => NodeKind::AlterTable,
        Statement::AlterView(_) => NodeKind::AlterView,
        Statement::AlterDatabase(_) => NodeKind::AlterDatabase,
        Statement::AlterUser(_) => NodeKind::AlterUser,
        Statement::AlterSystem(_) => NodeKind::AlterSystem,
        Statement::Drop(_) => NodeKind::Drop,
        Statement::DropUser(_) => NodeKind::DropUser,
        Statement::DropRole(_) => NodeKind::DropRole,
        Statement::Show(_) => NodeKind::Show,
        Statement::Describe(_) => NodeKind::Describe,
        Statement::Explain(_) => NodeKind::Explain,
        Statement::Use(_) => NodeKind::Use,
        Statement::SwitchCatalog(_) => NodeKind::SwitchCatalog,
        Statement::SetVariables(_) => NodeKind::SetVariables,
        Statement::SetNames(_) => NodeKind::SetNames,
        Statement::SetPassword(_) => NodeKind::SetPassword,
        Statement::Begin { .. } => NodeKind::Begin,
        Statement::Commit => NodeKind::Commit,
        Statement::Rollback => NodeKind::Rollback,
        Statement::Grant(_) => NodeKind::Grant,
        Statement::Revoke(_) => NodeKind::Revoke,
        Statement::Kill(_) => NodeKind::Kill,
        Statement::Admin(_) => NodeKind::Admin,
        Statement::Analyze(_) => NodeKind::Analyze,
        Statement::Refresh(_) => NodeKind::Refresh,
        Statement::Recover(_) => NodeKind::Recover,
        Statement::Cancel(_) => NodeKind::Cancel,
        Statement::Help(_) => NodeKind::Help,
        Statement::Sync => NodeKind::Sync,
        Statement::Unsupported(_) => NodeKind::Unsupported,
    }
}

const fn expr_kind(expr: &Expr) -> NodeKind {
    match expr {
        Expr::Literal(_) => NodeKind::Literal,
        Expr::TypedString { .. } => NodeKind::TypedString,
        Expr::Interval { .. } => NodeKind::Interval,
        Expr::Column(_) => NodeKind::Column,
        Expr::Placeholder(_) => NodeKind::Placeholder,
        Expr::Variable { .. } => NodeKind::Variable,
        Expr::Unary { .. } => NodeKind::UnaryOp,
        Expr::Binary { .. } => NodeKind::BinaryOp,
        Expr::IsNull { .. } => NodeKind::IsNull,
        Expr::IsBool { .. } => NodeKind::IsBool,
        Expr::Pattern { .. } => NodeKind::Pattern,
        Expr::InList { .. } => NodeKind::InList,
        Expr::InSubquery { .. } => NodeKind::InSubquery,
        Expr::Between { .. } => NodeKind::Between,
        Expr::Match { .. } => NodeKind::Match,
        Expr::Nested(_) => NodeKind::Nested,
        Expr::Row(_) => NodeKind::Row,
        Expr::Subquery(_) => NodeKind::Subquery,
        Expr::Exists(_) => NodeKind::Exists,
        Expr::Case { .. } => NodeKind::Case,
        Expr::Cast { .. } => NodeKind::Cast,
        Expr::Convert { .. } => NodeKind::Convert,
        Expr::Extract { .. } => NodeKind::Extract,
        Expr::Function(_) => NodeKind::Function,
        Expr::Index { .. } => NodeKind::Index,
        Expr::Slice { .. } => NodeKind::Slice,
        Expr::Field { .. } => NodeKind::Field,
        Expr::Collate { .. } => NodeKind::Collate,
        Expr::Default => NodeKind::DefaultValue,
        Expr::Array(_) => NodeKind::Array,
        Expr::Map(_) => NodeKind::Map,
        Expr::Lambda { .. } => NodeKind::Lambda,
        Expr::Niladic(_) => NodeKind::Niladic,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse_statement;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        stop_at: Option<NodeKind>,
    }

    impl Listener<'_> for Recorder {
        fn enter(&mut self, node: Node<'_>) -> ControlFlow<()> {
            self.events.push(format!("+{}", node.kind()));
            if self.stop_at == Some(node.kind()) {
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        }

        fn exit(&mut self, node: Node<'_>) -> ControlFlow<()> {
            self.events.push(format!("-{}", node.kind()));
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn test_enter_exit_order() {
        let stmt = parse_statement("SELECT a + 1 FROM t").unwrap();
        let mut recorder = Recorder::default();
        assert_eq!(walk(&stmt, &mut recorder), ControlFlow::Continue(()));
        assert_eq!(
            recorder.events,
            [
                "+QueryStatement",
                "+Query",
                "+Select",
                "+SelectItem",
                "+BinaryOp",
                "+Column",
                "-Column",
                "+Literal",
                "-Literal",
                "-BinaryOp",
                "-SelectItem",
                "+Table",
                "-Table",
                "-Select",
                "-Query",
                "-QueryStatement",
            ]
        );
    }

    #[test]
    fn test_break_stops_everything() {
        let stmt = parse_statement("SELECT a, b FROM t WHERE c > 1").unwrap();
        let mut recorder = Recorder {
            stop_at: Some(NodeKind::Column),
            ..Recorder::default()
        };
        assert_eq!(walk(&stmt, &mut recorder), ControlFlow::Break(()));
        assert_eq!(recorder.events.last().map(String::as_str), Some("+Column"));
        assert!(!recorder.events.iter().any(|e| e.starts_with('-')));
    }

    #[test]
    fn test_set_operations_and_subqueries_are_walked() {
        let stmt = parse_statement(
            "SELECT x FROM (SELECT 1 AS x) d UNION SELECT y FROM t WHERE y IN (SELECT z FROM u)",
        )
        .unwrap();
        let mut recorder = Recorder::default();
        let _ = walk(&stmt, &mut recorder);
        let enters = |kind: &str| {
            recorder
                .events
                .iter()
                .filter(|e| e.strip_prefix('+') == Some(kind))
                .count()
        };
        assert_eq!(enters("SetOperation"), 1);
        assert_eq!(enters("Select"), 4);
        assert_eq!(enters("DerivedTable"), 1);
        assert_eq!(enters("InSubquery"), 1);
    }

    #[test]
    fn test_explain_wraps_statement() {
        let stmt = parse_statement("EXPLAIN DELETE FROM t WHERE a = 1").unwrap();
        let node = Node::Statement(&stmt);
        assert_eq!(node.kind(), NodeKind::Explain);
        let children = node.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].kind(), NodeKind::Delete);
    }

    #[test]
    fn test_walk_all_visits_each_root() {
        let stmts = crate::parse_statements("BEGIN; COMMIT; ROLLBACK").unwrap();
        let mut recorder = Recorder::default();
        let _ = walk_all(&stmts, &mut recorder);
        assert_eq!(
            recorder.events,
            ["+Begin", "-Begin", "+Commit", "-Commit", "+Rollback", "-Rollback"]
        );
    }
}
