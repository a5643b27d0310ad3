//! Abstract syntax tree types.
//!
//! Every node owns its children, derives structural equality and prints
//! back to canonical SQL through `Display`.

mod ddl;
mod display;
mod dml;
mod expression;
mod ident;
mod query;
mod statement;
mod types;

pub use ddl::{
    AggregateType, AlterDatabase, AlterDatabaseOperation, AlterSystem, AlterTable,
    AlterTableOperation, AlterUser, AlterView, Buckets, BuildMode, ClusterNode, ColumnDef,
    ColumnPosition, CreateCatalog, CreateDatabase, CreateIndex, CreateMaterializedView,
    CreateRole, CreateTable, CreateTableLike, CreateUser, CreateView, Distribution, Drop,
    DropRole, DropUser, IndexDef, IndexType, KeyDesc, KeyKind, LessThan, ObjectType,
    PartitionDef, PartitionDesc, PartitionKind, PartitionValue, RefreshMethod, RefreshSpec,
    RefreshTrigger, SystemAction, UserIdentity, UserOptions, ViewColumn,
};
pub use display::QuotedString;
pub use dml::{
    Assignment, BrokerLoad, DataDescription, Delete, Export, Insert, InsertSource, MysqlLoad,
    StorageClause, Truncate, Update,
};
pub use expression::{
    BinaryOp, ConvertTarget, Expr, FrameBound, FrameUnits, FunctionArgs, FunctionCall, IntervalUnit,
    Literal, MapEntry, MatchOp, Niladic, PatternOp, UnaryOp, WhenClause, WindowFrame, WindowSpec,
};
pub use ident::{Ident, ObjectName};
pub use query::{
    Cte, GroupBy, Hint, HintArg, HintValue, JoinConstraint, JoinOperator, LateralView, Limit,
    NullOrdering, OrderByItem, OrderDirection, Property, Query, SampleSize, Select, SelectItem,
    SetExpr, SetOperator, SetQuantifier, TableAlias, TableRef, TableSample,
};
pub use statement::{
    Admin, AlterJobKind, Analyze, Cancel, CancelTarget, Describe, Explain, ExplainLevel, Grant,
    GrantObject, GrantPart, GrantTarget, Grantee, Kill, KillScope, Recover, RecoverObject,
    Refresh, RefreshObject, SetNames, SetPassword, SetValue, SetVariable, Show, ShowFilter,
    ShowTarget, Statement, Unsupported, Use, VariableName, VariableScope,
};
pub use types::{DataType, DatetimeKind, DecimalKind, PrimitiveType, StructField};
