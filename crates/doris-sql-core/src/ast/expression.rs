//! Expression AST types.

use std::fmt;

use super::display::{comma_separated, QuotedString};
use super::{DataType, Ident, ObjectName, OrderByItem, Query};

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Null,
    Boolean(bool),
    /// Integer literal. Only partition bounds carry negative values; in
    /// expressions a sign is a unary operator.
    Integer(i128),
    /// Exact decimal, kept as written.
    Decimal(String),
    /// Scientific notation, kept as written.
    Float(String),
    String(String),
    /// `X'..'` hex digits.
    HexString(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Boolean(true) => f.write_str("TRUE"),
            Self::Boolean(false) => f.write_str("FALSE"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Decimal(v) | Self::Float(v) => f.write_str(v),
            Self::String(v) => write!(f, "{}", QuotedString(v)),
            Self::HexString(v) => write!(f, "X'{v}'"),
        }
    }
}

/// Binary operators, from loosest to tightest binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Logical
    Or,
    Xor,
    And,

    // Comparison
    Eq,
    NullSafeEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Bitwise
    BitOr,
    BitAnd,

    // Arithmetic
    Plus,
    Minus,
    /// `||` under `PIPES_AS_CONCAT`.
    Concat,
    Multiply,
    Divide,
    /// `DIV`
    IntegerDivide,
    /// `%` or `MOD`
    Modulo,
    BitXor,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::And => "AND",
            Self::Eq => "=",
            Self::NullSafeEq => "<=>",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Concat => "||",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::IntegerDivide => "DIV",
            Self::Modulo => "%",
            Self::BitXor => "^",
        }
    }

    /// Returns the precedence level (higher binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or => 1,
            Self::Xor => 2,
            Self::And => 3,
            Self::Eq
            | Self::NullSafeEq
            | Self::NotEq
            | Self::Lt
            | Self::LtEq
            | Self::Gt
            | Self::GtEq => 5,
            Self::BitOr => 6,
            Self::BitAnd => 7,
            Self::Plus | Self::Minus | Self::Concat => 8,
            Self::Multiply | Self::Divide | Self::IntegerDivide | Self::Modulo => 9,
            Self::BitXor => 10,
        }
    }
}

/// Unary prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `NOT` or `!`
    Not,
    Plus,
    Minus,
    /// `~`
    BitNot,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::BitNot => "~",
        }
    }
}

/// `LIKE` and its regular-expression siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternOp {
    Like,
    /// `REGEXP` or `RLIKE`
    Regexp,
}

impl PatternOp {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Regexp => "REGEXP",
        }
    }
}

/// Doris full-text match operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOp {
    Any,
    All,
    Phrase,
    PhrasePrefix,
    Regexp,
}

impl MatchOp {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "MATCH_ANY",
            Self::All => "MATCH_ALL",
            Self::Phrase => "MATCH_PHRASE",
            Self::PhrasePrefix => "MATCH_PHRASE_PREFIX",
            Self::Regexp => "MATCH_REGEXP",
        }
    }
}

/// Units of `INTERVAL` and `EXTRACT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
}

impl IntervalUnit {
    /// Looks up a unit name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let unit = match name.to_ascii_uppercase().as_str() {
            "YEAR" => Self::Year,
            "QUARTER" => Self::Quarter,
            "MONTH" => Self::Month,
            "WEEK" => Self::Week,
            "DAY" => Self::Day,
            "HOUR" => Self::Hour,
            "MINUTE" => Self::Minute,
            "SECOND" => Self::Second,
            "MILLISECOND" => Self::Millisecond,
            "MICROSECOND" => Self::Microsecond,
            _ => return None,
        };
        Some(unit)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "YEAR",
            Self::Quarter => "QUARTER",
            Self::Month => "MONTH",
            Self::Week => "WEEK",
            Self::Day => "DAY",
            Self::Hour => "HOUR",
            Self::Minute => "MINUTE",
            Self::Second => "SECOND",
            Self::Millisecond => "MILLISECOND",
            Self::Microsecond => "MICROSECOND",
        }
    }
}

/// Functions called without parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Niladic {
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    CurrentUser,
    LocalTime,
    LocalTimestamp,
}

impl Niladic {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentTime => "CURRENT_TIME",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Self::CurrentUser => "CURRENT_USER",
            Self::LocalTime => "LOCALTIME",
            Self::LocalTimestamp => "LOCALTIMESTAMP",
        }
    }
}

/// Arguments of a function call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FunctionArgs {
    /// `f(*)`
    Wildcard,
    /// `f(a, b)`; empty for `f()`.
    List(Vec<Expr>),
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionCall {
    pub name: ObjectName,
    pub distinct: bool,
    pub args: FunctionArgs,
    /// `group_concat(a ORDER BY b)`
    pub order_by: Vec<OrderByItem>,
    pub over: Option<WindowSpec>,
}

impl FunctionCall {
    /// Creates a plain call `name(args)`.
    #[must_use]
    pub fn new(name: impl Into<Ident>, args: Vec<Expr>) -> Self {
        Self {
            name: ObjectName(vec![name.into()]),
            distinct: false,
            args: FunctionArgs::List(args),
            order_by: Vec::new(),
            over: None,
        }
    }

    /// The argument expressions; empty for `f(*)`.
    #[must_use]
    pub fn arg_exprs(&self) -> &[Expr] {
        match &self.args {
            FunctionArgs::Wildcard => &[],
            FunctionArgs::List(args) => args,
        }
    }
}

/// `ROWS` or `RANGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameUnits {
    Rows,
    Range,
}

/// One end of a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameBound {
    UnboundedPreceding,
    Preceding(u64),
    CurrentRow,
    Following(u64),
    UnboundedFollowing,
}

/// `ROWS BETWEEN start AND end`, or `ROWS start` when `end` is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowFrame {
    pub units: FrameUnits,
    pub start: FrameBound,
    pub end: Option<FrameBound>,
}

/// The contents of `OVER (...)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WindowSpec {
    pub partition_by: Vec<Expr>,
    pub order_by: Vec<OrderByItem>,
    pub frame: Option<WindowFrame>,
}

/// `WHEN condition THEN result`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WhenClause {
    pub condition: Expr,
    pub result: Expr,
}

/// Target of `CONVERT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConvertTarget {
    /// `CONVERT(e, type)`
    Type(DataType),
    /// `CONVERT(e USING charset)`
    Charset(Ident),
}

/// A `key: value` entry of a map literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapEntry {
    pub key: Expr,
    pub value: Expr,
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(Literal),

    /// `DATE '2024-01-01'`
    TypedString { data_type: DataType, value: String },

    /// `INTERVAL 1 DAY`
    Interval { value: Box<Expr>, unit: IntervalUnit },

    /// Column reference, possibly qualified: `a`, `t.a`, `db.t.a`.
    Column(ObjectName),

    /// `?`, numbered from 1 in source order.
    Placeholder(usize),

    /// `@name` or `@@[scope.]name`.
    Variable { system: bool, name: String },

    Unary { op: UnaryOp, operand: Box<Expr> },

    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    /// `e IS [NOT] NULL`
    IsNull { expr: Box<Expr>, negated: bool },

    /// `e IS [NOT] TRUE|FALSE`
    IsBool {
        expr: Box<Expr>,
        value: bool,
        negated: bool,
    },

    /// `e [NOT] LIKE|REGEXP pattern`
    Pattern {
        expr: Box<Expr>,
        op: PatternOp,
        pattern: Box<Expr>,
        negated: bool,
    },

    /// `e [NOT] IN (a, b)`
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },

    /// `e [NOT] IN (SELECT ...)`
    InSubquery {
        expr: Box<Expr>,
        subquery: Box<Query>,
        negated: bool,
    },

    /// `e [NOT] BETWEEN low AND high`
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
        negated: bool,
    },

    /// `e MATCH_ANY 'text'`
    Match {
        expr: Box<Expr>,
        op: MatchOp,
        pattern: Box<Expr>,
    },

    /// `(e)`; kept so that printing reproduces the parentheses.
    Nested(Box<Expr>),

    /// `(a, b)`
    Row(Vec<Expr>),

    /// `(SELECT ...)` used as a value.
    Subquery(Box<Query>),

    /// `EXISTS (SELECT ...)`
    Exists(Box<Query>),

    Case {
        operand: Option<Box<Expr>>,
        branches: Vec<WhenClause>,
        else_result: Option<Box<Expr>>,
    },

    Cast { expr: Box<Expr>, data_type: DataType },

    Convert { expr: Box<Expr>, target: ConvertTarget },

    /// `EXTRACT(unit FROM e)`
    Extract { unit: IntervalUnit, expr: Box<Expr> },

    Function(FunctionCall),

    /// `e[index]`
    Index { expr: Box<Expr>, index: Box<Expr> },

    /// `e[lower:upper]`
    Slice {
        expr: Box<Expr>,
        lower: Option<Box<Expr>>,
        upper: Option<Box<Expr>>,
    },

    /// `e.field` on anything but a plain column path.
    Field { expr: Box<Expr>, field: Ident },

    /// `e COLLATE utf8mb4_bin`
    Collate { expr: Box<Expr>, collation: Ident },

    /// `DEFAULT` as a value in `VALUES` rows and `UPDATE ... SET`.
    Default,

    /// `[a, b]`
    Array(Vec<Expr>),

    /// `{k: v}`
    Map(Vec<MapEntry>),

    /// `x -> e` or `(x, y) -> e`
    Lambda { params: Vec<Ident>, body: Box<Expr> },

    Niladic(Niladic),
}

impl Expr {
    /// Creates a literal expression.
    #[must_use]
    pub const fn literal(lit: Literal) -> Self {
        Self::Literal(lit)
    }

    /// Creates an unqualified column reference.
    #[must_use]
    pub fn column(name: impl Into<Ident>) -> Self {
        Self::Column(ObjectName(vec![name.into()]))
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a unary expression.
    #[must_use]
    pub fn unary(op: UnaryOp, operand: Self) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Strips any number of redundant parentheses.
    #[must_use]
    pub fn unnested(&self) -> &Self {
        let mut expr = self;
        while let Self::Nested(inner) = expr {
            expr = inner;
        }
        expr
    }
}

fn not(negated: bool) -> &'static str {
    if negated {
        "NOT "
    } else {
        ""
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => write!(f, "{lit}"),
            Self::TypedString { data_type, value } => {
                write!(f, "{data_type} {}", QuotedString(value))
            }
            Self::Interval { value, unit } => write!(f, "INTERVAL {value} {}", unit.as_str()),
            Self::Column(name) => write!(f, "{name}"),
            Self::Placeholder(_) => f.write_str("?"),
            Self::Variable { system, name } => {
                let sigil = if *system { "@@" } else { "@" };
                if name.chars().all(|c| c.is_alphanumeric() || matches!(c, '_' | '$' | '.')) {
                    write!(f, "{sigil}{name}")
                } else {
                    write!(f, "{sigil}{}", QuotedString(name))
                }
            }
            Self::Unary { op, operand } => match op {
                UnaryOp::Not => write!(f, "NOT {operand}"),
                // `- -1` must not print as a `--` comment.
                UnaryOp::Minus | UnaryOp::Plus
                    if matches!(
                        operand.as_ref(),
                        Self::Unary {
                            op: UnaryOp::Minus | UnaryOp::Plus,
                            ..
                        }
                    ) =>
                {
                    write!(f, "{} {operand}", op.as_str())
                }
                _ => write!(f, "{}{operand}", op.as_str()),
            },
            Self::Binary { left, op, right } => write!(f, "{left} {} {right}", op.as_str()),
            Self::IsNull { expr, negated } => write!(f, "{expr} IS {}NULL", not(*negated)),
            Self::IsBool {
                expr,
                value,
                negated,
            } => {
                let value = if *value { "TRUE" } else { "FALSE" };
                write!(f, "{expr} IS {}{value}", not(*negated))
            }
            Self::Pattern {
                expr,
                op,
                pattern,
                negated,
            } => write!(f, "{expr} {}{} {pattern}", not(*negated), op.as_str()),
            Self::InList {
                expr,
                list,
                negated,
            } => write!(f, "{expr} {}IN ({})", not(*negated), comma_separated(list)),
            Self::InSubquery {
                expr,
                subquery,
                negated,
            } => write!(f, "{expr} {}IN ({subquery})", not(*negated)),
            Self::Between {
                expr,
                low,
                high,
                negated,
            } => write!(f, "{expr} {}BETWEEN {low} AND {high}", not(*negated)),
            Self::Match { expr, op, pattern } => write!(f, "{expr} {} {pattern}", op.as_str()),
            Self::Nested(inner) => write!(f, "({inner})"),
            Self::Row(items) => write!(f, "({})", comma_separated(items)),
            Self::Subquery(query) => write!(f, "({query})"),
            Self::Exists(query) => write!(f, "EXISTS ({query})"),
            Self::Case {
                operand,
                branches,
                else_result,
            } => {
                f.write_str("CASE")?;
                if let Some(operand) = operand {
                    write!(f, " {operand}")?;
                }
                for branch in branches {
                    write!(f, " WHEN {} THEN {}", branch.condition, branch.result)?;
                }
                if let Some(else_result) = else_result {
                    write!(f, " ELSE {else_result}")?;
                }
                f.write_str(" END")
            }
            Self::Cast { expr, data_type } => write!(f, "CAST({expr} AS {data_type})"),
            Self::Convert { expr, target } => match target {
                ConvertTarget::Type(data_type) => write!(f, "CONVERT({expr}, {data_type})"),
                ConvertTarget::Charset(charset) => write!(f, "CONVERT({expr} USING {charset})"),
            },
            Self::Extract { unit, expr } => write!(f, "EXTRACT({} FROM {expr})", unit.as_str()),
            Self::Function(call) => write!(f, "{call}"),
            Self::Index { expr, index } => write!(f, "{expr}[{index}]"),
            Self::Slice { expr, lower, upper } => {
                write!(f, "{expr}[")?;
                if let Some(lower) = lower {
                    write!(f, "{lower}")?;
                }
                f.write_str(":")?;
                if let Some(upper) = upper {
                    write!(f, "{upper}")?;
                }
                f.write_str("]")
            }
            Self::Field { expr, field } => write!(f, "{expr}.{field}"),
            Self::Collate { expr, collation } => write!(f, "{expr} COLLATE {collation}"),
            Self::Default => f.write_str("DEFAULT"),
            Self::Array(items) => write!(f, "[{}]", comma_separated(items)),
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", entry.key, entry.value)?;
                }
                f.write_str("}")
            }
            Self::Lambda { params, body } => match params.as_slice() {
                [single] => write!(f, "{single} -> {body}"),
                _ => write!(f, "({}) -> {body}", comma_separated(params)),
            },
            Self::Niladic(n) => f.write_str(n.as_str()),
        }
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        match &self.args {
            FunctionArgs::Wildcard => f.write_str("*")?,
            FunctionArgs::List(args) => write!(f, "{}", comma_separated(args))?,
        }
        if !self.order_by.is_empty() {
            write!(f, " ORDER BY {}", comma_separated(&self.order_by))?;
        }
        f.write_str(")")?;
        if let Some(over) = &self.over {
            write!(f, " OVER ({over})")?;
        }
        Ok(())
    }
}

impl fmt::Display for FrameBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundedPreceding => f.write_str("UNBOUNDED PRECEDING"),
            Self::Preceding(n) => write!(f, "{n} PRECEDING"),
            Self::CurrentRow => f.write_str("CURRENT ROW"),
            Self::Following(n) => write!(f, "{n} FOLLOWING"),
            Self::UnboundedFollowing => f.write_str("UNBOUNDED FOLLOWING"),
        }
    }
}

impl fmt::Display for WindowFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = match self.units {
            FrameUnits::Rows => "ROWS",
            FrameUnits::Range => "RANGE",
        };
        match &self.end {
            Some(end) => write!(f, "{units} BETWEEN {} AND {end}", self.start),
            None => write!(f, "{units} {}", self.start),
        }
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if !self.partition_by.is_empty() {
            write!(f, "PARTITION BY {}", comma_separated(&self.partition_by))?;
            sep = " ";
        }
        if !self.order_by.is_empty() {
            write!(f, "{sep}ORDER BY {}", comma_separated(&self.order_by))?;
            sep = " ";
        }
        if let Some(frame) = &self.frame {
            write!(f, "{sep}{frame}")?;
        }
        Ok(())
    }
}
