//! Token types for the SQL lexer.

use std::fmt;

use super::{Location, Span};

macro_rules! define_keywords {
    (@reserved reserved) => { true };
    (@reserved) => { false };
    ($($variant:ident => $text:literal $(: $reserved:ident)?,)*) => {
        /// SQL keywords, both reserved and non-reserved.
        ///
        /// Non-reserved keywords are also accepted wherever the grammar
        /// expects an identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            /// Every keyword, in table order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Looks up a keyword by spelling, ignoring ASCII case.
            #[must_use]
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(word: &str) -> Option<Self> {
                if word.len() > 24 || !word.is_ascii() {
                    return None;
                }
                match word.to_ascii_uppercase().as_str() {
                    $($text => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Returns the canonical uppercase spelling.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }

            /// Returns true if the keyword can only be used as a name when quoted.
            #[must_use]
            pub const fn is_reserved(self) -> bool {
                match self {
                    $(Self::$variant => define_keywords!(@reserved $($reserved)?),)*
                }
            }
        }
    };
}

define_keywords! {
    Add => "ADD",
    Admin => "ADMIN",
    After => "AFTER",
    Aggregate => "AGGREGATE",
    All => "ALL": reserved,
    Alter => "ALTER": reserved,
    Analyze => "ANALYZE",
    And => "AND": reserved,
    Anti => "ANTI",
    As => "AS": reserved,
    Asc => "ASC": reserved,
    Auto => "AUTO",
    AutoIncrement => "AUTO_INCREMENT",
    Backend => "BACKEND",
    Backends => "BACKENDS",
    Begin => "BEGIN",
    Between => "BETWEEN": reserved,
    Broker => "BROKER",
    Buckets => "BUCKETS",
    Build => "BUILD",
    By => "BY": reserved,
    Cancel => "CANCEL",
    Case => "CASE": reserved,
    Cast => "CAST": reserved,
    Catalog => "CATALOG",
    Catalogs => "CATALOGS",
    Charset => "CHARSET",
    Collate => "COLLATE": reserved,
    Collation => "COLLATION",
    Column => "COLUMN",
    Columns => "COLUMNS",
    Comment => "COMMENT",
    Commit => "COMMIT",
    Complete => "COMPLETE",
    Connection => "CONNECTION",
    Convert => "CONVERT": reserved,
    Create => "CREATE": reserved,
    Cross => "CROSS": reserved,
    Cube => "CUBE",
    Current => "CURRENT",
    CurrentDate => "CURRENT_DATE",
    CurrentTime => "CURRENT_TIME",
    CurrentTimestamp => "CURRENT_TIMESTAMP",
    CurrentUser => "CURRENT_USER",
    Data => "DATA",
    Database => "DATABASE": reserved,
    Databases => "DATABASES": reserved,
    Decommission => "DECOMMISSION",
    Default => "DEFAULT": reserved,
    Deferred => "DEFERRED",
    Delete => "DELETE": reserved,
    Desc => "DESC": reserved,
    Describe => "DESCRIBE": reserved,
    Distinct => "DISTINCT": reserved,
    Distributed => "DISTRIBUTED",
    Div => "DIV": reserved,
    Drop => "DROP": reserved,
    Duplicate => "DUPLICATE",
    Else => "ELSE": reserved,
    End => "END",
    Engine => "ENGINE",
    Engines => "ENGINES",
    Errors => "ERRORS",
    Except => "EXCEPT": reserved,
    Exists => "EXISTS": reserved,
    Explain => "EXPLAIN": reserved,
    Export => "EXPORT",
    External => "EXTERNAL",
    Extract => "EXTRACT": reserved,
    False => "FALSE": reserved,
    Fields => "FIELDS",
    First => "FIRST",
    Follower => "FOLLOWER",
    Following => "FOLLOWING",
    For => "FOR": reserved,
    Force => "FORCE",
    Format => "FORMAT",
    From => "FROM": reserved,
    Frontend => "FRONTEND",
    Frontends => "FRONTENDS",
    Full => "FULL": reserved,
    Functions => "FUNCTIONS",
    Global => "GLOBAL",
    Grant => "GRANT": reserved,
    Grants => "GRANTS",
    Graph => "GRAPH",
    Group => "GROUP": reserved,
    Grouping => "GROUPING",
    Hash => "HASH",
    Having => "HAVING": reserved,
    Help => "HELP",
    Identified => "IDENTIFIED",
    If => "IF": reserved,
    Ignore => "IGNORE",
    Immediate => "IMMEDIATE",
    In => "IN": reserved,
    Index => "INDEX": reserved,
    Indexes => "INDEXES",
    Infile => "INFILE",
    Inner => "INNER": reserved,
    Insert => "INSERT": reserved,
    Intersect => "INTERSECT": reserved,
    Interval => "INTERVAL": reserved,
    Into => "INTO": reserved,
    Is => "IS": reserved,
    Join => "JOIN": reserved,
    Key => "KEY": reserved,
    Keys => "KEYS": reserved,
    Kill => "KILL",
    Label => "LABEL",
    Last => "LAST",
    Lateral => "LATERAL": reserved,
    Left => "LEFT": reserved,
    Less => "LESS",
    Like => "LIKE": reserved,
    Limit => "LIMIT": reserved,
    Lines => "LINES",
    List => "LIST",
    Load => "LOAD",
    Local => "LOCAL",
    LocalTime => "LOCALTIME",
    LocalTimestamp => "LOCALTIMESTAMP",
    Manual => "MANUAL",
    MatchAll => "MATCH_ALL": reserved,
    MatchAny => "MATCH_ANY": reserved,
    MatchPhrase => "MATCH_PHRASE": reserved,
    MatchPhrasePrefix => "MATCH_PHRASE_PREFIX": reserved,
    MatchRegexp => "MATCH_REGEXP": reserved,
    Materialized => "MATERIALIZED",
    MaxValue => "MAXVALUE",
    Minus => "MINUS": reserved,
    Mod => "MOD",
    Modify => "MODIFY",
    Names => "NAMES",
    Negative => "NEGATIVE",
    Not => "NOT": reserved,
    Null => "NULL": reserved,
    Nulls => "NULLS",
    Observer => "OBSERVER",
    Offset => "OFFSET",
    On => "ON": reserved,
    Or => "OR": reserved,
    Order => "ORDER": reserved,
    Outer => "OUTER": reserved,
    Over => "OVER": reserved,
    Overwrite => "OVERWRITE",
    Partition => "PARTITION": reserved,
    Partitions => "PARTITIONS",
    Password => "PASSWORD",
    Plan => "PLAN",
    Preceding => "PRECEDING",
    Processlist => "PROCESSLIST",
    Properties => "PROPERTIES",
    Property => "PROPERTY",
    Qualify => "QUALIFY": reserved,
    Query => "QUERY",
    Random => "RANDOM",
    Range => "RANGE": reserved,
    Recover => "RECOVER",
    Refresh => "REFRESH",
    Regexp => "REGEXP": reserved,
    Rename => "RENAME",
    Replace => "REPLACE",
    Revoke => "REVOKE": reserved,
    Right => "RIGHT": reserved,
    Rlike => "RLIKE": reserved,
    Role => "ROLE",
    Roles => "ROLES",
    Rollback => "ROLLBACK",
    Rollup => "ROLLUP",
    Row => "ROW",
    Rows => "ROWS",
    Schedule => "SCHEDULE",
    Schema => "SCHEMA",
    Select => "SELECT": reserved,
    Semi => "SEMI",
    Session => "SESSION",
    Set => "SET": reserved,
    Sets => "SETS",
    Show => "SHOW": reserved,
    Status => "STATUS",
    Switch => "SWITCH",
    Sync => "SYNC",
    System => "SYSTEM",
    Table => "TABLE": reserved,
    Tables => "TABLES",
    Temporary => "TEMPORARY",
    Terminated => "TERMINATED",
    Than => "THAN",
    Then => "THEN": reserved,
    To => "TO": reserved,
    Triggers => "TRIGGERS",
    True => "TRUE": reserved,
    Truncate => "TRUNCATE",
    Unbounded => "UNBOUNDED",
    Union => "UNION": reserved,
    Unique => "UNIQUE": reserved,
    Update => "UPDATE": reserved,
    Use => "USE": reserved,
    User => "USER",
    Using => "USING": reserved,
    Values => "VALUES": reserved,
    Variables => "VARIABLES",
    Verbose => "VERBOSE",
    View => "VIEW",
    Views => "VIEWS",
    Warnings => "WARNINGS",
    When => "WHEN": reserved,
    Where => "WHERE": reserved,
    With => "WITH": reserved,
    Work => "WORK",
    Xor => "XOR": reserved,
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    /// Integer literal (decimal or `0x` hexadecimal).
    Integer(i128),
    /// Exact decimal literal, kept as written (`1.50`, `.5`, or an integer
    /// too large for 128 bits).
    Decimal(String),
    /// Scientific-notation literal, kept as written (`1e10`).
    Float(String),
    /// String literal with escapes resolved.
    String(String),
    /// Hex string literal `X'0A1B'`, holding the digits.
    HexString(String),

    // Names
    /// Unquoted identifier that is not a keyword.
    Identifier(String),
    /// Backtick-quoted identifier with escapes resolved.
    QuotedIdentifier(String),
    /// Keyword, reserved or not.
    Keyword(Keyword),
    /// `@name` user variable.
    UserVariable(String),
    /// `@@[scope.]name` system variable.
    SystemVariable(String),
    /// `?` positional placeholder.
    Placeholder,

    // Comparison
    Eq,
    NullSafeEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Arithmetic and bitwise
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Ampersand,
    Pipe,
    Caret,
    Tilde,
    Bang,
    DoubleAmpersand,
    DoublePipe,
    Arrow,

    // Punctuation
    Dot,
    Comma,
    Semicolon,
    Colon,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    /// `/*+` opening an optimizer hint.
    HintStart,
    /// `*/` closing an optimizer hint.
    HintEnd,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns true for unquoted identifiers and every keyword.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Identifier(_) | Self::Keyword(_))
    }

    /// Short human-readable description used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer(v) => format!("integer {v}"),
            Self::Decimal(v) | Self::Float(v) => format!("number {v}"),
            Self::String(v) => format!("string '{v}'"),
            Self::HexString(v) => format!("hex string X'{v}'"),
            Self::Identifier(v) => format!("identifier {v}"),
            Self::QuotedIdentifier(v) => format!("identifier `{v}`"),
            Self::Keyword(kw) => format!("keyword {kw}"),
            Self::UserVariable(v) => format!("variable @{v}"),
            Self::SystemVariable(v) => format!("variable @@{v}"),
            Self::Eof => String::from("end of input"),
            other => format!("`{}`", other.punctuation()),
        }
    }

    /// Spelling of operator and punctuation tokens; empty for the rest.
    #[must_use]
    pub const fn punctuation(&self) -> &'static str {
        match self {
            Self::Placeholder => "?",
            Self::Eq => "=",
            Self::NullSafeEq => "<=>",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::Bang => "!",
            Self::DoubleAmpersand => "&&",
            Self::DoublePipe => "||",
            Self::Arrow => "->",
            Self::Dot => ".",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::HintStart => "/*+",
            Self::HintEnd => "*/",
            _ => "",
        }
    }
}

/// A token with its source text and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The raw lexeme, quotes included.
    pub text: &'a str,
    pub span: Span,
    pub location: Location,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'a str, span: Span, location: Location) -> Self {
        Self {
            kind,
            text,
            span,
            location,
        }
    }

    /// Returns the keyword if this token is one.
    #[must_use]
    pub const fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns the text of an unquoted word (identifier or keyword).
    #[must_use]
    pub fn word(&self) -> Option<&'a str> {
        if self.kind.is_word() {
            Some(self.text)
        } else {
            None
        }
    }
}
