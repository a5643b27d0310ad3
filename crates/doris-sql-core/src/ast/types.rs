//! SQL data types.

use std::fmt;

use super::display::{comma_separated, QuotedString};
use super::Ident;

/// Types without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    LargeInt,
    Float,
    Double,
    Date,
    DateV2,
    Time,
    String,
    Text,
    Json,
    Jsonb,
    Bitmap,
    Hll,
    QuantileState,
    IpV4,
    IpV6,
    Variant,
    /// `SIGNED [INTEGER]`, a cast target.
    Signed,
    /// `UNSIGNED [INTEGER]`, a cast target.
    Unsigned,
}

impl PrimitiveType {
    /// Looks up a type name, ignoring case. Aliases map to one variant.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name.to_ascii_uppercase().as_str() {
            "BOOLEAN" | "BOOL" => Self::Boolean,
            "TINYINT" => Self::TinyInt,
            "SMALLINT" => Self::SmallInt,
            "INT" | "INTEGER" => Self::Int,
            "BIGINT" => Self::BigInt,
            "LARGEINT" => Self::LargeInt,
            "FLOAT" => Self::Float,
            "DOUBLE" => Self::Double,
            "DATE" => Self::Date,
            "DATEV2" => Self::DateV2,
            "TIME" => Self::Time,
            "STRING" => Self::String,
            "TEXT" => Self::Text,
            "JSON" => Self::Json,
            "JSONB" => Self::Jsonb,
            "BITMAP" => Self::Bitmap,
            "HLL" => Self::Hll,
            "QUANTILE_STATE" => Self::QuantileState,
            "IPV4" => Self::IpV4,
            "IPV6" => Self::IpV6,
            "VARIANT" => Self::Variant,
            "SIGNED" => Self::Signed,
            "UNSIGNED" => Self::Unsigned,
            _ => return None,
        };
        Some(ty)
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::TinyInt => "TINYINT",
            Self::SmallInt => "SMALLINT",
            Self::Int => "INT",
            Self::BigInt => "BIGINT",
            Self::LargeInt => "LARGEINT",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Date => "DATE",
            Self::DateV2 => "DATEV2",
            Self::Time => "TIME",
            Self::String => "STRING",
            Self::Text => "TEXT",
            Self::Json => "JSON",
            Self::Jsonb => "JSONB",
            Self::Bitmap => "BITMAP",
            Self::Hll => "HLL",
            Self::QuantileState => "QUANTILE_STATE",
            Self::IpV4 => "IPV4",
            Self::IpV6 => "IPV6",
            Self::Variant => "VARIANT",
            Self::Signed => "SIGNED",
            Self::Unsigned => "UNSIGNED",
        }
    }

    /// Integer types accept (and ignore) a MySQL display width: `INT(11)`.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::TinyInt | Self::SmallInt | Self::Int | Self::BigInt | Self::LargeInt
        )
    }
}

/// Spelling of a decimal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalKind {
    Decimal,
    DecimalV2,
    DecimalV3,
}

impl DecimalKind {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "DECIMAL" | "NUMERIC" => Some(Self::Decimal),
            "DECIMALV2" => Some(Self::DecimalV2),
            "DECIMALV3" => Some(Self::DecimalV3),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decimal => "DECIMAL",
            Self::DecimalV2 => "DECIMALV2",
            Self::DecimalV3 => "DECIMALV3",
        }
    }
}

/// Spelling of a date-time type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatetimeKind {
    Datetime,
    DatetimeV2,
    Timestamp,
}

impl DatetimeKind {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "DATETIME" => Some(Self::Datetime),
            "DATETIMEV2" => Some(Self::DatetimeV2),
            "TIMESTAMP" => Some(Self::Timestamp),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Datetime => "DATETIME",
            Self::DatetimeV2 => "DATETIMEV2",
            Self::Timestamp => "TIMESTAMP",
        }
    }
}

/// A field of a `STRUCT<...>` type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructField {
    pub name: Ident,
    pub data_type: DataType,
    pub comment: Option<String>,
}

/// A column or cast target type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    Primitive(PrimitiveType),
    /// An integer type with a display width, `INT(11)`. The width does not
    /// change the value range.
    Integer { kind: PrimitiveType, width: u32 },
    /// `CHAR[(n)]`
    Char(Option<u32>),
    /// `VARCHAR[(n)]`; `VARCHAR(*)` has no length.
    Varchar(Option<u32>),
    /// `DECIMAL[(p[, s])]`
    Decimal {
        kind: DecimalKind,
        precision: Option<u32>,
        scale: Option<u32>,
    },
    /// `DATETIME[(p)]`
    Datetime {
        kind: DatetimeKind,
        precision: Option<u32>,
    },
    /// `ARRAY<t>`
    Array(Box<DataType>),
    /// `MAP<k, v>`
    Map(Box<DataType>, Box<DataType>),
    /// `STRUCT<name: t, ...>`
    Struct(Vec<StructField>),
}

impl DataType {
    /// Child types of a nested type, in declaration order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Array(inner) => vec![inner.as_ref()],
            Self::Map(key, value) => vec![key.as_ref(), value.as_ref()],
            Self::Struct(fields) => fields.iter().map(|f| &f.data_type).collect(),
            _ => Vec::new(),
        }
    }

    /// Returns true for `ARRAY`, `MAP` and `STRUCT`.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Map(..) | Self::Struct(_))
    }
}

impl fmt::Display for StructField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.data_type)?;
        if let Some(comment) = &self.comment {
            write!(f, " COMMENT {}", QuotedString(comment))?;
        }
        Ok(())
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.as_str()),
            Self::Integer { kind, width } => write!(f, "{}({width})", kind.as_str()),
            Self::Char(len) => write_length(f, "CHAR", *len),
            Self::Varchar(len) => write_length(f, "VARCHAR", *len),
            Self::Decimal {
                kind,
                precision,
                scale,
            } => {
                f.write_str(kind.as_str())?;
                match (precision, scale) {
                    (Some(p), Some(s)) => write!(f, "({p}, {s})"),
                    (Some(p), None) => write!(f, "({p})"),
                    _ => Ok(()),
                }
            }
            Self::Datetime { kind, precision } => write_length(f, kind.as_str(), *precision),
            Self::Array(inner) => write!(f, "ARRAY<{inner}>"),
            Self::Map(key, value) => write!(f, "MAP<{key}, {value}>"),
            Self::Struct(fields) => write!(f, "STRUCT<{}>", comma_separated(fields)),
        }
    }
}

fn write_length(f: &mut fmt::Formatter<'_>, name: &str, len: Option<u32>) -> fmt::Result {
    match len {
        Some(n) => write!(f, "{name}({n})"),
        None => f.write_str(name),
    }
}
