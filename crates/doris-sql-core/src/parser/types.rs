//! Data type grammar.

use super::{Parser, SyntaxError};
use crate::ast::{DataType, DatetimeKind, DecimalKind, PrimitiveType, StructField};
use crate::error::Result;
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// Parses a column or cast type. Type names are plain words, so the
    /// grammar matches on spelling rather than on keywords.
    pub(super) fn parse_data_type(&mut self) -> Result<DataType> {
        self.nested(Self::parse_data_type_inner)
    }

    fn parse_data_type_inner(&mut self) -> Result<DataType> {
        let Some(word) = self.peek().word() else {
            return Err(self.expected(&["data type"]));
        };
        let name = word.to_ascii_uppercase();
        match name.as_str() {
            "ARRAY" => {
                self.advance();
                self.expect(&TokenKind::Lt)?;
                let element = self.parse_data_type()?;
                self.expect(&TokenKind::Gt)?;
                return Ok(DataType::Array(Box::new(element)));
            }
            "MAP" => {
                self.advance();
                self.expect(&TokenKind::Lt)?;
                let key = self.parse_data_type()?;
                self.expect(&TokenKind::Comma)?;
                let value = self.parse_data_type()?;
                self.expect(&TokenKind::Gt)?;
                return Ok(DataType::Map(Box::new(key), Box::new(value)));
            }
            "STRUCT" => {
                self.advance();
                self.expect(&TokenKind::Lt)?;
                let fields = self.parse_comma_separated(Self::parse_struct_field)?;
                self.expect(&TokenKind::Gt)?;
                return Ok(DataType::Struct(fields));
            }
            "CHAR" | "CHARACTER" => {
                self.advance();
                return Ok(DataType::Char(self.parse_type_length()?));
            }
            "VARCHAR" => {
                self.advance();
                if self.check(&TokenKind::LeftParen) && self.check_nth(1, &TokenKind::Star) {
                    self.advance();
                    self.advance();
                    self.expect(&TokenKind::RightParen)?;
                    return Ok(DataType::Varchar(None));
                }
                return Ok(DataType::Varchar(self.parse_type_length()?));
            }
            _ => {}
        }

        if let Some(kind) = DecimalKind::from_name(&name) {
            self.advance();
            let (precision, scale) = if self.eat(&TokenKind::LeftParen) {
                let precision = self.parse_u32()?;
                let scale = if self.eat(&TokenKind::Comma) {
                    Some(self.parse_u32()?)
                } else {
                    None
                };
                self.expect(&TokenKind::RightParen)?;
                (Some(precision), scale)
            } else {
                (None, None)
            };
            return Ok(DataType::Decimal {
                kind,
                precision,
                scale,
            });
        }
        if let Some(kind) = DatetimeKind::from_name(&name) {
            self.advance();
            let precision = self.parse_type_length()?;
            return Ok(DataType::Datetime { kind, precision });
        }
        if let Some(primitive) = PrimitiveType::from_name(&name) {
            self.advance();
            match primitive {
                PrimitiveType::Signed | PrimitiveType::Unsigned => {
                    if !self.eat_word("INT") {
                        self.eat_word("INTEGER");
                    }
                }
                kind if kind.is_integer() => {
                    if let Some(width) = self.parse_type_length()? {
                        return Ok(DataType::Integer { kind, width });
                    }
                }
                _ => {}
            }
            return Ok(DataType::Primitive(primitive));
        }

        Err(SyntaxError::new(format!("unknown data type `{word}`"), self.peek()).into())
    }

    fn parse_struct_field(&mut self) -> Result<StructField> {
        let name = self.parse_identifier()?;
        self.eat(&TokenKind::Colon);
        let data_type = self.parse_data_type()?;
        let comment = self.parse_optional_comment()?;
        Ok(StructField {
            name,
            data_type,
            comment,
        })
    }

    /// An optional `(n)`.
    fn parse_type_length(&mut self) -> Result<Option<u32>> {
        if !self.eat(&TokenKind::LeftParen) {
            return Ok(None);
        }
        let length = self.parse_u32()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Some(length))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::ParserConfig;
    use crate::error::Error;

    fn data_type(sql: &str) -> Result<DataType> {
        let mut parser = Parser::new(sql, &ParserConfig::default())?;
        let ty = parser.parse_data_type()?;
        assert!(parser.at_eof(), "trailing input after {sql}");
        Ok(ty)
    }

    #[test]
    fn test_nested_types_close_with_separate_angles() {
        let ty = data_type("ARRAY<MAP<STRING, ARRAY<INT>>>").unwrap();
        assert_eq!(ty.to_string(), "ARRAY<MAP<STRING, ARRAY<INT>>>");
    }

    #[test]
    fn test_parameterized_types() {
        assert_eq!(data_type("varchar(*)").unwrap(), DataType::Varchar(None));
        assert_eq!(data_type("CHAR(10)").unwrap(), DataType::Char(Some(10)));
        assert_eq!(
            data_type("DECIMALV3(27, 9)").unwrap(),
            DataType::Decimal {
                kind: DecimalKind::DecimalV3,
                precision: Some(27),
                scale: Some(9),
            }
        );
        assert_eq!(
            data_type("DATETIME(3)").unwrap(),
            DataType::Datetime {
                kind: DatetimeKind::Datetime,
                precision: Some(3),
            }
        );
    }

    #[test]
    fn test_integer_display_width() {
        assert_eq!(
            data_type("INT(11)").unwrap(),
            DataType::Integer {
                kind: PrimitiveType::Int,
                width: 11
            }
        );
        assert_eq!(data_type("INT(11)").unwrap().to_string(), "INT(11)");
        assert_eq!(data_type("BIGINT").unwrap(), DataType::Primitive(PrimitiveType::BigInt));
        assert_eq!(
            data_type("UNSIGNED INTEGER").unwrap(),
            DataType::Primitive(PrimitiveType::Unsigned)
        );
    }

    #[test]
    fn test_struct_fields() {
        let ty = data_type("STRUCT<id: BIGINT, tag: VARCHAR(8) COMMENT 'label'>").unwrap();
        let DataType::Struct(fields) = ty else {
            panic!("expected struct");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].comment.as_deref(), Some("label"));
    }

    #[test]
    fn test_unknown_type() {
        let err = data_type("BLOB").unwrap_err();
        assert_eq!(err.as_syntax().unwrap().message, "unknown data type `BLOB`");
    }

    #[test]
    fn test_type_nesting_limit() {
        let sql = format!("{}INT{}", "ARRAY<".repeat(10), ">".repeat(10));
        let config = ParserConfig::default().with_max_depth(5);
        let err = Parser::new(&sql, &config)
            .unwrap()
            .parse_data_type()
            .unwrap_err();
        assert!(matches!(err, Error::TooDeep { limit: 5, .. }));
    }
}
