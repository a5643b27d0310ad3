//! Query grammar: `WITH`, set operations, `SELECT` blocks and relations.

use super::Parser;
use crate::ast::{
    Cte, Expr, GroupBy, Hint, HintArg, HintValue, Ident, JoinConstraint, JoinOperator,
    LateralView, Limit, Literal, NullOrdering, ObjectName, OrderByItem, OrderDirection, Query,
    SampleSize, Select, SelectItem, SetExpr, SetOperator, SetQuantifier, TableAlias, TableRef,
    TableSample,
};
use crate::error::Result;
use crate::lexer::{Keyword, TokenKind};

/// Non-reserved words that end a relation instead of naming its alias.
const ALIAS_STOP_WORDS: &[Keyword] = &[Keyword::Properties, Keyword::Force, Keyword::Label];

impl Parser<'_> {
    /// Parses a query: `[WITH ...] body [ORDER BY ...] [LIMIT ...]`.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for malformed input, or `Error::TooDeep`
    /// when sub-queries nest past the configured limit.
    pub fn parse_query(&mut self) -> Result<Query> {
        self.nested(Self::parse_query_inner)
    }

    fn parse_query_inner(&mut self) -> Result<Query> {
        let with = if self.eat_keyword(Keyword::With) {
            self.parse_comma_separated(Self::parse_cte)?
        } else {
            Vec::new()
        };
        let body = self.parse_set_expr()?;
        let order_by = if self.eat_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            self.parse_order_by_list()?
        } else {
            Vec::new()
        };
        let limit = self.parse_limit()?;
        Ok(Query {
            with,
            body,
            order_by,
            limit,
        })
    }

    fn parse_cte(&mut self) -> Result<Cte> {
        let name = self.parse_identifier()?;
        let columns = self.parse_optional_ident_list()?;
        self.expect_keyword(Keyword::As)?;
        self.expect(&TokenKind::LeftParen)?;
        let query = self.parse_boxed_query()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Cte {
            name,
            columns,
            query,
        })
    }

    /// `UNION`, `EXCEPT` and `MINUS` chain left to right over
    /// `INTERSECT` operands.
    fn parse_set_expr(&mut self) -> Result<SetExpr> {
        self.chain(|p| {
            let mut left = p.parse_intersect()?;
            loop {
                let op = match p.peek().keyword() {
                    Some(Keyword::Union) => SetOperator::Union,
                    Some(Keyword::Except) => SetOperator::Except,
                    Some(Keyword::Minus) => SetOperator::Minus,
                    _ => return Ok(left),
                };
                p.advance();
                p.deepen()?;
                let quantifier = p.parse_set_quantifier();
                let right = p.parse_intersect()?;
                left = SetExpr::SetOperation {
                    op,
                    quantifier,
                    left: Box::new(left),
                    right: Box::new(right),
                };
            }
        })
    }

    fn parse_intersect(&mut self) -> Result<SetExpr> {
        self.chain(|p| {
            let mut left = p.parse_set_operand()?;
            while p.eat_keyword(Keyword::Intersect) {
                p.deepen()?;
                let quantifier = p.parse_set_quantifier();
                let right = p.parse_set_operand()?;
                left = SetExpr::SetOperation {
                    op: SetOperator::Intersect,
                    quantifier,
                    left: Box::new(left),
                    right: Box::new(right),
                };
            }
            Ok(left)
        })
    }

    fn parse_set_quantifier(&mut self) -> SetQuantifier {
        if self.eat_keyword(Keyword::All) {
            SetQuantifier::All
        } else if self.eat_keyword(Keyword::Distinct) {
            SetQuantifier::Distinct
        } else {
            SetQuantifier::None
        }
    }

    fn parse_set_operand(&mut self) -> Result<SetExpr> {
        if self.eat(&TokenKind::LeftParen) {
            let query = self.parse_boxed_query()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(SetExpr::Query(query));
        }
        if self.check_keyword(Keyword::Select) {
            return Ok(SetExpr::Select(Box::new(self.parse_select()?)));
        }
        Err(self.expected(&["SELECT", "`(`"]))
    }

    fn parse_select(&mut self) -> Result<Select> {
        self.expect_keyword(Keyword::Select)?;
        let hints = if self.eat(&TokenKind::HintStart) {
            self.parse_hints()?
        } else {
            Vec::new()
        };
        let distinct = self.eat_keyword(Keyword::Distinct);
        if !distinct {
            self.eat_keyword(Keyword::All);
        }
        let items = self.parse_comma_separated(Self::parse_select_item)?;

        let from = if self.eat_keyword(Keyword::From) {
            self.parse_comma_separated(Self::parse_relation)?
        } else {
            Vec::new()
        };
        let selection = self.parse_optional_where()?;
        let group_by = if self.eat_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            Some(self.parse_group_by()?)
        } else {
            None
        };
        let having = if self.eat_keyword(Keyword::Having) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let qualify = if self.eat_keyword(Keyword::Qualify) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        Ok(Select {
            hints,
            distinct,
            items,
            from,
            selection,
            group_by,
            having,
            qualify,
        })
    }

    /// Hint entries up to the closing `*/`; commas between entries and
    /// between arguments are optional.
    fn parse_hints(&mut self) -> Result<Vec<Hint>> {
        let mut hints = Vec::new();
        while !self.eat(&TokenKind::HintEnd) {
            if self.at_eof() {
                return Err(self.expected(&["`*/`"]));
            }
            if !hints.is_empty() {
                self.eat(&TokenKind::Comma);
            }
            hints.push(self.parse_hint()?);
        }
        Ok(hints)
    }

    fn parse_hint(&mut self) -> Result<Hint> {
        let name = self.parse_identifier_or_word()?;
        let mut args = Vec::new();
        if self.eat(&TokenKind::LeftParen) {
            while !self.eat(&TokenKind::RightParen) {
                if !args.is_empty() {
                    self.eat(&TokenKind::Comma);
                }
                args.push(self.parse_hint_arg()?);
            }
        }
        Ok(Hint { name, args })
    }

    fn parse_hint_arg(&mut self) -> Result<HintArg> {
        let key = self.parse_hint_value()?;
        let value = if self.eat(&TokenKind::Eq) {
            Some(self.parse_hint_value()?)
        } else {
            None
        };
        Ok(HintArg { key, value })
    }

    fn parse_hint_value(&mut self) -> Result<HintValue> {
        let literal = match &self.peek().kind {
            TokenKind::String(v) => Literal::String(v.clone()),
            TokenKind::Integer(v) => Literal::Integer(*v),
            TokenKind::Decimal(v) => Literal::Decimal(v.clone()),
            TokenKind::Float(v) => Literal::Float(v.clone()),
            TokenKind::Keyword(Keyword::True) => Literal::Boolean(true),
            TokenKind::Keyword(Keyword::False) => Literal::Boolean(false),
            TokenKind::Keyword(Keyword::Null) => Literal::Null,
            _ => {
                let mut parts = vec![self.parse_identifier_or_word()?];
                while self.check(&TokenKind::Dot) && self.check_nth_name(1) {
                    self.advance();
                    parts.push(self.parse_identifier_or_word()?);
                }
                return Ok(HintValue::Name(ObjectName(parts)));
            }
        };
        self.advance();
        Ok(HintValue::Literal(literal))
    }

    pub(super) fn parse_optional_where(&mut self) -> Result<Option<Expr>> {
        if self.eat_keyword(Keyword::Where) {
            Ok(Some(self.parse_expr()?))
        } else {
            Ok(None)
        }
    }

    fn parse_select_item(&mut self) -> Result<SelectItem> {
        if self.eat(&TokenKind::Star) {
            return Ok(SelectItem::Wildcard {
                qualifier: None,
                except: self.parse_wildcard_except()?,
            });
        }
        if self.check_qualified_wildcard() {
            let qualifier = self.parse_object_name()?;
            self.expect(&TokenKind::Dot)?;
            self.expect(&TokenKind::Star)?;
            return Ok(SelectItem::Wildcard {
                qualifier: Some(qualifier),
                except: self.parse_wildcard_except()?,
            });
        }
        let expr = self.parse_expr()?;
        let alias = self.parse_optional_column_alias()?;
        Ok(SelectItem::Expr { expr, alias })
    }

    /// `EXCEPT (a, b)` after a wildcard; a set operation is left alone.
    fn parse_wildcard_except(&mut self) -> Result<Vec<Ident>> {
        let is_column_list = self.check_keyword(Keyword::Except)
            && self.check_nth(1, &TokenKind::LeftParen)
            && !self.check_nth_keyword(2, Keyword::Select)
            && !self.check_nth_keyword(2, Keyword::With);
        if !is_column_list {
            return Ok(Vec::new());
        }
        self.advance();
        self.parse_ident_list()
    }

    /// Looks ahead for `name[.name]*.*`.
    fn check_qualified_wildcard(&self) -> bool {
        let mut n = 0;
        while self.check_nth_name(n) && self.check_nth(n + 1, &TokenKind::Dot) {
            if self.check_nth(n + 2, &TokenKind::Star) {
                return true;
            }
            n += 2;
        }
        false
    }

    /// `AS alias`, `AS 'alias'` or a bare alias word.
    fn parse_optional_column_alias(&mut self) -> Result<Option<Ident>> {
        if self.eat_keyword(Keyword::As) {
            if let TokenKind::String(value) = &self.peek().kind {
                let alias = Ident::new(value.clone());
                self.advance();
                return Ok(Some(alias));
            }
            return Ok(Some(self.parse_identifier()?));
        }
        if self.check_bare_alias() {
            return Ok(Some(self.parse_identifier()?));
        }
        Ok(None)
    }

    fn check_bare_alias(&self) -> bool {
        match &self.peek().kind {
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_) => true,
            TokenKind::Keyword(kw) => !kw.is_reserved() && !ALIAS_STOP_WORDS.contains(kw),
            _ => false,
        }
    }

    fn parse_optional_table_alias(&mut self) -> Result<Option<TableAlias>> {
        let explicit = self.eat_keyword(Keyword::As);
        if !explicit && (!self.check_bare_alias() || self.check_table_sample()) {
            return Ok(None);
        }
        let name = self.parse_identifier()?;
        let columns = self.parse_optional_ident_list()?;
        Ok(Some(TableAlias { name, columns }))
    }

    fn parse_group_by(&mut self) -> Result<GroupBy> {
        if self.check_keyword(Keyword::Rollup) && self.check_nth(1, &TokenKind::LeftParen) {
            self.advance();
            return Ok(GroupBy::Rollup(self.parse_parenthesized(Self::parse_expr)?));
        }
        if self.check_keyword(Keyword::Cube) && self.check_nth(1, &TokenKind::LeftParen) {
            self.advance();
            return Ok(GroupBy::Cube(self.parse_parenthesized(Self::parse_expr)?));
        }
        if self.check_keyword(Keyword::Grouping) && self.check_nth_keyword(1, Keyword::Sets) {
            self.advance();
            self.advance();
            let sets = self.parse_parenthesized(|p| {
                p.expect(&TokenKind::LeftParen)?;
                if p.eat(&TokenKind::RightParen) {
                    return Ok(Vec::new());
                }
                let set = p.parse_expr_list()?;
                p.expect(&TokenKind::RightParen)?;
                Ok(set)
            })?;
            return Ok(GroupBy::GroupingSets(sets));
        }
        Ok(GroupBy::Exprs(self.parse_expr_list()?))
    }

    pub(super) fn parse_order_by_list(&mut self) -> Result<Vec<OrderByItem>> {
        self.parse_comma_separated(Self::parse_order_by_item)
    }

    fn parse_order_by_item(&mut self) -> Result<OrderByItem> {
        let expr = self.parse_expr()?;
        let direction = if self.eat_keyword(Keyword::Asc) {
            Some(OrderDirection::Asc)
        } else if self.eat_keyword(Keyword::Desc) {
            Some(OrderDirection::Desc)
        } else {
            None
        };
        let nulls = if self.eat_keyword(Keyword::Nulls) {
            if self.eat_keyword(Keyword::First) {
                Some(NullOrdering::First)
            } else {
                self.expect_keyword(Keyword::Last)?;
                Some(NullOrdering::Last)
            }
        } else {
            None
        };
        Ok(OrderByItem {
            expr,
            direction,
            nulls,
        })
    }

    /// `LIMIT n [OFFSET m]` or the MySQL form `LIMIT m, n`.
    pub(super) fn parse_limit(&mut self) -> Result<Option<Limit>> {
        if !self.eat_keyword(Keyword::Limit) {
            return Ok(None);
        }
        let first = self.parse_u64()?;
        if self.eat(&TokenKind::Comma) {
            let count = self.parse_u64()?;
            return Ok(Some(Limit {
                count,
                offset: Some(first),
            }));
        }
        let offset = if self.eat_keyword(Keyword::Offset) {
            Some(self.parse_u64()?)
        } else {
            None
        };
        Ok(Some(Limit {
            count: first,
            offset,
        }))
    }

    /// A table factor followed by any joins and lateral views.
    pub(super) fn parse_relation(&mut self) -> Result<TableRef> {
        self.chain(|p| {
            let mut relation = p.parse_table_factor()?;
            loop {
                if p.check_keyword(Keyword::Lateral) {
                    p.deepen()?;
                    let view = p.parse_lateral_view()?;
                    relation = TableRef::LateralView {
                        base: Box::new(relation),
                        view,
                    };
                    continue;
                }
                let Some(operator) = p.parse_join_operator()? else {
                    return Ok(relation);
                };
                p.deepen()?;
                let hint = if p.eat(&TokenKind::LeftBracket) {
                    let hint = p.parse_identifier()?;
                    p.expect(&TokenKind::RightBracket)?;
                    Some(hint)
                } else {
                    None
                };
                let right = p.parse_table_factor()?;
                let constraint = if p.eat_keyword(Keyword::On) {
                    JoinConstraint::On(p.parse_expr()?)
                } else if p.eat_keyword(Keyword::Using) {
                    JoinConstraint::Using(p.parse_ident_list()?)
                } else {
                    JoinConstraint::None
                };
                relation = TableRef::Join {
                    left: Box::new(relation),
                    operator,
                    hint,
                    right: Box::new(right),
                    constraint,
                };
            }
        })
    }

    fn parse_join_operator(&mut self) -> Result<Option<JoinOperator>> {
        let operator = match self.peek().keyword() {
            Some(Keyword::Join) => {
                self.advance();
                return Ok(Some(JoinOperator::Inner));
            }
            Some(Keyword::Inner) => JoinOperator::Inner,
            Some(Keyword::Cross) => JoinOperator::Cross,
            Some(Keyword::Full) => {
                self.advance();
                self.eat_keyword(Keyword::Outer);
                self.expect_keyword(Keyword::Join)?;
                return Ok(Some(JoinOperator::FullOuter));
            }
            Some(side @ (Keyword::Left | Keyword::Right)) => {
                self.advance();
                let left = side == Keyword::Left;
                let operator = if self.eat_keyword(Keyword::Semi) {
                    if left {
                        JoinOperator::LeftSemi
                    } else {
                        JoinOperator::RightSemi
                    }
                } else if self.eat_keyword(Keyword::Anti) {
                    if left {
                        JoinOperator::LeftAnti
                    } else {
                        JoinOperator::RightAnti
                    }
                } else {
                    self.eat_keyword(Keyword::Outer);
                    if left {
                        JoinOperator::LeftOuter
                    } else {
                        JoinOperator::RightOuter
                    }
                };
                self.expect_keyword(Keyword::Join)?;
                return Ok(Some(operator));
            }
            _ => return Ok(None),
        };
        self.advance();
        self.expect_keyword(Keyword::Join)?;
        Ok(Some(operator))
    }

    fn parse_lateral_view(&mut self) -> Result<LateralView> {
        self.expect_keyword(Keyword::Lateral)?;
        self.expect_keyword(Keyword::View)?;
        let outer = self.eat_keyword(Keyword::Outer);
        let name = self.parse_object_name()?;
        let function = self.parse_function(name)?;
        let table_alias = self.parse_identifier()?;
        let column_aliases = if self.eat_keyword(Keyword::As) {
            self.parse_comma_separated(Self::parse_identifier)?
        } else {
            Vec::new()
        };
        Ok(LateralView {
            outer,
            function,
            table_alias,
            column_aliases,
        })
    }

    fn parse_table_factor(&mut self) -> Result<TableRef> {
        if self.check(&TokenKind::LeftParen) {
            if self.check_query_start() {
                self.advance();
                let subquery = self.parse_boxed_query()?;
                self.expect(&TokenKind::RightParen)?;
                let alias = self.parse_optional_table_alias()?;
                return Ok(TableRef::Derived { subquery, alias });
            }
            self.advance();
            let inner = self.nested(Self::parse_relation)?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(TableRef::Nested(Box::new(inner)));
        }

        let name = self.parse_table_name()?;
        if self.check(&TokenKind::LeftParen) {
            let properties = self.parse_property_list()?;
            let alias = self.parse_optional_table_alias()?;
            return Ok(TableRef::Function {
                name,
                properties,
                alias,
            });
        }
        let partitions = if self.check_keyword(Keyword::Partition)
            || (self.check_keyword(Keyword::Partitions) && self.check_nth(1, &TokenKind::LeftParen))
        {
            self.parse_partition_names()?
        } else {
            Vec::new()
        };
        let tablets = if self.check_word("TABLET") && self.check_nth(1, &TokenKind::LeftParen) {
            self.advance();
            self.parse_parenthesized(Self::parse_u64)?
        } else {
            Vec::new()
        };
        let alias = self.parse_optional_table_alias()?;
        let sample = if self.check_table_sample() {
            Some(self.parse_table_sample()?)
        } else {
            None
        };
        Ok(TableRef::Table {
            name,
            partitions,
            tablets,
            alias,
            sample,
        })
    }

    fn check_table_sample(&self) -> bool {
        self.check_word("TABLESAMPLE") && self.check_nth(1, &TokenKind::LeftParen)
    }

    /// `TABLESAMPLE (n PERCENT | n ROWS) [REPEATABLE seed]`
    fn parse_table_sample(&mut self) -> Result<TableSample> {
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let n = self.parse_u64()?;
        let size = if self.eat_word("PERCENT") {
            SampleSize::Percent(n)
        } else if self.eat_word("ROWS") {
            SampleSize::Rows(n)
        } else {
            return Err(self.expected(&["PERCENT", "ROWS"]));
        };
        self.expect(&TokenKind::RightParen)?;
        let seed = if self.eat_word("REPEATABLE") {
            Some(self.parse_u64()?)
        } else {
            None
        };
        Ok(TableSample { size, seed })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::ObjectName;
    use crate::config::ParserConfig;

    fn query(sql: &str) -> Query {
        let mut parser = Parser::new(sql, &ParserConfig::default()).unwrap();
        let query = parser.parse_query().unwrap();
        assert!(parser.at_eof(), "trailing input after {sql}");
        query
    }

    fn select(sql: &str) -> Select {
        query(sql).as_select().cloned().unwrap()
    }

    #[test]
    fn test_select_without_from() {
        let select = select("SELECT 1 WHERE TRUE");
        assert!(select.from.is_empty());
        assert!(select.selection.is_some());
    }

    #[test]
    fn test_aliases() {
        let select = select("SELECT a AS x, b y, c AS 'long name', d FROM t");
        let aliases: Vec<_> = select
            .items
            .iter()
            .map(|item| match item {
                SelectItem::Expr { alias, .. } => alias.as_ref().map(ToString::to_string),
                SelectItem::Wildcard { .. } => None,
            })
            .collect();
        assert_eq!(
            aliases,
            vec![
                Some(String::from("x")),
                Some(String::from("y")),
                Some(String::from("`long name`")),
                None
            ]
        );
    }

    #[test]
    fn test_wildcards() {
        let select = select("SELECT t.*, db.t.*, * EXCEPT (a, b) FROM t");
        assert_eq!(
            select.items[1],
            SelectItem::Wildcard {
                qualifier: Some(ObjectName::new(["db", "t"])),
                except: Vec::new(),
            }
        );
        assert!(matches!(&select.items[2], SelectItem::Wildcard { except, .. } if except.len() == 2));
    }

    #[test]
    fn test_star_except_select_is_a_set_operation() {
        let query = query("SELECT * FROM a EXCEPT (SELECT * FROM b)");
        assert!(matches!(
            query.body,
            SetExpr::SetOperation { op: SetOperator::Except, .. }
        ));
    }

    #[test]
    fn test_intersect_binds_tighter_than_union() {
        let query = query("SELECT 1 UNION ALL SELECT 2 INTERSECT SELECT 3");
        let SetExpr::SetOperation {
            op,
            quantifier,
            right,
            ..
        } = query.body
        else {
            panic!("expected set operation");
        };
        assert_eq!(op, SetOperator::Union);
        assert_eq!(quantifier, SetQuantifier::All);
        assert!(matches!(
            *right,
            SetExpr::SetOperation { op: SetOperator::Intersect, .. }
        ));
    }

    #[test]
    fn test_mysql_limit() {
        assert_eq!(
            query("SELECT 1 LIMIT 5, 10").limit,
            Some(Limit {
                count: 10,
                offset: Some(5)
            })
        );
        assert_eq!(
            query("SELECT 1 LIMIT 10 OFFSET 5").limit,
            Some(Limit {
                count: 10,
                offset: Some(5)
            })
        );
    }

    #[test]
    fn test_joins() {
        let select = select(
            "SELECT * FROM a LEFT SEMI JOIN [shuffle] b ON a.id = b.id RIGHT OUTER JOIN c USING (id)",
        );
        let TableRef::Join {
            left,
            operator,
            constraint,
            ..
        } = &select.from[0]
        else {
            panic!("expected join");
        };
        assert_eq!(*operator, JoinOperator::RightOuter);
        assert!(matches!(constraint, JoinConstraint::Using(cols) if cols.len() == 1));
        assert!(matches!(
            left.as_ref(),
            TableRef::Join { operator: JoinOperator::LeftSemi, hint: Some(_), .. }
        ));
    }

    #[test]
    fn test_lateral_view() {
        let select = select("SELECT e FROM t LATERAL VIEW OUTER explode(arr) tmp AS e");
        let TableRef::LateralView { view, .. } = &select.from[0] else {
            panic!("expected lateral view");
        };
        assert!(view.outer);
        assert_eq!(view.column_aliases, vec![Ident::new("e")]);
    }

    #[test]
    fn test_table_factors() {
        let select = select(
            "SELECT * FROM ctl.db.t PARTITION (p1, p2) AS x, (SELECT 1) d, s3('uri' = 's3://b/k') f, (a JOIN b)",
        );
        assert!(matches!(&select.from[0], TableRef::Table { partitions, alias: Some(_), .. } if partitions.len() == 2));
        assert!(matches!(&select.from[1], TableRef::Derived { alias: Some(_), .. }));
        assert!(matches!(&select.from[2], TableRef::Function { properties, .. } if properties.len() == 1));
        assert!(matches!(&select.from[3], TableRef::Nested(_)));
    }

    #[test]
    fn test_group_by_forms() {
        assert!(matches!(select("SELECT a FROM t GROUP BY ROLLUP (a, b)").group_by, Some(GroupBy::Rollup(_))));
        assert!(matches!(select("SELECT a FROM t GROUP BY CUBE (a)").group_by, Some(GroupBy::Cube(_))));
        assert_eq!(
            select("SELECT a FROM t GROUP BY GROUPING SETS ((a), ())").group_by,
            Some(GroupBy::GroupingSets(vec![vec![Expr::column("a")], vec![]]))
        );
    }

    #[test]
    fn test_with_and_order_by() {
        let query = query("WITH c (x) AS (SELECT 1) SELECT x FROM c ORDER BY x DESC NULLS LAST");
        assert_eq!(query.with.len(), 1);
        assert_eq!(query.with[0].columns, vec![Ident::new("x")]);
        assert_eq!(query.order_by[0].direction, Some(OrderDirection::Desc));
        assert_eq!(query.order_by[0].nulls, Some(NullOrdering::Last));
    }

    #[test]
    fn test_qualify() {
        let select = select("SELECT a FROM t QUALIFY row_number() OVER (ORDER BY a) = 1");
        assert!(select.qualify.is_some());
    }
}
