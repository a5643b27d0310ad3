//! Expression grammar.
//!
//! One function per precedence level, loosest first. Each level parses
//! its operands with the next tighter level and loops over its own
//! operators, so binary operators associate to the left. Prefix operators
//! recurse into their own level.

use super::Parser;
use crate::ast::{
    BinaryOp, ConvertTarget, DataType, DatetimeKind, Expr, FrameBound, FrameUnits, FunctionArgs,
    FunctionCall, Ident, IntervalUnit, Literal, MapEntry, MatchOp, Niladic, ObjectName,
    PatternOp, PrimitiveType, UnaryOp, WhenClause, WindowFrame, WindowSpec,
};
use crate::error::Result;
use crate::lexer::{Keyword, TokenKind};

/// Reserved words that still name functions when a `(` follows.
const FUNCTION_KEYWORDS: &[Keyword] = &[
    Keyword::If,
    Keyword::Left,
    Keyword::Right,
    Keyword::Database,
    Keyword::Insert,
    Keyword::Values,
];

impl Parser<'_> {
    /// Parses an expression.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if no expression starts at the cursor, or
    /// `Error::TooDeep` past the configured nesting limit.
    pub fn parse_expr(&mut self) -> Result<Expr> {
        self.nested(Self::parse_or)
    }

    pub(super) fn parse_expr_list(&mut self) -> Result<Vec<Expr>> {
        self.parse_comma_separated(Self::parse_expr)
    }

    fn parse_or(&mut self) -> Result<Expr> {
        self.chain(|p| {
            let mut left = p.parse_xor()?;
            loop {
                let is_or = p.check_keyword(Keyword::Or)
                    || (p.check(&TokenKind::DoublePipe) && !p.pipes_as_concat());
                if !is_or {
                    return Ok(left);
                }
                p.advance();
                p.deepen()?;
                let right = p.parse_xor()?;
                left = Expr::binary(left, BinaryOp::Or, right);
            }
        })
    }

    fn parse_xor(&mut self) -> Result<Expr> {
        self.chain(|p| {
            let mut left = p.parse_and()?;
            while p.eat_keyword(Keyword::Xor) {
                p.deepen()?;
                let right = p.parse_and()?;
                left = Expr::binary(left, BinaryOp::Xor, right);
            }
            Ok(left)
        })
    }

    fn parse_and(&mut self) -> Result<Expr> {
        self.chain(|p| {
            let mut left = p.parse_not()?;
            while p.eat_keyword(Keyword::And) || p.eat(&TokenKind::DoubleAmpersand) {
                p.deepen()?;
                let right = p.parse_not()?;
                left = Expr::binary(left, BinaryOp::And, right);
            }
            Ok(left)
        })
    }

    fn parse_not(&mut self) -> Result<Expr> {
        if self.eat_keyword(Keyword::Not) || self.eat(&TokenKind::Bang) {
            let operand = self.nested(Self::parse_not)?;
            return Ok(Expr::unary(UnaryOp::Not, operand));
        }
        self.parse_predicate()
    }

    /// Comparisons and the `IS`, `LIKE`, `IN`, `BETWEEN` and `MATCH_*`
    /// predicates, all at one level.
    fn parse_predicate(&mut self) -> Result<Expr> {
        self.chain(|p| {
            let mut left = p.parse_bitor()?;
            loop {
                if let Some(op) = comparison_op(&p.peek().kind) {
                    p.advance();
                    p.deepen()?;
                    let right = p.parse_bitor()?;
                    left = Expr::binary(left, op, right);
                    continue;
                }
                if p.eat_keyword(Keyword::Is) {
                    p.deepen()?;
                    left = p.parse_is(left)?;
                    continue;
                }
                if let Some(op) = p.peek().keyword().and_then(match_op) {
                    p.advance();
                    p.deepen()?;
                    let pattern = p.parse_bitor()?;
                    left = Expr::Match {
                        expr: Box::new(left),
                        op,
                        pattern: Box::new(pattern),
                    };
                    continue;
                }

                let negated = p.check_keyword(Keyword::Not)
                    && p.peek_nth(1).keyword().is_some_and(is_negatable_predicate);
                if negated {
                    p.advance();
                }
                let Some(keyword) = p.peek().keyword().filter(|kw| is_negatable_predicate(*kw))
                else {
                    return Ok(left);
                };
                p.deepen()?;
                left = match keyword {
                    Keyword::Like => p.parse_pattern(left, PatternOp::Like, negated)?,
                    Keyword::In => p.parse_in(left, negated)?,
                    Keyword::Between => p.parse_between(left, negated)?,
                    _ => p.parse_pattern(left, PatternOp::Regexp, negated)?,
                };
            }
        })
    }

    fn parse_is(&mut self, expr: Expr) -> Result<Expr> {
        let negated = self.eat_keyword(Keyword::Not);
        let expr = Box::new(expr);
        if self.eat_keyword(Keyword::Null) {
            Ok(Expr::IsNull { expr, negated })
        } else if self.eat_keyword(Keyword::True) {
            Ok(Expr::IsBool {
                expr,
                value: true,
                negated,
            })
        } else if self.eat_keyword(Keyword::False) {
            Ok(Expr::IsBool {
                expr,
                value: false,
                negated,
            })
        } else {
            Err(self.expected(&["NULL", "TRUE", "FALSE"]))
        }
    }

    fn parse_pattern(&mut self, expr: Expr, op: PatternOp, negated: bool) -> Result<Expr> {
        self.advance();
        let pattern = self.parse_bitor()?;
        Ok(Expr::Pattern {
            expr: Box::new(expr),
            op,
            pattern: Box::new(pattern),
            negated,
        })
    }

    fn parse_in(&mut self, expr: Expr, negated: bool) -> Result<Expr> {
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let expr = Box::new(expr);
        let result = if self.check_keyword(Keyword::Select) || self.check_keyword(Keyword::With) {
            Expr::InSubquery {
                expr,
                subquery: self.parse_boxed_query()?,
                negated,
            }
        } else {
            Expr::InList {
                expr,
                list: self.parse_expr_list()?,
                negated,
            }
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(result)
    }

    fn parse_between(&mut self, expr: Expr, negated: bool) -> Result<Expr> {
        self.advance();
        let low = self.parse_bitor()?;
        self.expect_keyword(Keyword::And)?;
        let high = self.parse_bitor()?;
        Ok(Expr::Between {
            expr: Box::new(expr),
            low: Box::new(low),
            high: Box::new(high),
            negated,
        })
    }

    fn parse_bitor(&mut self) -> Result<Expr> {
        self.chain(|p| {
            let mut left = p.parse_bitand()?;
            while p.eat(&TokenKind::Pipe) {
                p.deepen()?;
                let right = p.parse_bitand()?;
                left = Expr::binary(left, BinaryOp::BitOr, right);
            }
            Ok(left)
        })
    }

    fn parse_bitand(&mut self) -> Result<Expr> {
        self.chain(|p| {
            let mut left = p.parse_additive()?;
            while p.eat(&TokenKind::Ampersand) {
                p.deepen()?;
                let right = p.parse_additive()?;
                left = Expr::binary(left, BinaryOp::BitAnd, right);
            }
            Ok(left)
        })
    }

    fn parse_additive(&mut self) -> Result<Expr> {
        self.chain(|p| {
            let mut left = p.parse_multiplicative()?;
            loop {
                let op = match p.peek().kind {
                    TokenKind::Plus => BinaryOp::Plus,
                    TokenKind::Minus => BinaryOp::Minus,
                    TokenKind::DoublePipe if p.pipes_as_concat() => BinaryOp::Concat,
                    _ => return Ok(left),
                };
                p.advance();
                p.deepen()?;
                let right = p.parse_multiplicative()?;
                left = Expr::binary(left, op, right);
            }
        })
    }

    fn parse_multiplicative(&mut self) -> Result<Expr> {
        self.chain(|p| {
            let mut left = p.parse_bitxor()?;
            loop {
                let op = match p.peek().kind {
                    TokenKind::Star => BinaryOp::Multiply,
                    TokenKind::Slash => BinaryOp::Divide,
                    TokenKind::Percent | TokenKind::Keyword(Keyword::Mod) => BinaryOp::Modulo,
                    TokenKind::Keyword(Keyword::Div) => BinaryOp::IntegerDivide,
                    _ => return Ok(left),
                };
                p.advance();
                p.deepen()?;
                let right = p.parse_bitxor()?;
                left = Expr::binary(left, op, right);
            }
        })
    }

    fn parse_bitxor(&mut self) -> Result<Expr> {
        self.chain(|p| {
            let mut left = p.parse_unary()?;
            while p.eat(&TokenKind::Caret) {
                p.deepen()?;
                let right = p.parse_unary()?;
                left = Expr::binary(left, BinaryOp::BitXor, right);
            }
            Ok(left)
        })
    }

    pub(super) fn parse_unary(&mut self) -> Result<Expr> {
        let op = match self.peek().kind {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Minus,
            TokenKind::Tilde => UnaryOp::BitNot,
            TokenKind::Bang | TokenKind::Keyword(Keyword::Not) => UnaryOp::Not,
            _ => return self.parse_postfix(),
        };
        self.advance();
        let operand = self.nested(Self::parse_unary)?;
        Ok(Expr::unary(op, operand))
    }

    /// `e[i]`, `e[lo:hi]`, `e.field` and `e COLLATE name` chains.
    fn parse_postfix(&mut self) -> Result<Expr> {
        self.chain(|p| {
            let mut expr = p.parse_primary()?;
            loop {
                if p.eat(&TokenKind::LeftBracket) {
                    p.deepen()?;
                    let lower = if p.check(&TokenKind::Colon) {
                        None
                    } else {
                        Some(Box::new(p.parse_expr()?))
                    };
                    expr = if p.eat(&TokenKind::Colon) {
                        let upper = if p.check(&TokenKind::RightBracket) {
                            None
                        } else {
                            Some(Box::new(p.parse_expr()?))
                        };
                        Expr::Slice {
                            expr: Box::new(expr),
                            lower,
                            upper,
                        }
                    } else {
                        match lower {
                            Some(index) => Expr::Index {
                                expr: Box::new(expr),
                                index,
                            },
                            None => return Err(p.expected(&["expression", "`:`"])),
                        }
                    };
                    p.expect(&TokenKind::RightBracket)?;
                } else if p.check(&TokenKind::Dot) && p.check_nth_name(1) {
                    p.advance();
                    p.deepen()?;
                    let field = p.parse_identifier_or_word()?;
                    expr = Expr::Field {
                        expr: Box::new(expr),
                        field,
                    };
                } else if p.eat_keyword(Keyword::Collate) {
                    p.deepen()?;
                    let collation = if let TokenKind::String(name) = &p.peek().kind {
                        let collation = Ident::new(name.clone());
                        p.advance();
                        collation
                    } else {
                        p.parse_identifier_or_word()?
                    };
                    expr = Expr::Collate {
                        expr: Box::new(expr),
                        collation,
                    };
                } else {
                    return Ok(expr);
                }
            }
        })
    }

    /// Any word taken as written, or a quoted identifier.
    pub(super) fn parse_identifier_or_word(&mut self) -> Result<Ident> {
        if let Some(word) = self.peek().word() {
            let ident = Ident {
                value: String::from(word),
                quoted: false,
            };
            self.advance();
            return Ok(ident);
        }
        self.parse_identifier()
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let token = self.peek().clone();
        let literal = match &token.kind {
            TokenKind::Integer(v) => Some(Literal::Integer(*v)),
            TokenKind::Decimal(v) => Some(Literal::Decimal(v.clone())),
            TokenKind::Float(v) => Some(Literal::Float(v.clone())),
            TokenKind::String(v) => Some(Literal::String(v.clone())),
            TokenKind::HexString(v) => Some(Literal::HexString(v.clone())),
            TokenKind::Keyword(Keyword::Null) => Some(Literal::Null),
            TokenKind::Keyword(Keyword::True) => Some(Literal::Boolean(true)),
            TokenKind::Keyword(Keyword::False) => Some(Literal::Boolean(false)),
            _ => None,
        };
        if let Some(literal) = literal {
            self.advance();
            return Ok(Expr::Literal(literal));
        }

        match &token.kind {
            TokenKind::Placeholder => {
                self.advance();
                Ok(Expr::Placeholder(self.next_placeholder()))
            }
            TokenKind::UserVariable(name) | TokenKind::SystemVariable(name) => {
                self.advance();
                Ok(Expr::Variable {
                    system: matches!(token.kind, TokenKind::SystemVariable(_)),
                    name: name.clone(),
                })
            }
            TokenKind::LeftParen => self.parse_paren_expr(),
            TokenKind::LeftBracket => {
                self.advance();
                let items = if self.check(&TokenKind::RightBracket) {
                    Vec::new()
                } else {
                    self.parse_expr_list()?
                };
                self.expect(&TokenKind::RightBracket)?;
                Ok(Expr::Array(items))
            }
            TokenKind::LeftBrace => {
                self.advance();
                let entries = if self.check(&TokenKind::RightBrace) {
                    Vec::new()
                } else {
                    self.parse_comma_separated(|p| {
                        let key = p.parse_expr()?;
                        p.expect(&TokenKind::Colon)?;
                        let value = p.parse_expr()?;
                        Ok(MapEntry { key, value })
                    })?
                };
                self.expect(&TokenKind::RightBrace)?;
                Ok(Expr::Map(entries))
            }
            TokenKind::Keyword(Keyword::Case) => self.parse_case(),
            TokenKind::Keyword(Keyword::Cast) => self.parse_cast(),
            TokenKind::Keyword(Keyword::Convert) => self.parse_convert(),
            TokenKind::Keyword(Keyword::Extract) => self.parse_extract(),
            TokenKind::Keyword(Keyword::Exists) => {
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let query = self.parse_boxed_query()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(Expr::Exists(query))
            }
            TokenKind::Keyword(Keyword::Interval) => {
                self.advance();
                let value = self.nested(Self::parse_additive)?;
                let unit = self.parse_interval_unit()?;
                Ok(Expr::Interval {
                    value: Box::new(value),
                    unit,
                })
            }
            TokenKind::Keyword(kw)
                if niladic(*kw).is_some() && !self.check_nth(1, &TokenKind::LeftParen) =>
            {
                let niladic = niladic(*kw).ok_or_else(|| self.expected(&["expression"]))?;
                self.advance();
                Ok(Expr::Niladic(niladic))
            }
            TokenKind::Keyword(kw)
                if FUNCTION_KEYWORDS.contains(kw) && self.check_nth(1, &TokenKind::LeftParen) =>
            {
                self.advance();
                let name = ObjectName(vec![Ident {
                    value: String::from(token.text),
                    quoted: false,
                }]);
                self.parse_function_call(name)
            }
            TokenKind::Identifier(_) if matches!(self.peek_nth(1).kind, TokenKind::String(_)) => {
                match typed_literal_type(token.text) {
                    Some(data_type) => {
                        self.advance();
                        let value = self.parse_string()?;
                        Ok(Expr::TypedString { data_type, value })
                    }
                    None => self.parse_name_expr(),
                }
            }
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_) => self.parse_name_expr(),
            TokenKind::Keyword(kw) if !kw.is_reserved() => self.parse_name_expr(),
            _ => Err(self.expected(&["expression"])),
        }
    }

    /// A column path, a function call or a single-parameter lambda.
    fn parse_name_expr(&mut self) -> Result<Expr> {
        if self.check_nth(1, &TokenKind::Arrow) {
            let param = self.parse_identifier()?;
            self.advance();
            let body = self.parse_expr()?;
            return Ok(Expr::Lambda {
                params: vec![param],
                body: Box::new(body),
            });
        }
        let name = self.parse_object_name()?;
        if self.check(&TokenKind::LeftParen) {
            return self.parse_function_call(name);
        }
        Ok(Expr::Column(name))
    }

    /// `(e)`, `(a, b)`, `(SELECT ...)` or `(x, y) -> e`.
    fn parse_paren_expr(&mut self) -> Result<Expr> {
        if self.check_lambda_params() {
            let params = self.parse_ident_list()?;
            self.expect(&TokenKind::Arrow)?;
            let body = self.parse_expr()?;
            return Ok(Expr::Lambda {
                params,
                body: Box::new(body),
            });
        }
        self.expect(&TokenKind::LeftParen)?;
        if self.check_keyword(Keyword::Select) || self.check_keyword(Keyword::With) {
            let query = self.parse_boxed_query()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(Expr::Subquery(query));
        }
        let first = self.parse_expr()?;
        if self.eat(&TokenKind::RightParen) {
            return Ok(Expr::Nested(Box::new(first)));
        }
        let mut items = vec![first];
        while self.eat(&TokenKind::Comma) {
            items.push(self.parse_expr()?);
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::Row(items))
    }

    /// Looks ahead for `( name, ... ) ->`.
    fn check_lambda_params(&self) -> bool {
        let mut n = 1;
        loop {
            if !self.check_nth_name(n) {
                return false;
            }
            n += 1;
            if self.check_nth(n, &TokenKind::Comma) {
                n += 1;
                continue;
            }
            return self.check_nth(n, &TokenKind::RightParen)
                && self.check_nth(n + 1, &TokenKind::Arrow);
        }
    }

    fn parse_case(&mut self) -> Result<Expr> {
        self.expect_keyword(Keyword::Case)?;
        let operand = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        let mut branches = Vec::new();
        while self.eat_keyword(Keyword::When) {
            let condition = self.parse_expr()?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.parse_expr()?;
            branches.push(WhenClause { condition, result });
        }
        if branches.is_empty() {
            return Err(self.expected(&["WHEN"]));
        }
        let else_result = if self.eat_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::End)?;
        Ok(Expr::Case {
            operand,
            branches,
            else_result,
        })
    }

    fn parse_cast(&mut self) -> Result<Expr> {
        self.expect_keyword(Keyword::Cast)?;
        self.expect(&TokenKind::LeftParen)?;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::As)?;
        let data_type = self.parse_data_type()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::Cast {
            expr: Box::new(expr),
            data_type,
        })
    }

    fn parse_convert(&mut self) -> Result<Expr> {
        self.expect_keyword(Keyword::Convert)?;
        self.expect(&TokenKind::LeftParen)?;
        let expr = Box::new(self.parse_expr()?);
        let target = if self.eat_keyword(Keyword::Using) {
            ConvertTarget::Charset(self.parse_identifier()?)
        } else {
            self.expect(&TokenKind::Comma)?;
            ConvertTarget::Type(self.parse_data_type()?)
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::Convert { expr, target })
    }

    fn parse_extract(&mut self) -> Result<Expr> {
        self.expect_keyword(Keyword::Extract)?;
        self.expect(&TokenKind::LeftParen)?;
        let unit = self.parse_interval_unit()?;
        self.expect_keyword(Keyword::From)?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::Extract {
            unit,
            expr: Box::new(expr),
        })
    }

    pub(super) fn parse_interval_unit(&mut self) -> Result<IntervalUnit> {
        match self.peek().word().and_then(IntervalUnit::from_name) {
            Some(unit) => {
                self.advance();
                Ok(unit)
            }
            None => Err(self.expected(&["interval unit"])),
        }
    }

    /// Parses the argument list and optional `OVER` clause of a call to
    /// `name`, starting at the `(`.
    pub(super) fn parse_function_call(&mut self, name: ObjectName) -> Result<Expr> {
        Ok(Expr::Function(self.parse_function(name)?))
    }

    pub(super) fn parse_function(&mut self, name: ObjectName) -> Result<FunctionCall> {
        self.expect(&TokenKind::LeftParen)?;
        let mut call = FunctionCall {
            name,
            distinct: false,
            args: FunctionArgs::List(Vec::new()),
            order_by: Vec::new(),
            over: None,
        };
        if self.check(&TokenKind::Star) && self.check_nth(1, &TokenKind::RightParen) {
            self.advance();
            call.args = FunctionArgs::Wildcard;
        } else if !self.check(&TokenKind::RightParen) {
            call.distinct = self.eat_keyword(Keyword::Distinct);
            if !call.distinct {
                self.eat_keyword(Keyword::All);
            }
            call.args = FunctionArgs::List(self.parse_expr_list()?);
            if self.eat_keyword(Keyword::Order) {
                self.expect_keyword(Keyword::By)?;
                call.order_by = self.parse_order_by_list()?;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        if self.eat_keyword(Keyword::Over) {
            self.expect(&TokenKind::LeftParen)?;
            call.over = Some(self.parse_window_spec()?);
            self.expect(&TokenKind::RightParen)?;
        }
        Ok(call)
    }

    fn parse_window_spec(&mut self) -> Result<WindowSpec> {
        let mut spec = WindowSpec::default();
        if self.eat_keyword(Keyword::Partition) {
            self.expect_keyword(Keyword::By)?;
            spec.partition_by = self.parse_expr_list()?;
        }
        if self.eat_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            spec.order_by = self.parse_order_by_list()?;
        }
        let units = if self.eat_keyword(Keyword::Rows) {
            Some(FrameUnits::Rows)
        } else if self.eat_keyword(Keyword::Range) {
            Some(FrameUnits::Range)
        } else {
            None
        };
        if let Some(units) = units {
            spec.frame = Some(if self.eat_keyword(Keyword::Between) {
                let start = self.parse_frame_bound()?;
                self.expect_keyword(Keyword::And)?;
                let end = self.parse_frame_bound()?;
                WindowFrame {
                    units,
                    start,
                    end: Some(end),
                }
            } else {
                WindowFrame {
                    units,
                    start: self.parse_frame_bound()?,
                    end: None,
                }
            });
        }
        Ok(spec)
    }

    fn parse_frame_bound(&mut self) -> Result<FrameBound> {
        if self.eat_keyword(Keyword::Unbounded) {
            if self.eat_keyword(Keyword::Preceding) {
                return Ok(FrameBound::UnboundedPreceding);
            }
            self.expect_keyword(Keyword::Following)?;
            return Ok(FrameBound::UnboundedFollowing);
        }
        if self.eat_keyword(Keyword::Current) {
            self.expect_keyword(Keyword::Row)?;
            return Ok(FrameBound::CurrentRow);
        }
        if !matches!(self.peek().kind, TokenKind::Integer(_)) {
            return Err(self.expected(&["UNBOUNDED", "CURRENT ROW", "integer"]));
        }
        let n = self.parse_u64()?;
        if self.eat_keyword(Keyword::Preceding) {
            return Ok(FrameBound::Preceding(n));
        }
        self.expect_keyword(Keyword::Following)?;
        Ok(FrameBound::Following(n))
    }
}

fn comparison_op(kind: &TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Eq => BinaryOp::Eq,
        TokenKind::NullSafeEq => BinaryOp::NullSafeEq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        _ => return None,
    };
    Some(op)
}

/// Predicates that take a `NOT` before their keyword.
const fn is_negatable_predicate(keyword: Keyword) -> bool {
    matches!(
        keyword,
        Keyword::Like | Keyword::Regexp | Keyword::Rlike | Keyword::In | Keyword::Between
    )
}

const fn match_op(keyword: Keyword) -> Option<MatchOp> {
    match keyword {
        Keyword::MatchAny => Some(MatchOp::Any),
        Keyword::MatchAll => Some(MatchOp::All),
        Keyword::MatchPhrase => Some(MatchOp::Phrase),
        Keyword::MatchPhrasePrefix => Some(MatchOp::PhrasePrefix),
        Keyword::MatchRegexp => Some(MatchOp::Regexp),
        _ => None,
    }
}

const fn niladic(keyword: Keyword) -> Option<Niladic> {
    match keyword {
        Keyword::CurrentDate => Some(Niladic::CurrentDate),
        Keyword::CurrentTime => Some(Niladic::CurrentTime),
        Keyword::CurrentTimestamp => Some(Niladic::CurrentTimestamp),
        Keyword::CurrentUser => Some(Niladic::CurrentUser),
        Keyword::LocalTime => Some(Niladic::LocalTime),
        Keyword::LocalTimestamp => Some(Niladic::LocalTimestamp),
        _ => None,
    }
}

/// Type of a `DATE '...'` style literal.
fn typed_literal_type(word: &str) -> Option<DataType> {
    if let Some(kind) = DatetimeKind::from_name(word) {
        return Some(DataType::Datetime {
            kind,
            precision: None,
        });
    }
    match PrimitiveType::from_name(word)? {
        p @ (PrimitiveType::Date | PrimitiveType::DateV2) => Some(DataType::Primitive(p)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::ParserConfig;
    use crate::error::Error;

    fn expr(sql: &str) -> Expr {
        expr_with(sql, &ParserConfig::default())
    }

    fn expr_with(sql: &str, config: &ParserConfig) -> Expr {
        let mut parser = Parser::new(sql, config).unwrap();
        let expr = parser.parse_expr().unwrap();
        assert!(parser.at_eof(), "trailing input after {sql}");
        expr
    }

    fn int(v: i128) -> Expr {
        Expr::literal(Literal::Integer(v))
    }

    #[test]
    fn test_multiplicative_binds_tighter() {
        assert_eq!(
            expr("1 + 2 * 3"),
            Expr::binary(int(1), BinaryOp::Plus, Expr::binary(int(2), BinaryOp::Multiply, int(3)))
        );
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        assert_eq!(
            expr("a - b - c"),
            Expr::binary(
                Expr::binary(Expr::column("a"), BinaryOp::Minus, Expr::column("b")),
                BinaryOp::Minus,
                Expr::column("c")
            )
        );
    }

    #[test]
    fn test_not_binds_looser_than_comparison() {
        assert_eq!(
            expr("NOT a = 1"),
            Expr::unary(
                UnaryOp::Not,
                Expr::binary(Expr::column("a"), BinaryOp::Eq, int(1))
            )
        );
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let Expr::Binary { op, right, .. } = expr("a OR b AND c") else {
            panic!("expected binary");
        };
        assert_eq!(op, BinaryOp::Or);
        assert!(matches!(*right, Expr::Binary { op: BinaryOp::And, .. }));
    }

    #[test]
    fn test_double_pipe_modes() {
        assert!(matches!(expr("a || b"), Expr::Binary { op: BinaryOp::Or, .. }));
        let config = ParserConfig::default().with_pipes_as_concat(true);
        // Concatenation sits at the additive level.
        let Expr::Binary { op, left, .. } = expr_with("a || b = c", &config) else {
            panic!("expected binary");
        };
        assert_eq!(op, BinaryOp::Eq);
        assert!(matches!(*left, Expr::Binary { op: BinaryOp::Concat, .. }));
    }

    #[test]
    fn test_predicates() {
        assert!(matches!(expr("a IS NOT NULL"), Expr::IsNull { negated: true, .. }));
        assert!(matches!(expr("a IS FALSE"), Expr::IsBool { value: false, negated: false, .. }));
        assert!(matches!(
            expr("a NOT LIKE 'x%'"),
            Expr::Pattern { op: PatternOp::Like, negated: true, .. }
        ));
        assert!(matches!(expr("a RLIKE '^x'"), Expr::Pattern { op: PatternOp::Regexp, .. }));
        assert!(matches!(expr("a NOT IN (1, 2)"), Expr::InList { negated: true, .. }));
        assert!(matches!(expr("a IN (SELECT b FROM t)"), Expr::InSubquery { .. }));
        assert!(matches!(expr("a BETWEEN 1 AND 2"), Expr::Between { negated: false, .. }));
        assert!(matches!(expr("body MATCH_PHRASE 'x y'"), Expr::Match { op: MatchOp::Phrase, .. }));
    }

    #[test]
    fn test_between_bound_stops_at_and() {
        let Expr::Binary { op, left, .. } = expr("a BETWEEN 1 AND 2 AND b") else {
            panic!("expected binary");
        };
        assert_eq!(op, BinaryOp::And);
        assert!(matches!(*left, Expr::Between { .. }));
    }

    #[test]
    fn test_unary_minus_is_right_recursive() {
        assert_eq!(
            expr("- -1"),
            Expr::unary(UnaryOp::Minus, Expr::unary(UnaryOp::Minus, int(1)))
        );
    }

    #[test]
    fn test_element_access_chain() {
        let e = expr("__ext['a']['b']");
        let Expr::Index { expr: inner, index } = e else {
            panic!("expected index");
        };
        assert_eq!(*index, Expr::literal(Literal::String(String::from("b"))));
        assert!(matches!(*inner, Expr::Index { .. }));
        assert!(matches!(expr("arr[1:3]"), Expr::Slice { .. }));
        assert!(matches!(expr("arr[:3]"), Expr::Slice { lower: None, .. }));
    }

    #[test]
    fn test_function_calls() {
        let Expr::Function(call) = expr("count(DISTINCT a, b)") else {
            panic!("expected function");
        };
        assert!(call.distinct);
        assert_eq!(call.arg_exprs().len(), 2);

        let Expr::Function(call) = expr("db.my_udf (x)") else {
            panic!("expected function");
        };
        assert_eq!(call.name.to_string(), "db.my_udf");

        assert!(matches!(expr("count(*)"), Expr::Function(FunctionCall { args: FunctionArgs::Wildcard, .. })));
        assert!(matches!(expr("if(a, 1, 2)"), Expr::Function(_)));
        assert!(matches!(expr("date(ts)"), Expr::Function(_)));
    }

    #[test]
    fn test_window_function() {
        let Expr::Function(call) = expr(
            "sum(x) OVER (PARTITION BY a ORDER BY b DESC ROWS BETWEEN 2 PRECEDING AND CURRENT ROW)",
        ) else {
            panic!("expected function");
        };
        let over = call.over.unwrap();
        assert_eq!(over.partition_by, vec![Expr::column("a")]);
        assert_eq!(
            over.frame,
            Some(WindowFrame {
                units: FrameUnits::Rows,
                start: FrameBound::Preceding(2),
                end: Some(FrameBound::CurrentRow),
            })
        );
    }

    #[test]
    fn test_primaries() {
        assert!(matches!(expr("CAST(a AS BIGINT)"), Expr::Cast { .. }));
        assert!(matches!(
            expr("CONVERT(a USING utf8)"),
            Expr::Convert { target: ConvertTarget::Charset(_), .. }
        ));
        assert!(matches!(expr("EXTRACT(YEAR FROM ts)"), Expr::Extract { unit: IntervalUnit::Year, .. }));
        assert!(matches!(expr("INTERVAL 1 DAY"), Expr::Interval { unit: IntervalUnit::Day, .. }));
        assert!(matches!(expr("DATE '2024-01-01'"), Expr::TypedString { .. }));
        assert!(matches!(expr("CURRENT_TIMESTAMP"), Expr::Niladic(Niladic::CurrentTimestamp)));
        assert!(matches!(expr("@@session.sql_mode"), Expr::Variable { system: true, .. }));
        assert!(matches!(expr("[1, 2]"), Expr::Array(items) if items.len() == 2));
        assert!(matches!(expr("{'a': 1}"), Expr::Map(entries) if entries.len() == 1));
        assert!(matches!(expr("(1, 2)"), Expr::Row(_)));
        assert!(matches!(expr("(a)"), Expr::Nested(_)));
        assert!(matches!(expr("EXISTS (SELECT 1)"), Expr::Exists(_)));
        assert!(matches!(
            expr("CASE WHEN a THEN 1 ELSE 2 END"),
            Expr::Case { operand: None, .. }
        ));
    }

    #[test]
    fn test_lambdas() {
        let Expr::Function(call) = expr("array_map(x -> x + 1, arr)") else {
            panic!("expected function");
        };
        assert!(matches!(&call.arg_exprs()[0], Expr::Lambda { params, .. } if params.len() == 1));
        assert!(matches!(expr("(x, y) -> x + y"), Expr::Lambda { params, .. } if params.len() == 2));
    }

    #[test]
    fn test_placeholders_are_numbered() {
        let Expr::Binary { left, right, .. } = expr("? + ?") else {
            panic!("expected binary");
        };
        assert_eq!(*left, Expr::Placeholder(1));
        assert_eq!(*right, Expr::Placeholder(2));
    }

    #[test]
    fn test_case_requires_when() {
        let err = Parser::new("CASE a END", &ParserConfig::default())
            .unwrap()
            .parse_expr()
            .unwrap_err();
        assert!(matches!(err, Error::Syntax(_)));
    }
}
