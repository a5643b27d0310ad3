//! Token cursor, shared helpers and statement dispatch.

use tracing::{debug, trace};

use super::SyntaxError;
use crate::ast::{Ident, ObjectName, Property, Query, Statement, Unsupported, UserIdentity};
use crate::classify::Category;
use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::lexer::{tokenize, Keyword, Span, Token, TokenKind};

/// Leading words of statements that are recognized but not modelled.
const UNSUPPORTED_LEADERS: &[&str] = &[
    "BACKUP",
    "CALL",
    "CLEAN",
    "COPY",
    "DEALLOCATE",
    "EXECUTE",
    "FLUSH",
    "INSTALL",
    "LOCK",
    "OPTIMIZE",
    "PAUSE",
    "PREPARE",
    "REPLACE",
    "REPLAY",
    "RESTORE",
    "RESUME",
    "START",
    "STOP",
    "UNINSTALL",
    "UNLOCK",
    "WARM",
];

/// A statement together with its category and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatement {
    pub statement: Statement,
    pub category: Category,
    /// Bytes from the first token to the last, without the `;`.
    pub span: Span,
}

/// SQL parser.
///
/// The input is tokenized up front; the grammar then walks the token
/// buffer with bounded lookahead.
pub struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
    config: ParserConfig,
    depth: usize,
    /// Placeholders seen so far in the current statement.
    placeholders: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser for the given input.
    ///
    /// # Errors
    ///
    /// Returns `Error::Lexical` if the input cannot be tokenized.
    pub fn new(input: &'a str, config: &ParserConfig) -> Result<Self> {
        let tokens = tokenize(input)?;
        trace!(tokens = tokens.len(), "tokenized input");
        Ok(Self {
            input,
            tokens,
            pos: 0,
            config: config.clone(),
            depth: 0,
            placeholders: 0,
        })
    }

    /// Parses every `;`-separated statement in the input.
    ///
    /// # Errors
    ///
    /// Returns the first syntax error; nothing is returned for the
    /// statements before it.
    pub fn parse_statements(&mut self) -> Result<Vec<ParsedStatement>> {
        let mut statements = Vec::new();
        loop {
            while self.eat(&TokenKind::Semicolon) {}
            if self.at_eof() {
                return Ok(statements);
            }
            let start = self.peek().span;
            self.placeholders = 0;
            let statement = self.parse_statement()?;
            if !self.at_eof() && !self.check(&TokenKind::Semicolon) {
                return Err(self.expected(&["`;`", "end of input"]));
            }
            let span = start.merge(self.previous_span());
            let category = statement.category();
            debug!(
                category = category.as_str(),
                start = span.start,
                end = span.end,
                "parsed statement"
            );
            statements.push(ParsedStatement {
                statement,
                category,
                span,
            });
        }
    }

    /// Parses exactly one statement; a trailing `;` is allowed.
    ///
    /// # Errors
    ///
    /// Fails on empty input, on a second statement, or on any syntax error.
    pub fn parse_single_statement(&mut self) -> Result<Statement> {
        let statement = self.parse_statement()?;
        self.eat(&TokenKind::Semicolon);
        if !self.at_eof() {
            return Err(self.expected(&["end of input"]));
        }
        Ok(statement)
    }

    /// Parses the statement at the cursor, dispatching on its leading
    /// keyword.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if no statement starts here or the chosen
    /// statement is malformed.
    pub fn parse_statement(&mut self) -> Result<Statement> {
        if self.check(&TokenKind::LeftParen) {
            return Ok(Statement::Query(Box::new(self.parse_query()?)));
        }
        let Some(keyword) = self.peek().keyword() else {
            if self.peek_is_unsupported_leader() {
                return self.capture_unsupported(self.pos, 2);
            }
            return Err(self.expected(&["statement"]));
        };
        match keyword {
            Keyword::Select | Keyword::With => {
                Ok(Statement::Query(Box::new(self.parse_query()?)))
            }
            Keyword::Insert => self.parse_insert(),
            Keyword::Update => self.parse_update(),
            Keyword::Delete => self.parse_delete(),
            Keyword::Load => self.parse_load(),
            Keyword::Export => self.parse_export(),
            Keyword::Truncate => self.parse_truncate(),
            Keyword::Create => self.parse_create(),
            Keyword::Alter => self.parse_alter(),
            Keyword::Drop => self.parse_drop(),
            Keyword::Show => self.parse_show(),
            Keyword::Describe | Keyword::Desc => self.parse_describe(),
            Keyword::Explain => self.parse_explain(),
            Keyword::Use => self.parse_use(),
            Keyword::Switch => {
                self.advance();
                Ok(Statement::SwitchCatalog(self.parse_identifier()?))
            }
            Keyword::Set => self.parse_set(),
            Keyword::Begin | Keyword::Commit | Keyword::Rollback => self.parse_transaction(),
            Keyword::Grant | Keyword::Revoke => self.parse_grant(),
            Keyword::Kill => self.parse_kill(),
            Keyword::Admin => self.parse_admin(),
            Keyword::Analyze => self.parse_analyze(),
            Keyword::Refresh => self.parse_refresh(),
            Keyword::Recover => self.parse_recover(),
            Keyword::Cancel => self.parse_cancel(),
            Keyword::Help => self.parse_help(),
            Keyword::Sync => {
                self.advance();
                Ok(Statement::Sync)
            }
            _ if self.peek_is_unsupported_leader() => self.capture_unsupported(self.pos, 2),
            _ => Err(self.expected(&["statement"])),
        }
    }

    fn peek_is_unsupported_leader(&self) -> bool {
        self.peek()
            .word()
            .is_some_and(|w| UNSUPPORTED_LEADERS.iter().any(|l| l.eq_ignore_ascii_case(w)))
    }

    /// Falls back to [`Self::capture_unsupported`] for a statement family
    /// whose object word is not one this parser models. The last of the
    /// `leading` words must still be a word; `DROP 42` or a bare `SHOW` is
    /// a syntax error, not an unsupported statement.
    pub(super) fn parse_unsupported(&mut self, start: usize, leading: usize) -> Result<Statement> {
        let last = self.pos.max(start + leading - 1);
        let token = &self.tokens[last.min(self.tokens.len() - 1)];
        if token.word().is_none() {
            return Err(SyntaxError::unexpected(&["object type"], token).into());
        }
        self.capture_unsupported(start, leading)
    }

    /// Captures the statement starting at token index `start` as
    /// [`Statement::Unsupported`], consuming up to the next top-level `;`.
    /// Up to `leading` words from the start are recorded as its keywords.
    pub(super) fn capture_unsupported(&mut self, start: usize, leading: usize) -> Result<Statement> {
        let keywords = self.leading_words(start, leading);
        if !self.config.capture_unsupported {
            return Err(SyntaxError::new(
                format!("unsupported statement: {}", keywords.join(" ")),
                &self.tokens[start],
            )
            .into());
        }
        let text = self.capture_to_end(start);
        debug!(keywords = %keywords.join(" "), "captured unsupported statement");
        Ok(Statement::Unsupported(Unsupported { keywords, text }))
    }

    /// Up to `n` uppercased words starting at token index `start`.
    pub(super) fn leading_words(&self, start: usize, n: usize) -> Vec<String> {
        self.tokens[start..]
            .iter()
            .take(n)
            .map_while(Token::word)
            .map(str::to_ascii_uppercase)
            .collect()
    }

    /// Consumes tokens up to the next top-level `;` or end of input and
    /// returns the source text from token index `start`.
    pub(super) fn capture_to_end(&mut self, start: usize) -> String {
        let mut nesting = 0usize;
        loop {
            match self.peek().kind {
                TokenKind::Eof => break,
                TokenKind::Semicolon if nesting == 0 => break,
                TokenKind::LeftParen | TokenKind::LeftBracket | TokenKind::LeftBrace => {
                    nesting += 1;
                }
                TokenKind::RightParen | TokenKind::RightBracket | TokenKind::RightBrace => {
                    nesting = nesting.saturating_sub(1);
                }
                _ => {}
            }
            self.advance();
        }

        let from = self.tokens[start].span.start;
        let to = self.previous_span().end.max(from);
        String::from(&self.input[from..to])
    }

    // Cursor

    pub(super) fn peek(&self) -> &Token<'a> {
        self.peek_nth(0)
    }

    /// The token `n` positions ahead; the final `Eof` repeats forever.
    pub(super) fn peek_nth(&self, n: usize) -> &Token<'a> {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    pub(super) fn advance(&mut self) -> Token<'a> {
        let token = self.peek().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub(super) const fn position(&self) -> usize {
        self.pos
    }

    pub(super) fn previous_span(&self) -> Span {
        self.tokens[self.pos.saturating_sub(1)].span
    }

    pub(super) fn at_eof(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    pub(super) fn check_nth(&self, n: usize, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek_nth(n).kind) == std::mem::discriminant(kind)
    }

    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek().keyword() == Some(keyword)
    }

    pub(super) fn check_nth_keyword(&self, n: usize, keyword: Keyword) -> bool {
        self.peek_nth(n).keyword() == Some(keyword)
    }

    /// Matches an unquoted word by spelling, keyword or not.
    pub(super) fn check_word(&self, word: &str) -> bool {
        self.check_nth_word(0, word)
    }

    pub(super) fn check_nth_word(&self, n: usize, word: &str) -> bool {
        self.peek_nth(n)
            .word()
            .is_some_and(|w| w.eq_ignore_ascii_case(word))
    }

    /// Returns true if the token `n` ahead can start a name.
    pub(super) fn check_nth_name(&self, n: usize) -> bool {
        matches!(
            self.peek_nth(n).kind,
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_) | TokenKind::Keyword(_)
        )
    }

    pub(super) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn eat_word(&mut self, word: &str) -> bool {
        if self.check_word(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn expect(&mut self, kind: &TokenKind) -> Result<Token<'a>> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.expected(&[format!("`{}`", kind.punctuation()).as_str()]))
        }
    }

    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<()> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.expected(&[keyword.as_str()]))
        }
    }

    pub(super) fn expect_word(&mut self, word: &str) -> Result<()> {
        if self.eat_word(word) {
            Ok(())
        } else {
            Err(self.expected(&[word]))
        }
    }

    /// A syntax error at the current token listing what was expected.
    pub(super) fn expected(&self, what: &[&str]) -> Error {
        SyntaxError::unexpected(what, self.peek()).into()
    }

    /// Runs `f` one nesting level deeper, failing once `max_depth` is hit.
    pub(super) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.deepen()?;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Runs a left-associative operator loop. Every node the loop builds
    /// takes a level with [`Self::deepen`] and keeps it until `f` returns,
    /// so `max_depth` bounds the height of flat chains like `a OR b OR c`
    /// as well as nesting.
    pub(super) fn chain<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let depth = self.depth;
        let result = f(self);
        self.depth = depth;
        result
    }

    /// Takes one nesting level, failing once `max_depth` is hit.
    pub(super) fn deepen(&mut self) -> Result<()> {
        if self.depth >= self.config.max_depth {
            let token = self.peek();
            return Err(Error::TooDeep {
                limit: self.config.max_depth,
                span: token.span,
                location: token.location,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) const fn pipes_as_concat(&self) -> bool {
        self.config.pipes_as_concat
    }

    pub(super) fn next_placeholder(&mut self) -> usize {
        self.placeholders += 1;
        self.placeholders
    }

    // Names

    /// Parses a name: a plain identifier, a non-reserved keyword or a
    /// backtick-quoted identifier.
    pub(super) fn parse_identifier(&mut self) -> Result<Ident> {
        let token = self.peek();
        let ident = match &token.kind {
            TokenKind::Identifier(name) => Ident {
                value: name.clone(),
                quoted: false,
            },
            TokenKind::QuotedIdentifier(name) => Ident::quoted(name.clone()),
            TokenKind::Keyword(keyword) if !keyword.is_reserved() => Ident {
                value: String::from(token.text),
                quoted: false,
            },
            TokenKind::Keyword(_) => {
                let mut err = SyntaxError::new(
                    format!(
                        "`{}` is a reserved keyword; quote it with backticks to use it as a name",
                        token.text
                    ),
                    token,
                );
                err.expected = vec![String::from("identifier")];
                return Err(err.into());
            }
            _ => return Err(self.expected(&["identifier"])),
        };
        self.advance();
        Ok(ident)
    }

    /// A part after a `.`: any word is accepted there.
    fn parse_name_part(&mut self) -> Result<Ident> {
        let token = self.peek();
        let ident = match &token.kind {
            TokenKind::Identifier(_) | TokenKind::Keyword(_) => Ident {
                value: String::from(token.text),
                quoted: false,
            },
            TokenKind::QuotedIdentifier(name) => Ident::quoted(name.clone()),
            _ => return Err(self.expected(&["identifier"])),
        };
        self.advance();
        Ok(ident)
    }

    /// Parses `a[.b[.c]]`. Stops before a `.` not followed by a name.
    pub(super) fn parse_object_name(&mut self) -> Result<ObjectName> {
        let mut parts = vec![self.parse_identifier()?];
        while self.check(&TokenKind::Dot) && self.check_nth_name(1) {
            self.advance();
            parts.push(self.parse_name_part()?);
        }
        Ok(ObjectName(parts))
    }

    /// Parses a table name, rejecting unquoted hyphenated names such as
    /// `my-table` with a quoting suggestion.
    pub(super) fn parse_table_name(&mut self) -> Result<ObjectName> {
        let start = self.pos;
        let name = self.parse_object_name()?;
        if self.check(&TokenKind::Minus) && self.previous_span().end == self.peek().span.start {
            let mut end = self.pos;
            while end + 1 < self.tokens.len()
                && self.tokens[end + 1].span.start == self.tokens[end].span.end
                && matches!(
                    self.tokens[end + 1].kind,
                    TokenKind::Identifier(_)
                        | TokenKind::Keyword(_)
                        | TokenKind::Integer(_)
                        | TokenKind::Minus
                )
            {
                end += 1;
            }
            if end > self.pos {
                let raw = &self.input[self.tokens[start].span.start..self.tokens[end].span.end];
                let err = SyntaxError::new(
                    format!("hyphenated name {raw} must be quoted: `{raw}`"),
                    &self.tokens[start],
                );
                return Err(err.into());
            }
        }
        Ok(name)
    }

    /// A name given either as an identifier or a string: roles, labels.
    pub(super) fn parse_name_or_string(&mut self) -> Result<String> {
        if let TokenKind::String(value) = &self.peek().kind {
            let value = value.clone();
            self.advance();
            return Ok(value);
        }
        Ok(self.parse_identifier()?.value)
    }

    /// `'name'@'host'`, `name@host` or a bare name.
    pub(super) fn parse_user_identity(&mut self) -> Result<UserIdentity> {
        let name = self.parse_name_or_string()?;
        let host = if let TokenKind::UserVariable(host) = &self.peek().kind {
            let host = host.clone();
            self.advance();
            Some(host)
        } else {
            None
        };
        Ok(UserIdentity { name, host })
    }

    // Lists and literals

    pub(super) fn parse_comma_separated<T>(
        &mut self,
        mut f: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut items = vec![f(self)?];
        while self.eat(&TokenKind::Comma) {
            items.push(f(self)?);
        }
        Ok(items)
    }

    /// `( item, ... )` with at least one item.
    pub(super) fn parse_parenthesized<T>(
        &mut self,
        f: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        self.expect(&TokenKind::LeftParen)?;
        let items = self.parse_comma_separated(f)?;
        self.expect(&TokenKind::RightParen)?;
        Ok(items)
    }

    /// `(a, b, c)`
    pub(super) fn parse_ident_list(&mut self) -> Result<Vec<Ident>> {
        self.parse_parenthesized(Self::parse_identifier)
    }

    /// An optional `(a, b)` column list.
    pub(super) fn parse_optional_ident_list(&mut self) -> Result<Vec<Ident>> {
        if self.check(&TokenKind::LeftParen) {
            self.parse_ident_list()
        } else {
            Ok(Vec::new())
        }
    }

    pub(super) fn parse_string(&mut self) -> Result<String> {
        if let TokenKind::String(value) = &self.peek().kind {
            let value = value.clone();
            self.advance();
            Ok(value)
        } else {
            Err(self.expected(&["string"]))
        }
    }

    pub(super) fn parse_optional_comment(&mut self) -> Result<Option<String>> {
        if self.eat_keyword(Keyword::Comment) {
            Ok(Some(self.parse_string()?))
        } else {
            Ok(None)
        }
    }

    pub(super) fn parse_u64(&mut self) -> Result<u64> {
        let token = self.peek();
        if let TokenKind::Integer(value) = token.kind {
            let value = u64::try_from(value)
                .map_err(|_| SyntaxError::new("integer out of range", token))?;
            self.advance();
            Ok(value)
        } else {
            Err(self.expected(&["integer"]))
        }
    }

    pub(super) fn parse_u32(&mut self) -> Result<u32> {
        let token = self.peek();
        if let TokenKind::Integer(value) = token.kind {
            let value = u32::try_from(value)
                .map_err(|_| SyntaxError::new("integer out of range", token))?;
            self.advance();
            Ok(value)
        } else {
            Err(self.expected(&["integer"]))
        }
    }

    /// `IF NOT EXISTS`
    pub(super) fn parse_if_not_exists(&mut self) -> Result<bool> {
        if self.eat_keyword(Keyword::If) {
            self.expect_keyword(Keyword::Not)?;
            self.expect_keyword(Keyword::Exists)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// `IF EXISTS`
    pub(super) fn parse_if_exists(&mut self) -> Result<bool> {
        if self.eat_keyword(Keyword::If) {
            self.expect_keyword(Keyword::Exists)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// `PARTITION p`, `PARTITION (p1, p2)` or `PARTITIONS (..)`; empty when
    /// absent.
    pub(super) fn parse_partition_names(&mut self) -> Result<Vec<Ident>> {
        if !self.eat_keyword(Keyword::Partition) && !self.eat_keyword(Keyword::Partitions) {
            return Ok(Vec::new());
        }
        if self.check(&TokenKind::LeftParen) {
            self.parse_ident_list()
        } else {
            Ok(vec![self.parse_identifier()?])
        }
    }

    /// `( 'key' = 'value', ... )`; may be empty.
    pub(super) fn parse_property_list(&mut self) -> Result<Vec<Property>> {
        self.expect(&TokenKind::LeftParen)?;
        if self.eat(&TokenKind::RightParen) {
            return Ok(Vec::new());
        }
        let properties = self.parse_comma_separated(Self::parse_property)?;
        self.expect(&TokenKind::RightParen)?;
        Ok(properties)
    }

    /// `PROPERTIES (...)`; empty when absent.
    pub(super) fn parse_optional_properties(&mut self) -> Result<Vec<Property>> {
        if self.eat_keyword(Keyword::Properties) {
            self.parse_property_list()
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_property(&mut self) -> Result<Property> {
        let key = self.parse_property_text()?;
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_property_text()?;
        Ok(Property { key, value })
    }

    /// Keys and values are usually strings; bare words, dotted words and
    /// numbers are taken as written.
    fn parse_property_text(&mut self) -> Result<String> {
        let token = self.peek();
        let text = match &token.kind {
            TokenKind::String(value) => value.clone(),
            TokenKind::Integer(_) | TokenKind::Decimal(_) | TokenKind::Float(_) => {
                String::from(token.text)
            }
            TokenKind::Identifier(_) | TokenKind::Keyword(_) => {
                let mut text = String::from(token.text);
                self.advance();
                while self.check(&TokenKind::Dot) && self.peek_nth(1).kind.is_word() {
                    self.advance();
                    text.push('.');
                    text.push_str(self.advance().text);
                }
                return Ok(text);
            }
            _ => return Err(self.expected(&["string"])),
        };
        self.advance();
        Ok(text)
    }

    /// True if a query starts at the cursor: `SELECT`, `WITH`, or `(`
    /// opening one.
    pub(super) fn check_query_start(&self) -> bool {
        let mut n = 0;
        while self.check_nth(n, &TokenKind::LeftParen) {
            n += 1;
        }
        self.check_nth_keyword(n, Keyword::Select) || self.check_nth_keyword(n, Keyword::With)
    }

    pub(super) fn parse_boxed_query(&mut self) -> Result<Box<Query>> {
        Ok(Box::new(self.parse_query()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sql: &str) -> Result<Vec<ParsedStatement>> {
        Parser::new(sql, &ParserConfig::default())?.parse_statements()
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse(" ;; -- nothing\n").unwrap().is_empty());
    }

    #[test]
    fn test_statement_spans() {
        let sql = "SELECT 1; SELECT 2 ;";
        let statements = parse(sql).unwrap();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].span.slice(sql), Some("SELECT 1"));
        assert_eq!(statements[1].span.slice(sql), Some("SELECT 2"));
    }

    #[test]
    fn test_missing_separator() {
        let err = parse("SELECT 1 SELECT 2").unwrap_err();
        let syntax = err.as_syntax().unwrap();
        assert_eq!(syntax.expected, vec!["`;`", "end of input"]);
        assert_eq!(err.column(), 10);
    }

    #[test]
    fn test_unknown_leader_is_an_error() {
        let err = parse("FROBNICATE t").unwrap_err();
        assert!(err.as_syntax().unwrap().message.contains("expected statement"));
    }

    #[test]
    fn test_unsupported_capture_balances_parens() {
        let sql = "CALL p('a;b', (1; 2)); SELECT 1";
        let err = parse(sql);
        // `;` inside parentheses does not end the statement.
        let statements = err.unwrap();
        assert_eq!(statements.len(), 2);
        let Statement::Unsupported(unsupported) = &statements[0].statement else {
            panic!("expected unsupported statement");
        };
        assert_eq!(unsupported.keywords, vec!["CALL", "P"]);
        assert_eq!(unsupported.text, "CALL p('a;b', (1; 2))");
    }

    #[test]
    fn test_unsupported_capture_can_be_disabled() {
        let config = ParserConfig::default().with_capture_unsupported(false);
        let err = Parser::new("LOCK TABLES t READ", &config)
            .unwrap()
            .parse_statements()
            .unwrap_err();
        assert_eq!(
            err.as_syntax().unwrap().message,
            "unsupported statement: LOCK TABLES"
        );
    }

    #[test]
    fn test_reserved_word_as_name() {
        let err = parse("SELECT a FROM select").unwrap_err();
        let syntax = err.as_syntax().unwrap();
        assert!(syntax.message.contains("reserved keyword"), "{}", syntax.message);
        assert_eq!(syntax.expected, vec!["identifier"]);
    }

    #[test]
    fn test_hyphenated_table_name() {
        let err = parse("SELECT * FROM my-table").unwrap_err();
        let syntax = err.as_syntax().unwrap();
        assert_eq!(syntax.message, "hyphenated name my-table must be quoted: `my-table`");
        assert_eq!(err.column(), 15);
        // With spaces it is arithmetic on an alias, which is fine in a select list.
        assert!(parse("SELECT a - b FROM t").is_ok());
    }

    #[test]
    fn test_depth_limit() {
        let config = ParserConfig::default().with_max_depth(8);
        let sql = format!("SELECT {}1{}", "(".repeat(20), ")".repeat(20));
        let err = Parser::new(&sql, &config)
            .unwrap()
            .parse_statements()
            .unwrap_err();
        assert!(matches!(err, Error::TooDeep { limit: 8, .. }));
    }
}
