//! SQL tokenizer implementation.

use super::{Keyword, LexError, LexErrorKind, Location, Span, Token, TokenKind};

/// A lexer that tokenizes SQL input on demand.
///
/// The lexer is also an iterator over tokens that stops before the end of
/// input marker and fuses after the first error.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// 1-based line/column of `pos`.
    line: usize,
    column: usize,
    /// Location of `start`.
    start_location: Location,
    /// Whether the previous token can be followed by a `.member` access.
    after_name: bool,
    /// Inside `/*+ ... */`, where `*/` is a token rather than a comment end.
    in_hint: bool,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            line: 1,
            column: 1,
            start_location: Location::new(1, 1),
            after_name: false,
            in_hint: false,
            finished: false,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            self.advance_while(char::is_whitespace);

            match (self.peek(), self.peek_next()) {
                (Some('-'), Some('-')) | (Some('#'), _) => {
                    self.advance_while(|c| c != '\n');
                }
                (Some('/'), Some('*')) if !self.input[self.pos..].starts_with("/*+") => {
                    self.mark_start();
                    self.advance();
                    self.advance();
                    loop {
                        match self.advance() {
                            Some('*') if self.peek() == Some('/') => {
                                self.advance();
                                break;
                            }
                            Some(_) => {}
                            None => return Err(self.error(LexErrorKind::UnterminatedComment)),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn mark_start(&mut self) {
        self.start = self.pos;
        self.start_location = Location::new(self.line, self.column);
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token covering the current lexeme.
    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(
            kind,
            &self.input[self.start..self.pos],
            self.make_span(),
            self.start_location,
        )
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.make_span(), self.start_location)
    }

    /// Returns the next token, or `Eof` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns a `LexError` for a malformed token.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_whitespace_and_comments()?;
        self.mark_start();

        let Some(c) = self.peek() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        let token = match c {
            'x' | 'X' if self.peek_next() == Some('\'') => self.scan_hex_string()?,
            c if is_identifier_start(c) => self.scan_word(),
            '`' => self.scan_quoted_identifier()?,
            '\'' | '"' => self.scan_string(c)?,
            '0'..='9' => self.scan_number()?,
            '.' if !self.after_name && self.peek_next().is_some_and(|n| n.is_ascii_digit()) => {
                self.scan_number()?
            }
            '@' => self.scan_variable()?,
            _ => self.scan_operator(c)?,
        };

        self.after_name = matches!(
            token.kind,
            TokenKind::Identifier(_)
                | TokenKind::QuotedIdentifier(_)
                | TokenKind::RightParen
                | TokenKind::RightBracket
        );
        Ok(token)
    }

    /// Scans an identifier or keyword.
    fn scan_word(&mut self) -> Token<'a> {
        self.advance_while(is_identifier_part);
        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(String::from(text))),
        }
    }

    /// Scans a backtick-quoted identifier; a doubled backtick is a literal one.
    fn scan_quoted_identifier(&mut self) -> Result<Token<'a>, LexError> {
        self.advance();
        let mut value = String::new();
        loop {
            match self.advance() {
                Some('`') if self.peek() == Some('`') => {
                    self.advance();
                    value.push('`');
                }
                Some('`') => break,
                Some(c) => value.push(c),
                None => return Err(self.error(LexErrorKind::UnterminatedIdentifier)),
            }
        }
        Ok(self.make_token(TokenKind::QuotedIdentifier(value)))
    }

    /// Scans a single- or double-quoted string with MySQL escapes.
    fn scan_string(&mut self, quote: char) -> Result<Token<'a>, LexError> {
        let value = self.read_quoted(quote)?;
        Ok(self.make_token(TokenKind::String(value)))
    }

    /// Reads a quoted string starting at the opening quote and returns its
    /// unescaped contents.
    fn read_quoted(&mut self, quote: char) -> Result<String, LexError> {
        self.advance();
        let mut value = String::new();
        loop {
            match self.advance() {
                Some('\\') => match self.advance() {
                    Some(escaped) => push_escape(&mut value, escaped),
                    None => return Err(self.error(LexErrorKind::InvalidEscape)),
                },
                Some(c) if c == quote => {
                    if self.peek() == Some(quote) {
                        self.advance();
                        value.push(quote);
                    } else {
                        break;
                    }
                }
                Some(c) => value.push(c),
                None => return Err(self.error(LexErrorKind::UnterminatedString)),
            }
        }
        Ok(value)
    }

    /// Scans `X'..'`.
    fn scan_hex_string(&mut self) -> Result<Token<'a>, LexError> {
        self.advance();
        self.advance();
        let digits_start = self.pos;
        self.advance_while(|c| c.is_ascii_hexdigit());
        let digits = &self.input[digits_start..self.pos];
        match self.advance() {
            Some('\'') => Ok(self.make_token(TokenKind::HexString(String::from(digits)))),
            Some(_) => {
                self.advance_while(|c| c != '\'');
                let text = String::from(&self.input[self.start..self.pos]);
                Err(self.error(LexErrorKind::InvalidNumber(text)))
            }
            None => Err(self.error(LexErrorKind::UnterminatedString)),
        }
    }

    /// Scans an integer, decimal or scientific-notation number.
    fn scan_number(&mut self) -> Result<Token<'a>, LexError> {
        if self.peek() == Some('0') && matches!(self.peek_next(), Some('x' | 'X')) {
            return self.scan_hex_number();
        }

        let mut is_decimal = false;
        let mut is_float = false;

        self.advance_while(|c| c.is_ascii_digit());

        if self.peek() == Some('.') && !self.peek_next().is_some_and(is_identifier_start) {
            is_decimal = true;
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let mut rest = self.input[self.pos..].chars().skip(1);
            let exponent_follows = match rest.next() {
                Some('+' | '-') => rest.next().is_some_and(|c| c.is_ascii_digit()),
                Some(c) => c.is_ascii_digit(),
                None => false,
            };
            if exponent_follows {
                is_float = true;
                self.advance();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.advance();
                }
                self.advance_while(|c| c.is_ascii_digit());
            }
        }

        if self.peek().is_some_and(is_identifier_part) {
            self.advance_while(is_identifier_part);
            let text = String::from(&self.input[self.start..self.pos]);
            return Err(self.error(LexErrorKind::InvalidNumber(text)));
        }

        let text = &self.input[self.start..self.pos];
        let kind = if is_float {
            TokenKind::Float(String::from(text))
        } else if is_decimal {
            TokenKind::Decimal(String::from(text))
        } else {
            match text.parse::<i128>() {
                Ok(value) => TokenKind::Integer(value),
                Err(_) => TokenKind::Decimal(String::from(text)),
            }
        };
        Ok(self.make_token(kind))
    }

    fn scan_hex_number(&mut self) -> Result<Token<'a>, LexError> {
        self.advance();
        self.advance();
        let digits_start = self.pos;
        self.advance_while(|c| c.is_ascii_hexdigit());
        let digits = &self.input[digits_start..self.pos];
        if digits.is_empty() || self.peek().is_some_and(is_identifier_part) {
            self.advance_while(is_identifier_part);
            let text = String::from(&self.input[self.start..self.pos]);
            return Err(self.error(LexErrorKind::InvalidNumber(text)));
        }
        match i128::from_str_radix(digits, 16) {
            Ok(value) => Ok(self.make_token(TokenKind::Integer(value))),
            Err(_) => {
                let text = String::from(&self.input[self.start..self.pos]);
                Err(self.error(LexErrorKind::InvalidNumber(text)))
            }
        }
    }

    /// Scans `@user_var`, `@'quoted'` or `@@[scope.]system_var`.
    fn scan_variable(&mut self) -> Result<Token<'a>, LexError> {
        self.advance();
        if let Some(quote @ ('\'' | '"' | '`')) = self.peek() {
            let name = self.read_quoted(quote)?;
            return Ok(self.make_token(TokenKind::UserVariable(name)));
        }
        let system = self.peek() == Some('@');
        if system {
            self.advance();
        }
        let name_start = self.pos;
        self.advance_while(|c| is_identifier_part(c) || (system && c == '.'));
        let name = &self.input[name_start..self.pos];
        if name.is_empty() {
            return Err(self.error(LexErrorKind::UnexpectedCharacter('@')));
        }
        let name = String::from(name);
        Ok(self.make_token(if system {
            TokenKind::SystemVariable(name)
        } else {
            TokenKind::UserVariable(name)
        }))
    }

    /// Scans operators and punctuation.
    fn scan_operator(&mut self, c: char) -> Result<Token<'a>, LexError> {
        self.advance();
        let next = self.peek();
        let kind = match (c, next) {
            ('/', Some('*')) => {
                self.advance();
                self.advance();
                self.in_hint = true;
                TokenKind::HintStart
            }
            ('*', Some('/')) if self.in_hint => {
                self.advance();
                self.in_hint = false;
                TokenKind::HintEnd
            }
            ('<', Some('=')) => {
                self.advance();
                if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::NullSafeEq
                } else {
                    TokenKind::LtEq
                }
            }
            ('<', Some('>')) | ('!', Some('=')) => {
                self.advance();
                TokenKind::NotEq
            }
            ('>', Some('=')) => {
                self.advance();
                TokenKind::GtEq
            }
            ('&', Some('&')) => {
                self.advance();
                TokenKind::DoubleAmpersand
            }
            ('|', Some('|')) => {
                self.advance();
                TokenKind::DoublePipe
            }
            ('-', Some('>')) => {
                self.advance();
                TokenKind::Arrow
            }
            ('=', Some('=')) => {
                self.advance();
                TokenKind::Eq
            }
            ('=', _) => TokenKind::Eq,
            ('<', _) => TokenKind::Lt,
            ('>', _) => TokenKind::Gt,
            ('+', _) => TokenKind::Plus,
            ('-', _) => TokenKind::Minus,
            ('*', _) => TokenKind::Star,
            ('/', _) => TokenKind::Slash,
            ('%', _) => TokenKind::Percent,
            ('&', _) => TokenKind::Ampersand,
            ('|', _) => TokenKind::Pipe,
            ('^', _) => TokenKind::Caret,
            ('~', _) => TokenKind::Tilde,
            ('!', _) => TokenKind::Bang,
            ('?', _) => TokenKind::Placeholder,
            ('.', _) => TokenKind::Dot,
            (',', _) => TokenKind::Comma,
            (';', _) => TokenKind::Semicolon,
            (':', _) => TokenKind::Colon,
            ('(', _) => TokenKind::LeftParen,
            (')', _) => TokenKind::RightParen,
            ('[', _) => TokenKind::LeftBracket,
            (']', _) => TokenKind::RightBracket,
            ('{', _) => TokenKind::LeftBrace,
            ('}', _) => TokenKind::RightBrace,
            (other, _) => return Err(self.error(LexErrorKind::UnexpectedCharacter(other))),
        };
        Ok(self.make_token(kind))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Tokenizes the whole input. The last token is always `Eof`.
///
/// # Errors
///
/// Returns the first `LexError` encountered.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Resolves a backslash escape. Unknown escapes keep their backslash so
/// regular-expression patterns pass through untouched.
fn push_escape(value: &mut String, escaped: char) {
    match escaped {
        '0' => value.push('\0'),
        'b' => value.push('\u{8}'),
        'n' => value.push('\n'),
        'r' => value.push('\r'),
        't' => value.push('\t'),
        'Z' => value.push('\u{1a}'),
        '\'' | '"' | '\\' => value.push(escaped),
        other => {
            value.push('\\');
            value.push(other);
        }
    }
}
