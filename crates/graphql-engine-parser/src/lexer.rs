use crate::block_string::dedent_block_string_lines;
use crate::token::Token;
use crate::token::TokenKind;
use crate::GraphQLError;
use crate::Result;
use crate::Source;
use memchr::memchr2;
use std::collections::VecDeque;
use std::sync::Arc;

/// Converts a [`Source`] into a stream of [`Token`]s.
///
/// The lexer is lazy: each call to [`advance`](Lexer::advance) scans just
/// far enough to produce the next significant token. Comments are lexed
/// but skipped by both `advance` and [`lookahead`](Lexer::lookahead).
///
/// Positions are tracked incrementally with `\r\n`, `\n` and `\r` each
/// counting as one line terminator, so every token knows its 1-based line
/// and column without rescanning the source.
pub struct Lexer {
    source: Arc<Source>,
    /// The previously focused non-comment token.
    pub last_token: Token,
    /// The currently focused non-comment token.
    pub token: Token,
    /// Tokens scanned by `lookahead` but not yet consumed by `advance`.
    pending: VecDeque<Token>,
    curr_byte_offset: usize,
    curr_line: usize,
    curr_col: usize,
    last_char_was_cr: bool,
}

impl Lexer {
    pub fn new(source: Arc<Source>) -> Self {
        let sof = Token {
            kind: TokenKind::Sof,
            start: 0,
            end: 0,
            line: 0,
            column: 0,
            value: None,
        };
        Self {
            source,
            last_token: sof.clone(),
            token: sof,
            pending: VecDeque::new(),
            curr_byte_offset: 0,
            curr_line: 1,
            curr_col: 1,
            last_char_was_cr: false,
        }
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    /// Moves to the next non-comment token and returns it. Once the end of
    /// the document is reached, keeps returning the EOF token.
    pub fn advance(&mut self) -> Result<Token> {
        self.last_token = self.token.clone();
        if self.token.kind != TokenKind::Eof {
            self.token = loop {
                let next = match self.pending.pop_front() {
                    Some(token) => token,
                    None => self.read_next_token()?,
                };
                if next.kind != TokenKind::Comment {
                    break next;
                }
            };
        }
        Ok(self.token.clone())
    }

    /// Returns the next non-comment token without moving the lexer.
    pub fn lookahead(&mut self) -> Result<Token> {
        if self.token.kind == TokenKind::Eof {
            return Ok(self.token.clone());
        }
        let mut idx = 0;
        loop {
            if idx == self.pending.len() {
                let token = self.read_next_token()?;
                self.pending.push_back(token);
            }
            if self.pending[idx].kind != TokenKind::Comment {
                return Ok(self.pending[idx].clone());
            }
            idx += 1;
        }
    }

    // =========================================================================
    // Character cursor
    // =========================================================================

    fn remaining(&self) -> &str {
        &self.source.body()[self.curr_byte_offset..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Consumes one character, updating line and column. A `\n` directly
    /// after a `\r` does not start another line.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.curr_byte_offset += ch.len_utf8();
        match ch {
            '\r' => {
                self.curr_line += 1;
                self.curr_col = 1;
                self.last_char_was_cr = true;
            },
            '\n' => {
                if !self.last_char_was_cr {
                    self.curr_line += 1;
                }
                self.curr_col = 1;
                self.last_char_was_cr = false;
            },
            _ => {
                self.curr_col += 1;
                self.last_char_was_cr = false;
            },
        }
        Some(ch)
    }

    fn consume_n(&mut self, n: usize) {
        for _ in 0..n {
            self.consume();
        }
    }

    fn make_token(
        &self,
        kind: TokenKind,
        start: usize,
        line: usize,
        column: usize,
        value: Option<String>,
    ) -> Token {
        Token {
            kind,
            start,
            end: self.curr_byte_offset,
            line,
            column,
            value,
        }
    }

    fn error_at(&self, position: usize, description: impl std::fmt::Display) -> GraphQLError {
        GraphQLError::syntax_error(&self.source, position, description)
    }

    /// `'x'` for printable ASCII, `U+XXXX` otherwise, `<EOF>` past the end.
    fn describe_char_at(&self, position: usize) -> String {
        match self.source.body().get(position..).and_then(|s| s.chars().next()) {
            None => TokenKind::Eof.description().to_string(),
            Some('"') => "'\"'".to_string(),
            Some(ch @ '\u{20}'..='\u{7e}') => format!("'{ch}'"),
            Some(ch) => format!("U+{:04X}", ch as u32),
        }
    }

    // =========================================================================
    // Token dispatch
    // =========================================================================

    fn read_next_token(&mut self) -> Result<Token> {
        loop {
            let start = self.curr_byte_offset;
            let line = self.curr_line;
            let column = self.curr_col;

            let Some(ch) = self.peek_char() else {
                return Ok(self.make_token(TokenKind::Eof, start, line, column, None));
            };

            let punctuator = match ch {
                '\u{feff}' | '\t' | ' ' | ',' | '\n' | '\r' => {
                    self.consume();
                    continue;
                },
                '#' => return Ok(self.lex_comment(start, line, column)),
                '!' => TokenKind::Bang,
                '$' => TokenKind::Dollar,
                '&' => TokenKind::Ampersand,
                '(' => TokenKind::ParenOpen,
                ')' => TokenKind::ParenClose,
                '.' => {
                    if self.starts_with("...") {
                        self.consume_n(3);
                        return Ok(self.make_token(TokenKind::Ellipsis, start, line, column, None));
                    }
                    return Err(self.lex_invalid_character(start));
                },
                ':' => TokenKind::Colon,
                '=' => TokenKind::Equals,
                '@' => TokenKind::At,
                '[' => TokenKind::SquareBracketOpen,
                ']' => TokenKind::SquareBracketClose,
                '{' => TokenKind::CurlyBraceOpen,
                '|' => TokenKind::Pipe,
                '}' => TokenKind::CurlyBraceClose,
                '"' => {
                    if self.starts_with("\"\"\"") {
                        return self.lex_block_string(start, line, column);
                    }
                    return self.lex_string(start, line, column);
                },
                c if is_name_start(c) => return Ok(self.lex_name(start, line, column)),
                c if c.is_ascii_digit() || c == '-' => {
                    return self.lex_number(start, line, column);
                },
                _ => return Err(self.lex_invalid_character(start)),
            };

            self.consume();
            return Ok(self.make_token(punctuator, start, line, column, None));
        }
    }

    fn lex_invalid_character(&self, position: usize) -> GraphQLError {
        if self.source.body()[position..].starts_with('\'') {
            return self.error_at(
                position,
                "Unexpected single quote character ('), did you mean to use a double quote (\")?",
            );
        }
        self.error_at(
            position,
            format!("Unexpected character: {}.", self.describe_char_at(position)),
        )
    }

    // =========================================================================
    // Comments and names
    // =========================================================================

    fn lex_comment(&mut self, start: usize, line: usize, column: usize) -> Token {
        self.consume();
        let rest = self.remaining();
        let len = memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let value = rest[..len].to_string();
        self.curr_col += value.chars().count();
        self.curr_byte_offset += len;
        self.last_char_was_cr = false;
        self.make_token(TokenKind::Comment, start, line, column, Some(value))
    }

    fn lex_name(&mut self, start: usize, line: usize, column: usize) -> Token {
        while matches!(self.peek_char(), Some(c) if is_name_continue(c)) {
            self.consume();
        }
        let value = self.source.body()[start..self.curr_byte_offset].to_string();
        self.make_token(TokenKind::Name, start, line, column, Some(value))
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    fn lex_number(&mut self, start: usize, line: usize, column: usize) -> Result<Token> {
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        if self.peek_char() == Some('0') {
            self.consume();
            if matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                let position = self.curr_byte_offset;
                return Err(self.error_at(
                    position,
                    format!(
                        "Invalid number, unexpected digit after 0: {}.",
                        self.describe_char_at(position),
                    ),
                ));
            }
        } else {
            self.lex_digits()?;
        }

        if self.peek_char() == Some('.') {
            is_float = true;
            self.consume();
            self.lex_digits()?;
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            self.lex_digits()?;
        }

        // Numbers cannot be directly followed by a dot or a name start.
        if matches!(self.peek_char(), Some(c) if c == '.' || is_name_start(c)) {
            return Err(self.expected_digit_error());
        }

        let raw = self.source.body()[start..self.curr_byte_offset].to_string();
        let kind = if is_float {
            TokenKind::FloatValue
        } else {
            TokenKind::IntValue
        };
        Ok(self.make_token(kind, start, line, column, Some(raw)))
    }

    fn lex_digits(&mut self) -> Result<()> {
        if !matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            return Err(self.expected_digit_error());
        }
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            self.consume();
        }
        Ok(())
    }

    fn expected_digit_error(&self) -> GraphQLError {
        let position = self.curr_byte_offset;
        self.error_at(
            position,
            format!(
                "Invalid number, expected digit but got: {}.",
                self.describe_char_at(position),
            ),
        )
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&mut self, start: usize, line: usize, column: usize) -> Result<Token> {
        self.consume();
        let mut value = String::new();
        loop {
            match self.peek_char() {
                None | Some('\n' | '\r') => {
                    return Err(self.error_at(self.curr_byte_offset, "Unterminated string."));
                },
                Some('"') => {
                    self.consume();
                    return Ok(self.make_token(
                        TokenKind::StringValue,
                        start,
                        line,
                        column,
                        Some(value),
                    ));
                },
                Some('\\') => {
                    let (ch, size) = self.parse_escape(self.curr_byte_offset)?;
                    value.push(ch);
                    self.consume_n(size);
                },
                Some(ch) => {
                    value.push(ch);
                    self.consume();
                },
            }
        }
    }

    /// Decodes the escape sequence starting at the backslash at `position`.
    /// Returns the decoded character and the sequence length in bytes.
    fn parse_escape(&self, position: usize) -> Result<(char, usize)> {
        let rest = &self.source.body()[position..];
        let bytes = rest.as_bytes();
        let simple = match bytes.get(1) {
            Some(b'u') if bytes.get(2) == Some(&b'{') => {
                return self.parse_variable_width_unicode_escape(position, rest);
            },
            Some(b'u') => return self.parse_fixed_width_unicode_escape(position, rest),
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{8}',
            Some(b'f') => '\u{c}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            _ => {
                return Err(self.error_at(
                    position,
                    format!(
                        "Invalid character escape sequence: '{}'.",
                        rest.chars().take(2).collect::<String>(),
                    ),
                ));
            },
        };
        Ok((simple, 2))
    }

    fn parse_variable_width_unicode_escape(
        &self,
        position: usize,
        rest: &str,
    ) -> Result<(char, usize)> {
        let bytes = rest.as_bytes();
        let mut point: u32 = 0;
        let mut size = 3;
        // At most eight hex digits: `\u{00000000}`.
        while size < 12 {
            let byte = bytes.get(size).copied();
            size += 1;
            if byte == Some(b'}') {
                if size < 5 {
                    break;
                }
                match char::from_u32(point) {
                    Some(ch) => return Ok((ch, size)),
                    None => break,
                }
            }
            match byte.and_then(|b| char::from(b).to_digit(16)) {
                Some(digit) => point = (point << 4) | digit,
                None => break,
            }
        }
        Err(self.error_at(
            position,
            format!(
                "Invalid Unicode escape sequence: '{}'.",
                rest.chars().take(size).collect::<String>(),
            ),
        ))
    }

    fn parse_fixed_width_unicode_escape(
        &self,
        position: usize,
        rest: &str,
    ) -> Result<(char, usize)> {
        let bytes = rest.as_bytes();
        if let Some(code) = read_hex4(bytes, 2) {
            if let Some(ch) = char::from_u32(code) {
                return Ok((ch, 6));
            }
            // JSON-style surrogate pairs are accepted when they form a
            // valid pair.
            if (0xD800..=0xDBFF).contains(&code)
                && bytes.get(6) == Some(&b'\\')
                && bytes.get(7) == Some(&b'u')
            {
                if let Some(trailing) = read_hex4(bytes, 8).filter(|t| (0xDC00..=0xDFFF).contains(t)) {
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (trailing - 0xDC00);
                    if let Some(ch) = char::from_u32(combined) {
                        return Ok((ch, 12));
                    }
                }
            }
        }
        Err(self.error_at(
            position,
            format!(
                "Invalid Unicode escape sequence: '{}'.",
                rest.chars().take(6).collect::<String>(),
            ),
        ))
    }

    fn lex_block_string(&mut self, start: usize, line: usize, column: usize) -> Result<Token> {
        self.consume_n(3);
        let mut block_lines: Vec<String> = vec![];
        let mut current_line = String::new();
        loop {
            match self.peek_char() {
                None => {
                    return Err(self.error_at(self.curr_byte_offset, "Unterminated string."));
                },
                Some('"') if self.starts_with("\"\"\"") => {
                    self.consume_n(3);
                    block_lines.push(current_line);
                    let value = dedent_block_string_lines(&block_lines).join("\n");
                    return Ok(self.make_token(
                        TokenKind::BlockStringValue,
                        start,
                        line,
                        column,
                        Some(value),
                    ));
                },
                Some('\\') if self.starts_with("\\\"\"\"") => {
                    current_line.push_str("\"\"\"");
                    self.consume_n(4);
                },
                Some('\n') => {
                    block_lines.push(std::mem::take(&mut current_line));
                    self.consume();
                },
                Some('\r') => {
                    block_lines.push(std::mem::take(&mut current_line));
                    self.consume();
                    if self.peek_char() == Some('\n') {
                        self.consume();
                    }
                },
                Some(ch) => {
                    current_line.push(ch);
                    self.consume();
                },
            }
        }
    }
}

fn read_hex4(bytes: &[u8], at: usize) -> Option<u32> {
    let digits = bytes.get(at..at + 4)?;
    digits.iter().try_fold(0u32, |acc, b| {
        char::from(*b).to_digit(16).map(|d| (acc << 4) | d)
    })
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
