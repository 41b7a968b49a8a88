//! Lexical tokens produced by [`Lexer`](crate::Lexer).

use std::fmt;

/// The kind of a lexical token.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    // =========================================================================
    // Document boundaries
    // =========================================================================
    /// Start of file; the lexer's initial token.
    Sof,
    /// End of file. Once reached, advancing keeps returning it.
    Eof,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Valued tokens
    // =========================================================================
    Name,
    IntValue,
    FloatValue,
    StringValue,
    BlockStringValue,
    /// `# ...` up to the end of the line. Never returned by
    /// [`Lexer::advance`](crate::Lexer::advance).
    Comment,
}

impl TokenKind {
    /// How the kind reads in syntax error messages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Sof => "<SOF>",
            Self::Eof => "<EOF>",
            Self::Ampersand => "&",
            Self::At => "@",
            Self::Bang => "!",
            Self::Colon => ":",
            Self::CurlyBraceClose => "}",
            Self::CurlyBraceOpen => "{",
            Self::Dollar => "$",
            Self::Ellipsis => "...",
            Self::Equals => "=",
            Self::ParenClose => ")",
            Self::ParenOpen => "(",
            Self::Pipe => "|",
            Self::SquareBracketClose => "]",
            Self::SquareBracketOpen => "[",
            Self::Name => "Name",
            Self::IntValue => "Int",
            Self::FloatValue => "Float",
            Self::StringValue => "String",
            Self::BlockStringValue => "BlockString",
            Self::Comment => "Comment",
        }
    }

    pub fn is_punctuator(&self) -> bool {
        matches!(
            self,
            Self::Ampersand
                | Self::At
                | Self::Bang
                | Self::Colon
                | Self::CurlyBraceClose
                | Self::CurlyBraceOpen
                | Self::Dollar
                | Self::Ellipsis
                | Self::Equals
                | Self::ParenClose
                | Self::ParenOpen
                | Self::Pipe
                | Self::SquareBracketClose
                | Self::SquareBracketOpen
        )
    }
}

impl fmt::Display for TokenKind {
    /// Punctuators are quoted (`'{'`); other kinds print bare (`Name`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_punctuator() {
            write!(f, "'{}'", self.description())
        } else {
            f.write_str(self.description())
        }
    }
}

/// A token with its byte range, 1-based position, and (for names, numbers,
/// strings and comments) its value.
///
/// String values are cooked: escapes are resolved and block strings are
/// dedented.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
    pub value: Option<String>,
}

impl Token {
    /// How the token reads in syntax error messages, e.g. `Name 'foo'`.
    pub fn description(&self) -> String {
        match &self.value {
            Some(value) => format!("{} '{}'", self.kind, value),
            None => self.kind.to_string(),
        }
    }
}
