//! Tests for [`crate::Lexer`].

use crate::token::Token;
use crate::token::TokenKind;
use crate::Lexer;
use crate::Source;
use proptest::prelude::*;
use std::sync::Arc;

fn lexer(body: &str) -> Lexer {
    Lexer::new(Arc::new(Source::new(body)))
}

fn lex_one(body: &str) -> Token {
    lexer(body).advance().unwrap()
}

fn lex_error(body: &str) -> String {
    lexer(body).advance().unwrap_err().message().to_string()
}

fn lex_value(body: &str) -> String {
    lex_one(body).value.unwrap()
}

// =============================================================================
// Ignored tokens and positions
// =============================================================================

#[test]
fn skips_bom_whitespace_commas_and_comments() {
    let token = lex_one("\u{feff} \t,\n# comment\r\n  foo");
    assert_eq!(token.kind, TokenKind::Name);
    assert_eq!(token.value.as_deref(), Some("foo"));
    assert_eq!(token.line, 3);
    assert_eq!(token.column, 3);
    assert_eq!(token.start, 20);
    assert_eq!(token.end, 23);
}

#[test]
fn crlf_counts_as_one_line_terminator() {
    let mut lexer = lexer("a\r\nb\rc\nd");
    let lines: Vec<usize> = (0..4).map(|_| lexer.advance().unwrap().line).collect();
    assert_eq!(lines, vec![1, 2, 3, 4]);
}

#[test]
fn columns_count_characters_not_bytes() {
    let mut lexer = lexer("\"ü\" x");
    lexer.advance().unwrap();
    let token = lexer.advance().unwrap();
    assert_eq!(token.column, 5);
}

#[test]
fn lookahead_does_not_move_the_lexer() {
    let mut lexer = lexer("a # skipped\n b");
    let first = lexer.advance().unwrap();
    let peeked = lexer.lookahead().unwrap();
    assert_eq!(peeked.value.as_deref(), Some("b"));
    assert_eq!(lexer.token, first);
    assert_eq!(lexer.advance().unwrap(), peeked);
    assert_eq!(lexer.last_token, first);
}

#[test]
fn eof_repeats_once_reached() {
    let mut lexer = lexer("a");
    lexer.advance().unwrap();
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::Eof);
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::Eof);
    assert_eq!(lexer.lookahead().unwrap().kind, TokenKind::Eof);
}

#[test]
fn lexes_every_punctuator() {
    let mut lexer = lexer("! $ & ( ) ... : = @ [ ] { | }");
    let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
        let token = lexer.advance().unwrap();
        (token.kind != TokenKind::Eof).then_some(token.kind)
    })
    .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Bang,
            TokenKind::Dollar,
            TokenKind::Ampersand,
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
            TokenKind::Ellipsis,
            TokenKind::Colon,
            TokenKind::Equals,
            TokenKind::At,
            TokenKind::SquareBracketOpen,
            TokenKind::SquareBracketClose,
            TokenKind::CurlyBraceOpen,
            TokenKind::Pipe,
            TokenKind::CurlyBraceClose,
        ],
    );
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn string_escapes() {
    assert_eq!(lex_value(r#""simple""#), "simple");
    assert_eq!(lex_value(r#""quote \" slash \\ \/""#), "quote \" slash \\ /");
    assert_eq!(lex_value(r#""\b\f\n\r\t""#), "\u{8}\u{c}\n\r\t");
    assert_eq!(lex_value(r#""é""#), "é");
}

/// See
/// [String Value](https://spec.graphql.org/October2021/#sec-String-Value)
/// in the GraphQL spec.
#[test]
fn unicode_escapes_variable_width_and_surrogate_pairs() {
    assert_eq!(lex_value(r#""\u{1F600}""#), "😀");
    assert_eq!(lex_value(r#""😀""#), "😀");
    assert_eq!(lex_value(r#""\u{0}""#), "\u{0}");
}

#[test]
fn string_errors() {
    assert_eq!(lex_error("\"unterminated"), "Syntax Error: Unterminated string.");
    assert_eq!(lex_error("\"multi\nline\""), "Syntax Error: Unterminated string.");
    assert_eq!(
        lex_error(r#""bad \z""#),
        "Syntax Error: Invalid character escape sequence: '\\z'.",
    );
    assert_eq!(
        lex_error(r#""\u{110000}""#),
        "Syntax Error: Invalid Unicode escape sequence: '\\u{110000}'.",
    );
    assert_eq!(
        lex_error(r#""\u{}""#),
        "Syntax Error: Invalid Unicode escape sequence: '\\u{}'.",
    );
    assert_eq!(
        lex_error(r#""\uD83D""#),
        "Syntax Error: Invalid Unicode escape sequence: '\\uD83D'.",
    );
    assert_eq!(
        lex_error(r#""\uXYZW""#),
        "Syntax Error: Invalid Unicode escape sequence: '\\uXYZW'.",
    );
}

#[test]
fn block_strings_are_dedented() {
    let token = lex_one("\"\"\"\n    spans\n      multiple\n    lines\n\"\"\"");
    assert_eq!(token.kind, TokenKind::BlockStringValue);
    assert_eq!(token.value.as_deref(), Some("spans\n  multiple\nlines"));
}

#[test]
fn block_strings_keep_escapes_literal_except_triple_quote() {
    assert_eq!(lex_value(r#""""contains \""" and \n""""#), "contains \"\"\" and \\n");
}

#[test]
fn block_string_advances_line_count() {
    let mut lexer = lexer("\"\"\"a\nb\r\nc\"\"\" d");
    lexer.advance().unwrap();
    let token = lexer.advance().unwrap();
    assert_eq!((token.line, token.column), (3, 6));
}

#[test]
fn unterminated_block_string() {
    assert_eq!(lex_error("\"\"\"abc\"\""), "Syntax Error: Unterminated string.");
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn numbers() {
    let int = lex_one("-42");
    assert_eq!((int.kind, int.value.as_deref()), (TokenKind::IntValue, Some("-42")));
    let float = lex_one("1.5e-10");
    assert_eq!(float.kind, TokenKind::FloatValue);
    assert_eq!(float.value.as_deref(), Some("1.5e-10"));
    assert_eq!(lex_one("0").kind, TokenKind::IntValue);
    assert_eq!(lex_one("0.0").kind, TokenKind::FloatValue);
    assert_eq!(lex_one("2E3").kind, TokenKind::FloatValue);
}

#[test]
fn number_errors() {
    assert_eq!(
        lex_error("00"),
        "Syntax Error: Invalid number, unexpected digit after 0: '0'.",
    );
    assert_eq!(
        lex_error("1."),
        "Syntax Error: Invalid number, expected digit but got: <EOF>.",
    );
    assert_eq!(
        lex_error("1.0e"),
        "Syntax Error: Invalid number, expected digit but got: <EOF>.",
    );
    assert_eq!(
        lex_error("1a"),
        "Syntax Error: Invalid number, expected digit but got: 'a'.",
    );
    assert_eq!(
        lex_error("1.2.3"),
        "Syntax Error: Invalid number, expected digit but got: '.'.",
    );
    assert_eq!(
        lex_error("-x"),
        "Syntax Error: Invalid number, expected digit but got: 'x'.",
    );
}

// =============================================================================
// Invalid characters
// =============================================================================

#[test]
fn unexpected_characters() {
    assert_eq!(
        lex_error("'"),
        "Syntax Error: Unexpected single quote character ('), did you mean to use a double quote (\")?",
    );
    assert_eq!(lex_error(".."), "Syntax Error: Unexpected character: '.'.");
    assert_eq!(lex_error("?"), "Syntax Error: Unexpected character: '?'.");
    assert_eq!(lex_error("\u{7}"), "Syntax Error: Unexpected character: U+0007.");
    assert_eq!(lex_error("\u{203B}"), "Syntax Error: Unexpected character: U+203B.");
}

#[test]
fn syntax_error_location_points_at_offending_character() {
    let err = lexer("\n\n    ?").advance().unwrap_err();
    assert_eq!(err.locations()[0].line, 3);
    assert_eq!(err.locations()[0].column, 5);
    assert_eq!(err.positions(), &[6]);
}

// =============================================================================
// Properties
// =============================================================================

fn token_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[_A-Za-z][_0-9A-Za-z]{0,6}",
        "-?(0|[1-9][0-9]{0,4})",
        "-?(0|[1-9][0-9]{0,2})\\.[0-9]{1,3}([eE][+-]?[0-9]{1,2})?",
        "\"[a-z 0-9]{0,6}\"",
        "\"\"\"[a-z \n]{0,6}\"\"\"",
        prop::sample::select(vec![
            "!", "$", "&", "(", ")", "...", ":", "=", "@", "[", "]", "{", "|", "}",
        ])
        .prop_map(str::to_string),
    ]
}

fn ignored_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![" ", "\t", ",", "\n", "\r\n", "\r", "# note\n"]),
        1..3,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    /// Every significant token's span is exactly the text it was lexed
    /// from; everything between spans is ignored.
    #[test]
    fn token_spans_cover_the_source_minus_ignored_tokens(
        parts in prop::collection::vec((ignored_text(), token_text()), 0..12),
        trailing in ignored_text(),
    ) {
        let body = parts
            .iter()
            .map(|(ignored, token)| format!("{ignored}{token}"))
            .collect::<String>()
            + &trailing;

        let mut lexer = lexer(&body);
        let mut spans = vec![];
        loop {
            let token = lexer.advance().unwrap();
            if token.kind == TokenKind::Eof {
                prop_assert_eq!(token.end, body.len());
                break;
            }
            spans.push(body[token.start..token.end].to_string());
        }
        let expected = parts.into_iter().map(|(_, token)| token).collect::<Vec<_>>();
        prop_assert_eq!(spans, expected);
    }
}
