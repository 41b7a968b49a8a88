//! Tests for block string dedenting and printing.

use crate::dedent_block_string_lines;
use crate::is_printable_as_block_string;
use crate::print_block_string;
use crate::token::TokenKind;
use crate::Lexer;
use crate::Source;
use proptest::prelude::*;
use std::sync::Arc;

fn lex_block_string(printed: &str) -> String {
    let mut lexer = Lexer::new(Arc::new(Source::new(printed)));
    let token = lexer.advance().unwrap();
    assert_eq!(token.kind, TokenKind::BlockStringValue);
    token.value.unwrap()
}

// =============================================================================
// Dedenting
// =============================================================================

#[test]
fn removes_common_indentation_except_first_line() {
    assert_eq!(
        dedent_block_string_lines(&["  first", "    second", "      third"]),
        vec!["  first", "second", "  third"],
    );
}

#[test]
fn drops_leading_and_trailing_blank_lines() {
    assert_eq!(
        dedent_block_string_lines(&["", "  ", "    a", "  \t", "", ""]),
        vec!["a"],
    );
}

#[test]
fn whitespace_only_lines_do_not_set_the_indent() {
    assert_eq!(
        dedent_block_string_lines(&["", "    a", " ", "    b"]),
        vec!["a", "", "b"],
    );
}

#[test]
fn tabs_count_as_indentation() {
    assert_eq!(dedent_block_string_lines(&["", "\t\ta", "\tb"]), vec!["\ta", "b"]);
}

#[test]
fn all_blank_lines_dedent_to_nothing() {
    assert!(dedent_block_string_lines(&["", "   ", "\t"]).is_empty());
    assert!(dedent_block_string_lines::<&str>(&[]).is_empty());
}

// =============================================================================
// Printing
// =============================================================================

#[test]
fn printability() {
    assert!(is_printable_as_block_string(""));
    assert!(is_printable_as_block_string("one line"));
    assert!(is_printable_as_block_string("a\n  b"));
    assert!(!is_printable_as_block_string("\nleading newline"));
    assert!(!is_printable_as_block_string("trailing newline\n"));
    assert!(!is_printable_as_block_string("a\r\nb"));
    assert!(!is_printable_as_block_string("control \u{1}"));
    assert!(!is_printable_as_block_string(" a\n b"));
}

#[test]
fn prints_single_and_multiple_lines() {
    assert_eq!(print_block_string("short", false), "\"\"\"short\"\"\"");
    assert_eq!(print_block_string("a\nb", false), "\"\"\"\na\nb\n\"\"\"");
    assert_eq!(print_block_string("a\nb", true), "\"\"\"a\nb\"\"\"");
    assert_eq!(print_block_string("  indented", false), "\"\"\"  indented\"\"\"");
}

#[test]
fn escapes_triple_quotes() {
    assert_eq!(
        print_block_string("has \"\"\" inside", false),
        "\"\"\"has \\\"\"\" inside\"\"\"",
    );
}

#[test]
fn trailing_quote_or_backslash_forces_newline() {
    assert_eq!(print_block_string("ends with \"", true), "\"\"\"ends with \"\n\"\"\"");
    assert_eq!(print_block_string("ends with \\", true), "\"\"\"ends with \\\n\"\"\"");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Once the first line is non-blank, the remaining lines already share
    /// no indentation after one pass, so a second pass changes nothing.
    #[test]
    fn dedent_is_idempotent(
        first in "[a-c][ a-c]{0,4}",
        rest in prop::collection::vec("[ \t]{0,3}[a-c ]{0,4}", 0..6),
    ) {
        let mut lines = vec![first];
        lines.extend(rest);
        let once = dedent_block_string_lines(&lines);
        let twice = dedent_block_string_lines(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn printable_values_survive_print_then_lex(value in "[a-c \n\"\\\\]{0,16}") {
        prop_assume!(is_printable_as_block_string(&value));
        for minimize in [false, true] {
            let printed = print_block_string(&value, minimize);
            prop_assert_eq!(&lex_block_string(&printed), &value);
        }
    }
}
