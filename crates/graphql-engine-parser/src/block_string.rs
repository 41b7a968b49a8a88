//! Block string (`"""`) value handling.
//!
//! See
//! [Block Strings](https://spec.graphql.org/October2021/#sec-String-Value.Block-Strings)
//! in the GraphQL specification.

use crate::source::split_lines;

/// Removes the common indentation of every line but the first, then drops
/// leading and trailing blank lines.
///
/// Only spaces and tabs count as indentation; a line consisting solely of
/// them is blank.
pub fn dedent_block_string_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut common_indent = usize::MAX;
    let mut first_non_empty_line = None;
    let mut last_non_empty_line = None;

    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let indent = leading_whitespace(line);
        if indent == line.len() {
            continue;
        }
        first_non_empty_line.get_or_insert(idx);
        last_non_empty_line = Some(idx);
        if idx != 0 && indent < common_indent {
            common_indent = indent;
        }
    }

    let (Some(first), Some(last)) = (first_non_empty_line, last_non_empty_line) else {
        return vec![];
    };

    lines[first..=last]
        .iter()
        .enumerate()
        .map(|(offset, line)| {
            let line = line.as_ref();
            if first + offset == 0 {
                line.to_string()
            } else {
                line.get(common_indent..).unwrap_or_default().to_string()
            }
        })
        .collect()
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count()
}

fn is_whitespace(c: Option<char>) -> bool {
    matches!(c, Some(' ' | '\t'))
}

/// Whether `value` survives a print-then-parse round trip as a block
/// string.
pub fn is_printable_as_block_string(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }

    let mut is_empty_line = true;
    let mut has_indent = false;
    let mut has_common_indent = true;
    let mut seen_non_empty_line = false;

    for ch in value.chars() {
        match ch {
            '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' => return false,
            '\r' => return false,
            '\n' => {
                if is_empty_line && !seen_non_empty_line {
                    return false;
                }
                seen_non_empty_line = true;
                is_empty_line = true;
                has_indent = false;
            },
            '\t' | ' ' => has_indent = has_indent || is_empty_line,
            _ => {
                has_common_indent = has_common_indent && has_indent;
                is_empty_line = false;
            },
        }
    }

    if is_empty_line {
        return false;
    }
    if has_common_indent && seen_non_empty_line {
        return false;
    }
    true
}

/// Prints `value` as a `"""` block string.
///
/// With `minimize` the output avoids optional newlines.
pub fn print_block_string(value: &str, minimize: bool) -> String {
    let escaped = value.replace("\"\"\"", "\\\"\"\"");
    let lines = split_lines(&escaped);
    let is_single_line = lines.len() == 1;

    let force_leading_new_line = lines.len() > 1
        && lines[1..]
            .iter()
            .all(|line| line.is_empty() || is_whitespace(line.chars().next()));

    let has_trailing_triple_quotes = escaped.ends_with("\\\"\"\"");
    let has_trailing_quote = value.ends_with('"') && !has_trailing_triple_quotes;
    let has_trailing_slash = value.ends_with('\\');
    let force_trailing_newline = has_trailing_quote || has_trailing_slash;

    let print_as_multiple_lines = !minimize
        && (!is_single_line
            || value.chars().count() > 70
            || force_trailing_newline
            || force_leading_new_line
            || has_trailing_triple_quotes);

    let mut result = String::new();
    let skip_leading_new_line = is_single_line && is_whitespace(value.chars().next());
    if (print_as_multiple_lines && !skip_leading_new_line) || force_leading_new_line {
        result.push('\n');
    }
    result.push_str(&escaped);
    if print_as_multiple_lines || force_trailing_newline {
        result.push('\n');
    }

    format!("\"\"\"{result}\"\"\"")
}
