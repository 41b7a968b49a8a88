use crate::ast::Loc;
use crate::source::split_lines;
use crate::Source;
use crate::SourceLocation;

/// Renders the source excerpt around `loc` the way diagnostics show it.
pub fn print_location(loc: &Loc) -> String {
    print_source_location(&loc.source, loc.source_location())
}

/// Renders `name:line:column` followed by the previous, current and next
/// line of `source` with a caret under the column.
///
/// The source's `location_offset` shifts the printed line number, and the
/// column too when the location is on the first line. Lines longer than
/// 120 characters are broken into 80-column chunks.
pub fn print_source_location(source: &Source, location: SourceLocation) -> String {
    let offset = source.location_offset();
    let first_line_column_offset = offset.column - 1;
    let body = format!("{}{}", " ".repeat(first_line_column_offset), source.body());
    let line_index = location.line - 1;
    let line_num = location.line + offset.line - 1;
    let column_offset = if location.line == 1 {
        first_line_column_offset
    } else {
        0
    };
    let column_num = location.column + column_offset;
    let location_str = format!("{}:{}:{}\n", source.name(), line_num, column_num);

    let lines = split_lines(&body);
    let location_line = lines.get(line_index).copied().unwrap_or_default();

    if location_line.chars().count() > 120 {
        let sub_line_index = column_num / 80;
        let sub_line_column_num = column_num % 80;
        let chars: Vec<char> = location_line.chars().collect();
        let sub_lines: Vec<String> = chars
            .chunks(80)
            .map(|chunk| chunk.iter().collect())
            .collect();
        let mut rows: Vec<(String, Option<String>)> =
            vec![(format!("{line_num} |"), sub_lines.first().cloned())];
        for sub_line in sub_lines.iter().skip(1).take(sub_line_index) {
            rows.push(("|".to_string(), Some(sub_line.clone())));
        }
        rows.push(("|".to_string(), Some(caret(sub_line_column_num))));
        rows.push(("|".to_string(), sub_lines.get(sub_line_index + 1).cloned()));
        return location_str + &print_prefixed_lines(rows);
    }

    let previous = line_index
        .checked_sub(1)
        .and_then(|idx| lines.get(idx))
        .map(|line| line.to_string());
    let rows = vec![
        (format!("{} |", line_num.saturating_sub(1)), previous),
        (format!("{line_num} |"), Some(location_line.to_string())),
        ("|".to_string(), Some(caret(column_num))),
        (
            format!("{} |", line_num + 1),
            lines.get(line_index + 1).map(|line| line.to_string()),
        ),
    ];
    location_str + &print_prefixed_lines(rows)
}

fn caret(column: usize) -> String {
    format!("{:>width$}", "^", width = column.max(1))
}

fn print_prefixed_lines(rows: Vec<(String, Option<String>)>) -> String {
    let existing: Vec<(String, String)> = rows
        .into_iter()
        .filter_map(|(prefix, line)| line.map(|line| (prefix, line)))
        .collect();
    let pad_len = existing
        .iter()
        .map(|(prefix, _)| prefix.len())
        .max()
        .unwrap_or(0);
    existing
        .iter()
        .map(|(prefix, line)| {
            let mut row = format!("{prefix:>pad_len$}");
            if !line.is_empty() {
                row.push(' ');
                row.push_str(line);
            }
            row
        })
        .collect::<Vec<_>>()
        .join("\n")
}
