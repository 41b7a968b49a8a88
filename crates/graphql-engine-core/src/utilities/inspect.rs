use crate::Value;

const MAX_ARRAY_LENGTH: usize = 10;
const MAX_RECURSIVE_DEPTH: usize = 2;

/// Renders a value for use inside error messages.
///
/// Strings are quoted, lists and objects are abbreviated past a small
/// nesting depth and lists are truncated after ten items, so messages stay
/// readable whatever the input.
pub fn inspect(value: &Value) -> String {
    format_value(value, 0)
}

fn format_value(value: &Value, depth: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (None, Some(u), _) => u.to_string(),
            (None, None, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => quote(s),
        Value::Array(items) => format_array(items, depth + 1),
        Value::Object(obj) => {
            if obj.is_empty() {
                return "{}".to_string();
            }
            if depth + 1 > MAX_RECURSIVE_DEPTH {
                return "[Object]".to_string();
            }
            let properties = obj
                .iter()
                .map(|(key, value)| format!("{key}: {}", format_value(value, depth + 1)))
                .collect::<Vec<_>>();
            format!("{{ {} }}", properties.join(", "))
        },
    }
}

fn format_array(items: &[Value], seen: usize) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    if seen > MAX_RECURSIVE_DEPTH {
        return "[Array]".to_string();
    }
    let len = items.len().min(MAX_ARRAY_LENGTH);
    let mut formatted = items[..len]
        .iter()
        .map(|item| format_value(item, seen))
        .collect::<Vec<_>>();
    match items.len() - len {
        0 => {},
        1 => formatted.push("... 1 more item".to_string()),
        remaining => formatted.push(format!("... {remaining} more items")),
    }
    format!("[{}]", formatted.join(", "))
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}
